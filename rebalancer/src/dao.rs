use crate::storage::get_dao;
use soroban_sdk::{contracttype, symbol_short, Address, Env, IntoVal, Symbol, Vec};

// terminal lifecycle stage of the governance entity
pub(crate) const DAO_STAGE_DISSOLVED: u32 = 3;

#[derive(Clone, Debug)]
#[contracttype]
pub struct PocRecord {
    pub address: Address,
    pub active: bool,
}

// Any failed or malformed governance query collapses into this error and
// from there into the conservative answer. Business logic never sees it.
pub(crate) struct QueryError;

fn query_stage(e: &Env) -> Result<u32, QueryError> {
    let dao = get_dao(e);
    match e.try_invoke_contract::<u32, soroban_sdk::Error>(
        &dao,
        &symbol_short!("get_stage"),
        Vec::new(e),
    ) {
        Ok(Ok(stage)) => Ok(stage),
        _ => Err(QueryError),
    }
}

fn query_poc_record(e: &Env, poc: &Address) -> Result<PocRecord, QueryError> {
    let dao = get_dao(e);
    let index = match e.try_invoke_contract::<u32, soroban_sdk::Error>(
        &dao,
        &symbol_short!("poc_index"),
        Vec::from_array(e, [poc.to_val()]),
    ) {
        Ok(Ok(v)) => v,
        _ => return Err(QueryError),
    };
    match e.try_invoke_contract::<PocRecord, soroban_sdk::Error>(
        &dao,
        &Symbol::new(e, "poc_record"),
        Vec::from_array(e, [index.into_val(e)]),
    ) {
        Ok(Ok(v)) => Ok(v),
        _ => Err(QueryError),
    }
}

// True only when the governance entity reports its terminal stage.
// Fails closed: a reverting or missing DAO keeps the lock in place.
pub(crate) fn is_withdraw_unlocked(e: &Env) -> bool {
    match query_stage(e) {
        Ok(stage) => stage == DAO_STAGE_DISSOLVED,
        Err(QueryError) => false,
    }
}

// True only when the registry entry resolved through the two-step lookup
// is active and still points at the queried address.
pub(crate) fn is_approved_poc(e: &Env, poc: &Address) -> bool {
    match query_poc_record(e, poc) {
        Ok(record) => record.active && &record.address == poc,
        Err(QueryError) => false,
    }
}
