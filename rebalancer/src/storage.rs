use crate::constants::MIN_PROFIT_BPS_LOWER;
use access_control::errors::AccessControlError;
use access_control::role::Role;
use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
pub use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    LaunchToken,
    Dao,
    MinProfitBps,
    WithdrawLock, // legacy time lock, kept for compatibility. never consulted

    MeraFundProfit,
    PocRoyaltyProfit,
    PocBuybackProfit,
    GovernanceProfit,
}

generate_instance_storage_getter_and_setter_with_default!(
    min_profit_bps,
    DataKey::MinProfitBps,
    u32,
    MIN_PROFIT_BPS_LOWER
);
generate_instance_storage_getter_and_setter_with_default!(
    withdraw_lock,
    DataKey::WithdrawLock,
    u64,
    0
);

pub fn has_launch_token(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::LaunchToken)
}

pub fn get_launch_token(e: &Env) -> Address {
    bump_instance(e);
    match e.storage().instance().get(&DataKey::LaunchToken) {
        Some(v) => v,
        None => panic_with_error!(e, StorageError::ValueNotInitialized),
    }
}

pub fn put_launch_token(e: &Env, contract: &Address) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::LaunchToken, contract)
}

pub fn get_dao(e: &Env) -> Address {
    bump_instance(e);
    match e.storage().instance().get(&DataKey::Dao) {
        Some(v) => v,
        None => panic_with_error!(e, StorageError::ValueNotInitialized),
    }
}

pub fn put_dao(e: &Env, contract: &Address) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::Dao, contract)
}

fn profit_key(e: &Env, role: &Role) -> DataKey {
    match role {
        Role::MeraFund => DataKey::MeraFundProfit,
        Role::PocRoyalty => DataKey::PocRoyaltyProfit,
        Role::PocBuyback => DataKey::PocBuybackProfit,
        Role::Governance => DataKey::GovernanceProfit,
        _ => panic_with_error!(e, AccessControlError::BadRoleUsage),
    }
}

pub fn get_profit(e: &Env, role: &Role) -> u128 {
    bump_instance(e);
    e.storage()
        .instance()
        .get(&profit_key(e, role))
        .unwrap_or(0)
}

pub fn put_profit(e: &Env, role: &Role, value: &u128) {
    bump_instance(e);
    e.storage().instance().set(&profit_key(e, role), value)
}
