use crate::errors::RebalancerError;
use crate::types::SwapOperation;
use soroban_sdk::{panic_with_error, symbol_short, Address, Bytes, Env, IntoVal, Symbol, Vec};

pub const ROUTER_TYPE_TOKEN_LIST: Symbol = symbol_short!("tokens");
pub const ROUTER_TYPE_EXACT_IN: Symbol = symbol_short!("exactin");
pub const ROUTER_TYPE_EXACT_IN_2: Symbol = symbol_short!("exactin2");
pub const ROUTER_TYPE_MULTIHOP: Symbol = symbol_short!("multihop");

// encoded path layout: 56-byte strkey address, then repeated
// (4-byte big-endian fee, 56-byte strkey address) hops
const PATH_ADDRESS_LENGTH: u32 = 56;

fn is_encoded_path_router(protocol: &Symbol) -> bool {
    *protocol == ROUTER_TYPE_EXACT_IN
        || *protocol == ROUTER_TYPE_EXACT_IN_2
        || *protocol == ROUTER_TYPE_MULTIHOP
}

fn check_encoded_path(e: &Env, path: &Bytes) {
    if path.len() < PATH_ADDRESS_LENGTH {
        panic_with_error!(e, RebalancerError::InvalidV3Path);
    }
}

fn path_token(e: &Env, path: &Bytes, start: u32) -> Address {
    Address::from_string_bytes(&path.slice(start..start + PATH_ADDRESS_LENGTH))
}

// Leading token of the swap. Interior hops are the venue's business and
// are not re-validated here.
pub(crate) fn input_token(e: &Env, op: &SwapOperation) -> Address {
    if op.protocol == ROUTER_TYPE_TOKEN_LIST {
        match op.tokens.first() {
            Some(v) => v,
            None => panic_with_error!(e, RebalancerError::InvalidPath),
        }
    } else if is_encoded_path_router(&op.protocol) {
        check_encoded_path(e, &op.path);
        path_token(e, &op.path, 0)
    } else {
        panic_with_error!(e, RebalancerError::UnknownRouterType);
    }
}

// Trailing token of the swap.
pub(crate) fn output_token(e: &Env, op: &SwapOperation) -> Address {
    if op.protocol == ROUTER_TYPE_TOKEN_LIST {
        match op.tokens.last() {
            Some(v) => v,
            None => panic_with_error!(e, RebalancerError::InvalidPath),
        }
    } else if is_encoded_path_router(&op.protocol) {
        check_encoded_path(e, &op.path);
        path_token(e, &op.path, op.path.len() - PATH_ADDRESS_LENGTH)
    } else {
        panic_with_error!(e, RebalancerError::UnknownRouterType);
    }
}

// Swap `in_amount` of the leading token through the venue, with this
// contract as recipient and an unbounded deadline where the protocol has
// one. Returns the output amount received. The venue enforces `min_out`
// and pulls the input through a standing allowance.
pub(crate) fn execute_swap(e: &Env, op: &SwapOperation, in_amount: u128) -> u128 {
    let to = e.current_contract_address();
    if op.protocol == ROUTER_TYPE_TOKEN_LIST {
        if op.tokens.is_empty() {
            panic_with_error!(e, RebalancerError::InvalidPath);
        }
        let amounts: Vec<u128> = e.invoke_contract(
            &op.venue,
            &symbol_short!("swap_in"),
            Vec::from_array(
                e,
                [
                    in_amount.into_val(e),
                    op.min_out.into_val(e),
                    op.tokens.to_val(),
                    to.to_val(),
                    u64::MAX.into_val(e),
                ],
            ),
        );
        match amounts.last() {
            Some(v) => v,
            None => panic_with_error!(e, RebalancerError::InvalidPath),
        }
    } else if op.protocol == ROUTER_TYPE_EXACT_IN {
        check_encoded_path(e, &op.path);
        e.invoke_contract(
            &op.venue,
            &Symbol::new(e, "exact_input"),
            Vec::from_array(
                e,
                [
                    op.path.to_val(),
                    to.to_val(),
                    u64::MAX.into_val(e),
                    in_amount.into_val(e),
                    op.min_out.into_val(e),
                ],
            ),
        )
    } else if op.protocol == ROUTER_TYPE_EXACT_IN_2 {
        check_encoded_path(e, &op.path);
        e.invoke_contract(
            &op.venue,
            &Symbol::new(e, "exact_input"),
            Vec::from_array(
                e,
                [
                    op.path.to_val(),
                    to.to_val(),
                    in_amount.into_val(e),
                    op.min_out.into_val(e),
                ],
            ),
        )
    } else if op.protocol == ROUTER_TYPE_MULTIHOP {
        check_encoded_path(e, &op.path);
        e.invoke_contract(
            &op.venue,
            &symbol_short!("swap_path"),
            Vec::from_array(
                e,
                [
                    op.path.to_val(),
                    in_amount.into_val(e),
                    op.min_out.into_val(e),
                    to.to_val(),
                ],
            ),
        )
    } else {
        panic_with_error!(e, RebalancerError::UnknownRouterType);
    }
}
