#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, ALLOWANCE_AMOUNT};
use crate::types::{AllowanceGrant, AllowanceRevoke};
use access_control::constants::ADMIN_ACTIONS_DELAY;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, BytesN};
use utils::test_utils::jump;

#[test]
fn test_admin_functions_reject_third_party() {
    let setup = Setup::default();
    let e = &setup.env;
    let outsider = Address::generate(e);

    assert!(setup
        .rebalancer
        .try_set_min_profit(&outsider, &200)
        .is_err());
    assert!(setup
        .rebalancer
        .try_set_withdraw_lock(&outsider, &100)
        .is_err());
    assert!(setup
        .rebalancer
        .try_set_governance_wallet(&outsider, &Address::generate(e))
        .is_err());
    assert!(setup
        .rebalancer
        .try_grant_allowance(
            &outsider,
            &vec![
                e,
                AllowanceGrant {
                    token: setup.launch_token.address.clone(),
                    spender: setup.poc.clone(),
                    amount: ALLOWANCE_AMOUNT,
                },
            ],
        )
        .is_err());
    assert!(setup
        .rebalancer
        .try_revoke_allowance(
            &outsider,
            &vec![
                e,
                AllowanceRevoke {
                    token: setup.launch_token.address.clone(),
                    spender: setup.poc.clone(),
                },
            ],
        )
        .is_err());
    assert!(setup
        .rebalancer
        .try_withdraw(&outsider, &setup.collateral_token.address, &1)
        .is_err());
    assert!(setup
        .rebalancer
        .try_upgrade(&outsider, &BytesN::from_array(e, &[0; 32]))
        .is_err());
    assert!(setup
        .rebalancer
        .try_commit_transfer_ownership(&outsider, &Address::generate(e))
        .is_err());
    assert!(setup
        .rebalancer
        .try_apply_transfer_ownership(&outsider)
        .is_err());
    assert!(setup
        .rebalancer
        .try_revert_transfer_ownership(&outsider)
        .is_err());
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let e = &setup.env;
    let new_admin = Address::generate(e);

    setup
        .rebalancer
        .commit_transfer_ownership(&setup.admin, &new_admin);
    // the committed admin has no privileges until the transfer applies
    assert!(setup
        .rebalancer
        .try_set_min_profit(&new_admin, &200)
        .is_err());

    jump(e, ADMIN_ACTIONS_DELAY + 1);
    setup.rebalancer.apply_transfer_ownership(&setup.admin);

    setup.rebalancer.set_min_profit(&new_admin, &200);
    assert!(setup
        .rebalancer
        .try_set_min_profit(&setup.admin, &300)
        .is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #107)")]
fn test_transfer_ownership_too_early() {
    let setup = Setup::default();
    let e = &setup.env;

    setup
        .rebalancer
        .commit_transfer_ownership(&setup.admin, &Address::generate(e));
    jump(e, ADMIN_ACTIONS_DELAY - 1);
    setup.rebalancer.apply_transfer_ownership(&setup.admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #105)")]
fn test_transfer_ownership_twice() {
    let setup = Setup::default();
    let e = &setup.env;

    setup
        .rebalancer
        .commit_transfer_ownership(&setup.admin, &Address::generate(e));
    setup
        .rebalancer
        .commit_transfer_ownership(&setup.admin, &Address::generate(e));
}

#[test]
#[should_panic(expected = "Error(Contract, #106)")]
fn test_transfer_ownership_not_committed() {
    let setup = Setup::default();
    setup.rebalancer.apply_transfer_ownership(&setup.admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #106)")]
fn test_transfer_ownership_reverted() {
    let setup = Setup::default();
    let e = &setup.env;

    setup
        .rebalancer
        .commit_transfer_ownership(&setup.admin, &Address::generate(e));
    setup.rebalancer.revert_transfer_ownership(&setup.admin);
    jump(e, ADMIN_ACTIONS_DELAY + 1);
    setup.rebalancer.apply_transfer_ownership(&setup.admin);
}
