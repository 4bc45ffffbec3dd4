#![cfg(test)]
extern crate std;

use crate::swap::{
    ROUTER_TYPE_EXACT_IN, ROUTER_TYPE_EXACT_IN_2, ROUTER_TYPE_MULTIHOP, ROUTER_TYPE_TOKEN_LIST,
};
use crate::testutils::{
    create_token_contract, path_swap, token_list_swap, MockExactInAmm, MockExactInAmmClient,
    MockExactInNoDeadlineAmm, MockExactInNoDeadlineAmmClient, MockMultihopAmm,
    MockMultihopAmmClient, Setup, TestConfig, ALLOWANCE_AMOUNT,
};
use crate::types::{
    AllowanceGrant, AllowanceRevoke, AmmToPocStep, PocBuyOrder, PocSellOrder, PocToAmmStep,
    PocToPocStep, SwapOperation,
};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{symbol_short, vec, Address, Bytes, FromVal, IntoVal, Symbol, Vec};

#[test]
fn test_rebalance_amm_to_poc() {
    let setup = Setup::default();
    let e = &setup.env;
    let initial = setup.launch_token.balance(&setup.rebalancer.address);

    // 1000 launch -> 1100 collateral on the venue -> 1210 launch at the curve
    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: token_list_swap(
                e,
                &setup.amm,
                &[&setup.launch_token.address, &setup.collateral_token.address],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    let profit = setup.rebalancer.rebalance_amm_to_poc(&steps);

    assert_eq!(profit, 210);
    assert_eq!(
        setup.launch_token.balance(&setup.rebalancer.address),
        initial + 210
    );
    assert_eq!(setup.collateral_token.balance(&setup.rebalancer.address), 0);

    let accumulated = setup.rebalancer.get_accumulated_profit();
    assert_eq!(accumulated.get(Symbol::new(e, "MeraFund")).unwrap(), 10);
    assert_eq!(accumulated.get(Symbol::new(e, "PocRoyalty")).unwrap(), 10);
    assert_eq!(accumulated.get(Symbol::new(e, "PocBuyback")).unwrap(), 94);
    assert_eq!(accumulated.get(Symbol::new(e, "Governance")).unwrap(), 96);

    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                setup.rebalancer.address.clone(),
                (Symbol::new(e, "rebalance"), symbol_short!("amm_poc")).into_val(e),
                (1000_u128, 210_u128).into_val(e),
            ),
        ]
    );
}

#[test]
fn test_rebalance_amm_to_poc_multiple_steps() {
    let setup = Setup::default();
    let e = &setup.env;

    let step = AmmToPocStep {
        in_amount: 1000,
        swap: token_list_swap(
            e,
            &setup.amm,
            &[&setup.launch_token.address, &setup.collateral_token.address],
            0,
        ),
        buy: PocBuyOrder {
            poc: setup.poc.clone(),
        },
    };
    let profit = setup
        .rebalancer
        .rebalance_amm_to_poc(&vec![e, step.clone(), step]);
    assert_eq!(profit, 420);
}

#[test]
fn test_rebalance_poc_to_amm() {
    let setup = Setup::default();
    let e = &setup.env;
    let initial = setup.launch_token.balance(&setup.rebalancer.address);

    // 1000 launch -> 1100 collateral at the curve -> 1210 launch on the venue
    let steps = vec![
        e,
        PocToAmmStep {
            sell: PocSellOrder {
                poc: setup.poc.clone(),
                launch_amount: 1000,
            },
            swap: token_list_swap(
                e,
                &setup.amm,
                &[&setup.collateral_token.address, &setup.launch_token.address],
                0,
            ),
        },
    ];
    let profit = setup.rebalancer.rebalance_poc_to_amm(&steps);

    assert_eq!(profit, 210);
    assert_eq!(
        setup.launch_token.balance(&setup.rebalancer.address),
        initial + 210
    );
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                setup.rebalancer.address.clone(),
                (Symbol::new(e, "rebalance"), symbol_short!("poc_amm")).into_val(e),
                (1000_u128, 210_u128).into_val(e),
            ),
        ]
    );
}

#[test]
fn test_rebalance_poc_to_poc() {
    let setup = Setup::default();
    let e = &setup.env;
    let token_admin = Address::generate(e);
    let (eur_token, eur_asset) = create_token_contract(e, &token_admin);
    let poc_b = setup.register_poc(&eur_token.address, 11, 10, 11, 10);
    eur_asset.mint(&setup.amm, &1_000_000);
    setup.grant(&eur_token.address, &setup.amm);

    let initial = setup.launch_token.balance(&setup.rebalancer.address);

    // 1000 launch -> 1100 usd at curve A -> 1210 eur on the venue
    // -> 1331 launch at curve B
    let steps = vec![
        e,
        PocToPocStep {
            sell: PocSellOrder {
                poc: setup.poc.clone(),
                launch_amount: 1000,
            },
            swap: token_list_swap(
                e,
                &setup.amm,
                &[&setup.collateral_token.address, &eur_token.address],
                0,
            ),
            buy: PocBuyOrder { poc: poc_b },
        },
    ];
    let profit = setup.rebalancer.rebalance_poc_to_poc(&steps);

    assert_eq!(profit, 331);
    assert_eq!(
        setup.launch_token.balance(&setup.rebalancer.address),
        initial + 331
    );
    assert_eq!(setup.collateral_token.balance(&setup.rebalancer.address), 0);
    assert_eq!(eur_token.balance(&setup.rebalancer.address), 0);
}

#[test]
fn test_rebalance_exact_input_router() {
    let setup = Setup::default();
    let e = &setup.env;
    let venue = e.register(MockExactInAmm, ());
    MockExactInAmmClient::new(e, &venue).init(&11, &10);
    setup.dao_client().add_poc(&venue);
    setup.collateral_asset.mint(&venue, &1_000_000);
    setup.grant(&setup.launch_token.address, &venue);

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: path_swap(
                e,
                ROUTER_TYPE_EXACT_IN,
                &venue,
                &[&setup.launch_token.address, &setup.collateral_token.address],
                &[3000],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    assert_eq!(setup.rebalancer.rebalance_amm_to_poc(&steps), 210);
}

#[test]
fn test_rebalance_exact_input_no_deadline_router() {
    let setup = Setup::default();
    let e = &setup.env;
    let venue = e.register(MockExactInNoDeadlineAmm, ());
    MockExactInNoDeadlineAmmClient::new(e, &venue).init(&11, &10);
    setup.dao_client().add_poc(&venue);
    setup.collateral_asset.mint(&venue, &1_000_000);
    setup.grant(&setup.launch_token.address, &venue);

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: path_swap(
                e,
                ROUTER_TYPE_EXACT_IN_2,
                &venue,
                &[&setup.launch_token.address, &setup.collateral_token.address],
                &[500],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    assert_eq!(setup.rebalancer.rebalance_amm_to_poc(&steps), 210);
}

#[test]
fn test_rebalance_multihop_router() {
    let setup = Setup::default();
    let e = &setup.env;
    let venue = e.register(MockMultihopAmm, ());
    MockMultihopAmmClient::new(e, &venue).init(&11, &10);
    setup.dao_client().add_poc(&venue);
    setup.collateral_asset.mint(&venue, &1_000_000);
    setup.grant(&setup.launch_token.address, &venue);

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: path_swap(
                e,
                ROUTER_TYPE_MULTIHOP,
                &venue,
                &[&setup.launch_token.address, &setup.collateral_token.address],
                &[30],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    assert_eq!(setup.rebalancer.rebalance_amm_to_poc(&steps), 210);
}

#[test]
#[should_panic(expected = "Error(Contract, #209)")]
fn test_min_profit_not_reached() {
    let setup = Setup::new_with_config(&TestConfig {
        amm_rate: (1, 1),
        poc_buy_rate: (10499, 10000),
        ..TestConfig::default()
    });
    let e = &setup.env;
    setup.rebalancer.set_min_profit(&setup.admin, &500);

    // profit 499 against a threshold of 10000 * 5% = 500
    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 10000,
            swap: token_list_swap(
                e,
                &setup.amm,
                &[&setup.launch_token.address, &setup.collateral_token.address],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    setup.rebalancer.rebalance_amm_to_poc(&steps);
}

#[test]
fn test_min_profit_exact_boundary() {
    let setup = Setup::new_with_config(&TestConfig {
        amm_rate: (1, 1),
        poc_buy_rate: (10500, 10000),
        ..TestConfig::default()
    });
    let e = &setup.env;
    setup.rebalancer.set_min_profit(&setup.admin, &500);

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 10000,
            swap: token_list_swap(
                e,
                &setup.amm,
                &[&setup.launch_token.address, &setup.collateral_token.address],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    assert_eq!(setup.rebalancer.rebalance_amm_to_poc(&steps), 500);
}

#[test]
#[should_panic(expected = "Error(Contract, #208)")]
fn test_no_profit_reverts() {
    let setup = Setup::new_with_config(&TestConfig {
        amm_rate: (1, 1),
        poc_buy_rate: (1, 1),
        ..TestConfig::default()
    });
    let e = &setup.env;

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: token_list_swap(
                e,
                &setup.amm,
                &[&setup.launch_token.address, &setup.collateral_token.address],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    setup.rebalancer.rebalance_amm_to_poc(&steps);
}

#[test]
#[should_panic(expected = "Error(Contract, #208)")]
fn test_loss_reverts() {
    let setup = Setup::new_with_config(&TestConfig {
        amm_rate: (1, 1),
        poc_buy_rate: (9, 10),
        ..TestConfig::default()
    });
    let e = &setup.env;

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: token_list_swap(
                e,
                &setup.amm,
                &[&setup.launch_token.address, &setup.collateral_token.address],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    setup.rebalancer.rebalance_amm_to_poc(&steps);
}

#[test]
fn test_amm_to_poc_collateral_mismatch_rolls_back() {
    let setup = Setup::default();
    let e = &setup.env;
    let token_admin = Address::generate(e);
    let (eur_token, _) = create_token_contract(e, &token_admin);
    let initial = setup.launch_token.balance(&setup.rebalancer.address);

    // swap lands in eur while the curve collects usd
    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: token_list_swap(
                e,
                &setup.amm,
                &[&setup.launch_token.address, &eur_token.address],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    assert!(setup.rebalancer.try_rebalance_amm_to_poc(&steps).is_err());
    assert_eq!(
        setup.launch_token.balance(&setup.rebalancer.address),
        initial
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #206)")]
fn test_amm_to_poc_input_not_launch() {
    let setup = Setup::default();
    let e = &setup.env;

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: token_list_swap(
                e,
                &setup.amm,
                &[
                    &setup.collateral_token.address,
                    &setup.collateral_token.address,
                ],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    setup.rebalancer.rebalance_amm_to_poc(&steps);
}

#[test]
#[should_panic(expected = "Error(Contract, #206)")]
fn test_poc_to_amm_output_not_launch() {
    let setup = Setup::default();
    let e = &setup.env;

    let steps = vec![
        e,
        PocToAmmStep {
            sell: PocSellOrder {
                poc: setup.poc.clone(),
                launch_amount: 1000,
            },
            swap: token_list_swap(
                e,
                &setup.amm,
                &[
                    &setup.collateral_token.address,
                    &setup.collateral_token.address,
                ],
                0,
            ),
        },
    ];
    setup.rebalancer.rebalance_poc_to_amm(&steps);
}

#[test]
#[should_panic(expected = "Error(Contract, #203)")]
fn test_empty_token_list_path() {
    let setup = Setup::default();
    let e = &setup.env;

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: SwapOperation {
                protocol: ROUTER_TYPE_TOKEN_LIST,
                venue: setup.amm.clone(),
                tokens: Vec::new(e),
                path: Bytes::new(e),
                min_out: 0,
            },
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    setup.rebalancer.rebalance_amm_to_poc(&steps);
}

#[test]
#[should_panic(expected = "Error(Contract, #204)")]
fn test_short_encoded_path() {
    let setup = Setup::default();
    let e = &setup.env;

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: SwapOperation {
                protocol: ROUTER_TYPE_EXACT_IN,
                venue: setup.amm.clone(),
                tokens: Vec::new(e),
                path: Bytes::from_slice(e, &[0; 10]),
                min_out: 0,
            },
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    setup.rebalancer.rebalance_amm_to_poc(&steps);
}

#[test]
#[should_panic(expected = "Error(Contract, #205)")]
fn test_unknown_router_type() {
    let setup = Setup::default();
    let e = &setup.env;

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: SwapOperation {
                protocol: symbol_short!("v2"),
                venue: setup.amm.clone(),
                tokens: vec![
                    e,
                    setup.launch_token.address.clone(),
                    setup.collateral_token.address.clone(),
                ],
                path: Bytes::new(e),
                min_out: 0,
            },
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    setup.rebalancer.rebalance_amm_to_poc(&steps);
}

#[test]
#[should_panic(expected = "slippage")]
fn test_venue_enforces_min_out() {
    let setup = Setup::default();
    let e = &setup.env;

    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: token_list_swap(
                e,
                &setup.amm,
                &[&setup.launch_token.address, &setup.collateral_token.address],
                2000,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    setup.rebalancer.rebalance_amm_to_poc(&steps);
}

fn run_default_rebalance(setup: &Setup) {
    let e = &setup.env;
    let steps = vec![
        e,
        AmmToPocStep {
            in_amount: 1000,
            swap: token_list_swap(
                e,
                &setup.amm,
                &[&setup.launch_token.address, &setup.collateral_token.address],
                0,
            ),
            buy: PocBuyOrder {
                poc: setup.poc.clone(),
            },
        },
    ];
    setup.rebalancer.rebalance_amm_to_poc(&steps);
}

#[test]
fn test_withdraw_profit() {
    let setup = Setup::default();
    run_default_rebalance(&setup);

    let total = setup.rebalancer.withdraw_profit();
    assert_eq!(total, 210);
    assert_eq!(setup.launch_token.balance(&setup.mera_fund), 10);
    assert_eq!(setup.launch_token.balance(&setup.poc_royalty), 10);
    assert_eq!(setup.launch_token.balance(&setup.poc_buyback), 94);
    assert_eq!(setup.launch_token.balance(&setup.governance), 96);

    let accumulated = setup.rebalancer.get_accumulated_profit();
    for (_, amount) in accumulated.iter() {
        assert_eq!(amount, 0);
    }

    // nothing left to pay out
    assert_eq!(setup.rebalancer.withdraw_profit(), 0);
    assert_eq!(setup.launch_token.balance(&setup.mera_fund), 10);
}

#[test]
fn test_withdraw_profit_requires_governance_wallet() {
    let setup = Setup::new_with_config(&TestConfig {
        set_governance: false,
        ..TestConfig::default()
    });
    run_default_rebalance(&setup);

    assert!(setup.rebalancer.try_withdraw_profit().is_err());

    setup
        .rebalancer
        .set_governance_wallet(&setup.admin, &setup.governance);
    assert_eq!(setup.rebalancer.withdraw_profit(), 210);
    assert_eq!(setup.launch_token.balance(&setup.governance), 96);
}

#[test]
#[should_panic(expected = "Error(Contract, #202)")]
fn test_set_governance_wallet_twice() {
    let setup = Setup::default();
    let e = &setup.env;
    setup
        .rebalancer
        .set_governance_wallet(&setup.admin, &Address::generate(e));
}

#[test]
fn test_rotate_wallet() {
    let setup = Setup::default();
    let e = &setup.env;
    run_default_rebalance(&setup);

    let new_wallet = Address::generate(e);
    setup
        .rebalancer
        .rotate_wallet(&setup.mera_fund, &Symbol::new(e, "MeraFund"), &new_wallet);

    // accrued balance travels with the role
    assert_eq!(setup.launch_token.balance(&new_wallet), 10);
    assert_eq!(setup.launch_token.balance(&setup.mera_fund), 0);
    assert_eq!(
        setup
            .rebalancer
            .get_accumulated_profit()
            .get(Symbol::new(e, "MeraFund"))
            .unwrap(),
        0
    );
    assert_eq!(
        setup
            .rebalancer
            .get_wallets()
            .get(Symbol::new(e, "MeraFund"))
            .unwrap(),
        Some(new_wallet)
    );

    // remaining buckets are untouched
    assert_eq!(setup.rebalancer.withdraw_profit(), 200);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_rotate_wallet_not_holder() {
    let setup = Setup::default();
    let e = &setup.env;
    let outsider = Address::generate(e);
    setup.rebalancer.rotate_wallet(
        &outsider,
        &Symbol::new(e, "MeraFund"),
        &Address::generate(e),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #108)")]
fn test_rotate_wallet_governance_not_rotatable() {
    let setup = Setup::default();
    let e = &setup.env;
    setup.rebalancer.rotate_wallet(
        &setup.governance,
        &Symbol::new(e, "Governance"),
        &Address::generate(e),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #108)")]
fn test_rotate_wallet_admin_not_rotatable() {
    let setup = Setup::default();
    let e = &setup.env;
    setup.rebalancer.rotate_wallet(
        &setup.admin,
        &Symbol::new(e, "Admin"),
        &Address::generate(e),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #211)")]
fn test_grant_allowance_unapproved_spender() {
    let setup = Setup::default();
    let e = &setup.env;
    setup.grant(&setup.launch_token.address, &Address::generate(e));
}

#[test]
#[should_panic(expected = "Error(Contract, #211)")]
fn test_grant_allowance_inactive_poc() {
    let setup = Setup::default();
    setup.dao_client().set_poc_active(&0, &false);
    setup.grant(&setup.launch_token.address, &setup.poc.clone());
}

#[test]
fn test_grant_allowance_after_dissolution() {
    let setup = Setup::default();
    let e = &setup.env;
    setup.dao_client().set_stage(&3);

    let spender = Address::generate(e);
    setup.grant(&setup.launch_token.address, &spender);
    assert_eq!(
        setup
            .launch_token
            .allowance(&setup.rebalancer.address, &spender),
        ALLOWANCE_AMOUNT as i128
    );
}

#[test]
fn test_revoke_allowance() {
    let setup = Setup::default();
    let e = &setup.env;
    assert_eq!(
        setup
            .launch_token
            .allowance(&setup.rebalancer.address, &setup.poc),
        ALLOWANCE_AMOUNT as i128
    );

    setup.rebalancer.revoke_allowance(
        &setup.admin,
        &vec![
            e,
            AllowanceRevoke {
                token: setup.launch_token.address.clone(),
                spender: setup.poc.clone(),
            },
        ],
    );
    assert_eq!(
        setup
            .launch_token
            .allowance(&setup.rebalancer.address, &setup.poc),
        0
    );
}

#[test]
fn test_broken_dao_fails_closed() {
    let setup = Setup::new_with_config(&TestConfig {
        broken_dao: true,
        grant_allowances: false,
        ..TestConfig::default()
    });
    let e = &setup.env;

    // a trapping governance entity keeps both gates shut
    assert!(setup
        .rebalancer
        .try_grant_allowance(
            &setup.admin,
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
        .try_withdraw(&setup.admin, &setup.launch_token.address, &100)
        .is_err());

    // revocation and foreign assets stay available
    setup.rebalancer.revoke_allowance(
        &setup.admin,
        &vec![
            e,
            AllowanceRevoke {
                token: setup.launch_token.address.clone(),
                spender: setup.poc.clone(),
            },
        ],
    );
    setup.collateral_asset.mint(&setup.rebalancer.address, &100);
    setup
        .rebalancer
        .withdraw(&setup.admin, &setup.collateral_token.address, &100);
    assert_eq!(setup.collateral_token.balance(&setup.admin), 100);
}

#[test]
#[should_panic(expected = "Error(Contract, #212)")]
fn test_withdraw_launch_locked() {
    let setup = Setup::default();
    setup
        .rebalancer
        .withdraw(&setup.admin, &setup.launch_token.address, &100);
}

#[test]
fn test_withdraw_launch_after_dissolution() {
    let setup = Setup::default();
    setup.dao_client().set_stage(&3);
    setup
        .rebalancer
        .withdraw(&setup.admin, &setup.launch_token.address, &100);
    assert_eq!(setup.launch_token.balance(&setup.admin), 100);
}

#[test]
fn test_withdraw_foreign_token_unrestricted() {
    let setup = Setup::default();
    setup.collateral_asset.mint(&setup.rebalancer.address, &500);
    setup
        .rebalancer
        .withdraw(&setup.admin, &setup.collateral_token.address, &500);
    assert_eq!(setup.collateral_token.balance(&setup.admin), 500);
}

#[test]
fn test_set_min_profit() {
    let setup = Setup::default();
    assert_eq!(setup.rebalancer.get_min_profit(), 100);

    setup.rebalancer.set_min_profit(&setup.admin, &500);
    assert_eq!(setup.rebalancer.get_min_profit(), 500);
    setup.rebalancer.set_min_profit(&setup.admin, &100);
    assert_eq!(setup.rebalancer.get_min_profit(), 100);
}

#[test]
#[should_panic(expected = "Error(Contract, #210)")]
fn test_set_min_profit_below_bounds() {
    let setup = Setup::default();
    setup.rebalancer.set_min_profit(&setup.admin, &99);
}

#[test]
#[should_panic(expected = "Error(Contract, #210)")]
fn test_set_min_profit_above_bounds() {
    let setup = Setup::default();
    setup.rebalancer.set_min_profit(&setup.admin, &501);
}

#[test]
fn test_withdraw_lock_monotonic() {
    let setup = Setup::default();
    assert_eq!(setup.rebalancer.get_withdraw_lock(), 0);

    setup.rebalancer.set_withdraw_lock(&setup.admin, &100);
    assert_eq!(setup.rebalancer.get_withdraw_lock(), 100);
    // re-setting the same value is allowed
    setup.rebalancer.set_withdraw_lock(&setup.admin, &100);

    assert!(setup
        .rebalancer
        .try_set_withdraw_lock(&setup.admin, &99)
        .is_err());
    assert_eq!(setup.rebalancer.get_withdraw_lock(), 100);
}

#[test]
#[should_panic(expected = "Error(Contract, #212)")]
fn test_withdraw_lock_expiry_does_not_unlock_launch() {
    let setup = Setup::default();
    // the legacy timestamp plays no part in the unlock decision
    setup.rebalancer.set_withdraw_lock(&setup.admin, &1);
    setup
        .rebalancer
        .withdraw(&setup.admin, &setup.launch_token.address, &100);
}

#[test]
#[should_panic(expected = "Error(Contract, #201)")]
fn test_initialize_twice() {
    let setup = Setup::default();
    setup.rebalancer.initialize(
        &setup.admin,
        &setup.launch_token.address,
        &setup.dao,
        &setup.mera_fund,
        &setup.poc_royalty,
        &setup.poc_buyback,
        &None,
    );
}

#[test]
fn test_get_info() {
    let setup = Setup::default();
    let e = &setup.env;

    assert_eq!(
        setup.rebalancer.get_launch_token(),
        setup.launch_token.address
    );
    assert_eq!(setup.rebalancer.get_dao(), setup.dao);

    let info = setup.rebalancer.get_info();
    assert_eq!(
        Address::from_val(e, &info.get(Symbol::new(e, "launch_token")).unwrap()),
        setup.launch_token.address
    );
    assert_eq!(
        Address::from_val(e, &info.get(Symbol::new(e, "dao")).unwrap()),
        setup.dao
    );
    assert_eq!(
        u32::from_val(e, &info.get(Symbol::new(e, "min_profit_bps")).unwrap()),
        100
    );
    assert_eq!(
        u64::from_val(e, &info.get(Symbol::new(e, "withdraw_lock")).unwrap()),
        0
    );
}

#[test]
fn test_get_wallets() {
    let setup = Setup::default();
    let e = &setup.env;

    let wallets = setup.rebalancer.get_wallets();
    assert_eq!(
        wallets.get(Symbol::new(e, "MeraFund")).unwrap(),
        Some(setup.mera_fund.clone())
    );
    assert_eq!(
        wallets.get(Symbol::new(e, "PocRoyalty")).unwrap(),
        Some(setup.poc_royalty.clone())
    );
    assert_eq!(
        wallets.get(Symbol::new(e, "PocBuyback")).unwrap(),
        Some(setup.poc_buyback.clone())
    );
    assert_eq!(
        wallets.get(Symbol::new(e, "Governance")).unwrap(),
        Some(setup.governance.clone())
    );
}

#[test]
fn test_get_wallets_without_governance() {
    let setup = Setup::new_with_config(&TestConfig {
        set_governance: false,
        ..TestConfig::default()
    });
    let e = &setup.env;
    assert_eq!(
        setup
            .rebalancer
            .get_wallets()
            .get(Symbol::new(e, "Governance"))
            .unwrap(),
        None
    );
}
