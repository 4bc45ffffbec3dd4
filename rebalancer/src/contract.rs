use crate::constants::{BPS_DENOMINATOR, MIN_PROFIT_BPS_LOWER, MIN_PROFIT_BPS_UPPER};
use crate::errors::RebalancerError;
use crate::events::Events;
use crate::interface::{AdminInterface, ProfitInterface, RebalancerInterface, UpgradeableContract};
use crate::storage::{
    get_dao, get_launch_token, get_min_profit_bps, get_profit, get_withdraw_lock, has_launch_token,
    put_dao, put_launch_token, set_min_profit_bps, set_withdraw_lock,
};
use crate::types::{AllowanceGrant, AllowanceRevoke, AmmToPocStep, PocToAmmStep, PocToPocStep};
use crate::{dao, ledger, poc, swap};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::errors::AccessControlError;
use access_control::events::Events as AccessControlEvents;
use access_control::interface::TransferableContract;
use access_control::role::{Role, SymbolRepresentation};
use access_control::transfer::TransferOwnershipTrait;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, token, Address, BytesN, Env, IntoVal,
    Map, Symbol, Val, Vec,
};
use utils::math_errors::MathError;

#[contract]
pub struct Rebalancer;

const PROFIT_ROLES: [Role; 4] = [
    Role::MeraFund,
    Role::PocRoyalty,
    Role::PocBuyback,
    Role::Governance,
];

fn token_balance(e: &Env, token: &Address) -> u128 {
    token::Client::new(e, token).balance(&e.current_contract_address()) as u128
}

// Post-execution invariant check. The balance must have grown, and the
// gain must cover the configured fraction of the capital committed to
// the operation. Only then is the delta handed to the ledger.
fn settle(e: &Env, kind: Symbol, initial_balance: u128, used_amount: u128) -> u128 {
    let final_balance = token_balance(e, &get_launch_token(e));
    if final_balance <= initial_balance {
        panic_with_error!(e, RebalancerError::LaunchTokenBalanceNotIncreased);
    }
    let profit = final_balance - initial_balance;

    let threshold = match used_amount.checked_mul(get_min_profit_bps(e) as u128) {
        Some(v) => v / BPS_DENOMINATOR,
        None => panic_with_error!(e, MathError::NumberOverflow),
    };
    if profit < threshold {
        panic_with_error!(e, RebalancerError::MinProfitNotReached);
    }

    ledger::record_profit(e, profit);
    Events::new(e).rebalance(kind, used_amount, profit);
    profit
}

#[contractimpl]
impl RebalancerInterface for Rebalancer {
    fn initialize(
        e: Env,
        admin: Address,
        launch_token: Address,
        dao: Address,
        mera_fund: Address,
        poc_royalty: Address,
        poc_buyback: Address,
        governance: Option<Address>,
    ) {
        if has_launch_token(&e) {
            panic_with_error!(&e, RebalancerError::AlreadyInitialized);
        }
        let access_control = AccessControl::new(&e);
        if access_control.has_admin() {
            panic_with_error!(&e, AccessControlError::AdminAlreadySet);
        }
        access_control.set_role_address(&Role::Admin, &admin);
        access_control.set_role_address(&Role::MeraFund, &mera_fund);
        access_control.set_role_address(&Role::PocRoyalty, &poc_royalty);
        access_control.set_role_address(&Role::PocBuyback, &poc_buyback);
        if let Some(governance) = governance {
            access_control.set_role_address(&Role::Governance, &governance);
        }

        put_launch_token(&e, &launch_token);
        put_dao(&e, &dao);
    }

    fn rebalance_amm_to_poc(e: Env, steps: Vec<AmmToPocStep>) -> u128 {
        let launch_token = get_launch_token(&e);
        let initial_balance = token_balance(&e, &launch_token);

        let mut used_amount = 0;
        for step in steps.iter() {
            if swap::input_token(&e, &step.swap) != launch_token {
                panic_with_error!(&e, RebalancerError::InvalidLaunchToken);
            }
            let collateral = poc::get_collateral(&e, &step.buy.poc);
            if swap::output_token(&e, &step.swap) != collateral {
                panic_with_error!(&e, RebalancerError::InvalidCollateralToken);
            }

            swap::execute_swap(&e, &step.swap, step.in_amount);
            let collateral_balance = token_balance(&e, &collateral);
            poc::buy(&e, &step.buy.poc, collateral_balance);

            used_amount += step.in_amount;
        }

        settle(&e, symbol_short!("amm_poc"), initial_balance, used_amount)
    }

    fn rebalance_poc_to_amm(e: Env, steps: Vec<PocToAmmStep>) -> u128 {
        let launch_token = get_launch_token(&e);
        let initial_balance = token_balance(&e, &launch_token);

        let mut used_amount = 0;
        for step in steps.iter() {
            let collateral = poc::get_collateral(&e, &step.sell.poc);
            if swap::input_token(&e, &step.swap) != collateral {
                panic_with_error!(&e, RebalancerError::InvalidCollateralToken);
            }
            if swap::output_token(&e, &step.swap) != launch_token {
                panic_with_error!(&e, RebalancerError::InvalidLaunchToken);
            }

            poc::sell(&e, &step.sell.poc, step.sell.launch_amount);
            let collateral_balance = token_balance(&e, &collateral);
            swap::execute_swap(&e, &step.swap, collateral_balance);

            used_amount += step.sell.launch_amount;
        }

        settle(&e, symbol_short!("poc_amm"), initial_balance, used_amount)
    }

    fn rebalance_poc_to_poc(e: Env, steps: Vec<PocToPocStep>) -> u128 {
        let launch_token = get_launch_token(&e);
        let initial_balance = token_balance(&e, &launch_token);

        let mut used_amount = 0;
        for step in steps.iter() {
            let collateral_a = poc::get_collateral(&e, &step.sell.poc);
            let collateral_b = poc::get_collateral(&e, &step.buy.poc);
            if swap::input_token(&e, &step.swap) != collateral_a {
                panic_with_error!(&e, RebalancerError::InvalidCollateralToken);
            }
            if swap::output_token(&e, &step.swap) != collateral_b {
                panic_with_error!(&e, RebalancerError::InvalidCollateralToken);
            }

            poc::sell(&e, &step.sell.poc, step.sell.launch_amount);
            let collateral_a_balance = token_balance(&e, &collateral_a);
            swap::execute_swap(&e, &step.swap, collateral_a_balance);
            let collateral_b_balance = token_balance(&e, &collateral_b);
            poc::buy(&e, &step.buy.poc, collateral_b_balance);

            used_amount += step.sell.launch_amount;
        }

        settle(&e, symbol_short!("poc_poc"), initial_balance, used_amount)
    }

    fn get_launch_token(e: Env) -> Address {
        get_launch_token(&e)
    }

    fn get_dao(e: Env) -> Address {
        get_dao(&e)
    }

    fn get_info(e: Env) -> Map<Symbol, Val> {
        Map::from_array(
            &e,
            [
                (
                    Symbol::new(&e, "launch_token"),
                    get_launch_token(&e).into_val(&e),
                ),
                (Symbol::new(&e, "dao"), get_dao(&e).into_val(&e)),
                (
                    Symbol::new(&e, "min_profit_bps"),
                    get_min_profit_bps(&e).into_val(&e),
                ),
                (
                    Symbol::new(&e, "withdraw_lock"),
                    get_withdraw_lock(&e).into_val(&e),
                ),
            ],
        )
    }
}

#[contractimpl]
impl ProfitInterface for Rebalancer {
    fn withdraw_profit(e: Env) -> u128 {
        let access_control = AccessControl::new(&e);
        let mut total = 0;
        for role in PROFIT_ROLES {
            let amount = get_profit(&e, &role);
            if amount == 0 {
                continue;
            }
            let wallet = match access_control.get_role_safe(&role) {
                Some(v) => v,
                None => panic_with_error!(&e, AccessControlError::RoleNotFound),
            };
            ledger::payout(&e, &role, &wallet);
            Events::new(&e).withdraw_profit(role.as_symbol(&e), wallet, amount);
            total += amount;
        }
        total
    }

    fn rotate_wallet(e: Env, wallet: Address, role: Symbol, new_wallet: Address) {
        wallet.require_auth();
        let role = Role::from_symbol(&e, role);
        if !role.is_rotatable() {
            panic_with_error!(&e, AccessControlError::BadRoleUsage);
        }

        let access_control = AccessControl::new(&e);
        let current = match access_control.get_role_safe(&role) {
            Some(v) => v,
            None => panic_with_error!(&e, AccessControlError::RoleNotFound),
        };
        if wallet != current {
            panic_with_error!(&e, AccessControlError::Unauthorized);
        }

        // carry accrued balance over to the new address, then repoint the role
        let carried = ledger::payout(&e, &role, &new_wallet);
        access_control.set_role_address(&role, &new_wallet);
        Events::new(&e).rotate_wallet(role.as_symbol(&e), current, new_wallet, carried);
    }

    fn set_governance_wallet(e: Env, admin: Address, wallet: Address) {
        admin.require_auth();
        let access_control = AccessControl::new(&e);
        access_control.assert_address_has_role(&admin, &Role::Admin);
        if access_control.get_role_safe(&Role::Governance).is_some() {
            panic_with_error!(&e, RebalancerError::GovernanceWalletAlreadySet);
        }
        access_control.set_role_address(&Role::Governance, &wallet);
        Events::new(&e).set_governance_wallet(wallet);
    }

    fn get_wallets(e: Env) -> Map<Symbol, Option<Address>> {
        let access_control = AccessControl::new(&e);
        let mut result = Map::new(&e);
        for role in PROFIT_ROLES {
            result.set(role.as_symbol(&e), access_control.get_role_safe(&role));
        }
        result
    }

    fn get_accumulated_profit(e: Env) -> Map<Symbol, u128> {
        let mut result = Map::new(&e);
        for role in PROFIT_ROLES {
            result.set(role.as_symbol(&e), get_profit(&e, &role));
        }
        result
    }
}

#[contractimpl]
impl AdminInterface for Rebalancer {
    fn set_min_profit(e: Env, admin: Address, min_profit_bps: u32) {
        admin.require_auth();
        AccessControl::new(&e).assert_address_has_role(&admin, &Role::Admin);
        if !(MIN_PROFIT_BPS_LOWER..=MIN_PROFIT_BPS_UPPER).contains(&min_profit_bps) {
            panic_with_error!(&e, RebalancerError::MinProfitOutOfBounds);
        }
        set_min_profit_bps(&e, &min_profit_bps);
        Events::new(&e).set_min_profit(min_profit_bps);
    }

    fn get_min_profit(e: Env) -> u32 {
        get_min_profit_bps(&e)
    }

    fn set_withdraw_lock(e: Env, admin: Address, lock_until: u64) {
        admin.require_auth();
        AccessControl::new(&e).assert_address_has_role(&admin, &Role::Admin);
        if lock_until < get_withdraw_lock(&e) {
            panic_with_error!(&e, RebalancerError::WithdrawLockDecreased);
        }
        set_withdraw_lock(&e, &lock_until);
        Events::new(&e).set_withdraw_lock(lock_until);
    }

    fn get_withdraw_lock(e: Env) -> u64 {
        get_withdraw_lock(&e)
    }

    fn grant_allowance(e: Env, admin: Address, grants: Vec<AllowanceGrant>) {
        admin.require_auth();
        AccessControl::new(&e).assert_address_has_role(&admin, &Role::Admin);

        let live_until = e.ledger().sequence() + e.storage().max_ttl() - 1;
        for grant in grants.iter() {
            if !dao::is_withdraw_unlocked(&e) && !dao::is_approved_poc(&e, &grant.spender) {
                panic_with_error!(&e, RebalancerError::WithdrawLockNotExpired);
            }
            token::Client::new(&e, &grant.token).approve(
                &e.current_contract_address(),
                &grant.spender,
                &(grant.amount as i128),
                &live_until,
            );
            Events::new(&e).grant_allowance(grant.token, grant.spender, grant.amount);
        }
    }

    fn revoke_allowance(e: Env, admin: Address, revokes: Vec<AllowanceRevoke>) {
        admin.require_auth();
        AccessControl::new(&e).assert_address_has_role(&admin, &Role::Admin);

        for revoke in revokes.iter() {
            token::Client::new(&e, &revoke.token).approve(
                &e.current_contract_address(),
                &revoke.spender,
                &0,
                &e.ledger().sequence(),
            );
            Events::new(&e).revoke_allowance(revoke.token, revoke.spender);
        }
    }

    fn withdraw(e: Env, admin: Address, token: Address, amount: u128) {
        admin.require_auth();
        AccessControl::new(&e).assert_address_has_role(&admin, &Role::Admin);

        if token == get_launch_token(&e) && !dao::is_withdraw_unlocked(&e) {
            panic_with_error!(&e, RebalancerError::WithdrawLaunchLocked);
        }
        token::Client::new(&e, &token).transfer(
            &e.current_contract_address(),
            &admin,
            &(amount as i128),
        );
        Events::new(&e).withdraw(token, amount);
    }
}

// The `UpgradeableContract` trait provides the interface for upgrading the contract.
#[contractimpl]
impl UpgradeableContract for Rebalancer {
    fn version() -> u32 {
        100
    }

    fn upgrade(e: Env, admin: Address, new_wasm_hash: BytesN<32>) {
        admin.require_auth();
        AccessControl::new(&e).assert_address_has_role(&admin, &Role::Admin);
        e.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}

// The `TransferableContract` trait provides the interface for transferring ownership of the contract.
#[contractimpl]
impl TransferableContract for Rebalancer {
    fn commit_transfer_ownership(e: Env, admin: Address, new_admin: Address) {
        admin.require_auth();
        let access_control = AccessControl::new(&e);
        access_control.assert_address_has_role(&admin, &Role::Admin);
        access_control.commit_transfer_ownership(new_admin.clone());
        AccessControlEvents::new(&e).commit_transfer_ownership(new_admin);
    }

    fn apply_transfer_ownership(e: Env, admin: Address) {
        admin.require_auth();
        let access_control = AccessControl::new(&e);
        access_control.assert_address_has_role(&admin, &Role::Admin);
        let new_admin = access_control.apply_transfer_ownership();
        AccessControlEvents::new(&e).apply_transfer_ownership(new_admin);
    }

    fn revert_transfer_ownership(e: Env, admin: Address) {
        admin.require_auth();
        let access_control = AccessControl::new(&e);
        access_control.assert_address_has_role(&admin, &Role::Admin);
        access_control.revert_transfer_ownership();
        AccessControlEvents::new(&e).revert_transfer_ownership();
    }
}
