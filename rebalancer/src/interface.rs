use crate::types::{AllowanceGrant, AllowanceRevoke, AmmToPocStep, PocToAmmStep, PocToPocStep};
use soroban_sdk::{Address, BytesN, Env, Map, Symbol, Val, Vec};

pub trait RebalancerInterface {
    // Set the launch token, the governance entity and the profit wallets.
    // Callable once. The governance wallet may alternatively be set later
    // through `set_governance_wallet`.
    fn initialize(
        e: Env,
        admin: Address,
        launch_token: Address,
        dao: Address,
        mera_fund: Address,
        poc_royalty: Address,
        poc_buyback: Address,
        governance: Option<Address>,
    );

    // Swap launch token into collateral on a venue, then spend the full
    // collateral balance buying launch token back at the bonding curve.
    // Permissionless: the profit invariant protects the funds.
    // Returns realized profit.
    fn rebalance_amm_to_poc(e: Env, steps: Vec<AmmToPocStep>) -> u128;

    // Redeem launch token at the bonding curve, then swap the full
    // resulting collateral balance back into launch token on a venue.
    // Returns realized profit.
    fn rebalance_poc_to_amm(e: Env, steps: Vec<PocToAmmStep>) -> u128;

    // Redeem at one bonding curve, swap collateral to collateral, buy at
    // another bonding curve. Returns realized profit.
    fn rebalance_poc_to_poc(e: Env, steps: Vec<PocToPocStep>) -> u128;

    fn get_launch_token(e: Env) -> Address;

    fn get_dao(e: Env) -> Address;

    // Get dictionary of basic engine information: launch token, dao,
    // minimum profit threshold, legacy withdraw lock.
    fn get_info(e: Env) -> Map<Symbol, Val>;
}

pub trait ProfitInterface {
    // Pay out every nonzero bucket to its current wallet. Permissionless;
    // empty buckets are skipped. Returns the total amount paid.
    fn withdraw_profit(e: Env) -> u128;

    // Reassign a rotatable profit wallet. Only the current holder may
    // rotate; accrued balance is carried over to the new address.
    fn rotate_wallet(e: Env, wallet: Address, role: Symbol, new_wallet: Address);

    // Set the governance wallet if it was not provided at initialization.
    // Callable once.
    fn set_governance_wallet(e: Env, admin: Address, wallet: Address);

    fn get_wallets(e: Env) -> Map<Symbol, Option<Address>>;

    fn get_accumulated_profit(e: Env) -> Map<Symbol, u128>;
}

pub trait AdminInterface {
    // Tune the minimum profit threshold. Bounded to [100, 500] bps.
    fn set_min_profit(e: Env, admin: Address, min_profit_bps: u32);

    fn get_min_profit(e: Env) -> u32;

    // Legacy time lock. Monotonically increasing; the unlock decision is
    // made by the governance stage and never consults this value.
    fn set_withdraw_lock(e: Env, admin: Address, lock_until: u64);

    fn get_withdraw_lock(e: Env) -> u64;

    // Grant standing token allowances to venues and counterparts. Each
    // grant requires the governance gate to be open or the spender to be
    // an approved counterpart.
    fn grant_allowance(e: Env, admin: Address, grants: Vec<AllowanceGrant>);

    // Revoking is always permitted.
    fn revoke_allowance(e: Env, admin: Address, revokes: Vec<AllowanceRevoke>);

    // Withdraw idle assets. The launch token stays locked until the
    // governance entity reports dissolution; other assets are free.
    fn withdraw(e: Env, admin: Address, token: Address, amount: u128);
}

pub trait UpgradeableContract {
    // Get contract version
    fn version() -> u32;

    // Upgrade contract with new wasm code
    fn upgrade(e: Env, admin: Address, new_wasm_hash: BytesN<32>);
}
