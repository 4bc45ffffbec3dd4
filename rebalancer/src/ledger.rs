use crate::constants::{
    BPS_DENOMINATOR, MERA_FUND_SHARE_BPS, POC_BUYBACK_SHARE_BPS, POC_ROYALTY_SHARE_BPS,
};
use crate::storage::{get_launch_token, get_profit, put_profit};
use access_control::role::Role;
use soroban_sdk::{panic_with_error, token, Address, Env};
use utils::math_errors::MathError;

fn share(e: &Env, amount: u128, share_bps: u128) -> u128 {
    match amount.checked_mul(share_bps) {
        Some(v) => v / BPS_DENOMINATOR,
        None => panic_with_error!(e, MathError::NumberOverflow),
    }
}

fn add_profit(e: &Env, role: &Role, value: u128) {
    put_profit(e, role, &(get_profit(e, role) + value));
}

// Split a realized gain into the four buckets. The first three shares
// truncate; the governance bucket takes the remainder so the four
// counters always sum exactly to the recorded amount.
pub(crate) fn record_profit(e: &Env, amount: u128) {
    if amount == 0 {
        return;
    }

    let mera_fund = share(e, amount, MERA_FUND_SHARE_BPS);
    let poc_royalty = share(e, amount, POC_ROYALTY_SHARE_BPS);
    let poc_buyback = share(e, amount, POC_BUYBACK_SHARE_BPS);
    let governance = amount - mera_fund - poc_royalty - poc_buyback;

    add_profit(e, &Role::MeraFund, mera_fund);
    add_profit(e, &Role::PocRoyalty, poc_royalty);
    add_profit(e, &Role::PocBuyback, poc_buyback);
    add_profit(e, &Role::Governance, governance);
}

// Pay out the bucket's accrued balance to `wallet`. The counter is zeroed
// before the transfer so a reentering token cannot double-spend it.
// Returns the amount paid, zero if the bucket was empty.
pub(crate) fn payout(e: &Env, role: &Role, wallet: &Address) -> u128 {
    let amount = get_profit(e, role);
    if amount == 0 {
        return 0;
    }
    put_profit(e, role, &0);
    token::Client::new(e, &get_launch_token(e)).transfer(
        &e.current_contract_address(),
        wallet,
        &(amount as i128),
    );
    amount
}
