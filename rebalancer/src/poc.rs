use soroban_sdk::{symbol_short, Address, Env, IntoVal, Symbol, Vec};

pub(crate) fn get_collateral(e: &Env, poc: &Address) -> Address {
    e.invoke_contract(poc, &Symbol::new(e, "collateral"), Vec::new(e))
}

// Spend collateral at the bonding curve, receiving launch token back.
// The counterpart pulls the collateral through a standing allowance.
pub(crate) fn buy(e: &Env, poc: &Address, collateral_amount: u128) -> u128 {
    e.invoke_contract(
        poc,
        &symbol_short!("buy"),
        Vec::from_array(
            e,
            [
                e.current_contract_address().to_val(),
                collateral_amount.into_val(e),
            ],
        ),
    )
}

// Redeem launch token at the bonding curve, receiving collateral back.
pub(crate) fn sell(e: &Env, poc: &Address, launch_amount: u128) -> u128 {
    e.invoke_contract(
        poc,
        &symbol_short!("sell"),
        Vec::from_array(
            e,
            [
                e.current_contract_address().to_val(),
                launch_amount.into_val(e),
            ],
        ),
    )
}
