use soroban_sdk::{contracttype, Address, Bytes, Symbol, Vec};

// Venue descriptor for a single swap. Constructed by the operator per call,
// consumed once, never persisted. Depending on the protocol tag either
// `tokens` (ordered-list routers) or `path` (byte-encoded routers) is used.
#[derive(Clone, Debug)]
#[contracttype]
pub struct SwapOperation {
    pub protocol: Symbol,
    pub venue: Address,
    pub tokens: Vec<Address>,
    pub path: Bytes,
    pub min_out: u128,
}

// Buy instruction for a bonding curve counterpart. The collateral amount
// spent is the engine's full collateral balance at execution time.
#[derive(Clone, Debug)]
#[contracttype]
pub struct PocBuyOrder {
    pub poc: Address,
}

#[derive(Clone, Debug)]
#[contracttype]
pub struct PocSellOrder {
    pub poc: Address,
    pub launch_amount: u128,
}

#[derive(Clone, Debug)]
#[contracttype]
pub struct AmmToPocStep {
    pub in_amount: u128,
    pub swap: SwapOperation,
    pub buy: PocBuyOrder,
}

#[derive(Clone, Debug)]
#[contracttype]
pub struct PocToAmmStep {
    pub sell: PocSellOrder,
    pub swap: SwapOperation,
}

#[derive(Clone, Debug)]
#[contracttype]
pub struct PocToPocStep {
    pub sell: PocSellOrder,
    pub swap: SwapOperation,
    pub buy: PocBuyOrder,
}

#[derive(Clone, Debug)]
#[contracttype]
pub struct AllowanceGrant {
    pub token: Address,
    pub spender: Address,
    pub amount: u128,
}

#[derive(Clone, Debug)]
#[contracttype]
pub struct AllowanceRevoke {
    pub token: Address,
    pub spender: Address,
}
