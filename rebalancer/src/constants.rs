// basis points denominator. 10000 = 100%
pub const BPS_DENOMINATOR: u128 = 10000;

// fixed profit split. the governance share is derived as the remainder
// so the four buckets always sum exactly to the recorded profit
pub const MERA_FUND_SHARE_BPS: u128 = 500;
pub const POC_ROYALTY_SHARE_BPS: u128 = 500;
pub const POC_BUYBACK_SHARE_BPS: u128 = 4500;

// inclusive bounds for the tunable minimum profit threshold. 100 = 1%
pub const MIN_PROFIT_BPS_LOWER: u32 = 100;
pub const MIN_PROFIT_BPS_UPPER: u32 = 500;
