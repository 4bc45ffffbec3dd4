use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RebalancerError {
    AlreadyInitialized = 201,
    GovernanceWalletAlreadySet = 202,
    InvalidPath = 203,
    InvalidV3Path = 204,
    UnknownRouterType = 205,
    InvalidLaunchToken = 206,
    InvalidCollateralToken = 207,
    LaunchTokenBalanceNotIncreased = 208,
    MinProfitNotReached = 209,
    MinProfitOutOfBounds = 210,
    WithdrawLockNotExpired = 211,
    WithdrawLaunchLocked = 212,
    WithdrawLockDecreased = 213,
}
