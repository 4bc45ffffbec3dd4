use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccessControlError {
    AdminNotFound = 101,
    Unauthorized = 102,
    AdminAlreadySet = 103,
    RoleNotFound = 104,
    AnotherActionActive = 105,
    NoActionActive = 106,
    ActionNotReadyYet = 107,
    BadRoleUsage = 108,
}
