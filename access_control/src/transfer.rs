use crate::access::{AccessControl, AccessControlTrait};
use crate::constants::ADMIN_ACTIONS_DELAY;
use crate::errors::AccessControlError;
use crate::role::Role;
use crate::storage::{get_transfer_ownership_deadline, put_transfer_ownership_deadline};
use soroban_sdk::{panic_with_error, Address};
use utils::storage_errors::StorageError;

pub trait TransferOwnershipTrait {
    fn commit_transfer_ownership(&self, new_admin: Address);
    fn apply_transfer_ownership(&self) -> Address;
    fn revert_transfer_ownership(&self);
}

impl TransferOwnershipTrait for AccessControl {
    fn commit_transfer_ownership(&self, new_admin: Address) {
        if get_transfer_ownership_deadline(&self.0) != 0 {
            panic_with_error!(&self.0, AccessControlError::AnotherActionActive);
        }

        let deadline = self.0.ledger().timestamp() + ADMIN_ACTIONS_DELAY;
        put_transfer_ownership_deadline(&self.0, &deadline);
        self.set_role_address(&Role::FutureAdmin, &new_admin);
    }

    fn apply_transfer_ownership(&self) -> Address {
        if get_transfer_ownership_deadline(&self.0) == 0 {
            panic_with_error!(&self.0, AccessControlError::NoActionActive);
        }
        if self.0.ledger().timestamp() < get_transfer_ownership_deadline(&self.0) {
            panic_with_error!(&self.0, AccessControlError::ActionNotReadyYet);
        }

        put_transfer_ownership_deadline(&self.0, &0);
        let future_admin = match self.get_role_safe(&Role::FutureAdmin) {
            Some(v) => v,
            None => panic_with_error!(&self.0, StorageError::ValueNotInitialized),
        };
        self.set_role_address(&Role::Admin, &future_admin);
        future_admin
    }

    fn revert_transfer_ownership(&self) {
        put_transfer_ownership_deadline(&self.0, &0);
    }
}
