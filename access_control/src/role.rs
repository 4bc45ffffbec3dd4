use crate::errors::AccessControlError;
use soroban_sdk::{panic_with_error, Env, Symbol};

#[derive(Clone)]
pub enum Role {
    Admin,
    FutureAdmin,
    MeraFund,
    PocRoyalty,
    PocBuyback,
    Governance,
}

impl Role {
    // Rotatable roles may be reassigned by their current holder.
    // Admin is handed over through the delayed transfer flow instead.
    pub fn is_rotatable(&self) -> bool {
        match self {
            Role::Admin => false,
            Role::FutureAdmin => false,
            Role::MeraFund => true,
            Role::PocRoyalty => true,
            Role::PocBuyback => true,
            Role::Governance => false,
        }
    }
}

pub trait SymbolRepresentation {
    fn as_symbol(&self, e: &Env) -> Symbol;
    fn from_symbol(e: &Env, value: Symbol) -> Self;
}

impl SymbolRepresentation for Role {
    fn as_symbol(&self, e: &Env) -> Symbol {
        match self {
            Role::Admin => Symbol::new(e, "Admin"),
            Role::FutureAdmin => Symbol::new(e, "FutureAdmin"),
            Role::MeraFund => Symbol::new(e, "MeraFund"),
            Role::PocRoyalty => Symbol::new(e, "PocRoyalty"),
            Role::PocBuyback => Symbol::new(e, "PocBuyback"),
            Role::Governance => Symbol::new(e, "Governance"),
        }
    }

    fn from_symbol(e: &Env, value: Symbol) -> Self {
        if value == Symbol::new(e, "Admin") {
            return Role::Admin;
        } else if value == Symbol::new(e, "FutureAdmin") {
            return Role::FutureAdmin;
        } else if value == Symbol::new(e, "MeraFund") {
            return Role::MeraFund;
        } else if value == Symbol::new(e, "PocRoyalty") {
            return Role::PocRoyalty;
        } else if value == Symbol::new(e, "PocBuyback") {
            return Role::PocBuyback;
        } else if value == Symbol::new(e, "Governance") {
            return Role::Governance;
        }
        panic_with_error!(e, AccessControlError::BadRoleUsage);
    }
}
