use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }

    pub fn rebalance(&self, kind: Symbol, used_amount: u128, profit: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "rebalance"), kind),
            (used_amount, profit),
        )
    }

    pub fn withdraw_profit(&self, role: Symbol, wallet: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "withdraw_profit"), role),
            (wallet, amount),
        )
    }

    pub fn rotate_wallet(
        &self,
        role: Symbol,
        old_wallet: Address,
        new_wallet: Address,
        carried: u128,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "rotate_wallet"), role),
            (old_wallet, new_wallet, carried),
        )
    }

    pub fn set_governance_wallet(&self, wallet: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_governance_wallet"),),
            (wallet,),
        )
    }

    pub fn set_min_profit(&self, min_profit_bps: u32) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_min_profit"),),
            (min_profit_bps,),
        )
    }

    pub fn set_withdraw_lock(&self, lock_until: u64) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_withdraw_lock"),),
            (lock_until,),
        )
    }

    pub fn grant_allowance(&self, token: Address, spender: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "grant_allowance"),),
            (token, spender, amount),
        )
    }

    pub fn revoke_allowance(&self, token: Address, spender: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "revoke_allowance"),),
            (token, spender),
        )
    }

    pub fn withdraw(&self, token: Address, amount: u128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "withdraw"),), (token, amount))
    }
}
