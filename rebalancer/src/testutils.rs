#![cfg(test)]
extern crate std;

use crate::dao::PocRecord;
use crate::swap::ROUTER_TYPE_TOKEN_LIST;
use crate::types::{AllowanceGrant, SwapOperation};
use crate::{Rebalancer, RebalancerClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, token, vec, Address, Bytes, Env,
    Symbol, Vec,
};
use utils::storage_errors::StorageError;

pub(crate) const ALLOWANCE_AMOUNT: u128 = 1_000_000_000_000_000;

// Venue rate shared by all mock router variants: out = in * num / den.
fn put_rate(e: &Env, num: u128, den: u128) {
    e.storage().instance().set(&symbol_short!("num"), &num);
    e.storage().instance().set(&symbol_short!("den"), &den);
}

fn get_rate(e: &Env) -> (u128, u128) {
    (
        e.storage()
            .instance()
            .get(&symbol_short!("num"))
            .unwrap_or(1),
        e.storage()
            .instance()
            .get(&symbol_short!("den"))
            .unwrap_or(1),
    )
}

fn venue_swap(
    e: &Env,
    token_in: &Address,
    token_out: &Address,
    in_amount: u128,
    min_out: u128,
    to: &Address,
) -> u128 {
    let (num, den) = get_rate(e);
    let out = in_amount * num / den;
    if out < min_out {
        panic!("slippage");
    }
    let venue = e.current_contract_address();
    token::Client::new(e, token_in).transfer_from(&venue, to, &venue, &(in_amount as i128));
    token::Client::new(e, token_out).transfer(&venue, to, &(out as i128));
    out
}

fn path_first_token(path: &Bytes) -> Address {
    Address::from_string_bytes(&path.slice(0..56))
}

fn path_last_token(path: &Bytes) -> Address {
    Address::from_string_bytes(&path.slice(path.len() - 56..path.len()))
}

mod token_list_amm {
    use super::*;

    #[contract]
    pub(crate) struct MockTokenListAmm;

    #[contractimpl]
    impl MockTokenListAmm {
        pub fn init(e: Env, rate_num: u128, rate_den: u128) {
            put_rate(&e, rate_num, rate_den);
        }

        pub fn swap_in(
            e: Env,
            in_amount: u128,
            min_out: u128,
            path: Vec<Address>,
            to: Address,
            _deadline: u64,
        ) -> Vec<u128> {
            let token_in = path.first().unwrap();
            let token_out = path.last().unwrap();
            let out = venue_swap(&e, &token_in, &token_out, in_amount, min_out, &to);
            vec![&e, in_amount, out]
        }
    }
}
pub(crate) use token_list_amm::{MockTokenListAmm, MockTokenListAmmClient};

mod exact_in_amm {
    use super::*;

    #[contract]
    pub(crate) struct MockExactInAmm;

    #[contractimpl]
    impl MockExactInAmm {
        pub fn init(e: Env, rate_num: u128, rate_den: u128) {
            put_rate(&e, rate_num, rate_den);
        }

        pub fn exact_input(
            e: Env,
            path: Bytes,
            to: Address,
            _deadline: u64,
            in_amount: u128,
            min_out: u128,
        ) -> u128 {
            let token_in = path_first_token(&path);
            let token_out = path_last_token(&path);
            venue_swap(&e, &token_in, &token_out, in_amount, min_out, &to)
        }
    }
}
pub(crate) use exact_in_amm::{MockExactInAmm, MockExactInAmmClient};

mod exact_in_no_deadline_amm {
    use super::*;

    #[contract]
    pub(crate) struct MockExactInNoDeadlineAmm;

    #[contractimpl]
    impl MockExactInNoDeadlineAmm {
        pub fn init(e: Env, rate_num: u128, rate_den: u128) {
            put_rate(&e, rate_num, rate_den);
        }

        pub fn exact_input(
            e: Env,
            path: Bytes,
            to: Address,
            in_amount: u128,
            min_out: u128,
        ) -> u128 {
            let token_in = path_first_token(&path);
            let token_out = path_last_token(&path);
            venue_swap(&e, &token_in, &token_out, in_amount, min_out, &to)
        }
    }
}
pub(crate) use exact_in_no_deadline_amm::{
    MockExactInNoDeadlineAmm, MockExactInNoDeadlineAmmClient,
};

mod multihop_amm {
    use super::*;

    #[contract]
    pub(crate) struct MockMultihopAmm;

    #[contractimpl]
    impl MockMultihopAmm {
        pub fn init(e: Env, rate_num: u128, rate_den: u128) {
            put_rate(&e, rate_num, rate_den);
        }

        pub fn swap_path(e: Env, path: Bytes, in_amount: u128, min_out: u128, to: Address) -> u128 {
            let token_in = path_first_token(&path);
            let token_out = path_last_token(&path);
            venue_swap(&e, &token_in, &token_out, in_amount, min_out, &to)
        }
    }
}
pub(crate) use multihop_amm::{MockMultihopAmm, MockMultihopAmmClient};

mod poc {
    use super::*;

    #[contract]
    pub(crate) struct MockPoc;

    #[contractimpl]
    impl MockPoc {
        pub fn init(
            e: Env,
            launch: Address,
            collateral: Address,
            buy_num: u128,
            buy_den: u128,
            sell_num: u128,
            sell_den: u128,
        ) {
            e.storage()
                .instance()
                .set(&symbol_short!("launch"), &launch);
            e.storage()
                .instance()
                .set(&symbol_short!("col"), &collateral);
            e.storage().instance().set(
                &symbol_short!("rates"),
                &(buy_num, buy_den, sell_num, sell_den),
            );
        }

        pub fn collateral(e: Env) -> Address {
            e.storage().instance().get(&symbol_short!("col")).unwrap()
        }

        pub fn buy(e: Env, from: Address, collateral_amount: u128) -> u128 {
            from.require_auth();
            let launch: Address = e
                .storage()
                .instance()
                .get(&symbol_short!("launch"))
                .unwrap();
            let collateral = Self::collateral(e.clone());
            let (buy_num, buy_den, _, _): (u128, u128, u128, u128) =
                e.storage().instance().get(&symbol_short!("rates")).unwrap();

            let poc = e.current_contract_address();
            token::Client::new(&e, &collateral).transfer_from(
                &poc,
                &from,
                &poc,
                &(collateral_amount as i128),
            );
            let launch_out = collateral_amount * buy_num / buy_den;
            token::Client::new(&e, &launch).transfer(&poc, &from, &(launch_out as i128));
            launch_out
        }

        pub fn sell(e: Env, from: Address, launch_amount: u128) -> u128 {
            from.require_auth();
            let launch: Address = e
                .storage()
                .instance()
                .get(&symbol_short!("launch"))
                .unwrap();
            let collateral = Self::collateral(e.clone());
            let (_, _, sell_num, sell_den): (u128, u128, u128, u128) =
                e.storage().instance().get(&symbol_short!("rates")).unwrap();

            let poc = e.current_contract_address();
            token::Client::new(&e, &launch).transfer_from(
                &poc,
                &from,
                &poc,
                &(launch_amount as i128),
            );
            let collateral_out = launch_amount * sell_num / sell_den;
            token::Client::new(&e, &collateral).transfer(&poc, &from, &(collateral_out as i128));
            collateral_out
        }
    }
}
pub(crate) use poc::{MockPoc, MockPocClient};

mod dao {
    use super::*;

    #[contract]
    pub(crate) struct MockDao;

    #[contractimpl]
    impl MockDao {
        pub fn init(e: Env, stage: u32) {
            e.storage().instance().set(&symbol_short!("stage"), &stage);
            e.storage()
                .instance()
                .set(&symbol_short!("registry"), &Vec::<PocRecord>::new(&e));
        }

        pub fn set_stage(e: Env, stage: u32) {
            e.storage().instance().set(&symbol_short!("stage"), &stage);
        }

        pub fn get_stage(e: Env) -> u32 {
            e.storage().instance().get(&symbol_short!("stage")).unwrap()
        }

        pub fn add_poc(e: Env, poc: Address) {
            let mut registry: Vec<PocRecord> = e
                .storage()
                .instance()
                .get(&symbol_short!("registry"))
                .unwrap();
            registry.push_back(PocRecord {
                address: poc,
                active: true,
            });
            e.storage()
                .instance()
                .set(&symbol_short!("registry"), &registry);
        }

        pub fn set_poc_active(e: Env, index: u32, active: bool) {
            let mut registry: Vec<PocRecord> = e
                .storage()
                .instance()
                .get(&symbol_short!("registry"))
                .unwrap();
            let mut record = registry.get(index).unwrap();
            record.active = active;
            registry.set(index, record);
            e.storage()
                .instance()
                .set(&symbol_short!("registry"), &registry);
        }

        pub fn poc_index(e: Env, poc: Address) -> u32 {
            let registry: Vec<PocRecord> = e
                .storage()
                .instance()
                .get(&symbol_short!("registry"))
                .unwrap();
            for i in 0..registry.len() {
                if registry.get(i).unwrap().address == poc {
                    return i;
                }
            }
            panic_with_error!(&e, StorageError::ValueMissing);
        }

        pub fn poc_record(e: Env, index: u32) -> PocRecord {
            let registry: Vec<PocRecord> = e
                .storage()
                .instance()
                .get(&symbol_short!("registry"))
                .unwrap();
            registry.get(index).unwrap()
        }
    }
}
pub(crate) use dao::{MockDao, MockDaoClient};

// Governance entity whose every query traps. Used to exercise the
// fail-closed behavior of the gate.
mod broken_dao {
    use super::*;

    #[contract]
    pub(crate) struct MockBrokenDao;

    #[contractimpl]
    impl MockBrokenDao {
        pub fn get_stage(_e: Env) -> u32 {
            panic!("dao is broken")
        }

        pub fn poc_index(_e: Env, _poc: Address) -> u32 {
            panic!("dao is broken")
        }

        pub fn poc_record(_e: Env, _index: u32) -> PocRecord {
            panic!("dao is broken")
        }
    }
}
pub(crate) use broken_dao::MockBrokenDao;

pub(crate) fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac = e.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(e, &sac.address()),
        token::StellarAssetClient::new(e, &sac.address()),
    )
}

pub(crate) fn address_to_strkey_bytes(e: &Env, address: &Address) -> Bytes {
    let strkey = address.to_string();
    let mut buf = [0u8; 56];
    strkey.copy_into_slice(&mut buf);
    Bytes::from_slice(e, &buf)
}

pub(crate) fn encode_path(e: &Env, tokens: &[&Address], fees: &[u32]) -> Bytes {
    let mut path = Bytes::new(e);
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            path.extend_from_array(&fees[i - 1].to_be_bytes());
        }
        path.append(&address_to_strkey_bytes(e, token));
    }
    path
}

pub(crate) fn token_list_swap(
    e: &Env,
    venue: &Address,
    tokens: &[&Address],
    min_out: u128,
) -> SwapOperation {
    let mut token_list = Vec::new(e);
    for token in tokens {
        token_list.push_back((*token).clone());
    }
    SwapOperation {
        protocol: ROUTER_TYPE_TOKEN_LIST,
        venue: venue.clone(),
        tokens: token_list,
        path: Bytes::new(e),
        min_out,
    }
}

pub(crate) fn path_swap(
    e: &Env,
    protocol: Symbol,
    venue: &Address,
    tokens: &[&Address],
    fees: &[u32],
    min_out: u128,
) -> SwapOperation {
    SwapOperation {
        protocol,
        venue: venue.clone(),
        tokens: Vec::new(e),
        path: encode_path(e, tokens, fees),
        min_out,
    }
}

pub(crate) struct TestConfig {
    pub(crate) amm_rate: (u128, u128),
    pub(crate) poc_buy_rate: (u128, u128),
    pub(crate) poc_sell_rate: (u128, u128),
    pub(crate) set_governance: bool,
    pub(crate) broken_dao: bool,
    pub(crate) grant_allowances: bool,
    pub(crate) mint_amount: u128,
}

impl Default for TestConfig {
    fn default() -> Self {
        TestConfig {
            amm_rate: (11, 10),
            poc_buy_rate: (11, 10),
            poc_sell_rate: (11, 10),
            set_governance: true,
            broken_dao: false,
            grant_allowances: true,
            mint_amount: 1_000_000,
        }
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    pub(crate) mera_fund: Address,
    pub(crate) poc_royalty: Address,
    pub(crate) poc_buyback: Address,
    pub(crate) governance: Address,

    pub(crate) launch_token: token::Client<'a>,
    pub(crate) launch_asset: token::StellarAssetClient<'a>,
    pub(crate) collateral_token: token::Client<'a>,
    pub(crate) collateral_asset: token::StellarAssetClient<'a>,

    pub(crate) rebalancer: RebalancerClient<'a>,
    pub(crate) amm: Address,
    pub(crate) poc: Address,
    pub(crate) dao: Address,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        Self::new_with_config(&TestConfig::default())
    }
}

impl Setup<'_> {
    pub(crate) fn new_with_config(config: &TestConfig) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let mera_fund = Address::generate(&env);
        let poc_royalty = Address::generate(&env);
        let poc_buyback = Address::generate(&env);
        let governance = Address::generate(&env);

        let token_admin = Address::generate(&env);
        let (launch_token, launch_asset) = create_token_contract(&env, &token_admin);
        let (collateral_token, collateral_asset) = create_token_contract(&env, &token_admin);

        let dao = if config.broken_dao {
            env.register(MockBrokenDao, ())
        } else {
            let dao = MockDaoClient::new(&env, &env.register(MockDao, ()));
            dao.init(&1);
            dao.address.clone()
        };

        let amm = env.register(MockTokenListAmm, ());
        MockTokenListAmmClient::new(&env, &amm).init(&config.amm_rate.0, &config.amm_rate.1);

        let poc = env.register(MockPoc, ());
        MockPocClient::new(&env, &poc).init(
            &launch_token.address,
            &collateral_token.address,
            &config.poc_buy_rate.0,
            &config.poc_buy_rate.1,
            &config.poc_sell_rate.0,
            &config.poc_sell_rate.1,
        );

        if !config.broken_dao {
            let dao_client = MockDaoClient::new(&env, &dao);
            dao_client.add_poc(&poc);
            dao_client.add_poc(&amm);
        }

        let rebalancer = RebalancerClient::new(&env, &env.register(Rebalancer, ()));
        let governance_arg = if config.set_governance {
            Some(governance.clone())
        } else {
            None
        };
        rebalancer.initialize(
            &admin,
            &launch_token.address,
            &dao,
            &mera_fund,
            &poc_royalty,
            &poc_buyback,
            &governance_arg,
        );

        let mint_amount = config.mint_amount as i128;
        launch_asset.mint(&rebalancer.address, &mint_amount);
        launch_asset.mint(&amm, &mint_amount);
        launch_asset.mint(&poc, &mint_amount);
        collateral_asset.mint(&amm, &mint_amount);
        collateral_asset.mint(&poc, &mint_amount);

        let setup = Setup {
            env,
            admin,
            mera_fund,
            poc_royalty,
            poc_buyback,
            governance,
            launch_token,
            launch_asset,
            collateral_token,
            collateral_asset,
            rebalancer,
            amm,
            poc,
            dao,
        };

        if config.grant_allowances {
            setup.grant(&setup.launch_token.address.clone(), &setup.amm.clone());
            setup.grant(&setup.collateral_token.address.clone(), &setup.amm.clone());
            setup.grant(&setup.launch_token.address.clone(), &setup.poc.clone());
            setup.grant(&setup.collateral_token.address.clone(), &setup.poc.clone());
        }

        setup
    }

    pub(crate) fn dao_client(&self) -> MockDaoClient<'_> {
        MockDaoClient::new(&self.env, &self.dao)
    }

    pub(crate) fn grant(&self, token: &Address, spender: &Address) {
        self.rebalancer.grant_allowance(
            &self.admin,
            &vec![
                &self.env,
                AllowanceGrant {
                    token: token.clone(),
                    spender: spender.clone(),
                    amount: ALLOWANCE_AMOUNT,
                },
            ],
        );
    }

    // Register an extra ordered-list venue with its own rate, approve it in
    // the registry, fund it and grant it allowances.
    pub(crate) fn register_token_list_amm(&self, rate_num: u128, rate_den: u128) -> Address {
        let venue = self.env.register(MockTokenListAmm, ());
        MockTokenListAmmClient::new(&self.env, &venue).init(&rate_num, &rate_den);
        self.dao_client().add_poc(&venue);
        self.launch_asset.mint(&venue, &1_000_000);
        self.collateral_asset.mint(&venue, &1_000_000);
        self.grant(&self.launch_token.address, &venue);
        self.grant(&self.collateral_token.address, &venue);
        venue
    }

    // Register an extra bonding curve counterpart trading the launch token
    // against `collateral`.
    pub(crate) fn register_poc(
        &self,
        collateral: &Address,
        buy_num: u128,
        buy_den: u128,
        sell_num: u128,
        sell_den: u128,
    ) -> Address {
        let poc = self.env.register(MockPoc, ());
        MockPocClient::new(&self.env, &poc).init(
            &self.launch_token.address,
            collateral,
            &buy_num,
            &buy_den,
            &sell_num,
            &sell_den,
        );
        self.dao_client().add_poc(&poc);
        self.launch_asset.mint(&poc, &1_000_000);
        self.grant(&self.launch_token.address, &poc);
        self.grant(collateral, &poc);
        poc
    }
}
