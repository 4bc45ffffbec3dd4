#![no_std]

mod constants;
mod contract;
mod dao;
pub mod errors;
mod events;
mod interface;
mod ledger;
mod poc;
mod storage;
mod swap;
mod test;
mod test_permissions;
mod testutils;
pub mod types;

pub use crate::contract::{Rebalancer, RebalancerClient};
