#![no_std]

mod allowance;
mod clock;
pub mod collaborators;
mod constants;
mod contract;
mod engine;
mod errors;
mod events;
mod finalize;
mod ledger;
mod phase;
mod policy;
mod pricing;
pub mod schedule;
mod storage;
mod types;


pub use clock::{Clock, LedgerClock};
pub use constants::*;
pub use contract::{CrowdsaleContract, CrowdsaleContractClient};
pub use errors::Error;
pub use pricing::price;
pub use types::*;
