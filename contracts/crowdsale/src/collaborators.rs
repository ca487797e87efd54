//! Interfaces of the contracts the sale hands off to. Only the calls the sale
//! makes are modelled here.

use soroban_sdk::{contractclient, Address, Env};

/// The allocation asset. The sale is its controller until finalize.
#[contractclient(name = "AllocationAssetClient")]
pub trait AllocationAsset {
    fn mint(env: Env, to: Address, amount: i128);
    fn set_controller(env: Env, new_controller: Address);
}

/// Time-locked holder of the team's reserved allocation.
#[contractclient(name = "ReserveHolderClient")]
pub trait ReserveHolder {
    fn on_sale_finalized(env: Env, finalized_at: u32);
}

/// Receives every contribution as a plain payment-token transfer and
/// releases funds to its beneficiary once notified.
#[contractclient(name = "FundsCustodianClient")]
pub trait FundsCustodian {
    fn on_sale_finalized(env: Env, finalized_at: u32);
}
