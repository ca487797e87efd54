use crate::clock::LedgerClock;
use crate::engine::Sale;
use crate::errors::Error;
use crate::types::*;
use crate::{allowance, ledger, storage};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Tiered-bonus crowdsale with guaranteed allowances"
);

#[contract]
pub struct CrowdsaleContract;

fn sale(env: &Env) -> Sale<'_, LedgerClock<'_>> {
    Sale::new(env, LedgerClock::new(env))
}

fn require_admin(env: &Env) -> Result<(), Error> {
    storage::get_config(env)?.admin.require_auth();
    Ok(())
}

#[contractimpl]
impl CrowdsaleContract {
    /// Initialize the sale. Configuration, tiers and reserve shares are
    /// immutable afterwards.
    pub fn initialize(
        env: Env,
        config: SaleConfig,
        tiers: Vec<Tier>,
        reserve_shares: Vec<ReserveShare>,
        open_policy: OpenPolicy,
    ) -> Result<(), Error> {
        config.admin.require_auth();
        sale(&env).initialize(&config, &tiers, &reserve_shares, &open_policy)
    }

    /// Set the guaranteed ceiling for `participant`. Before opening only.
    pub fn set_guaranteed_allowance(
        env: Env,
        participant: Address,
        ceiling: i128,
    ) -> Result<(), Error> {
        require_admin(&env)?;
        sale(&env).set_guaranteed_allowance(&participant, ceiling)
    }

    /// Replace the open-phase policy for non-guaranteed addresses. Before
    /// opening only.
    pub fn set_open_policy(env: Env, open_policy: OpenPolicy) -> Result<(), Error> {
        require_admin(&env)?;
        sale(&env).set_open_policy(&open_policy)
    }

    pub fn pause(env: Env) -> Result<(), Error> {
        require_admin(&env)?;
        sale(&env).pause()
    }

    pub fn resume(env: Env) -> Result<(), Error> {
        require_admin(&env)?;
        sale(&env).resume()
    }

    /// Contribute `amount` of the payment token; returns the allocation minted.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<i128, Error> {
        contributor.require_auth();
        sale(&env).try_contribute(&contributor, &contributor, amount)
    }

    /// Contribute on behalf of `beneficiary`, who is credited with both the
    /// contribution and the allocation.
    pub fn contribute_for(
        env: Env,
        payer: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        payer.require_auth();
        sale(&env).try_contribute(&payer, &beneficiary, amount)
    }

    /// Close the sale once the window has ended and hand off to the
    /// collaborators. Callable by anyone, any number of times.
    pub fn finalize(env: Env) -> Result<FinalizeStatus, Error> {
        sale(&env).finalize()
    }

    // View functions
    pub fn total_collected(env: Env) -> i128 {
        ledger::total_collected(&env)
    }

    pub fn total_allocated(env: Env) -> i128 {
        ledger::total_allocated(&env)
    }

    pub fn contributed_by(env: Env, participant: Address) -> i128 {
        ledger::contributed_by(&env, &participant)
    }

    pub fn guaranteed_allowance(env: Env, participant: Address) -> Option<i128> {
        allowance::ceiling(&env, &participant)
    }

    pub fn remaining_allowance(env: Env, participant: Address) -> i128 {
        allowance::remaining(&env, &participant)
    }

    pub fn phase(env: Env) -> Result<SalePhase, Error> {
        sale(&env).phase()
    }

    pub fn quote(env: Env, amount: i128) -> Result<Quote, Error> {
        sale(&env).quote(amount)
    }

    pub fn config(env: Env) -> Result<SaleConfig, Error> {
        storage::get_config(&env)
    }

    pub fn tiers(env: Env) -> Result<Vec<Tier>, Error> {
        storage::get_tiers(&env)
    }

    pub fn open_policy(env: Env) -> OpenPolicy {
        storage::get_open_policy(&env)
    }

    pub fn reserve_shares(env: Env) -> Vec<ReserveShare> {
        storage::get_reserve_shares(&env)
    }

    pub fn finalize_progress(env: Env) -> FinalizeProgress {
        storage::get_progress(&env)
    }
}
