use crate::clock::Clock;
use crate::collaborators::AllocationAssetClient;
use crate::errors::Error;
use crate::types::*;
use crate::{allowance, events, finalize, ledger, phase, policy, pricing, schedule, storage};
use soroban_sdk::{log, token, Address, Env, Vec};

/// The sale state machine over contract storage, reading checkpoints from an
/// injected clock. Authorization is the caller's concern.
pub struct Sale<'a, C: Clock> {
    env: &'a Env,
    clock: C,
}

impl<'a, C: Clock> Sale<'a, C> {
    pub fn new(env: &'a Env, clock: C) -> Self {
        Self { env, clock }
    }

    pub fn initialize(
        &self,
        config: &SaleConfig,
        tiers: &Vec<Tier>,
        reserve_shares: &Vec<ReserveShare>,
        open_policy: &OpenPolicy,
    ) -> Result<(), Error> {
        if storage::is_initialized(self.env) {
            return Err(Error::AlreadyInitialized);
        }
        phase::validate_window(&config.window)?;
        if config.base_rate <= 0 {
            return Err(Error::InvalidConfig);
        }
        schedule::validate(tiers)?;
        finalize::validate_reserve_shares(reserve_shares)?;
        policy::validate(open_policy)?;

        storage::set_config(self.env, config);
        storage::set_tiers(self.env, tiers);
        storage::set_reserve_shares(self.env, reserve_shares);
        storage::set_open_policy(self.env, open_policy);
        storage::set_paused(self.env, false);
        storage::set_total_collected(self.env, 0);
        storage::set_total_allocated(self.env, 0);

        events::sale_initialized(
            self.env,
            &config.admin,
            config.window.opens_at,
            config.window.closes_at,
        );
        Ok(())
    }

    pub fn config(&self) -> Result<SaleConfig, Error> {
        storage::get_config(self.env)
    }

    pub fn phase(&self) -> Result<SalePhase, Error> {
        let config = self.config()?;
        Ok(phase::phase_at(
            &config.window,
            storage::is_paused(self.env),
            storage::is_finalized(self.env),
            self.clock.now(),
        ))
    }

    pub fn set_guaranteed_allowance(&self, participant: &Address, ceiling: i128) -> Result<(), Error> {
        allowance::set_ceiling(self.env, self.phase()?, participant, ceiling)?;
        events::allowance_set(self.env, participant, ceiling);
        Ok(())
    }

    pub fn set_open_policy(&self, open_policy: &OpenPolicy) -> Result<(), Error> {
        if self.phase()? != SalePhase::NotStarted {
            return Err(Error::PhaseClosed);
        }
        policy::validate(open_policy)?;
        storage::set_open_policy(self.env, open_policy);
        events::open_policy_set(self.env, open_policy);
        Ok(())
    }

    pub fn pause(&self) -> Result<(), Error> {
        phase::check_pause(self.phase()?)?;
        storage::set_paused(self.env, true);
        events::sale_paused(self.env, self.clock.now());
        Ok(())
    }

    pub fn resume(&self) -> Result<(), Error> {
        phase::check_resume(self.phase()?)?;
        storage::set_paused(self.env, false);
        events::sale_resumed(self.env, self.clock.now());
        Ok(())
    }

    /// Allocation `amount` would buy right now, ignoring caps and phase.
    pub fn quote(&self, amount: i128) -> Result<Quote, Error> {
        phase::check_amount(amount)?;
        let config = self.config()?;
        let tiers = storage::get_tiers(self.env)?;
        pricing::price(amount, ledger::total_collected(self.env), &tiers, config.base_rate)
    }

    /// Admits, prices and records a contribution from `payer` credited to
    /// `beneficiary`, then moves the funds and mints the allocation.
    pub fn try_contribute(
        &self,
        payer: &Address,
        beneficiary: &Address,
        amount: i128,
    ) -> Result<i128, Error> {
        phase::check_amount(amount)?;
        let config = self.config()?;
        let sub_phase = phase::admit(amount, self.phase()?)?;
        allowance::check_capacity(
            self.env,
            beneficiary,
            sub_phase,
            amount,
            &storage::get_open_policy(self.env),
        )?;

        let tiers = storage::get_tiers(self.env)?;
        let quote = pricing::price(
            amount,
            ledger::total_collected(self.env),
            &tiers,
            config.base_rate,
        )?;
        if quote.allocation <= 0 {
            return Err(Error::AllocationTooSmall);
        }

        ledger::record(self.env, beneficiary, amount, &quote)?;

        token::Client::new(self.env, &config.payment_token).transfer(
            payer,
            &config.custodian,
            &amount,
        );
        AllocationAssetClient::new(self.env, &config.allocation_asset)
            .mint(beneficiary, &quote.allocation);

        events::contribution(
            self.env,
            payer,
            beneficiary,
            amount,
            quote.allocation,
            quote.total_after,
        );
        Ok(quote.allocation)
    }

    /// Closes the sale and drives the hand-off. Safe to call repeatedly after
    /// the window closes; only outstanding steps are attempted.
    pub fn finalize(&self) -> Result<FinalizeStatus, Error> {
        let config = self.config()?;
        let now = self.clock.now();

        let finalized_at = match storage::get_finalized_at(self.env) {
            Some(at) => at,
            None => {
                if now < config.window.closes_at {
                    return Err(Error::NotEnded);
                }
                storage::set_finalized(self.env, now);
                events::sale_ended(
                    self.env,
                    now,
                    ledger::total_collected(self.env),
                    ledger::total_allocated(self.env),
                );
                now
            }
        };

        let mut progress = storage::get_progress(self.env);
        let reserve_count = storage::get_reserve_shares(self.env).len();
        if finalize::is_complete(&progress, reserve_count) {
            return Ok(FinalizeStatus {
                complete: true,
                pending: None,
            });
        }

        let pending = finalize::advance(self.env, &config, &mut progress, finalized_at)?;
        storage::set_progress(self.env, &progress);

        match pending {
            Some(step) => {
                log!(self.env, "finalize incomplete");
                events::finalize_partial(self.env, step);
            }
            None => events::finalize_done(self.env),
        }
        Ok(FinalizeStatus {
            complete: pending.is_none(),
            pending,
        })
    }
}
