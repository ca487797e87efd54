//! Hand-off to the collaborators once the window has closed.
//!
//! The steps run in a fixed order and each one is attempted with a `try_`
//! call. A failing step stops the run; progress is kept so the next
//! `finalize` resumes at that step. Completed steps are never repeated.

use crate::collaborators::{AllocationAssetClient, FundsCustodianClient, ReserveHolderClient};
use crate::constants::{BPS_SCALE, MAX_RESERVE_SHARES};
use crate::errors::Error;
use crate::types::{FinalizeProgress, FinalizeStep, ReserveShare, SaleConfig};
use crate::{events, storage};
use soroban_sdk::{log, Env, Vec};

pub fn validate_reserve_shares(shares: &Vec<ReserveShare>) -> Result<(), Error> {
    if shares.len() > MAX_RESERVE_SHARES {
        return Err(Error::InvalidConfig);
    }
    let mut total_bps: u32 = 0;
    for share in shares.iter() {
        if share.bps == 0 {
            return Err(Error::InvalidConfig);
        }
        total_bps = total_bps.saturating_add(share.bps);
    }
    if total_bps >= BPS_SCALE {
        return Err(Error::InvalidConfig);
    }
    Ok(())
}

/// Reserved amount for a share of `bps` when `reserved_bps` of the final
/// supply is held back in total and `sold` was allocated to contributors.
pub fn reserve_amount(sold: i128, bps: u32, reserved_bps: u32) -> Result<i128, Error> {
    let scale = BPS_SCALE as i128;
    let sold_bps = scale - reserved_bps as i128;
    if sold_bps <= 0 {
        return Err(Error::InvalidConfig);
    }
    let supply = sold.checked_mul(scale).ok_or(Error::Overflow)? / sold_bps;
    Ok(supply.checked_mul(bps as i128).ok_or(Error::Overflow)? / scale)
}

pub fn is_complete(progress: &FinalizeProgress, reserve_count: u32) -> bool {
    progress.reserves_minted >= reserve_count
        && progress.controller_transferred
        && progress.holder_notified
        && progress.custodian_notified
}

/// Runs every outstanding step. Returns the step that failed, if any.
pub fn advance(
    env: &Env,
    config: &SaleConfig,
    progress: &mut FinalizeProgress,
    finalized_at: u32,
) -> Result<Option<FinalizeStep>, Error> {
    let shares = storage::get_reserve_shares(env);
    let asset = AllocationAssetClient::new(env, &config.allocation_asset);

    if progress.reserves_minted < shares.len() {
        let sold = storage::get_total_allocated(env);
        let reserved_bps = shares.iter().map(|s| s.bps).sum::<u32>();
        while progress.reserves_minted < shares.len() {
            let share = shares
                .get(progress.reserves_minted)
                .ok_or(Error::InvalidConfig)?;
            let amount = reserve_amount(sold, share.bps, reserved_bps)?;
            if amount > 0 && !succeeded(asset.try_mint(&share.recipient, &amount)) {
                log!(env, "reserve mint failed", progress.reserves_minted);
                return Ok(Some(FinalizeStep::MintReserves));
            }
            progress.reserves_minted += 1;
        }
        events::finalize_step_done(env, FinalizeStep::MintReserves);
    }

    if !progress.controller_transferred {
        if !succeeded(asset.try_set_controller(&config.successor_controller)) {
            log!(env, "controller transfer failed");
            return Ok(Some(FinalizeStep::TransferController));
        }
        progress.controller_transferred = true;
        events::finalize_step_done(env, FinalizeStep::TransferController);
    }

    if !progress.holder_notified {
        let holder = ReserveHolderClient::new(env, &config.reserve_holder);
        if !succeeded(holder.try_on_sale_finalized(&finalized_at)) {
            log!(env, "reserve holder notification failed");
            return Ok(Some(FinalizeStep::NotifyReserveHolder));
        }
        progress.holder_notified = true;
        events::finalize_step_done(env, FinalizeStep::NotifyReserveHolder);
    }

    if !progress.custodian_notified {
        let custodian = FundsCustodianClient::new(env, &config.custodian);
        if !succeeded(custodian.try_on_sale_finalized(&finalized_at)) {
            log!(env, "custodian notification failed");
            return Ok(Some(FinalizeStep::NotifyCustodian));
        }
        progress.custodian_notified = true;
        events::finalize_step_done(env, FinalizeStep::NotifyCustodian);
    }

    Ok(None)
}

fn succeeded<T, E, F>(result: Result<Result<T, E>, F>) -> bool {
    matches!(result, Ok(Ok(_)))
}
