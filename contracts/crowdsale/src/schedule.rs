//! Bonus tier schedule.
//!
//! Tiers are ordered by `upper_bound` and partition `[0, inf)` into half-open
//! ranges `[lower, upper)`. A cumulative total sitting exactly on a bound
//! belongs to the following tier.

use crate::constants::*;
use crate::errors::Error;
use crate::types::Tier;
use soroban_sdk::{Env, Vec};

/// Checks ordering, coverage and bonus monotonicity.
pub fn validate(tiers: &Vec<Tier>) -> Result<(), Error> {
    let len = tiers.len();
    if len == 0 || len > MAX_TIERS {
        return Err(Error::InvalidSchedule);
    }

    let mut prev_bound: i128 = 0;
    let mut prev_multiplier = u32::MAX;
    for (i, tier) in tiers.iter().enumerate() {
        let is_last = i as u32 == len - 1;
        match (tier.upper_bound, is_last) {
            (Some(bound), false) => {
                if bound <= prev_bound {
                    return Err(Error::InvalidSchedule);
                }
                prev_bound = bound;
            }
            (None, true) => {}
            _ => return Err(Error::InvalidSchedule),
        }

        if tier.multiplier_bps == 0 || tier.multiplier_bps > prev_multiplier {
            return Err(Error::InvalidSchedule);
        }
        prev_multiplier = tier.multiplier_bps;
    }

    Ok(())
}

/// Index of the tier whose range contains `total`.
pub fn tier_index_for(tiers: &Vec<Tier>, total: i128) -> u32 {
    for (i, tier) in tiers.iter().enumerate() {
        match tier.upper_bound {
            Some(bound) if total >= bound => continue,
            _ => return i as u32,
        }
    }
    tiers.len().saturating_sub(1)
}

/// The reference schedule with bounds expressed in `unit`s of the payment
/// token (e.g. `10_000_000` for a 7-decimal asset).
pub fn reference_tiers(env: &Env, unit: i128) -> Vec<Tier> {
    let mut tiers = Vec::new(env);
    for (i, multiplier_bps) in REFERENCE_MULTIPLIERS_BPS.iter().enumerate() {
        let upper_bound = REFERENCE_BOUNDS.get(i).map(|bound| bound * unit);
        tiers.push_back(Tier {
            upper_bound,
            multiplier_bps: *multiplier_bps,
        });
    }
    tiers
}
