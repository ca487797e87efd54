use crate::constants::MULTIPLIER_SCALE;
use crate::errors::Error;
use crate::schedule::tier_index_for;
use crate::types::{Quote, Tier};
use soroban_sdk::Vec;

/// Converts `amount` into an allocation, consuming it tier by tier starting at
/// `total_before`.
///
/// Each slice contributes `slice * multiplier_bps` to an exact running sum;
/// the base rate and the bps scale are applied once at the end so no
/// precision is lost between slices.
pub fn price(
    amount: i128,
    total_before: i128,
    tiers: &Vec<Tier>,
    base_rate: i128,
) -> Result<Quote, Error> {
    if amount == 0 {
        return Err(Error::ZeroAmount);
    }
    if amount < 0 || total_before < 0 {
        return Err(Error::InvalidAmount);
    }

    let mut weighted: i128 = 0;
    let mut running = total_before;
    let mut remaining = amount;
    let mut index = tier_index_for(tiers, running);

    while remaining > 0 {
        let tier = tiers.get(index).ok_or(Error::InvalidSchedule)?;
        let slice = match tier.upper_bound {
            Some(bound) => remaining.min(bound - running),
            None => remaining,
        };

        let slice_weight = slice
            .checked_mul(tier.multiplier_bps as i128)
            .ok_or(Error::Overflow)?;
        weighted = weighted.checked_add(slice_weight).ok_or(Error::Overflow)?;

        running = running.checked_add(slice).ok_or(Error::Overflow)?;
        remaining -= slice;
        index += 1;
    }

    let allocation = weighted
        .checked_mul(base_rate)
        .ok_or(Error::Overflow)?
        / MULTIPLIER_SCALE;

    Ok(Quote {
        allocation,
        total_after: running,
    })
}
