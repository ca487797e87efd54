use crate::errors::Error;
use crate::phase::SubPhase;
use crate::policy::{AdmissionPolicy, GuaranteedCeiling};
use crate::storage;
use crate::types::{OpenPolicy, SalePhase};
use soroban_sdk::{Address, Env};

/// Records a guaranteed ceiling. Only allowed before the window opens; a
/// second write for the same address replaces the first.
pub fn set_ceiling(
    env: &Env,
    phase: SalePhase,
    participant: &Address,
    ceiling: i128,
) -> Result<(), Error> {
    if phase != SalePhase::NotStarted {
        return Err(Error::PhaseClosed);
    }
    if ceiling < 0 {
        return Err(Error::InvalidAmount);
    }
    storage::set_allowance(env, participant, ceiling);
    Ok(())
}

pub fn ceiling(env: &Env, participant: &Address) -> Option<i128> {
    storage::get_allowance(env, participant)
}

pub fn remaining(env: &Env, participant: &Address) -> i128 {
    match ceiling(env, participant) {
        Some(ceiling) => (ceiling - storage::get_contributed(env, participant)).max(0),
        None => 0,
    }
}

/// Capacity check for `participant`: its guaranteed ceiling if it has one,
/// otherwise the open-phase policy.
pub fn check_capacity(
    env: &Env,
    participant: &Address,
    sub_phase: SubPhase,
    amount: i128,
    open_policy: &OpenPolicy,
) -> Result<(), Error> {
    let contributed = storage::get_contributed(env, participant);
    match ceiling(env, participant) {
        Some(ceiling) => GuaranteedCeiling(ceiling).admit(sub_phase, contributed, amount),
        None => open_policy.admit(sub_phase, contributed, amount),
    }
}
