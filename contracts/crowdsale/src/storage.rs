use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_tiers(env: &Env) -> Result<Vec<Tier>, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Tiers)
        .ok_or(Error::NotInitialized)
}

pub fn set_tiers(env: &Env, tiers: &Vec<Tier>) {
    env.storage().instance().set(&DataKey::Tiers, tiers);
}

pub fn get_reserve_shares(env: &Env) -> Vec<ReserveShare> {
    env.storage()
        .instance()
        .get(&DataKey::ReserveShares)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_reserve_shares(env: &Env, shares: &Vec<ReserveShare>) {
    env.storage().instance().set(&DataKey::ReserveShares, shares);
}

pub fn get_open_policy(env: &Env) -> OpenPolicy {
    env.storage()
        .instance()
        .get(&DataKey::OpenPolicy)
        .unwrap_or(OpenPolicy::Unrestricted)
}

pub fn set_open_policy(env: &Env, policy: &OpenPolicy) {
    env.storage().instance().set(&DataKey::OpenPolicy, policy);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn set_finalized(env: &Env, finalized_at: u32) {
    env.storage().instance().set(&DataKey::Finalized, &true);
    env.storage()
        .instance()
        .set(&DataKey::FinalizedAt, &finalized_at);
}

pub fn get_finalized_at(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::FinalizedAt)
}

pub fn get_progress(env: &Env) -> FinalizeProgress {
    env.storage()
        .instance()
        .get(&DataKey::Progress)
        .unwrap_or_default()
}

pub fn set_progress(env: &Env, progress: &FinalizeProgress) {
    env.storage().instance().set(&DataKey::Progress, progress);
}

pub fn get_total_collected(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalCollected)
        .unwrap_or(0)
}

pub fn set_total_collected(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalCollected, &amount);
}

pub fn get_total_allocated(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalAllocated)
        .unwrap_or(0)
}

pub fn set_total_allocated(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalAllocated, &amount);
}

pub fn get_allowance(env: &Env, participant: &Address) -> Option<i128> {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(participant.clone()))
}

pub fn set_allowance(env: &Env, participant: &Address, ceiling: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Allowance(participant.clone()), &ceiling);
}

pub fn get_contributed(env: &Env, participant: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contributed(participant.clone()))
        .unwrap_or(0)
}

pub fn set_contributed(env: &Env, participant: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Contributed(participant.clone()), &amount);
}
