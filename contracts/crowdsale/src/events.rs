use crate::types::{FinalizeStep, OpenPolicy};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ==================== Event Topics ====================

const INITIALIZED: Symbol = symbol_short!("init");
const ALLOWANCE_SET: Symbol = symbol_short!("allow");
const POLICY_SET: Symbol = symbol_short!("policy");
const PAUSED: Symbol = symbol_short!("paused");
const RESUMED: Symbol = symbol_short!("resumed");
const CONTRIBUTION: Symbol = symbol_short!("contrib");
const ENDED: Symbol = symbol_short!("ended");
const FINALIZE_STEP: Symbol = symbol_short!("fin_step");
const FINALIZE_PARTIAL: Symbol = symbol_short!("fin_part");
const FINALIZE_DONE: Symbol = symbol_short!("fin_done");

// ==================== Emitters ====================

pub fn sale_initialized(env: &Env, admin: &Address, opens_at: u32, closes_at: u32) {
    env.events()
        .publish((INITIALIZED, admin.clone()), (opens_at, closes_at));
}

pub fn allowance_set(env: &Env, participant: &Address, ceiling: i128) {
    env.events()
        .publish((ALLOWANCE_SET, participant.clone()), ceiling);
}

pub fn open_policy_set(env: &Env, policy: &OpenPolicy) {
    env.events().publish((POLICY_SET,), policy.clone());
}

pub fn sale_paused(env: &Env, at: u32) {
    env.events().publish((PAUSED,), at);
}

pub fn sale_resumed(env: &Env, at: u32) {
    env.events().publish((RESUMED,), at);
}

pub fn contribution(
    env: &Env,
    payer: &Address,
    beneficiary: &Address,
    amount: i128,
    allocation: i128,
    total_collected: i128,
) {
    env.events().publish(
        (CONTRIBUTION, beneficiary.clone()),
        (payer.clone(), amount, allocation, total_collected),
    );
}

pub fn sale_ended(env: &Env, finalized_at: u32, total_collected: i128, total_allocated: i128) {
    env.events()
        .publish((ENDED,), (finalized_at, total_collected, total_allocated));
}

pub fn finalize_step_done(env: &Env, step: FinalizeStep) {
    env.events().publish((FINALIZE_STEP,), step);
}

pub fn finalize_partial(env: &Env, pending: FinalizeStep) {
    env.events().publish((FINALIZE_PARTIAL,), pending);
}

pub fn finalize_done(env: &Env) {
    env.events().publish((FINALIZE_DONE,), ());
}
