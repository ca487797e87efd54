use crate::errors::Error;
use crate::storage;
use crate::types::Quote;
use soroban_sdk::{Address, Env};

pub fn total_collected(env: &Env) -> i128 {
    storage::get_total_collected(env)
}

pub fn total_allocated(env: &Env) -> i128 {
    storage::get_total_allocated(env)
}

pub fn contributed_by(env: &Env, participant: &Address) -> i128 {
    storage::get_contributed(env, participant)
}

/// Applies an accepted contribution. Every sum is computed before the first
/// write so an overflow leaves the ledger untouched.
pub fn record(env: &Env, participant: &Address, amount: i128, quote: &Quote) -> Result<(), Error> {
    let contributed = contributed_by(env, participant)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let allocated = total_allocated(env)
        .checked_add(quote.allocation)
        .ok_or(Error::Overflow)?;

    storage::set_total_collected(env, quote.total_after);
    storage::set_contributed(env, participant, contributed);
    storage::set_total_allocated(env, allocated);
    Ok(())
}
