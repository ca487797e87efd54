use crate::errors::Error;
use crate::types::{ContributionWindow, SalePhase};

/// Which intake rules apply to an admitted contribution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubPhase {
    Guaranteed,
    Open,
}

pub fn validate_window(window: &ContributionWindow) -> Result<(), Error> {
    if window.opens_at > window.public_opens_at || window.public_opens_at >= window.closes_at {
        return Err(Error::InvalidConfig);
    }
    Ok(())
}

/// Phase at checkpoint `now`. `Ended` wins over `Paused`; pausing never
/// changes which sub-phase the window implies.
pub fn phase_at(window: &ContributionWindow, paused: bool, finalized: bool, now: u32) -> SalePhase {
    if finalized || now >= window.closes_at {
        SalePhase::Ended
    } else if now < window.opens_at {
        SalePhase::NotStarted
    } else if paused {
        SalePhase::Paused
    } else if now < window.public_opens_at {
        SalePhase::Guaranteed
    } else {
        SalePhase::Open
    }
}

pub fn check_amount(amount: i128) -> Result<(), Error> {
    match amount {
        0 => Err(Error::ZeroAmount),
        a if a < 0 => Err(Error::InvalidAmount),
        _ => Ok(()),
    }
}

/// Gate applied to every contribution before caps and pricing.
pub fn admit(amount: i128, phase: SalePhase) -> Result<SubPhase, Error> {
    check_amount(amount)?;
    match phase {
        SalePhase::NotStarted => Err(Error::NotStarted),
        SalePhase::Ended => Err(Error::Ended),
        SalePhase::Paused => Err(Error::Paused),
        SalePhase::Guaranteed => Ok(SubPhase::Guaranteed),
        SalePhase::Open => Ok(SubPhase::Open),
    }
}

pub fn check_pause(phase: SalePhase) -> Result<(), Error> {
    match phase {
        SalePhase::Guaranteed | SalePhase::Open => Ok(()),
        _ => Err(Error::StateConflict),
    }
}

pub fn check_resume(phase: SalePhase) -> Result<(), Error> {
    match phase {
        SalePhase::Paused => Ok(()),
        _ => Err(Error::StateConflict),
    }
}
