use crate::errors::Error;
use crate::phase::SubPhase;
use crate::types::OpenPolicy;

/// Decides whether a participant may add `amount` on top of `contributed`.
pub trait AdmissionPolicy {
    fn admit(&self, sub_phase: SubPhase, contributed: i128, amount: i128) -> Result<(), Error>;
}

/// Ceiling set through the allowance registry. Absolute in every sub-phase.
pub struct GuaranteedCeiling(pub i128);

impl AdmissionPolicy for GuaranteedCeiling {
    fn admit(&self, _sub_phase: SubPhase, contributed: i128, amount: i128) -> Result<(), Error> {
        within_cap(self.0, contributed, amount)
    }
}

/// Addresses without an allowance wait for the public sub-phase, then follow
/// the configured policy.
impl AdmissionPolicy for OpenPolicy {
    fn admit(&self, sub_phase: SubPhase, contributed: i128, amount: i128) -> Result<(), Error> {
        if sub_phase == SubPhase::Guaranteed {
            return Err(Error::NotGuaranteed);
        }
        match self {
            OpenPolicy::Unrestricted => Ok(()),
            OpenPolicy::PerAddressCap(cap) => within_cap(*cap, contributed, amount),
            OpenPolicy::GuaranteedOnly => Err(Error::NotGuaranteed),
        }
    }
}

pub fn validate(policy: &OpenPolicy) -> Result<(), Error> {
    match policy {
        OpenPolicy::PerAddressCap(cap) if *cap <= 0 => Err(Error::InvalidConfig),
        _ => Ok(()),
    }
}

fn within_cap(cap: i128, contributed: i128, amount: i128) -> Result<(), Error> {
    let after = contributed.checked_add(amount).ok_or(Error::Overflow)?;
    if after > cap {
        return Err(Error::CapExceeded);
    }
    Ok(())
}
