use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Lifecycle / configuration
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfig = 3,
    InvalidSchedule = 4,

    // Phase
    NotStarted = 10,
    Ended = 11,
    Paused = 12,
    NotEnded = 13,
    PhaseClosed = 14,

    // Caps
    CapExceeded = 20,
    NotGuaranteed = 21,

    // Input
    ZeroAmount = 30,
    InvalidAmount = 31,
    AllocationTooSmall = 32,

    // Admin transitions
    StateConflict = 40,

    Overflow = 50,
}

impl Error {
    /// Rejections that clear up on their own once the phase changes.
    pub fn is_phase_error(&self) -> bool {
        matches!(
            self,
            Error::NotStarted | Error::Ended | Error::Paused | Error::NotEnded | Error::PhaseClosed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_error_grouping() {
        assert!(Error::NotStarted.is_phase_error());
        assert!(Error::Paused.is_phase_error());
        assert!(Error::Ended.is_phase_error());
        assert!(!Error::CapExceeded.is_phase_error());
        assert!(!Error::ZeroAmount.is_phase_error());
        assert!(!Error::StateConflict.is_phase_error());
    }
}
