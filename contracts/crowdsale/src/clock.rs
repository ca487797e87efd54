use soroban_sdk::Env;

/// Source of the current checkpoint used for phase gating.
pub trait Clock {
    fn now(&self) -> u32;
}

/// Reads the ledger sequence number.
pub struct LedgerClock<'a> {
    env: &'a Env,
}

impl<'a> LedgerClock<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl Clock for LedgerClock<'_> {
    fn now(&self) -> u32 {
        self.env.ledger().sequence()
    }
}

#[cfg(test)]
pub struct FixedClock(pub u32);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Ledger;

    #[test]
    fn test_ledger_clock_tracks_sequence() {
        let env = Env::default();
        env.ledger().set_sequence_number(1_000_000);
        assert_eq!(LedgerClock::new(&env).now(), 1_000_000);

        env.ledger().set_sequence_number(1_000_500);
        assert_eq!(LedgerClock::new(&env).now(), 1_000_500);
    }
}
