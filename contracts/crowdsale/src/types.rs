use soroban_sdk::{contracttype, Address};

/// One band of the bonus schedule. `upper_bound` is exclusive; `None` marks
/// the final, unbounded tier.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Tier {
    pub upper_bound: Option<i128>,
    pub multiplier_bps: u32, // 12_500 = 1.25x
}

/// Checkpoints (ledger sequence numbers) gating intake.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ContributionWindow {
    pub opens_at: u32,
    pub public_opens_at: u32,
    pub closes_at: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub admin: Address,
    pub allocation_asset: Address,
    pub payment_token: Address,
    pub custodian: Address,
    pub reserve_holder: Address,
    pub successor_controller: Address,
    pub window: ContributionWindow,
    pub base_rate: i128, // allocation units per contributed unit
}

/// Reserved allocation minted on finalize, as a share of the final supply.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReserveShare {
    pub recipient: Address,
    pub bps: u32,
}

/// Admission rule for addresses without a guaranteed allowance once the
/// public sub-phase is open.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum OpenPolicy {
    Unrestricted,
    PerAddressCap(i128),
    GuaranteedOnly,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SalePhase {
    NotStarted,
    Guaranteed,
    Open,
    Paused,
    Ended,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Quote {
    pub allocation: i128,
    pub total_after: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum FinalizeStep {
    MintReserves,
    TransferController,
    NotifyReserveHolder,
    NotifyCustodian,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct FinalizeProgress {
    pub reserves_minted: u32,
    pub controller_transferred: bool,
    pub holder_notified: bool,
    pub custodian_notified: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FinalizeStatus {
    pub complete: bool,
    pub pending: Option<FinalizeStep>,
}

#[contracttype]
pub enum DataKey {
    Config,
    Tiers,
    ReserveShares,
    OpenPolicy,
    Paused,
    Finalized,
    FinalizedAt,
    Progress,
    TotalCollected,
    TotalAllocated,
    Allowance(Address),
    Contributed(Address),
}
