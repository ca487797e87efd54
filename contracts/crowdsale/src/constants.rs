// Fixed-point scales
pub const MULTIPLIER_SCALE: i128 = 10_000;
pub const BPS_SCALE: u32 = 10_000;

// Limits
pub const MAX_TIERS: u32 = 16;
pub const MAX_RESERVE_SHARES: u32 = 8;

// Reference schedule: 220 units per contributed unit, bonus decaying with volume.
pub const REFERENCE_BASE_RATE: i128 = 220;
pub const REFERENCE_BOUNDS: [i128; 4] = [25_000, 50_000, 100_000, 150_000];
pub const REFERENCE_MULTIPLIERS_BPS: [u32; 5] = [12_500, 12_000, 11_500, 10_500, 10_000];
