// PDA Seeds
pub const STATE_SEED: &[u8] = b"state";
pub const CONFIG_SEED: &[u8] = b"config";
pub const BALANCE_SEED: &[u8] = b"balance";
pub const ORDER_SEED: &[u8] = b"order";
pub const RECEIPT_SEED: &[u8] = b"receipt";

// Sequence numbers start at 1 so that 0 never names a live record
pub const FIRST_SEQUENCE: u64 = 1;

// Protocol Parameters (basis points)
pub const DEFAULT_RATE_BPS: u16 = 100; // 1% per term
pub const MIN_RATE_BPS: u16 = 0;
pub const MAX_RATE_BPS: u16 = 10_000; // 100%
pub const DEFAULT_PENALTY_RATE_BPS: u16 = 0;
pub const DEFAULT_PENALTY_DAYS: u8 = 0;

// Loan term in seconds. Zero means a flat fee with no due date.
pub const DEFAULT_CYCLE_SECS: u64 = 0;

// Precision Constants
pub const BPS_PRECISION: u64 = 10_000;
pub const SECONDS_PER_DAY: u64 = 86_400;

// Token Decimals
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

// Display precision used by clients when rendering SOL amounts
pub const DISPLAY_DECIMALS: u32 = 4;
