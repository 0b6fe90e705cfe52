// Rate units
pub const MYRIA: u32 = 10_000; // 100% in permyria
pub const PERCENT_SCALE: f64 = 100.0; // 100%

// Per-attempt rate growth: each failure adds base_rate / RATE_STEP_DIVISOR,
// capped at RATE_CAP_MULTIPLIER * base_rate
pub const RATE_STEP_DIVISOR: u32 = 10;
pub const RATE_CAP_MULTIPLIER: u32 = 2;

// Tier defaults (overridable per tier by the game data)
pub const DEFAULT_BOOK_RATE_PERMYRIA: u32 = 1_000;
pub const DEFAULT_ARTISAN_CAP: u32 = 21_506;
pub const MAX_ARTISAN_CAP: u32 = 100_000;

// Enumeration bounds
pub const MAX_UNITS_PER_ENHANCEMENT: u32 = 100;
pub const DEFAULT_MAX_COMBINATIONS: u64 = 1_000_000;
pub const DEFAULT_MAX_STATES: usize = 500_000;

// Currencies with fixed market prices
pub const GOLD_ID: &str = "gold";
pub const SILVER_ID: &str = "silver";
pub const GOLD_UNIT_PRICE: f64 = 1.0;
pub const SILVER_UNIT_PRICE: f64 = 0.0;
