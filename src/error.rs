//! Error types for tier validation, pricing and planning.

use thiserror::Error;

/// A tier descriptor that cannot be optimized as given.
#[derive(Error, Debug)]
pub enum TierError {
    #[error("tier {item_level} has a zero base rate")]
    ZeroBaseRate { item_level: u32 },

    #[error("tier {item_level} base rate {rate} exceeds 10000 permyria")]
    BaseRateTooHigh { item_level: u32, rate: u32 },

    #[error("tier {item_level} enhancement cap {cap} exceeds 10000 permyria")]
    EnhancementCapTooHigh { item_level: u32, cap: u32 },

    #[error("enhancement {item_id} adds {rate} permyria (limit 10000)")]
    EnhancementRateTooHigh { item_id: String, rate: u32 },

    #[error("tier {item_level} book rate {rate} exceeds 10000 permyria")]
    BookRateTooHigh { item_level: u32, rate: u32 },

    #[error("tier {item_level} has a zero artisan cap")]
    ZeroArtisanCap { item_level: u32 },

    #[error("tier {item_level} artisan cap {cap} exceeds {limit}")]
    ArtisanCapTooHigh { item_level: u32, cap: u32, limit: u32 },

    #[error("enhancement {item_id} allows {max_amount} units (expected 1..={limit})")]
    InvalidMaxAmount {
        item_id: String,
        max_amount: u32,
        limit: u32,
    },

    #[error("item {0} is listed more than once")]
    DuplicateItem(String),

    #[error("tier {item_level} has {count} booster combinations (budget {budget})")]
    CombinationSpaceTooLarge {
        item_level: u32,
        count: u64,
        budget: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A material price that could not be resolved.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("no market price for {0}")]
    UnknownItem(String),

    #[error("invalid price {price} for {item_id}")]
    InvalidPrice { item_id: String, price: f64 },

    #[error("price table does not match tier {item_level}")]
    TableMismatch { item_level: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any failure of a single strategy computation.
#[derive(Error, Debug)]
pub enum HoningError {
    #[error("invalid tier: {0}")]
    Tier(#[from] TierError),

    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),

    #[error("invalid starting point: {0}")]
    InvalidStart(String),

    #[error("more than {budget} reachable states")]
    StateSpaceTooLarge { budget: usize },
}
