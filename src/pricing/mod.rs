//! Material pricing: the market collaborator and the per-tier price table.

pub mod market;
pub mod table;

pub use market::{MarketPrices, PriceSource};
pub use table::TierPrices;
