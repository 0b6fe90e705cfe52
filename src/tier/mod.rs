//! Honing tier descriptors: the per-step costs and boosters supplied by game data.

pub mod data;
pub mod persistence;
pub mod types;

pub use data::{all_tiers, find_tier};
pub use persistence::load_tiers;
pub use types::*;
