//! Honing - expected-cost-optimal booster strategies for gear upgrades
//!
//! Given a tier's costs and optional boosters, computes which boosters to use on
//! every attempt so that the expected total cost of succeeding is minimal.

pub mod constants;
pub mod error;
pub mod pricing;
pub mod simulator;
pub mod strategy;
pub mod tier;

pub use error::{HoningError, PricingError, TierError};
pub use pricing::{MarketPrices, PriceSource, TierPrices};
pub use strategy::{optimize, plan_honing, Combination, HoningOptions, HoningPlan, HoningState};
pub use tier::{EquipmentType, HoningTier};
