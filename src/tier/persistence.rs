use super::types::HoningTier;
use crate::error::TierError;
use std::fs;
use std::path::Path;

/// Load a JSON array of tiers, validating each one.
pub fn load_tiers(path: &Path) -> Result<Vec<HoningTier>, TierError> {
    let json = fs::read_to_string(path)?;
    let tiers: Vec<HoningTier> = serde_json::from_str(&json)?;
    for tier in &tiers {
        tier.validate()?;
    }
    Ok(tiers)
}
