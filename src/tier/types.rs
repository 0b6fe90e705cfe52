use crate::constants::{
    DEFAULT_ARTISAN_CAP, DEFAULT_BOOK_RATE_PERMYRIA, MAX_ARTISAN_CAP, MAX_UNITS_PER_ENHANCEMENT,
    MYRIA,
};
use crate::error::TierError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
    Armor,
    Weapon,
}

/// A fixed material consumed by every attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub item_id: String,
    pub amount: u32,
}

impl Material {
    pub fn new(item_id: &str, amount: u32) -> Self {
        Self {
            item_id: item_id.to_string(),
            amount,
        }
    }
}

/// An optional booster: each unit adds `rate_increase_permyria`, up to `max_amount` units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enhancement {
    pub item_id: String,
    pub rate_increase_permyria: u32,
    pub max_amount: u32,
}

impl Enhancement {
    pub fn new(item_id: &str, rate_increase_permyria: u32, max_amount: u32) -> Self {
        Self {
            item_id: item_id.to_string(),
            rate_increase_permyria,
            max_amount,
        }
    }
}

fn default_book_rate() -> u32 {
    DEFAULT_BOOK_RATE_PERMYRIA
}

fn default_artisan_cap() -> u32 {
    DEFAULT_ARTISAN_CAP
}

/// One upgrade step, e.g. armor +6 (1325) -> +7 (1330).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoningTier {
    pub base_item_level: u32,
    pub next_item_level: u32,
    pub tier: u8,
    pub base_level: u8,
    pub equipment_type: EquipmentType,
    pub base_rate_permyria: u32,
    pub cost: Vec<Material>,
    #[serde(default)]
    pub enhancements: Vec<Enhancement>,
    /// Cap on the combined bonus of all enhancement items (the book is added on top)
    #[serde(default)]
    pub max_enhancement_rate_permyria: u32,
    #[serde(default)]
    pub book_id: Option<String>,
    #[serde(default = "default_book_rate")]
    pub book_rate_permyria: u32,
    #[serde(default = "default_artisan_cap")]
    pub artisan_cap: u32,
}

impl HoningTier {
    /// A tier with no boosters at all.
    pub fn basic(
        base_item_level: u32,
        equipment_type: EquipmentType,
        base_rate_permyria: u32,
        cost: Vec<Material>,
    ) -> Self {
        Self {
            base_item_level,
            next_item_level: base_item_level,
            tier: 0,
            base_level: 0,
            equipment_type,
            base_rate_permyria,
            cost,
            enhancements: Vec::new(),
            max_enhancement_rate_permyria: 0,
            book_id: None,
            book_rate_permyria: DEFAULT_BOOK_RATE_PERMYRIA,
            artisan_cap: DEFAULT_ARTISAN_CAP,
        }
    }

    pub fn has_book(&self) -> bool {
        self.book_id.is_some()
    }

    /// Size of the full booster cross-product, saturating on overflow.
    pub fn combination_count(&self) -> u64 {
        let book_choices = if self.has_book() { 2 } else { 1 };
        self.enhancements
            .iter()
            .fold(book_choices, |acc: u64, e| {
                acc.saturating_mul(e.max_amount as u64 + 1)
            })
    }

    /// Reject descriptors whose fields contradict each other.
    pub fn validate(&self) -> Result<(), TierError> {
        let item_level = self.base_item_level;
        if self.base_rate_permyria == 0 {
            return Err(TierError::ZeroBaseRate { item_level });
        }
        if self.base_rate_permyria > MYRIA {
            return Err(TierError::BaseRateTooHigh {
                item_level,
                rate: self.base_rate_permyria,
            });
        }
        if self.max_enhancement_rate_permyria > MYRIA {
            return Err(TierError::EnhancementCapTooHigh {
                item_level,
                cap: self.max_enhancement_rate_permyria,
            });
        }
        if self.book_rate_permyria > MYRIA {
            return Err(TierError::BookRateTooHigh {
                item_level,
                rate: self.book_rate_permyria,
            });
        }
        if self.artisan_cap == 0 {
            return Err(TierError::ZeroArtisanCap { item_level });
        }
        if self.artisan_cap > MAX_ARTISAN_CAP {
            return Err(TierError::ArtisanCapTooHigh {
                item_level,
                cap: self.artisan_cap,
                limit: MAX_ARTISAN_CAP,
            });
        }

        let mut seen = HashSet::new();
        for e in &self.enhancements {
            if e.max_amount == 0 || e.max_amount > MAX_UNITS_PER_ENHANCEMENT {
                return Err(TierError::InvalidMaxAmount {
                    item_id: e.item_id.clone(),
                    max_amount: e.max_amount,
                    limit: MAX_UNITS_PER_ENHANCEMENT,
                });
            }
            if e.rate_increase_permyria > MYRIA {
                return Err(TierError::EnhancementRateTooHigh {
                    item_id: e.item_id.clone(),
                    rate: e.rate_increase_permyria,
                });
            }
            if !seen.insert(e.item_id.as_str()) {
                return Err(TierError::DuplicateItem(e.item_id.clone()));
            }
        }
        if let Some(book_id) = &self.book_id {
            if !seen.insert(book_id.as_str()) {
                return Err(TierError::DuplicateItem(book_id.clone()));
            }
        }
        Ok(())
    }
}
