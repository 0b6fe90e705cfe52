//! Per-tier price table, resolved once before any graph work.

use super::market::PriceSource;
use crate::error::PricingError;
use crate::tier::HoningTier;
use std::collections::HashMap;

/// Read-only prices for everything one tier can consume.
#[derive(Debug, Clone, PartialEq)]
pub struct TierPrices {
    /// Price of the fixed materials every attempt consumes
    pub base_cost: f64,
    /// Unit price per enhancement, in tier order
    pub enhancement_prices: Vec<f64>,
    pub book_price: Option<f64>,
}

impl TierPrices {
    /// Query `source` exactly once per distinct material of `tier`.
    pub fn resolve(tier: &HoningTier, source: &impl PriceSource) -> Result<Self, PricingError> {
        let mut quotes: HashMap<String, f64> = HashMap::new();
        let mut quote = |item_id: &str| -> Result<f64, PricingError> {
            if let Some(price) = quotes.get(item_id) {
                return Ok(*price);
            }
            let price = source.unit_price(item_id)?;
            if !price.is_finite() || price < 0.0 {
                return Err(PricingError::InvalidPrice {
                    item_id: item_id.to_string(),
                    price,
                });
            }
            quotes.insert(item_id.to_string(), price);
            Ok(price)
        };

        let mut base_cost = 0.0;
        for material in &tier.cost {
            base_cost += quote(&material.item_id)? * material.amount as f64;
        }
        let enhancement_prices = tier
            .enhancements
            .iter()
            .map(|e| quote(&e.item_id))
            .collect::<Result<Vec<_>, _>>()?;
        let book_price = match tier.book_id.as_deref() {
            Some(book_id) => Some(quote(book_id)?),
            None => None,
        };

        tracing::debug!(
            item_level = tier.base_item_level,
            base_cost,
            distinct_items = quotes.len(),
            "resolved tier prices"
        );

        Ok(Self {
            base_cost,
            enhancement_prices,
            book_price,
        })
    }

    /// Check a table built by hand against the tier it is meant for.
    pub fn check(&self, tier: &HoningTier) -> Result<(), PricingError> {
        let item_level = tier.base_item_level;
        if self.enhancement_prices.len() != tier.enhancements.len()
            || self.book_price.is_some() != tier.has_book()
        {
            return Err(PricingError::TableMismatch { item_level });
        }
        let quoted = tier
            .enhancements
            .iter()
            .map(|e| e.item_id.as_str())
            .zip(self.enhancement_prices.iter().copied())
            .chain(tier.book_id.as_deref().zip(self.book_price));
        for (item_id, price) in std::iter::once(("base cost", self.base_cost)).chain(quoted) {
            if !price.is_finite() || price < 0.0 {
                return Err(PricingError::InvalidPrice {
                    item_id: item_id.to_string(),
                    price,
                });
            }
        }
        Ok(())
    }
}
