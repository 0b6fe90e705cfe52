use crate::constants::{GOLD_ID, GOLD_UNIT_PRICE, SILVER_ID, SILVER_UNIT_PRICE};
use crate::error::PricingError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Anything that can quote a unit price for a material.
pub trait PriceSource {
    fn unit_price(&self, item_id: &str) -> Result<f64, PricingError>;
}

/// In-memory market snapshot keyed by item id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketPrices {
    prices: HashMap<String, f64>,
}

impl MarketPrices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gold is the currency itself and silver is treated as free.
    pub fn with_currency_defaults() -> Self {
        let mut market = Self::new();
        market.set(GOLD_ID, GOLD_UNIT_PRICE);
        market.set(SILVER_ID, SILVER_UNIT_PRICE);
        market
    }

    pub fn set(&mut self, item_id: &str, unit_price: f64) {
        self.prices.insert(item_id.to_string(), unit_price);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Load a JSON object of `item_id -> unit price` on top of the currency defaults.
    pub fn load(path: &Path) -> Result<Self, PricingError> {
        let json = fs::read_to_string(path)?;
        let prices: HashMap<String, f64> = serde_json::from_str(&json)?;
        let mut market = Self::with_currency_defaults();
        market.prices.extend(prices);
        Ok(market)
    }
}

impl PriceSource for MarketPrices {
    fn unit_price(&self, item_id: &str) -> Result<f64, PricingError> {
        let price = *self
            .prices
            .get(item_id)
            .ok_or_else(|| PricingError::UnknownItem(item_id.to_string()))?;
        if !price.is_finite() || price < 0.0 {
            return Err(PricingError::InvalidPrice {
                item_id: item_id.to_string(),
                price,
            });
        }
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_defaults() {
        let market = MarketPrices::with_currency_defaults();
        assert_eq!(market.unit_price("gold").unwrap(), 1.0);
        assert_eq!(market.unit_price("silver").unwrap(), 0.0);
        assert_eq!(market.len(), 2);
    }

    #[test]
    fn test_unknown_item() {
        let market = MarketPrices::new();
        assert!(market.is_empty());
        assert!(matches!(
            market.unit_price("honor-shard"),
            Err(PricingError::UnknownItem(id)) if id == "honor-shard"
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut market = MarketPrices::new();
        market.set("honor-shard", -0.5);
        assert!(matches!(
            market.unit_price("honor-shard"),
            Err(PricingError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_nan_price_rejected() {
        let mut market = MarketPrices::new();
        market.set("honor-shard", f64::NAN);
        assert!(market.unit_price("honor-shard").is_err());
    }

    #[test]
    fn test_set_overrides() {
        let mut market = MarketPrices::with_currency_defaults();
        market.set("silver", 0.001);
        assert_eq!(market.unit_price("silver").unwrap(), 0.001);
    }
}
