//! Booster combinations: enumeration of the cross-product and Pareto filtering.

use crate::pricing::TierPrices;
use crate::tier::HoningTier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many units of each enhancement to spend on one attempt, and whether to add the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    pub enhancements: Vec<u32>,
    pub use_book: bool,
}

impl Combination {
    /// The "use nothing" combination for a tier with `num_enhancements` items.
    pub fn none(num_enhancements: usize) -> Self {
        Self {
            enhancements: vec![0; num_enhancements],
            use_book: false,
        }
    }

    pub fn is_none(&self) -> bool {
        !self.use_book && self.enhancements.iter().all(|&n| n == 0)
    }

    /// Enhancement bonus is capped by the tier; the book is added on top of the cap.
    pub fn rate_bonus(&self, tier: &HoningTier) -> u32 {
        let enhancement_rate: u32 = self
            .enhancements
            .iter()
            .zip(&tier.enhancements)
            .fold(0u32, |acc, (&n, e)| {
                acc.saturating_add(n.saturating_mul(e.rate_increase_permyria))
            });
        let capped = enhancement_rate.min(tier.max_enhancement_rate_permyria);
        if self.use_book {
            capped.saturating_add(tier.book_rate_permyria)
        } else {
            capped
        }
    }

    pub fn cost(&self, prices: &TierPrices) -> f64 {
        let enhancement_cost: f64 = self
            .enhancements
            .iter()
            .zip(&prices.enhancement_prices)
            .map(|(&n, price)| n as f64 * price)
            .sum();
        match (self.use_book, prices.book_price) {
            (true, Some(book_price)) => enhancement_cost + book_price,
            _ => enhancement_cost,
        }
    }

    /// Flat tuple form: one count per enhancement, plus a trailing 0/1 when the tier has a book.
    pub fn counts(&self, has_book: bool) -> Vec<u32> {
        let mut counts = self.enhancements.clone();
        if has_book {
            counts.push(u32::from(self.use_book));
        }
        counts
    }
}

/// A combination together with its derived rate bonus and price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedCombination {
    pub rate_bonus: u32,
    pub cost: f64,
    pub combination: Combination,
}

/// Odometer over every combination of a tier, first enhancement turning fastest.
pub struct CombinationIter {
    stops: Vec<u32>,
    current: Vec<u32>,
    num_enhancements: usize,
    done: bool,
}

impl CombinationIter {
    pub fn new(tier: &HoningTier) -> Self {
        let mut stops: Vec<u32> = tier.enhancements.iter().map(|e| e.max_amount + 1).collect();
        if tier.has_book() {
            stops.push(2);
        }
        Self {
            current: vec![0; stops.len()],
            stops,
            num_enhancements: tier.enhancements.len(),
            done: false,
        }
    }

    fn advance(&mut self) {
        for (digit, &stop) in self.current.iter_mut().zip(&self.stops) {
            *digit += 1;
            if *digit < stop {
                return;
            }
            *digit = 0;
        }
        self.done = true;
    }
}

impl Iterator for CombinationIter {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.done {
            return None;
        }
        let combination = Combination {
            enhancements: self.current[..self.num_enhancements].to_vec(),
            use_book: self.current.get(self.num_enhancements) == Some(&1),
        };
        self.advance();
        Some(combination)
    }
}

/// Cheapest combination for every achievable rate bonus, ascending by rate bonus.
pub fn enumerate_combinations(tier: &HoningTier, prices: &TierPrices) -> Vec<PricedCombination> {
    let mut cheapest: BTreeMap<u32, PricedCombination> = BTreeMap::new();
    let mut visited = 0u64;
    for combination in CombinationIter::new(tier) {
        visited += 1;
        let rate_bonus = combination.rate_bonus(tier);
        let cost = combination.cost(prices);
        let keep = cheapest
            .get(&rate_bonus)
            .map_or(true, |existing| cost < existing.cost);
        if keep {
            cheapest.insert(
                rate_bonus,
                PricedCombination {
                    rate_bonus,
                    cost,
                    combination,
                },
            );
        }
    }
    tracing::debug!(
        visited,
        distinct_rates = cheapest.len(),
        "enumerated booster combinations"
    );
    cheapest.into_values().collect()
}

/// Drop every entry matched or beaten in rate by something at least as cheap.
///
/// Input must be ascending by rate bonus with unique rates; the output keeps that order
/// and is strictly increasing in both rate bonus and cost.
pub fn pareto_frontier(options: Vec<PricedCombination>) -> Vec<PricedCombination> {
    let mut min_cost = f64::INFINITY;
    let mut frontier: Vec<PricedCombination> = options
        .into_iter()
        .rev()
        .filter(|option| {
            if option.cost < min_cost {
                min_cost = option.cost;
                true
            } else {
                false
            }
        })
        .collect();
    frontier.reverse();
    frontier
}

/// Enumerate then filter: the only combinations worth considering for a tier.
pub fn build_frontier(tier: &HoningTier, prices: &TierPrices) -> Vec<PricedCombination> {
    let frontier = pareto_frontier(enumerate_combinations(tier, prices));
    tracing::debug!(size = frontier.len(), "booster frontier");
    frontier
}
