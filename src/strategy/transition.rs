//! State transitions of a single honing attempt.

use crate::constants::{MYRIA, PERCENT_SCALE, RATE_CAP_MULTIPLIER, RATE_STEP_DIVISOR};
use crate::tier::HoningTier;
use serde::{Deserialize, Serialize};

/// Unboosted success rate and accumulated artisan points before an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HoningState {
    pub rate_permyria: u32,
    pub artisan_points: u32,
}

impl HoningState {
    pub fn new(rate_permyria: u32, artisan_points: u32) -> Self {
        Self {
            rate_permyria,
            artisan_points,
        }
    }

    pub fn rate_percent(&self) -> f64 {
        self.rate_permyria as f64 / MYRIA as f64 * PERCENT_SCALE
    }

    /// Artisan energy as a percentage of the tier's cap.
    pub fn artisan_percent(&self, artisan_cap: u32) -> f64 {
        if artisan_cap == 0 {
            return 0.0;
        }
        self.artisan_points as f64 / artisan_cap as f64 * PERCENT_SCALE
    }
}

/// A vertex of the state graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Ordinary(HoningState),
    /// Success is certain; nothing more to pay.
    Absorbed,
}

/// Outcome of applying one combination to one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Chance this attempt succeeds, in permyria
    pub success_permyria: u32,
    /// Where a failed attempt leads, or `Absorbed` when failure is impossible
    pub target: Node,
}

impl Transition {
    pub fn success_probability(&self) -> f64 {
        self.success_permyria as f64 / MYRIA as f64
    }
}

/// Rate-stacking and artisan rules for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionModel {
    pub base_rate: u32,
    pub artisan_cap: u32,
}

impl TransitionModel {
    pub fn new(tier: &HoningTier) -> Self {
        Self {
            base_rate: tier.base_rate_permyria,
            artisan_cap: tier.artisan_cap,
        }
    }

    pub fn max_rate(&self) -> u32 {
        RATE_CAP_MULTIPLIER * self.base_rate
    }

    /// Full artisan energy guarantees the next attempt.
    pub fn is_guaranteed(&self, state: HoningState) -> bool {
        state.artisan_points >= self.artisan_cap
    }

    pub fn apply(&self, state: HoningState, rate_bonus: u32) -> Transition {
        let effective_rate = state.rate_permyria.saturating_add(rate_bonus).min(MYRIA);
        if effective_rate == MYRIA || self.is_guaranteed(state) {
            return Transition {
                success_permyria: MYRIA,
                target: Node::Absorbed,
            };
        }

        // A starting rate above the stacking cap never decreases.
        let next_rate = state
            .rate_permyria
            .saturating_add(self.base_rate / RATE_STEP_DIVISOR)
            .min(self.max_rate())
            .max(state.rate_permyria);
        let next_points = state
            .artisan_points
            .saturating_add(effective_rate)
            .min(self.artisan_cap);
        Transition {
            success_permyria: effective_rate,
            target: Node::Ordinary(HoningState::new(next_rate, next_points)),
        }
    }
}
