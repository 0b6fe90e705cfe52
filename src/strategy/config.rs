//! Per-invocation options for the strategy computation.

use super::transition::HoningState;
use crate::constants::{DEFAULT_MAX_COMBINATIONS, DEFAULT_MAX_STATES, MYRIA, PERCENT_SCALE};
use crate::error::HoningError;
use crate::tier::HoningTier;

#[derive(Debug, Clone, PartialEq)]
pub struct HoningOptions {
    /// Current unboosted success rate in percent (None = the tier's base rate)
    pub starting_rate_percent: Option<f64>,

    /// Current artisan's energy in percent of the cap
    pub starting_artisan_percent: f64,

    /// Refuse tiers whose booster cross-product exceeds this many combinations
    pub max_combinations: u64,

    /// Refuse start points that reach more than this many states
    pub max_states: usize,
}

impl Default for HoningOptions {
    fn default() -> Self {
        Self {
            starting_rate_percent: None,
            starting_artisan_percent: 0.0,
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            max_states: DEFAULT_MAX_STATES,
        }
    }
}

impl HoningOptions {
    /// Resume an attempt chain that already has some rate and energy.
    pub fn resume(rate_percent: f64, artisan_percent: f64) -> Self {
        Self {
            starting_rate_percent: Some(rate_percent),
            starting_artisan_percent: artisan_percent,
            ..Default::default()
        }
    }

    /// Fresh rate, partial energy.
    pub fn with_artisan(artisan_percent: f64) -> Self {
        Self {
            starting_artisan_percent: artisan_percent,
            ..Default::default()
        }
    }

    /// Convert the percentage inputs into the tier's permyria/point scales.
    pub fn starting_state(&self, tier: &HoningTier) -> Result<HoningState, HoningError> {
        let rate_permyria = match self.starting_rate_percent {
            None => tier.base_rate_permyria,
            Some(pct) => {
                if !pct.is_finite() || pct <= 0.0 || pct > PERCENT_SCALE {
                    return Err(HoningError::InvalidStart(format!(
                        "starting rate {pct}% is outside (0, 100]"
                    )));
                }
                let permyria = (pct * MYRIA as f64 / PERCENT_SCALE).round() as u32;
                if permyria == 0 {
                    return Err(HoningError::InvalidStart(format!(
                        "starting rate {pct}% rounds to zero"
                    )));
                }
                permyria
            }
        };

        let pct = self.starting_artisan_percent;
        if !pct.is_finite() || !(0.0..=PERCENT_SCALE).contains(&pct) {
            return Err(HoningError::InvalidStart(format!(
                "artisan's energy {pct}% is outside [0, 100]"
            )));
        }
        let artisan_points = ((pct / PERCENT_SCALE * tier.artisan_cap as f64).ceil() as u32)
            .min(tier.artisan_cap);

        Ok(HoningState::new(rate_permyria, artisan_points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::EquipmentType;

    fn tier() -> HoningTier {
        HoningTier::basic(1325, EquipmentType::Armor, 6000, vec![])
    }

    #[test]
    fn test_default_starts_at_base_rate() {
        let state = HoningOptions::default().starting_state(&tier()).unwrap();
        assert_eq!(state, HoningState::new(6000, 0));
    }

    #[test]
    fn test_resume_converts_percentages() {
        let state = HoningOptions::resume(70.0, 50.0)
            .starting_state(&tier())
            .unwrap();
        assert_eq!(state.rate_permyria, 7000);
        // ceil(0.5 * 21506)
        assert_eq!(state.artisan_points, 10753);
    }

    #[test]
    fn test_fractional_rate_rounds() {
        let state = HoningOptions::resume(0.7, 0.0)
            .starting_state(&tier())
            .unwrap();
        assert_eq!(state.rate_permyria, 70);
    }

    #[test]
    fn test_full_artisan_hits_cap() {
        let state = HoningOptions::with_artisan(100.0)
            .starting_state(&tier())
            .unwrap();
        assert_eq!(state.artisan_points, tier().artisan_cap);
    }

    #[test]
    fn test_out_of_range_rejected() {
        for options in [
            HoningOptions::resume(0.0, 0.0),
            HoningOptions::resume(101.0, 0.0),
            HoningOptions::resume(f64::NAN, 0.0),
            HoningOptions::with_artisan(-1.0),
            HoningOptions::with_artisan(100.5),
        ] {
            assert!(matches!(
                options.starting_state(&tier()),
                Err(HoningError::InvalidStart(_))
            ));
        }
    }
}
