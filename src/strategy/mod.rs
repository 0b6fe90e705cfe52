//! Expected-cost-minimizing honing strategy.
//!
//! A computation runs, per invocation:
//! 1. price the tier's materials once into a local [`TierPrices`] table
//! 2. enumerate booster combinations and keep the Pareto frontier
//! 3. explore every state reachable from the start ([`StateGraph`])
//! 4. solve expected costs backwards from certain success ([`solve`])
//! 5. read the best attempt sequence off the solution ([`reconstruct`])
//!
//! Rates never decrease and artisan points strictly increase on every failed
//! attempt, so the state graph is a finite DAG.

pub mod combination;
pub mod config;
pub mod graph;
pub mod policy;
pub mod solver;
pub mod transition;

pub use combination::{
    build_frontier, enumerate_combinations, pareto_frontier, Combination, CombinationIter,
    PricedCombination,
};
pub use config::HoningOptions;
pub use graph::{Edge, NodeId, StateGraph, ABSORBED};
pub use policy::{reconstruct, HoningPlan, PlanStep};
pub use solver::{solve, Solution};
pub use transition::{HoningState, Node, Transition, TransitionModel};

use crate::constants::MYRIA;
use crate::error::{HoningError, TierError};
use crate::pricing::{PriceSource, TierPrices};
use crate::tier::HoningTier;

/// Compute the optimal plan for `tier`, pricing materials through `source`.
pub fn plan_honing(
    tier: &HoningTier,
    source: &impl PriceSource,
    options: &HoningOptions,
) -> Result<HoningPlan, HoningError> {
    check_tier(tier, options)?;
    let start = options.starting_state(tier)?;
    let prices = TierPrices::resolve(tier, source)?;
    optimize(tier, &prices, start, options)
}

/// Optimize from an explicit start state over an already-priced tier.
///
/// The tier, the price table and the start are checked the same way
/// [`plan_honing`] checks them; only `options.max_combinations` and
/// `options.max_states` are read.
pub fn optimize(
    tier: &HoningTier,
    prices: &TierPrices,
    start: HoningState,
    options: &HoningOptions,
) -> Result<HoningPlan, HoningError> {
    check_tier(tier, options)?;
    prices.check(tier)?;
    if start.rate_permyria == 0 || start.rate_permyria > MYRIA {
        return Err(HoningError::InvalidStart(format!(
            "starting rate {} is outside 1..={MYRIA} permyria",
            start.rate_permyria
        )));
    }
    if start.artisan_points > tier.artisan_cap {
        return Err(HoningError::InvalidStart(format!(
            "artisan points {} exceed the cap {}",
            start.artisan_points, tier.artisan_cap
        )));
    }

    let model = TransitionModel::new(tier);
    let frontier = build_frontier(tier, prices);
    let graph = StateGraph::build(&model, &frontier, start, options.max_states)?;
    let solution = solve(&graph, &frontier, prices.base_cost);
    let plan = reconstruct(&graph, &solution, &frontier, &model, prices.base_cost);

    tracing::info!(
        item_level = tier.base_item_level,
        equipment = ?tier.equipment_type,
        states = graph.len(),
        expected_attempts = plan.expected_attempts,
        expected_cost = plan.expected_cost,
        "computed honing plan"
    );
    Ok(plan)
}

fn check_tier(tier: &HoningTier, options: &HoningOptions) -> Result<(), TierError> {
    tier.validate()?;
    let count = tier.combination_count();
    if count > options.max_combinations {
        return Err(TierError::CombinationSpaceTooLarge {
            item_level: tier.base_item_level,
            count,
            budget: options.max_combinations,
        });
    }
    Ok(())
}
