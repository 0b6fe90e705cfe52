//! Walks the solved graph from the start state into an attempt-by-attempt plan.

use super::combination::{Combination, PricedCombination};
use super::graph::StateGraph;
use super::solver::Solution;
use super::transition::{HoningState, Node, TransitionModel};
use crate::constants::MYRIA;
use crate::tier::{HoningTier, Material};
use serde::{Deserialize, Serialize};

/// What to use on one attempt, given that every earlier attempt failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    pub state: HoningState,
    pub combination: Combination,
    pub rate_bonus_permyria: u32,
    pub success_permyria: u32,
    /// Fixed materials plus boosters for this attempt
    pub attempt_cost: f64,
}

/// Optimal strategy for one tier from one starting state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoningPlan {
    pub expected_attempts: f64,
    pub expected_cost: f64,
    pub steps: Vec<PlanStep>,
}

impl HoningPlan {
    pub fn combinations(&self) -> Vec<Combination> {
        self.steps.iter().map(|s| s.combination.clone()).collect()
    }

    pub fn states(&self) -> Vec<HoningState> {
        self.steps.iter().map(|s| s.state).collect()
    }

    /// Fixed materials scaled by the expected number of attempts.
    pub fn expected_materials(&self, tier: &HoningTier) -> Vec<(Material, f64)> {
        tier.cost
            .iter()
            .map(|m| (m.clone(), m.amount as f64 * self.expected_attempts))
            .collect()
    }
}

/// Follow the best edge from the start until success is certain.
pub fn reconstruct(
    graph: &StateGraph,
    solution: &Solution,
    frontier: &[PricedCombination],
    model: &TransitionModel,
    base_cost: f64,
) -> HoningPlan {
    let mut steps = Vec::new();
    let mut survival = 1.0;
    let mut expected_attempts = 0.0;
    let mut current = graph.start();

    while let Node::Ordinary(state) = graph.node(current) {
        expected_attempts += survival;
        match solution.policy(current) {
            Some(edge) => {
                let chosen = &frontier[edge.option];
                steps.push(PlanStep {
                    state,
                    combination: chosen.combination.clone(),
                    rate_bonus_permyria: chosen.rate_bonus,
                    success_permyria: edge.success_permyria,
                    attempt_cost: base_cost + chosen.cost,
                });
                survival *= (MYRIA - edge.success_permyria) as f64 / MYRIA as f64;
                current = edge.node;
            }
            None => {
                tracing::warn!(?state, "no policy for state, falling back to no boosters");
                let num_enhancements = frontier
                    .first()
                    .map_or(0, |f| f.combination.enhancements.len());
                steps.push(PlanStep {
                    state,
                    combination: Combination::none(num_enhancements),
                    rate_bonus_permyria: 0,
                    success_permyria: model.apply(state, 0).success_permyria,
                    attempt_cost: base_cost,
                });
                break;
            }
        }
    }

    HoningPlan {
        expected_attempts,
        expected_cost: solution.cost(graph.start()),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MAX_STATES;
    use crate::strategy::graph::ABSORBED;
    use crate::strategy::solver::solve;

    fn option(rate_bonus: u32, cost: f64, units: u32) -> PricedCombination {
        PricedCombination {
            rate_bonus,
            cost,
            combination: Combination {
                enhancements: vec![units],
                use_book: false,
            },
        }
    }

    fn explore(
        model: &TransitionModel,
        frontier: &[PricedCombination],
        start: HoningState,
    ) -> StateGraph {
        StateGraph::build(model, frontier, start, DEFAULT_MAX_STATES).unwrap()
    }

    #[test]
    fn test_plan_follows_best_edges() {
        let model = TransitionModel {
            base_rate: 5000,
            artisan_cap: 21506,
        };
        let frontier = [option(0, 0.0, 0), option(5000, 10.0, 4)];
        let graph = explore(&model, &frontier, HoningState::new(5000, 0));
        let solution = solve(&graph, &frontier, 100.0);
        let plan = reconstruct(&graph, &solution, &frontier, &model, 100.0);

        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.steps[0].combination.enhancements, vec![4]);
        assert_eq!(plan.steps[0].rate_bonus_permyria, 5000);
        assert_eq!(plan.steps[0].attempt_cost, 110.0);
        assert_eq!(plan.expected_attempts, 1.0);
        assert_eq!(plan.expected_cost, solution.cost(graph.start()));
        assert_ne!(graph.start(), ABSORBED);
    }

    #[test]
    fn test_expected_attempts_telescopes() {
        let model = TransitionModel {
            base_rate: 5000,
            artisan_cap: 21506,
        };
        let frontier = [option(0, 0.0, 0)];
        let graph = explore(&model, &frontier, HoningState::new(5000, 0));
        let solution = solve(&graph, &frontier, 1.0);
        let plan = reconstruct(&graph, &solution, &frontier, &model, 1.0);

        let rates: Vec<u32> = plan.steps.iter().map(|s| s.success_permyria).collect();
        assert_eq!(rates, vec![5000, 5500, 6000, 6500, 10000]);
        assert!((plan.expected_attempts - 1.8465).abs() < 1e-12);
        assert_eq!(plan.states().len(), plan.combinations().len());
    }

    #[test]
    fn test_expected_materials() {
        let plan = HoningPlan {
            expected_attempts: 2.5,
            expected_cost: 0.0,
            steps: Vec::new(),
        };
        let tier = HoningTier::basic(
            1325,
            crate::tier::EquipmentType::Armor,
            6000,
            vec![Material::new("honor-shard", 42), Material::new("gold", 70)],
        );
        let materials = plan.expected_materials(&tier);
        assert_eq!(materials[0].1, 105.0);
        assert_eq!(materials[1].1, 175.0);
    }
}
