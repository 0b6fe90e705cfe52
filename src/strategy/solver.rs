//! Backward induction over the state graph in reverse topological order.

use super::combination::PricedCombination;
use super::graph::{Edge, NodeId, StateGraph};
use crate::constants::MYRIA;

/// Minimum expected remaining cost per node and the edge that achieves it.
#[derive(Debug, Clone)]
pub struct Solution {
    costs: Vec<f64>,
    policy: Vec<Option<Edge>>,
}

impl Solution {
    pub fn cost(&self, id: NodeId) -> f64 {
        self.costs[id.index()]
    }

    /// Best outgoing edge; `None` only for the absorbing node.
    pub fn policy(&self, id: NodeId) -> Option<&Edge> {
        self.policy[id.index()].as_ref()
    }
}

/// Solve every node of `graph`.
///
/// Each attempt pays `base_cost` plus the combination's price; a failed attempt then
/// pays the target's expected cost. Panics if the graph contains a cycle.
pub fn solve(graph: &StateGraph, frontier: &[PricedCombination], base_cost: f64) -> Solution {
    let n = graph.len();
    let mut costs = vec![f64::INFINITY; n];
    let mut policy: Vec<Option<Edge>> = vec![None; n];
    let mut unresolved: Vec<usize> = graph.node_ids().map(|id| graph.out_edges(id).len()).collect();

    let mut ready: Vec<NodeId> = graph.node_ids().filter(|id| unresolved[id.index()] == 0).collect();
    for id in &ready {
        costs[id.index()] = 0.0;
    }

    let mut resolved = 0;
    while let Some(target) = ready.pop() {
        resolved += 1;
        let target_cost = costs[target.index()];
        for edge in graph.in_edges(target) {
            let source = edge.node.index();
            let fail_chance = (MYRIA - edge.success_permyria) as f64 / MYRIA as f64;
            let value = base_cost + frontier[edge.option].cost + fail_chance * target_cost;
            if value < costs[source] {
                costs[source] = value;
                policy[source] = Some(Edge {
                    node: target,
                    option: edge.option,
                    success_permyria: edge.success_permyria,
                });
            }
            unresolved[source] -= 1;
            if unresolved[source] == 0 {
                ready.push(edge.node);
            }
        }
    }

    assert_eq!(resolved, n, "state graph contains a cycle");
    tracing::debug!(states = n, "solved expected costs");
    Solution { costs, policy }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MAX_STATES;
    use crate::strategy::combination::Combination;
    use crate::strategy::graph::ABSORBED;
    use crate::strategy::transition::{HoningState, TransitionModel};

    fn option(rate_bonus: u32, cost: f64) -> PricedCombination {
        PricedCombination {
            rate_bonus,
            cost,
            combination: Combination::none(0),
        }
    }

    fn model(base_rate: u32) -> TransitionModel {
        TransitionModel {
            base_rate,
            artisan_cap: 21506,
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
    fn test_absorbed_costs_nothing() {
        let frontier = [option(0, 0.0)];
        let graph = explore(&model(10000), &frontier, HoningState::new(10000, 0));
        let solution = solve(&graph, &frontier, 42.0);
        assert_eq!(solution.cost(ABSORBED), 0.0);
        assert!(solution.policy(ABSORBED).is_none());
        assert_eq!(solution.cost(graph.start()), 42.0);
    }

    #[test]
    fn test_hand_computed_chain() {
        let frontier = [option(0, 0.0)];
        let graph = explore(&model(5000), &frontier, HoningState::new(5000, 0));
        let solution = solve(&graph, &frontier, 100.0);
        // 100 + .5 * (100 + .45 * (100 + .4 * (100 + .35 * 100)))
        assert!((solution.cost(graph.start()) - 184.65).abs() < 1e-9);
    }

    #[test]
    fn test_cheap_certainty_is_chosen() {
        // A 10-gold booster that guarantees success beats paying 100 per retry.
        let frontier = [option(0, 0.0), option(5000, 10.0)];
        let graph = explore(&model(5000), &frontier, HoningState::new(5000, 0));
        let solution = solve(&graph, &frontier, 100.0);
        let best = solution.policy(graph.start()).unwrap();
        assert_eq!(best.option, 1);
        assert_eq!(best.node, ABSORBED);
        assert!((solution.cost(graph.start()) - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_expensive_booster_is_skipped() {
        let frontier = [option(0, 0.0), option(5000, 1000.0)];
        let graph = explore(&model(5000), &frontier, HoningState::new(5000, 0));
        let solution = solve(&graph, &frontier, 100.0);
        assert_eq!(solution.policy(graph.start()).unwrap().option, 0);
    }

    #[test]
    fn test_every_state_resolved_and_finite() {
        let frontier = [option(0, 0.0), option(250, 3.0), option(1000, 20.0)];
        let graph = explore(&model(1000), &frontier, HoningState::new(1000, 0));
        let solution = solve(&graph, &frontier, 50.0);
        for id in graph.node_ids() {
            assert!(solution.cost(id).is_finite());
            if id != ABSORBED {
                assert!(solution.policy(id).is_some());
                assert!(solution.cost(id) >= 50.0);
            }
        }
    }
}
