//! Reachable-state graph, explored with an explicit work list.

use super::combination::PricedCombination;
use super::transition::{HoningState, Node, TransitionModel};
use crate::error::HoningError;
use std::collections::HashMap;

/// Handle into the graph's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The absorbing success node always occupies slot 0.
pub const ABSORBED: NodeId = NodeId(0);

/// One attempt from a state with a frontier combination.
///
/// In `out_edges` `node` is the failure target; in `in_edges` it is the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub node: NodeId,
    /// Index into the frontier the graph was built from
    pub option: usize,
    pub success_permyria: u32,
}

#[derive(Debug)]
pub struct StateGraph {
    nodes: Vec<Node>,
    index: HashMap<Node, NodeId>,
    out_edges: Vec<Vec<Edge>>,
    in_edges: Vec<Vec<Edge>>,
    start: NodeId,
}

impl StateGraph {
    /// Explore every state reachable from `start` under the frontier combinations.
    ///
    /// `frontier` must be non-empty and ordered cheapest first. Fails once more
    /// than `max_states` ordinary states are discovered, or when a state would
    /// fail back into itself.
    pub fn build(
        model: &TransitionModel,
        frontier: &[PricedCombination],
        start: HoningState,
        max_states: usize,
    ) -> Result<Self, HoningError> {
        assert!(!frontier.is_empty(), "frontier has no combinations");

        let mut graph = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            start: ABSORBED,
        };
        graph.intern(Node::Absorbed);
        let (start_id, _) = graph.intern(Node::Ordinary(start));
        graph.start = start_id;

        let mut expanded = vec![false; graph.nodes.len()];
        let mut stack = vec![start_id];
        while let Some(id) = stack.pop() {
            if expanded[id.0] {
                continue;
            }
            expanded[id.0] = true;

            let state = match graph.nodes[id.0] {
                Node::Ordinary(state) => state,
                Node::Absorbed => continue,
            };

            // Every combination succeeds here; only the cheapest is worth an edge.
            if model.is_guaranteed(state) {
                let transition = model.apply(state, frontier[0].rate_bonus);
                graph.add_edge(id, ABSORBED, 0, transition.success_permyria);
                continue;
            }

            for (option, priced) in frontier.iter().enumerate() {
                let transition = model.apply(state, priced.rate_bonus);
                let (target, is_new) = graph.intern(transition.target);
                if target == id {
                    return Err(HoningError::InvalidStart(format!(
                        "state {state:?} makes no progress on failure"
                    )));
                }
                graph.add_edge(id, target, option, transition.success_permyria);
                if is_new {
                    if graph.nodes.len() - 1 > max_states {
                        return Err(HoningError::StateSpaceTooLarge { budget: max_states });
                    }
                    expanded.push(false);
                    stack.push(target);
                }
            }
        }

        tracing::debug!(
            nodes = graph.nodes.len(),
            edges = graph.edge_count(),
            "built state graph"
        );
        Ok(graph)
    }

    fn intern(&mut self, node: Node) -> (NodeId, bool) {
        if let Some(&id) = self.index.get(&node) {
            return (id, false);
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.index.insert(node, id);
        self.out_edges.push(Vec::new());
        self.in_edges.push(Vec::new());
        (id, true)
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, option: usize, success_permyria: u32) {
        self.out_edges[from.0].push(Edge {
            node: to,
            option,
            success_permyria,
        });
        self.in_edges[to.0].push(Edge {
            node: from,
            option,
            success_permyria,
        });
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id.0]
    }

    pub fn lookup(&self, node: &Node) -> Option<NodeId> {
        self.index.get(node).copied()
    }

    pub fn out_edges(&self, id: NodeId) -> &[Edge] {
        &self.out_edges[id.0]
    }

    pub fn in_edges(&self, id: NodeId) -> &[Edge] {
        &self.in_edges[id.0]
    }

    pub fn edge_count(&self) -> usize {
        self.out_edges.iter().map(Vec::len).sum()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Every non-absorbing state discovered during exploration.
    pub fn states(&self) -> impl Iterator<Item = HoningState> + '_ {
        self.nodes.iter().filter_map(|node| match node {
            Node::Ordinary(state) => Some(*state),
            Node::Absorbed => None,
        })
    }

    /// Kahn's algorithm; `None` if the graph has a cycle.
    pub fn topological_order(&self) -> Option<Vec<NodeId>> {
        let mut in_degree: Vec<usize> = self.in_edges.iter().map(Vec::len).collect();
        let mut ready: Vec<NodeId> = self.node_ids().filter(|id| in_degree[id.0] == 0).collect();
        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(id) = ready.pop() {
            order.push(id);
            for edge in &self.out_edges[id.0] {
                in_degree[edge.node.0] -= 1;
                if in_degree[edge.node.0] == 0 {
                    ready.push(edge.node);
                }
            }
        }
        (order.len() == self.nodes.len()).then_some(order)
    }
}
