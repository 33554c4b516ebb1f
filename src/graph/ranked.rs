//! Ranked graph
//!
//! A simple undirected weighted graph whose nodes carry a score. Nodes are
//! keyed by any hashable identifier (a base-form token, a sentence ordinal)
//! and get dense `u32` indices in insertion order. Insertion order is also
//! the tie-break when two nodes end with the same score.
//!
//! Edges are first-write-wins: adding an existing pair again keeps the
//! original weight.

use super::csr::CsrGraph;
use crate::cancel::{self, CancelFlag};
use crate::errors::{Result, TextRankError};
use crate::pagerank::iteration::TextRankIteration;
use crate::pagerank::PageRankResult;
use crate::types::RankConfig;
use rustc_hash::FxHashMap;
use std::convert::Infallible;
use std::hash::Hash;

/// Initial score of every node
pub const INITIAL_SCORE: f64 = 1.0;

#[derive(Debug, Clone)]
struct RankedNode<N> {
    id: N,
    /// 1.0 until ranked
    score: f64,
    /// Neighbor index -> edge weight
    edges: FxHashMap<u32, f64>,
}

impl<N> RankedNode<N> {
    fn new(id: N) -> Self {
        Self {
            id,
            score: INITIAL_SCORE,
            edges: FxHashMap::default(),
        }
    }
}

/// Outcome of ranking a graph
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<N> {
    /// Node identifiers with their final scores, best first
    pub nodes: Vec<(N, f64)>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Whether every node moved by at most the convergence threshold
    pub converged: bool,
    /// Largest per-node change in the last iteration
    pub delta: f64,
}

impl<N: Clone> Ranking<N> {
    /// Node identifiers, best first
    pub fn ids(&self) -> Vec<N> {
        self.nodes.iter().map(|(id, _)| id.clone()).collect()
    }
}

/// Weighted undirected graph with TextRank scoring
#[derive(Debug, Clone)]
pub struct RankedGraph<N> {
    config: RankConfig,
    id_to_index: FxHashMap<N, u32>,
    nodes: Vec<RankedNode<N>>,
}

impl<N: Clone + Eq + Hash> RankedGraph<N> {
    /// Create an empty graph, rejecting invalid ranking parameters
    pub fn new(config: RankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            id_to_index: FxHashMap::default(),
            nodes: Vec::new(),
        })
    }

    /// Create an empty graph with pre-allocated node capacity
    pub fn with_capacity(config: RankConfig, node_capacity: usize) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            id_to_index: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        })
    }

    /// The ranking parameters of this graph
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Add a node if absent, returning its index
    pub fn add_node(&mut self, id: N) -> u32 {
        if let Some(&index) = self.id_to_index.get(&id) {
            return index;
        }

        let index = self.nodes.len() as u32;
        self.id_to_index.insert(id.clone(), index);
        self.nodes.push(RankedNode::new(id));
        index
    }

    /// Connect two nodes, creating them if needed
    ///
    /// Returns `Ok(true)` when a new edge was created. Self-loops are never
    /// created and an existing edge keeps its weight.
    pub fn add_edge(&mut self, a: N, b: N, weight: f64) -> Result<bool> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(TextRankError::InvalidWeight { weight });
        }

        let ia = self.add_node(a);
        let ib = self.add_node(b);
        if ia == ib {
            return Ok(false);
        }

        if self.nodes[ia as usize].edges.contains_key(&ib) {
            return Ok(false);
        }

        self.nodes[ia as usize].edges.insert(ib, weight);
        self.nodes[ib as usize].edges.insert(ia, weight);
        Ok(true)
    }

    /// Add an edge with the default weight of 1.0
    pub fn add_unweighted_edge(&mut self, a: N, b: N) -> bool {
        matches!(self.add_edge(a, b, 1.0), Ok(true))
    }

    /// Rank the graph, returning node identifiers by descending score
    pub fn rank(&mut self) -> Vec<N> {
        match self.rank_with(|| Ok::<(), Infallible>(())) {
            Ok(ranking) => ranking.ids(),
            Err(never) => match never {},
        }
    }

    /// Rank the graph with full diagnostics, honoring an optional cancel flag
    pub fn rank_detailed(&mut self, cancel: Option<&CancelFlag>) -> Result<Ranking<N>> {
        self.rank_with(|| cancel::check(cancel))
    }

    fn rank_with<E>(
        &mut self,
        check: impl FnMut() -> std::result::Result<(), E>,
    ) -> std::result::Result<Ranking<N>, E> {
        let csr = self.to_csr();
        let initial: Vec<f64> = self.nodes.iter().map(|n| n.score).collect();

        let iteration = TextRankIteration::from_config(&self.config, self.nodes.len());
        let result = iteration.run_checked(&csr, initial, check)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.edge_count(),
            iterations = result.iterations,
            converged = result.converged,
            delta = result.delta,
            "ranked graph"
        );

        Ok(self.apply(result))
    }

    /// Write scores back to the nodes and order them
    fn apply(&mut self, result: PageRankResult) -> Ranking<N> {
        for (node, &score) in self.nodes.iter_mut().zip(result.scores.iter()) {
            node.score = score;
        }

        let nodes = result
            .ranked_indices()
            .into_iter()
            .map(|i| {
                let node = &self.nodes[i as usize];
                (node.id.clone(), node.score)
            })
            .collect();

        Ranking {
            nodes,
            iterations: result.iterations,
            converged: result.converged,
            delta: result.delta,
        }
    }

    /// Freeze the adjacency into CSR form for iteration
    pub fn to_csr(&self) -> CsrGraph {
        CsrGraph::from_adjacency(self.nodes.iter().map(|n| &n.edges))
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if a node exists
    pub fn contains_node(&self, id: &N) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Get a node's current score
    pub fn score(&self, id: &N) -> Option<f64> {
        self.node(id).map(|n| n.score)
    }

    /// Get the weight of the edge between two nodes
    pub fn weight(&self, a: &N, b: &N) -> Option<f64> {
        let ib = *self.id_to_index.get(b)?;
        self.node(a)?.edges.get(&ib).copied()
    }

    /// Check if two nodes are connected
    pub fn contains_edge(&self, a: &N, b: &N) -> bool {
        self.weight(a, b).is_some()
    }

    /// Iterate over the neighbors of a node with edge weights
    pub fn neighbors<'a>(&'a self, id: &N) -> impl Iterator<Item = (&'a N, f64)> + 'a {
        self.node(id)
            .into_iter()
            .flat_map(|n| n.edges.iter())
            .map(move |(&i, &w)| (&self.nodes[i as usize].id, w))
    }

    /// Node identifiers in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter().map(|n| &n.id)
    }

    fn node(&self, id: &N) -> Option<&RankedNode<N>> {
        self.id_to_index
            .get(id)
            .and_then(|&i| self.nodes.get(i as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> RankedGraph<&'static str> {
        RankedGraph::new(RankConfig::default()).unwrap()
    }

    fn scores_of(g: &RankedGraph<&'static str>) -> Vec<f64> {
        g.node_ids().map(|id| g.score(id).unwrap()).collect()
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut g = graph();
        let a = g.add_node("machine");
        let b = g.add_node("learning");
        let c = g.add_node("machine");

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.score(&"machine"), Some(INITIAL_SCORE));
    }

    #[test]
    fn test_add_edge_idempotent_first_write_wins() {
        let mut g = graph();
        assert!(g.add_edge("a", "b", 0.5).unwrap());
        assert!(!g.add_edge("a", "b", 0.5).unwrap());
        assert!(!g.add_edge("b", "a", 3.0).unwrap());

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(&"a", &"b"), Some(0.5));
        assert_eq!(g.weight(&"b", &"a"), Some(0.5));
    }

    #[test]
    fn test_self_loops_prevented() {
        let mut g = graph();
        assert!(!g.add_edge("test", "test", 1.0).unwrap());
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let mut g = graph();
        assert!(matches!(
            g.add_edge("a", "b", -1.0),
            Err(TextRankError::InvalidWeight { .. })
        ));
        assert!(g.add_edge("a", "b", f64::NAN).is_err());
        assert!(g.is_empty());
    }

    #[test]
    fn test_invalid_damping_rejected_at_construction() {
        let err = RankedGraph::<u32>::new(RankConfig::default().with_damping(1.2)).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_empty_graph_ranks_empty() {
        let mut g = graph();
        assert!(g.rank().is_empty());

        let ranking = g.rank_detailed(None).unwrap();
        assert!(ranking.nodes.is_empty());
        assert!(ranking.converged);
        assert_eq!(ranking.iterations, 0);
    }

    #[test]
    fn test_isolated_nodes_score_one_minus_damping() {
        let mut g = graph();
        g.add_node("x");
        g.add_node("y");
        g.add_node("z");

        // Max iterations defaults to node count; one pass already settles.
        let ranking = g.rank_detailed(None).unwrap();
        for (_, score) in &ranking.nodes {
            assert!((score - 0.15).abs() < 1e-12);
        }
        // Ties fall back to insertion order.
        assert_eq!(ranking.ids(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_isolated_node_after_single_iteration() {
        let mut g = RankedGraph::new(
            RankConfig::default()
                .with_damping(0.7)
                .with_max_iterations(1),
        )
        .unwrap();
        g.add_node(7u32);
        g.rank();
        assert!((g.score(&7).unwrap() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_star_graph_hub_first() {
        let mut g = RankedGraph::new(RankConfig::default().with_max_iterations(100)).unwrap();
        g.add_unweighted_edge("s1", "hub");
        g.add_unweighted_edge("s2", "hub");
        g.add_unweighted_edge("s3", "hub");

        let order = g.rank();
        assert_eq!(order[0], "hub");
        assert_eq!(&order[1..], &["s1", "s2", "s3"]);
    }

    #[test]
    fn test_unweighted_fixed_point() {
        // Path a - b - c. Fixed point of the unnormalized update:
        // b = 0.15 + 0.85 * (a + c), a = c = 0.15 + 0.85 * b / 2
        let mut g = RankedGraph::new(
            RankConfig::default()
                .with_convergence_threshold(1e-12)
                .with_max_iterations(1000),
        )
        .unwrap();
        g.add_unweighted_edge("a", "b");
        g.add_unweighted_edge("b", "c");
        let ranking = g.rank_detailed(None).unwrap();
        assert!(ranking.converged);

        let b = g.score(&"b").unwrap();
        let a = g.score(&"a").unwrap();
        assert!((b - (0.15 + 0.85 * 2.0 * a)).abs() < 1e-9);
        assert!((a - (0.15 + 0.85 * b / 2.0)).abs() < 1e-9);
        // Scores sum to the node count for graphs without isolated nodes.
        assert!((scores_of(&g).iter().sum::<f64>() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_weights_match_unweighted() {
        let config = RankConfig::default()
            .with_convergence_threshold(0.0)
            .with_max_iterations(50);

        let mut unweighted = RankedGraph::new(config).unwrap();
        let mut weighted = RankedGraph::new(config).unwrap();
        for (a, b) in [("a", "b"), ("b", "c"), ("c", "d"), ("a", "c")] {
            unweighted.add_unweighted_edge(a, b);
            weighted.add_edge(a, b, 2.5).unwrap();
        }
        unweighted.rank();
        weighted.rank();

        for (u, w) in scores_of(&unweighted).iter().zip(scores_of(&weighted).iter()) {
            assert!((u - w).abs() < 1e-12);
        }
    }

    #[test]
    fn test_update_is_order_independent() {
        // The same edges inserted in a different order must give the same scores.
        let config = RankConfig::default().with_max_iterations(5);
        let mut forward = RankedGraph::new(config).unwrap();
        let mut backward = RankedGraph::new(config).unwrap();
        let edges = [("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("b", "e")];
        for (a, b) in edges {
            forward.add_unweighted_edge(a, b);
        }
        for (a, b) in edges.iter().rev() {
            backward.add_unweighted_edge(*b, *a);
        }
        forward.rank();
        backward.rank();

        for id in ["a", "b", "c", "d", "e"] {
            let f = forward.score(&id).unwrap();
            let b = backward.score(&id).unwrap();
            assert!((f - b).abs() < 1e-12, "{id}: {f} vs {b}");
        }
    }

    #[test]
    fn test_zero_weight_edges_are_inert() {
        let mut g: RankedGraph<u32> = RankedGraph::new(RankConfig::default()).unwrap();
        g.add_edge(0u32, 1, 0.0).unwrap();
        g.add_edge(1u32, 2, 0.0).unwrap();
        let ranking = g.rank_detailed(None).unwrap();

        assert_eq!(g.edge_count(), 2);
        for (_, score) in &ranking.nodes {
            assert!((score - 0.15).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cancelled_ranking() {
        let mut g = graph();
        g.add_unweighted_edge("a", "b");
        let flag = CancelFlag::new();
        flag.cancel();

        assert!(matches!(
            g.rank_detailed(Some(&flag)),
            Err(TextRankError::Cancelled)
        ));
        // Scores untouched
        assert_eq!(g.score(&"a"), Some(INITIAL_SCORE));
    }

    #[test]
    fn test_neighbors_and_lookup() {
        let mut g = graph();
        g.add_edge("a", "b", 2.0).unwrap();
        g.add_edge("a", "c", 1.0).unwrap();

        let mut neighbors: Vec<_> = g.neighbors(&"a").map(|(id, w)| (*id, w)).collect();
        neighbors.sort_by(|x, y| x.0.cmp(y.0));
        assert_eq!(neighbors, vec![("b", 2.0), ("c", 1.0)]);
        assert!(g.contains_edge(&"c", &"a"));
        assert!(!g.contains_edge(&"b", &"c"));
        assert_eq!(g.neighbors(&"missing").count(), 0);
        assert!(g.contains_node(&"c"));
    }
}
