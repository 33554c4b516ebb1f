//! Score propagation
//!
//! The TextRank update runs over a frozen [`CsrGraph`](crate::graph::csr::CsrGraph)
//! and reports per-node scores plus convergence diagnostics.

pub mod iteration;

/// Result of a ranking computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-node change in the last iteration
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new ranking result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Node IDs ordered by descending score; ties keep ascending ID order
    pub fn ranked_indices(&self) -> Vec<u32> {
        let mut indices: Vec<u32> = (0..self.scores.len() as u32).collect();
        indices.sort_by(|&a, &b| self.scores[b as usize].total_cmp(&self.scores[a as usize]));
        indices
    }
}
