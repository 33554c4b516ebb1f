//! TextRank score iteration
//!
//! Implements the unnormalized update from the TextRank paper:
//!
//! ```text
//! S(n) = (1 - d) + d * Σ_{m ∈ N(n)} S(m) * w(m, n) / W(m)
//! ```
//!
//! where `W(m)` is the total weight incident to `m`. With unit weights the
//! ratio reduces to `S(m) / deg(m)`. Every pass reads only the previous
//! pass's scores (double-buffered), so node order cannot leak into results.
//! Nodes whose incident weight is zero contribute nothing and settle at
//! `1 - d`.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::RankConfig;

/// Power iteration of the TextRank update
#[derive(Debug, Clone)]
pub struct TextRankIteration {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Per-node convergence threshold
    pub threshold: f64,
}

impl TextRankIteration {
    /// Create from a validated [`RankConfig`] for a graph of `node_count` nodes
    pub fn from_config(config: &RankConfig, node_count: usize) -> Self {
        Self {
            damping: config.damping_factor,
            max_iterations: config.iteration_bound(node_count),
            threshold: config.convergence_threshold,
        }
    }

    /// Run from the given initial scores, calling `check` before every pass
    ///
    /// An error from `check` aborts the run. Exhausting `max_iterations`
    /// without converging is not an error: the last scores are returned
    /// with `converged = false`.
    pub fn run_checked<E>(
        &self,
        graph: &CsrGraph,
        initial: Vec<f64>,
        mut check: impl FnMut() -> Result<(), E>,
    ) -> Result<PageRankResult, E> {
        let n = graph.num_nodes;
        if n == 0 {
            return Ok(PageRankResult::new(vec![], 0, 0.0, true));
        }

        let mut scores = initial;
        scores.resize(n, 1.0);
        let mut new_scores = vec![0.0; n];

        let baseline = 1.0 - self.damping;
        let mut iterations = 0;
        let mut delta = f64::MAX;
        let mut converged = false;

        while iterations < self.max_iterations {
            check()?;
            iterations += 1;

            new_scores.fill(baseline);

            // Push each node's share along its edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        new_scores[neighbor as usize] +=
                            self.damping * node_score * weight / total_weight;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);

            if delta <= self.threshold {
                converged = true;
                break;
            }
        }

        Ok(PageRankResult::new(scores, iterations, delta, converged))
    }
}
