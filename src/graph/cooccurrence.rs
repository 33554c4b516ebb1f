//! Co-occurrence graph builder
//!
//! Links every token to the tokens that precede it within a trailing window
//! of the same sentence. Windows never cross sentence boundaries, but a token
//! seen in several sentences is a single node collecting edges from each.
//! All edges are unweighted.

use super::ranked::RankedGraph;
use crate::errors::{Result, TextRankError};
use crate::types::{RankConfig, TextRankConfig};
use std::collections::VecDeque;

/// Accumulates per-sentence token sequences into one [`RankedGraph`]
#[derive(Debug, Clone)]
pub struct CooccurrenceGraphBuilder {
    /// Number of preceding tokens each token is linked to
    window: usize,
    graph: RankedGraph<String>,
}

impl CooccurrenceGraphBuilder {
    /// Create a builder with the given ranking parameters and window size
    pub fn new(config: RankConfig, window: usize) -> Result<Self> {
        if window == 0 {
            return Err(TextRankError::invalid_config(
                "cooccurrence_threshold must be > 0",
            ));
        }

        Ok(Self {
            window,
            graph: RankedGraph::new(config)?,
        })
    }

    /// Create a builder from a pipeline configuration
    pub fn from_config(config: &TextRankConfig) -> Result<Self> {
        Self::new(config.rank_config(), config.cooccurrence_threshold)
    }

    /// The window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Add one sentence's normalized tokens
    pub fn add_sequence<S: AsRef<str>>(&mut self, tokens: &[S]) {
        let mut previous: VecDeque<&str> = VecDeque::with_capacity(self.window);

        for token in tokens {
            let token = token.as_ref();
            self.graph.add_node(token.to_string());

            for &prev in &previous {
                self.graph
                    .add_unweighted_edge(token.to_string(), prev.to_string());
            }

            if previous.len() >= self.window {
                previous.pop_front();
            }
            previous.push_back(token);
        }
    }

    /// The graph built so far
    pub fn graph(&self) -> &RankedGraph<String> {
        &self.graph
    }

    /// Consume the builder, returning the graph
    pub fn into_graph(self) -> RankedGraph<String> {
        self.graph
    }
}
