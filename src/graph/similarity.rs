//! Sentence similarity graph builder
//!
//! Builds a complete graph over sentence ordinals. Each pair of sentences is
//! joined by an edge weighted with the TextRank overlap similarity:
//!
//! ```text
//! sim(s1, s2) = |unique(s1) ∩ unique(s2)| / (log10|s1| + log10|s2|)
//! ```
//!
//! Pairs without shared vocabulary keep a zero-weight edge. Large inputs
//! compute pair weights in parallel; edges are still inserted in pair order.

use super::ranked::RankedGraph;
use crate::errors::Result;
use crate::types::{RankConfig, SentenceRecord};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Sentence count above which pair weights are computed with rayon
const PARALLEL_THRESHOLD: usize = 64;

/// Lexical overlap similarity of two normalized token sequences
///
/// Returns 0 when the log denominator is 0 (both sentences have one word)
/// or when either sentence is empty.
pub fn similarity<S: AsRef<str>>(s1: &[S], s2: &[S]) -> f64 {
    let words_one: FxHashSet<&str> = s1.iter().map(AsRef::as_ref).collect();
    let words_two: FxHashSet<&str> = s2.iter().map(AsRef::as_ref).collect();
    overlap(&words_one, s1.len(), &words_two, s2.len())
}

fn overlap(
    words_one: &FxHashSet<&str>,
    len_one: usize,
    words_two: &FxHashSet<&str>,
    len_two: usize,
) -> f64 {
    if len_one == 0 || len_two == 0 {
        return 0.0;
    }

    let log_sum = (len_one as f64).log10() + (len_two as f64).log10();
    if log_sum == 0.0 {
        return 0.0;
    }

    let common = words_one.intersection(words_two).count();
    common as f64 / log_sum
}

/// Builds the complete sentence graph
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraphBuilder {
    config: RankConfig,
}

impl SimilarityGraphBuilder {
    /// Create a builder with the given ranking parameters
    pub fn new(config: RankConfig) -> Self {
        Self { config }
    }

    /// Build the graph over the given sentences, keyed by their ordinals
    pub fn build(&self, sentences: &[SentenceRecord]) -> Result<RankedGraph<usize>> {
        let n = sentences.len();
        let mut graph = RankedGraph::with_capacity(self.config, n)?;

        for sentence in sentences {
            graph.add_node(sentence.ordinal);
        }

        let vocabularies: Vec<FxHashSet<&str>> = sentences
            .iter()
            .map(|s| s.normalized.iter().map(String::as_str).collect())
            .collect();

        let pair_weights = |i: usize| -> Vec<(usize, usize, f64)> {
            ((i + 1)..n)
                .map(|j| {
                    let weight = overlap(
                        &vocabularies[i],
                        sentences[i].normalized.len(),
                        &vocabularies[j],
                        sentences[j].normalized.len(),
                    );
                    (i, j, weight)
                })
                .collect()
        };

        // For small documents, sequential is faster
        let weights: Vec<(usize, usize, f64)> = if n < PARALLEL_THRESHOLD {
            (0..n).flat_map(pair_weights).collect()
        } else {
            (0..n).into_par_iter().flat_map_iter(pair_weights).collect()
        };

        for (i, j, weight) in weights {
            graph.add_edge(sentences[i].ordinal, sentences[j].ordinal, weight)?;
        }

        Ok(graph)
    }
}
