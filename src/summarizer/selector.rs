//! Ratio-based sentence selection for summarization
//!
//! Keeps the top `floor(n * ratio)` ranked sentences and restores their
//! source order.

use crate::errors::{Result, TextRankError};
use crate::graph::ranked::Ranking;
use crate::types::SentenceRecord;

/// Selects the best-ranked fraction of a document's sentences
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceSelector {
    ratio: f64,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self { ratio: 0.33 }
    }
}

impl SentenceSelector {
    /// Create a selector keeping `ratio` of the sentences
    pub fn new(ratio: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(TextRankError::invalid_config(format!(
                "extraction_ratio must be in [0, 1], got {ratio}"
            )));
        }
        Ok(Self { ratio })
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Number of sentences kept out of `total`
    pub fn count(&self, total: usize) -> usize {
        (total as f64 * self.ratio).floor() as usize
    }

    /// Pick the top-ranked records, scored, in ascending ordinal order
    ///
    /// `records` must be indexed by ordinal.
    pub fn select(
        &self,
        ranking: &Ranking<usize>,
        records: &[SentenceRecord],
    ) -> Vec<SentenceRecord> {
        let keep = self.count(records.len());

        let mut selected: Vec<SentenceRecord> = ranking
            .nodes
            .iter()
            .take(keep)
            .filter_map(|&(ordinal, score)| {
                records.get(ordinal).map(|record| SentenceRecord {
                    score,
                    ..record.clone()
                })
            })
            .collect();

        selected.sort_by_key(|record| record.ordinal);
        selected
    }
}
