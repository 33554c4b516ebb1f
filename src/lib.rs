//! # textrank_extract
//!
//! Graph-based keyword extraction and extractive summarization with TextRank.
//!
//! Both pipelines share one ranking engine, [`RankedGraph`], and differ only
//! in how they build its graph:
//!
//! - **Keywords**: content words become nodes, linked when they co-occur
//!   within a small window of the same sentence.
//! - **Summaries**: sentences become nodes of a complete graph weighted by
//!   lexical overlap.
//!
//! ## Features
//!
//! - **Pluggable linguistics**: segmentation, tagging, base-form reduction
//!   and stopwords are traits with self-contained defaults
//! - **Deterministic**: simultaneous score updates and insertion-order
//!   tie-breaking make rankings reproducible
//! - **Batch friendly**: independent documents rank in parallel with rayon
//! - **Observable**: `tracing` spans per stage and a [`PipelineObserver`] hook
//!
//! ```no_run
//! let keywords = textrank_extract::extract_keywords(
//!     "Graphs model relations. Ranking graphs finds central nodes.",
//!     5,
//! )?;
//! let summary = textrank_extract::summarize("One. Two. Three. Four.", 0.5)?;
//! # Ok::<(), textrank_extract::TextRankError>(())
//! ```

pub mod cancel;
pub mod errors;
pub mod graph;
pub mod keywords;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{BaseFormMode, Keyword, PosTag, RankConfig, SentenceRecord, TextRankConfig};

// Re-export main functionality
pub use cancel::CancelFlag;
pub use graph::{
    cooccurrence::CooccurrenceGraphBuilder,
    csr::CsrGraph,
    ranked::{RankedGraph, Ranking},
    similarity::{similarity, SimilarityGraphBuilder},
};
pub use keywords::{extract_keywords, BaseFormGroups, KeywordExtraction, KeywordExtractor};
pub use nlp::{
    BaseFormReducer, Linguistics, LexiconTagger, PosTagger, Segmenter, StopwordFilter, Stopwords,
    SuffixReducer, SuffixTagger, UnicodeSegmenter,
};
pub use pagerank::{iteration::TextRankIteration, PageRankResult};
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageTimingObserver};
pub use summarizer::{summarize, selector::SentenceSelector, SentenceExtractor, Summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
