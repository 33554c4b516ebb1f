//! Extractive summarization
//!
//! Every sentence becomes a node of a complete similarity graph. The best
//! ranked fraction of sentences is returned in source order, using the
//! original sentence text.

pub mod selector;

use crate::cancel::{self, CancelFlag};
use crate::errors::Result;
use crate::graph::similarity::SimilarityGraphBuilder;
use crate::nlp::{
    BaseFormReducer, Linguistics, Segmenter, StopwordFilter, Stopwords, SuffixReducer,
    SuffixTagger, UnicodeSegmenter,
};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_CLEAN,
    STAGE_FORMAT, STAGE_GRAPH, STAGE_RANK, STAGE_SEGMENT,
};
use crate::pipeline::trace_stage;
use crate::types::{BaseFormMode, SentenceRecord, TextRankConfig};
use rayon::prelude::*;
use selector::SentenceSelector;
use serde::{Deserialize, Serialize};

/// Selected sentences with ranking diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in source order, with their scores
    pub sentences: Vec<SentenceRecord>,
    /// Ranking iterations performed
    pub iterations: usize,
    /// Whether ranking converged before the iteration bound
    pub converged: bool,
}

impl Summary {
    /// Original texts of the selected sentences joined by single spaces
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Summarizes raw text by sentence extraction
///
/// The part-of-speech tagger of the [`Linguistics`] bundle is not used.
#[derive(Debug, Clone)]
pub struct SentenceExtractor<
    S = UnicodeSegmenter,
    T = SuffixTagger,
    R = SuffixReducer,
    W = StopwordFilter,
> {
    config: TextRankConfig,
    selector: SentenceSelector,
    linguistics: Linguistics<S, T, R, W>,
    cancel: Option<CancelFlag>,
}

impl SentenceExtractor {
    /// Extractor with the default collaborators for `config`
    pub fn from_config(config: TextRankConfig) -> Result<Self> {
        let linguistics = Linguistics::from_config(&config);
        Self::new(config, linguistics)
    }
}

impl<S, T, R, W> SentenceExtractor<S, T, R, W>
where
    S: Segmenter,
    R: BaseFormReducer,
    W: Stopwords,
{
    /// Create an extractor, validating the configuration
    pub fn new(config: TextRankConfig, linguistics: Linguistics<S, T, R, W>) -> Result<Self> {
        config.validate()?;
        let selector = SentenceSelector::new(config.extraction_ratio)?;
        Ok(Self {
            config,
            selector,
            linguistics,
            cancel: None,
        })
    }

    /// Stop between sentences and ranking iterations once `flag` is raised
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    /// Summarize `text` into the selected sentences joined by spaces
    pub fn summarize(&self, text: &str) -> Result<String> {
        Ok(self.summarize_with_info(text, &mut NoopObserver)?.text())
    }

    /// Summarize with per-sentence scores and ranking diagnostics
    pub fn summarize_with_info(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        let cancel = self.cancel.as_ref();

        // Stage 0: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = self.linguistics.segmenter.segment_sentences(text)?;
            observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(clock.elapsed()));
            observer.on_sentences(sentences.len());
            sentences
        };

        // Stage 1: Normalize
        let records = {
            trace_stage!(STAGE_CLEAN);
            observer.on_stage_start(STAGE_CLEAN);
            let clock = StageClock::start();

            let mut records = Vec::with_capacity(sentences.len());
            for (ordinal, sentence) in sentences.into_iter().enumerate() {
                cancel::check(cancel)?;
                let normalized = self.normalize(&sentence)?;
                records.push(SentenceRecord::new(sentence, ordinal, normalized));
            }

            observer.on_stage_end(STAGE_CLEAN, &StageReport::new(clock.elapsed()));
            records
        };

        // Stage 2: Build graph
        let mut graph = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();

            let graph = SimilarityGraphBuilder::new(self.config.rank_config()).build(&records)?;

            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(graph.node_count())
                .edges(graph.edge_count())
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);
            graph
        };

        // Stage 3: Rank
        let ranking = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranking = graph.rank_detailed(cancel)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .iterations(ranking.iterations)
                .converged(ranking.converged)
                .residual(ranking.delta)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            ranking
        };

        // Stage 4: Select and restore source order
        trace_stage!(STAGE_FORMAT);
        observer.on_stage_start(STAGE_FORMAT);
        let clock = StageClock::start();
        let selected = self.selector.select(&ranking, &records);
        observer.on_stage_end(STAGE_FORMAT, &StageReport::new(clock.elapsed()));

        Ok(Summary {
            sentences: selected,
            iterations: ranking.iterations,
            converged: ranking.converged,
        })
    }

    /// Summarize many documents in parallel, in input order
    pub fn summarize_batch<D>(&self, documents: &[D]) -> Vec<Result<String>>
    where
        D: AsRef<str> + Sync,
        Self: Sync,
    {
        documents
            .par_iter()
            .map(|doc| self.summarize(doc.as_ref()))
            .collect()
    }

    /// Comparison tokens of a sentence: cleaned, stopword-free lemmas
    fn normalize(&self, sentence: &str) -> Result<Vec<String>> {
        self.linguistics
            .content_tokens(sentence)?
            .iter()
            .map(|token| {
                self.linguistics
                    .reducer
                    .reduce_to_base(token, BaseFormMode::Lemma)
            })
            .collect()
    }
}

/// Summarize `text` with the default English collaborators
pub fn summarize(text: &str, extraction_ratio: f64) -> Result<String> {
    let config = TextRankConfig::default().with_extraction_ratio(extraction_ratio);
    SentenceExtractor::from_config(config)?.summarize(text)
}
