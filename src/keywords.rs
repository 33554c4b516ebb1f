//! Keyword extraction
//!
//! Sentences are cleaned and filtered down to content words of the accepted
//! parts of speech. Each surviving word is reduced to a base form, and the
//! base forms of every sentence are linked by co-occurrence into one graph.
//! After ranking, each base form expands back to the surface forms that
//! produced it, in order of first appearance.

use crate::cancel::{self, CancelFlag};
use crate::errors::Result;
use crate::graph::cooccurrence::CooccurrenceGraphBuilder;
use crate::graph::ranked::Ranking;
use crate::nlp::{
    BaseFormReducer, Linguistics, PosTagger, Segmenter, StopwordFilter, Stopwords, SuffixReducer,
    SuffixTagger, UnicodeSegmenter,
};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_CLEAN,
    STAGE_FORMAT, STAGE_GRAPH, STAGE_RANK, STAGE_SEGMENT,
};
use crate::pipeline::trace_stage;
use crate::types::{Keyword, PosTag, TextRankConfig};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Base-form grouping
// ============================================================================

/// Maps each base form to the distinct surface forms that reduce to it
///
/// Surface forms keep the order in which they were first inserted.
#[derive(Debug, Clone, Default)]
pub struct BaseFormGroups {
    groups: FxHashMap<String, Vec<String>>,
}

impl BaseFormGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `surface` reduces to `base`. Returns false if already known.
    pub fn insert(&mut self, base: &str, surface: &str) -> bool {
        let surfaces = self.groups.entry(base.to_string()).or_default();
        if surfaces.iter().any(|s| s == surface) {
            return false;
        }
        surfaces.push(surface.to_string());
        true
    }

    /// Surface forms of `base`, in first-occurrence order
    pub fn surfaces(&self, base: &str) -> &[String] {
        self.groups.get(base).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct base forms
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Expand ranked base forms into keywords, keeping at most `limit`
    pub fn expand(&self, ranking: &Ranking<String>, limit: usize) -> Vec<Keyword> {
        ranking
            .nodes
            .iter()
            .flat_map(|(base, score)| {
                self.surfaces(base).iter().map(move |surface| Keyword {
                    text: surface.clone(),
                    base: base.clone(),
                    score: *score,
                })
            })
            .take(limit)
            .collect()
    }
}

// ============================================================================
// Extractor
// ============================================================================

/// Keywords with ranking diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordExtraction {
    /// Keywords by descending score
    pub keywords: Vec<Keyword>,
    /// Ranking iterations performed
    pub iterations: usize,
    /// Whether ranking converged before the iteration bound
    pub converged: bool,
}

impl KeywordExtraction {
    /// Keyword surface forms only
    pub fn texts(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.text.clone()).collect()
    }
}

/// Extracts keywords from raw text
#[derive(Debug, Clone)]
pub struct KeywordExtractor<
    S = UnicodeSegmenter,
    T = SuffixTagger,
    R = SuffixReducer,
    W = StopwordFilter,
> {
    config: TextRankConfig,
    linguistics: Linguistics<S, T, R, W>,
    cancel: Option<CancelFlag>,
}

impl KeywordExtractor {
    /// Extractor with the default collaborators for `config`
    pub fn from_config(config: TextRankConfig) -> Result<Self> {
        let linguistics = Linguistics::from_config(&config);
        Self::new(config, linguistics)
    }
}

impl<S, T, R, W> KeywordExtractor<S, T, R, W>
where
    S: Segmenter,
    T: PosTagger,
    R: BaseFormReducer,
    W: Stopwords,
{
    /// Create an extractor, validating the configuration
    pub fn new(config: TextRankConfig, linguistics: Linguistics<S, T, R, W>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
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

    pub fn linguistics(&self) -> &Linguistics<S, T, R, W> {
        &self.linguistics
    }

    /// Extract up to `rank_threshold` keywords, best first
    pub fn extract(&self, text: &str) -> Result<Vec<String>> {
        let extraction = self.extract_with_info(text, &mut NoopObserver)?;
        Ok(extraction.keywords.into_iter().map(|k| k.text).collect())
    }

    /// Extract keywords with scores, base forms and ranking diagnostics
    pub fn extract_with_info(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<KeywordExtraction> {
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

        // Stage 1: Clean, filter and reduce
        let (sequences, groups) = {
            trace_stage!(STAGE_CLEAN);
            observer.on_stage_start(STAGE_CLEAN);
            let clock = StageClock::start();

            let mut surfaces = Vec::with_capacity(sentences.len());
            for sentence in &sentences {
                cancel::check(cancel)?;
                surfaces.push(self.candidate_words(sentence)?);
            }
            let reduced = self.reduce(&surfaces)?;

            observer.on_stage_end(STAGE_CLEAN, &StageReport::new(clock.elapsed()));
            reduced
        };

        // Stage 2: Build graph
        let mut graph = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();

            let mut builder = CooccurrenceGraphBuilder::from_config(&self.config)?;
            for sequence in &sequences {
                builder.add_sequence(sequence.as_slice());
            }
            let graph = builder.into_graph();

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

        // Stage 4: Expand to surface forms
        trace_stage!(STAGE_FORMAT);
        observer.on_stage_start(STAGE_FORMAT);
        let clock = StageClock::start();
        let keywords = groups.expand(&ranking, self.config.rank_threshold);
        observer.on_stage_end(STAGE_FORMAT, &StageReport::new(clock.elapsed()));

        Ok(KeywordExtraction {
            keywords,
            iterations: ranking.iterations,
            converged: ranking.converged,
        })
    }

    /// Extract keywords from many documents in parallel
    ///
    /// Results are returned in input order; each document fails or succeeds
    /// on its own.
    pub fn extract_batch<D>(&self, documents: &[D]) -> Vec<Result<Vec<String>>>
    where
        D: AsRef<str> + Sync,
        Self: Sync,
    {
        documents
            .par_iter()
            .map(|doc| self.extract(doc.as_ref()))
            .collect()
    }

    /// Cleaned, stopword-free words of one sentence with an accepted tag
    fn candidate_words(&self, sentence: &str) -> Result<Vec<String>> {
        let tokens = self.linguistics.content_tokens(sentence)?;
        if tokens.is_empty() {
            return Ok(tokens);
        }

        let tagged = self.linguistics.tagger.tag_pos(&tokens)?;
        Ok(tagged
            .into_iter()
            .filter(|(_, tag)| self.accepts(*tag))
            .map(|(word, _)| word)
            .collect())
    }

    fn accepts(&self, tag: PosTag) -> bool {
        let include = &self.config.include_pos;
        include.contains(&tag) || (tag == PosTag::ProperNoun && include.contains(&PosTag::Noun))
    }

    /// Reduce every distinct word once, grouping surface forms by base form
    fn reduce(&self, surfaces: &[Vec<String>]) -> Result<(Vec<Vec<String>>, BaseFormGroups)> {
        let mut base_of: FxHashMap<&str, String> = FxHashMap::default();
        let mut groups = BaseFormGroups::new();

        for word in surfaces.iter().flatten() {
            if base_of.contains_key(word.as_str()) {
                continue;
            }
            let base = self
                .linguistics
                .reducer
                .reduce_to_base(word, self.config.base_form)?;
            groups.insert(&base, word);
            base_of.insert(word.as_str(), base);
        }

        let sequences = surfaces
            .iter()
            .map(|sentence| {
                sentence
                    .iter()
                    .filter_map(|word| base_of.get(word.as_str()).cloned())
                    .collect()
            })
            .collect();

        Ok((sequences, groups))
    }
}

/// Extract up to `rank_threshold` keywords with the default English
/// collaborators
pub fn extract_keywords(text: &str, rank_threshold: usize) -> Result<Vec<String>> {
    let config = TextRankConfig::default().with_rank_threshold(rank_threshold);
    KeywordExtractor::from_config(config)?.extract(text)
}
