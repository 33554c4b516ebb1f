//! Core types
//!
//! Configuration, part-of-speech tags, base-form modes and the records that
//! flow out of the two extraction pipelines.

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Part of speech
// ============================================================================

/// Part-of-speech tags produced by a [`PosTagger`](crate::nlp::pos::PosTagger)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
    Punctuation,
    Other,
}

impl PosTag {
    /// Check if this tag is a noun (common or proper)
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Parse a Penn Treebank tag (`NN`, `NNS`, `JJR`, `VBD`, ...)
    pub fn from_penn(tag: &str) -> Self {
        let tag = tag.to_uppercase();
        match tag.as_str() {
            "NNP" | "NNPS" => PosTag::ProperNoun,
            "PRP" | "PRP$" | "WP" | "WP$" => PosTag::Pronoun,
            "DT" | "PDT" | "WDT" => PosTag::Determiner,
            "IN" | "TO" => PosTag::Preposition,
            "CC" => PosTag::Conjunction,
            "CD" => PosTag::Numeral,
            t if t.starts_with("NN") => PosTag::Noun,
            t if t.starts_with("JJ") => PosTag::Adjective,
            t if t.starts_with("VB") || t == "MD" => PosTag::Verb,
            t if t.starts_with("RB") || t == "WRB" => PosTag::Adverb,
            t if !t.is_empty() && t.chars().all(|c| c.is_ascii_punctuation()) => {
                PosTag::Punctuation
            }
            _ => PosTag::Other,
        }
    }

    /// Parse a Universal Dependencies tag (`NOUN`, `ADJ`, ...)
    pub fn from_universal(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "PROPN" => PosTag::ProperNoun,
            "VERB" | "AUX" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Preposition,
            "CCONJ" | "SCONJ" => PosTag::Conjunction,
            "NUM" => PosTag::Numeral,
            "PUNCT" => PosTag::Punctuation,
            _ => PosTag::Other,
        }
    }
}

// ============================================================================
// Base form reduction
// ============================================================================

/// How a token is reduced to its base form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseFormMode {
    /// Dictionary-style lemma ("cats" -> "cat")
    #[default]
    Lemma,
    /// Aggressive suffix stripping ("running" -> "run")
    Stem,
}

// ============================================================================
// Records
// ============================================================================

/// A sentence of the source text
///
/// `ordinal` is the 0-based position in the source and stays fixed when the
/// records are re-ordered by rank. `normalized` is only used for similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Original sentence text
    pub text: String,
    /// Position in the source text
    pub ordinal: usize,
    /// Cleaned, lemmatized, stopword-free tokens
    pub normalized: Vec<String>,
    /// Rank score (0 until ranked)
    pub score: f64,
}

impl SentenceRecord {
    /// Create a new unranked sentence record
    pub fn new(text: impl Into<String>, ordinal: usize, normalized: Vec<String>) -> Self {
        Self {
            text: text.into(),
            ordinal,
            normalized,
            score: 0.0,
        }
    }
}

/// A keyword returned by the keyword pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Surface form as it appeared in the cleaned text
    pub text: String,
    /// Base form the surface form reduces to (the graph node)
    pub base: String,
    /// Score of the base form's node
    pub score: f64,
}

// ============================================================================
// Configuration
// ============================================================================

/// Ranking parameters of a [`RankedGraph`](crate::graph::ranked::RankedGraph)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Weight of neighbor contributions vs. the constant baseline
    pub damping_factor: f64,
    /// Largest per-node score change still considered converged
    pub convergence_threshold: f64,
    /// Iteration bound; `None` uses the graph's node count
    pub max_iterations: Option<usize>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            convergence_threshold: 0.0001,
            max_iterations: None,
        }
    }
}

impl RankConfig {
    /// Validate the ranking parameters
    pub fn validate(&self) -> Result<()> {
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(TextRankError::invalid_config(format!(
                "damping_factor must be in (0, 1), got {}",
                self.damping_factor
            )));
        }

        if !(self.convergence_threshold >= 0.0 && self.convergence_threshold.is_finite()) {
            return Err(TextRankError::invalid_config(format!(
                "convergence_threshold must be a finite value >= 0, got {}",
                self.convergence_threshold
            )));
        }

        if self.max_iterations == Some(0) {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        Ok(())
    }

    /// Iteration bound for a graph with `node_count` nodes
    pub fn iteration_bound(&self, node_count: usize) -> usize {
        self.max_iterations.unwrap_or(node_count)
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

/// Configuration for both extraction pipelines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// Damping factor for ranking (typically 0.85)
    pub damping: f64,
    /// Per-node convergence threshold
    pub convergence_threshold: f64,
    /// Iteration bound; `None` uses the graph's node count
    pub max_iterations: Option<usize>,
    /// Number of preceding tokens a token is linked to
    pub cooccurrence_threshold: usize,
    /// Number of keywords to return
    pub rank_threshold: usize,
    /// Fraction of sentences kept in a summary
    pub extraction_ratio: f64,
    /// Lemmatize or stem tokens before graph construction
    pub base_form: BaseFormMode,
    /// Language code for stopwords (e.g., "en", "de")
    pub language: String,
    /// Additional stopwords on top of the built-in list
    pub stopwords: Vec<String>,
    /// POS tags a keyword candidate may carry
    pub include_pos: Vec<PosTag>,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            convergence_threshold: 0.0001,
            max_iterations: None,
            cooccurrence_threshold: 2,
            rank_threshold: 15,
            extraction_ratio: 0.33,
            base_form: BaseFormMode::Lemma,
            language: "en".to_string(),
            stopwords: Vec::new(),
            include_pos: vec![PosTag::Noun, PosTag::Adjective],
        }
    }
}

impl TextRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.rank_config().validate()?;

        if self.cooccurrence_threshold == 0 {
            return Err(TextRankError::invalid_config(
                "cooccurrence_threshold must be > 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.extraction_ratio) {
            return Err(TextRankError::invalid_config(format!(
                "extraction_ratio must be between 0 and 1, got {}",
                self.extraction_ratio
            )));
        }

        Ok(())
    }

    /// The ranking subset of this configuration
    pub fn rank_config(&self) -> RankConfig {
        RankConfig {
            damping_factor: self.damping,
            convergence_threshold: self.convergence_threshold,
            max_iterations: self.max_iterations,
        }
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Builder method: set co-occurrence window
    pub fn with_cooccurrence_threshold(mut self, window: usize) -> Self {
        self.cooccurrence_threshold = window;
        self
    }

    /// Builder method: set number of keywords to return
    pub fn with_rank_threshold(mut self, rank_threshold: usize) -> Self {
        self.rank_threshold = rank_threshold;
        self
    }

    /// Builder method: set summary extraction ratio
    pub fn with_extraction_ratio(mut self, ratio: f64) -> Self {
        self.extraction_ratio = ratio;
        self
    }

    /// Builder method: set base form mode
    pub fn with_base_form(mut self, mode: BaseFormMode) -> Self {
        self.base_form = mode;
        self
    }

    /// Builder method: set stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords(mut self, words: &[&str]) -> Self {
        self.stopwords.extend(words.iter().map(|w| w.to_string()));
        self
    }

    /// Builder method: set accepted POS tags for keywords
    pub fn with_include_pos(mut self, tags: Vec<PosTag>) -> Self {
        self.include_pos = tags;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cfg = TextRankConfig::default();
        assert!((cfg.damping - 0.85).abs() < 1e-12);
        assert!((cfg.convergence_threshold - 0.0001).abs() < 1e-12);
        assert_eq!(cfg.max_iterations, None);
        assert_eq!(cfg.cooccurrence_threshold, 2);
        assert_eq!(cfg.rank_threshold, 15);
        assert!((cfg.extraction_ratio - 0.33).abs() < 1e-12);
        assert_eq!(cfg.base_form, BaseFormMode::Lemma);
        assert_eq!(cfg.include_pos, vec![PosTag::Noun, PosTag::Adjective]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(TextRankConfig::default().with_damping(1.0).validate().is_err());
        assert!(TextRankConfig::default().with_damping(0.0).validate().is_err());
        assert!(TextRankConfig::default().with_damping(f64::NAN).validate().is_err());
        assert!(TextRankConfig::default()
            .with_convergence_threshold(-0.1)
            .validate()
            .is_err());
        assert!(TextRankConfig::default()
            .with_cooccurrence_threshold(0)
            .validate()
            .is_err());
        assert!(TextRankConfig::default()
            .with_extraction_ratio(1.5)
            .validate()
            .is_err());
        assert!(TextRankConfig::default().with_max_iterations(0).validate().is_err());

        // Zero threshold and zero keywords are legal.
        assert!(TextRankConfig::default()
            .with_convergence_threshold(0.0)
            .with_rank_threshold(0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_iteration_bound_defaults_to_node_count() {
        let cfg = RankConfig::default();
        assert_eq!(cfg.iteration_bound(7), 7);
        assert_eq!(cfg.with_max_iterations(3).iteration_bound(7), 3);
    }

    #[test]
    fn test_config_from_json_partial() {
        let cfg = TextRankConfig::from_json(r#"{ "rank_threshold": 5, "base_form": "stem" }"#)
            .unwrap();
        assert_eq!(cfg.rank_threshold, 5);
        assert_eq!(cfg.base_form, BaseFormMode::Stem);
        assert_eq!(cfg.cooccurrence_threshold, 2);
    }

    #[test]
    fn test_config_from_json_rejects_bad_values() {
        let err = TextRankConfig::from_json(r#"{ "damping": 2.0 }"#).unwrap_err();
        assert!(matches!(err, TextRankError::InvalidConfig(_)));

        let err = TextRankConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, TextRankError::Json(_)));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let cfg = TextRankConfig::default()
            .with_language("de")
            .with_stopwords(&["etwa"]);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: TextRankConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_pos_from_penn() {
        assert_eq!(PosTag::from_penn("NN"), PosTag::Noun);
        assert_eq!(PosTag::from_penn("NNS"), PosTag::Noun);
        assert_eq!(PosTag::from_penn("NNP"), PosTag::ProperNoun);
        assert_eq!(PosTag::from_penn("JJR"), PosTag::Adjective);
        assert_eq!(PosTag::from_penn("VBD"), PosTag::Verb);
        assert_eq!(PosTag::from_penn("RB"), PosTag::Adverb);
        assert_eq!(PosTag::from_penn("."), PosTag::Punctuation);
        assert_eq!(PosTag::from_penn("FW"), PosTag::Other);
    }

    #[test]
    fn test_pos_from_universal() {
        assert_eq!(PosTag::from_universal("noun"), PosTag::Noun);
        assert_eq!(PosTag::from_universal("ADJ"), PosTag::Adjective);
        assert_eq!(PosTag::from_universal("AUX"), PosTag::Verb);
        assert_eq!(PosTag::from_universal("X"), PosTag::Other);
    }
}
