//! Natural Language Processing components
//!
//! The pipelines depend on four linguistic collaborators, each behind a
//! trait so callers can plug in their own models:
//!
//! | Trait | Default |
//! |---|---|
//! | [`Segmenter`] | [`UnicodeSegmenter`] |
//! | [`PosTagger`] | [`SuffixTagger`] |
//! | [`BaseFormReducer`] | [`SuffixReducer`] |
//! | [`Stopwords`] | [`StopwordFilter`] |
//!
//! [`Linguistics`] bundles one of each and is handed to the extractors.
//! Collaborator failures are reported as
//! [`TextRankError::Collaborator`](crate::TextRankError::Collaborator) and
//! pass through the pipelines unchanged.

pub mod clean;
pub mod pos;
pub mod reduce;
pub mod stopwords;
pub mod tokenizer;

pub use clean::clean_text;
pub use pos::{LexiconTagger, SuffixTagger};
pub use reduce::SuffixReducer;
pub use stopwords::StopwordFilter;
pub use tokenizer::{UnicodeSegmenter, WhitespaceSegmenter};

use crate::errors::Result;
use crate::types::{BaseFormMode, PosTag, TextRankConfig};

/// Splits text into sentences and sentences into words
pub trait Segmenter {
    fn segment_sentences(&self, text: &str) -> Result<Vec<String>>;
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Assigns a part-of-speech tag to each token, preserving order
pub trait PosTagger {
    fn tag_pos(&self, tokens: &[String]) -> Result<Vec<(String, PosTag)>>;
}

/// Reduces a token to its lemma or stem
pub trait BaseFormReducer {
    fn reduce_to_base(&self, token: &str, mode: BaseFormMode) -> Result<String>;
}

/// Stopword membership for one language
pub trait Stopwords {
    fn is_stopword(&self, token: &str) -> bool;
}

/// The collaborators used by one extractor
#[derive(Debug, Clone, Default)]
pub struct Linguistics<
    S = UnicodeSegmenter,
    T = SuffixTagger,
    R = SuffixReducer,
    W = StopwordFilter,
> {
    pub segmenter: S,
    pub tagger: T,
    pub reducer: R,
    pub stopwords: W,
}

impl Linguistics {
    /// Default collaborators for `config.language` and its extra stopwords
    pub fn from_config(config: &TextRankConfig) -> Self {
        Self {
            segmenter: UnicodeSegmenter,
            tagger: SuffixTagger::new(),
            reducer: SuffixReducer::new(),
            stopwords: StopwordFilter::from_config(config),
        }
    }
}

impl<S, T, R, W> Linguistics<S, T, R, W> {
    pub fn new(segmenter: S, tagger: T, reducer: R, stopwords: W) -> Self {
        Self {
            segmenter,
            tagger,
            reducer,
            stopwords,
        }
    }

    pub fn with_segmenter<S2>(self, segmenter: S2) -> Linguistics<S2, T, R, W> {
        Linguistics {
            segmenter,
            tagger: self.tagger,
            reducer: self.reducer,
            stopwords: self.stopwords,
        }
    }

    pub fn with_tagger<T2>(self, tagger: T2) -> Linguistics<S, T2, R, W> {
        Linguistics {
            segmenter: self.segmenter,
            tagger,
            reducer: self.reducer,
            stopwords: self.stopwords,
        }
    }

    pub fn with_reducer<R2>(self, reducer: R2) -> Linguistics<S, T, R2, W> {
        Linguistics {
            segmenter: self.segmenter,
            tagger: self.tagger,
            reducer,
            stopwords: self.stopwords,
        }
    }

    pub fn with_stopwords<W2>(self, stopwords: W2) -> Linguistics<S, T, R, W2> {
        Linguistics {
            segmenter: self.segmenter,
            tagger: self.tagger,
            reducer: self.reducer,
            stopwords,
        }
    }
}

impl<S: Segmenter, T, R, W: Stopwords> Linguistics<S, T, R, W> {
    /// Clean a sentence, tokenize it and drop stopwords
    pub fn content_tokens(&self, sentence: &str) -> Result<Vec<String>> {
        let cleaned = clean_text(sentence);
        let tokens = self.segmenter.tokenize(&cleaned)?;
        Ok(tokens
            .into_iter()
            .filter(|t| !self.stopwords.is_stopword(t))
            .collect())
    }
}
