//! Sentence segmentation and word tokenization
//!
//! The default [`UnicodeSegmenter`] follows the Unicode text segmentation
//! rules (UAX #29) for both sentence and word boundaries.

use super::Segmenter;
use crate::errors::Result;
use unicode_segmentation::UnicodeSegmentation;

/// Segmenter backed by `unicode-segmentation`
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment_sentences(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.unicode_words().map(str::to_string).collect())
    }
}

/// Segmenter that splits sentences on a fixed set of terminators and words
/// on whitespace. Useful for pre-tokenized or line-oriented input.
#[derive(Debug, Clone)]
pub struct WhitespaceSegmenter {
    terminators: Vec<char>,
}

impl Default for WhitespaceSegmenter {
    fn default() -> Self {
        Self {
            terminators: vec!['.', '!', '?', '\n'],
        }
    }
}

impl WhitespaceSegmenter {
    /// Create a segmenter with custom sentence terminators
    pub fn with_terminators(terminators: &[char]) -> Self {
        Self {
            terminators: terminators.to_vec(),
        }
    }
}

impl Segmenter for WhitespaceSegmenter {
    fn segment_sentences(&self, text: &str) -> Result<Vec<String>> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for (i, c) in text.char_indices() {
            if self.terminators.contains(&c) {
                let end = i + c.len_utf8();
                sentences.push(&text[start..end]);
                start = end;
            }
        }
        sentences.push(&text[start..]);

        Ok(sentences
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}
