//! Base-form reduction
//!
//! [`SuffixReducer`] is a rule-based English reducer. Lemma mode only undoes
//! regular plural inflection, so irregular forms ("mice") are left alone.
//! Stem mode additionally strips common derivational and inflectional
//! suffixes; stems need not be dictionary words.

use super::BaseFormReducer;
use crate::errors::Result;
use crate::types::BaseFormMode;

/// Shortest stem a suffix may be stripped down to
const MIN_STEM_LEN: usize = 3;

/// `(suffix, replacement)` pairs tried in order by the stemmer
const STEM_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("ization", "ize"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("iveness", "ive"),
    ("ingly", ""),
    ("edly", ""),
    ("ness", ""),
    ("ment", ""),
    ("ing", ""),
    ("ly", ""),
    ("ed", ""),
];

/// Rule-based plural lemmatizer and light suffix stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixReducer;

impl SuffixReducer {
    pub fn new() -> Self {
        Self
    }

    /// Undo regular English plural inflection
    pub fn lemmatize(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.chars().count() <= 3 {
            return word;
        }
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word;
        }
        if let Some(stem) = word.strip_suffix("ies") {
            if stem.chars().count() >= 2 {
                return format!("{stem}y");
            }
            return word;
        }
        for sibilant in ["sses", "xes", "zes", "ches", "shes"] {
            if word.ends_with(sibilant) {
                return word[..word.len() - 2].to_string();
            }
        }
        match word.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None => word,
        }
    }

    /// Lemmatize, then strip the first matching suffix rule
    pub fn stem(&self, word: &str) -> String {
        let lemma = self.lemmatize(word);

        for (suffix, replacement) in STEM_RULES {
            let Some(stem) = lemma.strip_suffix(suffix) else {
                continue;
            };
            if stem.chars().count() < MIN_STEM_LEN {
                continue;
            }
            if replacement.is_empty() && matches!(*suffix, "ing" | "ed" | "ingly" | "edly") {
                return undouble(stem).to_string();
            }
            return format!("{stem}{replacement}");
        }

        if let Some(stem) = lemma.strip_suffix("ion") {
            if stem.chars().count() >= MIN_STEM_LEN && (stem.ends_with('t') || stem.ends_with('s'))
            {
                return stem.to_string();
            }
        }

        lemma
    }
}

/// Collapse a trailing doubled consonant left by suffix stripping
/// ("runn" -> "run"). Doubled l, s and z are kept ("fall", "pass").
fn undouble(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 2 && bytes[n - 1] == bytes[n - 2] {
        let c = bytes[n - 1];
        if c.is_ascii_alphabetic() && !b"aeiouylsz".contains(&c) {
            return &stem[..n - 1];
        }
    }
    stem
}

impl BaseFormReducer for SuffixReducer {
    fn reduce_to_base(&self, token: &str, mode: BaseFormMode) -> Result<String> {
        Ok(match mode {
            BaseFormMode::Lemma => self.lemmatize(token),
            BaseFormMode::Stem => self.stem(token),
        })
    }
}
