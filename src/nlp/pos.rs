//! Part-of-speech tagging
//!
//! Two self-contained taggers: [`LexiconTagger`] looks words up in an explicit
//! table, [`SuffixTagger`] knows English function words and common verbs and
//! guesses the rest from word shape. Callers with a real
//! statistical tagger implement [`PosTagger`] for it instead.

use super::PosTagger;
use crate::errors::Result;
use crate::types::PosTag;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Tags words from a fixed word → tag table
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    entries: FxHashMap<String, PosTag>,
    fallback: PosTag,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new(PosTag::Other)
    }
}

impl LexiconTagger {
    /// Create an empty lexicon tagging unknown words with `fallback`
    pub fn new(fallback: PosTag) -> Self {
        Self {
            entries: FxHashMap::default(),
            fallback,
        }
    }

    /// Build a lexicon from `(word, tag)` pairs
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, PosTag)>,
        fallback: PosTag,
    ) -> Self {
        let mut tagger = Self::new(fallback);
        for (word, tag) in entries {
            tagger.insert(word, tag);
        }
        tagger
    }

    /// Add an entry, builder style
    pub fn with_entry(mut self, word: &str, tag: PosTag) -> Self {
        self.insert(word, tag);
        self
    }

    /// Add or replace an entry
    pub fn insert(&mut self, word: &str, tag: PosTag) {
        self.entries.insert(word.to_lowercase(), tag);
    }

    /// Look a word up without applying the fallback
    pub fn lookup(&self, word: &str) -> Option<PosTag> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PosTagger for LexiconTagger {
    fn tag_pos(&self, tokens: &[String]) -> Result<Vec<(String, PosTag)>> {
        Ok(tokens
            .iter()
            .map(|t| (t.clone(), self.lookup(t).unwrap_or(self.fallback)))
            .collect())
    }
}

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ical", "ish", "ary", "ant", "ent",
];

/// Shortest stem a suffix rule may leave behind
const MIN_STEM_LEN: usize = 3;

/// Auxiliaries and modals
const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "done", "can", "could", "will", "would", "shall", "should", "may", "might",
    "must",
];

/// Common verbs; third person forms are derived
const VERBS: &[&str] = &[
    "accept", "add", "allow", "appear", "apply", "ask", "become", "begin", "believe",
    "bring", "build", "buy", "call", "carry", "catch", "cause", "chase", "check", "choose",
    "come", "consider", "contain", "continue", "create", "decide", "describe", "die",
    "draw", "drink", "drive", "eat", "explain", "fall", "feel", "find", "fly", "follow",
    "forget", "get", "give", "go", "grow", "guess", "happen", "hear", "hide", "hit",
    "hold", "include", "jump", "keep", "kill", "know", "lead", "learn", "leave", "let",
    "like", "listen", "live", "look", "lose", "make", "mean", "meet", "move", "need",
    "open", "pay", "perform", "prefer", "prove", "provide", "pull", "push", "put",
    "reach", "read", "receive", "reject", "remain", "remember", "require", "rewrite",
    "run", "say", "see", "seem", "sell", "send", "serve", "sing", "sit", "sleep", "speak",
    "spend", "stand", "start", "stay", "stop", "suggest", "take", "talk", "teach", "tell",
    "tend", "think", "throw", "translate", "try", "understand", "wait", "want", "win",
    "write",
];

/// Irregular past forms and participles
const IRREGULAR_VERBS: &[&str] = &[
    "ate", "eaten", "became", "began", "begun", "bought", "brought", "built", "came",
    "caught", "chose", "chosen", "drank", "drawn", "drew", "driven", "drove", "drunk",
    "fell", "fallen", "felt", "flew", "flown", "forgot", "forgotten", "found", "gave",
    "given", "gone", "got", "gotten", "grew", "grown", "heard", "held", "hid", "hidden",
    "kept", "knew", "known", "led", "left", "lost", "made", "meant", "met", "paid", "ran",
    "said", "sang", "sat", "saw", "seen", "sent", "slept", "sold", "spent", "spoke",
    "spoken", "stood", "sung", "taken", "taught", "thought", "threw", "thrown", "told",
    "took", "understood", "went", "won", "wrote", "written",
];

const ADVERBS: &[&str] = &[
    "again", "almost", "already", "also", "always", "away", "even", "ever", "fast",
    "here", "just", "maybe", "never", "not", "now", "often", "perhaps", "quite", "rather",
    "sometimes", "soon", "still", "then", "there", "together", "too", "usually", "very",
    "well", "yet",
];

const ADJECTIVES: &[&str] = &[
    "bad", "big", "early", "easy", "good", "great", "hard", "high", "large", "late", "lazy",
    "long", "low", "new", "old", "quick", "short", "slow", "small", "young",
];

const DETERMINERS: &[&str] = &[
    "a", "all", "an", "any", "both", "each", "either", "every", "few", "many", "much",
    "neither", "no", "some", "that", "the", "these", "this", "those",
];

const PRONOUNS: &[&str] = &[
    "he", "her", "him", "his", "i", "it", "its", "me", "mine", "my", "our", "she", "their",
    "them", "they", "us", "we", "what", "which", "who", "whom", "whose", "you", "your",
    "yours",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "below", "between", "by", "during", "for", "from", "in", "into", "of", "on",
    "onto", "over", "through", "to", "under", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "although", "and", "because", "but", "if", "nor", "or", "so", "though", "unless",
    "whereas", "while",
];

/// Third person singular of a regular verb
fn third_person(verb: &str) -> String {
    let consonant_y = verb.len() > 1
        && verb.ends_with('y')
        && !verb[..verb.len() - 1].ends_with(['a', 'e', 'i', 'o', 'u']);

    if consonant_y {
        format!("{}ies", &verb[..verb.len() - 1])
    } else if ["s", "x", "z", "ch", "sh", "o"].iter().any(|s| verb.ends_with(s)) {
        format!("{verb}es")
    } else {
        format!("{verb}s")
    }
}

/// Closed-class words and common verbs of English
fn english_lexicon() -> &'static LexiconTagger {
    static LEXICON: OnceLock<LexiconTagger> = OnceLock::new();
    LEXICON.get_or_init(|| {
        let mut lexicon = LexiconTagger::new(PosTag::Other);
        for verb in VERBS {
            lexicon.insert(verb, PosTag::Verb);
            lexicon.insert(&third_person(verb), PosTag::Verb);
        }

        let closed = [
            (AUXILIARIES, PosTag::Verb),
            (IRREGULAR_VERBS, PosTag::Verb),
            (ADVERBS, PosTag::Adverb),
            (ADJECTIVES, PosTag::Adjective),
            (DETERMINERS, PosTag::Determiner),
            (PRONOUNS, PosTag::Pronoun),
            (PREPOSITIONS, PosTag::Preposition),
            (CONJUNCTIONS, PosTag::Conjunction),
        ];
        for (words, tag) in closed {
            for word in words {
                lexicon.insert(word, tag);
            }
        }
        lexicon
    })
}

/// Shape-based tagger for English
///
/// Lookup order: caller lexicon, number and punctuation shapes, a built-in
/// table of English function words and common verbs, capitalization, then
/// suffix rules. Words not matched by any rule are tagged as nouns.
#[derive(Debug, Clone, Default)]
pub struct SuffixTagger {
    overrides: LexiconTagger,
}

impl SuffixTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `lexicon` entries before any built-in rule
    pub fn with_lexicon(mut self, lexicon: LexiconTagger) -> Self {
        self.overrides = lexicon;
        self
    }

    /// Tag a single word
    pub fn tag_word(&self, word: &str) -> PosTag {
        if let Some(tag) = self.overrides.lookup(word) {
            return tag;
        }
        guess(word)
    }
}

/// True when `word` ends in `suffix` and keeps a usable stem
fn has_suffix(word: &str, suffix: &str) -> bool {
    word.strip_suffix(suffix)
        .is_some_and(|stem| stem.chars().count() >= MIN_STEM_LEN)
}

fn guess(word: &str) -> PosTag {
    if word.is_empty() {
        return PosTag::Other;
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return PosTag::Numeral;
    }
    if word.chars().all(|c| c.is_ascii_punctuation()) {
        return PosTag::Punctuation;
    }
    if let Some(tag) = english_lexicon().lookup(word) {
        return tag;
    }
    if word.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::ProperNoun;
    }

    let lower = word.to_lowercase();
    if has_suffix(&lower, "ly") {
        return PosTag::Adverb;
    }
    if ["ing", "ed", "ize"].iter().any(|s| has_suffix(&lower, s)) {
        return PosTag::Verb;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| has_suffix(&lower, s)) {
        return PosTag::Adjective;
    }
    PosTag::Noun
}

impl PosTagger for SuffixTagger {
    fn tag_pos(&self, tokens: &[String]) -> Result<Vec<(String, PosTag)>> {
        Ok(tokens
            .iter()
            .map(|t| (t.clone(), self.tag_word(t)))
            .collect())
    }
}
