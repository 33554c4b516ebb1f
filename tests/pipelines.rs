use textrank_extract::nlp::{clean_text, WhitespaceSegmenter};
use textrank_extract::pipeline::observer::STAGE_GRAPH;
use textrank_extract::{
    BaseFormReducer, KeywordExtractor, LexiconTagger, Linguistics, PosTag, PosTagger,
    SentenceExtractor, StageTimingObserver, StopwordFilter, SuffixReducer, TextRankConfig,
    TextRankError, UnicodeSegmenter,
};

const ARTICLE: &str = "Compilers translate source programs into machine code. \
    A modern compiler performs type checking and optimization. \
    Optimization passes rewrite programs to run faster. \
    Type checking rejects programs with inconsistent types. \
    The weather in the mountains was pleasant last week.";

fn stub_linguistics() -> Linguistics<UnicodeSegmenter, LexiconTagger, SuffixReducer, StopwordFilter>
{
    let tagger = LexiconTagger::new(PosTag::Verb)
        .with_entry("cats", PosTag::Noun)
        .with_entry("mice", PosTag::Noun)
        .with_entry("fast", PosTag::Adverb);
    Linguistics::new(UnicodeSegmenter, tagger, SuffixReducer, StopwordFilter::empty())
}

#[test]
fn cats_chase_mice_builds_one_edge() {
    let config = TextRankConfig::default().with_cooccurrence_threshold(2);
    let extractor = KeywordExtractor::new(config, stub_linguistics()).unwrap();
    let mut observer = StageTimingObserver::new();

    let info = extractor
        .extract_with_info("Cats chase mice. Mice run fast.", &mut observer)
        .unwrap();

    let graph = observer.report(STAGE_GRAPH).unwrap();
    assert_eq!(graph.nodes(), Some(2));
    assert_eq!(graph.edges(), Some(1));

    let mut bases: Vec<&str> = info.keywords.iter().map(|k| k.base.as_str()).collect();
    bases.sort_unstable();
    assert_eq!(bases, vec!["cat", "mice"]);
}

#[test]
fn default_collaborators_keep_nouns_and_adjectives() {
    let extractor = KeywordExtractor::from_config(TextRankConfig::default()).unwrap();
    let mut observer = StageTimingObserver::new();

    let info = extractor
        .extract_with_info("Cats chase mice. Mice run fast.", &mut observer)
        .unwrap();

    let graph = observer.report(STAGE_GRAPH).unwrap();
    assert_eq!(graph.nodes(), Some(2));
    assert_eq!(graph.edges(), Some(1));

    let mut bases: Vec<&str> = info.keywords.iter().map(|k| k.base.as_str()).collect();
    bases.sort_unstable();
    assert_eq!(bases, vec!["cat", "mice"]);

    let keywords = textrank_extract::extract_keywords(
        "The dog quickly jumped over the lazy fox. Dogs eat food. \
         Good compilers don't guess. Compilers check types.",
        20,
    )
    .unwrap();
    for verb in ["eat", "jumped", "guess", "check", "quickly"] {
        assert!(!keywords.iter().any(|k| k == verb), "{verb} kept in {keywords:?}");
    }
    assert!(keywords.iter().any(|k| k == "lazy"));
}

#[test]
fn rank_threshold_larger_than_keywords_is_not_padded() {
    let config = TextRankConfig::default().with_rank_threshold(50);
    let extractor = KeywordExtractor::new(config, stub_linguistics()).unwrap();

    let keywords = extractor.extract("Cats chase mice. Mice run fast.").unwrap();
    assert_eq!(keywords.len(), 2);
}

#[test]
fn keywords_come_from_input_tokens() {
    let extractor = KeywordExtractor::from_config(TextRankConfig::default()).unwrap();
    let keywords = extractor.extract(ARTICLE).unwrap();
    assert!(!keywords.is_empty());

    let cleaned = clean_text(ARTICLE);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    for keyword in &keywords {
        assert!(
            tokens.contains(&keyword.to_lowercase().as_str()),
            "{keyword} is not an input token"
        );
    }
}

#[test]
fn keyword_extraction_is_deterministic() {
    let extractor = KeywordExtractor::from_config(TextRankConfig::default()).unwrap();
    let first = extractor.extract_with_info(ARTICLE, &mut textrank_extract::NoopObserver);
    let second = extractor.extract_with_info(ARTICLE, &mut textrank_extract::NoopObserver);
    assert_eq!(first.unwrap(), second.unwrap());
}

#[test]
fn ratio_over_three_sentences_floors_to_zero() {
    let extractor =
        SentenceExtractor::from_config(TextRankConfig::default().with_extraction_ratio(0.33))
            .unwrap();
    let summary = extractor
        .summarize("Cats chase mice. Mice run fast. Dogs chase cats.")
        .unwrap();
    assert_eq!(summary, "");
}

#[test]
fn summary_skips_unrelated_sentence() {
    let extractor =
        SentenceExtractor::from_config(TextRankConfig::default().with_extraction_ratio(0.8))
            .unwrap();
    let summary = extractor
        .summarize_with_info(ARTICLE, &mut textrank_extract::NoopObserver)
        .unwrap();

    assert_eq!(summary.sentences.len(), 4);
    assert!(summary.sentences.iter().all(|s| s.ordinal != 4));
    assert!(summary
        .sentences
        .windows(2)
        .all(|w| w[0].ordinal < w[1].ordinal));
}

#[test]
fn config_loaded_from_json_drives_extractors() {
    let config = TextRankConfig::from_json(
        r#"{ "rank_threshold": 3, "extraction_ratio": 0.4, "base_form": "stem" }"#,
    )
    .unwrap();

    let keywords = KeywordExtractor::from_config(config.clone())
        .unwrap()
        .extract(ARTICLE)
        .unwrap();
    assert!(keywords.len() <= 3);

    let summary = SentenceExtractor::from_config(config)
        .unwrap()
        .summarize_with_info(ARTICLE, &mut textrank_extract::NoopObserver)
        .unwrap();
    assert_eq!(summary.sentences.len(), 2);
}

#[test]
fn invalid_config_is_rejected_before_work() {
    let config = TextRankConfig::default().with_cooccurrence_threshold(0);
    let err = KeywordExtractor::from_config(config).unwrap_err();
    assert!(matches!(err, TextRankError::InvalidConfig(_)));

    let err = SentenceExtractor::from_config(TextRankConfig::default().with_damping(0.0))
        .unwrap_err();
    assert!(err.is_config());
}

struct FailingTagger;

impl PosTagger for FailingTagger {
    fn tag_pos(&self, _tokens: &[String]) -> textrank_extract::Result<Vec<(String, PosTag)>> {
        Err(TextRankError::collaborator("tag_pos", "tagger model not loaded"))
    }
}

struct FailingReducer;

impl BaseFormReducer for FailingReducer {
    fn reduce_to_base(
        &self,
        _token: &str,
        _mode: textrank_extract::BaseFormMode,
    ) -> textrank_extract::Result<String> {
        Err(TextRankError::collaborator("reduce_to_base", "no lemma table"))
    }
}

#[test]
fn collaborator_failures_propagate_unchanged() {
    let linguistics = stub_linguistics().with_tagger(FailingTagger);
    let extractor = KeywordExtractor::new(TextRankConfig::default(), linguistics).unwrap();

    match extractor.extract("Cats chase mice.") {
        Err(TextRankError::Collaborator { stage, source }) => {
            assert_eq!(stage, "tag_pos");
            assert_eq!(source.to_string(), "tagger model not loaded");
        }
        other => panic!("expected collaborator error, got {other:?}"),
    }

    let linguistics = stub_linguistics().with_reducer(FailingReducer);
    let extractor = SentenceExtractor::new(TextRankConfig::default(), linguistics).unwrap();
    let err = extractor.summarize("Cats chase mice.").unwrap_err();
    assert!(matches!(err, TextRankError::Collaborator { stage: "reduce_to_base", .. }));
}

#[test]
fn whitespace_segmenter_with_custom_stopwords() {
    let linguistics = Linguistics::new(
        WhitespaceSegmenter::default(),
        LexiconTagger::new(PosTag::Noun),
        SuffixReducer,
        StopwordFilter::from_list(&["the", "a"]),
    );
    let extractor = KeywordExtractor::new(TextRankConfig::default(), linguistics).unwrap();

    let keywords = extractor.extract("the graph ranks a node. the node links").unwrap();
    assert!(!keywords.iter().any(|k| k == "the" || k == "a"));
    assert_eq!(keywords[0], "node");
}

#[test]
fn batch_results_follow_input_order() {
    let extractor = KeywordExtractor::new(TextRankConfig::default(), stub_linguistics()).unwrap();
    let documents = vec!["Cats chase mice.", "Run fast.", "Mice run. Cats run."];

    let results = extractor.extract_batch(&documents);
    assert_eq!(results.len(), 3);
    assert_eq!(results[1].as_ref().unwrap(), &Vec::<String>::new());
    for (document, result) in documents.iter().zip(&results) {
        assert_eq!(result.as_ref().unwrap(), &extractor.extract(document).unwrap());
    }
}
