// tests/default_lexicon.rs
// Classification with the embedded Italian lexicon through the free functions.

use review_problem_classifier::{
    classify, classify_batch, classify_categories, default_classifier, Category, Lexicon,
    ReviewInput, Sentiment,
};

#[test]
fn crash_report_is_a_technical_bug() {
    let r = classify("Crash", "crasha sempre");
    assert_eq!(r.category_list(), vec![Category::TechnicalBug]);
    assert_eq!(r.sentiment, Sentiment::Negative);
    assert_eq!(r.confidence, 1.0);
    assert!(!r.needs_review);
}

#[test]
fn support_phrase_and_keyword() {
    let r = classify("", "assistenza clienti inesistente");
    assert_eq!(r.category_list(), vec![Category::Support]);
    assert_eq!(
        r.evidence[&Category::Support],
        vec!["assistenza clienti", "assistenza"]
    );
}

#[test]
fn negated_keyword_yields_nothing() {
    let r = classify("", "non bug");
    assert!(r.categories.is_empty());
    assert!(r.evidence.is_empty());
    assert_eq!(r.confidence, 0.0);
    assert!(r.needs_review);
}

#[test]
fn praise_after_a_fix_dampens_technical_bug() {
    let s = default_classifier().score(
        "",
        "bellissima, ottima, funziona perfettamente, crashato una volta",
    );
    assert_eq!(s.sentiment, Sentiment::Positive);
    // three keyword hits, halved
    assert_eq!(s.scores.get(Category::TechnicalBug), Some(1.5));
}

#[test]
fn empty_review() {
    let r = classify("", "");
    assert!(r.categories.is_empty());
    assert_eq!(r.confidence, 0.0);
    assert!(r.needs_review);
    assert_eq!(r.sentiment, Sentiment::Neutral);
}

#[test]
fn free_functions_agree() {
    let inputs = vec![
        ReviewInput::new("Crash", "crasha sempre"),
        ReviewInput::new("", "assistenza clienti inesistente"),
        ReviewInput::new("", ""),
    ];
    let batch = classify_batch(&inputs);
    assert_eq!(batch.len(), 3);
    for (i, r) in inputs.iter().zip(&batch) {
        assert_eq!(r, &classify(&i.title, &i.body));
        assert_eq!(r.category_list(), classify_categories(&i.title, &i.body));
    }
}

#[test]
fn default_classifier_uses_embedded_lexicon() {
    assert_eq!(default_classifier().lexicon(), Lexicon::embedded());
    assert_eq!(Lexicon::embedded().categories.len(), Category::ALL.len());
}
