//! Confidence is evidence density: the same evidence diluted in more words
//! must never raise confidence. Filler is built from a seeded RNG.

use rand::{rngs::StdRng, Rng, SeedableRng};
use review_problem_classifier::{Category, Classifier};

const TEST_TOML: &str = r#"
suffixes = ["ing", "ed", "s"]
negation_cues = ["not", "never"]

[categories.TECHNICAL_BUG]
keywords = ["crash"]

[categories.ONBOARDING]
keywords = ["signup"]

[categories.USABILITY]
keywords = ["confus"]

[categories.MISSING_FEATURE]
phrases = ["please add"]

[categories.SUPPORT]
keywords = ["support"]
"#;

// none of these match any entry above, alone or fuzzily
const FILLER: &[&str] = &[
    "weather", "yesterday", "morning", "purple", "garden", "window", "bicycle", "orange",
    "mountain", "sunday",
];

fn text_with_filler(rng: &mut StdRng, filler_words: usize) -> String {
    let mut words: Vec<&str> = (0..filler_words)
        .map(|_| FILLER[rng.random_range(0..FILLER.len())])
        .collect();
    let at = rng.random_range(0..=words.len());
    words.insert(at, "crash");
    words.join(" ")
}

#[test]
fn confidence_never_increases_with_filler() {
    let clf = Classifier::from_toml_str(TEST_TOML).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let mut prev = f64::INFINITY;
    for n in 0..60 {
        let text = text_with_filler(&mut rng, n);
        let r = clf.classify("", &text);
        assert_eq!(r.category_list(), vec![Category::TechnicalBug], "{text}");
        assert!(r.confidence <= prev, "n={n}: {} > {prev}", r.confidence);
        assert!((0.0..=1.0).contains(&r.confidence));
        prev = r.confidence;
    }
}

#[test]
fn confidence_values_follow_word_count() {
    let clf = Classifier::from_toml_str(TEST_TOML).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    // up to 10 words the denominator floors at 1
    let r = clf.classify("", &text_with_filler(&mut rng, 9));
    assert_eq!(r.confidence, 1.0);
    assert!(!r.needs_review);

    // 20 words → 1 / 2
    let r = clf.classify("", &text_with_filler(&mut rng, 19));
    assert!((r.confidence - 0.5).abs() < 1e-9);
    assert!(!r.needs_review);

    // 40 words → 0.25, below the review cutoff even though a category is selected
    let r = clf.classify("", &text_with_filler(&mut rng, 39));
    assert!((r.confidence - 0.25).abs() < 1e-9);
    assert!(r.has(Category::TechnicalBug));
    assert!(r.needs_review);
}
