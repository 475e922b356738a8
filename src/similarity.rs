// src/similarity.rs
//! Jaro-Winkler string similarity and the keyword fuzzy-match policy.
//!
//! Self-contained, zero-deps. Operates on `char`s; inputs are expected to be short
//! (a single token and a single lexicon keyword).

/// Similarity at or above this counts as a fuzzy match.
pub const FUZZY_THRESHOLD: f64 = 0.85;

/// Winkler prefix scaling factor per shared leading character.
const PREFIX_SCALE: f64 = 0.1;
/// Shared prefix is capped at this many characters.
const MAX_PREFIX: usize = 4;

/// Jaro similarity in [0.0, 1.0].
pub fn jaro(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    jaro_chars(&a, &b)
}

fn jaro_chars(a: &[char], b: &[char]) -> f64 {
    let (len_a, len_b) = (a.len(), b.len());
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let window = (len_a.max(len_b) / 2).saturating_sub(1);
    let mut matched_a = vec![false; len_a];
    let mut matched_b = vec![false; len_b];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(len_b);
        for j in lo..hi {
            if matched_b[j] || *ca != b[j] {
                continue;
            }
            matched_a[i] = true;
            matched_b[j] = true;
            matches += 1;
            break;
        }
    }
    if matches == 0 {
        return 0.0;
    }

    // Count matched characters that appear out of order.
    let mut transpositions = 0usize;
    let mut k = 0usize;
    for (i, ca) in a.iter().enumerate() {
        if !matched_a[i] {
            continue;
        }
        while !matched_b[k] {
            k += 1;
        }
        if *ca != b[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = transpositions as f64;
    (m / len_a as f64 + m / len_b as f64 + (m - t / 2.0) / m) / 3.0
}

/// Jaro-Winkler similarity: Jaro plus `0.1 * p * (1 - jaro)` where `p` is the
/// length of the common prefix, up to 4 characters.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let j = jaro_chars(&a, &b);
    let prefix = a
        .iter()
        .zip(b.iter())
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();
    j + prefix as f64 * PREFIX_SCALE * (1.0 - j)
}

/// Keyword match policy, in order: equality, containment either way, then
/// Jaro-Winkler ≥ [`FUZZY_THRESHOLD`].
pub fn fuzzy_match(token: &str, keyword: &str) -> bool {
    if token == keyword {
        return true;
    }
    if token.contains(keyword) || keyword.contains(token) {
        return true;
    }
    jaro_winkler(token, keyword) >= FUZZY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn textbook_values() {
        assert!(close(jaro("martha", "marhta"), 0.944_444_444_444_444_5));
        assert!(close(jaro_winkler("martha", "marhta"), 0.961_111_111_111_111_1));
        assert!(close(jaro_winkler("dixon", "dicksonx"), 0.813_333_333_333_333_2));
        assert!(close(jaro_winkler("dwayne", "duane"), 0.84));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(jaro_winkler("", ""), 1.0);
        assert_eq!(jaro_winkler("abc", ""), 0.0);
        assert_eq!(jaro_winkler("", "abc"), 0.0);
        assert_eq!(jaro_winkler("abc", "xyz"), 0.0);
        assert_eq!(jaro_winkler("a", "b"), 0.0);
        assert_eq!(jaro_winkler("bug", "bug"), 1.0);
    }

    #[test]
    fn prefix_bonus_is_capped_at_four() {
        // Same Jaro for both pairs; only the shared-prefix length differs (4 vs 5 chars).
        let j = jaro("abcdexyz", "abcdeqrs");
        let jw = jaro_winkler("abcdexyz", "abcdeqrs");
        assert!(close(jw, j + 4.0 * 0.1 * (1.0 - j)));
    }

    #[test]
    fn stays_in_unit_interval() {
        let words = ["crash", "crashato", "blocc", "lag", "spid", "x", "aaaaaaaaaa", "perche"];
        for a in words {
            for b in words {
                let s = jaro_winkler(a, b);
                assert!((0.0..=1.0).contains(&s), "{a} vs {b} -> {s}");
            }
        }
    }

    #[test]
    fn fuzzy_threshold_boundary() {
        // Scores exactly 0.85 → match.
        assert!(close(jaro_winkler("si", "spid"), 0.85));
        assert!(fuzzy_match("si", "spid"));
        // Scores 0.84 → no match.
        assert!(close(jaro_winkler("dwayne", "duane"), 0.84));
        assert!(!fuzzy_match("dwayne", "duane"));
        // Just below the cutoff (≈0.848).
        assert!(jaro_winkler("spite", "spid") < FUZZY_THRESHOLD);
        assert!(!fuzzy_match("spite", "spid"));
    }

    #[test]
    fn containment_short_circuits() {
        assert!(fuzzy_match("crashato", "crash"));
        assert!(fuzzy_match("crash", "crashato"));
        assert!(fuzzy_match("bug", "bug"));
        assert!(fuzzy_match("crahs", "crash")); // transposition, ≈0.953
    }
}
