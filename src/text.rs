// src/text.rs
//! Text primitives shared by the classifier: normalizer, tokenizer, soft stemmer.
//!
//! Normalized text contains only `[a-z0-9]` and single spaces, with no leading or
//! trailing whitespace. Lexicon entries are written in the same alphabet, so phrase
//! matching downstream is a plain substring test.

use unicode_normalization::UnicodeNormalization;

/// Lowercase → NFD → drop combining marks → non-`[a-z0-9]` to space → collapse → trim.
///
/// ```
/// use review_problem_classifier::text::normalize;
/// assert_eq!(normalize("  Perché  NON funziona?!"), "perche non funziona");
/// ```
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut last_space = true; // swallows leading whitespace
    for ch in lowered.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
            last_space = false;
        } else if !last_space {
            out.push(' ');
            last_space = true;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Combining Diacritical Marks block (U+0300..U+036F).
#[inline]
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Split normalized text into non-empty word tokens, left to right.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> + '_ {
    normalized.split(' ').filter(|t| !t.is_empty())
}

/// Strip the first suffix from `suffixes` that `word` ends with, keeping at least
/// three characters of stem. Returns the word unchanged when nothing applies.
pub fn soft_stem<'a, S: AsRef<str>>(word: &'a str, suffixes: &[S]) -> &'a str {
    let len = word.chars().count();
    for suf in suffixes {
        let suf = suf.as_ref();
        if suf.is_empty() || !word.ends_with(suf) {
            continue;
        }
        if len - suf.chars().count() >= 3 {
            return &word[..word.len() - suf.len()];
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    const IT_SUFFIXES: &[&str] = &[
        "azione", "azioni", "mente", "abile", "ibile", "ando", "endo", "ato", "ata", "ati",
        "ate", "oso", "osa", "osi", "ose", "are", "ere", "ire", "ico", "ica", "ici", "iche",
        "ale", "ali", "ivo", "iva", "ivi", "ive",
    ];

    #[test]
    fn normalize_strips_accents_and_punctuation() {
        assert_eq!(normalize("Perché l'app è così LENTA???"), "perche l app e cosi lenta");
        assert_eq!(normalize("Funzionalità\t\n  mancante"), "funzionalita mancante");
    }

    #[test]
    fn normalize_empty_and_symbol_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!! ??? ★★★"), "");
    }

    #[test]
    fn normalize_drops_non_latin_letters() {
        // No decomposition to ASCII exists for these, so they become separators.
        assert_eq!(normalize("ok привет 42"), "ok 42");
        assert_eq!(normalize("straße"), "stra e");
    }

    #[test]
    fn tokenizer_is_restartable() {
        let text = normalize("Si blocca, sempre!");
        let first: Vec<&str> = tokenize(&text).collect();
        let second: Vec<&str> = tokenize(&text).collect();
        assert_eq!(first, vec!["si", "blocca", "sempre"]);
        assert_eq!(first, second);
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn stem_uses_first_matching_suffix() {
        // "azione" comes before "ale"/"ire"; first match wins.
        assert_eq!(soft_stem("registrazione", IT_SUFFIXES), "registr");
        assert_eq!(soft_stem("bloccato", IT_SUFFIXES), "blocc");
        assert_eq!(soft_stem("velocemente", IT_SUFFIXES), "veloce");
        // "ando" is listed before "are"
        assert_eq!(soft_stem("navigando", IT_SUFFIXES), "navig");
    }

    #[test]
    fn stem_keeps_minimum_length() {
        // "ato" would leave "g" → unchanged.
        assert_eq!(soft_stem("gato", IT_SUFFIXES), "gato");
        // "dato" leaves "d"; no later suffix applies either.
        assert_eq!(soft_stem("dato", IT_SUFFIXES), "dato");
        // exactly three characters left is fine
        assert_eq!(soft_stem("rotto", &["to"]), "rot");
        assert_eq!(soft_stem("bug", IT_SUFFIXES), "bug");
    }

    #[test]
    fn stem_order_changes_result() {
        assert_eq!(soft_stem("facile", &["ile", "le"]), "fac");
        assert_eq!(soft_stem("facile", &["le", "ile"]), "faci");
    }
}
