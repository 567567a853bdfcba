// src/nlp/mod.rs
// Text normalization applied before classification: lower-case, strip
// punctuation, drop standalone numbers, remove Portuguese stop words.
// Order matters: punctuation stripping can create new standalone number
// tokens, so it runs before number removal.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "o", "e", "é", "de", "da", "do", "em", "um", "uma", "os", "as", "dos", "das", "para",
        "com", "por", "ao", "aos", "à", "às", "no", "na", "nos", "nas", "se", "que", "ou", "mais",
        "muito", "já", "também", "só", "pelo", "pela", "até", "isso", "esse", "essa", "este",
        "esta", "eu", "tu", "ele", "ela", "nós", "vós", "eles", "elas", "meu", "minha", "seu",
        "sua", "nosso", "nossa", "sem", "sob", "sobre", "então",
    ]
    .into_iter()
    .collect()
});

/// Normalize email text for classification. Pure and total: empty input
/// yields empty output.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_punct = NON_WORD_RE.replace_all(&lowered, " ");
    let no_numbers = NUMBER_RE.replace_all(&no_punct, "");

    no_numbers
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}
