//! Action-text normalization and token-set similarity.

use rustc_hash::FxHashSet;

/// Portuguese stopwords removed before comparison: articles, contractions,
/// and the most common prepositions. Checked after accent folding, so the
/// list only needs ASCII forms ("à" folds to "a", "às" to "as").
pub const STOPWORDS: &[&str] = &[
    "a", "as", "o", "os", "um", "uma", "uns", "umas", "de", "do", "da", "dos", "das", "em", "no",
    "na", "nos", "nas", "para", "pra", "pro", "por", "ao", "aos", "e",
];

/// Lowercase, fold accents, strip punctuation, drop stopwords.
pub fn normalize_tokens(text: &str) -> Vec<String> {
    let folded: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    folded
        .split_whitespace()
        .filter(|token| !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Fold the Latin accented characters that occur in Portuguese text.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

/// Jaccard similarity between two token lists, compared as sets.
///
/// Reflexive and symmetric. Two empty token sets compare equal (1.0) so
/// that two all-stopword actions still cluster together.
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f64 {
    let set_a: FxHashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: FxHashSet<&str> = b.iter().map(String::as_str).collect();
    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    intersection as f64 / union as f64
}
