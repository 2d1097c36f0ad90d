use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{M}\p{N}]+").expect("token pattern is valid"));

/// Splits text into lowercase tokens. Combining tone marks stay attached to
/// their base letter so `akwà` and `akwa` remain distinct tokens.
pub fn tokenize_text(text: &str) -> HashSet<String> {
    TOKEN
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn tokenize_query(query: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    TOKEN
        .find_iter(&query.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
