use super::filters::{FilterSet, generate_filtering_params};
use super::types::SearchRequest;
use crate::error::{LookupError, LookupResult};
use regex::Regex;
use std::sync::LazyLock;

static QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)^(?:"(.*)"|'(.*)')$"#).expect("quote pattern is valid")
});

const INFINITIVE_PREFIX: &str = "to ";

/// Outcome of inspecting a [`SearchRequest`]: the term that will be matched
/// and ranked, plus everything needed to pick and shape a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub search_word: String,
    pub has_quotes: bool,
    pub strict: bool,
    pub is_using_main_key: bool,
    pub filters: FilterSet,
}

pub fn classify(request: &SearchRequest) -> LookupResult<Classification> {
    let (unquoted, has_quotes) = strip_quotes(request.raw_keyword.trim());
    let search_word = strip_prefix(unquoted.trim()).trim().to_string();

    if search_word.is_empty() {
        return Err(LookupError::MissingSearchTerm);
    }

    Ok(Classification {
        search_word,
        has_quotes,
        strict: request.strict,
        is_using_main_key: request.is_using_main_key,
        filters: generate_filtering_params(&request.word_fields),
    })
}

/// Returns the keyword without its wrapping quotes and whether it had any.
/// Only a matching pair counts: `"ulo'` is left as is.
pub fn strip_quotes(keyword: &str) -> (&str, bool) {
    match QUOTED.captures(keyword) {
        Some(caps) => {
            let inner = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            (inner, true)
        }
        None => (keyword, false),
    }
}

/// Drops a leading English infinitive marker, so `to eat` searches `eat`.
pub fn strip_prefix(keyword: &str) -> &str {
    match keyword.get(..INFINITIVE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(INFINITIVE_PREFIX) => {
            &keyword[INFINITIVE_PREFIX.len()..]
        }
        _ => keyword,
    }
}
