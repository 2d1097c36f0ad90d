use super::classifier::Classification;
use super::filters::FilterSet;
use serde::Serialize;

/// Field the ranker sorts Igbo results on.
pub const IGBO_SORT_FIELD: &str = "word";
/// Field the ranker sorts English results on.
pub const ENGLISH_SORT_FIELD: &str = "definitions[0]";

/// The three query shapes the engine can hand to the document store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum BuiltQuery {
    /// Relevance-scored full-text match on the headword, plus variations and
    /// stems unless `main_key_only` is set.
    IgboTextSearch {
        term: String,
        main_key_only: bool,
        filters: FilterSet,
    },
    /// Exact headword equality. Carries no filters: strict lookups return the
    /// headword whatever its attributes.
    IgboStrictMatch { term: String },
    /// Case-insensitive regex over the English definitions.
    EnglishRegex {
        term: String,
        pattern: String,
        filters: FilterSet,
    },
}

impl BuiltQuery {
    pub fn strategy(&self) -> &'static str {
        match self {
            BuiltQuery::IgboTextSearch { .. } => "igbo_text_search",
            BuiltQuery::IgboStrictMatch { .. } => "igbo_strict_match",
            BuiltQuery::EnglishRegex { .. } => "english_regex",
        }
    }

    pub fn term(&self) -> &str {
        match self {
            BuiltQuery::IgboTextSearch { term, .. }
            | BuiltQuery::IgboStrictMatch { term }
            | BuiltQuery::EnglishRegex { term, .. } => term,
        }
    }

    pub fn filters(&self) -> Option<&FilterSet> {
        match self {
            BuiltQuery::IgboTextSearch { filters, .. } | BuiltQuery::EnglishRegex { filters, .. } => {
                Some(filters)
            }
            BuiltQuery::IgboStrictMatch { .. } => None,
        }
    }

    pub fn sort_field(&self) -> &'static str {
        match self {
            BuiltQuery::EnglishRegex { .. } => ENGLISH_SORT_FIELD,
            _ => IGBO_SORT_FIELD,
        }
    }
}

/// Picks the first strategy to run: quoted keywords only ever search English,
/// everything else starts on the Igbo side.
pub fn build_primary_query(classification: &Classification) -> BuiltQuery {
    if classification.has_quotes {
        build_english_query(classification)
    } else if classification.strict {
        build_igbo_strict_query(classification)
    } else {
        build_igbo_text_query(classification)
    }
}

pub fn build_igbo_text_query(classification: &Classification) -> BuiltQuery {
    BuiltQuery::IgboTextSearch {
        term: classification.search_word.clone(),
        main_key_only: classification.is_using_main_key,
        filters: classification.filters.clone(),
    }
}

pub fn build_igbo_strict_query(classification: &Classification) -> BuiltQuery {
    BuiltQuery::IgboStrictMatch {
        term: classification.search_word.clone(),
    }
}

pub fn build_english_query(classification: &Classification) -> BuiltQuery {
    BuiltQuery::EnglishRegex {
        term: classification.search_word.clone(),
        pattern: english_pattern(&classification.search_word),
        filters: classification.filters.clone(),
    }
}

/// Case-insensitive pattern matching the literal keyword anywhere in a
/// definition.
pub fn english_pattern(term: &str) -> String {
    format!("(?i){}", regex::escape(term))
}
