use super::types::{WordFields, WordRecord};
use serde::Serialize;

/// Minimum number of code points a stored pronunciation must exceed for the
/// `pronunciation` flag to accept a word.
pub const MIN_PRONUNCIATION_LENGTH: usize = 10;

/// Word attributes a filter can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterField {
    IsStandardIgbo,
    Nsibidi,
    Pronunciation,
}

impl FilterField {
    /// Document path of the field, as used in query explanations.
    pub fn path(&self) -> &'static str {
        match self {
            FilterField::IsStandardIgbo => "attributes.isStandardIgbo",
            FilterField::Nsibidi => "nsibidi",
            FilterField::Pronunciation => "pronunciation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FilterPredicate {
    Equals { field: FilterField, value: bool },
    NotEquals { field: FilterField, value: String },
    Exists { field: FilterField },
    LengthGreaterThan { field: FilterField, length: usize },
}

impl FilterPredicate {
    pub fn field(&self) -> FilterField {
        match self {
            FilterPredicate::Equals { field, .. }
            | FilterPredicate::NotEquals { field, .. }
            | FilterPredicate::Exists { field }
            | FilterPredicate::LengthGreaterThan { field, .. } => *field,
        }
    }

    pub fn matches(&self, word: &WordRecord) -> bool {
        match self {
            FilterPredicate::Equals { field, value } => match field {
                FilterField::IsStandardIgbo => word.attributes.is_standard_igbo == *value,
                // Only boolean attributes can be compared for equality.
                FilterField::Nsibidi | FilterField::Pronunciation => false,
            },
            FilterPredicate::NotEquals { field, value } => {
                text_field(word, *field).is_none_or(|text| text != value)
            }
            FilterPredicate::Exists { field } => match field {
                FilterField::IsStandardIgbo => true,
                _ => text_field(word, *field).is_some(),
            },
            FilterPredicate::LengthGreaterThan { field, length } => {
                text_field(word, *field).is_some_and(|text| text.chars().count() > *length)
            }
        }
    }
}

fn text_field(word: &WordRecord, field: FilterField) -> Option<&str> {
    match field {
        FilterField::Nsibidi => Some(word.nsibidi.as_str()),
        FilterField::Pronunciation => word.pronunciation.as_deref(),
        FilterField::IsStandardIgbo => None,
    }
}

/// Conjunction of predicates. An empty set accepts every word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterSet(Vec<FilterPredicate>);

impl FilterSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn predicates(&self) -> &[FilterPredicate] {
        &self.0
    }

    pub fn matches(&self, word: &WordRecord) -> bool {
        self.0.iter().all(|predicate| predicate.matches(word))
    }
}

/// Builds the filter set for a request's word-field flags. Flags that are not
/// set contribute nothing, not a `false`-valued predicate.
pub fn generate_filtering_params(fields: &WordFields) -> FilterSet {
    let mut predicates = Vec::new();

    if fields.is_standard_igbo {
        predicates.push(FilterPredicate::Equals {
            field: FilterField::IsStandardIgbo,
            value: true,
        });
    }
    if fields.nsibidi {
        predicates.push(FilterPredicate::NotEquals {
            field: FilterField::Nsibidi,
            value: String::new(),
        });
    }
    if fields.pronunciation {
        predicates.push(FilterPredicate::Exists {
            field: FilterField::Pronunciation,
        });
        predicates.push(FilterPredicate::LengthGreaterThan {
            field: FilterField::Pronunciation,
            length: MIN_PRONUNCIATION_LENGTH,
        });
    }

    FilterSet(predicates)
}
