use serde::{Deserialize, Serialize};

/// Optional attribute flags that narrow a search to words having them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFields {
    pub is_standard_igbo: bool,
    pub nsibidi: bool,
    pub pronunciation: bool,
}

/// A validated word search. Built once per request by the HTTP layer (or a
/// caller embedding the engine) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub raw_keyword: String,
    pub skip: usize,
    pub limit: usize,
    pub strict: bool,
    pub dialects: bool,
    pub examples: bool,
    pub is_using_main_key: bool,
    pub word_fields: WordFields,
}

impl SearchRequest {
    pub fn new(raw_keyword: impl Into<String>) -> Self {
        Self {
            raw_keyword: raw_keyword.into(),
            skip: 0,
            limit: 10,
            strict: false,
            dialects: false,
            examples: false,
            is_using_main_key: false,
            word_fields: WordFields::default(),
        }
    }

    pub fn page(mut self, skip: usize, limit: usize) -> Self {
        self.skip = skip;
        self.limit = limit.max(1);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn dialects(mut self, dialects: bool) -> Self {
        self.dialects = dialects;
        self
    }

    pub fn examples(mut self, examples: bool) -> Self {
        self.examples = examples;
        self
    }

    pub fn main_key(mut self, is_using_main_key: bool) -> Self {
        self.is_using_main_key = is_using_main_key;
        self
    }

    pub fn word_fields(mut self, word_fields: WordFields) -> Self {
        self.word_fields = word_fields;
        self
    }

    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            skip: self.skip,
            limit: self.limit,
            dialects: self.dialects,
            examples: self.examples,
        }
    }
}

/// Pagination and sub-document projection handed to the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub skip: usize,
    pub limit: usize,
    pub dialects: bool,
    pub examples: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 10,
            dialects: false,
            examples: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAttributes {
    #[serde(default)]
    pub is_standard_igbo: bool,
    #[serde(default)]
    pub is_accented: bool,
    #[serde(default)]
    pub is_slang: bool,
}

/// A regional variant of a headword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialect {
    pub dialect: String,
    pub variations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

/// Example sentence owned independently of any word. Words point at examples
/// by id; `associated_words` is the back-reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub id: String,
    pub igbo: String,
    pub english: String,
    pub associated_words: Vec<String>,
}

/// Either a bare example id (as persisted) or the resolved example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleRef {
    Resolved(Example),
    Id(String),
}

impl ExampleRef {
    pub fn id(&self) -> &str {
        match self {
            ExampleRef::Resolved(example) => &example.id,
            ExampleRef::Id(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: String,
    pub word: String,
    pub word_class: String,
    pub definitions: Vec<String>,
    #[serde(default)]
    pub variations: Vec<String>,
    #[serde(default)]
    pub stems: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dialects: Vec<Dialect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub nsibidi: String,
    #[serde(default)]
    pub attributes: WordAttributes,
    #[serde(default)]
    pub examples: Vec<ExampleRef>,
}

/// Response envelope for `GET /api/v1/words`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub keyword: String,
    pub strategy: String,
    pub count: usize,
    pub results: Vec<WordRecord>,
}
