use crate::search::filters::FilterSet;
use crate::search::types::{Dialect, Example, SearchOptions, WordAttributes, WordRecord};
use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Word fields supplied by a client. The store assigns the id; examples are
/// attached afterwards by the creation service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDraft {
    pub word: String,
    pub word_class: String,
    pub definitions: Vec<String>,
    #[serde(default)]
    pub variations: Vec<String>,
    #[serde(default)]
    pub stems: Vec<String>,
    #[serde(default)]
    pub dialects: Vec<Dialect>,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub nsibidi: String,
    #[serde(default)]
    pub attributes: WordAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDraft {
    pub igbo: String,
    pub english: String,
    pub associated_words: Vec<String>,
}

/// A text-search hit with its relevance score (higher is better).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub record: WordRecord,
    pub score: usize,
}

/// The document store the lookup engine queries.
///
/// Every search method applies `options.skip`/`options.limit` after matching
/// and returns records projected per `options`: dialects are only present when
/// `options.dialects` is set, examples are resolved only when
/// `options.examples` is set.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Full-text match on the headword (and variations and stems unless
    /// `main_key_only`), best score first.
    async fn text_search(
        &self,
        term: &str,
        main_key_only: bool,
        filters: &FilterSet,
        options: SearchOptions,
    ) -> Result<Vec<ScoredWord>>;

    /// Words whose headword equals `word` exactly.
    async fn find_by_headword(&self, word: &str, options: SearchOptions)
    -> Result<Vec<WordRecord>>;

    /// Words with at least one definition matching `pattern`.
    async fn regex_search_definitions(
        &self,
        pattern: &Regex,
        filters: &FilterSet,
        options: SearchOptions,
    ) -> Result<Vec<WordRecord>>;

    async fn get_word(&self, id: &str, options: SearchOptions) -> Result<Option<WordRecord>>;

    async fn insert_word(&self, draft: WordDraft) -> Result<WordRecord>;

    /// Replaces the stored record with the same id.
    async fn save_word(&self, word: &WordRecord) -> Result<()>;

    async fn insert_example(&self, draft: ExampleDraft) -> Result<Example>;

    async fn get_example(&self, id: &str) -> Result<Option<Example>>;
}
