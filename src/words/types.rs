use crate::storage::store::WordDraft;
use serde::{Deserialize, Serialize};

/// Example sentence nested in a word creation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExample {
    pub igbo: String,
    pub english: String,
}

/// Body of `POST /api/v1/words`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWord {
    #[serde(flatten)]
    pub word: WordDraft,
    #[serde(default)]
    pub examples: Vec<NewExample>,
}

/// Query string of the get-by-id endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct WordParams {
    #[serde(default)]
    pub dialects: bool,
    #[serde(default)]
    pub examples: bool,
}
