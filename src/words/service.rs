use super::types::NewWord;
use crate::error::{LookupError, LookupResult};
use crate::search::types::{Example, ExampleRef, SearchOptions, WordRecord};
use crate::storage::store::{DocumentStore, ExampleDraft};
use futures::future::try_join_all;
use std::sync::Arc;

/// Reads and writes individual word records.
#[derive(Clone)]
pub struct WordService {
    store: Arc<dyn DocumentStore>,
}

impl WordService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Creates a word and its examples.
    ///
    /// The word is saved first to obtain its id, the examples are then created
    /// concurrently pointing back at that id, and finally the word is saved
    /// again with the example ids. A failed example fails the whole call;
    /// examples created before the failure are left in place.
    pub async fn create_word(&self, payload: NewWord) -> LookupResult<WordRecord> {
        validate(&payload)?;

        let mut word = self
            .store
            .insert_word(payload.word)
            .await
            .map_err(LookupError::UpstreamQueryFailure)?;

        let examples = try_join_all(payload.examples.into_iter().map(|example| {
            self.store.insert_example(ExampleDraft {
                igbo: example.igbo,
                english: example.english,
                associated_words: vec![word.id.clone()],
            })
        }))
        .await
        .map_err(LookupError::UpstreamQueryFailure)?;

        word.examples = examples
            .into_iter()
            .map(|example| ExampleRef::Id(example.id))
            .collect();

        self.store
            .save_word(&word)
            .await
            .map_err(LookupError::UpstreamQueryFailure)?;

        tracing::info!(
            "Created word {} ({}) with {} examples",
            word.word,
            word.id,
            word.examples.len()
        );
        Ok(word)
    }

    pub async fn get_word(&self, id: &str, options: SearchOptions) -> LookupResult<WordRecord> {
        self.store
            .get_word(id, options)
            .await
            .map_err(LookupError::UpstreamQueryFailure)?
            .ok_or_else(|| LookupError::word_not_found(id))
    }

    pub async fn get_example(&self, id: &str) -> LookupResult<Example> {
        self.store
            .get_example(id)
            .await
            .map_err(LookupError::UpstreamQueryFailure)?
            .ok_or_else(|| LookupError::example_not_found(id))
    }
}

fn validate(payload: &NewWord) -> LookupResult<()> {
    if payload.word.word.trim().is_empty() {
        return Err(LookupError::InvalidPayload("word is required".to_string()));
    }
    if payload.word.word_class.trim().is_empty() {
        return Err(LookupError::InvalidPayload(
            "wordClass is required".to_string(),
        ));
    }
    if payload.word.definitions.iter().all(|d| d.trim().is_empty()) {
        return Err(LookupError::InvalidPayload(
            "at least one definition is required".to_string(),
        ));
    }
    Ok(())
}
