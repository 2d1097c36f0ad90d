use super::store::{DocumentStore, ExampleDraft, ScoredWord, WordDraft};
use crate::search::filters::FilterSet;
use crate::search::tokenizer::{tokenize_query, tokenize_text};
use crate::search::types::{Example, ExampleRef, SearchOptions, WordRecord};

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredWord {
    seq: u64,
    record: WordRecord,
}

/// In-process [`DocumentStore`] backed by concurrent maps.
///
/// Insertion order is tracked so that equally relevant matches come back in
/// the order they were written.
#[derive(Default)]
pub struct MemoryWordStore {
    words: Arc<DashMap<String, StoredWord>>,
    examples: Arc<DashMap<String, Example>>,
    next_seq: AtomicU64,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn example_count(&self) -> usize {
        self.examples.len()
    }

    /// All stored words in insertion order, unprojected.
    fn snapshot(&self) -> Vec<StoredWord> {
        let mut words: Vec<StoredWord> = self
            .words
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        words.sort_by_key(|stored| stored.seq);
        words
    }

    fn project(&self, mut record: WordRecord, options: SearchOptions) -> WordRecord {
        if !options.dialects {
            record.dialects.clear();
        }
        record.examples = record
            .examples
            .into_iter()
            .map(|example| {
                if !options.examples {
                    return ExampleRef::Id(example.id().to_string());
                }
                match self.examples.get(example.id()) {
                    Some(resolved) => ExampleRef::Resolved(resolved.value().clone()),
                    None => example,
                }
            })
            .collect();
        record
    }

    fn page<T>(items: Vec<T>, options: SearchOptions) -> Vec<T> {
        items
            .into_iter()
            .skip(options.skip)
            .take(options.limit)
            .collect()
    }
}

fn searchable_tokens(record: &WordRecord, main_key_only: bool) -> HashSet<String> {
    let mut tokens = tokenize_text(&record.word);
    if !main_key_only {
        for text in record.variations.iter().chain(record.stems.iter()) {
            tokens.extend(tokenize_text(text));
        }
    }
    tokens
}

#[async_trait]
impl DocumentStore for MemoryWordStore {
    async fn text_search(
        &self,
        term: &str,
        main_key_only: bool,
        filters: &FilterSet,
        options: SearchOptions,
    ) -> Result<Vec<ScoredWord>> {
        let query_tokens = tokenize_query(term);
        let exact = term.to_lowercase();

        let mut hits: Vec<(u64, ScoredWord)> = Vec::new();
        for stored in self.snapshot() {
            if !filters.matches(&stored.record) {
                continue;
            }
            let tokens = searchable_tokens(&stored.record, main_key_only);
            let mut score = query_tokens.iter().filter(|t| tokens.contains(*t)).count();
            if score == 0 {
                continue;
            }
            if stored.record.word.to_lowercase() == exact {
                score += query_tokens.len() + 1;
            }
            hits.push((
                stored.seq,
                ScoredWord {
                    record: stored.record,
                    score,
                },
            ));
        }

        hits.sort_by(|a, b| b.1.score.cmp(&a.1.score).then(a.0.cmp(&b.0)));
        tracing::debug!("Text search for {:?} matched {} words", term, hits.len());

        Ok(Self::page(hits, options)
            .into_iter()
            .map(|(_, hit)| ScoredWord {
                record: self.project(hit.record, options),
                score: hit.score,
            })
            .collect())
    }

    async fn find_by_headword(
        &self,
        word: &str,
        options: SearchOptions,
    ) -> Result<Vec<WordRecord>> {
        let matches: Vec<WordRecord> = self
            .snapshot()
            .into_iter()
            .filter(|stored| stored.record.word == word)
            .map(|stored| stored.record)
            .collect();

        Ok(Self::page(matches, options)
            .into_iter()
            .map(|record| self.project(record, options))
            .collect())
    }

    async fn regex_search_definitions(
        &self,
        pattern: &Regex,
        filters: &FilterSet,
        options: SearchOptions,
    ) -> Result<Vec<WordRecord>> {
        let matches: Vec<WordRecord> = self
            .snapshot()
            .into_iter()
            .filter(|stored| {
                filters.matches(&stored.record)
                    && stored
                        .record
                        .definitions
                        .iter()
                        .any(|definition| pattern.is_match(definition))
            })
            .map(|stored| stored.record)
            .collect();

        Ok(Self::page(matches, options)
            .into_iter()
            .map(|record| self.project(record, options))
            .collect())
    }

    async fn get_word(&self, id: &str, options: SearchOptions) -> Result<Option<WordRecord>> {
        let record = self.words.get(id).map(|stored| stored.record.clone());
        Ok(record.map(|record| self.project(record, options)))
    }

    async fn insert_word(&self, draft: WordDraft) -> Result<WordRecord> {
        let record = WordRecord {
            id: Uuid::new_v4().to_string(),
            word: draft.word,
            word_class: draft.word_class,
            definitions: draft.definitions,
            variations: draft.variations,
            stems: draft.stems,
            dialects: draft.dialects,
            pronunciation: draft.pronunciation,
            nsibidi: draft.nsibidi,
            attributes: draft.attributes,
            examples: Vec::new(),
        };
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.words.insert(
            record.id.clone(),
            StoredWord {
                seq,
                record: record.clone(),
            },
        );
        tracing::debug!("Inserted word {} ({})", record.word, record.id);
        Ok(record)
    }

    async fn save_word(&self, word: &WordRecord) -> Result<()> {
        let mut stored = self
            .words
            .get_mut(&word.id)
            .ok_or_else(|| anyhow::anyhow!("Word {} does not exist", word.id))?;
        let mut record = word.clone();
        // Persist ids only; resolved examples live in their own collection.
        record.examples = record
            .examples
            .iter()
            .map(|example| ExampleRef::Id(example.id().to_string()))
            .collect();
        stored.record = record;
        Ok(())
    }

    async fn insert_example(&self, draft: ExampleDraft) -> Result<Example> {
        let example = Example {
            id: Uuid::new_v4().to_string(),
            igbo: draft.igbo,
            english: draft.english,
            associated_words: draft.associated_words,
        };
        self.examples.insert(example.id.clone(), example.clone());
        Ok(example)
    }

    async fn get_example(&self, id: &str) -> Result<Option<Example>> {
        Ok(self.examples.get(id).map(|example| example.value().clone()))
    }
}
