use super::classifier::{Classification, classify};
use super::query::{BuiltQuery, build_english_query, build_primary_query};
use super::ranker::sort_docs_by;
use super::types::{SearchOptions, SearchRequest, WordRecord};
use crate::cache::gateway::{CacheGateway, cache_key};
use crate::error::{LookupError, LookupResult};
use crate::storage::store::DocumentStore;
use regex::Regex;
use std::sync::Arc;

/// Where the returned words came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Cache,
    Primary,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub words: Vec<WordRecord>,
    /// The query whose results are returned. On a cache hit this is rebuilt
    /// from the strategy stored alongside the words.
    pub query: BuiltQuery,
    pub source: ResultSource,
    pub cache_key: String,
}

/// Steps of a lookup. Each step performs at most one store call.
enum Step {
    CacheLookup { query: BuiltQuery },
    ExecutePrimary { query: BuiltQuery },
    CheckEmpty { query: BuiltQuery, words: Vec<WordRecord> },
    ExecuteFallback,
    Done { query: BuiltQuery, words: Vec<WordRecord>, source: ResultSource },
}

/// Routes a word search to the right strategy, caching what it finds.
#[derive(Clone)]
pub struct WordSearchEngine {
    store: Arc<dyn DocumentStore>,
    cache: CacheGateway,
}

impl WordSearchEngine {
    pub fn new(store: Arc<dyn DocumentStore>, cache: CacheGateway) -> Self {
        Self { store, cache }
    }

    /// Runs a search.
    ///
    /// Quoted keywords only ever run the English regex strategy. Other
    /// keywords run the strict or full-text Igbo strategy and, when that
    /// comes back empty from the store, the English regex strategy with the
    /// same term and filters. An empty Igbo result is never cached on its
    /// own: only the fallback's result is written under the key, so a failed
    /// fallback leaves the cache untouched. A cache hit is returned as is,
    /// even when empty.
    pub async fn search(&self, request: &SearchRequest) -> LookupResult<SearchOutcome> {
        let classification = classify(request)?;
        let options = request.options();
        let key = cache_key(
            classification.has_quotes,
            &classification.search_word,
            request.skip,
            request.limit,
            request.dialects,
            request.examples,
        );

        let mut step = Step::CacheLookup {
            query: build_primary_query(&classification),
        };

        loop {
            step = match step {
                Step::CacheLookup { query } => match self.cache.get(&key).await {
                    Some(cached) => Step::Done {
                        query: self.cached_query(query, &cached.strategy, &classification),
                        words: cached.words,
                        source: ResultSource::Cache,
                    },
                    None => Step::ExecutePrimary { query },
                },
                Step::ExecutePrimary { query } => {
                    let words = self.execute(&query, options).await?;
                    if classification.has_quotes {
                        self.cache.set(&key, query.strategy(), &words).await;
                        Step::Done {
                            query,
                            words,
                            source: ResultSource::Primary,
                        }
                    } else {
                        Step::CheckEmpty { query, words }
                    }
                }
                Step::CheckEmpty { query, words } => {
                    if words.is_empty() {
                        Step::ExecuteFallback
                    } else {
                        self.cache.set(&key, query.strategy(), &words).await;
                        Step::Done {
                            query,
                            words,
                            source: ResultSource::Primary,
                        }
                    }
                }
                Step::ExecuteFallback => {
                    let query = self.fallback_query(&classification);
                    let words = self.execute(&query, options).await?;
                    self.cache.set(&key, query.strategy(), &words).await;
                    Step::Done {
                        query,
                        words,
                        source: ResultSource::Fallback,
                    }
                }
                Step::Done {
                    query,
                    words,
                    source,
                } => {
                    return Ok(SearchOutcome {
                        words,
                        query,
                        source,
                        cache_key: key,
                    });
                }
            };
        }
    }

    /// The query a cached entry was produced by. Unknown strategy tags keep
    /// the primary query.
    fn cached_query(
        &self,
        primary: BuiltQuery,
        strategy: &str,
        classification: &Classification,
    ) -> BuiltQuery {
        if strategy == primary.strategy() {
            return primary;
        }
        let english = build_english_query(classification);
        if strategy == english.strategy() {
            english
        } else {
            tracing::warn!(
                "Unknown cached strategy {:?}, reporting {}",
                strategy,
                primary.strategy()
            );
            primary
        }
    }

    fn fallback_query(&self, classification: &Classification) -> BuiltQuery {
        tracing::info!(
            "No Igbo matches for {:?}, falling back to English definitions",
            classification.search_word
        );
        build_english_query(classification)
    }

    /// Runs one query against the store and ranks the page it returns.
    pub async fn execute(
        &self,
        query: &BuiltQuery,
        options: SearchOptions,
    ) -> LookupResult<Vec<WordRecord>> {
        let words = match query {
            BuiltQuery::IgboTextSearch {
                term,
                main_key_only,
                filters,
            } => self
                .store
                .text_search(term, *main_key_only, filters, options)
                .await
                .map_err(LookupError::UpstreamQueryFailure)?
                .into_iter()
                .map(|hit| hit.record)
                .collect(),
            BuiltQuery::IgboStrictMatch { term } => self
                .store
                .find_by_headword(term, options)
                .await
                .map_err(LookupError::UpstreamQueryFailure)?,
            BuiltQuery::EnglishRegex {
                pattern, filters, ..
            } => {
                let regex = Regex::new(pattern)?;
                self.store
                    .regex_search_definitions(&regex, filters, options)
                    .await
                    .map_err(LookupError::UpstreamQueryFailure)?
            }
        };

        tracing::debug!(
            "{} for {:?} returned {} words",
            query.strategy(),
            query.term(),
            words.len()
        );
        Ok(sort_docs_by(query.term(), words, query.sort_field()))
    }
}
