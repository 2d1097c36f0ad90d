//! HTTP wiring: builds the shared services from a [`Config`] and mounts the
//! handlers on an Axum router.

use crate::cache::gateway::{CacheGateway, CacheStore};
use crate::config::{Config, SearchConfig};
use crate::search::engine::WordSearchEngine;
use crate::search::handlers::handle_search;
use crate::storage::store::DocumentStore;
use crate::words::handlers::{handle_create_word, handle_get_example, handle_get_word};
use crate::words::service::WordService;
use axum::extract::Extension;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;

pub const ENDPOINT_WORDS: &str = "/api/v1/words";
pub const ENDPOINT_WORD: &str = "/api/v1/words/:id";
pub const ENDPOINT_EXAMPLE: &str = "/api/v1/examples/:id";
pub const ENDPOINT_HEALTH: &str = "/health";

#[derive(Clone)]
pub struct Services {
    pub engine: Arc<WordSearchEngine>,
    pub words: Arc<WordService>,
    pub search: Arc<SearchConfig>,
}

impl Services {
    pub fn new(
        config: &Config,
        store: Arc<dyn DocumentStore>,
        cache_store: Arc<dyn CacheStore>,
    ) -> Self {
        let cache = CacheGateway::new(cache_store, config.cache.ttl(), config.cache.timeout());
        Self {
            engine: Arc::new(WordSearchEngine::new(store.clone(), cache)),
            words: Arc::new(WordService::new(store)),
            search: Arc::new(config.search.clone()),
        }
    }
}

pub fn router(services: Services) -> Router {
    Router::new()
        .route(ENDPOINT_WORDS, get(handle_search).post(handle_create_word))
        .route(ENDPOINT_WORD, get(handle_get_word))
        .route(ENDPOINT_EXAMPLE, get(handle_get_example))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(services.engine))
        .layer(Extension(services.words))
        .layer(Extension(services.search))
}

async fn handle_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
