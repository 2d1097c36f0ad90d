use super::engine::WordSearchEngine;
use super::types::{SearchRequest, SearchResponse, WordFields};
use crate::config::SearchConfig;
use crate::error::LookupResult;
use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

/// Query string of `GET /api/v1/words`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: String,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub dialects: bool,
    #[serde(default)]
    pub examples: bool,
    #[serde(default)]
    pub main_key: bool,
    #[serde(default)]
    pub is_standard_igbo: bool,
    #[serde(default)]
    pub nsibidi: bool,
    #[serde(default)]
    pub pronunciation: bool,
}

impl SearchParams {
    pub fn into_request(self, config: &SearchConfig) -> SearchRequest {
        let limit = config.clamp_limit(self.limit);
        let skip = self.page.unwrap_or(0).saturating_mul(limit);

        SearchRequest::new(self.keyword)
            .page(skip, limit)
            .strict(self.strict)
            .dialects(self.dialects)
            .examples(self.examples)
            .main_key(self.main_key)
            .word_fields(WordFields {
                is_standard_igbo: self.is_standard_igbo,
                nsibidi: self.nsibidi,
                pronunciation: self.pronunciation,
            })
    }
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(engine): Extension<Arc<WordSearchEngine>>,
    Extension(config): Extension<Arc<SearchConfig>>,
) -> LookupResult<Json<SearchResponse>> {
    let keyword = params.keyword.clone();
    let request = params.into_request(&config);
    let outcome = engine.search(&request).await?;

    Ok(Json(SearchResponse {
        keyword,
        strategy: outcome.query.strategy().to_string(),
        count: outcome.words.len(),
        results: outcome.words,
    }))
}
