use super::service::WordService;
use super::types::{NewWord, WordParams};
use crate::error::LookupResult;
use crate::search::types::{Example, SearchOptions, WordRecord};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_create_word(
    Extension(words): Extension<Arc<WordService>>,
    Json(payload): Json<NewWord>,
) -> LookupResult<(StatusCode, Json<WordRecord>)> {
    let word = words.create_word(payload).await?;
    Ok((StatusCode::CREATED, Json(word)))
}

pub async fn handle_get_word(
    Path(id): Path<String>,
    Query(params): Query<WordParams>,
    Extension(words): Extension<Arc<WordService>>,
) -> LookupResult<Json<WordRecord>> {
    let options = SearchOptions {
        dialects: params.dialects,
        examples: params.examples,
        ..SearchOptions::default()
    };
    Ok(Json(words.get_word(&id, options).await?))
}

pub async fn handle_get_example(
    Path(id): Path<String>,
    Extension(words): Extension<Arc<WordService>>,
) -> LookupResult<Json<Example>> {
    Ok(Json(words.get_example(&id).await?))
}
