//! Word Search Module
//!
//! The query-routing core of the service: decides which strategy answers a
//! keyword, shapes the query for the document store, and ranks what comes
//! back.
//!
//! ## Pipeline
//! 1. **Classify**: strip quotes and the `to ` prefix, reject empty keywords,
//!    collect attribute filters (`classifier`, `filters`).
//! 2. **Build**: pick Igbo full-text, Igbo strict or English regex (`query`).
//! 3. **Execute**: consult the cache, run the query, fall back to English when
//!    the Igbo side finds nothing (`engine`).
//! 4. **Rank**: order the page by closeness to the keyword (`ranker`).
//!
//! ## Submodules
//! - **`classifier`**: Keyword normalization and classification.
//! - **`engine`**: Strategy selection, caching and fallback.
//! - **`filters`**: Attribute filter predicates.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`query`**: The query shapes handed to the document store.
//! - **`ranker`**: Relevance re-ordering by field path.
//! - **`tokenizer`**: Unicode-aware text tokenization used by full-text matching.
//! - **`types`**: Request, record and response types.

pub mod classifier;
pub mod engine;
pub mod filters;
pub mod handlers;
pub mod query;
pub mod ranker;
pub mod tokenizer;
pub mod types;
