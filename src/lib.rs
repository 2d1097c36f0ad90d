//! Igbo Dictionary Lookup Library
//!
//! This library crate defines the modules that make up the word lookup
//! service. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`search`**: The query-routing core. Classifies keywords, builds Igbo or
//!   English queries, falls back between them and ranks the results.
//! - **`cache`**: Best-effort result cache keyed by the full search parameter tuple.
//! - **`storage`**: The document store collaborator and its in-memory implementation.
//! - **`words`**: Word creation (with cascading examples) and retrieval by id.
//! - **`server`**: Axum router and service wiring.
//! - **`config`**: Layered configuration.
//! - **`error`**: The request error type and its HTTP mapping.

pub mod cache;
pub mod config;
pub mod error;
pub mod search;
pub mod server;
pub mod storage;
pub mod words;
