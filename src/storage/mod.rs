//! Document Storage Module
//!
//! The document store the search engine queries and the creation service
//! writes to.
//!
//! ## Core Concepts
//! - **Collaborator trait**: `DocumentStore` exposes exactly the query shapes the
//!   engine needs (full-text, exact headword, definition regex) plus record access.
//! - **Projection**: dialects and resolved examples are joined in only when asked for.
//! - **Pagination**: `skip`/`limit` are applied by the store after matching.
//! - **Access**: `MemoryWordStore` is the in-process implementation, safe to share
//!   across request tasks behind an `Arc`.

pub mod memory;
pub mod store;
