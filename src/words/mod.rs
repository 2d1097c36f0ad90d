//! Word Records Module
//!
//! Creation and direct retrieval of dictionary entries.
//!
//! Creating a word cascades into its examples: the word is written first,
//! its examples are created concurrently with a back-reference to the new id,
//! and the word is written again holding the example ids.

pub mod handlers;
pub mod service;
pub mod types;
