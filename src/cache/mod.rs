//! Result Cache Module
//!
//! Keeps search results around so that repeating a query does not hit the
//! document store again.
//!
//! ## Core Concepts
//! - **Keying**: `cache_key` encodes the full search parameter tuple. Equal
//!   tuples give equal keys and distinct tuples can never collide.
//! - **Best effort**: `CacheGateway` never fails a request. Store errors,
//!   timeouts and undecodable entries are logged and treated as misses.
//! - **Provenance**: an entry stores the strategy that produced its words
//!   next to them, so a hit reports the same strategy as the original call.
//! - **Expiry**: every write carries the configured TTL. Entries are replaced
//!   wholesale, never patched.
//!
//! ## Submodules
//! - **`gateway`**: The `CacheStore` collaborator trait, key construction and the gateway.
//! - **`memory`**: In-process `CacheStore` with TTL-on-read expiry.

pub mod gateway;
pub mod memory;

#[cfg(test)]
mod tests;
