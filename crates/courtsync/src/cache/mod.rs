//! Cache backend implementations.
//!
//! This module provides the in-memory implementations of the cache and
//! index traits defined in `courtsync_core::cache`. Cache state lives and
//! dies with the process: persistence and cross-process coherence are
//! explicitly out of scope.

pub mod memory;

pub use memory::{MemoryCache, MemoryPlaceIndex};
