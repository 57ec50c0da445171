//! Suffix tree construction and access
//!
//! This module builds compressed suffix trees online with Ukkonen's
//! algorithm and exposes the finished tree through read-only node access.
//!
//! ## Architecture
//!
//! - `types`: Node arena types, sentinels and stats
//! - `builder`: One construction phase per input symbol
//! - `finalize`: Fixes the length of every open leaf after the last phase
//! - `verify`: Rejects arenas that break tree invariants
//! - `reader`: The immutable [`SuffixTree`] and its accessors
//!
//! ## Lifecycle
//!
//! [`TreeBuilder::push`] mutates the arena and the active point. Calling
//! [`TreeBuilder::finish`] consumes the builder, closes the leaves, checks
//! the result and returns a [`SuffixTree`]; there is no way back to a
//! mutable tree.

pub mod builder;
mod finalize;
pub mod reader;
pub mod types;
mod verify;

// Re-exports for convenience
pub use builder::TreeBuilder;
pub use reader::{ByteSuffixTree, HashSuffixTree, SuffixTree};
pub use types::{Node, NodeIndex, ROOT, TreeStats};
