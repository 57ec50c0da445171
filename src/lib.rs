//! # stree - Online Suffix Trees
//!
//! stree builds compressed suffix trees with Ukkonen's algorithm: one pass
//! over the input, one phase per symbol, suffix links to jump between
//! insertion points. The finished tree is immutable and exposes raw node
//! access for callers to build substring search and friends on top of.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`edge_map`] - Pluggable child lookup (dense array or hash map)
//! - [`tree`] - Builder, leaf finalization, consistency check, read API
//! - [`error`] - The [`TreeError`] type shared by every fallible call
//!
//! ## Quick Start
//!
//! ```
//! use stree::{ByteSuffixTree, ROOT};
//!
//! let tree = ByteSuffixTree::from_bytes(b"banana$").unwrap();
//! assert_eq!(tree.leaf_count(), 7);
//!
//! let a = tree.get_child(ROOT, &b'a').unwrap().unwrap();
//! assert_eq!(tree.label(a).unwrap(), b"a");
//! ```
//!
//! Symbols of any hashable type work with the hash strategy:
//!
//! ```
//! use stree::HashSuffixTree;
//!
//! let words = ["to", "be", "or", "not", "to", "be", "."];
//! let tree = HashSuffixTree::<&str>::build(words, ()).unwrap();
//! assert_eq!(tree.leaf_count(), words.len());
//! ```
//!
//! ## Terminators
//!
//! Every suffix gets its own leaf only when the last symbol occurs nowhere
//! else in the input. Without such a terminator, suffixes that are prefixes
//! of longer suffixes stay implicit inside the tree.

pub mod edge_map;
pub mod error;
pub mod tree;

pub use edge_map::{Alphabet, ArrayConfig, ArrayEdgeMap, EdgeMap, FxEdgeMap, HashEdgeMap};
pub use error::{TreeError, TreeResult};
pub use tree::{
    ByteSuffixTree, HashSuffixTree, Node, NodeIndex, ROOT, SuffixTree, TreeBuilder, TreeStats,
};
