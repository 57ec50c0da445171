//! Sparse hash-keyed edge map for arbitrary symbol types.

use super::EdgeMap;
use crate::tree::types::NodeIndex;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Edge map backed by a hash map from symbol to child.
///
/// Memory grows with the number of children actually present, so this is the
/// strategy to use for large or unbounded alphabets. Iteration order of
/// [`EdgeMap::children`] is unspecified.
#[derive(Debug, Clone)]
pub struct HashEdgeMap<S, H = ahash::RandomState> {
    map: HashMap<S, NodeIndex, H>,
}

/// [`HashEdgeMap`] using the Fx hasher
pub type FxEdgeMap<S> = HashEdgeMap<S, rustc_hash::FxBuildHasher>;

impl<S, H> EdgeMap for HashEdgeMap<S, H>
where
    S: Clone + Eq + Hash,
    H: BuildHasher + Default,
{
    type Symbol = S;
    type Config = ();

    fn new(_config: &()) -> Self {
        Self {
            map: HashMap::with_hasher(H::default()),
        }
    }

    #[inline]
    fn get_child(&self, symbol: &S) -> Option<NodeIndex> {
        self.map.get(symbol).copied()
    }

    #[inline]
    fn set_child(&mut self, symbol: S, child: NodeIndex) {
        self.map.insert(symbol, child);
    }

    fn children(&self) -> Vec<NodeIndex> {
        self.map.values().copied().collect()
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }
}
