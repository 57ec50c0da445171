//! Dense array edge map for small, contiguous alphabets.

use super::EdgeMap;
use crate::error::{TreeError, TreeResult};
use crate::tree::types::{NO_NODE, NodeIndex};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Symbols that map onto a contiguous range `0..alphabet_size`.
pub trait Alphabet: Copy + Eq {
    /// Slot index of this symbol
    fn rank(self) -> usize;
}

impl Alphabet for u8 {
    #[inline]
    fn rank(self) -> usize {
        self as usize
    }
}

impl Alphabet for u16 {
    #[inline]
    fn rank(self) -> usize {
        self as usize
    }
}

impl Alphabet for u32 {
    #[inline]
    fn rank(self) -> usize {
        self as usize
    }
}

impl Alphabet for char {
    #[inline]
    fn rank(self) -> usize {
        self as usize
    }
}

/// Configuration for [`ArrayEdgeMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    /// Number of slots per node; every symbol's rank must be below this
    pub alphabet_size: usize,
}

impl ArrayConfig {
    pub fn new(alphabet_size: usize) -> Self {
        Self { alphabet_size }
    }

    /// Full byte range (256 slots)
    pub fn bytes() -> Self {
        Self::new(256)
    }

    /// 7-bit ASCII (128 slots)
    pub fn ascii() -> Self {
        Self::new(128)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::bytes()
    }
}

/// Edge map backed by one slot per alphabet symbol.
///
/// Lookups never hash or probe, at the cost of `alphabet_size` slots per node
/// whether or not they are used.
#[derive(Debug, Clone)]
pub struct ArrayEdgeMap<S> {
    slots: Box<[NodeIndex]>,
    count: usize,
    _symbol: PhantomData<fn() -> S>,
}

impl<S: Alphabet> EdgeMap for ArrayEdgeMap<S> {
    type Symbol = S;
    type Config = ArrayConfig;

    fn new(config: &ArrayConfig) -> Self {
        Self {
            slots: vec![NO_NODE; config.alphabet_size].into_boxed_slice(),
            count: 0,
            _symbol: PhantomData,
        }
    }

    fn check_config(config: &ArrayConfig) -> TreeResult<()> {
        if config.alphabet_size == 0 {
            return Err(TreeError::EmptyAlphabet);
        }
        Ok(())
    }

    fn check_symbol(config: &ArrayConfig, position: usize, symbol: &S) -> TreeResult<()> {
        let rank = symbol.rank();
        if rank >= config.alphabet_size {
            return Err(TreeError::SymbolOutsideAlphabet {
                position,
                rank,
                alphabet_size: config.alphabet_size,
            });
        }
        Ok(())
    }

    #[inline]
    fn get_child(&self, symbol: &S) -> Option<NodeIndex> {
        match self.slots.get(symbol.rank()) {
            Some(&child) if child != NO_NODE => Some(child),
            _ => None,
        }
    }

    #[inline]
    fn set_child(&mut self, symbol: S, child: NodeIndex) {
        // Ranks are validated before any symbol reaches the tree
        debug_assert!(symbol.rank() < self.slots.len());
        let slot = &mut self.slots[symbol.rank()];
        if *slot == NO_NODE {
            self.count += 1;
        }
        *slot = child;
    }

    fn children(&self) -> Vec<NodeIndex> {
        self.slots
            .iter()
            .copied()
            .filter(|&child| child != NO_NODE)
            .collect()
    }

    #[inline]
    fn len(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut map: ArrayEdgeMap<u8> = ArrayEdgeMap::new(&ArrayConfig::bytes());
        assert!(map.is_empty());
        assert_eq!(map.get_child(&b'a'), None);

        map.set_child(b'a', 3);
        map.set_child(b'z', 7);
        assert_eq!(map.get_child(&b'a'), Some(3));
        assert_eq!(map.get_child(&b'z'), Some(7));
        assert_eq!(map.len(), 2);

        // Upsert keeps the count
        map.set_child(b'a', 9);
        assert_eq!(map.get_child(&b'a'), Some(9));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_children_in_alphabet_order() {
        let mut map: ArrayEdgeMap<u8> = ArrayEdgeMap::new(&ArrayConfig::ascii());
        map.set_child(b'n', 1);
        map.set_child(b'$', 2);
        map.set_child(b'a', 3);
        assert_eq!(map.children(), vec![2, 3, 1]);
    }

    #[test]
    fn test_lookup_outside_alphabet_is_none() {
        let map: ArrayEdgeMap<char> = ArrayEdgeMap::new(&ArrayConfig::new(4));
        assert_eq!(map.get_child(&'x'), None);
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            <ArrayEdgeMap<u8> as EdgeMap>::check_config(&ArrayConfig::new(0)),
            Err(TreeError::EmptyAlphabet)
        );
        assert!(<ArrayEdgeMap<u8> as EdgeMap>::check_config(&ArrayConfig::ascii()).is_ok());

        let err = <ArrayEdgeMap<u8> as EdgeMap>::check_symbol(&ArrayConfig::ascii(), 4, &200)
            .unwrap_err();
        assert_eq!(
            err,
            TreeError::SymbolOutsideAlphabet {
                position: 4,
                rank: 200,
                alphabet_size: 128,
            }
        );
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: ArrayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ArrayConfig::bytes());

        let config: ArrayConfig = serde_json::from_str(r#"{"alphabet_size": 4}"#).unwrap();
        assert_eq!(config.alphabet_size, 4);
    }
}
