//! Shared helpers for integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stree::{EdgeMap, NodeIndex, ROOT, SuffixTree};

/// Full root-to-node string for every node, indexed like the arena
pub fn node_paths<M: EdgeMap>(tree: &SuffixTree<M>) -> Vec<Vec<M::Symbol>> {
    let mut paths = vec![Vec::new(); tree.node_count()];
    let mut stack: Vec<NodeIndex> = vec![ROOT];

    while let Some(index) = stack.pop() {
        for child in tree.get_children(index).unwrap() {
            let mut path = paths[index].clone();
            path.extend_from_slice(tree.label(child).unwrap());
            paths[child] = path;
            stack.push(child);
        }
    }

    paths
}

/// Root-to-leaf strings, sorted by leaf index
pub fn leaf_paths<M: EdgeMap>(tree: &SuffixTree<M>) -> Vec<Vec<M::Symbol>> {
    let paths = node_paths(tree);
    tree.leaves().map(|leaf| paths[leaf].clone()).collect()
}

/// All suffixes of `text`, longest first
pub fn suffixes<S: Clone>(text: &[S]) -> Vec<Vec<S>> {
    (0..text.len()).map(|start| text[start..].to_vec()).collect()
}

/// Walk `pattern` down from the root using only raw node access
pub fn contains<M: EdgeMap>(tree: &SuffixTree<M>, pattern: &[M::Symbol]) -> bool {
    let mut node = ROOT;
    let mut matched = 0;

    while matched < pattern.len() {
        let Some(child) = tree.get_child(node, &pattern[matched]).unwrap() else {
            return false;
        };
        for symbol in tree.label(child).unwrap() {
            if matched == pattern.len() {
                return true;
            }
            if *symbol != pattern[matched] {
                return false;
            }
            matched += 1;
        }
        node = child;
    }

    true
}

/// Seeded random bytes drawn from the first `alphabet` lowercase letters
pub fn random_text(seed: u64, len: usize, alphabet: u8) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| b'a' + rng.gen_range(0..alphabet)).collect()
}

/// `text` followed by a byte that occurs nowhere in it
pub fn terminated(mut text: Vec<u8>) -> Vec<u8> {
    debug_assert!(!text.contains(&b'$'));
    text.push(b'$');
    text
}
