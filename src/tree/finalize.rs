//! Leaf length finalization
//!
//! During construction every leaf carries [`OPEN`] as its length. Once the
//! input is complete, one sweep over all suffixes (longest first) walks each
//! suffix down from the active point with the same skip-count technique as
//! the builder, and gives the leaf it ends on its exact length.

use super::types::*;
use crate::edge_map::EdgeMap;
use crate::error::{TreeError, TreeResult};

/// Replace the open length on every leaf. Returns the number of leaves
/// closed.
///
/// Without a unique terminator some suffixes end inside an edge that is
/// already fixed, or exactly at an internal node; those leave the arena
/// untouched.
pub(crate) fn close_leaves<M: EdgeMap>(
    text: &[M::Symbol],
    nodes: &mut [Node<M>],
) -> TreeResult<usize> {
    let n = text.len();
    let mut node = ROOT;
    // Symbols of the current suffix below `node`
    let mut left = n;
    let mut closed = 0;

    for _ in 0..n {
        let target = loop {
            if left == 0 {
                break None;
            }
            let position = n - left;
            let child = nodes[node]
                .children
                .get_child(&text[position])
                .ok_or(TreeError::MissingEdge { node, position })?;
            let length = nodes[child].length;
            if length > left {
                break Some(child);
            }
            left -= length;
            node = child;
        };

        if let Some(leaf) = target {
            if nodes[leaf].is_open() {
                nodes[leaf].length = left;
                closed += 1;
            }
        }

        if node == ROOT {
            left -= 1;
        } else {
            let link = nodes[node].suffix_link;
            if link == NO_NODE {
                return Err(TreeError::UnresolvedSuffixLink { node });
            }
            node = link;
        }
    }

    Ok(closed)
}
