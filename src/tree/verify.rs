//! Post-build consistency check
//!
//! Runs once on the finalized arena before a [`SuffixTree`] is handed out.
//! Anything caught here is a construction defect, reported as an internal
//! [`TreeError`] instead of a silently corrupt tree.
//!
//! [`SuffixTree`]: super::reader::SuffixTree

use super::types::*;
use crate::edge_map::EdgeMap;
use crate::error::{TreeError, TreeResult};

/// Check structural invariants of a finalized arena.
///
/// - the root is empty and never a child
/// - every non-root edge is closed, non-empty and inside the input
/// - every leaf runs to the end of the input
/// - every child is keyed by its leading symbol
/// - every non-root node has exactly one parent
/// - every internal node links to the root or to another internal node
pub(crate) fn check_arena<M: EdgeMap>(text: &[M::Symbol], nodes: &[Node<M>]) -> TreeResult<()> {
    let n = text.len();
    let mut parents = vec![0usize; nodes.len()];

    for (index, node) in nodes.iter().enumerate() {
        for child in node.children.children() {
            let misplaced = TreeError::MisplacedChild {
                parent: index,
                child,
            };
            if child == ROOT || child >= nodes.len() {
                return Err(misplaced);
            }
            let leading = text.get(nodes[child].start).ok_or(misplaced.clone())?;
            if node.children.get_child(leading) != Some(child) {
                return Err(misplaced);
            }
            parents[child] += 1;
        }

        if index == ROOT {
            if node.start != 0 || node.length != 0 {
                return Err(TreeError::EdgeOutOfRange { node: ROOT });
            }
            continue;
        }

        if node.is_open() {
            return Err(TreeError::OpenLeaf { node: index });
        }
        if node.length == 0 {
            return Err(TreeError::EmptyEdge { node: index });
        }
        let end = node.start + node.length;
        if end > n {
            return Err(TreeError::EdgeOutOfRange { node: index });
        }

        if node.children.is_empty() {
            if end != n {
                return Err(TreeError::EdgeOutOfRange { node: index });
            }
            continue;
        }

        let link = node.suffix_link;
        if link == NO_NODE || link >= nodes.len() {
            return Err(TreeError::UnresolvedSuffixLink { node: index });
        }
        if link != ROOT && nodes[link].children.is_empty() {
            return Err(TreeError::SuffixLinkToLeaf {
                node: index,
                target: link,
            });
        }
    }

    if let Some(node) = parents.iter().skip(1).position(|&count| count != 1) {
        return Err(TreeError::UnreachableNode { node: node + 1 });
    }

    Ok(())
}
