//! Error type shared by construction and node access.

use crate::tree::types::NodeIndex;

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while building or reading a suffix tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Array edge maps need at least one symbol slot
    EmptyAlphabet,
    /// A symbol's rank does not fit the configured alphabet
    SymbolOutsideAlphabet {
        position: usize,
        rank: usize,
        alphabet_size: usize,
    },
    /// Node index past the end of the arena
    NodeOutOfBounds { index: NodeIndex, node_count: usize },
    /// An internal node was left without a suffix link
    UnresolvedSuffixLink { node: NodeIndex },
    /// A suffix link points at a leaf
    SuffixLinkToLeaf { node: NodeIndex, target: NodeIndex },
    /// A non-root edge carries an empty label
    EmptyEdge { node: NodeIndex },
    /// A leaf still carries the open-ended length
    OpenLeaf { node: NodeIndex },
    /// An edge label runs past the end of the input
    EdgeOutOfRange { node: NodeIndex },
    /// A child is stored under a symbol other than its leading one
    MisplacedChild { parent: NodeIndex, child: NodeIndex },
    /// A suffix walk found no edge for the next symbol
    MissingEdge { node: NodeIndex, position: usize },
    /// A node has no path from the root, or more than one
    UnreachableNode { node: NodeIndex },
}

impl TreeError {
    /// True for errors caused by the caller's edge-map configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            TreeError::EmptyAlphabet | TreeError::SymbolOutsideAlphabet { .. }
        )
    }

    /// True for violated tree invariants (library defects, never user input)
    pub fn is_internal(&self) -> bool {
        !self.is_config_error() && !matches!(self, TreeError::NodeOutOfBounds { .. })
    }
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::EmptyAlphabet => write!(f, "Alphabet size must be at least 1"),
            TreeError::SymbolOutsideAlphabet {
                position,
                rank,
                alphabet_size,
            } => write!(
                f,
                "Symbol at position {} has rank {}, outside alphabet of size {}",
                position, rank, alphabet_size
            ),
            TreeError::NodeOutOfBounds { index, node_count } => write!(
                f,
                "Node index {} out of bounds (tree has {} nodes)",
                index, node_count
            ),
            TreeError::UnresolvedSuffixLink { node } => {
                write!(f, "Internal error: node {} has no suffix link", node)
            }
            TreeError::SuffixLinkToLeaf { node, target } => write!(
                f,
                "Internal error: suffix link of node {} points at leaf {}",
                node, target
            ),
            TreeError::EmptyEdge { node } => {
                write!(f, "Internal error: edge into node {} is empty", node)
            }
            TreeError::OpenLeaf { node } => {
                write!(f, "Internal error: leaf {} was never finalized", node)
            }
            TreeError::EdgeOutOfRange { node } => write!(
                f,
                "Internal error: edge into node {} runs past the input",
                node
            ),
            TreeError::MisplacedChild { parent, child } => write!(
                f,
                "Internal error: child {} of node {} is keyed by the wrong symbol",
                child, parent
            ),
            TreeError::MissingEdge { node, position } => write!(
                f,
                "Internal error: no edge from node {} for symbol at position {}",
                node, position
            ),
            TreeError::UnreachableNode { node } => write!(
                f,
                "Internal error: node {} is not reachable from the root exactly once",
                node
            ),
        }
    }
}

impl std::error::Error for TreeError {}
