//! Child-edge lookup strategies
//!
//! Every tree node owns one edge map that answers "which child does the edge
//! starting with this symbol lead to". The builder and finalizer only talk to
//! the [`EdgeMap`] trait, so strategies can be swapped without touching the
//! algorithm.
//!
//! ## Strategies
//!
//! - [`ArrayEdgeMap`]: dense slot array indexed by [`Alphabet::rank`].
//!   O(1) worst-case lookup, memory proportional to the alphabet size.
//! - [`HashEdgeMap`]: hash map keyed by the symbol itself (`ahash` by default).
//!   O(1) expected lookup, memory proportional to the number of children.
//! - [`FxEdgeMap`]: [`HashEdgeMap`] over the Fx hasher, cheaper for small
//!   integer-like symbols.
//!
//! Both produce identical tree topology for the same input; only the order
//! returned by [`EdgeMap::children`] differs.

pub mod array;
pub mod hash;

pub use array::{Alphabet, ArrayConfig, ArrayEdgeMap};
pub use hash::{FxEdgeMap, HashEdgeMap};

use crate::error::TreeResult;
use crate::tree::types::NodeIndex;

/// Capability mapping a leading symbol to a child node index.
pub trait EdgeMap: Sized {
    /// Symbol type stored in the tree's input
    type Symbol: Clone + Eq;

    /// Setup data shared by every node's map (e.g. alphabet size)
    type Config;

    /// Create an empty map for a freshly allocated node
    fn new(config: &Self::Config) -> Self;

    /// Reject configurations that cannot build any tree
    fn check_config(_config: &Self::Config) -> TreeResult<()> {
        Ok(())
    }

    /// Reject a symbol this strategy cannot index under `config`.
    ///
    /// Called for every input symbol before it reaches the tree.
    fn check_symbol(
        _config: &Self::Config,
        _position: usize,
        _symbol: &Self::Symbol,
    ) -> TreeResult<()> {
        Ok(())
    }

    /// Child reached by the edge starting with `symbol`
    fn get_child(&self, symbol: &Self::Symbol) -> Option<NodeIndex>;

    /// Insert or replace the child keyed by `symbol`
    fn set_child(&mut self, symbol: Self::Symbol, child: NodeIndex);

    /// All child indices, in strategy-defined order
    fn children(&self) -> Vec<NodeIndex>;

    /// Number of children
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
