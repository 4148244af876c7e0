//! Graph traversal.
//!
//! All traversal implementations in this module are **iterative**: they use
//! an explicit queue or stack instead of recursion, so traversal depth is not
//! limited by the size of the program stack even on large or degenerate
//! graphs.
//!
//! [`bfs()`] and [`dfs()`] are generic over
//! [`Neighbors`](crate::core::Neighbors) and therefore work with every
//! representation, enumerating neighbors in the representation's native
//! order. BFS distances are invariant to that order;
//! the order in which DFS discovers vertices is not specified and should not
//! be relied upon, only the final reachability set is.
//!
//! [`BfsFlow`] and [`bfs_with`] expose the breadth-first queue loop itself as
//! a template with overridable hooks, for traversals derived from BFS. The
//! full hook set is supported on the adjacency-list representation only.

pub mod bfs;
pub mod dfs;

#[doc(inline)]
pub use self::{
    bfs::{bfs, bfs_with, BfsFlow, HopLevels, ZeroOneLevels},
    dfs::dfs,
};
