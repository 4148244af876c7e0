//! Graph data structures with multiple representations (adjacency list,
//! adjacency matrix and single-successor functional graphs) behind one
//! capability interface, with traversal and cycle detection operating
//! generically across them.
//!
//! See [`storage`] for the representations and their trade-offs, [`visit`]
//! for traversal, [`algo`] for algorithms and [`graph::Graph`] for the
//! runtime-selected sum of all representations.

pub mod algo;
pub mod core;
pub mod graph;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{EdgeSet, GraphBase, GraphMut, Neighbors, Weight},
        graph::Graph,
        storage::{ListGraph, MatrixGraph, SuccessorGraph},
    };
}
