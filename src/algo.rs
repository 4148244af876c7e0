//! Algorithms operating generically over the graph representations.
//!
//! * [Cycle detection](cycle) for directed, undirected and functional
//!   graphs.
//! * [Component labeling](connected) derived from the customizable BFS
//!   template.

pub mod connected;
pub mod cycle;

#[doc(inline)]
pub use self::{
    connected::connected_components,
    cycle::{has_cycle, has_cycle_functional},
};
