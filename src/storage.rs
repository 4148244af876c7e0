//! The graph representation variants.
//!
//! A representation implements the traits from the [`core`](crate::core)
//! module to provide the shared capability set; algorithms stay generic over
//! those traits while neighbor enumeration and edge lookup run at whatever
//! complexity the representation offers.
//!
//! The available representations are:
//!
//! * [Adjacency list](adj_list): fast neighbor iteration, compact for
//!   sparse graphs.
//! * [Adjacency matrix](adj_matrix): constant-time edge lookup and update,
//!   suited for dense graphs.
//! * [Successor array](successor): functional graphs with at most one
//!   outgoing edge per vertex.
//!
//! Their properties are summarized in the table below (`V` order, `E` size,
//! `d` degree):
//!
//! |                | **[ListGraph]** | **[MatrixGraph]** | **[SuccessorGraph]** |
//! |----------------|-----------------|-------------------|----------------------|
//! | add vertex     | _O(1)_          | _O(V²)_           | _O(1)_               |
//! | add edge       | _O(d)_          | _O(1)_            | _O(1)_               |
//! | lookup edge    | _O(d)_          | _O(1)_            | _O(1)_               |
//! | outgoing       | _O(1)_ handle   | _O(V)_ scan       | _O(1)_               |
//! | incoming       | _O(E)_ scan     | _O(V)_ scan       | _O(V)_ scan          |
//! | out degree     | _O(1)_          | _O(V)_            | _O(1)_               |
//! | in degree      | _O(E)_          | _O(V)_            | _O(V)_               |

pub mod adj_list;
pub mod adj_matrix;
pub mod successor;

#[doc(inline)]
pub use self::{adj_list::ListGraph, adj_matrix::MatrixGraph, successor::SuccessorGraph};
