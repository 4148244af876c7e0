use crate::core::{base::GraphBase, error::Result};

/// Neighbor enumeration in each representation's native order.
///
/// The complexity of these operations depends on the representation; see the
/// table in the [`storage`](crate::storage) module. Traversal algorithms are
/// generic over this trait, so neighbor enumeration dispatches to whatever
/// the representation does best.
pub trait Neighbors<W>: GraphBase {
    type OutgoingIter<'a>: Iterator<Item = (usize, &'a W)>
    where
        Self: 'a,
        W: 'a;

    type IncomingIter<'a>: Iterator<Item = (usize, &'a W)>
    where
        Self: 'a,
        W: 'a;

    /// Iterates over `(dest, weight)` pairs of edges leaving `vertex`.
    fn outgoing(&self, vertex: usize) -> Result<Self::OutgoingIter<'_>>;

    /// Iterates over `(origin, weight)` pairs of edges entering `vertex`.
    fn incoming(&self, vertex: usize) -> Result<Self::IncomingIter<'_>>;

    fn out_degree(&self, vertex: usize) -> Result<usize>;

    fn in_degree(&self, vertex: usize) -> Result<usize>;

    /// `in_degree + out_degree` for directed graphs. For undirected graphs
    /// the in-degree term is dropped, because outgoing storage already
    /// reflects symmetric edges.
    fn degree(&self, vertex: usize) -> Result<usize> {
        let out = self.out_degree(vertex)?;

        if self.is_directed() {
            Ok(out + self.in_degree(vertex)?)
        } else {
            Ok(out)
        }
    }
}
