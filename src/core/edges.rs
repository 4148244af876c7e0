use crate::core::{base::GraphBase, edge::Edge, error::Result, weight::Weight};

/// Edge queries available on every representation.
pub trait EdgeSet<W: Weight>: GraphBase {
    /// Returns `true` if the edge `(origin, dest)` exists. Out-of-range
    /// endpoints yield `false` rather than an error.
    fn is_edge(&self, origin: usize, dest: usize) -> bool;

    /// Returns the edge `(origin, dest)`, if present.
    fn edge(&self, origin: usize, dest: usize) -> Option<Edge<W>>;

    /// Returns a reference to the weight of the edge `(origin, dest)`, if
    /// present.
    fn weight(&self, origin: usize, dest: usize) -> Option<&W>;
}

/// Mutations available on every representation.
///
/// No operation leaves the graph partially updated: mirrored writes for
/// undirected graphs either complete on both sides or fail before touching
/// anything.
pub trait GraphMut<W: Weight>: EdgeSet<W> {
    /// Appends `amount` isolated vertices. Vertices only ever grow; they are
    /// never removed or renumbered.
    fn add_vertices(&mut self, amount: usize);

    /// Inserts the edge `(origin, dest)`.
    ///
    /// If the edge already exists, its weight is updated in place (in both
    /// directions for undirected graphs) and the size is unchanged. Endpoints
    /// beyond the current order grow the graph to fit when `auto_expand` is
    /// set and fail with [`OutOfRange`](crate::core::Error::OutOfRange)
    /// otherwise. Unweighted graphs store [`Weight::unit`] regardless of
    /// `weight`.
    fn add_edge(&mut self, origin: usize, dest: usize, weight: W, auto_expand: bool) -> Result<()>;

    /// Removes the edge `(origin, dest)` and returns its weight, undoing the
    /// mirrored entry for undirected graphs.
    fn remove_edge(&mut self, origin: usize, dest: usize) -> Result<W>;

    /// Replaces the weight of the existing edge `(origin, dest)`, mirrored
    /// for undirected graphs.
    fn set_weight(&mut self, origin: usize, dest: usize, weight: W) -> Result<()>;

    /// Removes all edges, keeping the vertices.
    fn clear(&mut self);

    /// Removes all edges and all vertices.
    fn reset(&mut self);

    /// Inserts edges from an iterator of `(origin, dest, weight)` triples,
    /// growing the graph to fit their endpoints.
    fn extend_with_edges<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        for (origin, dest, weight) in iter {
            self.add_edge(origin, dest, weight, true)?;
        }

        Ok(())
    }
}
