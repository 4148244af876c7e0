use crate::core::{
    error::{Error, Result},
    marker::VariantKind,
};

/// Properties shared by every graph representation.
pub trait GraphBase {
    /// Number of vertices.
    fn order(&self) -> usize;

    /// Number of logical edges. An undirected edge counts once even though
    /// list-based storage holds two physical entries.
    fn size(&self) -> usize;

    fn is_directed(&self) -> bool;

    fn is_weighted(&self) -> bool;

    fn variant(&self) -> VariantKind;

    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.order()
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                order: self.order(),
            })
        }
    }
}
