use crate::core::{
    error::{Error, Result},
    marker::VariantKind,
    Edge, EdgeSet, GraphBase, GraphMut, Neighbors, Weight,
};

/// Functional-graph representation: an order-length array where each slot
/// holds at most one outgoing edge. Adding an edge to a vertex that already
/// has one retargets it instead of duplicating, so `out_degree(v)` is always
/// 0 or 1. Successor graphs are inherently directed.
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessorGraph<W = i64> {
    succ: Vec<Option<Edge<W>>>,
    size: usize,
    weighted: bool,
}

impl<W: Weight> SuccessorGraph<W> {
    pub fn new(order: usize, weighted: bool) -> Self {
        Self {
            succ: vec![None; order],
            size: 0,
            weighted,
        }
    }

    pub fn new_unweighted(order: usize) -> Self {
        Self::new(order, false)
    }

    /// Raw successor storage, for read-only consumers.
    pub fn successors(&self) -> &[Option<Edge<W>>] {
        &self.succ
    }

    /// Destination of the outgoing edge of `vertex`, if it has one.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn successor(&self, vertex: usize) -> Option<usize> {
        self.succ[vertex].as_ref().map(|edge| edge.dest)
    }

    /// Retargets the existing outgoing edge of `origin` to `dest`, keeping
    /// its weight.
    pub fn move_edge(&mut self, origin: usize, dest: usize) -> Result<()> {
        self.check_vertex(origin)?;
        self.check_vertex(dest)?;

        match self.succ[origin].as_mut() {
            Some(edge) => {
                edge.dest = dest;
                Ok(())
            }
            None => Err(Error::NoOutgoingEdge { vertex: origin }),
        }
    }

    /// Returns `true` if every vertex has an outgoing edge.
    pub fn is_functional(&self) -> bool {
        self.succ.iter().all(Option::is_some)
    }

    /// Weight of the sole outgoing edge of `vertex`.
    pub fn outgoing_weight(&self, vertex: usize) -> Result<&W> {
        self.check_vertex(vertex)?;

        self.succ[vertex]
            .as_ref()
            .map(|edge| &edge.weight)
            .ok_or(Error::NoOutgoingEdge { vertex })
    }

    fn ensure_endpoints(&mut self, origin: usize, dest: usize, auto_expand: bool) -> Result<()> {
        let order = self.order();

        if origin < order && dest < order {
            return Ok(());
        }

        if !auto_expand {
            let vertex = if origin >= order { origin } else { dest };
            return Err(Error::OutOfRange { vertex, order });
        }

        self.add_vertices(origin.max(dest) + 1 - order);
        Ok(())
    }
}

impl<W> GraphBase for SuccessorGraph<W> {
    fn order(&self) -> usize {
        self.succ.len()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn variant(&self) -> VariantKind {
        VariantKind::Successor
    }
}

impl<W: Weight> EdgeSet<W> for SuccessorGraph<W> {
    fn is_edge(&self, origin: usize, dest: usize) -> bool {
        origin < self.order() && self.successor(origin) == Some(dest)
    }

    fn edge(&self, origin: usize, dest: usize) -> Option<Edge<W>> {
        if self.is_edge(origin, dest) {
            self.succ[origin].clone()
        } else {
            None
        }
    }

    fn weight(&self, origin: usize, dest: usize) -> Option<&W> {
        if self.is_edge(origin, dest) {
            self.succ[origin].as_ref().map(|edge| &edge.weight)
        } else {
            None
        }
    }
}

impl<W: Weight> GraphMut<W> for SuccessorGraph<W> {
    fn add_vertices(&mut self, amount: usize) {
        self.succ.resize_with(self.succ.len() + amount, || None);
    }

    /// A vertex that already has an outgoing edge gets it retargeted to
    /// `dest` and reweighted; the edge is never duplicated.
    fn add_edge(&mut self, origin: usize, dest: usize, weight: W, auto_expand: bool) -> Result<()> {
        self.ensure_endpoints(origin, dest, auto_expand)?;

        let weight = if self.weighted { weight } else { W::unit() };

        match self.succ[origin].as_mut() {
            Some(edge) => {
                edge.dest = dest;
                edge.weight = weight;
            }
            None => {
                self.succ[origin] = Some(Edge::new(origin, dest, weight, self.weighted));
                self.size += 1;
            }
        }

        Ok(())
    }

    fn remove_edge(&mut self, origin: usize, dest: usize) -> Result<W> {
        self.check_vertex(origin)?;
        self.check_vertex(dest)?;

        if self.successor(origin) != Some(dest) {
            return Err(Error::NoSuchEdge { origin, dest });
        }

        let removed = self.succ[origin].take().expect("edge existence checked");
        self.size -= 1;
        Ok(removed.weight)
    }

    fn set_weight(&mut self, origin: usize, dest: usize, weight: W) -> Result<()> {
        self.check_vertex(origin)?;
        self.check_vertex(dest)?;

        match self.succ[origin].as_mut() {
            Some(edge) if edge.dest == dest => {
                edge.weight = weight;
                Ok(())
            }
            _ => Err(Error::NoSuchEdge { origin, dest }),
        }
    }

    fn clear(&mut self) {
        for slot in self.succ.iter_mut() {
            *slot = None;
        }

        self.size = 0;
    }

    fn reset(&mut self) {
        self.succ.clear();
        self.size = 0;
    }
}

impl<W> Neighbors<W> for SuccessorGraph<W> {
    type OutgoingIter<'a> = OutgoingIter<'a, W>
    where
        Self: 'a,
        W: 'a;

    type IncomingIter<'a> = IncomingIter<'a, W>
    where
        Self: 'a,
        W: 'a;

    fn outgoing(&self, vertex: usize) -> Result<Self::OutgoingIter<'_>> {
        self.check_vertex(vertex)?;
        Ok(OutgoingIter(self.succ[vertex].as_ref()))
    }

    fn incoming(&self, vertex: usize) -> Result<Self::IncomingIter<'_>> {
        self.check_vertex(vertex)?;

        Ok(IncomingIter {
            slots: self.succ.iter(),
            dest: vertex,
        })
    }

    fn out_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(usize::from(self.succ[vertex].is_some()))
    }

    fn in_degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.incoming(vertex)?.count())
    }
}

pub struct OutgoingIter<'a, W>(Option<&'a Edge<W>>);

impl<'a, W> Iterator for OutgoingIter<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.take().map(|edge| (edge.dest, &edge.weight))
    }
}

pub struct IncomingIter<'a, W> {
    slots: std::slice::Iter<'a, Option<Edge<W>>>,
    dest: usize,
}

impl<'a, W> Iterator for IncomingIter<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .flatten()
            .find(|edge| edge.dest == self.dest)
            .map(|edge| (edge.origin, &edge.weight))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn add_edge_retargets_instead_of_duplicating() {
        let mut graph = SuccessorGraph::new(3, true);

        graph.add_edge(0, 1, 4, false).unwrap();
        graph.add_edge(0, 2, 9, false).unwrap();

        assert_eq!(graph.size(), 1);
        assert_eq!(graph.successor(0), Some(2));
        assert_eq!(graph.out_degree(0).unwrap(), 1);
        assert_eq!(graph.weight(0, 2), Some(&9));
        assert!(!graph.is_edge(0, 1));
    }

    #[test]
    fn move_edge_keeps_weight() {
        let mut graph = SuccessorGraph::new(3, true);

        graph.add_edge(0, 1, 4, false).unwrap();
        graph.move_edge(0, 2).unwrap();

        assert_eq!(graph.successor(0), Some(2));
        assert_eq!(graph.outgoing_weight(0).unwrap(), &4);
    }

    #[test]
    fn move_edge_requires_outgoing_edge() {
        let mut graph = SuccessorGraph::<i64>::new_unweighted(3);

        assert_matches!(
            graph.move_edge(0, 1),
            Err(Error::NoOutgoingEdge { vertex: 0 })
        );
        assert_matches!(graph.move_edge(9, 1), Err(Error::OutOfRange { .. }));

        graph.add_edge(0, 1, 1, false).unwrap();
        assert_matches!(graph.move_edge(0, 9), Err(Error::OutOfRange { .. }));
    }

    #[test]
    fn functional_when_every_vertex_has_successor() {
        let mut graph = SuccessorGraph::<i64>::new_unweighted(3);

        graph.add_edge(0, 1, 1, false).unwrap();
        graph.add_edge(1, 2, 1, false).unwrap();
        assert!(!graph.is_functional());

        graph.add_edge(2, 0, 1, false).unwrap();
        assert!(graph.is_functional());
    }

    #[test]
    fn outgoing_weight_without_destination() {
        let mut graph = SuccessorGraph::new(2, true);

        assert_matches!(
            graph.outgoing_weight(0),
            Err(Error::NoOutgoingEdge { vertex: 0 })
        );

        graph.add_edge(0, 1, 3, false).unwrap();
        assert_eq!(graph.outgoing_weight(0).unwrap(), &3);
    }

    #[test]
    fn remove_edge_validates_destination() {
        let mut graph = SuccessorGraph::<i64>::new_unweighted(3);

        graph.add_edge(0, 1, 1, false).unwrap();

        assert_matches!(
            graph.remove_edge(0, 2),
            Err(Error::NoSuchEdge { origin: 0, dest: 2 })
        );
        assert_eq!(graph.size(), 1);

        assert_eq!(graph.remove_edge(0, 1).unwrap(), 1);
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.successor(0), None);
    }

    #[test]
    fn incoming_scans_all_slots() {
        let mut graph = SuccessorGraph::<i64>::new_unweighted(4);

        graph.add_edge(0, 2, 1, false).unwrap();
        graph.add_edge(1, 2, 1, false).unwrap();
        graph.add_edge(3, 0, 1, false).unwrap();

        let origins: Vec<_> = graph.incoming(2).unwrap().map(|(origin, _)| origin).collect();
        assert_eq!(origins, vec![0, 1]);
        assert_eq!(graph.in_degree(2).unwrap(), 2);
    }
}
