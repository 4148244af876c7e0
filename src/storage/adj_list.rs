use crate::core::{
    error::{Error, Result},
    marker::VariantKind,
    Edge, EdgeSet, GraphBase, GraphMut, Neighbors, Weight,
};

/// Adjacency-list representation: one sequence of outgoing edges per vertex,
/// indexed by origin. Undirected edges are stored twice, once per direction,
/// but count once towards the size.
#[derive(Debug, Clone, PartialEq)]
pub struct ListGraph<W = i64> {
    adj: Vec<Vec<Edge<W>>>,
    size: usize,
    weighted: bool,
    directed: bool,
}

impl<W: Weight> ListGraph<W> {
    pub fn new(order: usize, weighted: bool, directed: bool) -> Self {
        Self {
            adj: vec![Vec::new(); order],
            size: 0,
            weighted,
            directed,
        }
    }

    pub fn new_undirected(order: usize) -> Self {
        Self::new(order, false, false)
    }

    pub fn new_directed(order: usize) -> Self {
        Self::new(order, false, true)
    }

    /// Raw adjacency storage, for read-only consumers.
    pub fn adjacency(&self) -> &[Vec<Edge<W>>] {
        &self.adj
    }

    /// Outgoing edge sequence of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn edges_from(&self, vertex: usize) -> &[Edge<W>] {
        &self.adj[vertex]
    }

    fn position(&self, origin: usize, dest: usize) -> Option<usize> {
        self.adj[origin].iter().position(|edge| edge.dest == dest)
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

impl<W> GraphBase for ListGraph<W> {
    fn order(&self) -> usize {
        self.adj.len()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn variant(&self) -> VariantKind {
        VariantKind::List
    }
}

impl<W: Weight> EdgeSet<W> for ListGraph<W> {
    fn is_edge(&self, origin: usize, dest: usize) -> bool {
        origin < self.order() && dest < self.order() && self.position(origin, dest).is_some()
    }

    fn edge(&self, origin: usize, dest: usize) -> Option<Edge<W>> {
        if origin >= self.order() {
            return None;
        }

        let index = self.position(origin, dest)?;
        Some(self.adj[origin][index].clone())
    }

    fn weight(&self, origin: usize, dest: usize) -> Option<&W> {
        if origin >= self.order() {
            return None;
        }

        let index = self.position(origin, dest)?;
        Some(&self.adj[origin][index].weight)
    }
}

impl<W: Weight> GraphMut<W> for ListGraph<W> {
    fn add_vertices(&mut self, amount: usize) {
        self.adj.resize_with(self.adj.len() + amount, Vec::new);
    }

    fn add_edge(&mut self, origin: usize, dest: usize, weight: W, auto_expand: bool) -> Result<()> {
        self.ensure_endpoints(origin, dest, auto_expand)?;

        let weight = if self.weighted { weight } else { W::unit() };

        if let Some(index) = self.position(origin, dest) {
            self.adj[origin][index].weight = weight.clone();

            if !self.directed && origin != dest {
                let mirror = self
                    .position(dest, origin)
                    .expect("undirected storage is symmetric");
                self.adj[dest][mirror].weight = weight;
            }

            return Ok(());
        }

        let show_weight = self.weighted;
        self.adj[origin].push(Edge::new(origin, dest, weight.clone(), show_weight));

        if !self.directed && origin != dest {
            self.adj[dest].push(Edge::new(dest, origin, weight, show_weight));
        }

        self.size += 1;
        Ok(())
    }

    fn remove_edge(&mut self, origin: usize, dest: usize) -> Result<W> {
        self.check_vertex(origin)?;
        self.check_vertex(dest)?;

        let index = self
            .position(origin, dest)
            .ok_or(Error::NoSuchEdge { origin, dest })?;

        let removed = self.adj[origin].remove(index);

        if !self.directed && origin != dest {
            let mirror = self
                .position(dest, origin)
                .expect("undirected storage is symmetric");
            self.adj[dest].remove(mirror);
        }

        self.size -= 1;
        Ok(removed.weight)
    }

    fn set_weight(&mut self, origin: usize, dest: usize, weight: W) -> Result<()> {
        self.check_vertex(origin)?;
        self.check_vertex(dest)?;

        let index = self
            .position(origin, dest)
            .ok_or(Error::NoSuchEdge { origin, dest })?;

        self.adj[origin][index].weight = weight.clone();

        if !self.directed && origin != dest {
            let mirror = self
                .position(dest, origin)
                .expect("undirected storage is symmetric");
            self.adj[dest][mirror].weight = weight;
        }

        Ok(())
    }

    fn clear(&mut self) {
        for edges in self.adj.iter_mut() {
            edges.clear();
        }

        self.size = 0;
    }

    fn reset(&mut self) {
        self.adj.clear();
        self.size = 0;
    }
}

impl<W> Neighbors<W> for ListGraph<W> {
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
        Ok(OutgoingIter(self.adj[vertex].iter()))
    }

    fn incoming(&self, vertex: usize) -> Result<Self::IncomingIter<'_>> {
        self.check_vertex(vertex)?;

        Ok(IncomingIter {
            dest: vertex,
            rows: self.adj.iter(),
            row: &[],
        })
    }

    fn out_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adj[vertex].len())
    }

    fn in_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;

        Ok(self
            .adj
            .iter()
            .flatten()
            .filter(|edge| edge.dest == vertex)
            .count())
    }
}

pub struct OutgoingIter<'a, W>(std::slice::Iter<'a, Edge<W>>);

impl<'a, W> Iterator for OutgoingIter<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|edge| (edge.dest, &edge.weight))
    }
}

pub struct IncomingIter<'a, W> {
    dest: usize,
    rows: std::slice::Iter<'a, Vec<Edge<W>>>,
    row: &'a [Edge<W>],
}

impl<'a, W> Iterator for IncomingIter<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some((edge, rest)) = self.row.split_first() {
                self.row = rest;

                if edge.dest == self.dest {
                    return Some((edge.origin, &edge.weight));
                }
            }

            self.row = self.rows.next()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn undirected_edge_is_mirrored() {
        let mut graph = ListGraph::<i64>::new_undirected(3);

        graph.add_edge(0, 1, 1, false).unwrap();

        assert!(graph.is_edge(0, 1));
        assert!(graph.is_edge(1, 0));
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.weight(0, 1), graph.weight(1, 0));
    }

    #[test]
    fn duplicate_insert_updates_weight_in_place() {
        let mut graph = ListGraph::new(2, true, false);

        graph.add_edge(0, 1, 3, false).unwrap();
        graph.add_edge(0, 1, 9, false).unwrap();

        assert_eq!(graph.size(), 1);
        assert_eq!(graph.weight(0, 1), Some(&9));
        assert_eq!(graph.weight(1, 0), Some(&9));
    }

    #[test]
    fn unweighted_graph_stores_unit_weight() {
        let mut graph = ListGraph::new_directed(2);

        graph.add_edge(0, 1, 42, false).unwrap();

        assert_eq!(graph.weight(0, 1), Some(&1));
    }

    #[test]
    fn remove_edge_undoes_add_edge() {
        let mut graph = ListGraph::<i64>::new_undirected(3);

        graph.add_edge(0, 1, 1, false).unwrap();
        graph.add_edge(1, 2, 1, false).unwrap();

        assert_eq!(graph.remove_edge(0, 1).unwrap(), 1);
        assert!(!graph.is_edge(0, 1));
        assert!(!graph.is_edge(1, 0));
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn remove_missing_edge_leaves_graph_untouched() {
        let mut graph = ListGraph::<i64>::new_undirected(3);

        graph.add_edge(0, 1, 1, false).unwrap();
        let snapshot = graph.clone();

        assert_matches!(
            graph.remove_edge(1, 2),
            Err(Error::NoSuchEdge { origin: 1, dest: 2 })
        );
        assert_eq!(graph, snapshot);
    }

    #[test]
    fn add_edge_out_of_range_without_expand() {
        let mut graph = ListGraph::<i64>::new_directed(2);

        assert_matches!(
            graph.add_edge(0, 5, 1, false),
            Err(Error::OutOfRange { vertex: 5, order: 2 })
        );
        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn add_edge_auto_expands_to_fit() {
        let mut graph = ListGraph::<i64>::new_directed(2);

        graph.add_edge(0, 5, 1, true).unwrap();

        assert_eq!(graph.order(), 6);
        assert!(graph.is_edge(0, 5));
    }

    #[test]
    fn set_weight_requires_existing_edge() {
        let mut graph = ListGraph::new(2, true, true);

        assert_matches!(graph.set_weight(0, 1, 5), Err(Error::NoSuchEdge { .. }));

        graph.add_edge(0, 1, 1, false).unwrap();
        graph.set_weight(0, 1, 5).unwrap();

        assert_eq!(graph.weight(0, 1), Some(&5));
    }

    #[test]
    fn degrees_directed() {
        let mut graph = ListGraph::<i64>::new_directed(3);

        graph.add_edge(0, 1, 1, false).unwrap();
        graph.add_edge(2, 1, 1, false).unwrap();
        graph.add_edge(1, 2, 1, false).unwrap();

        assert_eq!(graph.out_degree(1).unwrap(), 1);
        assert_eq!(graph.in_degree(1).unwrap(), 2);
        assert_eq!(graph.degree(1).unwrap(), 3);
    }

    #[test]
    fn degrees_undirected() {
        let mut graph = ListGraph::<i64>::new_undirected(3);

        graph.add_edge(0, 1, 1, false).unwrap();
        graph.add_edge(1, 2, 1, false).unwrap();

        assert_eq!(graph.out_degree(1).unwrap(), 2);
        assert_eq!(graph.degree(1).unwrap(), 2);
    }

    #[test]
    fn incoming_scans_all_sequences() {
        let mut graph = ListGraph::<i64>::new_directed(4);

        graph.add_edge(0, 2, 1, false).unwrap();
        graph.add_edge(1, 2, 1, false).unwrap();
        graph.add_edge(3, 2, 1, false).unwrap();

        let origins: Vec<_> = graph.incoming(2).unwrap().map(|(origin, _)| origin).collect();
        assert_eq!(origins, vec![0, 1, 3]);
    }

    #[test]
    fn clear_keeps_order_reset_drops_it() {
        let mut graph = ListGraph::<i64>::new_undirected(3);
        graph.add_edge(0, 1, 1, false).unwrap();

        graph.clear();
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 0);

        graph.add_edge(0, 1, 1, false).unwrap();
        graph.reset();
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn query_out_of_range_vertex_fails() {
        let graph = ListGraph::<i64>::new_undirected(2);

        assert_matches!(
            graph.outgoing(2).map(|_| ()),
            Err(Error::OutOfRange { vertex: 2, order: 2 })
        );
        assert!(!graph.is_edge(0, 9));
    }
}
