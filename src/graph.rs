//! The closed sum over the representation variants and the name-keyed
//! construction façade.

use crate::{
    algo,
    core::{
        error::Result, marker::VariantKind, Edge, EdgeSet, Error, GraphBase, GraphMut, Neighbors,
        Weight,
    },
    storage::{adj_list, adj_matrix, successor, ListGraph, MatrixGraph, SuccessorGraph},
    visit::{self, BfsFlow},
};

macro_rules! dispatch {
    ($self:expr, $inner:pat => $body:expr) => {
        match $self {
            Graph::List($inner) => $body,
            Graph::Matrix($inner) => $body,
            Graph::Successor($inner) => $body,
        }
    };
}

/// A graph in any of the available representations.
///
/// `Graph` implements the same capability traits as the representations
/// themselves by delegation, and dispatches algorithms to whatever the
/// chosen representation supports best.
///
/// # Examples
///
/// ```
/// use trigraph::{core::{GraphBase, GraphMut}, graph::Graph};
///
/// let mut graph = Graph::<i64>::new("matrix", 3, false, true)?;
///
/// graph.add_edge(0, 1, 1, false)?;
/// graph.add_edge(1, 2, 1, false)?;
///
/// assert_eq!(graph.size(), 2);
/// assert_eq!(graph.bfs(0)?, vec![0, 1, 2]);
/// # Ok::<(), trigraph::core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Graph<W = i64> {
    List(ListGraph<W>),
    Matrix(MatrixGraph<W>),
    Successor(SuccessorGraph<W>),
}

impl<W: Weight> Graph<W> {
    /// Selects a representation by its string key (`"list"`, `"matrix"` or
    /// `"successor"`) and forwards the constructor arguments.
    ///
    /// Successor graphs are inherently directed; their `directed` argument
    /// is ignored. Unrecognized keys fail with
    /// [`UnknownVariant`](Error::UnknownVariant).
    pub fn new(variant: &str, order: usize, weighted: bool, directed: bool) -> Result<Self> {
        match variant.parse::<VariantKind>()? {
            VariantKind::List => Ok(Graph::List(ListGraph::new(order, weighted, directed))),
            VariantKind::Matrix => Ok(Graph::Matrix(MatrixGraph::new(order, weighted, directed))),
            VariantKind::Successor => Ok(Graph::Successor(SuccessorGraph::new(order, weighted))),
        }
    }

    pub fn as_list(&self) -> Option<&ListGraph<W>> {
        match self {
            Graph::List(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&MatrixGraph<W>> {
        match self {
            Graph::Matrix(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn as_successor(&self) -> Option<&SuccessorGraph<W>> {
        match self {
            Graph::Successor(graph) => Some(graph),
            _ => None,
        }
    }

    /// Breadth-first hop counts from `anchor`; see [`visit::bfs()`].
    pub fn bfs(&self, anchor: usize) -> Result<Vec<i64>> {
        dispatch!(self, graph => visit::bfs(graph, anchor))
    }

    /// Depth-first reachability from `anchor`; see [`visit::dfs()`].
    pub fn dfs(&self, anchor: usize) -> Result<Vec<bool>> {
        dispatch!(self, graph => visit::dfs(graph, anchor))
    }

    /// Returns `true` if the graph contains a cycle, using the chain-walking
    /// specialization for successor graphs.
    pub fn has_cycle(&self) -> bool {
        match self {
            Graph::List(graph) => algo::has_cycle(graph),
            Graph::Matrix(graph) => algo::has_cycle(graph),
            Graph::Successor(graph) => algo::has_cycle_functional(graph),
        }
    }

    /// Runs the customizable breadth-first template; supported on the list
    /// representation only.
    pub fn bfs_with<F>(&self, anchor: usize, flow: F) -> Result<F::Output>
    where
        F: BfsFlow<W>,
    {
        match self {
            Graph::List(graph) => visit::bfs_with(graph, anchor, flow),
            _ => Err(Error::Unsupported {
                operation: "customizable bfs",
                variant: self.variant(),
            }),
        }
    }

    /// Labels vertices by component; supported on the list representation
    /// only.
    pub fn connected_components(&self) -> Result<Vec<usize>> {
        match self {
            Graph::List(graph) => Ok(algo::connected_components(graph)),
            _ => Err(Error::Unsupported {
                operation: "component labeling",
                variant: self.variant(),
            }),
        }
    }

    /// Retargets an existing outgoing edge; supported on the successor
    /// representation only.
    pub fn move_edge(&mut self, origin: usize, dest: usize) -> Result<()> {
        match self {
            Graph::Successor(graph) => graph.move_edge(origin, dest),
            _ => Err(Error::Unsupported {
                operation: "move_edge",
                variant: self.variant(),
            }),
        }
    }
}

impl<W> GraphBase for Graph<W> {
    fn order(&self) -> usize {
        dispatch!(self, graph => graph.order())
    }

    fn size(&self) -> usize {
        dispatch!(self, graph => graph.size())
    }

    fn is_directed(&self) -> bool {
        dispatch!(self, graph => graph.is_directed())
    }

    fn is_weighted(&self) -> bool {
        dispatch!(self, graph => graph.is_weighted())
    }

    fn variant(&self) -> VariantKind {
        dispatch!(self, graph => graph.variant())
    }
}

impl<W: Weight> EdgeSet<W> for Graph<W> {
    fn is_edge(&self, origin: usize, dest: usize) -> bool {
        dispatch!(self, graph => graph.is_edge(origin, dest))
    }

    fn edge(&self, origin: usize, dest: usize) -> Option<Edge<W>> {
        dispatch!(self, graph => graph.edge(origin, dest))
    }

    fn weight(&self, origin: usize, dest: usize) -> Option<&W> {
        dispatch!(self, graph => graph.weight(origin, dest))
    }
}

impl<W: Weight> GraphMut<W> for Graph<W> {
    fn add_vertices(&mut self, amount: usize) {
        dispatch!(self, graph => graph.add_vertices(amount))
    }

    fn add_edge(&mut self, origin: usize, dest: usize, weight: W, auto_expand: bool) -> Result<()> {
        dispatch!(self, graph => graph.add_edge(origin, dest, weight, auto_expand))
    }

    fn remove_edge(&mut self, origin: usize, dest: usize) -> Result<W> {
        dispatch!(self, graph => graph.remove_edge(origin, dest))
    }

    fn set_weight(&mut self, origin: usize, dest: usize, weight: W) -> Result<()> {
        dispatch!(self, graph => graph.set_weight(origin, dest, weight))
    }

    fn clear(&mut self) {
        dispatch!(self, graph => graph.clear())
    }

    fn reset(&mut self) {
        dispatch!(self, graph => graph.reset())
    }
}

impl<W> Neighbors<W> for Graph<W> {
    type OutgoingIter<'a> = OutgoingIter<'a, W>
    where
        Self: 'a,
        W: 'a;

    type IncomingIter<'a> = IncomingIter<'a, W>
    where
        Self: 'a,
        W: 'a;

    fn outgoing(&self, vertex: usize) -> Result<Self::OutgoingIter<'_>> {
        match self {
            Graph::List(graph) => graph.outgoing(vertex).map(OutgoingIter::List),
            Graph::Matrix(graph) => graph.outgoing(vertex).map(OutgoingIter::Matrix),
            Graph::Successor(graph) => graph.outgoing(vertex).map(OutgoingIter::Successor),
        }
    }

    fn incoming(&self, vertex: usize) -> Result<Self::IncomingIter<'_>> {
        match self {
            Graph::List(graph) => graph.incoming(vertex).map(IncomingIter::List),
            Graph::Matrix(graph) => graph.incoming(vertex).map(IncomingIter::Matrix),
            Graph::Successor(graph) => graph.incoming(vertex).map(IncomingIter::Successor),
        }
    }

    fn out_degree(&self, vertex: usize) -> Result<usize> {
        dispatch!(self, graph => graph.out_degree(vertex))
    }

    fn in_degree(&self, vertex: usize) -> Result<usize> {
        dispatch!(self, graph => graph.in_degree(vertex))
    }
}

pub enum OutgoingIter<'a, W> {
    List(adj_list::OutgoingIter<'a, W>),
    Matrix(adj_matrix::RowIter<'a, W>),
    Successor(successor::OutgoingIter<'a, W>),
}

impl<'a, W> Iterator for OutgoingIter<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            OutgoingIter::List(iter) => iter.next(),
            OutgoingIter::Matrix(iter) => iter.next(),
            OutgoingIter::Successor(iter) => iter.next(),
        }
    }
}

pub enum IncomingIter<'a, W> {
    List(adj_list::IncomingIter<'a, W>),
    Matrix(adj_matrix::ColumnIter<'a, W>),
    Successor(successor::IncomingIter<'a, W>),
}

impl<'a, W> Iterator for IncomingIter<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            IncomingIter::List(iter) => iter.next(),
            IncomingIter::Matrix(iter) => iter.next(),
            IncomingIter::Successor(iter) => iter.next(),
        }
    }
}
