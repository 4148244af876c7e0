use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::{
    core::{error::Result, Edge, Error, GraphBase, Neighbors, Weight},
    storage::ListGraph,
};

/// Runs a breadth-first search from `anchor` and returns an order-length
/// array of hop counts, `-1` for vertices that cannot be reached.
///
/// Fails with [`EmptyGraph`](Error::EmptyGraph) on a zero-vertex graph and
/// with [`OutOfRange`](Error::OutOfRange) for an invalid anchor.
///
/// # Examples
///
/// ```
/// use trigraph::{core::GraphMut, storage::ListGraph, visit::bfs};
///
/// let mut graph = ListGraph::<i64>::new_undirected(4);
/// graph.extend_with_edges([(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
///
/// assert_eq!(bfs(&graph, 0).unwrap(), vec![0, 1, 2, 3]);
/// ```
pub fn bfs<W, G>(graph: &G, anchor: usize) -> Result<Vec<i64>>
where
    G: Neighbors<W>,
{
    if graph.order() == 0 {
        return Err(Error::EmptyGraph);
    }

    graph.check_vertex(anchor)?;

    let order = graph.order();
    let mut visited = FixedBitSet::with_capacity(order);
    let mut dist = vec![-1_i64; order];
    let mut queue = VecDeque::new();

    visited.insert(anchor);
    dist[anchor] = 0;
    queue.push_back(anchor);

    while let Some(current) = queue.pop_front() {
        for (dest, _) in graph.outgoing(current)? {
            if !visited.contains(dest) {
                visited.insert(dest);
                dist[dest] = dist[current] + 1;
                queue.push_back(dest);
            }
        }
    }

    Ok(dist)
}

/// Hooks into the breadth-first queue loop driven by [`bfs_with`].
///
/// Every hook has a default matching plain BFS, so an implementation only
/// overrides the points where its traversal deviates: seeding state for the
/// anchor, cutting the loop short, enumerating neighbors differently,
/// re-visiting on a relaxed condition, or steering where a visited vertex
/// enters the queue. The full hook set is supported on [`ListGraph`] only.
pub trait BfsFlow<W: Weight> {
    type Output;

    /// Called once before the loop with the anchor vertex.
    fn on_start(&mut self, anchor: usize) {
        let _ = anchor;
    }

    /// Loop condition, checked before every dequeue.
    fn keep_going(&mut self, queue: &VecDeque<usize>) -> bool {
        !queue.is_empty()
    }

    /// Called for every dequeued vertex.
    fn on_dequeue(&mut self, vertex: usize) {
        let _ = vertex;
    }

    /// Enumerates the edges considered from `vertex`.
    fn neighbors<'g>(
        &mut self,
        graph: &'g ListGraph<W>,
        vertex: usize,
    ) -> Box<dyn Iterator<Item = &'g Edge<W>> + 'g> {
        Box::new(graph.edges_from(vertex).iter())
    }

    /// Decides whether `edge` leads to a vertex worth (re)visiting.
    fn should_visit(&mut self, visited: &FixedBitSet, edge: &Edge<W>) -> bool {
        !visited.contains(edge.dest)
    }

    /// Called for every visited edge; pushes the destination onto the queue.
    fn on_visit(&mut self, queue: &mut VecDeque<usize>, edge: &Edge<W>) {
        queue.push_back(edge.dest);
    }

    /// Transforms the accumulated state into the traversal's result.
    fn finish(self, visited: FixedBitSet) -> Self::Output;
}

/// Drives the breadth-first queue loop with the hooks of `flow`.
///
/// The driver owns the queue and the visited set; it marks a destination as
/// visited right before handing it to [`BfsFlow::on_visit`]. Preconditions
/// match [`bfs`].
pub fn bfs_with<W, F>(graph: &ListGraph<W>, anchor: usize, mut flow: F) -> Result<F::Output>
where
    W: Weight,
    F: BfsFlow<W>,
{
    if graph.order() == 0 {
        return Err(Error::EmptyGraph);
    }

    graph.check_vertex(anchor)?;

    let mut visited = FixedBitSet::with_capacity(graph.order());
    let mut queue = VecDeque::new();

    flow.on_start(anchor);
    visited.insert(anchor);
    queue.push_back(anchor);

    while flow.keep_going(&queue) {
        let Some(current) = queue.pop_front() else {
            break;
        };

        flow.on_dequeue(current);

        for edge in flow.neighbors(graph, current) {
            if flow.should_visit(&visited, edge) {
                visited.insert(edge.dest);
                flow.on_visit(&mut queue, edge);
            }
        }
    }

    Ok(flow.finish(visited))
}

/// Plain hop-count levels expressed through the template; equivalent to
/// [`bfs`] on the same graph.
pub struct HopLevels {
    dist: Vec<i64>,
}

impl HopLevels {
    pub fn new(order: usize) -> Self {
        Self {
            dist: vec![-1; order],
        }
    }
}

impl<W: Weight> BfsFlow<W> for HopLevels {
    type Output = Vec<i64>;

    fn on_start(&mut self, anchor: usize) {
        self.dist[anchor] = 0;
    }

    fn on_visit(&mut self, queue: &mut VecDeque<usize>, edge: &Edge<W>) {
        self.dist[edge.dest] = self.dist[edge.origin] + 1;
        queue.push_back(edge.dest);
    }

    fn finish(self, _visited: FixedBitSet) -> Self::Output {
        self.dist
    }
}

/// 0-1 BFS: shortest-path levels on graphs whose edge weights are either
/// zero or count as one hop.
///
/// Zero-weight edges keep the destination on the current level and enter the
/// queue at the front; any other weight adds a hop and enters at the back.
/// The visit predicate relaxes instead of deduplicating, so a vertex can be
/// re-queued whenever a shorter level is found for it.
pub struct ZeroOneLevels {
    dist: Vec<i64>,
}

impl ZeroOneLevels {
    pub fn new(order: usize) -> Self {
        Self {
            dist: vec![-1; order],
        }
    }

    fn step<W: Weight>(edge: &Edge<W>) -> i64 {
        i64::from(edge.weight != W::zero())
    }
}

impl<W: Weight> BfsFlow<W> for ZeroOneLevels {
    type Output = Vec<i64>;

    fn on_start(&mut self, anchor: usize) {
        self.dist[anchor] = 0;
    }

    fn should_visit(&mut self, _visited: &FixedBitSet, edge: &Edge<W>) -> bool {
        let candidate = self.dist[edge.origin] + Self::step(edge);
        self.dist[edge.dest] == -1 || candidate < self.dist[edge.dest]
    }

    fn on_visit(&mut self, queue: &mut VecDeque<usize>, edge: &Edge<W>) {
        self.dist[edge.dest] = self.dist[edge.origin] + Self::step(edge);

        if Self::step(edge) == 0 {
            queue.push_front(edge.dest);
        } else {
            queue.push_back(edge.dest);
        }
    }

    fn finish(self, _visited: FixedBitSet) -> Self::Output {
        self.dist
    }
}
