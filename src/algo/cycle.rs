//! Decide whether a graph contains a [cycle].
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use trigraph::{algo::has_cycle, core::GraphMut, storage::ListGraph};
//!
//! let mut graph = ListGraph::<i64>::new_undirected(4);
//! graph.extend_with_edges([(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
//!
//! assert!(!has_cycle(&graph));
//!
//! graph.add_edge(3, 0, 1, false).unwrap();
//!
//! assert!(has_cycle(&graph));
//! ```

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashSet;

use crate::{
    core::{GraphBase, Neighbors, Weight},
    storage::SuccessorGraph,
};

/// Returns `true` if the graph contains at least one cycle.
///
/// Undirected graphs use a parent-excluding depth-first search; directed
/// graphs use three-state coloring where meeting a vertex that is still on
/// the active search path signals a back-edge. Both walk an explicit frame
/// stack and start from every unvisited vertex, so disconnected graphs are
/// covered fully.
pub fn has_cycle<W, G>(graph: &G) -> bool
where
    G: Neighbors<W>,
{
    if graph.is_directed() {
        directed(graph)
    } else {
        undirected(graph)
    }
}

struct Frame<I> {
    vertex: usize,
    parent: Option<usize>,
    neighbors: I,
}

fn open<'g, W, G>(graph: &'g G, vertex: usize, parent: Option<usize>) -> Frame<G::OutgoingIter<'g>>
where
    G: Neighbors<W>,
{
    Frame {
        vertex,
        parent,
        neighbors: graph.outgoing(vertex).expect("vertex does not exist"),
    }
}

fn undirected<W, G>(graph: &G) -> bool
where
    G: Neighbors<W>,
{
    let order = graph.order();
    let mut visited = FixedBitSet::with_capacity(order);

    for root in 0..order {
        if visited.contains(root) {
            continue;
        }

        visited.insert(root);
        let mut stack = vec![open(graph, root, None)];

        while !stack.is_empty() {
            let top = stack.len() - 1;

            match stack[top].neighbors.next().map(|(dest, _)| dest) {
                // The edge back to where this vertex was entered from is the
                // one just traversed, not a cycle.
                Some(dest) if stack[top].parent == Some(dest) => continue,
                Some(dest) if visited.contains(dest) => return true,
                Some(dest) => {
                    visited.insert(dest);
                    let parent = stack[top].vertex;
                    stack.push(open(graph, dest, Some(parent)));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    false
}

fn directed<W, G>(graph: &G) -> bool
where
    G: Neighbors<W>,
{
    let order = graph.order();
    let mut visited = FixedBitSet::with_capacity(order);
    let mut closed: FxHashSet<usize> = FxHashSet::default();

    for root in 0..order {
        if visited.contains(root) {
            continue;
        }

        visited.insert(root);
        let mut stack = vec![open(graph, root, None)];

        while !stack.is_empty() {
            let top = stack.len() - 1;

            match stack[top].neighbors.next().map(|(dest, _)| dest) {
                Some(dest) if !visited.contains(dest) => {
                    visited.insert(dest);
                    stack.push(open(graph, dest, None));
                }
                // A discovered but not yet closed neighbor is still on the
                // active search path: back-edge. A closed one is safe.
                Some(dest) => {
                    if !closed.contains(&dest) {
                        return true;
                    }
                }
                None => {
                    closed.insert(stack[top].vertex);
                    stack.pop();
                }
            }
        }
    }

    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    New,
    Active,
    Done,
}

/// Cycle detection specialized for [`SuccessorGraph`]: with out-degree at
/// most one, each component is a single successor chain, so the three-state
/// rule reduces to walking the chain until it ends, closes on itself, or
/// reaches an already finished vertex. A vertex whose successor is itself is
/// a cycle.
pub fn has_cycle_functional<W: Weight>(graph: &SuccessorGraph<W>) -> bool {
    let order = graph.order();
    let mut state = vec![State::New; order];

    for root in 0..order {
        if state[root] != State::New {
            continue;
        }

        let mut path = Vec::new();
        let mut current = root;

        loop {
            match state[current] {
                State::Active => return true,
                State::Done => break,
                State::New => {
                    state[current] = State::Active;
                    path.push(current);

                    match graph.successor(current) {
                        Some(next) => current = next,
                        None => break,
                    }
                }
            }
        }

        for vertex in path {
            state[vertex] = State::Done;
        }
    }

    false
}
