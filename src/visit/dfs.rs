use fixedbitset::FixedBitSet;

use crate::core::{error::Result, Error, Neighbors};

/// Runs a depth-first search from `anchor` and returns an order-length array
/// holding `true` for every vertex reachable from it.
///
/// Fails with [`EmptyGraph`](Error::EmptyGraph) on a zero-vertex graph and
/// with [`OutOfRange`](Error::OutOfRange) for an invalid anchor.
pub fn dfs<W, G>(graph: &G, anchor: usize) -> Result<Vec<bool>>
where
    G: Neighbors<W>,
{
    if graph.order() == 0 {
        return Err(Error::EmptyGraph);
    }

    graph.check_vertex(anchor)?;

    let order = graph.order();
    let mut visited = FixedBitSet::with_capacity(order);
    let mut stack = vec![anchor];

    while let Some(current) = stack.pop() {
        if visited.contains(current) {
            continue;
        }

        visited.insert(current);

        for (dest, _) in graph.outgoing(current)? {
            if !visited.contains(dest) {
                stack.push(dest);
            }
        }
    }

    Ok((0..order).map(|vertex| visited.contains(vertex)).collect())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        core::GraphMut,
        storage::{ListGraph, MatrixGraph, SuccessorGraph},
    };

    #[test]
    fn visited_set_is_reachable_set() {
        let mut graph = ListGraph::<i64>::new_directed(5);

        graph
            .extend_with_edges([(0, 1, 1), (1, 2, 1), (3, 4, 1)])
            .unwrap();

        assert_eq!(
            dfs(&graph, 0).unwrap(),
            vec![true, true, true, false, false]
        );
        assert_eq!(
            dfs(&graph, 3).unwrap(),
            vec![false, false, false, true, true]
        );
    }

    #[test]
    fn undirected_reaches_both_ways() {
        let mut graph = MatrixGraph::<i64>::new_undirected(3);

        graph.add_edge(1, 2, 1, false).unwrap();

        assert_eq!(dfs(&graph, 2).unwrap(), vec![false, true, true]);
    }

    #[test]
    fn successor_follows_single_chain() {
        let mut graph = SuccessorGraph::<i64>::new_unweighted(4);

        graph.add_edge(0, 1, 1, false).unwrap();
        graph.add_edge(1, 2, 1, false).unwrap();

        assert_eq!(dfs(&graph, 0).unwrap(), vec![true, true, true, false]);
    }

    #[test]
    fn preconditions() {
        let empty = ListGraph::<i64>::new_undirected(0);
        assert_matches!(dfs(&empty, 0), Err(Error::EmptyGraph));

        let graph = ListGraph::<i64>::new_undirected(2);
        assert_matches!(dfs(&graph, 2), Err(Error::OutOfRange { .. }));
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let mut graph = ListGraph::<i64>::new_directed(0);

        graph
            .extend_with_edges((0..50_000).map(|v| (v, v + 1, 1)))
            .unwrap();

        let visited = dfs(&graph, 0).unwrap();
        assert!(visited.iter().all(|&reached| reached));
    }
}
