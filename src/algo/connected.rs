//! Label vertices by the component that reaches them.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::{
    core::{Edge, GraphBase, Weight},
    storage::ListGraph,
    visit::{bfs_with, BfsFlow},
};

const UNLABELED: usize = usize::MAX;

struct Labeler {
    labels: Vec<usize>,
    component: usize,
}

impl<W: Weight> BfsFlow<W> for Labeler {
    type Output = Vec<usize>;

    fn on_start(&mut self, anchor: usize) {
        self.labels[anchor] = self.component;
    }

    fn on_visit(&mut self, queue: &mut VecDeque<usize>, edge: &Edge<W>) {
        self.labels[edge.dest] = self.component;
        queue.push_back(edge.dest);
    }

    fn finish(self, _visited: FixedBitSet) -> Self::Output {
        self.labels
    }
}

/// Labels every vertex with the index of the breadth-first tree that first
/// reached it, one [`bfs_with`] run per unvisited root. For undirected graphs
/// the labels are exactly the connected components; labels are dense and
/// assigned in increasing root order.
pub fn connected_components<W: Weight>(graph: &ListGraph<W>) -> Vec<usize> {
    let mut labels = vec![UNLABELED; graph.order()];
    let mut component = 0;

    for root in 0..graph.order() {
        if labels[root] != UNLABELED {
            continue;
        }

        let flow = Labeler { labels, component };
        labels = bfs_with(graph, root, flow).expect("vertex does not exist");
        component += 1;
    }

    labels
}
