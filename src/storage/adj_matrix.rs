use std::mem;

use crate::core::{
    error::{Error, Result},
    marker::VariantKind,
    Edge, EdgeSet, GraphBase, GraphMut, Neighbors, Weight,
};

/// Adjacency-matrix representation: an order × order grid stored row-major,
/// where cell `(a, b)` holds the weight of the edge from `a` to `b`. Edge
/// presence is exactly `cell.is_some()`, so no reserved weight value exists.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGraph<W = i64> {
    cells: Vec<Option<W>>,
    order: usize,
    size: usize,
    weighted: bool,
    directed: bool,
}

impl<W: Weight> MatrixGraph<W> {
    pub fn new(order: usize, weighted: bool, directed: bool) -> Self {
        Self {
            cells: vec![None; order * order],
            order,
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

    /// Raw cell storage, row-major, for read-only consumers.
    pub fn cells(&self) -> &[Option<W>] {
        &self.cells
    }

    /// The full matrix row of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn row(&self, vertex: usize) -> &[Option<W>] {
        &self.cells[vertex * self.order..(vertex + 1) * self.order]
    }

    fn index(&self, origin: usize, dest: usize) -> usize {
        origin * self.order + dest
    }

    fn ensure_endpoints(&mut self, origin: usize, dest: usize, auto_expand: bool) -> Result<()> {
        let order = self.order;

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

impl<W> GraphBase for MatrixGraph<W> {
    fn order(&self) -> usize {
        self.order
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
        VariantKind::Matrix
    }
}

impl<W: Weight> EdgeSet<W> for MatrixGraph<W> {
    fn is_edge(&self, origin: usize, dest: usize) -> bool {
        origin < self.order && dest < self.order && self.cells[self.index(origin, dest)].is_some()
    }

    fn edge(&self, origin: usize, dest: usize) -> Option<Edge<W>> {
        self.weight(origin, dest)
            .map(|weight| Edge::new(origin, dest, weight.clone(), self.weighted))
    }

    fn weight(&self, origin: usize, dest: usize) -> Option<&W> {
        if origin >= self.order || dest >= self.order {
            return None;
        }

        self.cells[self.index(origin, dest)].as_ref()
    }
}

impl<W: Weight> GraphMut<W> for MatrixGraph<W> {
    /// Relocates every existing row into the grown square and pads the new
    /// trailing rows, keeping all cells addressable by the same `(a, b)`.
    fn add_vertices(&mut self, amount: usize) {
        let old = self.order;
        let new = old + amount;

        let mut next = Vec::with_capacity(new * new);

        for (i, cell) in mem::take(&mut self.cells).into_iter().enumerate() {
            next.push(cell);

            // Right edge of the original square: pad the row to the new width.
            if (i + 1) % old == 0 {
                next.resize_with(next.len() + amount, || None);
            }
        }

        // The new full-width rows at the bottom.
        next.resize_with(new * new, || None);

        self.cells = next;
        self.order = new;
    }

    fn add_edge(&mut self, origin: usize, dest: usize, weight: W, auto_expand: bool) -> Result<()> {
        self.ensure_endpoints(origin, dest, auto_expand)?;

        let weight = if self.weighted { weight } else { W::unit() };
        let existed = self.cells[self.index(origin, dest)].is_some();

        let index = self.index(origin, dest);
        self.cells[index] = Some(weight.clone());

        if !self.directed && origin != dest {
            let mirror = self.index(dest, origin);
            self.cells[mirror] = Some(weight);
        }

        if !existed {
            self.size += 1;
        }

        Ok(())
    }

    fn remove_edge(&mut self, origin: usize, dest: usize) -> Result<W> {
        self.check_vertex(origin)?;
        self.check_vertex(dest)?;

        let index = self.index(origin, dest);
        let removed = self.cells[index]
            .take()
            .ok_or(Error::NoSuchEdge { origin, dest })?;

        if !self.directed && origin != dest {
            let mirror = self.index(dest, origin);
            self.cells[mirror] = None;
        }

        self.size -= 1;
        Ok(removed)
    }

    fn set_weight(&mut self, origin: usize, dest: usize, weight: W) -> Result<()> {
        self.check_vertex(origin)?;
        self.check_vertex(dest)?;

        let index = self.index(origin, dest);

        match self.cells[index] {
            Some(ref mut cell) => *cell = weight.clone(),
            None => return Err(Error::NoSuchEdge { origin, dest }),
        }

        if !self.directed && origin != dest {
            let mirror = self.index(dest, origin);
            self.cells[mirror] = Some(weight);
        }

        Ok(())
    }

    fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }

        self.size = 0;
    }

    fn reset(&mut self) {
        self.cells.clear();
        self.order = 0;
        self.size = 0;
    }
}

impl<W> Neighbors<W> for MatrixGraph<W> {
    type OutgoingIter<'a> = RowIter<'a, W>
    where
        Self: 'a,
        W: 'a;

    type IncomingIter<'a> = ColumnIter<'a, W>
    where
        Self: 'a,
        W: 'a;

    fn outgoing(&self, vertex: usize) -> Result<Self::OutgoingIter<'_>> {
        self.check_vertex(vertex)?;

        Ok(RowIter {
            row: self.cells[vertex * self.order..(vertex + 1) * self.order]
                .iter()
                .enumerate(),
        })
    }

    fn incoming(&self, vertex: usize) -> Result<Self::IncomingIter<'_>> {
        self.check_vertex(vertex)?;

        Ok(ColumnIter {
            cells: &self.cells,
            dest: vertex,
            order: self.order,
            row: 0,
        })
    }

    fn out_degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.outgoing(vertex)?.count())
    }

    fn in_degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.incoming(vertex)?.count())
    }
}

pub struct RowIter<'a, W> {
    row: std::iter::Enumerate<std::slice::Iter<'a, Option<W>>>,
}

impl<'a, W> Iterator for RowIter<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.row
            .by_ref()
            .find_map(|(dest, cell)| cell.as_ref().map(|weight| (dest, weight)))
    }
}

pub struct ColumnIter<'a, W> {
    cells: &'a [Option<W>],
    dest: usize,
    order: usize,
    row: usize,
}

impl<'a, W> Iterator for ColumnIter<'a, W> {
    type Item = (usize, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.order {
            let origin = self.row;
            self.row += 1;

            if let Some(weight) = self.cells[origin * self.order + self.dest].as_ref() {
                return Some((origin, weight));
            }
        }

        None
    }
}
