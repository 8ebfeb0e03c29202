//! A dense adjacency-matrix graph over nodes `0..size`.

use core::fmt;

use super::traversal::Adjacency;
use super::NodeId;
use crate::error::{Error, Result};

/// An undirected graph stored as a `size x size` matrix of 0/1 cells.
///
/// Node identifiers are the row/column indices `0..size`. Adding an edge sets
/// both `[a][b]` and `[b][a]`, so the matrix is always symmetric. Unlike
/// [`Graph`](super::Graph), repeated edges collapse into one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Creates a graph with `size` nodes and no edges.
    ///
    /// # Errors
    /// Returns [`Error::MatrixTooLarge`] if `size * size` cells overflow
    /// `usize` or cannot be allocated.
    pub fn new(size: usize) -> Result<Self> {
        let len = size.checked_mul(size).ok_or(Error::MatrixTooLarge(size))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::MatrixTooLarge(size))?;
        cells.resize(len, 0);
        Ok(Self { size, cells })
    }

    /// Number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    fn slot(&self, node: NodeId) -> Result<usize> {
        usize::try_from(node)
            .ok()
            .filter(|&idx| idx < self.size)
            .ok_or(Error::UnknownNode(node))
    }

    /// Connects `a` and `b`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if either id is outside `0..size`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        let ia = self.slot(a)?;
        let ib = self.slot(b)?;
        self.cells[ia * self.size + ib] = 1;
        self.cells[ib * self.size + ia] = 1;
        trace_event!(from = a, to = b, "matrix edge added");
        Ok(())
    }

    /// Returns `true` if `a` and `b` are connected. Out-of-range ids are
    /// never connected.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        match (self.slot(a), self.slot(b)) {
            (Ok(ia), Ok(ib)) => self.cells[ia * self.size + ib] != 0,
            _ => false,
        }
    }

    /// Row `node` of the matrix.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if `node` is outside `0..size`.
    pub fn row(&self, node: NodeId) -> Result<&[u8]> {
        let idx = self.slot(node)?;
        Ok(&self.cells[idx * self.size..(idx + 1) * self.size])
    }

    /// Iterates the rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // `chunks_exact(0)` panics, and an empty matrix has no rows anyway.
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Neighbors of `node` in ascending order.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if `node` is outside `0..size`.
    pub fn neighbors(&self, node: NodeId) -> Result<RowNeighbors<'_>> {
        Ok(RowNeighbors {
            row: self.row(node)?.iter().enumerate(),
        })
    }
}

/// Neighbors read off one matrix row.
#[derive(Debug, Clone)]
pub struct RowNeighbors<'a> {
    row: core::iter::Enumerate<core::slice::Iter<'a, u8>>,
}

impl Iterator for RowNeighbors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.row
            .by_ref()
            .find(|(_, &cell)| cell != 0)
            .and_then(|(col, _)| NodeId::try_from(col).ok())
    }
}

impl Adjacency for AdjacencyMatrix {
    type Neighbors<'a> = RowNeighbors<'a>;

    fn contains(&self, node: NodeId) -> bool {
        self.slot(node).is_ok()
    }

    fn neighbor_ids(&self, node: NodeId) -> Option<Self::Neighbors<'_>> {
        self.neighbors(node).ok()
    }

    fn node_count_hint(&self) -> usize {
        self.size
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row:?}")?;
        }
        Ok(())
    }
}
