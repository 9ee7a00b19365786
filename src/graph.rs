//! Graph container
//!
//! Stores vertex labels plus two square matrices keyed by vertex index:
//! an adjacency matrix (0/1) and a cost matrix (edge weight, or +inf where
//! no edge was added). Storage is directed: `add_edge(v, w, _)` writes only
//! the `(v, w)` cell.

use std::collections::HashSet;

use thiserror::Error;

/// Errors raised while building a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The label list passed to `add_vertices` repeats a label
    #[error("duplicate vertex label: {0}")]
    DuplicateLabel(String),

    /// A label was looked up that was never registered
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// A registered label maps past the end of the matrices
    #[error("vertex {label} has index {index}, but the graph has {vertex_count} vertices")]
    IndexOutOfRange {
        label: String,
        index: usize,
        vertex_count: usize,
    },
}

/// Row-major N×N matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Create an N×N matrix with every cell set to `value`
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T: Copy> SquareMatrix<T> {
    /// Cell `(row, col)`. Panics when either index is out of `[0, size)`.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.offset(row, col)]
    }

    /// Overwrite cell `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }
}

impl<T> SquareMatrix<T> {
    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over all rows in index order
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, so an empty matrix yields nothing
        self.cells.chunks(self.size.max(1))
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "index ({row}, {col}) out of bounds for {n}x{n} matrix",
            n = self.size
        );
        row * self.size + col
    }
}

/// 0/1 adjacency matrix
pub type AdjacencyMatrix = SquareMatrix<u8>;

/// Edge weight matrix, `f64::INFINITY` where no edge is set
pub type CostMatrix = SquareMatrix<f64>;

/// Graph with a fixed vertex count
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    labels: Vec<String>,
    adjacency: AdjacencyMatrix,
    cost: CostMatrix,
}

impl Graph {
    /// Create a graph with `vertex_count` unlabeled vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        let mut cost = CostMatrix::filled(vertex_count, f64::INFINITY);
        for i in 0..vertex_count {
            cost.set(i, i, 0.0);
        }

        Self {
            vertex_count,
            labels: Vec::new(),
            adjacency: AdjacencyMatrix::filled(vertex_count, 0),
            cost,
        }
    }

    /// Register the index→label mapping.
    ///
    /// Labels must be pairwise distinct. On failure the previously registered
    /// labels are left untouched. The list length is not checked against the
    /// vertex count.
    pub fn add_vertices<I, S>(&mut self, labels: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(GraphError::DuplicateLabel(label.clone()));
            }
        }

        if labels.len() != self.vertex_count {
            tracing::warn!(
                labels = labels.len(),
                vertices = self.vertex_count,
                "label count does not match vertex count"
            );
        }

        self.labels = labels;
        Ok(())
    }

    /// Add a directed edge `v -> w` with the given weight
    pub fn add_edge(&mut self, v: &str, w: &str, weight: f64) -> Result<(), GraphError> {
        let v_index = self.matrix_index(v)?;
        let w_index = self.matrix_index(w)?;

        self.adjacency.set(v_index, w_index, 1);
        self.cost.set(v_index, w_index, weight);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    pub fn cost_matrix(&self) -> &CostMatrix {
        &self.cost
    }

    /// For each vertex, the indices `j` with `adjacency[i][j] == 1`
    pub fn adjacency_list(&self) -> Vec<Vec<usize>> {
        self.adjacency
            .rows()
            .take(self.vertex_count)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| **cell == 1)
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect()
    }

    /// All stored edges as `(v, w)` index pairs, in row-major order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertex_count;
        (0..n).flat_map(move |v| {
            (0..n)
                .filter(move |&w| self.adjacency.get(v, w) == 1)
                .map(move |w| (v, w))
        })
    }

    /// Label of the vertex at `index`, if one was registered
    pub fn vertex_label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Index of the vertex carrying `label`
    pub fn vertex_index(&self, label: &str) -> Result<usize, GraphError> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| GraphError::UnknownVertex(label.to_string()))
    }

    pub fn vertex_labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of `label`, checked against the matrix size
    fn matrix_index(&self, label: &str) -> Result<usize, GraphError> {
        let index = self.vertex_index(label)?;
        if index >= self.vertex_count {
            return Err(GraphError::IndexOutOfRange {
                label: label.to_string(),
                index,
                vertex_count: self.vertex_count,
            });
        }
        Ok(index)
    }
}
