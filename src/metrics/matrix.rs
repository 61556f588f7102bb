//! Dense dynamic-programming matrix

use std::ops::{Index, IndexMut};

/// Row-major `rows × cols` matrix of scores, allocated once per alignment
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl AlignmentMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0.0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Largest cell, 0.0 for an empty matrix
    pub fn max(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }
}

impl Index<(usize, usize)> for AlignmentMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for AlignmentMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.cells[i * self.cols + j]
    }
}
