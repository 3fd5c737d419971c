//! A rows × cols grid stored row-major in a `Vec`.
//!
//! Flat indices follow the natural flattening of the grid: cell `(r, c)` lives
//! at `r * cols + c`. Both ownership and shot grids are built on this type.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Grid filled with `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` when the cell storage matches `rows × cols`.
    pub fn is_well_formed(&self) -> bool {
        self.rows.checked_mul(self.cols) == Some(self.cells.len())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn flat_index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> Option<(usize, usize)> {
        if idx < self.cells.len() {
            Some((idx / self.cols, idx % self.cols))
        } else {
            None
        }
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.cells.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.cells.get_mut(idx)
    }

    pub fn at(&self, row: usize, col: usize) -> Option<&T> {
        self.flat_index(row, col).and_then(|i| self.cells.get(i))
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        let idx = self.flat_index(row, col)?;
        self.cells.get_mut(idx)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Flat indices of cells matching `pred`, ascending.
    pub fn indices_where<F>(&self, mut pred: F) -> Vec<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| pred(c).then_some(i))
            .collect()
    }

    /// Build a new grid of the same shape by mapping every cell.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols.max(1)) {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            for cell in row {
                write!(f, "{:>3}", cell)?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
