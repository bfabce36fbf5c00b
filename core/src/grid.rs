//! Growable two-dimensional grid of optional values.
//!
//! [`Grid`] is the positional storage layer underneath [`Table`](crate::Table):
//! a dense, row-major rectangle of cells where an unset cell is explicitly
//! `None` rather than a default value. Inserting past the current bounds
//! expands the rectangle; nothing ever shrinks it implicitly.

use crate::error_codes;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GridError {
    #[error("[SHASM_GRID_001] index ({row}, {col}) out of range for a {nrows}x{ncols} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

impl GridError {
    pub fn code(&self) -> &'static str {
        match self {
            GridError::IndexOutOfRange { .. } => error_codes::GRID_INDEX_OUT_OF_RANGE,
        }
    }
}

/// A dense 2D grid of optional values.
///
/// # Invariants
///
/// Every row holds exactly `ncols` cells, and `nrows`/`ncols` always match the
/// backing storage dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Vec<Vec<Option<T>>>,
    nrows: usize,
    ncols: usize,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    pub fn new() -> Grid<T> {
        Grid {
            rows: Vec::new(),
            nrows: 0,
            ncols: 0,
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Full backing storage, one slice per row.
    pub fn rows(&self) -> &[Vec<Option<T>>] {
        &self.rows
    }

    /// Stores `value` at `(row, col)`, growing the grid as needed.
    ///
    /// New rows and columns are filled with `None`. Afterwards
    /// `nrows > row` and `ncols > col` hold.
    pub fn insert(&mut self, value: T, row: usize, col: usize) {
        if row >= self.nrows {
            let ncols = self.ncols;
            self.rows
                .resize_with(row + 1, || new_empty_row(ncols));
            self.nrows = row + 1;
        }
        if col >= self.ncols {
            for r in &mut self.rows {
                r.resize_with(col + 1, || None);
            }
            self.ncols = col + 1;
        }
        self.rows[row][col] = Some(value);
    }

    /// Reads the cell at `(row, col)`.
    ///
    /// `Ok(None)` means the cell exists but was never set; indices beyond the
    /// current bounds are an error, not an absent cell.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<&T>, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.rows[row][col].as_ref())
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<Option<&mut T>, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.rows[row][col].as_mut())
    }

    pub fn get_row(&self, row: usize) -> Result<&[Option<T>], GridError> {
        if row >= self.nrows {
            return Err(self.out_of_range(row, 0));
        }
        Ok(&self.rows[row])
    }

    pub fn get_col(&self, col: usize) -> Result<Vec<Option<&T>>, GridError> {
        if col >= self.ncols {
            return Err(self.out_of_range(0, col));
        }
        Ok(self.rows.iter().map(|r| r[col].as_ref()).collect())
    }

    /// Inserts an empty row at `at` (default: append). Fails if `at` is past
    /// the end.
    pub fn insert_row(&mut self, at: Option<usize>) -> Result<(), GridError> {
        let at = at.unwrap_or(self.nrows);
        if at > self.nrows {
            return Err(self.out_of_range(at, 0));
        }
        self.rows.insert(at, new_empty_row(self.ncols));
        self.nrows += 1;
        Ok(())
    }

    /// Inserts an empty column at `at` (default: append). Fails if `at` is
    /// past the end.
    pub fn insert_col(&mut self, at: Option<usize>) -> Result<(), GridError> {
        let at = at.unwrap_or(self.ncols);
        if at > self.ncols {
            return Err(self.out_of_range(0, at));
        }
        for r in &mut self.rows {
            r.insert(at, None);
        }
        self.ncols += 1;
        Ok(())
    }

    /// Removes the row at `at` (default: last).
    pub fn remove_row(&mut self, at: Option<usize>) -> Result<(), GridError> {
        let at = at.unwrap_or(self.nrows.saturating_sub(1));
        if at >= self.nrows {
            return Err(self.out_of_range(at, 0));
        }
        self.rows.remove(at);
        self.nrows -= 1;
        Ok(())
    }

    /// Removes the column at `at` (default: last).
    pub fn remove_col(&mut self, at: Option<usize>) -> Result<(), GridError> {
        let at = at.unwrap_or(self.ncols.saturating_sub(1));
        if at >= self.ncols {
            return Err(self.out_of_range(0, at));
        }
        for r in &mut self.rows {
            r.remove(at);
        }
        self.ncols -= 1;
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(self.out_of_range(row, col));
        }
        Ok(())
    }

    fn out_of_range(&self, row: usize, col: usize) -> GridError {
        GridError::IndexOutOfRange {
            row,
            col,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

fn new_empty_row<T>(ncols: usize) -> Vec<Option<T>> {
    let mut row = Vec::with_capacity(ncols);
    row.resize_with(ncols, || None);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_zero_by_zero() {
        let grid: Grid<i32> = Grid::new();
        assert_eq!(grid.nrows(), 0);
        assert_eq!(grid.ncols(), 0);
    }

    #[test]
    fn insert_expands_both_axes() {
        let mut grid = Grid::new();
        grid.insert(7, 2, 3);
        assert_eq!(grid.nrows(), 3);
        assert_eq!(grid.ncols(), 4);
        assert_eq!(grid.get(2, 3).expect("in range"), Some(&7));
        assert_eq!(grid.get(0, 0).expect("in range"), None);
    }

    #[test]
    fn rows_stay_rectangular_after_expansion() {
        let mut grid = Grid::new();
        grid.insert('a', 0, 0);
        grid.insert('b', 3, 2);
        for row in grid.rows() {
            assert_eq!(row.len(), grid.ncols());
        }
    }

    #[test]
    fn get_out_of_range_is_an_error() {
        let mut grid = Grid::new();
        grid.insert(1, 0, 0);
        let err = grid.get(1, 0).expect_err("row 1 does not exist");
        assert_eq!(err.code(), crate::error_codes::GRID_INDEX_OUT_OF_RANGE);
    }

    #[test]
    fn remove_col_default_drops_last() {
        let mut grid = Grid::new();
        grid.insert(1, 0, 0);
        grid.insert(2, 0, 1);
        grid.remove_col(None).expect("column exists");
        assert_eq!(grid.ncols(), 1);
        assert_eq!(grid.get(0, 0).expect("in range"), Some(&1));
    }

    #[test]
    fn remove_from_empty_grid_fails() {
        let mut grid: Grid<i32> = Grid::new();
        assert!(grid.remove_row(None).is_err());
        assert!(grid.remove_col(None).is_err());
    }
}
