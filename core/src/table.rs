//! Header-addressed table built on [`Grid`].
//!
//! [`Table`] pairs a grid with one ordered header sequence per axis, so cells
//! can be addressed either by position or by header value. Headers are kept
//! in lockstep with the grid dimensions: positional inserts that grow the
//! grid pad the header sequences with [`HeaderSlot::Missing`], and removing a
//! row or column always removes its header entry with it.

use crate::error_codes;
use crate::grid::{Grid, GridError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

/// One header position on an axis.
///
/// `Missing` marks a slot created by positional grid growth before any header
/// was assigned. It is a distinct state, not a value of the header type, so a
/// real header can never collide with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderSlot<H> {
    Missing,
    Named(H),
}

impl<H> HeaderSlot<H> {
    pub fn is_missing(&self) -> bool {
        matches!(self, HeaderSlot::Missing)
    }

    pub fn as_named(&self) -> Option<&H> {
        match self {
            HeaderSlot::Missing => None,
            HeaderSlot::Named(h) => Some(h),
        }
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
    #[error("[SHASM_TABLE_001] duplicate {axis} header {header}")]
    DuplicateHeader { axis: Axis, header: String },

    #[error("[SHASM_TABLE_002] {axis} {index} has no named header")]
    MissingHeader { axis: Axis, index: usize },

    #[error("[SHASM_TABLE_003] {axis} header {header} not found")]
    HeaderNotFound { axis: Axis, header: String },

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl TableError {
    pub fn code(&self) -> &'static str {
        match self {
            TableError::DuplicateHeader { .. } => error_codes::TABLE_DUPLICATE_HEADER,
            TableError::MissingHeader { .. } => error_codes::TABLE_MISSING_HEADER,
            TableError::HeaderNotFound { .. } => error_codes::TABLE_HEADER_NOT_FOUND,
            TableError::Grid(e) => e.code(),
        }
    }
}

/// A grid with ordered, unique headers on both axes.
///
/// # Invariants
///
/// `row_headers.len() == nrows` and `col_headers.len() == ncols` at all
/// times; named headers are unique within an axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T, R, C> {
    grid: Grid<T>,
    row_headers: Vec<HeaderSlot<R>>,
    col_headers: Vec<HeaderSlot<C>>,
}

impl<T, R, C> Default for Table<T, R, C>
where
    R: PartialEq + fmt::Debug,
    C: PartialEq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R, C> Table<T, R, C>
where
    R: PartialEq + fmt::Debug,
    C: PartialEq + fmt::Debug,
{
    pub fn new() -> Table<T, R, C> {
        Table {
            grid: Grid::new(),
            row_headers: Vec::new(),
            col_headers: Vec::new(),
        }
    }

    pub fn nrows(&self) -> usize {
        self.grid.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.grid.ncols()
    }

    pub fn row_headers(&self) -> &[HeaderSlot<R>] {
        &self.row_headers
    }

    pub fn col_headers(&self) -> &[HeaderSlot<C>] {
        &self.col_headers
    }

    /// Stores `value` at `(row, col)`, growing the grid as needed and padding
    /// the header sequences with [`HeaderSlot::Missing`] up to the new size.
    pub fn insert(&mut self, value: T, row: usize, col: usize) {
        self.grid.insert(value, row, col);
        if self.row_headers.len() < self.grid.nrows() {
            self.row_headers
                .resize_with(self.grid.nrows(), || HeaderSlot::Missing);
        }
        if self.col_headers.len() < self.grid.ncols() {
            self.col_headers
                .resize_with(self.grid.ncols(), || HeaderSlot::Missing);
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Option<&T>, GridError> {
        self.grid.get(row, col)
    }

    pub fn get_row(&self, row: usize) -> Result<&[Option<T>], GridError> {
        self.grid.get_row(row)
    }

    pub fn get_col(&self, col: usize) -> Result<Vec<Option<&T>>, GridError> {
        self.grid.get_col(col)
    }

    /// Inserts an empty row at `at` (default: append) under `header`.
    pub fn insert_header_row(&mut self, header: R, at: Option<usize>) -> Result<(), TableError> {
        if self.row_index(&header).is_some() {
            return Err(TableError::DuplicateHeader {
                axis: Axis::Row,
                header: format!("{header:?}"),
            });
        }
        let at = at.unwrap_or(self.grid.nrows());
        self.grid.insert_row(Some(at))?;
        self.row_headers.insert(at, HeaderSlot::Named(header));
        Ok(())
    }

    /// Inserts an empty column at `at` (default: append) under `header`.
    pub fn insert_header_col(&mut self, header: C, at: Option<usize>) -> Result<(), TableError> {
        if self.col_index(&header).is_some() {
            return Err(TableError::DuplicateHeader {
                axis: Axis::Col,
                header: format!("{header:?}"),
            });
        }
        let at = at.unwrap_or(self.grid.ncols());
        self.grid.insert_col(Some(at))?;
        self.col_headers.insert(at, HeaderSlot::Named(header));
        Ok(())
    }

    /// Appends one empty row per header.
    ///
    /// The input is validated up front, against itself and against existing
    /// headers; on any duplicate nothing is inserted.
    pub fn append_header_rows(&mut self, headers: Vec<R>) -> Result<(), TableError> {
        for (i, a) in headers.iter().enumerate() {
            if self.row_index(a).is_some() || headers[i + 1..].contains(a) {
                return Err(TableError::DuplicateHeader {
                    axis: Axis::Row,
                    header: format!("{a:?}"),
                });
            }
        }
        for header in headers {
            self.grid.insert_row(None)?;
            self.row_headers.push(HeaderSlot::Named(header));
        }
        Ok(())
    }

    /// Appends one empty column per header, with the same validation as
    /// [`Table::append_header_rows`].
    pub fn append_header_cols(&mut self, headers: Vec<C>) -> Result<(), TableError> {
        for (i, a) in headers.iter().enumerate() {
            if self.col_index(a).is_some() || headers[i + 1..].contains(a) {
                return Err(TableError::DuplicateHeader {
                    axis: Axis::Col,
                    header: format!("{a:?}"),
                });
            }
        }
        for header in headers {
            self.grid.insert_col(None)?;
            self.col_headers.push(HeaderSlot::Named(header));
        }
        Ok(())
    }

    pub fn get_by_header(&self, row_h: &R, col_h: &C) -> Result<Option<&T>, TableError> {
        let (row, col) = self.resolve(row_h, col_h)?;
        Ok(self.grid.get(row, col)?)
    }

    pub fn insert_by_header(&mut self, value: T, row_h: &R, col_h: &C) -> Result<(), TableError> {
        let (row, col) = self.resolve(row_h, col_h)?;
        self.grid.insert(value, row, col);
        Ok(())
    }

    pub fn get_row_by_header(&self, row_h: &R) -> Result<&[Option<T>], TableError> {
        let row = self.require_row(row_h)?;
        Ok(self.grid.get_row(row)?)
    }

    pub fn get_col_by_header(&self, col_h: &C) -> Result<Vec<Option<&T>>, TableError> {
        let col = self.require_col(col_h)?;
        Ok(self.grid.get_col(col)?)
    }

    /// Removes the row at `at` (default: last) together with its header.
    pub fn remove_row(&mut self, at: Option<usize>) -> Result<(), TableError> {
        let at = at.unwrap_or(self.grid.nrows().saturating_sub(1));
        self.grid.remove_row(Some(at))?;
        self.row_headers.remove(at);
        Ok(())
    }

    /// Removes the column at `at` (default: last) together with its header.
    pub fn remove_col(&mut self, at: Option<usize>) -> Result<(), TableError> {
        let at = at.unwrap_or(self.grid.ncols().saturating_sub(1));
        self.grid.remove_col(Some(at))?;
        self.col_headers.remove(at);
        Ok(())
    }

    pub fn remove_row_by_header(&mut self, row_h: &R) -> Result<(), TableError> {
        let row = self.require_row(row_h)?;
        self.remove_row(Some(row))
    }

    pub fn remove_col_by_header(&mut self, col_h: &C) -> Result<(), TableError> {
        let col = self.require_col(col_h)?;
        self.remove_col(Some(col))
    }

    /// Fails if any header slot on either axis is still
    /// [`HeaderSlot::Missing`].
    pub fn require_named_headers(&self) -> Result<(), TableError> {
        if let Some(index) = self.row_headers.iter().position(HeaderSlot::is_missing) {
            return Err(TableError::MissingHeader {
                axis: Axis::Row,
                index,
            });
        }
        if let Some(index) = self.col_headers.iter().position(HeaderSlot::is_missing) {
            return Err(TableError::MissingHeader {
                axis: Axis::Col,
                index,
            });
        }
        Ok(())
    }

    /// Index of the first row whose header equals `header`.
    pub fn row_index(&self, header: &R) -> Option<usize> {
        self.row_headers
            .iter()
            .position(|slot| slot.as_named() == Some(header))
    }

    /// Index of the first column whose header equals `header`.
    pub fn col_index(&self, header: &C) -> Option<usize> {
        self.col_headers
            .iter()
            .position(|slot| slot.as_named() == Some(header))
    }

    fn resolve(&self, row_h: &R, col_h: &C) -> Result<(usize, usize), TableError> {
        Ok((self.require_row(row_h)?, self.require_col(col_h)?))
    }

    fn require_row(&self, header: &R) -> Result<usize, TableError> {
        self.row_index(header)
            .ok_or_else(|| TableError::HeaderNotFound {
                axis: Axis::Row,
                header: format!("{header:?}"),
            })
    }

    fn require_col(&self, header: &C) -> Result<usize, TableError> {
        self.col_index(header)
            .ok_or_else(|| TableError::HeaderNotFound {
                axis: Axis::Col,
                header: format!("{header:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_slot_named_is_not_missing() {
        let slot = HeaderSlot::Named("a");
        assert!(!slot.is_missing());
        assert_eq!(slot.as_named(), Some(&"a"));
        assert!(HeaderSlot::<&str>::Missing.is_missing());
    }

    #[test]
    fn positional_insert_pads_headers_with_missing() {
        let mut table: Table<i32, String, String> = Table::new();
        table.insert(5, 1, 2);
        assert_eq!(table.row_headers().len(), 2);
        assert_eq!(table.col_headers().len(), 3);
        assert!(table.row_headers().iter().all(HeaderSlot::is_missing));
        assert!(table.require_named_headers().is_err());
    }

    #[test]
    fn header_and_index_views_share_the_grid() {
        let mut table: Table<i32, String, String> = Table::new();
        table
            .append_header_rows(vec!["r0".into(), "r1".into()])
            .expect("unique headers");
        table
            .append_header_cols(vec!["c0".into()])
            .expect("unique headers");
        table
            .insert_by_header(9, &"r1".into(), &"c0".into())
            .expect("headers exist");
        assert_eq!(table.get(1, 0).expect("in range"), Some(&9));
    }
}
