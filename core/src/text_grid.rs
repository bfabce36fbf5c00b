//! Parsing of delimited text into a grid.

use crate::grid::Grid;

/// Splits `text` into a grid: rows on `\n`, cells on `\t`.
///
/// Every token becomes a cell, including empty ones, so a trailing newline
/// yields a final row with one empty cell. The resulting grid is rectangular
/// with short lines padded by absent cells.
pub fn parse_delimited(text: &str) -> Grid<String> {
    let mut grid = Grid::new();
    for (row, line) in text.split('\n').enumerate() {
        for (col, cell) in line.split('\t').enumerate() {
            grid.insert(cell.to_string(), row, col);
        }
    }
    grid
}
