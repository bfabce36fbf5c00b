//! JSON report output for assembled tables.
//!
//! The report is the hand-off payload for export collaborators: a flat list
//! of (serial, destination) cells with the full names of the matched files.

use crate::assembly::AssemblyTable;
use crate::table::TableError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellMatches {
    pub serial: String,
    pub destination: String,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyReport {
    pub serials: Vec<String>,
    pub destinations: Vec<String>,
    pub cells: Vec<CellMatches>,
}

/// Flattens `table` into a report, row-major.
///
/// Fails with [`TableError::MissingHeader`] if any header slot was never
/// named; a cell that was never set reports an empty file list.
pub fn report_from_table(table: &AssemblyTable) -> Result<AssemblyReport, TableError> {
    table.require_named_headers()?;

    let serials: Vec<String> = table
        .row_headers()
        .iter()
        .filter_map(|slot| slot.as_named().cloned())
        .collect();
    let destinations: Vec<String> = table
        .col_headers()
        .iter()
        .filter_map(|slot| slot.as_named().map(|d| d.name().to_string()))
        .collect();

    let mut cells = Vec::with_capacity(serials.len() * destinations.len());
    for (row, serial) in serials.iter().enumerate() {
        for (col, destination) in destinations.iter().enumerate() {
            let files = match table.get(row, col)? {
                Some(matched) => matched.iter().map(|f| f.full_name().to_string()).collect(),
                None => Vec::new(),
            };
            cells.push(CellMatches {
                serial: serial.clone(),
                destination: destination.clone(),
                files,
            });
        }
    }

    Ok(AssemblyReport {
        serials,
        destinations,
        cells,
    })
}

pub fn serialize_report(report: &AssemblyReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}
