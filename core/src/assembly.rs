//! Keyword-filtered assembly of serial groups into a destination table.

use crate::data_file::DataFile;
use crate::destination::Destination;
use crate::serial_group::SerialGroup;
use crate::table::{Table, TableError};

/// The assembled result: serials down, destinations across, matched files in
/// each cell.
pub type AssemblyTable = Table<Vec<DataFile>, String, Destination>;

/// Builds the serial × destination table and fills it by substring matching.
///
/// Row headers are the group serials, column headers the destinations, both
/// in input order; duplicate serials or destination names fail with
/// [`TableError::DuplicateHeader`] before anything is matched. Every cell
/// starts as an empty list.
///
/// When `keyword` is non-empty, only destinations whose name contains it are
/// matched at all; the others keep their (empty) columns. A participating
/// destination's name has the keyword removed and surrounding whitespace
/// trimmed, and every file whose name contains that normalized name is added
/// to the cell, in group order. A file may match several destinations; no
/// exclusivity is enforced.
pub fn assemble_table(
    groups: &[SerialGroup],
    destinations: &[Destination],
    keyword: &str,
) -> Result<AssemblyTable, TableError> {
    let mut table = Table::new();
    table.append_header_rows(groups.iter().map(|g| g.serial().to_string()).collect())?;
    table.append_header_cols(destinations.to_vec())?;

    for row in 0..groups.len() {
        for col in 0..destinations.len() {
            table.insert(Vec::new(), row, col);
        }
    }

    for group in groups {
        let serial = group.serial().to_string();
        for destination in destinations {
            if !keyword.is_empty() && !destination.name().contains(keyword) {
                continue;
            }
            let stripped = destination.name().replace(keyword, "");
            let target = stripped.trim();
            let matched: Vec<DataFile> = group
                .iter()
                .filter(|file| file.name().contains(target))
                .cloned()
                .collect();
            table.insert_by_header(matched, &serial, destination)?;
        }
    }

    Ok(table)
}
