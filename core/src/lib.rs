//! Sheet Assembly: a library for laying out serial-tagged data files in
//! header-addressed tables.
//!
//! This crate provides functionality for:
//! - Parsing structured file names into serial, name, and format parts ([`DataFile`])
//! - Partitioning files into serial-consistent groups ([`group_by_serial`])
//! - A growable grid and a dual-addressed table to hold the result ([`Grid`], [`Table`])
//! - Matching groups against destination sheets by keyword ([`assemble_table`])
//!
//! # Quick Start
//!
//! ```
//! use sheet_assembly::{DataFile, Destination, assemble_table, group_by_serial};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let files = vec![
//!     DataFile::text_data(r"C:\data\000000000001_sheetA_raw.txt")?,
//!     DataFile::text_data(r"C:\data\000000000002_sheetA_raw.txt")?,
//! ];
//! let groups = group_by_serial(files)?;
//! let destinations = vec![Destination::new("sheetA_raw")];
//! let table = assemble_table(&groups, &destinations, "_raw")?;
//!
//! let cell = table.get_by_header(&"000000000001".to_string(), &destinations[0])?;
//! assert_eq!(cell.map(Vec::len), Some(1));
//! # Ok(())
//! # }
//! ```

mod assembly;
mod config;
mod data_file;
mod destination;
pub mod error_codes;
mod grid;
mod grouping;
mod output;
mod serial_group;
mod table;
mod text_grid;

pub use assembly::{AssemblyTable, assemble_table};
pub use config::{ConfigError, DEFAULT_SERIAL_LEN, NamingConfig};
pub use data_file::{ContentSource, DataFile, FileNameError, TEXT_FORMAT, WORKBOOK_FORMAT};
pub use destination::Destination;
pub use grid::{Grid, GridError};
pub use grouping::group_by_serial;
pub use output::json::{AssemblyReport, CellMatches, report_from_table, serialize_report};
pub use serial_group::{GroupError, SerialGroup};
pub use table::{Axis, HeaderSlot, Table, TableError};
pub use text_grid::parse_delimited;
