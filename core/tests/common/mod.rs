//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use sheet_assembly::{DataFile, Destination, SerialGroup, group_by_serial};

pub fn text_file(file_name: &str) -> DataFile {
    DataFile::text_data(&format!(r"C:\data\{file_name}"))
        .unwrap_or_else(|e| panic!("failed to parse test file name {file_name}: {e}"))
}

pub fn plain_file(file_name: &str) -> DataFile {
    DataFile::parse(&format!(r"C:\data\{file_name}"), false)
        .unwrap_or_else(|e| panic!("failed to parse test file name {file_name}: {e}"))
}

pub fn dest(name: &str) -> Destination {
    Destination::new(name)
}

pub fn dests(names: &[&str]) -> Vec<Destination> {
    names.iter().map(|n| Destination::new(*n)).collect()
}

pub fn groups_from_names(file_names: &[&str]) -> Vec<SerialGroup> {
    let files = file_names.iter().map(|n| text_file(n)).collect();
    group_by_serial(files).unwrap_or_else(|e| panic!("failed to group test files: {e}"))
}
