use sheet_assembly::{ContentSource, DataFile};
use std::fs;
use std::io;

/// Filesystem-backed implementation of the library's content capability.
pub struct FsContentSource;

impl ContentSource for FsContentSource {
    fn read_text(&self, file: &DataFile) -> io::Result<String> {
        fs::read_to_string(file.full_name())
    }
}
