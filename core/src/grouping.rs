//! Partitioning of data files into serial groups.

use crate::data_file::DataFile;
use crate::serial_group::{GroupError, SerialGroup};

/// Partitions `files` into serial-consistent groups.
///
/// Files are processed in input order: each goes to the first existing group
/// that can accept it, or opens a new group at the end. Group order therefore
/// follows the first occurrence of each serial, and member order within a
/// group follows the input. A file without a serial fails the whole call
/// with [`GroupError::NoSerial`].
///
/// O(n·g) over n files and g distinct serials; g stays small in practice.
pub fn group_by_serial(files: Vec<DataFile>) -> Result<Vec<SerialGroup>, GroupError> {
    let mut groups: Vec<SerialGroup> = Vec::new();
    for file in files {
        match groups.iter_mut().find(|g| g.can_accept(&file)) {
            Some(group) => group.push(file)?,
            None => {
                let mut group = SerialGroup::new();
                group.push(file)?;
                groups.push(group);
            }
        }
    }
    Ok(groups)
}
