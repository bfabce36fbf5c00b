//! Serial-consistent collections of data files.

use crate::data_file::DataFile;
use crate::error_codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroupError {
    #[error("[SHASM_GROUP_001] file '{file}' does not carry a serial")]
    NoSerial { file: String },

    #[error("[SHASM_GROUP_002] file '{file}' has serial '{file_serial}' but the group holds '{group_serial}'")]
    SerialMismatch {
        file: String,
        file_serial: String,
        group_serial: String,
    },
}

impl GroupError {
    pub fn code(&self) -> &'static str {
        match self {
            GroupError::NoSerial { .. } => error_codes::GROUP_NO_SERIAL,
            GroupError::SerialMismatch { .. } => error_codes::GROUP_SERIAL_MISMATCH,
        }
    }
}

/// An ordered collection of files sharing one serial.
///
/// # Invariants
///
/// Every member has `uses_serial == true` and the same serial value. The
/// group adopts the serial of its first member and resets to the empty
/// serial when it becomes empty again, so an emptied group is reusable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialGroup {
    serial: String,
    files: Vec<DataFile>,
}

impl SerialGroup {
    pub fn new() -> SerialGroup {
        SerialGroup::default()
    }

    /// Shared serial; empty while the group has no members.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DataFile> {
        self.files.get(index)
    }

    pub fn files(&self) -> &[DataFile] {
        &self.files
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataFile> {
        self.files.iter()
    }

    pub fn contains(&self, file: &DataFile) -> bool {
        self.files.contains(file)
    }

    /// Whether `file` could be appended without violating the serial
    /// invariant. Checked before mutation; membership decisions never rely
    /// on a failed append.
    pub fn can_accept(&self, file: &DataFile) -> bool {
        file.uses_serial() && (self.serial.is_empty() || self.serial == file.serial())
    }

    /// Appends `file`, adopting its serial if the group is empty.
    pub fn push(&mut self, file: DataFile) -> Result<(), GroupError> {
        self.check(&file)?;
        self.adopt(&file);
        self.files.push(file);
        Ok(())
    }

    /// Inserts `file` at `index` (clamped to the current length).
    pub fn insert(&mut self, index: usize, file: DataFile) -> Result<(), GroupError> {
        self.check(&file)?;
        self.adopt(&file);
        let index = index.min(self.files.len());
        self.files.insert(index, file);
        Ok(())
    }

    /// Removes and returns the member at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<DataFile> {
        if index >= self.files.len() {
            return None;
        }
        let file = self.files.remove(index);
        if self.files.is_empty() {
            self.serial.clear();
        }
        Some(file)
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.serial.clear();
    }

    fn check(&self, file: &DataFile) -> Result<(), GroupError> {
        if !file.uses_serial() {
            return Err(GroupError::NoSerial {
                file: file.to_string(),
            });
        }
        if !self.serial.is_empty() && self.serial != file.serial() {
            return Err(GroupError::SerialMismatch {
                file: file.to_string(),
                file_serial: file.serial().to_string(),
                group_serial: self.serial.clone(),
            });
        }
        Ok(())
    }

    fn adopt(&mut self, file: &DataFile) {
        if self.serial.is_empty() {
            self.serial = file.serial().to_string();
        }
    }
}

impl<'a> IntoIterator for &'a SerialGroup {
    type Item = &'a DataFile;
    type IntoIter = std::slice::Iter<'a, DataFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
