//! Parsed identities for named data files.
//!
//! A [`DataFile`] is the identity of a file as carried by its name: directory
//! part, optional serial token, semantic name, and extension. It is parsed
//! once from a full path string and immutable afterwards; nothing here reads
//! file contents. Content access is the [`ContentSource`] capability that
//! collaborators implement.
//!
//! The naming convention is `<path><sep><serial>_<name><ext>` when serial
//! mode is on, else `<path><sep><name><ext>`, with both `/` and `\` accepted
//! as the directory separator.

use crate::config::NamingConfig;
use crate::error_codes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use thiserror::Error;

/// Extension required by [`DataFile::text_data`].
pub const TEXT_FORMAT: &str = ".txt";

/// Extension required by [`DataFile::workbook`].
pub const WORKBOOK_FORMAT: &str = ".xlsx";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FileNameError {
    #[error("[SHASM_FILE_001] invalid file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: &'static str },

    #[error(
        "[SHASM_FILE_002] file name '{name}' is too short: the part before the extension must be longer than {min} characters"
    )]
    TooShortFileName { name: String, min: usize },

    #[error("[SHASM_FILE_003] invalid format for '{name}': expected '{expected}', found '{found}'")]
    InvalidFileFormat {
        name: String,
        expected: &'static str,
        found: String,
    },
}

impl FileNameError {
    pub fn code(&self) -> &'static str {
        match self {
            FileNameError::InvalidFileName { .. } => error_codes::FILE_INVALID_NAME,
            FileNameError::TooShortFileName { .. } => error_codes::FILE_NAME_TOO_SHORT,
            FileNameError::InvalidFileFormat { .. } => error_codes::FILE_INVALID_FORMAT,
        }
    }
}

/// Capability for reading a file's contents as text.
///
/// The core never performs I/O; the surrounding application supplies an
/// implementation and hands the resulting text wherever it is needed.
pub trait ContentSource {
    fn read_text(&self, file: &DataFile) -> io::Result<String>;
}

/// The parsed identity of a data file.
///
/// Two identities are equal iff their full names are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFile {
    full_name: String,
    path: String,
    serial: String,
    name: String,
    format: String,
    uses_serial: bool,
}

impl DataFile {
    /// Parses `full_name` under the default naming configuration.
    pub fn parse(full_name: &str, uses_serial: bool) -> Result<DataFile, FileNameError> {
        Self::parse_with(full_name, uses_serial, &NamingConfig::default())
    }

    pub fn parse_with(
        full_name: &str,
        uses_serial: bool,
        config: &NamingConfig,
    ) -> Result<DataFile, FileNameError> {
        let sep_idx = full_name
            .rfind('/')
            .or_else(|| full_name.rfind('\\'))
            .ok_or_else(|| FileNameError::InvalidFileName {
                name: full_name.to_string(),
                reason: "no directory separator",
            })?;

        let dot_idx = match full_name.rfind('.') {
            Some(i) if i > sep_idx => i,
            _ => {
                return Err(FileNameError::InvalidFileName {
                    name: full_name.to_string(),
                    reason: "no extension separator in the file name",
                });
            }
        };

        let stem = &full_name[sep_idx + 1..dot_idx];
        let path = full_name[..sep_idx].to_string();
        let format = full_name[dot_idx..].to_string();

        if !uses_serial {
            return Ok(DataFile {
                full_name: full_name.to_string(),
                path,
                serial: String::new(),
                name: stem.to_string(),
                format,
                uses_serial,
            });
        }

        if stem.chars().count() <= config.serial_len {
            return Err(FileNameError::TooShortFileName {
                name: full_name.to_string(),
                min: config.serial_len,
            });
        }

        // The serial is the first `serial_len` characters of the stem; the
        // single separator character after it is not part of the name.
        let serial_end = char_offset(stem, config.serial_len);
        let name_start = char_offset(stem, config.serial_len + 1);
        Ok(DataFile {
            full_name: full_name.to_string(),
            path,
            serial: stem[..serial_end].to_string(),
            name: stem[name_start..].to_string(),
            format,
            uses_serial,
        })
    }

    /// Parses a serial-tagged text data file; the extension must be `.txt`.
    pub fn text_data(full_name: &str) -> Result<DataFile, FileNameError> {
        Self::text_data_with(full_name, &NamingConfig::default())
    }

    pub fn text_data_with(
        full_name: &str,
        config: &NamingConfig,
    ) -> Result<DataFile, FileNameError> {
        let file = Self::parse_with(full_name, true, config)?;
        file.require_format(TEXT_FORMAT)?;
        Ok(file)
    }

    /// Parses a workbook file; no serial, and the extension must be `.xlsx`.
    pub fn workbook(full_name: &str) -> Result<DataFile, FileNameError> {
        let file = Self::parse(full_name, false)?;
        file.require_format(WORKBOOK_FORMAT)?;
        Ok(file)
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Directory part, without the trailing separator.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Serial token; empty when `uses_serial` is false.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Semantic name, with serial and extension stripped.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension, including the leading dot.
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn uses_serial(&self) -> bool {
        self.uses_serial
    }

    fn require_format(&self, expected: &'static str) -> Result<(), FileNameError> {
        if self.format != expected {
            return Err(FileNameError::InvalidFileFormat {
                name: self.full_name.clone(),
                expected,
                found: self.format.clone(),
            });
        }
        Ok(())
    }
}

impl PartialEq for DataFile {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for DataFile {}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.uses_serial {
            write!(f, "{} {}{}", self.serial, self.name, self.format)
        } else {
            write!(f, "{}{}", self.name, self.format)
        }
    }
}

/// Byte offset of the `n`th character of `s`, or `s.len()` past the end.
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}
