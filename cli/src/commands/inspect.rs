use crate::fs::FsContentSource;
use anyhow::{Context, Result};
use sheet_assembly::{ContentSource, DataFile, NamingConfig, parse_delimited};
use std::io::{self, Write};
use std::process::ExitCode;

pub fn run(
    files: &[String],
    no_serial: bool,
    serial_length: Option<usize>,
    contents: bool,
) -> Result<ExitCode> {
    let mut config = NamingConfig::default();
    if let Some(len) = serial_length {
        config.serial_len = len;
    }
    config.validate().context("Invalid serial length")?;

    let source = FsContentSource;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut failures = 0usize;

    for path in files {
        match DataFile::parse_with(path, !no_serial, &config) {
            Ok(file) => {
                writeln!(handle, "{}", path)?;
                if file.uses_serial() {
                    writeln!(handle, "  serial: {}", file.serial())?;
                }
                writeln!(handle, "  name:   {}", file.name())?;
                writeln!(handle, "  format: {}", file.format())?;
                writeln!(handle, "  path:   {}", file.path())?;
                if contents {
                    match source.read_text(&file) {
                        Ok(text) => {
                            let grid = parse_delimited(&text);
                            writeln!(handle, "  cells:  {}x{}", grid.nrows(), grid.ncols())?;
                        }
                        Err(e) => {
                            writeln!(handle, "  cells:  unreadable ({})", e)?;
                            failures += 1;
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                failures += 1;
            }
        }
    }

    if failures == 0 {
        Ok(ExitCode::from(0))
    } else {
        Ok(ExitCode::from(1))
    }
}
