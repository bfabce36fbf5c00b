use crate::OutputFormat;
use crate::output::{json, text};
use anyhow::{Context, Result};
use sheet_assembly::{
    DataFile, Destination, NamingConfig, assemble_table, group_by_serial, report_from_table,
};
use std::io;
use std::process::ExitCode;

pub fn run(
    files: &[String],
    dest: &[String],
    keyword: &str,
    format: OutputFormat,
    serial_length: Option<usize>,
) -> Result<ExitCode> {
    let config = naming_config(serial_length)?;

    let mut parsed = Vec::with_capacity(files.len());
    for path in files {
        let file = DataFile::text_data_with(path, &config)
            .with_context(|| format!("Failed to parse file name: {}", path))?;
        parsed.push(file);
    }

    let groups = group_by_serial(parsed).context("Failed to group files by serial")?;
    let destinations: Vec<Destination> = dest.iter().map(Destination::new).collect();
    let table =
        assemble_table(&groups, &destinations, keyword).context("Failed to assemble table")?;
    let report = report_from_table(&table).context("Failed to build assembly report")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Text => text::write_assembly_table(&mut handle, &report)?,
        OutputFormat::Json => json::write_report(&mut handle, &report)?,
    }

    let matched_any = report.cells.iter().any(|c| !c.files.is_empty());
    if matched_any {
        Ok(ExitCode::from(0))
    } else {
        Ok(ExitCode::from(1))
    }
}

fn naming_config(serial_length: Option<usize>) -> Result<NamingConfig> {
    let mut config = NamingConfig::default();
    if let Some(len) = serial_length {
        config.serial_len = len;
    }
    config.validate().context("Invalid serial length")?;
    Ok(config)
}
