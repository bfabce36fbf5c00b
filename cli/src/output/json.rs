use anyhow::Result;
use sheet_assembly::AssemblyReport;
use std::io::Write;

pub fn write_report<W: Write>(w: &mut W, report: &AssemblyReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?;
    Ok(())
}
