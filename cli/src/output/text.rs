use anyhow::Result;
use sheet_assembly::AssemblyReport;
use std::io::Write;

/// Writes the report as a width-aligned table: serials down the left edge,
/// destination names across the top, matched file names in the cells.
pub fn write_assembly_table<W: Write>(w: &mut W, report: &AssemblyReport) -> Result<()> {
    let ncols = report.destinations.len();

    let rendered: Vec<Vec<String>> = report
        .serials
        .iter()
        .enumerate()
        .map(|(row, _)| {
            (0..ncols)
                .map(|col| render_cell(&report.cells[row * ncols + col].files))
                .collect()
        })
        .collect();

    let mut widths = vec![0usize; ncols + 1];
    for serial in &report.serials {
        widths[0] = widths[0].max(display_width(serial));
    }
    for (col, destination) in report.destinations.iter().enumerate() {
        widths[col + 1] = display_width(destination);
    }
    for row in &rendered {
        for (col, cell) in row.iter().enumerate() {
            widths[col + 1] = widths[col + 1].max(display_width(cell));
        }
    }

    write_padded(w, "", widths[0])?;
    for (col, destination) in report.destinations.iter().enumerate() {
        write_padded(w, destination, widths[col + 1])?;
    }
    writeln!(w)?;

    for (row, serial) in report.serials.iter().enumerate() {
        write_padded(w, serial, widths[0])?;
        for (col, cell) in rendered[row].iter().enumerate() {
            write_padded(w, cell, widths[col + 1])?;
        }
        writeln!(w)?;
    }

    Ok(())
}

fn render_cell(files: &[String]) -> String {
    if files.is_empty() {
        return "-".to_string();
    }
    files
        .iter()
        .map(|f| base_name(f))
        .collect::<Vec<_>>()
        .join(", ")
}

fn base_name(full: &str) -> &str {
    full.rfind(['/', '\\'])
        .map(|i| &full[i + 1..])
        .unwrap_or(full)
}

fn write_padded<W: Write>(w: &mut W, text: &str, width: usize) -> Result<()> {
    let pad = width.saturating_sub(display_width(text));
    write!(w, "{}{}    ", " ".repeat(pad), text)?;
    Ok(())
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}
