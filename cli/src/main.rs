mod commands;
mod fs;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use sheet_assembly::TableError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sheet-assembly")]
#[command(about = "Group serial-tagged data files and lay them out in a sheet table")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Assemble data files into a serial x destination table")]
    Assemble {
        #[arg(required = true, help = "Serial-tagged text data files")]
        files: Vec<String>,
        #[arg(
            long,
            short,
            required = true,
            value_delimiter = ',',
            help = "Destination sheet names (comma-separated)"
        )]
        dest: Vec<String>,
        #[arg(
            long,
            short,
            default_value = "",
            help = "Keyword that only data destinations carry; empty matches all"
        )]
        keyword: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, value_name = "N", help = "Override the serial length (default 12)")]
        serial_length: Option<usize>,
    },
    #[command(about = "Show the parsed identity of file names")]
    Inspect {
        #[arg(required = true, help = "File paths to parse")]
        files: Vec<String>,
        #[arg(long, help = "Parse without a serial prefix")]
        no_serial: bool,
        #[arg(long, value_name = "N", help = "Override the serial length (default 12)")]
        serial_length: Option<usize>,
        #[arg(long, help = "Read each file and report its tab-delimited grid size")]
        contents: bool,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assemble {
            files,
            dest,
            keyword,
            format,
            serial_length,
        } => commands::assemble::run(&files, &dest, &keyword, format, serial_length),
        Commands::Inspect {
            files,
            no_serial,
            serial_length,
            contents,
        } => commands::inspect::run(&files, no_serial, serial_length, contents),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e)
        }
    }
}

fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    if is_internal_error(err) {
        ExitCode::from(3)
    } else {
        ExitCode::from(2)
    }
}

/// Table errors other than duplicate headers point at assembly bookkeeping
/// rather than user input.
fn is_internal_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        if let Some(table_err) = cause.downcast_ref::<TableError>() {
            return !matches!(table_err, TableError::DuplicateHeader { .. });
        }
        false
    })
}
