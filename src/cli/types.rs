//! Output options for CLI commands.

use std::fmt;
use std::path::PathBuf;

/// How a table is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bordered text table
    #[default]
    Table,
    /// Pretty-printed JSON array of rows
    Json,
    /// CSV with a header row
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{}", s)
    }
}

/// Where and how command output goes.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// `None` means stdout.
    pub path: Option<PathBuf>,
}
