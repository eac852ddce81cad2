//! Output handling shared by all commands.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use crate::{
    api::Outcome,
    cli::types::{OutputFormat, OutputOptions},
    Result, Table,
};

/// Write `table` to `writer` in the requested format.
pub fn write_table<W: Write>(table: &Table, format: OutputFormat, mut writer: W) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(writer, "{}", table.render())?;
            writeln!(writer, "\n{} rows returned", table.len())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, table)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => table.write_csv(&mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Print or save a command's result.
///
/// `NoData` is not an error here: the cause was already logged by the client,
/// so this only tells the user there is nothing to show. Returns whether a
/// table was written.
pub fn emit(outcome: Outcome<Table>, options: &OutputOptions) -> Result<bool> {
    let table = match outcome {
        Outcome::Data(table) => table,
        Outcome::NoData(_) => {
            eprintln!("No data returned by the Cartola API.");
            return Ok(false);
        }
    };

    match &options.path {
        Some(path) => {
            let file = File::create(path)?;
            write_table(&table, options.format, BufWriter::new(file))?;
            eprintln!("✓ Wrote {} rows to {}", table.len(), path.display());
        }
        None => write_table(&table, options.format, io::stdout().lock())?,
    }

    Ok(true)
}
