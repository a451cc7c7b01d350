//! CSV writer for transfer tables.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_OUTPUT_DIR;
use crate::error::Result;
use crate::schema::Tabular;
use crate::types::TransferTable;

/// Write a table as CSV to any writer.
///
/// The header row comes from the record type's schema, so an empty table
/// still produces a header.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_csv<W: Write, R: Tabular>(writer: W, table: &TransferTable<R>) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(R::SCHEMA.header())?;
    for record in &table.records {
        csv.write_record(record.row())?;
    }

    csv.flush()?;
    Ok(())
}

/// Render a table as a CSV string.
///
/// # Examples
/// ```
/// use tm_transfers::export::generate_csv;
/// use tm_transfers::types::{Transfer, TransferTable};
///
/// let table: TransferTable<Transfer> = TransferTable::empty();
/// let csv = generate_csv(&table).unwrap();
/// assert!(csv.starts_with("club,name,age,"));
/// assert_eq!(csv.lines().count(), 1);
/// ```
pub fn generate_csv<R: Tabular>(table: &TransferTable<R>) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, table)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Save a table to `<output_base>/<season>/<league_slug>.csv`.
///
/// # Arguments
/// * `table` - Records to write
/// * `league_slug` - League slug, used as the file name
/// * `season` - Season start year, used as the directory name
/// * `output_base` - Base output directory (default: `data`)
///
/// # Returns
/// Path to the written file
pub fn save_csv<R: Tabular>(
    table: &TransferTable<R>,
    league_slug: &str,
    season: i32,
    output_base: Option<&Path>,
) -> Result<PathBuf> {
    let output_base = output_base.unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));

    let output_dir = output_base.join(season.to_string());
    fs::create_dir_all(&output_dir)?;

    let output_file = output_dir.join(format!("{league_slug}.csv"));
    let temp_file = output_dir.join(format!(".{league_slug}.csv.tmp"));

    // Write to temp file first, then sync and rename for atomicity
    {
        let mut file = File::create(&temp_file)?;
        write_csv(&mut file, table)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;

    tracing::debug!(path = %output_file.display(), records = table.len(), "Saved CSV");
    Ok(output_file)
}
