use std::fs;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use stp_model::{OUTPUT_HEADERS, OutputTable};

use crate::error::{OutputError, Result};

/// File name used for the cleaned export and the upload attachment.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "Cleaned_For_SkipTrace.csv";

/// MIME type of the export.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Encodes the table as UTF-8 CSV with a header row and `\n` line endings.
///
/// The header is written even when the table has no rows.
pub fn to_csv_bytes(table: &OutputTable) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_HEADERS)?;
    for record in table.records() {
        writer.write_record([&record.owner_name, &record.mailing_address])?;
    }

    writer
        .into_inner()
        .map_err(|e| OutputError::Csv(csv::Error::from(e.into_error())))
}

/// Writes the CSV export to `path`, replacing any existing file.
pub fn write_csv(table: &OutputTable, path: &Path) -> Result<()> {
    let bytes = to_csv_bytes(table)?;
    fs::write(path, &bytes).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        bytes = bytes.len(),
        "wrote cleaned CSV"
    );
    Ok(())
}
