//! CSV file reading into an [`InputTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use stp_model::InputTable;

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (200 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// Cell values read as missing, besides the empty string.
///
/// The set spreadsheet exports commonly use for nulls; matched exactly,
/// without trimming.
pub const MISSING_VALUE_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn open_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Reads a CSV file from disk.
///
/// The first non-blank line is the header row.
pub fn read_csv_table(path: &Path) -> Result<InputTable> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let table = read_csv_reader(file, &path.display().to_string())?;

    tracing::debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.headers().len(),
        "loaded CSV"
    );

    Ok(table)
}

/// Reads CSV content from any reader.
///
/// `source_name` only labels errors.
pub fn read_csv_reader<R: Read>(reader: R, source_name: &str) -> Result<InputTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let parse_error = |e: csv::Error| IngestError::CsvParse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    };

    let mut records = reader.records();
    let header = loop {
        let Some(record) = records.next() else {
            return Err(IngestError::EmptyCsv {
                source_name: source_name.to_string(),
            });
        };
        let record = record.map_err(parse_error)?;
        if !is_blank(&record) {
            break record;
        }
    };

    let headers: Vec<String> = header.iter().map(normalize_header).collect();
    let mut table = InputTable::new(headers);
    let mut skipped = 0usize;

    for record in records {
        let record = record.map_err(parse_error)?;
        if is_blank(&record) {
            skipped += 1;
            continue;
        }
        table.push_row(record.iter().map(to_cell).collect());
    }

    if skipped > 0 {
        tracing::debug!(source = source_name, skipped, "skipped blank rows");
    }
    if table.headers().len() > 500 {
        tracing::warn!(
            source = source_name,
            columns = table.headers().len(),
            "spreadsheet has more than 500 columns"
        );
    }

    Ok(table)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

fn to_cell(raw: &str) -> Option<String> {
    if raw.is_empty() || MISSING_VALUE_MARKERS.contains(&raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_rejects_utf16_bom() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0x00]);
        let err = validate_encoding(file.path()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            }
        ));
    }

    #[test]
    fn test_accepts_utf8_bom() {
        let file = create_temp_csv("\u{feff}First Name,Last Name\nJane,Doe\n".as_bytes());
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers(), ["First Name", "Last Name"]);
    }

    #[test]
    fn test_size_limit() {
        let file = create_temp_csv(b"A,B\n1,2\n");
        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
        let err = check_file_size_with_limit(file.path(), 4).unwrap_err();
        assert!(matches!(err, IngestError::FileTooLarge { max_size: 4, .. }));
    }

    #[test]
    fn test_missing_value_markers() {
        assert_eq!(to_cell("N/A"), None);
        assert_eq!(to_cell("NULL"), None);
        assert_eq!(to_cell("#N/A"), None);
        assert_eq!(to_cell("NONE"), Some("NONE".to_string()));
        assert_eq!(to_cell(" NA"), Some(" NA".to_string()));
        assert_eq!(to_cell("NAPA"), Some("NAPA".to_string()));
    }

    #[test]
    fn test_missing_file() {
        let err = read_csv_table(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
