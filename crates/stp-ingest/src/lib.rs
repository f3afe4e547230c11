//! Property-record CSV ingestion.
//!
//! Loads an uploaded spreadsheet into an [`InputTable`](stp_model::InputTable):
//! header names are trimmed, empty cells and null markers such as `N/A` or
//! `NULL` become missing values, and fully blank lines are skipped.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use stp_ingest::read_csv_table;
//!
//! let table = read_csv_table(Path::new("county_export.csv"))?;
//! println!("{} rows, columns: {:?}", table.row_count(), table.headers());
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{
    MAX_CSV_FILE_SIZE, MISSING_VALUE_MARKERS, check_file_size, check_file_size_with_limit,
    read_csv_reader, read_csv_table, validate_encoding,
};
