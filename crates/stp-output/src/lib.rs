//! CSV export of the cleaned `OWNER NAME` / `MAILING ADDRESS` table.

#![deny(unsafe_code)]

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{CSV_CONTENT_TYPE, DEFAULT_OUTPUT_FILE_NAME, to_csv_bytes, write_csv};
