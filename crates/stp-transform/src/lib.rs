//! Builds the two-column skip-trace table from a resolved spreadsheet.
//!
//! - `OWNER NAME`: first and last name
//! - `MAILING ADDRESS`: `<line>, <city>, <state> <zip>`, where the line is house
//!   number, street, and the optional suffix and unit
//!
//! Missing cells count as empty text and every derived value has its
//! whitespace collapsed to single spaces.

#![deny(unsafe_code)]

pub mod error;
pub mod fields;
pub mod pipeline;

pub use error::{Result, TransformError};
pub use fields::{address_line, collapse_whitespace, full_address, full_name};
pub use pipeline::{DEFAULT_PREVIEW_ROWS, transform};
