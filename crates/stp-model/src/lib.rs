//! Core types shared by the skip-trace preparation crates.
//!
//! - [`Role`]: the nine logical fields the resolver looks for
//! - [`InputTable`]: an uploaded spreadsheet, rows of optional cells
//! - [`RoleMapping`]: which input column each role resolved to
//! - [`OutputTable`]: the two-column `OWNER NAME` / `MAILING ADDRESS` result

#![deny(unsafe_code)]

pub mod error;
pub mod mapping;
pub mod output;
pub mod role;
pub mod table;

pub use error::{ModelError, Result};
pub use mapping::{Resolution, RoleMapping};
pub use output::{MAILING_ADDRESS_HEADER, OUTPUT_HEADERS, OWNER_NAME_HEADER, OutputTable, OwnerRecord};
pub use role::Role;
pub use table::{InputTable, normalize_column_name};
