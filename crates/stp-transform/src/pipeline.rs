//! Whole-table transformation.

use stp_model::{InputTable, OutputTable, OwnerRecord, Role, RoleMapping};

use crate::error::{Result, TransformError};
use crate::fields::{address_line, full_address, full_name};

/// Rows shown when previewing a cleaned table.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Column indices for every role the transformation reads.
struct ColumnIndices {
    first: usize,
    last: usize,
    house: usize,
    street: usize,
    suffix: Option<usize>,
    unit: Option<usize>,
    city: usize,
    state: usize,
    zip: usize,
}

impl ColumnIndices {
    fn locate(table: &InputTable, mapping: &RoleMapping) -> Result<Self> {
        let missing = mapping.missing_required();
        if !missing.is_empty() {
            return Err(TransformError::MissingRequiredFields { missing });
        }

        let optional = |role: Role| -> Result<Option<usize>> {
            let Some(column) = mapping.column(role) else {
                return Ok(None);
            };
            table
                .column_index(column)
                .map(Some)
                .ok_or_else(|| TransformError::ColumnNotFound {
                    role,
                    column: column.to_string(),
                })
        };
        let required = |role: Role| -> Result<usize> {
            optional(role)?.ok_or(TransformError::MissingRequiredFields {
                missing: vec![role],
            })
        };

        Ok(Self {
            first: required(Role::FirstName)?,
            last: required(Role::LastName)?,
            house: required(Role::HouseNumber)?,
            street: required(Role::StreetName)?,
            suffix: optional(Role::StreetSuffix)?,
            unit: optional(Role::Unit)?,
            city: required(Role::City)?,
            state: required(Role::State)?,
            zip: required(Role::Zip)?,
        })
    }
}

/// Derives `OWNER NAME` and `MAILING ADDRESS` for every row.
///
/// Fails before producing any row when a required role is unresolved.
pub fn transform(table: &InputTable, mapping: &RoleMapping) -> Result<OutputTable> {
    let columns = ColumnIndices::locate(table, mapping)?;

    let records: Vec<OwnerRecord> = table
        .rows()
        .map(|row| {
            let cell = |index: usize| row.get(index).and_then(Option::as_deref);
            let line = address_line(
                cell(columns.house),
                cell(columns.street),
                columns.suffix.map(cell),
                columns.unit.map(cell),
            );
            OwnerRecord {
                owner_name: full_name(cell(columns.first), cell(columns.last)),
                mailing_address: full_address(
                    &line,
                    cell(columns.city),
                    cell(columns.state),
                    cell(columns.zip),
                ),
            }
        })
        .collect();

    tracing::info!(
        rows = records.len(),
        with_suffix = columns.suffix.is_some(),
        with_unit = columns.unit.is_some(),
        "built owner records"
    );

    Ok(OutputTable::new(records))
}
