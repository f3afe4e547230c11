//! Error types for the transformation step.

use stp_model::Role;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// One or more required roles did not resolve to a column.
    #[error("missing required fields: {}", join_roles(.missing))]
    MissingRequiredFields { missing: Vec<Role> },

    /// A mapping names a column the table does not have.
    #[error("column '{column}' resolved for {role} is not in the table")]
    ColumnNotFound { role: Role, column: String },
}

fn join_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|role| role.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, TransformError>;
