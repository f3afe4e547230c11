use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
