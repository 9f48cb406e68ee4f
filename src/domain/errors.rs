// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Expected failures raised by the domain and storage layers.
///
/// `Display` yields the bare message so outer layers can prepend context
/// without repeating a category label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Persistence(String),
}

impl DomainError {
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Persistence(msg) => msg,
        }
    }
}
