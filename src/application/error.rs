// src/application/error.rs
use crate::domain::errors::DomainError;
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Infrastructure(msg) => msg,
        }
    }

    /// Keeps the kind of `err` and prefixes its message with `"{context}: "`.
    pub fn with_context(err: DomainError, context: impl fmt::Display) -> Self {
        let message = format!("{context}: {}", err.message());
        match err {
            DomainError::Validation(_) => Self::Validation(message),
            DomainError::NotFound(_) => Self::NotFound(message),
            DomainError::Persistence(_) => Self::Infrastructure(message),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}
