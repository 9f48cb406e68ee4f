use crate::domain::errors::{DomainError, DomainResult};
use std::{future::Future, time::Duration};

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Runs a storage call, turning both sqlx errors and an elapsed `limit`
/// into `DomainError::Persistence`.
pub(super) async fn bounded<T, F>(limit: Duration, operation: F) -> DomainResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result.map_err(map_sqlx),
        Err(_) => Err(DomainError::Persistence(format!(
            "database operation timed out after {limit:?}"
        ))),
    }
}
