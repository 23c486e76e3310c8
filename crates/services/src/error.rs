//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SessionStateError;
use storage::questions::RowSourceError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions match the selected filters")]
    NoMatches,
    #[error(transparent)]
    State(#[from] SessionStateError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Source(#[from] RowSourceError),
}
