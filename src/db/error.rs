use std::path::PathBuf;

use thiserror::Error;

use crate::models::FruitId;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by the record store. `NotFound` is recoverable and leaves
/// the table untouched; the others mean the durable write or read did not
/// happen.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Fruit {0} not found.")]
    NotFound(FruitId),
    #[error("failed to {action}")]
    Persistence {
        action: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    /// The write committed but re-reading the list failed. Retrying the
    /// intent would apply it twice.
    #[error("saved fruit {id} but failed to reload the list")]
    StaleProjection {
        id: FruitId,
        #[source]
        source: Box<StoreError>,
    },
    #[error("failed to create data directory {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not locate home directory")]
    HomeDirUnavailable,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// True when the mutation reached the database even though an error was
    /// returned.
    pub fn is_saved(&self) -> bool {
        matches!(self, StoreError::StaleProjection { .. })
    }
}

/// Attach a short description of the failed statement to a SQLite error,
/// mirroring `anyhow::Context` for the typed store errors.
pub(crate) trait PersistenceContext<T> {
    fn persist_context(self, action: &'static str) -> StoreResult<T>;
}

impl<T> PersistenceContext<T> for Result<T, rusqlite::Error> {
    fn persist_context(self, action: &'static str) -> StoreResult<T> {
        self.map_err(|source| StoreError::Persistence { action, source })
    }
}
