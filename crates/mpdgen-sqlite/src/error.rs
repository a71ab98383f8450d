use std::path::PathBuf;

use mpdgen_core::GenError;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Input(#[from] GenError),

    #[error("failed to remove existing database `{path}`: {source}")]
    RemoveExisting {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
