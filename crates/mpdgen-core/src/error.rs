use std::path::PathBuf;

use rand::distributions::WeightedError;

/// Errors raised while generating or (de)serializing notional datasets.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("cannot split 1.0 FTE across {roles} roles in 0.1 increments")]
    TooManyRoles { roles: usize },

    #[error("no CIMPL rank for DFP `{dfp}`")]
    UnknownDfp { dfp: String },

    #[error("requested {requested} test-score records but there are no MPD records to reference")]
    EmptyReferenceSet { requested: usize },

    #[error("invalid sampling weights: {0}")]
    Weights(#[from] WeightedError),

    #[error("i/o error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in `{path}`: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{path}` does not contain a top-level JSON array")]
    NotAnArray { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, GenError>;
