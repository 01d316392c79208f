use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Rendering was requested before any sample arrived.
    #[error("no sample has been received; nothing to render")]
    EmptyState,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode JSON ({origin}) at JSON path {path}: {message}")]
    Decode { origin: String, path: String, message: String },

    #[error("JSON pointer {pointer:?} selected nothing ({origin})")]
    Pointer { origin: String, pointer: String },

    #[error("jq: {message}")]
    Jq { message: String },

    #[error("invalid glob pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("glob: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("glob pattern matched no files: {0}")]
    NoMatches(String),

    #[error("failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no input documents")]
    EmptyInput,
}
