use std::path::PathBuf;

/// Failures at the I/O boundary. Comparison and search themselves are total.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read or write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("corrupted session store {}: {message}", .path.display())]
    Store { path: PathBuf, message: String },
    #[error("JSON pointer {0:?} does not address a value")]
    Pointer(String),
    #[error("session name cannot be empty")]
    EmptySessionName,
    #[error("cannot save an empty session, both inputs are blank")]
    EmptySession,
    #[error("session not found: {0}")]
    SessionNotFound(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
