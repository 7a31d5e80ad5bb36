use std::path::PathBuf;
use thiserror::Error;

/// The result type.
pub type IrResult<T> = Result<T, IrError>;

/// Errors raised while loading a service description.
#[derive(Debug, Error)]
pub enum IrError {
    /// The description file could not be read.
    #[error("Failed to read the service description at `{}`", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The description is not a valid service document.
    #[error("Invalid service description: {0}")]
    Json(#[from] serde_json::Error),
}
