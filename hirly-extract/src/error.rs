use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single text-extraction attempt.
///
/// Read failures (missing file, permission denied, I/O error mid-read)
/// and parse failures (corrupt or non-PDF bytes) surface as the same
/// error kind; the original cause stays attached so callers that need
/// to tell them apart can downcast it.
#[derive(Error, Debug)]
#[error("Failed to extract text from document: {source}")]
pub struct ExtractError {
    /// The path whose extraction failed.
    pub path: PathBuf,

    /// The underlying I/O or parser error.
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl ExtractError {
    pub(crate) fn new(
        path: impl Into<PathBuf>,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
