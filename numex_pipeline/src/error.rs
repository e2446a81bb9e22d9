use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("File '{}' not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("No files found in input directory '{}'.", dir.display())]
    EmptyInputDir { dir: PathBuf },

    #[error("'{}' has no file name to derive an output name from", path.display())]
    NoFileName { path: PathBuf },

    #[error(transparent)]
    Extract(#[from] numex_core::ExtractError),

    #[error("invalid input directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Whether this is a "nothing to process" condition rather than a failure
    /// while processing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::EmptyInputDir { .. })
    }
}
