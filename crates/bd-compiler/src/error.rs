use std::io;
use std::path::PathBuf;

/// File-level failures. Per-line problems never surface here; they are
/// collected as skipped lines instead.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Input file '{}' not found", .path.display())]
    InputNotFound { path: PathBuf },
    #[error("Failed to read '{}': {source}", .path.display())]
    InputRead { path: PathBuf, source: io::Error },
    #[error("Failed to serialize rule set: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write '{}': {source}", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, CompileError>;
