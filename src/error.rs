use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the PDF text extraction pipeline
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input path is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Unsupported input type: expected PDF, found {0}")]
    UnsupportedFileType(String),

    #[error("Input file too large: {size} bytes exceeds maximum {max_size} bytes")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Failed to create output directory {}: {}", .path.display(), .source)]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PDF text extraction failed: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Process exit status for this error. Failures raised inside the
    /// extraction library get their own code; everything else exits 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExtractError::Extraction(_) => 2,
            _ => 1,
        }
    }
}

/// Convenience Result type with ExtractError
pub type Result<T> = std::result::Result<T, ExtractError>;
