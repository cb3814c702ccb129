//! Error types for the PDF drop-merge library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type: a merge attempt either fails validation before any
/// work is done, or fails during execution with an underlying cause.
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer than two files in the list when a merge was requested
    #[error("Please add at least 2 PDF files.")]
    TooFewFiles(usize),

    /// Merge execution failed
    #[error("Failed to merge PDFs: {0}")]
    Merge(#[from] MergeError),
}

/// Failure during merge execution. Every cause is terminal for the attempt;
/// the caller discards the partially built document and no output is written.
#[derive(Error, Debug)]
pub enum MergeError {
    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Input PDF has no pages
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// PDF parsing or writing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// General error
    #[error("{0}")]
    General(String),
}
