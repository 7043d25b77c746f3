//! Error types for the bupot-core library.

use thiserror::Error;

/// Main error type for the bupot library.
///
/// Only whole-run failures live here. A field whose anchor or pattern is not
/// found is not an error; it stays an empty string in the field record.
#[derive(Error, Debug)]
pub enum BupotError {
    /// Source document missing or unreadable.
    #[error("input unavailable: {0}")]
    InputUnavailable(#[source] std::io::Error),

    /// PDF-to-text conversion failed.
    #[error("PDF error: {0}")]
    Conversion(#[from] PdfError),

    /// An output artifact could not be written.
    #[error("output write failed: {0}")]
    OutputWrite(#[source] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the bupot library.
pub type Result<T> = std::result::Result<T, BupotError>;
