//! Core library for SPT bukti pemotongan (bupot) processing.
//!
//! This crate provides:
//! - PDF text extraction for the fixed bupot form layout
//! - Line-level text normalization for PDF extraction artifacts
//! - Anchor-based field extraction (H, A, B, and C form sections)
//! - The fixed-schema field record and its `KEY: value` serialization

pub mod error;
pub mod models;
pub mod pdf;
pub mod bupot;
pub mod pipeline;

pub use error::{BupotError, PdfError, Result};
pub use models::fields::BupotFields;
pub use pdf::{PdfExtractor, PdfProcessor};
pub use bupot::{normalize, BupotParser, ExtractionResult, RuleBasedParser};
pub use pipeline::Pipeline;
