//! Rule-based field extractors for the bupot form sections.
//!
//! Each extractor is a pure function over the normalized line sequence.
//! First match wins in the stated scan direction; a missing anchor yields
//! `None` (or an empty list) and the caller leaves the field empty.

pub mod header;
pub mod identity;
pub mod patterns;
pub mod signature;
pub mod tax_object;

pub use header::{extract_checkbox_section, extract_receipt_number, extract_revision_status};
pub use identity::{extract_identity_value, extract_identity_value_skipping};
pub use signature::{extract_signer_block, extract_signing_place};
pub use tax_object::{extract_faktur_reference, extract_tax_object_values};

/// Index of the first line exactly equal to `anchor`.
pub(crate) fn position_of(lines: &[String], anchor: &str) -> Option<usize> {
    lines.iter().position(|line| line.as_str() == anchor)
}

/// Index of the first line starting with `prefix`.
pub(crate) fn position_starting_with(lines: &[String], prefix: &str) -> Option<usize> {
    lines.iter().position(|line| line.starts_with(prefix))
}

#[cfg(test)]
pub(crate) fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}
