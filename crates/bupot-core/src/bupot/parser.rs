//! Rule-based parser composing the per-section extractors.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::fields::BupotFields;

use super::normalize::normalize;
use super::rules::{
    extract_checkbox_section, extract_faktur_reference, extract_identity_value,
    extract_identity_value_skipping, extract_receipt_number, extract_revision_status,
    extract_signer_block, extract_signing_place, extract_tax_object_values,
};
use super::BupotParser;

/// Result of bupot field extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted field record.
    pub fields: BupotFields,
    /// The normalized line sequence the fields were extracted from.
    pub raw_text: String,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based parser for the fixed bupot form layout.
pub struct RuleBasedParser;

impl RuleBasedParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BupotParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        let cleaned = normalize(text);
        let lines: Vec<String> = cleaned.lines().map(str::to_string).collect();

        info!("Parsing bupot form from {} normalized lines", lines.len());

        let mut fields = BupotFields::new();

        fields.h1 = extract_receipt_number(&lines).unwrap_or_default();
        fields.h2 = extract_revision_status(&lines).unwrap_or_default();
        fields.h3 = extract_checkbox_section(&lines, "H.3").unwrap_or_default();
        fields.h4 = extract_checkbox_section(&lines, "H.4").unwrap_or_default();

        fields.a1 = extract_identity_value(&lines, "A.1").unwrap_or_default();
        // A.2 is not recoverable from the flattened text; stays empty.
        fields.a3 = extract_identity_value(&lines, "A.3").unwrap_or_default();
        fields.a4 =
            extract_identity_value_skipping(&lines, "A.4", &fields.a3).unwrap_or_default();

        // B.4's value never survives the flattened text ordering, so the
        // candidates map around it: 1st..5th -> B1, B2, B3, B5, B6.
        let mut tax_values = extract_tax_object_values(&lines).into_iter();
        fields.b1 = tax_values.next().unwrap_or_default();
        fields.b2 = tax_values.next().unwrap_or_default();
        fields.b3 = tax_values.next().unwrap_or_default();
        fields.b5 = tax_values.next().unwrap_or_default();
        fields.b6 = tax_values.next().unwrap_or_default();

        fields.b8 =
            extract_faktur_reference(&lines, &fields.a4, &fields.b1).unwrap_or_default();

        let mut signer = extract_signer_block(&lines).into_iter();
        fields.c1 = signer.next().unwrap_or_default();
        fields.c2 = signer.next().unwrap_or_default();
        fields.c3 = signer.next().unwrap_or_default();
        fields.c5 = extract_signing_place(&lines).unwrap_or_default();

        let resolved = fields.as_entries().iter().filter(|(_, v)| !v.is_empty()).count();
        debug!("Resolved {} non-empty fields", resolved);

        ExtractionResult {
            fields,
            raw_text: cleaned,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
