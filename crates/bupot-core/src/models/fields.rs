//! The fixed-schema field record for the bupot form.

use serde::{Deserialize, Serialize};

/// All named fields extracted from one bupot document.
///
/// The key set is closed: one `String` per form field, grouped by section
/// (H = document header, A = income recipient identity, B = tax object,
/// C = signer statement). Fields that could not be resolved hold an empty
/// string; three of them (A2, B4, C4) are not recoverable from this layout
/// and are always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct BupotFields {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub h4: String,
    pub a1: String,
    pub a2: String,
    pub a3: String,
    pub a4: String,
    pub b1: String,
    pub b2: String,
    pub b3: String,
    pub b4: String,
    pub b5: String,
    pub b6: String,
    pub b7: String,
    pub b8: String,
    pub b9: String,
    pub b10: String,
    pub b11: String,
    pub b12: String,
    pub c1: String,
    pub c2: String,
    pub c3: String,
    pub c4: String,
    pub c5: String,
}

/// Number of fields in the record.
pub const FIELD_COUNT: usize = 25;

impl BupotFields {
    /// Create an empty record (every field an empty string).
    pub fn new() -> Self {
        Self::default()
    }

    /// All fields as `(key, value)` pairs in canonical order:
    /// H1..H4, A1..A4, B1..B12, C1..C5.
    pub fn as_entries(&self) -> [(&'static str, &str); FIELD_COUNT] {
        [
            ("H1", &self.h1),
            ("H2", &self.h2),
            ("H3", &self.h3),
            ("H4", &self.h4),
            ("A1", &self.a1),
            ("A2", &self.a2),
            ("A3", &self.a3),
            ("A4", &self.a4),
            ("B1", &self.b1),
            ("B2", &self.b2),
            ("B3", &self.b3),
            ("B4", &self.b4),
            ("B5", &self.b5),
            ("B6", &self.b6),
            ("B7", &self.b7),
            ("B8", &self.b8),
            ("B9", &self.b9),
            ("B10", &self.b10),
            ("B11", &self.b11),
            ("B12", &self.b12),
            ("C1", &self.c1),
            ("C2", &self.c2),
            ("C3", &self.c3),
            ("C4", &self.c4),
            ("C5", &self.c5),
        ]
    }

    /// Render the record as `KEY: value` lines in canonical order.
    pub fn to_key_value_lines(&self) -> String {
        self.as_entries()
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
