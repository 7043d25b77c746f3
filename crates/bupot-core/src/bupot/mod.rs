//! Bupot form extraction module.

pub mod normalize;
mod parser;
pub mod rules;

pub use normalize::normalize;
pub use parser::{ExtractionResult, RuleBasedParser};

/// Trait for bupot form parsers.
pub trait BupotParser {
    /// Extract the field record from raw document text.
    ///
    /// Field-level misses are not errors; unresolved fields come back as
    /// empty strings.
    fn parse(&self, text: &str) -> ExtractionResult;
}
