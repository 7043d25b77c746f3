//! The three-stage pipeline: convert, extract, serialize.

use std::io::Write;

use tracing::{debug, info};

use crate::bupot::{BupotParser, RuleBasedParser};
use crate::error::{BupotError, Result};
use crate::models::fields::BupotFields;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// One run over one document: PDF bytes in, two artifacts out.
///
/// The sinks are injected so the pipeline can be exercised without touching
/// the filesystem. The raw sink receives the normalized line sequence, the
/// structured sink the `KEY: value` rendering of the field record.
pub struct Pipeline {
    parser: RuleBasedParser,
}

impl Pipeline {
    /// Create a pipeline with the rule-based parser.
    pub fn new() -> Self {
        Self {
            parser: RuleBasedParser::new(),
        }
    }

    /// Run the full pipeline from PDF bytes.
    ///
    /// Conversion failure aborts the run before either sink is written.
    pub fn run<R, S>(
        &self,
        pdf_data: &[u8],
        raw_sink: &mut R,
        structured_sink: &mut S,
    ) -> Result<BupotFields>
    where
        R: Write,
        S: Write,
    {
        let mut extractor = PdfExtractor::new();
        extractor.load(pdf_data)?;

        debug!("Converting {}-page PDF to text", extractor.page_count());
        let text = extractor.extract_text()?;

        self.run_text(&text, raw_sink, structured_sink)
    }

    /// Run the normalize/extract/serialize stages from already-converted text.
    pub fn run_text<R, S>(
        &self,
        text: &str,
        raw_sink: &mut R,
        structured_sink: &mut S,
    ) -> Result<BupotFields>
    where
        R: Write,
        S: Write,
    {
        let result = self.parser.parse(text);

        raw_sink
            .write_all(result.raw_text.as_bytes())
            .map_err(BupotError::OutputWrite)?;
        structured_sink
            .write_all(result.fields.to_key_value_lines().as_bytes())
            .map_err(BupotError::OutputWrite)?;

        info!(
            "Extraction finished in {}ms",
            result.processing_time_ms
        );

        Ok(result.fields)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_text_writes_both_artifacts() {
        let pipeline = Pipeline::new();
        let mut raw = Vec::new();
        let mut structured = Vec::new();

        let fields = pipeline
            .run_text("H.2\nX\nPembetulan Ke-  1\n", &mut raw, &mut structured)
            .unwrap();

        assert_eq!(fields.h2, "X - Pembetulan Ke-1");
        assert_eq!(
            String::from_utf8(raw).unwrap(),
            "H.2\nX\nPembetulan Ke- 1"
        );
        assert!(String::from_utf8(structured)
            .unwrap()
            .starts_with("H1: \nH2: X - Pembetulan Ke-1\n"));
    }

    #[test]
    fn test_run_text_propagates_sink_errors() {
        let pipeline = Pipeline::new();
        let mut structured = Vec::new();

        let result = pipeline.run_text("text", &mut FailingSink, &mut structured);
        assert!(matches!(result, Err(BupotError::OutputWrite(_))));
        // The structured artifact must not be written after a raw-sink failure
        assert!(structured.is_empty());
    }

    #[test]
    fn test_run_rejects_invalid_pdf() {
        let pipeline = Pipeline::new();
        let mut raw = Vec::new();
        let mut structured = Vec::new();

        let result = pipeline.run(b"not a pdf", &mut raw, &mut structured);
        assert!(matches!(result, Err(BupotError::Conversion(_))));
        assert!(raw.is_empty());
        assert!(structured.is_empty());
    }
}
