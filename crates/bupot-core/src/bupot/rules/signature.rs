//! Section C extractors: signer statement block.

use super::patterns::{DAY_PLACEHOLDER, MONTH_YEAR_PLACEHOLDER};
use super::position_of;

/// Labels of the signer block that are never values themselves.
const SIGNER_BLOCK_LABELS: [&str; 3] = ["Tanggal", "Nama Penandatangan", "Pernyataan Wajib Pajak"];

/// C1-C3: up to three lines after the "Nama Wajib Pajak" anchor that are not
/// the ":" separator and not one of the block's own labels.
pub fn extract_signer_block(lines: &[String]) -> Vec<String> {
    let Some(start) = position_of(lines, "Nama Wajib Pajak") else {
        return Vec::new();
    };

    lines[start + 1..]
        .iter()
        .filter(|line| line.as_str() != ":" && !SIGNER_BLOCK_LABELS.contains(&line.as_str()))
        .take(3)
        .cloned()
        .collect()
}

/// C5: the signing place is the last real line before the "Dengan ini"
/// statement, skipping the ":" separator and the form's own dd / mm yyyy
/// date placeholders.
pub fn extract_signing_place(lines: &[String]) -> Option<String> {
    let idx = lines
        .iter()
        .position(|line| line.starts_with("Dengan ini"))?;

    lines[..idx]
        .iter()
        .rev()
        .find(|line| {
            line.as_str() != ":"
                && !DAY_PLACEHOLDER.is_match(line)
                && !MONTH_YEAR_PLACEHOLDER.is_match(line)
        })
        .cloned()
}
