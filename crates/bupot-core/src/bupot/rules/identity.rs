//! Section A extractors: income recipient identity.

use super::position_starting_with;

/// A1/A3: the value follows its section label as the first line that is not
/// another "A." label and not the lone ":" separator the converter emits for
/// the form's colon column.
pub fn extract_identity_value(lines: &[String], label: &str) -> Option<String> {
    let idx = position_starting_with(lines, label)?;
    lines[idx + 1..]
        .iter()
        .find(|line| !line.starts_with("A.") && line.as_str() != ":")
        .cloned()
}

/// A4: same scan as A1/A3 but also skips a line equal to `skip` (the resolved
/// A3 value), which the converter repeats in front of A4's value.
pub fn extract_identity_value_skipping(
    lines: &[String],
    label: &str,
    skip: &str,
) -> Option<String> {
    let idx = position_starting_with(lines, label)?;
    lines[idx + 1..]
        .iter()
        .find(|line| !line.starts_with("A.") && line.as_str() != ":" && line.as_str() != skip)
        .cloned()
}
