//! Section H extractors: document number and revision checkboxes.

use super::patterns::{RECEIPT_NUMBER, REVISION_SPACING};
use super::position_of;

/// H1: the receipt number sits near the end of the document, so scan backward
/// and take the first line of 10+ consecutive digits. Shorter numeric codes
/// appear earlier and must not win.
pub fn extract_receipt_number(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .rev()
        .find(|line| RECEIPT_NUMBER.is_match(line))
        .cloned()
}

/// H2-H4 checkbox sections: the section label line is followed by the
/// checkbox marker line ("X" when checked) and then the description line.
/// Unchecked sections resolve to nothing.
pub fn extract_checkbox_section(lines: &[String], label: &str) -> Option<String> {
    let idx = position_of(lines, label)?;

    let checked = lines.get(idx + 1).is_some_and(|line| line.as_str() == "X");
    if !checked {
        return None;
    }

    let description = lines.get(idx + 2).map(String::as_str).unwrap_or("");
    Some(format!("X - {}", description))
}

/// H2 with the "Pembetulan Ke-   3" column-gap artifact repaired.
pub fn extract_revision_status(lines: &[String]) -> Option<String> {
    let value = extract_checkbox_section(lines, "H.2")?;
    Some(
        REVISION_SPACING
            .replace_all(&value, "Pembetulan Ke-$1")
            .into_owned(),
    )
}
