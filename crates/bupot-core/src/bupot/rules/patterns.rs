//! Common regex patterns for bupot field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Line made of digits and whitespace only (digit group split by column gaps)
    pub static ref DIGITS_AND_SPACES: Regex = Regex::new(
        r"^[\d\s]+$"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).unwrap();

    // The receipt number is the only digit run of this length in the document
    pub static ref RECEIPT_NUMBER: Regex = Regex::new(
        r"^\d{10,}$"
    ).unwrap();

    // "Pembetulan Ke-   3" comes out of the converter with a column gap
    pub static ref REVISION_SPACING: Regex = Regex::new(
        r"Pembetulan Ke-\s+(\d+)"
    ).unwrap();

    // Section B row labels ("B.1", "B.2", ...)
    pub static ref SECTION_B_LABEL: Regex = Regex::new(
        r"^B\.\d"
    ).unwrap();

    // Faktur pajak serial with the two day digits split off behind it
    pub static ref FAKTUR_CODE: Regex = Regex::new(
        r"^(\d{3}\.\d{3}-\d{2}\.\d{8})\s*(\d)\s*(\d)$"
    ).unwrap();

    // Tax period as month-year ("4-2024")
    pub static ref MONTH_YEAR: Regex = Regex::new(
        r"^(\d{1,2})-(\d{4})$"
    ).unwrap();

    // Date placeholders printed on the form itself
    pub static ref DAY_PLACEHOLDER: Regex = Regex::new(
        r"(?i)^dd$"
    ).unwrap();

    pub static ref MONTH_YEAR_PLACEHOLDER: Regex = Regex::new(
        r"(?i)^mm yyyy$"
    ).unwrap();
}
