//! Section B extractors: tax object values and the faktur pajak reference.

use super::patterns::{FAKTUR_CODE, MONTH_YEAR, SECTION_B_LABEL};
use super::position_of;

/// B1-B6 candidates: the converter flattens the section into one combined
/// header row containing both "B.1" and "B.2", followed by the values.
/// Collects up to 6 lines that are not row labels and not the "Keterangan"/
/// "Dokumen"/"PPh" column headers. The caller maps them positionally.
pub fn extract_tax_object_values(lines: &[String]) -> Vec<String> {
    let Some(start) = lines
        .iter()
        .position(|line| line.contains("B.1") && line.contains("B.2"))
    else {
        return Vec::new();
    };

    let mut values = Vec::new();
    for line in &lines[start + 1..] {
        if SECTION_B_LABEL.is_match(line)
            || line.starts_with("Keterangan")
            || line.starts_with("Dokumen")
            || line.starts_with("PPh")
        {
            continue;
        }
        values.push(line.clone());
        if values.len() >= 6 {
            break;
        }
    }

    values
}

/// B8: the faktur pajak serial is printed on the line directly after the
/// repeated A4 value, with the two digits of the day split off behind it.
/// Month and year come from B1's tax period; without them the serial alone
/// is the value.
pub fn extract_faktur_reference(lines: &[String], a4: &str, b1: &str) -> Option<String> {
    if a4.is_empty() {
        return None;
    }

    let idx = position_of(lines, a4)?;
    let raw = lines.get(idx + 1)?;

    let caps = FAKTUR_CODE.captures(raw)?;
    let code = &caps[1];
    let day = format!("{}{}", &caps[2], &caps[3]);

    match MONTH_YEAR.captures(b1) {
        Some(period) => {
            let month = format!("{:0>2}", &period[1]);
            Some(format!("{} {}-{}-{}", code, day, month, &period[2]))
        }
        None => Some(code.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::to_lines;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positional_candidates() {
        let lines = to_lines(&[
            "B.1 B.2 B.3",
            "Keterangan Kode Objek Pajak",
            "4-2024",
            "24-104-01",
            "10000000",
            "B.5 Tarif",
            "2",
            "200000",
            "extra",
        ]);

        let values = extract_tax_object_values(&lines);
        assert_eq!(
            values,
            vec!["4-2024", "24-104-01", "10000000", "2", "200000", "extra"]
        );
    }

    #[test]
    fn test_skips_column_headers() {
        let lines = to_lines(&["B.1 B.2", "Dokumen Referensi", "PPh Dipotong", "value"]);
        assert_eq!(extract_tax_object_values(&lines), vec!["value"]);
    }

    #[test]
    fn test_missing_combined_header() {
        let lines = to_lines(&["B.1 only", "value"]);
        assert!(extract_tax_object_values(&lines).is_empty());
    }

    #[test]
    fn test_faktur_reference_with_period() {
        let lines = to_lines(&["JL. SUDIRMAN 1", "010.006-24.22222222 2 4"]);
        assert_eq!(
            extract_faktur_reference(&lines, "JL. SUDIRMAN 1", "4-2024"),
            Some("010.006-24.22222222 24-04-2024".to_string())
        );
    }

    #[test]
    fn test_faktur_reference_without_period_falls_back_to_code() {
        let lines = to_lines(&["JL. SUDIRMAN 1", "010.006-24.22222222 2 4"]);
        assert_eq!(
            extract_faktur_reference(&lines, "JL. SUDIRMAN 1", "not a period"),
            Some("010.006-24.22222222".to_string())
        );
    }

    #[test]
    fn test_faktur_reference_requires_code_pattern() {
        let lines = to_lines(&["JL. SUDIRMAN 1", "no serial here"]);
        assert_eq!(
            extract_faktur_reference(&lines, "JL. SUDIRMAN 1", "4-2024"),
            None
        );
    }

    #[test]
    fn test_faktur_reference_skipped_when_a4_empty() {
        let lines = to_lines(&["010.006-24.22222222 2 4"]);
        assert_eq!(extract_faktur_reference(&lines, "", "4-2024"), None);
    }
}
