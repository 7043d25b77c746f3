//! Line-level normalization of PDF-extracted text.

use super::rules::patterns::{DIGITS_AND_SPACES, WHITESPACE_RUN};

/// Normalize raw extracted document text into a cleaned line sequence,
/// rejoined with `\n`.
///
/// Per line: trim, then collapse whitespace runs to a single space. A line of
/// only digits and whitespace loses its interior whitespace entirely, so a
/// digit group split by column gaps ("1 2 3 4") comes back together ("1234").
/// Lines that end up empty are dropped. Idempotent.
pub fn normalize(text: &str) -> String {
    text.lines()
        .filter_map(clean_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn clean_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if DIGITS_AND_SPACES.is_match(trimmed) {
        Some(WHITESPACE_RUN.replace_all(trimmed, "").into_owned())
    } else {
        Some(WHITESPACE_RUN.replace_all(trimmed, " ").into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digit_line_loses_interior_whitespace() {
        assert_eq!(normalize("1  2   3"), "123");
        assert_eq!(normalize("1 2 3 4"), "1234");
    }

    #[test]
    fn test_text_line_collapses_whitespace() {
        assert_eq!(normalize("foo   bar"), "foo bar");
        assert_eq!(normalize("  Nama   Wajib  Pajak  "), "Nama Wajib Pajak");
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let text = "first\n\n   \n\t\nsecond\n\n";
        assert_eq!(normalize(text), "first\nsecond");
    }

    #[test]
    fn test_mixed_line_is_not_a_digit_line() {
        // One letter is enough to keep the spaces (collapsed)
        assert_eq!(normalize("12 a 34"), "12 a 34");
    }

    #[test]
    fn test_idempotent() {
        let text = "  H.2 \n1 2 3 4\n\nDengan   ini\n";
        let once = normalize(text);
        assert_eq!(normalize(&once), once);
    }
}
