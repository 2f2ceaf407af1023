//! Free-text normalization for act fields.
//!
//! The downstream platform rejects certain character sequences and caps the
//! object-text length, so both are normalized here before serialization.

const REPLACEMENT: &str = "?";
const ELLIPSIS: &str = "...";
const FORBIDDEN_SEPARATOR: char = ',';

/// Normalize free text for transmission.
///
/// Every occurrence of each non-empty entry in the comma-separated
/// `forbidden` list is replaced with a single `?`, then the result is
/// truncated to `max_length` characters with a `...` marker when it runs
/// over. Replacement happens before truncation, so a replacement close to
/// the boundary can still be cut off.
///
/// This is a pure, total function: no input raises an error.
pub fn sanitize(text: &str, forbidden: &str, max_length: usize) -> String {
    let mut out = text.to_string();

    for token in forbidden.split(FORBIDDEN_SEPARATOR) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        out = out.replace(token, REPLACEMENT);
    }

    truncate_with_ellipsis(out, max_length)
}

fn truncate_with_ellipsis(text: String, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text;
    }

    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(sanitize("Budget primitif 2009", "", 400), "Budget primitif 2009");
    }

    #[test]
    fn test_forbidden_substrings_replaced() {
        assert_eq!(sanitize("a&b<c", "&,<", 400), "a?b?c");
    }

    #[test]
    fn test_forbidden_entries_trimmed_and_empties_skipped() {
        // " & , , < " yields the tokens "&" and "<"; blanks are ignored
        assert_eq!(sanitize("a&b<c", " & , , < ", 400), "a?b?c");
    }

    #[test]
    fn test_multichar_forbidden_replaced_by_single_char() {
        assert_eq!(sanitize("ab--cd", "--", 400), "ab?cd");
    }

    #[test]
    fn test_overlong_text_has_exact_max_length_with_marker() {
        let text = "x".repeat(500);
        let out = sanitize(&text, "", 400);
        assert_eq!(out.chars().count(), 400);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_boundary_length_not_truncated() {
        let text = "x".repeat(400);
        assert_eq!(sanitize(&text, "", 400), text);
    }

    #[test]
    fn test_replacement_applied_before_truncation() {
        // A two-character forbidden sequence just before the cut collapses to
        // one "?", pulling the following character inside the kept region.
        let mut text = "x".repeat(8);
        text.push_str("--z");
        let out = sanitize(&text, "--", 10);
        // after replacement: "xxxxxxxx?z" (10 chars), no truncation needed
        assert_eq!(out, "xxxxxxxx?z");
    }

    #[test]
    fn test_replacement_near_boundary_can_be_cut_off() {
        let mut text = "x".repeat(9);
        text.push_str("--");
        text.push_str(&"y".repeat(9));
        let out = sanitize(&text, "--", 10);
        // replaced first ("xxxxxxxxx?yyyyyyyyy", 19 chars) then cut to 7 + "..."
        assert_eq!(out, "xxxxxxx...");
        assert_eq!(out.chars().count(), 10);
    }

    #[test]
    fn test_non_ascii_counted_as_characters() {
        let text = "é".repeat(401);
        let out = sanitize(&text, "", 400);
        assert_eq!(out.chars().count(), 400);
        assert!(out.ends_with(ELLIPSIS));
    }
}
