//! Heuristic form field extraction from raw document text.
//!
//! Two complementary line patterns are tried top-to-bottom in a single
//! pass: a `Key: value` colon format, and an adjacent-line format where a
//! label line is immediately followed by a value line. Lines matching
//! neither pattern are dropped; the extraction is intentionally lossy.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::document::FormField;

lazy_static! {
    /// `Key: value` split at the first colon. The value may itself
    /// contain colons.
    static ref FIELD_PATTERN: Regex = Regex::new(r"^([^:]+):(.*)$").unwrap();
}

/// Literal emitted by OCR engines for an unticked checkbox. Accepted as a
/// field value even though it has no digit or punctuation.
const CHECKBOX_MARKER: &str = ":unselected:";

/// One step of the line scan: an optional field plus the number of lines
/// consumed (1 or 2).
struct Step {
    field: Option<FormField>,
    consumed: usize,
}

/// Stateless extractor turning a text blob into ordered form fields.
///
/// Total over all inputs: never fails, never panics; empty or
/// whitespace-only text yields an empty sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormFieldExtractor;

impl FormFieldExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract form fields from raw text, in document line order.
    pub fn extract(&self, text: &str) -> Vec<FormField> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let lines: Vec<&str> = text.split('\n').collect();
        let mut fields = Vec::new();

        // Explicit cursor: each step reports how many lines it consumed,
        // so a value line claimed by the adjacent rule is never revisited
        // as a starting line.
        let mut cursor = 0;
        while cursor < lines.len() {
            let line = lines[cursor].trim();
            let next = lines.get(cursor + 1).map(|l| l.trim());

            let step = self.step(line, next);
            if let Some(field) = step.field {
                fields.push(field);
            }
            cursor += step.consumed;
        }

        debug!("extracted {} form fields from {} lines", fields.len(), lines.len());
        fields
    }

    fn step(&self, line: &str, next: Option<&str>) -> Step {
        // Colon format takes precedence; a matching line never also feeds
        // the adjacent-line rule.
        if let Some(field) = self.colon_format(line) {
            return Step {
                field: Some(field),
                consumed: 1,
            };
        }

        if let Some(next) = next {
            if let Some(field) = self.adjacent_format(line, next) {
                return Step {
                    field: Some(field),
                    consumed: 2,
                };
            }
        }

        Step {
            field: None,
            consumed: 1,
        }
    }

    fn colon_format(&self, line: &str) -> Option<FormField> {
        FIELD_PATTERN
            .captures(line)
            .map(|caps| FormField::new(caps[1].trim(), caps[2].trim()))
    }

    fn adjacent_format(&self, line: &str, next: &str) -> Option<FormField> {
        if is_likely_field_name(line) && is_likely_field_value(next) {
            Some(FormField::new(line, next))
        } else {
            None
        }
    }
}

/// A plausible field label: more than two characters, leading ASCII
/// uppercase letter, no colon, no digit anywhere.
fn is_likely_field_name(text: &str) -> bool {
    text.chars().count() > 2
        && text.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && !text.contains(':')
        && !text.chars().any(|c| c.is_ascii_digit())
}

/// A plausible field value: non-empty and carrying a digit, comma, or
/// period, or the checkbox marker literal.
fn is_likely_field_value(text: &str) -> bool {
    !text.is_empty()
        && (text.chars().any(|c| c.is_ascii_digit())
            || text.contains(',')
            || text.contains('.')
            || text == CHECKBOX_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> Vec<FormField> {
        FormFieldExtractor::new().extract(text)
    }

    #[test]
    fn empty_input_yields_no_fields() {
        assert_eq!(extract(""), vec![]);
        assert_eq!(extract("   \n\t  \n"), vec![]);
    }

    #[test]
    fn colon_line_yields_one_field() {
        assert_eq!(
            extract("Name: John Doe"),
            vec![FormField::new("Name", "John Doe")]
        );
    }

    #[test]
    fn colon_rule_splits_at_first_colon_only() {
        assert_eq!(extract("Time: 10:30"), vec![FormField::new("Time", "10:30")]);
    }

    #[test]
    fn colon_rule_takes_precedence_over_adjacent_rule() {
        // "Name: John Doe" matches the colon rule, so "42" must not be
        // merged with it; "42" itself starts no field either.
        let fields = extract("Name: John Doe\n42");
        assert_eq!(fields, vec![FormField::new("Name", "John Doe")]);
    }

    #[test]
    fn adjacent_lines_form_a_field() {
        assert_eq!(
            extract("Quantity\n42"),
            vec![FormField::new("Quantity", "42")]
        );
    }

    #[test]
    fn consumed_value_line_is_skipped() {
        // "1.5" is consumed as the value of "Quantity"; it must not be
        // re-examined as a starting line, and "Total" then pairs with the
        // following amount.
        let fields = extract("Quantity\n1.5\nTotal\n300,00");
        assert_eq!(
            fields,
            vec![
                FormField::new("Quantity", "1.5"),
                FormField::new("Total", "300,00"),
            ]
        );
    }

    #[test]
    fn lowercase_leading_name_is_rejected() {
        assert_eq!(extract("quantity\n42"), vec![]);
    }

    #[test]
    fn short_name_is_rejected() {
        assert_eq!(extract("Qt\n42"), vec![]);
    }

    #[test]
    fn name_with_digit_is_rejected() {
        assert_eq!(extract("Line1\n42"), vec![]);
    }

    #[test]
    fn checkbox_marker_is_a_valid_value() {
        assert_eq!(
            extract("Selected\n:unselected:"),
            vec![FormField::new("Selected", ":unselected:")]
        );
    }

    #[test]
    fn value_without_digit_comma_or_period_is_rejected() {
        assert_eq!(extract("Quantity\nunknown"), vec![]);
    }

    #[test]
    fn unmatched_lines_are_dropped() {
        // Lossy by design: a lone label with no qualifying neighbor
        // contributes nothing.
        assert_eq!(extract("Shipping address"), vec![]);
    }

    #[test]
    fn leading_colon_matches_neither_rule() {
        assert_eq!(extract(":orphan value"), vec![]);
    }

    #[test]
    fn duplicate_keys_are_preserved_in_order() {
        let fields = extract("Item: first\nItem: second");
        assert_eq!(
            fields,
            vec![
                FormField::new("Item", "first"),
                FormField::new("Item", "second"),
            ]
        );
    }

    #[test]
    fn label_line_claims_a_following_colon_line_with_digits() {
        // The adjacent rule fires before the next line is examined on its
        // own, so a colon line with digits can be swallowed as a value.
        assert_eq!(
            extract("Invoice\nOrder number: 12345"),
            vec![FormField::new("Invoice", "Order number: 12345")]
        );
    }

    #[test]
    fn mixed_document_scans_top_to_bottom() {
        let text = "INVOICE 2024\nOrder number: 12345\nCustomer\nAcme Oy, Helsinki\nnotes without match\nTotal: 1 200,00 EUR";
        let fields = extract(text);
        assert_eq!(
            fields,
            vec![
                FormField::new("Order number", "12345"),
                FormField::new("Customer", "Acme Oy, Helsinki"),
                FormField::new("Total", "1 200,00 EUR"),
            ]
        );
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        // Splitting on '\n' leaves the '\r' on the line; trimming removes it.
        assert_eq!(
            extract("Name: John\r\nQuantity\r\n42\r\n"),
            vec![
                FormField::new("Name", "John"),
                FormField::new("Quantity", "42"),
            ]
        );
    }
}
