//! Parsed document representation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single extracted key-value pair from a document.
///
/// Keys are not unique; a document may label several values the same way.
/// Field order follows document line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field label as it appears in the document.
    pub key: String,

    /// Field value, trimmed.
    pub value: String,
}

impl FormField {
    /// Create a new form field.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Result of parsing one document. Built once per request, never mutated
/// afterwards, not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    /// Full text extracted from the document before any field detection.
    pub raw_data: String,

    /// Key-value pairs detected by the field extraction heuristics,
    /// in document order.
    pub form_data: Vec<FormField>,

    /// Tabular rows. Reserved for future table extraction; always empty
    /// in the current pipeline.
    pub table_data: Vec<BTreeMap<String, String>>,
}

impl ParsedDocument {
    /// Assemble a parsed document from extracted text and fields.
    pub fn new(raw_data: String, form_data: Vec<FormField>) -> Self {
        Self {
            raw_data,
            form_data,
            table_data: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let doc = ParsedDocument::new(
            "Name: John".to_string(),
            vec![FormField::new("Name", "John")],
        );

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["rawData"], "Name: John");
        assert_eq!(json["formData"][0]["key"], "Name");
        assert_eq!(json["formData"][0]["value"], "John");
        assert!(json["tableData"].as_array().unwrap().is_empty());
    }
}
