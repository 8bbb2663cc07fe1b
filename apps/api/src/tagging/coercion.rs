//! Coercion of loosely-shaped model output into ordered term lists.
//!
//! The model is asked for comma-joined strings but sometimes answers with
//! arrays instead. Both shapes are accepted; anything else becomes an empty list.

use serde_json::Value;

/// The shapes a single category value can take in a model response.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// A JSON array. Non-string elements are dropped.
    StringList(Vec<String>),
    /// A JSON string, split on commas.
    CommaString(String),
    /// Missing key, number, object, boolean or null.
    Other,
}

impl TagValue {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Array(items)) => TagValue::StringList(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            Some(Value::String(s)) => TagValue::CommaString(s.clone()),
            _ => TagValue::Other,
        }
    }

    /// Trimmed, non-empty terms in emission order. Duplicates are kept.
    pub fn into_list(self) -> Vec<String> {
        match self {
            TagValue::StringList(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
            // A comma inside a boolean term ("A AND B, C") is indistinguishable
            // from a separator and is split like any other.
            TagValue::CommaString(s) => s
                .split(',')
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(str::to_string)
                .collect(),
            TagValue::Other => Vec::new(),
        }
    }
}

pub fn to_list(value: Option<&Value>) -> Vec<String> {
    TagValue::from_json(value).into_list()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comma_string_is_split_and_trimmed() {
        let value = json!(" Data Scientist ,ML Engineer,, ,Analyst ");
        assert_eq!(
            to_list(Some(&value)),
            vec!["Data Scientist", "ML Engineer", "Analyst"]
        );
    }

    #[test]
    fn test_string_list_keeps_non_empty_strings_in_order() {
        let value = json!(["  Rust", "", 42, "   ", null, "Go ", {"a": 1}, "Rust"]);
        assert_eq!(to_list(Some(&value)), vec!["Rust", "Go", "Rust"]);
    }

    #[test]
    fn test_both_shapes_agree() {
        let joined = json!("Python AND TensorFlow, machine learning, MLOps");
        let split = json!(["Python AND TensorFlow", "machine learning", "MLOps"]);
        assert_eq!(to_list(Some(&joined)), to_list(Some(&split)));
    }

    #[test]
    fn test_list_elements_are_not_comma_split() {
        let value = json!(["SQL, NoSQL"]);
        assert_eq!(to_list(Some(&value)), vec!["SQL, NoSQL"]);
    }

    #[test]
    fn test_other_shapes_yield_empty_list() {
        for value in [json!(7), json!(true), json!(null), json!({"a": "b"})] {
            assert_eq!(TagValue::from_json(Some(&value)), TagValue::Other);
            assert!(to_list(Some(&value)).is_empty());
        }
        assert_eq!(TagValue::from_json(None), TagValue::Other);
        assert!(to_list(None).is_empty());
    }

    #[test]
    fn test_variants_are_detected() {
        assert_eq!(
            TagValue::from_json(Some(&json!("a, b"))),
            TagValue::CommaString("a, b".to_string())
        );
        assert_eq!(
            TagValue::from_json(Some(&json!(["a", 1]))),
            TagValue::StringList(vec!["a".to_string()])
        );
    }

    #[test]
    fn test_comma_inside_boolean_term_is_split() {
        let value = json!("(SQL OR NoSQL), Spark");
        assert_eq!(to_list(Some(&value)), vec!["(SQL OR NoSQL)", "Spark"]);

        let ambiguous = json!("Python AND (Django, Flask)");
        assert_eq!(
            to_list(Some(&ambiguous)),
            vec!["Python AND (Django", "Flask)"]
        );
    }
}
