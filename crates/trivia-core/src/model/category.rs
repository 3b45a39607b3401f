use serde::{Deserialize, Serialize};

/// Store-assigned category identifier
pub type CategoryId = i64;

/// Category - a read-only label questions are grouped under
///
/// Categories are seeded outside the request path; nothing served over
/// HTTP creates, edits or removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display label (e.g. "Science")
    #[serde(rename = "type")]
    pub label: String,
}

impl Category {
    pub fn new(id: CategoryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serializes_as_type() {
        let json = serde_json::to_value(Category::new(1, "Science")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "type": "Science"}));
    }
}
