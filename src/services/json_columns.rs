//! Encoding between in-memory JSON values and the TEXT columns that hold them.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{StoreError, StoreResult};

/// One opaque JSON object, e.g. a layout block or a sample-data payload.
pub type JsonObject = Map<String, Value>;

/// Ordered list of layout blocks making up a report.
pub type Layout = Vec<JsonObject>;

pub fn encode<T: Serialize>(column: &'static str, value: &T) -> StoreResult<String> {
    serde_json::to_string(value).map_err(|e| StoreError::serialization(column, e))
}

/// Decodes a stored layout. NULL and empty text both read back as an empty layout.
pub fn decode_layout(column: &'static str, raw: Option<&str>) -> StoreResult<Layout> {
    match raw {
        None => Ok(Layout::new()),
        Some(text) if text.trim().is_empty() => Ok(Layout::new()),
        Some(text) => {
            serde_json::from_str(text).map_err(|e| StoreError::serialization(column, e))
        }
    }
}

/// Decodes a stored JSON object. Anything other than an object is rejected.
pub fn decode_object(column: &'static str, raw: &str) -> StoreResult<JsonObject> {
    serde_json::from_str(raw).map_err(|e| StoreError::serialization(column, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layout_of(value: Value) -> Layout {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_or_blank_layout_decodes_to_empty() {
        assert!(decode_layout("layout", None).unwrap().is_empty());
        assert!(decode_layout("layout", Some("")).unwrap().is_empty());
        assert!(decode_layout("layout", Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn test_layout_preserves_block_order_and_nesting() {
        let layout = layout_of(json!([
            {"type": "header", "text": "Q1"},
            {"type": "chart", "data": [{"name": "Jan", "value": 1.5}], "options": null},
            {"type": "table", "rows": [["a", "b"], ["c", "d"]]}
        ]));

        let stored = encode("layout", &layout).unwrap();
        let decoded = decode_layout("layout", Some(&stored)).unwrap();

        assert_eq!(decoded, layout);
        assert_eq!(decoded[0]["type"], "header");
        assert_eq!(decoded[2]["type"], "table");
    }

    #[test]
    fn test_corrupt_layout_is_a_serialization_error() {
        let err = decode_layout("layout", Some("[{\"type\": ")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Serialization { column: "layout", .. }
        ));
    }

    #[test]
    fn test_layout_with_non_object_block_is_rejected() {
        let err = decode_layout("layout", Some("[1, 2]")).unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
    }

    #[test]
    fn test_decode_object_rejects_arrays() {
        assert!(decode_object("data", "{\"text\": \"hi\"}").is_ok());
        assert!(matches!(
            decode_object("data", "[]").unwrap_err(),
            StoreError::Serialization { column: "data", .. }
        ));
    }
}
