//! Response normalization
//!
//! The lookup service answers with a JSON object, a JSON array of objects,
//! or plain text. The meaningful payload is the `value` field of the (first)
//! object, rendered as text whatever its JSON type. A missing field or an
//! unparseable body falls back to the raw body.

use serde_json::{Deserializer, Value};
use tracing::{debug, warn};

use crate::utils::{preview, DEFAULT_PREVIEW_BYTES};

pub fn extract_value(body: &str) -> String {
    // Only the leading JSON value counts; trailing text after it is ignored.
    let parsed: Value = match Deserializer::from_str(body.trim()).into_iter::<Value>().next() {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            debug!("Response is not JSON ({}), using raw body", e);
            return body.to_string();
        }
        None => return body.to_string(),
    };

    let object = match &parsed {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    match object.and_then(|o| o.get("value")) {
        Some(Value::String(value)) => value.clone(),
        Some(other) => other.to_string(),
        None => {
            warn!(
                "Response has no `value` field, using raw body: {}",
                preview(body, DEFAULT_PREVIEW_BYTES)
            );
            body.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_value() {
        assert_eq!(extract_value(r#"{"value":"Calm"}"#), "Calm");
        assert_eq!(extract_value("  {\"key\":\"p01\",\"value\":\"Calm\"}\n"), "Calm");
    }

    #[test]
    fn test_array_takes_first() {
        assert_eq!(extract_value(r#"[{"value":"Bold"},{"value":"Shy"}]"#), "Bold");
        assert_eq!(extract_value(" [ {\"value\": \"Bold\"} ]"), "Bold");
    }

    #[test]
    fn test_plain_text_falls_back() {
        assert_eq!(extract_value("RawText"), "RawText");
        assert_eq!(extract_value("{not json"), "{not json");
    }

    #[test]
    fn test_missing_value_falls_back() {
        for body in [
            "",
            "[]",
            r#"{"other":"x"}"#,
            r#"[{"other":"x"}]"#,
            r#"["Bold"]"#,
            "\"just a string\"",
        ] {
            assert_eq!(extract_value(body), body, "body {:?}", body);
        }
    }

    #[test]
    fn test_non_string_value_is_rendered() {
        assert_eq!(extract_value(r#"{"value":42}"#), "42");
        assert_eq!(extract_value(r#"{"value":null}"#), "null");
        assert_eq!(extract_value(r#"[{"value":true}]"#), "true");
        assert_eq!(extract_value(r#"{"value":{"a":1}}"#), r#"{"a":1}"#);
    }

    #[test]
    fn test_trailing_text_after_json_is_ignored() {
        assert_eq!(extract_value(r#"{"value":"Calm"} trailing"#), "Calm");
        assert_eq!(extract_value(r#"[{"value":"Bold"}]garbage"#), "Bold");
    }
}
