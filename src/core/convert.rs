// Pure conversions between in-memory values and the stored text form.
// The write path passes pre-serialized text through without validating it;
// only the read path enforces "valid JSON".
use crate::core::error::{Error, ErrorKind};
use crate::core::value::{FieldInput, JsonMap, ReadInput};
use crate::json::parse;
use serde_json::Value;
use tracing::debug;

/// Write path: mapping or text in, column text out. `None` stays `None`
/// and persists as SQL NULL.
pub fn encode(value: Option<FieldInput>) -> Result<Option<String>, Error> {
    match value {
        None => Ok(None),
        Some(FieldInput::Map(map)) => {
            let text = serde_json::to_string(&Value::Object(map)).map_err(|err| {
                Error::new(ErrorKind::Internal)
                    .with_message("mapping failed to serialize")
                    .with_source(err)
            })?;
            Ok(Some(text))
        }
        Some(FieldInput::Text(text)) => Ok(Some(text)),
    }
}

/// Read path: column text or an already-converted value in, JSON value out.
/// Null and empty text load as an empty mapping, never as an absent value.
pub fn decode(value: Option<ReadInput>) -> Result<Value, Error> {
    match value {
        None => Ok(Value::Object(JsonMap::new())),
        Some(ReadInput::Parsed(parsed)) => Ok(parsed),
        Some(ReadInput::Text(text)) => decode_text(&text),
    }
}

/// Decode raw column text. Empty text loads as an empty mapping; anything
/// else must parse, or the offending text comes back on the error for the
/// host's validation channel.
pub fn decode_text(text: &str) -> Result<Value, Error> {
    if text.is_empty() {
        return Ok(Value::Object(JsonMap::new()));
    }
    parse::from_str(text).map_err(|err| {
        let category = parse::categorize_error(&err);
        debug!(
            category = parse::category_label(category),
            "stored text failed to decode"
        );
        Error::new(ErrorKind::InvalidJson)
            .with_message("not valid JSON")
            .with_raw(text)
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::{decode, decode_text, encode};
    use crate::core::error::ErrorKind;
    use crate::core::value::{FieldInput, JsonMap, ReadInput};
    use serde_json::{Value, json};

    #[test]
    fn encode_serializes_mappings_and_passes_text_through() {
        let mut map = JsonMap::new();
        map.insert("a".to_string(), json!(1));
        let stored = encode(Some(FieldInput::Map(map))).expect("encode");
        assert_eq!(stored, Some(r#"{"a":1}"#.to_string()));

        let stored = encode(Some(FieldInput::Text("{not even json".to_string()))).expect("encode");
        assert_eq!(stored, Some("{not even json".to_string()));

        assert_eq!(encode(None).expect("encode"), None);
    }

    #[test]
    fn decode_treats_null_and_empty_as_empty_mapping() {
        assert_eq!(decode(None).expect("decode"), json!({}));
        assert_eq!(decode(Some(ReadInput::from(""))).expect("decode"), json!({}));
    }

    #[test]
    fn decode_is_idempotent_on_parsed_values() {
        let parsed = json!({"nested": {"deep": [1, 2]}});
        let out = decode(Some(ReadInput::Parsed(parsed.clone()))).expect("decode");
        assert_eq!(out, parsed);
    }

    #[test]
    fn decode_text_surfaces_invalid_json_with_raw_value() {
        let err = decode_text("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert_eq!(err.raw(), Some("not json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn decode_text_passes_nested_structures_through() {
        let value = decode_text(r#"{"a": {"b": [1, null, "x"]}, "c": 2.5}"#).expect("decode");
        assert_eq!(value, json!({"a": {"b": [1, null, "x"]}, "c": 2.5}));

        // Top-level shape is not enforced beyond "valid JSON".
        let value = decode_text("[1, 2]").expect("decode");
        assert_eq!(value, Value::Array(vec![json!(1), json!(2)]));
    }
}
