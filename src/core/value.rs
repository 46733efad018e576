// Closed sets of value shapes accepted on the write and read paths.
// Anything outside these sets is rejected with a typed error at the
// `FieldInput::from_value` boundary instead of runtime type inspection.
use crate::core::error::{Error, ErrorKind};
use serde_json::{Map, Value};

pub type JsonMap = Map<String, Value>;

/// Write-path input: a mapping, or text assumed to be pre-serialized JSON.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldInput {
    Map(JsonMap),
    Text(String),
}

impl FieldInput {
    /// Checked entry point for callers holding an arbitrary JSON value.
    /// Only objects and strings are storable; everything else is a
    /// caller-contract violation.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Ok(FieldInput::Map(map)),
            Value::String(text) => Ok(FieldInput::Text(text)),
            other => Err(Error::new(ErrorKind::InvalidValueType)
                .with_message("value must be a mapping or string")
                .with_raw(other.to_string())),
        }
    }
}

impl From<JsonMap> for FieldInput {
    fn from(map: JsonMap) -> Self {
        FieldInput::Map(map)
    }
}

impl From<String> for FieldInput {
    fn from(text: String) -> Self {
        FieldInput::Text(text)
    }
}

impl From<&str> for FieldInput {
    fn from(text: &str) -> Self {
        FieldInput::Text(text.to_string())
    }
}

/// Read-path input: raw column text, or a value some earlier hook already
/// converted. Parsed values pass through the read path unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadInput {
    Text(String),
    Parsed(Value),
}

impl From<String> for ReadInput {
    fn from(text: String) -> Self {
        ReadInput::Text(text)
    }
}

impl From<&str> for ReadInput {
    fn from(text: &str) -> Self {
        ReadInput::Text(text.to_string())
    }
}

impl From<Value> for ReadInput {
    fn from(value: Value) -> Self {
        ReadInput::Parsed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldInput, JsonMap};
    use crate::core::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn from_value_accepts_objects_and_strings() {
        let input = FieldInput::from_value(json!({"a": 1})).expect("object");
        let mut expected = JsonMap::new();
        expected.insert("a".to_string(), json!(1));
        assert_eq!(input, FieldInput::Map(expected));

        let input = FieldInput::from_value(json!("{\"a\":1}")).expect("string");
        assert_eq!(input, FieldInput::Text("{\"a\":1}".to_string()));
    }

    #[test]
    fn from_value_rejects_other_shapes() {
        for value in [json!(42), json!([1, 2, 3]), json!(true), json!(null)] {
            let err = FieldInput::from_value(value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValueType);
        }
    }
}
