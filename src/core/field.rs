// Field configuration and the hook operations a host model framework calls:
// store on write, load on read, default resolution, display extraction, and
// schema-history deconstruction. Every hook is a stateless conversion.
use crate::core::convert;
use crate::core::describe::{ColumnType, FieldDescription};
use crate::core::error::Error;
use crate::core::value::{FieldInput, ReadInput};
use serde_json::Value;
use std::collections::BTreeMap;

/// Import path recorded in schema history for this field type.
pub const FIELD_PATH: &str = "textjson.JsonTextField";

/// Pass-through text-column options. This layer never examines them; they
/// ride along to the underlying column and into `deconstruct`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TextOptions {
    pub verbose_name: Option<String>,
    pub null: bool,
    pub blank: bool,
    pub db_column: Option<String>,
    pub help_text: Option<String>,
}

/// A text column presented to model code as a JSON mapping.
///
/// Null or blank column text loads as an empty mapping, never as an absent
/// value, and writes back out as serialized JSON. Defaults are declared as
/// already-serialized JSON text and parsed fresh on every resolution, so
/// records never share a mutable default value.
///
/// Recommended declaration:
///
/// ```
/// use textjson::api::JsonTextField;
///
/// let field = JsonTextField::new()
///     .with_null(true)
///     .with_blank(true)
///     .with_default_json(r#"{"foo":"bar"}"#);
/// assert!(field.has_default());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct JsonTextField {
    name: Option<String>,
    default_json: Option<String>,
    options: TextOptions,
}

impl JsonTextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute name the host framework bound this field under.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare the default as serialized JSON text. The text is not parsed
    /// here; a malformed default surfaces on first resolution. Empty text
    /// declares no default.
    pub fn with_default_json(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.default_json = (!text.is_empty()).then_some(text);
        self
    }

    pub fn with_verbose_name(mut self, name: impl Into<String>) -> Self {
        self.options.verbose_name = Some(name.into());
        self
    }

    pub fn with_null(mut self, null: bool) -> Self {
        self.options.null = null;
        self
    }

    pub fn with_blank(mut self, blank: bool) -> Self {
        self.options.blank = blank;
        self
    }

    pub fn with_db_column(mut self, column: impl Into<String>) -> Self {
        self.options.db_column = Some(column.into());
        self
    }

    pub fn with_help_text(mut self, text: impl Into<String>) -> Self {
        self.options.help_text = Some(text.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The declared default as originally supplied, if any.
    pub fn default_json(&self) -> Option<&str> {
        self.default_json.as_deref()
    }

    pub fn options(&self) -> &TextOptions {
        &self.options
    }

    /// Human-readable description reported to admin tooling.
    pub fn description(&self) -> &'static str {
        "JSON data"
    }

    /// Empty text is a legal stored form; it loads as an empty mapping.
    pub fn empty_strings_allowed(&self) -> bool {
        true
    }

    /// Always a generic long-text column; the database never sees JSON.
    pub fn column_type(&self) -> ColumnType {
        ColumnType::LongText
    }

    pub fn has_default(&self) -> bool {
        self.default_json.is_some()
    }

    /// Resolve the declared default. The text is parsed fresh on each call,
    /// so resolved defaults are independent values and mutating one can
    /// never leak into another record.
    pub fn default_value(&self) -> Result<Option<Value>, Error> {
        match &self.default_json {
            None => Ok(None),
            Some(text) => convert::decode_text(text).map(Some),
        }
    }

    /// Write-path hook: current value to column text.
    pub fn store(&self, value: Option<FieldInput>) -> Result<Option<String>, Error> {
        convert::encode(value)
    }

    /// Read-path hook: column text (or a value converted earlier) to a JSON
    /// value. Null and blank load as an empty mapping.
    pub fn load(&self, value: Option<ReadInput>) -> Result<Value, Error> {
        convert::decode(value)
    }

    /// Form/display hook: canonical JSON text of the current value, whether
    /// it is a mapping or already a string. Shares the write-path
    /// conversion so forms and storage always agree.
    pub fn display_text(&self, value: Option<FieldInput>) -> Result<Option<String>, Error> {
        convert::encode(value)
    }

    /// Schema-history record of this declaration. The default is reported
    /// as the original JSON text, never a parsed value and never a provider
    /// reference, so identical declarations produce identical history
    /// records across code versions.
    pub fn deconstruct(&self) -> FieldDescription {
        let mut kwargs = BTreeMap::new();
        if let Some(text) = &self.default_json {
            kwargs.insert("default".to_string(), Value::String(text.clone()));
        }
        if let Some(name) = &self.options.verbose_name {
            kwargs.insert("verbose_name".to_string(), Value::String(name.clone()));
        }
        if self.options.null {
            kwargs.insert("null".to_string(), Value::Bool(true));
        }
        if self.options.blank {
            kwargs.insert("blank".to_string(), Value::Bool(true));
        }
        if let Some(column) = &self.options.db_column {
            kwargs.insert("db_column".to_string(), Value::String(column.clone()));
        }
        if let Some(text) = &self.options.help_text {
            kwargs.insert("help_text".to_string(), Value::String(text.clone()));
        }
        FieldDescription {
            name: self.name.clone(),
            path: FIELD_PATH.to_string(),
            args: Vec::new(),
            kwargs,
        }
    }
}
