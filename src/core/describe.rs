// Schema-history description of a field declaration plus the column type
// reported to schema tooling.
use crate::core::error::{Error, ErrorKind};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Stable (name, path, args, kwargs) record of a field declaration, used by
/// a host framework to detect schema changes. kwargs are kept sorted so the
/// serialized form compares byte-for-byte across calls and restarts.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FieldDescription {
    pub name: Option<String>,
    pub path: String,
    pub args: Vec<Value>,
    pub kwargs: BTreeMap<String, Value>,
}

impl FieldDescription {
    /// Canonical serialized form for persisted schema history.
    pub fn history_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("field description failed to serialize")
                .with_source(err)
        })
    }
}

/// Column type reported to the host framework. The JSON semantics live
/// entirely above the database; raw schema tooling sees plain text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnType {
    LongText,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnType::LongText => "TEXT",
        })
    }
}
