//! Purpose: Define the stable public API boundary for textjson.
//! Exports: Field type, value shapes, errors, and schema-description types.
//! Role: Public, additive-only surface; hides internal conversion modules.
//! Invariants: This module is the only public path to the field primitives.
//! Invariants: Internal modules remain private and are not directly exposed.

pub use crate::core::convert::{decode, decode_text, encode};
pub use crate::core::describe::{ColumnType, FieldDescription};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::field::{FIELD_PATH, JsonTextField, TextOptions};
pub use crate::core::value::{FieldInput, JsonMap, ReadInput};
