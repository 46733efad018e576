// Core modules implementing value shapes, conversion, field configuration,
// and error modeling.
pub mod convert;
pub mod describe;
pub mod error;
pub mod field;
pub mod value;
