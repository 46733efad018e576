//! Purpose: Library crate for the `textjson` JSON-as-text model field.
//! Exports: `api` (field type, value shapes, errors, schema description).
//! Role: Text-column adapter presenting stored JSON to model code as maps.
//! Invariants: Every operation is a pure conversion; the crate does no I/O.
//! Invariants: `api` is the only public path to the conversion primitives.
pub mod api;
mod core;
mod json;
