//! Purpose: Internal JSON parse boundary shared by read and default paths.
//! Exports: `parse`.
//! Role: Keeps decode details and failure categorization in one place.
//! Invariants: Callers map parser errors into domain errors themselves.
pub(crate) mod parse;
