//! Purpose: Provide the internal runtime JSON decode entrypoint.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    PrematureEnd,
    DataShape,
    Io,
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Eof => ParseFailureCategory::PrematureEnd,
        Category::Data => ParseFailureCategory::DataShape,
        Category::Io => ParseFailureCategory::Io,
    }
}

pub(crate) fn category_label(category: ParseFailureCategory) -> &'static str {
    match category {
        ParseFailureCategory::Syntax => "syntax",
        ParseFailureCategory::PrematureEnd => "premature-end",
        ParseFailureCategory::DataShape => "data-shape",
        ParseFailureCategory::Io => "io",
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseFailureCategory, categorize_error, category_label, from_str};
    use serde_json::Value;

    #[test]
    fn category_mapping_handles_syntax_and_eof_errors() {
        let syntax_err = from_str::<Value>(r#"{"a":}"#).unwrap_err();
        assert_eq!(categorize_error(&syntax_err), ParseFailureCategory::Syntax);

        let eof_err = from_str::<Value>(r#"{"a":1"#).unwrap_err();
        assert_eq!(categorize_error(&eof_err), ParseFailureCategory::PrematureEnd);
    }

    #[test]
    fn category_labels_are_stable() {
        let cases = [
            (ParseFailureCategory::Syntax, "syntax"),
            (ParseFailureCategory::PrematureEnd, "premature-end"),
            (ParseFailureCategory::DataShape, "data-shape"),
            (ParseFailureCategory::Io, "io"),
        ];
        for (category, label) in cases {
            assert_eq!(category_label(category), label);
        }
    }
}
