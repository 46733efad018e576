use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    InvalidValueType,
    InvalidJson,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    raw: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            raw: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the offending input text for diagnostic display.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(raw) = &self.raw {
            write!(f, " (value: '{raw}')")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn display_includes_message_and_raw_value() {
        let err = Error::new(ErrorKind::InvalidJson)
            .with_message("not valid JSON")
            .with_raw("oops");
        assert_eq!(err.to_string(), "InvalidJson: not valid JSON (value: 'oops')");
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert_eq!(err.raw(), Some("oops"));
    }

    #[test]
    fn bare_kind_displays_without_trailing_context() {
        let err = Error::new(ErrorKind::InvalidValueType);
        assert_eq!(err.to_string(), "InvalidValueType");
        assert_eq!(err.raw(), None);
    }
}
