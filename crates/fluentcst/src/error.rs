use miette::{Diagnostic, SourceSpan};
use std::result;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Unexpected value {value} of kind {kind}")]
    #[diagnostic(
        code(fluentcst::unsupported_value),
        help("values must be strings, integers, booleans, mappings, sequences or built expressions")
    )]
    UnsupportedValue { value: String, kind: &'static str },

    #[error("Invalid path `{path}`: {reason}")]
    #[diagnostic(code(fluentcst::invalid_path))]
    InvalidPath {
        #[source_code]
        path: String,
        reason: String,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("Invalid identifier `{name}`")]
    #[diagnostic(
        code(fluentcst::invalid_identifier),
        help("names start with a letter or `_` followed by letters, digits or `_`")
    )]
    InvalidIdentifier { name: String },

    #[error("Not implemented: {0}")]
    #[diagnostic(
        code(fluentcst::unimplemented),
        help("a field needs exactly one of a value or a type")
    )]
    UnimplementedFeature(String),

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub fn unsupported_value(value: impl ToString, kind: &'static str) -> Self {
        Error::UnsupportedValue {
            value: value.to_string(),
            kind,
        }
    }

    /// Points the diagnostic label at `len` bytes of `path` starting at `offset`.
    pub fn invalid_path(
        path: impl Into<String>,
        reason: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Error::InvalidPath {
            path: path.into(),
            reason: reason.into(),
            span: (offset, len).into(),
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Generic(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn invalid_path_carries_label() {
        let err = Error::invalid_path("a..b", "empty segment", 2, 0);
        assert_eq!(err.to_string(), "Invalid path `a..b`: empty segment");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("fluentcst::invalid_path"));
        let labels: Vec<_> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 2);
    }

    #[test]
    fn unsupported_value_names_kind() {
        let err = Error::unsupported_value("null", "null");
        assert_eq!(err.to_string(), "Unexpected value null of kind null");
    }
}
