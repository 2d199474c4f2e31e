use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, mutating or parsing SIP header fields.
///
/// Every variant except [`Error::Parse`] is raised synchronously by a
/// constructor or setter before the target is modified. [`Error::Parse`] is
/// only ever produced by [`HeaderField::parse`](crate::types::header::HeaderField::parse).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A mandatory value was absent (an empty string or `None`)
    #[error("{property} must not be empty")]
    MissingValue {
        property: &'static str,
    },

    /// A value contains characters outside the grammar class of the property
    #[error("invalid {property} value '{value}'")]
    InvalidFormat {
        property: &'static str,
        value: String,
    },

    /// A numeric value lies outside its documented bounds
    #[error("{property} value {value} is outside the range {min}..={max}")]
    OutOfRange {
        property: &'static str,
        value: String,
        min: String,
        max: String,
    },

    /// A generic parameter was offered to a header that only accepts its known parameters
    #[error("{header} does not accept the parameter '{name}'")]
    UnknownParameter {
        header: &'static str,
        name: String,
    },

    /// A header value could not be interpreted
    #[error("failed to parse {header} header from '{input}': {failure}")]
    Parse {
        header: &'static str,
        input: String,
        failure: ParseFailure,
    },
}

/// The cause carried by [`Error::Parse`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// A recognised production held a value that failed validation
    #[error("{0}")]
    Invalid(Box<Error>),

    /// The scanner rejected the input in a way the field could not attribute
    #[error("unexpected input: {0}")]
    Unexpected(String),
}

impl Error {
    pub(crate) fn missing(property: &'static str) -> Self {
        Error::MissingValue { property }
    }

    pub(crate) fn format(property: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidFormat { property, value: value.into() }
    }

    pub(crate) fn range(
        property: &'static str,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Error::OutOfRange {
            property,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Raised by field parsers when the scanner gives up on a sub-production.
    pub(crate) fn unexpected(header: &'static str, input: &str, what: impl Into<String>) -> Self {
        Error::Parse {
            header,
            input: input.to_string(),
            failure: ParseFailure::Unexpected(what.into()),
        }
    }

    /// Re-wraps a validation error raised while interpreting `input`.
    /// Errors that are already parse errors pass through untouched.
    pub(crate) fn in_header(self, header: &'static str, input: &str) -> Self {
        match self {
            err @ Error::Parse { .. } => err,
            other => Error::Parse {
                header,
                input: input.to_string(),
                failure: ParseFailure::Invalid(Box::new(other)),
            },
        }
    }

    /// True for errors raised by `parse`.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// The validation error wrapped by a parse error, if any.
    pub fn validation_cause(&self) -> Option<&Error> {
        match self {
            Error::Parse { failure: ParseFailure::Invalid(inner), .. } => Some(inner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_header_wraps_validation_errors() {
        let err = Error::range("Max-Forwards", 300, 0, 255).in_header("Max-Forwards", "300");
        assert!(err.is_parse_error());
        assert!(matches!(err.validation_cause(), Some(Error::OutOfRange { .. })));
        assert_eq!(
            err.to_string(),
            "failed to parse Max-Forwards header from '300': Max-Forwards value 300 is outside the range 0..=255"
        );
    }

    #[test]
    fn test_in_header_keeps_existing_parse_errors() {
        let original = Error::unexpected("Via", "SIP/", "sent-by");
        let rewrapped = original.clone().in_header("To", "other");
        assert_eq!(original, rewrapped);
        assert!(rewrapped.validation_cause().is_none());
    }
}
