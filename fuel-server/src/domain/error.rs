//! Domain error types.

/// Errors raised while building a station from untyped JSON.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// The payload was not a JSON object
    #[error("expected a JSON object")]
    NotAnObject,

    /// A required field is absent
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field is present but cannot be coerced to the expected type
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
}

impl DomainError {
    /// Name of the offending field, if the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::NotAnObject => None,
            DomainError::MissingField(f) => Some(f),
            DomainError::InvalidField { field, .. } => Some(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::MissingField("citta");
        assert_eq!(err.to_string(), "missing field: citta");

        let err = DomainError::InvalidField {
            field: "lat",
            reason: "expected a number",
        };
        assert_eq!(err.to_string(), "invalid field lat: expected a number");
        assert_eq!(err.field(), Some("lat"));

        assert_eq!(DomainError::NotAnObject.field(), None);
    }
}
