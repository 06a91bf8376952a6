use thiserror::Error;

pub const INVALID_DURATION_VALUE: &str = "Invalid duration value";
pub const INVALID_DURATION_TOKEN: &str = "Invalid duration token";
pub const UNPARSABLE: &str = "unparsable";
pub const UNIT_OUT_OF_RANGE: &str = "unit out of range";
pub const DATE_OUT_OF_RANGE: &str = "date out of range";

/// A value that failed to parse or compute.
///
/// `reason` is the short text shown in place of the value; `explanation`
/// carries extra detail for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Invalid {
    pub reason: String,
    pub explanation: Option<String>,
}

impl Invalid {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            explanation: None,
        }
    }

    pub fn with_explanation(reason: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            explanation: Some(explanation.into()),
        }
    }
}

/// Either a valid value or the reason it is not one.
pub type Validated<T> = Result<T, Invalid>;

pub trait Validity {
    fn is_valid(&self) -> bool;
    fn invalid_reason(&self) -> Option<&str>;
}

impl<T> Validity for Validated<T> {
    fn is_valid(&self) -> bool {
        self.is_ok()
    }

    fn invalid_reason(&self) -> Option<&str> {
        self.as_ref().err().map(|e| e.reason.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_reason_only() {
        let invalid = Invalid::with_explanation(UNPARSABLE, "the input \"x\" can't be parsed");
        assert_eq!(invalid.to_string(), "unparsable");
    }

    #[test]
    fn test_validity_helpers() {
        let ok: Validated<u8> = Ok(1);
        let err: Validated<u8> = Err(Invalid::new(INVALID_DURATION_TOKEN));
        assert!(ok.is_valid());
        assert_eq!(ok.invalid_reason(), None);
        assert!(!err.is_valid());
        assert_eq!(err.invalid_reason(), Some("Invalid duration token"));
    }
}
