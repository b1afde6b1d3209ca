//! Shape errors raised when an operation is paired with the wrong payload.

use std::fmt;

/// Result type for message construction.
pub type ShapeResult<T> = Result<T, ShapeMismatch>;

/// An operation was given a payload of a different shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMismatch {
    /// Name of the operation.
    pub op: &'static str,
    /// Shape the operation carries, `None` for login-pipeline operations.
    pub expected: Option<&'static str>,
    /// Shape that was supplied.
    pub found: &'static str,
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expected {
            Some(expected) => write!(
                f,
                "{} carries {expected} payloads, got {}",
                self.op, self.found
            ),
            None => write!(f, "{} has no payload shape, got {}", self.op, self.found),
        }
    }
}

impl std::error::Error for ShapeMismatch {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_shapes() {
        let err = ShapeMismatch {
            op: "BANK_WITHDRAW",
            expected: Some("BankTransfer"),
            found: "Empty",
        };
        let msg = err.to_string();
        assert!(msg.contains("BANK_WITHDRAW"));
        assert!(msg.contains("BankTransfer"));
        assert!(msg.contains("Empty"));
    }

    #[test]
    fn display_session_layer() {
        let err = ShapeMismatch {
            op: "LOGIN",
            expected: None,
            found: "Empty",
        };
        assert!(err.to_string().contains("no payload shape"));
    }
}
