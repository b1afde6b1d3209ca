//! Error types for payload codecs and the translator.

use std::fmt;

use payload::ShapeMismatch;
use wire::{PayloadShape, ProtocolVersion};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding or encoding a payload body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Cursor error: truncated input, bad bit count, unbalanced bit mode.
    Bitstream(bitstream::BitError),

    /// Payload struct does not belong to the operation.
    Shape(ShapeMismatch),

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// A field value cannot be represented in its wire width.
    ValueOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// An item id above the authentic catalog range was offered for display.
    ItemNotAuthentic { id: u16, max: u16 },

    /// A fixed-count section carried the wrong number of entries.
    EntryCount {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// Compressed chat could not be expanded.
    InvalidCompressedText { offset: usize },

    /// A secure operation arrived but no block cipher is configured.
    CipherUnavailable,

    /// An errored secure field cannot be re-encrypted.
    ErroredSecureField { field: &'static str },

    /// A spell target belongs to a different cast operation.
    TargetMismatch {
        op: &'static str,
        target_op: &'static str,
    },

    /// The dialect chain has no codec for the operation.
    NoCodec { op: &'static str },

    /// The operation decodes on this version but has no encoder.
    NoEncoder {
        op: &'static str,
        version: ProtocolVersion,
    },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    ListEntries,
    ChatBytes,
    CipherBlockBytes,
}

impl CodecError {
    /// Returns `true` for defects in the calling code rather than in the
    /// bytes or values being translated.
    #[must_use]
    pub const fn is_programming_error(&self) -> bool {
        match self {
            Self::Bitstream(err) => err.is_programming_error(),
            Self::Shape(_) | Self::TargetMismatch { .. } | Self::NoCodec { .. } => true,
            _ => false,
        }
    }

    pub(crate) fn out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::ValueOutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bitstream(e) => write!(f, "bitstream error: {e}"),
            Self::Shape(e) => write!(f, "{e}"),
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::ValueOutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "{field} value {value} outside [{min}, {max}]")
            }
            Self::ItemNotAuthentic { id, max } => {
                write!(f, "item id {id} exceeds authentic maximum {max}")
            }
            Self::EntryCount {
                field,
                expected,
                found,
            } => {
                write!(f, "{field} needs {expected} entries, got {found}")
            }
            Self::InvalidCompressedText { offset } => {
                write!(f, "invalid compressed text at nibble {offset}")
            }
            Self::CipherUnavailable => write!(f, "secure operation without a block cipher"),
            Self::ErroredSecureField { field } => {
                write!(f, "secure field {field} is errored and cannot be encoded")
            }
            Self::TargetMismatch { op, target_op } => {
                write!(f, "{op} cannot carry a target sent as {target_op}")
            }
            Self::NoCodec { op } => write!(f, "no codec registered for {op}"),
            Self::NoEncoder { op, version } => {
                write!(f, "{op} is decode-only on version {version}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ListEntries => "list entries",
            Self::ChatBytes => "chat bytes",
            Self::CipherBlockBytes => "cipher block bytes",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bitstream(e) => Some(e),
            Self::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}

impl From<ShapeMismatch> for CodecError {
    fn from(err: ShapeMismatch) -> Self {
        Self::Shape(err)
    }
}

/// Why an inbound packet was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The opcode has no entry in the version's inbound table.
    UnknownOpcode,

    /// The payload length does not fit the operation's rule.
    MalformedLength { len: usize, shape: PayloadShape },

    /// The operation belongs to the login pipeline.
    SessionLayer { op: &'static str },

    /// No dialect in the chain can decode the operation.
    NoCodec { op: &'static str },

    /// Field-level decoding failed.
    Decode(CodecError),
}

/// A packet the translator refused to turn into a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub version: ProtocolVersion,
    pub opcode: u8,
    pub reason: RejectReason,
}

impl Rejection {
    pub(crate) const fn new(version: ProtocolVersion, opcode: u8, reason: RejectReason) -> Self {
        Self {
            version,
            opcode,
            reason,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "opcode {} on version {}: ", self.opcode, self.version)?;
        match &self.reason {
            RejectReason::UnknownOpcode => write!(f, "unknown opcode"),
            RejectReason::MalformedLength { len, shape } => {
                write!(f, "length {len} does not fit {shape:?}")
            }
            RejectReason::SessionLayer { op } => write!(f, "{op} is a session-layer operation"),
            RejectReason::NoCodec { op } => write!(f, "no codec for {op}"),
            RejectReason::Decode(e) => write!(f, "decode failed: {e}"),
        }
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            RejectReason::Decode(e) => Some(e),
            _ => None,
        }
    }
}

/// Failure to produce an outbound packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The payload struct does not belong to the operation.
    Mismatch(ShapeMismatch),

    /// Encoding the payload failed.
    Encode(CodecError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch(e) => write!(f, "{e}"),
            Self::Encode(e) => write!(f, "encode failed: {e}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mismatch(e) => Some(e),
            Self::Encode(e) => Some(e),
        }
    }
}

impl From<CodecError> for GenerateError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Shape(mismatch) => Self::Mismatch(mismatch),
            other => Self::Encode(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_value_out_of_range() {
        let err = CodecError::out_of_range("offset_x", 20, -16, 15);
        let msg = err.to_string();
        assert!(msg.contains("offset_x"), "should name the field");
        assert!(msg.contains("20"), "should mention the value");
    }

    #[test]
    fn error_display_item_not_authentic() {
        let err = CodecError::ItemNotAuthentic { id: 1300, max: 1289 };
        let msg = err.to_string();
        assert!(msg.contains("1300"));
        assert!(msg.contains("1289"));
    }

    #[test]
    fn error_from_bitstream_error() {
        let bit_err = bitstream::BitError::EndOfBuffer {
            requested: 1,
            available: 0,
        };
        let codec_err: CodecError = bit_err.into();
        assert!(matches!(codec_err, CodecError::Bitstream(_)));
        assert!(std::error::Error::source(&codec_err).is_some());
        assert!(!codec_err.is_programming_error());
    }

    #[test]
    fn unbalanced_bit_mode_is_programming_error() {
        let err = CodecError::from(bitstream::BitError::BitModeActive);
        assert!(err.is_programming_error());
        assert!(CodecError::NoCodec { op: "X" }.is_programming_error());
    }

    #[test]
    fn shape_error_becomes_generate_mismatch() {
        let mismatch = ShapeMismatch {
            op: "SEND_BOX",
            expected: Some("Text"),
            found: "Empty",
        };
        let err = GenerateError::from(CodecError::Shape(mismatch.clone()));
        assert_eq!(err, GenerateError::Mismatch(mismatch));
        let err = GenerateError::from(CodecError::CipherUnavailable);
        assert!(matches!(err, GenerateError::Encode(_)));
    }

    #[test]
    fn rejection_display() {
        let rejection = Rejection::new(ProtocolVersion::V203, 250, RejectReason::UnknownOpcode);
        let msg = rejection.to_string();
        assert!(msg.contains("250"));
        assert!(msg.contains("203"));
        assert!(msg.contains("unknown opcode"));
    }
}
