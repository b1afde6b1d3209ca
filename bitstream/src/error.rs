//! Error types for cursor operations.

use std::fmt;

/// Result type for cursor operations.
pub type BitResult<T> = Result<T, BitError>;

/// Errors that can occur while writing or reading a packet body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// Attempted to read more bits than remain in the buffer.
    EndOfBits {
        /// Number of bits requested.
        requested: usize,
        /// Number of bits available.
        available: usize,
    },

    /// Invalid bit count for the operation.
    InvalidBitCount {
        /// The invalid bit count provided.
        bits: u8,
        /// Maximum allowed bits for this operation.
        max_bits: u8,
    },

    /// Value exceeds the range representable by the specified number of bits.
    ValueOutOfRange {
        /// The value that was out of range.
        value: u64,
        /// Number of bits available.
        bits: u8,
    },

    /// Value does not fit the variable-width "unsigned byte int" encoding.
    SmartOutOfRange {
        /// The value that was out of range.
        value: u32,
    },

    /// A null-terminated string ran to the end of the buffer.
    UnterminatedString {
        /// Bytes scanned before the buffer ended.
        scanned: usize,
    },

    /// A byte-level operation, or `enter_bit_mode`, was called inside bit mode.
    BitModeActive,

    /// A bit-level operation, or `exit_bit_mode`, was called outside bit mode.
    BitModeInactive,
}

impl BitError {
    /// Returns `true` for caller defects (unbalanced bit mode) as opposed to
    /// conditions caused by the bytes on the wire.
    #[must_use]
    pub const fn is_programming_error(&self) -> bool {
        matches!(self, Self::BitModeActive | Self::BitModeInactive)
    }
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfBuffer {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::EndOfBits {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bits but only {available} bits available"
                )
            }
            Self::InvalidBitCount { bits, max_bits } => {
                write!(f, "invalid bit count {bits}, maximum allowed is {max_bits}")
            }
            Self::ValueOutOfRange { value, bits } => {
                write!(f, "value {value} cannot be represented in {bits} bits")
            }
            Self::SmartOutOfRange { value } => {
                write!(f, "value {value} exceeds the unsigned byte int range")
            }
            Self::UnterminatedString { scanned } => {
                write!(f, "string not terminated after {scanned} bytes")
            }
            Self::BitModeActive => write!(f, "operation not allowed while in bit mode"),
            Self::BitModeInactive => write!(f, "operation requires bit mode"),
        }
    }
}

impl std::error::Error for BitError {}
