//! Error types for wire framing and opcode tables.

use std::fmt;

/// Result type for wire operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors raised while framing packets or building opcode tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireError {
    /// Frame holds no opcode byte.
    EmptyFrame,

    /// Handshake named a client revision with no dialect.
    UnsupportedClientVersion { found: u16 },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// Two table rows claim the same wire opcode.
    DuplicateOpcode { code: u8 },

    /// Outbound table gives one operation two wire opcodes.
    DuplicateOperation { name: &'static str },
}

/// Specific wire limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    PacketBytes,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFrame => write!(f, "frame has no opcode byte"),
            Self::UnsupportedClientVersion { found } => {
                write!(f, "unsupported client version: {found}")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::DuplicateOpcode { code } => write!(f, "duplicate wire opcode: {code}"),
            Self::DuplicateOperation { name } => {
                write!(f, "operation {name} mapped to more than one opcode")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PacketBytes => "packet bytes",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for WireError {}
