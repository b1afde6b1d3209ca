//! Supported client protocol revisions.

use std::fmt;

use crate::error::{WireError, WireResult};

/// A historical client wire dialect.
///
/// Every version carries its own opcode numbering. Layout differences are
/// confined to a handful of operations and live in the codec crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtocolVersion {
    V115,
    V196,
    V198,
    V199,
    V201,
    V202,
    V203,
}

impl ProtocolVersion {
    /// Every supported version, oldest first.
    pub const ALL: [Self; 7] = [
        Self::V115,
        Self::V196,
        Self::V198,
        Self::V199,
        Self::V201,
        Self::V202,
        Self::V203,
    ];

    /// The newest version; its layouts are the base every other dialect
    /// delegates to.
    pub const BASE: Self = Self::V203;

    /// Client revision number as sent in the login handshake.
    #[must_use]
    pub const fn number(self) -> u16 {
        match self {
            Self::V115 => 115,
            Self::V196 => 196,
            Self::V198 => 198,
            Self::V199 => 199,
            Self::V201 => 201,
            Self::V202 => 202,
            Self::V203 => 203,
        }
    }

    /// Maps a handshake revision number to a supported version.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnsupportedClientVersion`] for any other number.
    pub fn from_client_version(number: u16) -> WireResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|version| version.number() == number)
            .ok_or(WireError::UnsupportedClientVersion { found: number })
    }

    /// Returns `true` for the oldest dialect, which uses the word-dictionary
    /// text codec and has no outbound table.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::V115)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_client_version_known() {
        for version in ProtocolVersion::ALL {
            assert_eq!(
                ProtocolVersion::from_client_version(version.number()),
                Ok(version)
            );
        }
    }

    #[test]
    fn from_client_version_unknown() {
        assert_eq!(
            ProtocolVersion::from_client_version(200),
            Err(WireError::UnsupportedClientVersion { found: 200 })
        );
    }

    #[test]
    fn ordering_follows_revision() {
        assert!(ProtocolVersion::V115 < ProtocolVersion::V196);
        assert_eq!(ProtocolVersion::ALL.iter().max(), Some(&ProtocolVersion::BASE));
    }

    #[test]
    fn display_is_number() {
        assert_eq!(ProtocolVersion::V199.to_string(), "199");
    }
}
