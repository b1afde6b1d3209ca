//! Configurable limits for bounded decoding.

/// Wire-level limits for packet framing.
///
/// Field-level bounds (text lengths, list counts) belong to the codec crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum payload size in bytes, opcode excluded.
    pub max_packet_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Largest frame the legacy clients ever send or accept
            max_packet_bytes: 5000,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_packet_bytes: 512,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_packet_bytes: usize::MAX,
        }
    }
}
