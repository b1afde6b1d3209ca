//! Limits and scaling constants applied by the payload codecs.

/// Codec-specific limits enforced while encoding and decoding payload fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecLimits {
    /// Maximum characters of message-box text; longer text is truncated.
    pub max_box_text: usize,
    /// Maximum characters of decoded legacy chat.
    pub max_chat_chars: usize,
    /// Maximum entries in a byte-counted list; longer lists are truncated.
    pub max_list_count: usize,
    /// Maximum options in an options menu.
    pub max_menu_options: usize,
    /// Highest item id a client may be shown in a trade confirmation.
    pub max_authentic_item_id: u16,
    /// Server fatigue units per wire unit.
    pub fatigue_scale: u32,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_box_text: 4975,
            max_chat_chars: 80,
            max_list_count: 255,
            max_menu_options: 5,
            max_authentic_item_id: 1289,
            fatigue_scale: 200,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_box_text: 64,
            max_chat_chars: 80,
            max_list_count: 8,
            max_menu_options: 5,
            max_authentic_item_id: 1289,
            fatigue_scale: 200,
        }
    }

    /// Creates limits with no truncation (use with caution).
    ///
    /// Byte-counted lists still cannot exceed 255 entries on the wire.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_box_text: usize::MAX,
            max_chat_chars: usize::MAX,
            max_list_count: u8::MAX as usize,
            max_menu_options: u8::MAX as usize,
            max_authentic_item_id: u16::MAX,
            fatigue_scale: 1,
        }
    }

    /// Entry count written for a byte-counted list of `len` items.
    pub(crate) fn list_count(&self, len: usize) -> u8 {
        let capped = len.min(self.max_list_count).min(usize::from(u8::MAX));
        u8::try_from(capped).unwrap_or(u8::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_match_client_expectations() {
        let limits = CodecLimits::default();
        assert_eq!(limits.max_box_text, 4975);
        assert_eq!(limits.max_menu_options, 5);
        assert_eq!(limits.fatigue_scale, 200);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = CodecLimits::for_testing();
        let default_limits = CodecLimits::default();
        assert!(test_limits.max_box_text < default_limits.max_box_text);
        assert!(test_limits.max_list_count < default_limits.max_list_count);
    }

    #[test]
    fn list_count_saturates_at_one_byte() {
        let limits = CodecLimits::unlimited();
        assert_eq!(limits.list_count(300), 255);
        assert_eq!(CodecLimits::default().list_count(3), 3);
        assert_eq!(CodecLimits::for_testing().list_count(20), 8);
    }
}
