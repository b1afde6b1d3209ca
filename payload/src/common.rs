//! Value types shared by client and server messages.

/// A catalog item id with a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub id: u16,
    pub amount: u32,
}

impl ItemStack {
    #[must_use]
    pub const fn new(id: u16, amount: u32) -> Self {
        Self { id, amount }
    }
}

/// A world tile coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePoint {
    pub x: u16,
    pub y: u16,
}

impl TilePoint {
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A credential assembled from encrypted blocks.
///
/// `Errored` means at least one block failed to decrypt or disagreed on the
/// session id. It is distinct from `Value(String::new())`, which is an empty
/// submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecureField {
    Value(String),
    Errored,
}

impl SecureField {
    /// Returns the plaintext, or `None` if the field errored.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Value(text) => Some(text),
            Self::Errored => None,
        }
    }

    /// Returns the plaintext, or an empty string if the field errored.
    #[must_use]
    pub fn as_str_or_empty(&self) -> &str {
        self.value().unwrap_or("")
    }

    #[must_use]
    pub const fn is_errored(&self) -> bool {
        matches!(self, Self::Errored)
    }
}

impl From<&str> for SecureField {
    fn from(text: &str) -> Self {
        Self::Value(text.to_owned())
    }
}

/// Chat/trade/duel visibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivacySettings {
    pub block_chat: bool,
    pub block_private: bool,
    pub block_trade: bool,
    pub block_duel: bool,
}

/// Duel restrictions agreed by both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelRules {
    pub no_retreat: bool,
    pub no_magic: bool,
    pub no_prayer: bool,
    pub no_weapons: bool,
}

/// Starting class offered by the oldest client at character creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterClass {
    Adventurer,
    Warrior,
    Wizard,
    Ranger,
    Miner,
}

impl CharacterClass {
    #[must_use]
    pub const fn from_index(index: i8) -> Option<Self> {
        match index {
            0 => Some(Self::Adventurer),
            1 => Some(Self::Warrior),
            2 => Some(Self::Wizard),
            3 => Some(Self::Ranger),
            4 => Some(Self::Miner),
            _ => None,
        }
    }
}

/// Skills in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Skill {
    Attack,
    Defense,
    Strength,
    Hits,
    Ranged,
    Prayer,
    Magic,
    Cooking,
    Woodcutting,
    Fletching,
    Fishing,
    Firemaking,
    Crafting,
    Smithing,
    Mining,
    Herblaw,
    Agility,
    Thieving,
}

/// Number of skills carried by the stats message.
pub const SKILL_COUNT: usize = 18;

impl Skill {
    pub const ALL: [Self; SKILL_COUNT] = [
        Self::Attack,
        Self::Defense,
        Self::Strength,
        Self::Hits,
        Self::Ranged,
        Self::Prayer,
        Self::Magic,
        Self::Cooking,
        Self::Woodcutting,
        Self::Fletching,
        Self::Fishing,
        Self::Firemaking,
        Self::Crafting,
        Self::Smithing,
        Self::Mining,
        Self::Herblaw,
        Self::Agility,
        Self::Thieving,
    ];

    /// Position in the stats arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_field_errored_differs_from_empty() {
        let empty = SecureField::from("");
        assert_ne!(empty, SecureField::Errored);
        assert_eq!(empty.value(), Some(""));
        assert_eq!(SecureField::Errored.value(), None);
        assert_eq!(SecureField::Errored.as_str_or_empty(), "");
    }

    #[test]
    fn class_index_mapping() {
        assert_eq!(CharacterClass::from_index(2), Some(CharacterClass::Wizard));
        assert_eq!(CharacterClass::from_index(5), None);
        assert_eq!(CharacterClass::from_index(-1), None);
    }

    #[test]
    fn skill_order() {
        assert_eq!(Skill::Attack.index(), 0);
        assert_eq!(Skill::Thieving.index(), SKILL_COUNT - 1);
        for (i, skill) in Skill::ALL.iter().enumerate() {
            assert_eq!(skill.index(), i);
        }
    }
}
