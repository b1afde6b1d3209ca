//! Structs carried by client-to-server operations.

use crate::common::{
    CharacterClass, DuelRules, ItemStack, PrivacySettings, SecureField, TilePoint,
};
use crate::message::NoPayload;
use crate::op::ClientOp;

/// Walk destination followed by relative waypoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkRequest {
    pub destination: TilePoint,
    pub steps: Vec<(i8, i8)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStyle {
    pub style: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogAnswer {
    pub option: i8,
}

/// Character designer result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppearanceChange {
    pub head_restrictions: i8,
    pub head_type: i8,
    pub body_type: i8,
    /// Always 2 from an unmodified client.
    pub must_equal_2: i8,
    pub hair_colour: i8,
    pub top_colour: i8,
    pub trouser_colour: i8,
    pub skin_colour: i8,
    /// Raw class byte; only the oldest client sends it.
    pub class_index: Option<i8>,
}

impl AppearanceChange {
    #[must_use]
    pub fn class(&self) -> Option<CharacterClass> {
        self.class_index.and_then(CharacterClass::from_index)
    }
}

/// Friend/ignore list edits name the other player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivateMessageSend {
    pub recipient: String,
    pub message: String,
}

/// Items placed into a trade or duel offer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOffer {
    pub items: Vec<ItemStack>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryTarget {
    pub tile: TilePoint,
    pub direction: u8,
}

/// What a spell is aimed at. The variant determines the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastTarget {
    Caster,
    Npc(u16),
    Player(u16),
    InventoryItem(u16),
    Land(TilePoint),
    Scenery(TilePoint),
    Boundary { tile: TilePoint, direction: u8 },
    GroundItem { tile: TilePoint, item: u16 },
}

impl CastTarget {
    /// The operation a cast at this target is sent as.
    #[must_use]
    pub const fn op(self) -> ClientOp {
        match self {
            Self::Caster => ClientOp::CastOnSelf,
            Self::Npc(_) => ClientOp::CastOnNpc,
            Self::Player(_) => ClientOp::PlayerCastPvp,
            Self::InventoryItem(_) => ClientOp::CastOnInventoryItem,
            Self::Land(_) => ClientOp::CastOnLand,
            Self::Scenery(_) => ClientOp::CastOnScenery,
            Self::Boundary { .. } => ClientOp::CastOnBoundary,
            Self::GroundItem { .. } => ClientOp::CastOnGroundItem,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellCast {
    pub spell: u16,
    pub target: CastTarget,
}

/// A server index of an NPC or player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MobTarget {
    pub server_index: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOnMob {
    pub server_index: u16,
    pub slot: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOnGroundItem {
    pub tile: TilePoint,
    pub ground_item: u16,
    pub slot: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundItemTake {
    pub tile: TilePoint,
    pub item: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOnItem {
    pub slot: u16,
    pub other_slot: u16,
}

/// An inventory index for equip, unequip, command and drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemIndex {
    pub index: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOnScenery {
    pub tile: TilePoint,
    pub slot: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOnBoundary {
    pub tile: TilePoint,
    pub direction: u8,
    pub slot: u16,
}

/// Shop buy or sell of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopTrade {
    pub item: u16,
    /// Stock level the client saw; used to detect stale shop windows.
    pub stock_amount: i32,
}

impl ShopTrade {
    /// Every buy or sell moves one unit.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerToggle {
    pub prayer: u8,
}

/// Client option being toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameSetting {
    CameraAuto,
    OneMouseButton,
    SoundOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSettingChange {
    pub index: u8,
    pub value: u8,
}

impl GameSettingChange {
    #[must_use]
    pub const fn setting(&self) -> Option<GameSetting> {
        match self.index {
            0 => Some(GameSetting::CameraAuto),
            2 => Some(GameSetting::OneMouseButton),
            3 => Some(GameSetting::SoundOff),
            _ => None,
        }
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.value == 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatText {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandText {
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbuseReport {
    pub player: String,
    /// Rule number with the `0x20` flag the client folds into it.
    pub reason: u8,
    pub action: u8,
}

/// Bank withdraw or deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BankTransfer {
    pub item: u16,
    pub amount: u16,
    /// Client fingerprint appended by newer clients; stored, never interpreted.
    pub trap: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SleepwordGuess {
    pub word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownPlayer {
    pub server_index: u16,
    pub appearance_id: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownPlayers {
    pub players: Vec<KnownPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PasswordChange {
    pub old_password: SecureField,
    pub new_password: SecureField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecoveryEntry {
    pub question: String,
    pub answer: SecureField,
}

/// Recovery questions and their encrypted answers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecoverySetup {
    pub entries: Vec<RecoveryEntry>,
}

payload_enum! {
    /// Decoded body of a client message.
    ClientPayload / ClientPayloadKind {
        Empty(NoPayload),
        Walk(WalkRequest),
        Tile(TilePoint),
        CombatStyle(CombatStyle),
        DialogAnswer(DialogAnswer),
        Appearance(AppearanceChange),
        PlayerName(PlayerName),
        PrivateMessage(PrivateMessageSend),
        ItemOffer(ItemOffer),
        DuelRules(DuelRules),
        Boundary(BoundaryTarget),
        SpellCast(SpellCast),
        ItemOnBoundary(ItemOnBoundary),
        MobTarget(MobTarget),
        ItemOnMob(ItemOnMob),
        ItemOnGroundItem(ItemOnGroundItem),
        GroundItemTake(GroundItemTake),
        ItemOnItem(ItemOnItem),
        ItemIndex(ItemIndex),
        ItemOnScenery(ItemOnScenery),
        ShopTrade(ShopTrade),
        Prayer(PrayerToggle),
        GameSetting(GameSettingChange),
        Chat(ChatText),
        Command(CommandText),
        Privacy(PrivacySettings),
        ReportAbuse(AbuseReport),
        BankTransfer(BankTransfer),
        Sleepword(SleepwordGuess),
        KnownPlayers(KnownPlayers),
        ChangePassword(PasswordChange),
        SetRecovery(RecoverySetup),
    }
}

impl ClientPayload {
    /// Returns `true` if this payload can be carried by `op`.
    #[must_use]
    pub fn matches(&self, op: ClientOp) -> bool {
        if op.kind() != Some(self.kind()) {
            return false;
        }
        match self {
            Self::SpellCast(cast) => cast.target.op() == op,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_target_selects_op() {
        let cast = ClientPayload::from(SpellCast {
            spell: 3,
            target: CastTarget::Npc(12),
        });
        assert!(cast.matches(ClientOp::CastOnNpc));
        assert!(!cast.matches(ClientOp::CastOnSelf));
        assert!(!cast.matches(ClientOp::NpcAttack));
    }

    #[test]
    fn every_cast_target_maps_to_spell_op() {
        let targets = [
            CastTarget::Caster,
            CastTarget::Npc(0),
            CastTarget::Player(0),
            CastTarget::InventoryItem(0),
            CastTarget::Land(TilePoint::default()),
            CastTarget::Scenery(TilePoint::default()),
            CastTarget::Boundary {
                tile: TilePoint::default(),
                direction: 0,
            },
            CastTarget::GroundItem {
                tile: TilePoint::default(),
                item: 0,
            },
        ];
        for target in targets {
            assert_eq!(target.op().kind(), Some(ClientPayloadKind::SpellCast));
        }
    }

    #[test]
    fn game_setting_indices() {
        let change = GameSettingChange { index: 2, value: 1 };
        assert_eq!(change.setting(), Some(GameSetting::OneMouseButton));
        assert!(change.enabled());
        assert_eq!(GameSettingChange { index: 1, value: 0 }.setting(), None);
    }

    #[test]
    fn appearance_class_only_when_present() {
        let mut appearance = AppearanceChange::default();
        assert_eq!(appearance.class(), None);
        appearance.class_index = Some(4);
        assert_eq!(appearance.class(), Some(CharacterClass::Miner));
    }

    #[test]
    fn empty_payload_matches_empty_ops() {
        let empty = ClientPayload::from(NoPayload);
        assert!(empty.matches(ClientOp::Heartbeat));
        assert!(empty.matches(ClientOp::BankClose));
        assert!(!empty.matches(ClientOp::Login));
    }
}
