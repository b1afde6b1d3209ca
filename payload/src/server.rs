//! Structs carried by server-to-client operations.

use crate::common::{DuelRules, ItemStack, PrivacySettings, TilePoint, SKILL_COUNT};
use crate::message::NoPayload;

/// Number of quest stage slots in the quest list message.
pub const QUEST_COUNT: usize = 50;

/// Server text, message boxes included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextMessage {
    pub text: String,
}

impl TextMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionsMenu {
    pub options: Vec<String>,
}

/// Countdown to a server restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemUpdate {
    pub seconds: u32,
}

/// Every skill's current level, base level and experience.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    pub current: [u8; SKILL_COUNT],
    pub max: [u8; SKILL_COUNT],
    pub experience: [u32; SKILL_COUNT],
    pub quest_points: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatUpdate {
    pub skill: u8,
    pub current: u8,
    pub max: u8,
    pub experience: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceUpdate {
    pub skill: u8,
    pub experience: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentStats {
    pub armour: u8,
    pub aim: u8,
    pub power: u8,
    pub magic: u8,
    pub prayer: u8,
}

/// Quest stage per quest slot; written as exactly [`QUEST_COUNT`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestStages {
    pub stages: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerStates {
    pub active: Vec<bool>,
}

/// Fatigue in server units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FatigueLevel {
    pub fatigue: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundEffect {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionBubble {
    pub is_grab: bool,
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSettings {
    pub camera_auto: bool,
    pub one_mouse_button: bool,
    pub sound_off: bool,
}

/// Opens a trade or duel window with another player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOpen {
    pub server_index: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcceptState {
    pub accepted: bool,
}

/// Second trade screen showing both offers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeConfirm {
    pub opponent: String,
    pub opponent_items: Vec<ItemStack>,
    pub my_items: Vec<ItemStack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemList {
    pub items: Vec<ItemStack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelConfirm {
    pub opponent: String,
    pub opponent_items: Vec<ItemStack>,
    pub my_items: Vec<ItemStack>,
    pub rules: DuelRules,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SleepImage {
    pub image: Vec<u8>,
}

/// A friend and the world they are on; 0 is offline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FriendStatus {
    pub name: String,
    pub world: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FriendList {
    pub friends: Vec<FriendStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IgnoreList {
    pub names: Vec<String>,
}

/// An inventory entry. `amount` is 0 for items that are not stackable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub id: u16,
    pub amount: u32,
    pub wielded: bool,
}

impl InventoryItem {
    /// The reserved empty-slot value.
    pub const EMPTY: Self = Self {
        id: 0,
        amount: 0,
        wielded: false,
    };

    #[must_use]
    pub const fn is_empty_slot(&self) -> bool {
        self.id == 0 && self.amount == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryContents {
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub slot: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlotUpdate {
    pub slot: u8,
    pub item: InventoryItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BankContents {
    pub capacity: u16,
    pub items: Vec<ItemStack>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BankSlotUpdate {
    pub slot: u8,
    pub item: ItemStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopItem {
    pub id: u16,
    pub stock: u16,
    /// Normal stock level; the client prices from the difference.
    pub base_stock: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopContents {
    pub general: bool,
    pub sell_modifier: u8,
    pub buy_modifier: u8,
    pub items: Vec<ShopItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivateMessageReceived {
    pub sender: String,
    pub message_id: i32,
    pub message: String,
}

/// How long ago recovery questions were set, as shown at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecoveryAge {
    #[default]
    Unset,
    /// Fewer than 14 days.
    DaysAgo(u8),
    LongAgo,
}

impl RecoveryAge {
    /// Classifies a day count where a negative value means never set.
    #[must_use]
    pub const fn from_days(days: i32) -> Self {
        if days < 0 {
            Self::Unset
        } else if days < 14 {
            Self::DaysAgo(days as u8)
        } else {
            Self::LongAgo
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WelcomeInfo {
    /// Textual IPv4 or IPv6 address of the previous login.
    pub last_ip: String,
    pub days_since_login: u16,
    pub recovery_age: RecoveryAge,
    pub unread_messages: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldInfo {
    pub server_index: u16,
    pub plane_width: u16,
    pub plane_height: u16,
    pub plane_floor: u16,
    pub floor_distance: u16,
}

/// Per-tick change for an entity the client already tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KnownMobUpdate {
    Unchanged,
    /// Stepped one tile in a direction (0-7).
    Moved { direction: u8 },
    /// Turned to face a sprite (0-11).
    Turned { sprite: u8 },
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddedPlayer {
    pub server_index: u16,
    /// Offset from the local player, -16..=15.
    pub offset_x: i8,
    pub offset_y: i8,
    pub sprite: u8,
    pub needs_appearance: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddedNpc {
    pub server_index: u16,
    pub offset_x: i8,
    pub offset_y: i8,
    pub sprite: u8,
    pub npc_type: u16,
}

/// Local player position plus movement of nearby players.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerPositions {
    pub region_x: u16,
    pub region_y: u16,
    pub sprite: u8,
    pub known: Vec<KnownMobUpdate>,
    pub added: Vec<AddedPlayer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcPositions {
    pub known: Vec<KnownMobUpdate>,
    pub added: Vec<AddedNpc>,
}

/// One field of an appearance/event batch, written in order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppearanceEntry {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    AppearanceByte(u8),
    Text(String),
    /// Compressed chat text behind a one-byte length.
    Chat(String),
    /// Pre-encoded bytes; decoding always yields a single raw entry.
    Raw(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppearanceUpdate {
    pub entries: Vec<AppearanceEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneryPlacement {
    pub id: u16,
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneryUpdate {
    pub objects: Vec<SceneryPlacement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryPlacement {
    pub id: u16,
    pub x: i8,
    pub y: i8,
    pub direction: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryUpdate {
    pub boundaries: Vec<BoundaryPlacement>,
}

/// Ground item appearing at, or every item vanishing from, a local tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroundItemChange {
    Place { id: u16, x: i8, y: i8 },
    ClearTile { x: i8, y: i8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundItemUpdate {
    pub items: Vec<GroundItemChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearLocations {
    pub points: Vec<TilePoint>,
}

payload_enum! {
    /// Body of a server message before encoding.
    ServerPayload / ServerPayloadKind {
        Empty(NoPayload),
        Text(TextMessage),
        OptionsMenu(OptionsMenu),
        SystemUpdate(SystemUpdate),
        Stats(StatsSnapshot),
        Stat(StatUpdate),
        Experience(ExperienceUpdate),
        EquipmentStats(EquipmentStats),
        Quests(QuestStages),
        Prayers(PrayerStates),
        Fatigue(FatigueLevel),
        Sound(SoundEffect),
        Bubble(ActionBubble),
        GameSettings(GameSettings),
        Privacy(PrivacySettings),
        Window(WindowOpen),
        Accepted(AcceptState),
        TradeConfirm(TradeConfirm),
        ItemList(ItemList),
        DuelRules(DuelRules),
        DuelConfirm(DuelConfirm),
        SleepScreen(SleepImage),
        FriendList(FriendList),
        Friend(FriendStatus),
        IgnoreList(IgnoreList),
        Inventory(InventoryContents),
        InventorySlot(InventorySlot),
        InventorySlotUpdate(InventorySlotUpdate),
        Bank(BankContents),
        BankSlotUpdate(BankSlotUpdate),
        Shop(ShopContents),
        PrivateMessage(PrivateMessageReceived),
        Welcome(WelcomeInfo),
        WorldInfo(WorldInfo),
        NpcPositions(NpcPositions),
        PlayerPositions(PlayerPositions),
        Appearance(AppearanceUpdate),
        Scenery(SceneryUpdate),
        Boundaries(BoundaryUpdate),
        GroundItems(GroundItemUpdate),
        ClearLocations(ClearLocations),
    }
}
