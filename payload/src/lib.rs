//! Protocol-independent message model for the RSC protocol translation layer.
//!
//! This crate defines what a game message *is*, independent of any wire dialect:
//! - Logical operations for both directions ([`ClientOp`], [`ServerOp`])
//! - One typed struct per message shape, wrapped in [`ClientPayload`] / [`ServerPayload`]
//! - Shape checking that ties an operation to the struct it carries
//!
//! # Design Principles
//!
//! - **Version-free** - No opcode numbers, byte widths or dialect quirks live here.
//! - **Closed shapes** - Every operation maps to exactly one payload kind.
//! - **Explicit failure states** - Secure fields say when they errored instead of
//!   collapsing to an empty string.

/// Declares a payload enum, its kind tag enum, and `From` conversions.
macro_rules! payload_enum {
    (
        $(#[$meta:meta])*
        $name:ident / $kind:ident { $($variant:ident($ty:ty)),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant($ty)),*
        }

        /// Shape tag of a payload, without its data.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $kind {
            $($variant),*
        }

        impl $name {
            /// Returns the shape tag of this payload.
            #[must_use]
            pub const fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant(_) => $kind::$variant),*
                }
            }
        }

        impl $kind {
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

mod client;
mod common;
mod error;
mod message;
mod op;
mod server;

pub use client::{
    AbuseReport, AppearanceChange, BankTransfer, BoundaryTarget, CastTarget, ChatText,
    ClientPayload, ClientPayloadKind, CombatStyle, CommandText, DialogAnswer, GameSetting,
    GameSettingChange, GroundItemTake, ItemIndex, ItemOffer, ItemOnBoundary, ItemOnGroundItem,
    ItemOnItem, ItemOnMob, ItemOnScenery, KnownPlayer, KnownPlayers, MobTarget, PasswordChange,
    PlayerName, PrayerToggle, PrivateMessageSend, RecoveryEntry, RecoverySetup, ShopTrade,
    SleepwordGuess, SpellCast, WalkRequest,
};
pub use common::{
    CharacterClass, DuelRules, ItemStack, PrivacySettings, SecureField, Skill, TilePoint,
    SKILL_COUNT,
};
pub use error::{ShapeMismatch, ShapeResult};
pub use message::{ClientMessage, NoPayload, ServerMessage};
pub use op::{ClientOp, ServerOp};
pub use server::{
    AcceptState, ActionBubble, AddedNpc, AddedPlayer, AppearanceEntry, AppearanceUpdate,
    BankContents, BankSlotUpdate, BoundaryPlacement, BoundaryUpdate, ClearLocations,
    DuelConfirm, EquipmentStats, ExperienceUpdate, FatigueLevel, FriendList, FriendStatus,
    GameSettings, GroundItemChange, GroundItemUpdate, IgnoreList, InventoryContents,
    InventoryItem, InventorySlot, InventorySlotUpdate, ItemList, KnownMobUpdate, NpcPositions,
    OptionsMenu, PlayerPositions, PrayerStates, PrivateMessageReceived, QuestStages,
    RecoveryAge, SceneryPlacement, SceneryUpdate, ServerPayload, ServerPayloadKind,
    ShopContents, ShopItem, SleepImage, SoundEffect, StatUpdate, StatsSnapshot, SystemUpdate,
    TextMessage, TradeConfirm, WelcomeInfo, WindowOpen, WorldInfo, QUEST_COUNT,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = ClientOp::ALL;
        let _ = ServerOp::ALL;
        let _ = ItemStack::new(1, 2);
        let _ = TilePoint::new(3, 4);
        let _: ShapeResult<()> = Ok(());
        let _ = ClientMessage::new(ClientOp::Heartbeat, NoPayload.into());
        let _ = ServerMessage::new(ServerOp::Death, NoPayload.into());
    }

    #[test]
    fn every_client_op_has_kind_or_is_session_layer() {
        let shaped = ClientOp::ALL.iter().filter(|op| op.kind().is_some()).count();
        let session = ClientOp::ALL.iter().filter(|op| op.is_session_layer()).count();
        assert_eq!(shaped + session, ClientOp::ALL.len());
        assert_eq!(session, 5);
    }

    #[test]
    fn kind_names() {
        assert_eq!(ServerPayloadKind::Inventory.name(), "Inventory");
        assert_eq!(ClientPayloadKind::BankTransfer.name(), "BankTransfer");
    }
}
