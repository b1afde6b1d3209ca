//! Payload length rules applied before decoding.
//!
//! The check is coarse: it only guarantees the decoder sees a plausible byte
//! count. Field-level checks (list counts against remaining bytes) still
//! happen during decode.

use payload::ClientOp;
use tracing::{debug, warn};

use crate::registry;
use crate::version::ProtocolVersion;

/// Expected payload length for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    Exact(usize),
    AtLeast(usize),
    Unconstrained,
}

impl PayloadShape {
    #[must_use]
    pub const fn accepts(self, len: usize) -> bool {
        match self {
            Self::Exact(expected) => len == expected,
            Self::AtLeast(min) => len >= min,
            Self::Unconstrained => true,
        }
    }
}

/// Length rule for `op` as sent by a `version` client.
#[must_use]
pub fn client_shape(version: ProtocolVersion, op: ClientOp) -> PayloadShape {
    match version {
        ProtocolVersion::V203 | ProtocolVersion::V202 => base_shape(op),
        ProtocolVersion::V201
        | ProtocolVersion::V199
        | ProtocolVersion::V198
        | ProtocolVersion::V196 => trapless_shape(op),
        ProtocolVersion::V115 => legacy_shape(op),
    }
}

/// Returns `true` if `opcode` is known to `version` and `len` fits its rule.
///
/// Unknown opcodes are logged as a sign of a hostile or mismatched client.
#[must_use]
pub fn is_well_formed(version: ProtocolVersion, opcode: u8, len: usize) -> bool {
    let Some(op) = registry::inbound(version).resolve(opcode) else {
        warn!(version = %version, opcode, len, "unknown opcode");
        return false;
    };
    let shape = client_shape(version, op);
    if shape.accepts(len) {
        true
    } else {
        debug!(version = %version, opcode, op = %op, len, ?shape, "malformed length");
        false
    }
}

fn base_shape(op: ClientOp) -> PayloadShape {
    use ClientOp as Op;
    use PayloadShape::{AtLeast, Exact, Unconstrained};

    match op {
        Op::Heartbeat
        | Op::ConfirmLogout
        | Op::Logout
        | Op::DuelFirstAccepted
        | Op::DuelDeclined
        | Op::DuelSecondAccepted
        | Op::ShopClose
        | Op::PlayerAcceptedInitTradeRequest
        | Op::PlayerDeclinedTrade
        | Op::PlayerAcceptedTrade
        | Op::BankClose => Exact(0),
        Op::CombatStyleChanged
        | Op::QuestionDialogAnswer
        | Op::PrayerActivated
        | Op::PrayerDeactivated => Exact(1),
        Op::PlayerAppearanceChange => Exact(8),
        Op::WalkToPoint | Op::WalkToEntity => AtLeast(4),
        Op::Blink => Exact(4),
        Op::SocialAddFriend
        | Op::SocialRemoveFriend
        | Op::SocialAddIgnore
        | Op::SocialRemoveIgnore
        | Op::SocialSendPrivateMessage => AtLeast(8),
        Op::ChatMessage | Op::Command | Op::SleepwordEntered => AtLeast(1),
        Op::NpcTalkTo
        | Op::NpcCommand
        | Op::NpcAttack
        | Op::PlayerAttack
        | Op::PlayerDuel
        | Op::PlayerInitTradeRequest
        | Op::PlayerFollow
        | Op::ItemEquip
        | Op::ItemUnequip
        | Op::ItemCommand
        | Op::ItemDrop
        | Op::CastOnSelf => Exact(2),
        Op::CastOnNpc
        | Op::CastOnInventoryItem
        | Op::PlayerCastPvp
        | Op::NpcUseItem
        | Op::PlayerUseItem
        | Op::ItemUseItem
        | Op::ObjectCommand
        | Op::ObjectCommand2
        | Op::DuelFirstSettingsChanged
        | Op::PrivacySettingsChanged => Exact(4),
        Op::InteractWithBoundary | Op::InteractWithBoundary2 => Exact(5),
        Op::CastOnLand | Op::CastOnScenery | Op::UseItemOnScenery | Op::ShopBuy | Op::ShopSell => {
            Exact(6)
        }
        Op::CastOnBoundary | Op::UseWithBoundary => Exact(7),
        Op::CastOnGroundItem | Op::GroundItemUseItem => Exact(8),
        Op::GroundItemTake => AtLeast(6),
        Op::BankWithdraw | Op::BankDeposit => AtLeast(8),
        Op::DuelOfferItem | Op::PlayerAddedItemsToTradeOffer => AtLeast(1),
        Op::GameSettingsChanged => Exact(2),
        Op::ReportAbuse => Exact(10),
        Op::KnownPlayers => AtLeast(2),
        Op::ChangePassword | Op::SetRecovery => AtLeast(1),
        Op::Login
        | Op::RegisterAccount
        | Op::ForgotPassword
        | Op::RecoveryAttempt
        | Op::SendDebugInfo => Unconstrained,
    }
}

fn trapless_shape(op: ClientOp) -> PayloadShape {
    match op {
        ClientOp::BankWithdraw | ClientOp::BankDeposit => PayloadShape::Exact(4),
        _ => base_shape(op),
    }
}

fn legacy_shape(op: ClientOp) -> PayloadShape {
    match op {
        ClientOp::PlayerAppearanceChange => PayloadShape::Exact(9),
        ClientOp::ShopBuy | ClientOp::ShopSell => PayloadShape::Exact(4),
        ClientOp::ChatMessage => PayloadShape::AtLeast(1),
        _ => trapless_shape(op),
    }
}
