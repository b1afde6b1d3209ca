//! Opcode tables for the oldest supported client, revision 115.

use payload::ClientOp;

pub(super) const INBOUND: &[(u8, ClientOp)] = &[
    (0, ClientOp::Login),
    (1, ClientOp::ConfirmLogout),
    (2, ClientOp::RegisterAccount),
    (3, ClientOp::ChatMessage),
    (4, ClientOp::ForgotPassword),
    (5, ClientOp::Heartbeat),
    (6, ClientOp::Logout),
    (7, ClientOp::Command),
    (8, ClientOp::RecoveryAttempt),
    (17, ClientOp::SendDebugInfo),
    (19, ClientOp::Login),
    (25, ClientOp::ChangePassword),
    (26, ClientOp::SocialAddFriend),
    (27, ClientOp::SocialRemoveFriend),
    (28, ClientOp::SocialSendPrivateMessage),
    (29, ClientOp::SocialAddIgnore),
    (30, ClientOp::SocialRemoveIgnore),
    (31, ClientOp::PrivacySettingsChanged),
    (198, ClientOp::DuelSecondAccepted),
    (199, ClientOp::DuelFirstAccepted),
    (200, ClientOp::DuelFirstSettingsChanged),
    (201, ClientOp::DuelOfferItem),
    (202, ClientOp::PlayerAcceptedTrade),
    (203, ClientOp::DuelDeclined),
    (204, ClientOp::PlayerDuel),
    (205, ClientOp::BankDeposit),
    (206, ClientOp::BankWithdraw),
    (207, ClientOp::BankClose),
    (208, ClientOp::SetRecovery),
    (211, ClientOp::PrayerDeactivated),
    (212, ClientOp::PrayerActivated),
    (213, ClientOp::GameSettingsChanged),
    (214, ClientOp::PlayerFollow),
    (215, ClientOp::WalkToEntity),
    (216, ClientOp::ShopSell),
    (217, ClientOp::ShopBuy),
    (218, ClientOp::ShopClose),
    (219, ClientOp::PlayerUseItem),
    (220, ClientOp::CastOnInventoryItem),
    (221, ClientOp::CastOnLand),
    (222, ClientOp::CastOnScenery),
    (223, ClientOp::CastOnBoundary),
    (224, ClientOp::CastOnGroundItem),
    (225, ClientOp::CastOnNpc),
    (226, ClientOp::PlayerCastPvp),
    (227, ClientOp::CastOnSelf),
    (228, ClientOp::PlayerAttack),
    (229, ClientOp::InteractWithBoundary2),
    (230, ClientOp::ObjectCommand2),
    (231, ClientOp::CombatStyleChanged),
    (232, ClientOp::PlayerAcceptedInitTradeRequest),
    (233, ClientOp::PlayerDeclinedTrade),
    (234, ClientOp::PlayerAddedItemsToTradeOffer),
    (235, ClientOp::PlayerInitTradeRequest),
    (236, ClientOp::PlayerAppearanceChange),
    (237, ClientOp::QuestionDialogAnswer),
    (238, ClientOp::InteractWithBoundary),
    (239, ClientOp::UseWithBoundary),
    (240, ClientOp::ItemUseItem),
    (241, ClientOp::UseItemOnScenery),
    (242, ClientOp::ObjectCommand),
    (243, ClientOp::NpcUseItem),
    (244, ClientOp::NpcAttack),
    (245, ClientOp::NpcTalkTo),
    (246, ClientOp::ItemCommand),
    (248, ClientOp::ItemUnequip),
    (249, ClientOp::ItemEquip),
    (250, ClientOp::GroundItemUseItem),
    (251, ClientOp::ItemDrop),
    (252, ClientOp::GroundItemTake),
    (254, ClientOp::KnownPlayers),
    (255, ClientOp::WalkToPoint),
];
