//! Opcode tables for client revision 198.

use payload::{ClientOp, ServerOp};

pub(super) const INBOUND: &[(u8, ClientOp)] = &[
    (0, ClientOp::Login),
    (1, ClientOp::Login),
    (7, ClientOp::NpcTalkTo),
    (10, ClientOp::DuelFirstSettingsChanged),
    (12, ClientOp::ItemEquip),
    (14, ClientOp::CastOnScenery),
    (16, ClientOp::PlayerAppearanceChange),
    (17, ClientOp::PrayerActivated),
    (21, ClientOp::WalkToPoint),
    (24, ClientOp::DuelSecondAccepted),
    (30, ClientOp::SocialRemoveIgnore),
    (31, ClientOp::CastOnGroundItem),
    (36, ClientOp::PlayerFollow),
    (38, ClientOp::PlayerAcceptedInitTradeRequest),
    (40, ClientOp::ChatMessage),
    (47, ClientOp::NpcAttack),
    (48, ClientOp::CastOnBoundary),
    (49, ClientOp::CastOnNpc),
    (50, ClientOp::BankClose),
    (56, ClientOp::ShopClose),
    (60, ClientOp::SleepwordEntered),
    (65, ClientOp::PlayerAcceptedTrade),
    (66, ClientOp::GameSettingsChanged),
    (70, ClientOp::GroundItemUseItem),
    (76, ClientOp::Heartbeat),
    (82, ClientOp::DuelDeclined),
    (83, ClientOp::BankWithdraw),
    (89, ClientOp::PlayerDuel),
    (90, ClientOp::ObjectCommand),
    (104, ClientOp::GroundItemTake),
    (114, ClientOp::InteractWithBoundary),
    (116, ClientOp::PlayerAddedItemsToTradeOffer),
    (118, ClientOp::KnownPlayers),
    (119, ClientOp::CombatStyleChanged),
    (145, ClientOp::BankDeposit),
    (151, ClientOp::NpcCommand),
    (153, ClientOp::UseItemOnScenery),
    (154, ClientOp::DuelOfferItem),
    (156, ClientOp::CastOnSelf),
    (157, ClientOp::ShopBuy),
    (159, ClientOp::CastOnInventoryItem),
    (160, ClientOp::NpcUseItem),
    (163, ClientOp::InteractWithBoundary2),
    (164, ClientOp::PrayerDeactivated),
    (167, ClientOp::UseWithBoundary),
    (168, ClientOp::Logout),
    (169, ClientOp::PlayerCastPvp),
    (170, ClientOp::ItemUnequip),
    (172, ClientOp::ItemUseItem),
    (177, ClientOp::PlayerUseItem),
    (178, ClientOp::PlayerDeclinedTrade),
    (179, ClientOp::SocialRemoveFriend),
    (180, ClientOp::ReportAbuse),
    (190, ClientOp::ConfirmLogout),
    (191, ClientOp::PrivacySettingsChanged),
    (195, ClientOp::Command),
    (196, ClientOp::ItemDrop),
    (203, ClientOp::QuestionDialogAnswer),
    (204, ClientOp::SocialAddFriend),
    (210, ClientOp::PlayerAttack),
    (211, ClientOp::ShopSell),
    (219, ClientOp::ItemCommand),
    (220, ClientOp::CastOnLand),
    (225, ClientOp::SocialSendPrivateMessage),
    (227, ClientOp::ObjectCommand2),
    (230, ClientOp::WalkToEntity),
    (241, ClientOp::SocialAddIgnore),
    (245, ClientOp::DuelFirstAccepted),
    (250, ClientOp::PlayerInitTradeRequest),
];

pub(super) const OUTBOUND: &[(u8, ServerOp)] = &[
    (3, ServerOp::TradeClose),
    (10, ServerOp::DuelClose),
    (11, ServerOp::CantLogout),
    (13, ServerOp::TradeOpenConfirm),
    (18, ServerOp::PlayerCoords),
    (21, ServerOp::SleepFatigue),
    (23, ServerOp::DuelWindow),
    (29, ServerOp::BoundaryHandler),
    (51, ServerOp::SleepScreen),
    (55, ServerOp::OptionsMenuOpen),
    (72, ServerOp::Death),
    (75, ServerOp::DuelOpponentsItems),
    (79, ServerOp::EquipmentStats),
    (84, ServerOp::Fatigue),
    (93, ServerOp::OptionsMenuClose),
    (99, ServerOp::Stat),
    (101, ServerOp::FriendUpdate),
    (104, ServerOp::InventoryRemoveItem),
    (105, ServerOp::GameSettings),
    (108, ServerOp::Experience),
    (113, ServerOp::SystemUpdate),
    (118, ServerOp::TradeAccepted),
    (119, ServerOp::DuelSettings),
    (120, ServerOp::BankOpen),
    (125, ServerOp::StopSleep),
    (127, ServerOp::SleepwordIncorrect),
    (138, ServerOp::Box),
    (139, ServerOp::UpdatePlayers),
    (140, ServerOp::PrayersActive),
    (144, ServerOp::IgnoreList),
    (146, ServerOp::Box2),
    (148, ServerOp::PrivacySettings),
    (152, ServerOp::NpcCoords),
    (153, ServerOp::ShopOpen),
    (159, ServerOp::UpdateNpc),
    (164, ServerOp::Quests),
    (167, ServerOp::WorldInfo),
    (171, ServerOp::Inventory),
    (172, ServerOp::BankUpdate),
    (174, ServerOp::FriendList),
    (176, ServerOp::WelcomeInfo),
    (178, ServerOp::LogoutRequestConfirm),
    (181, ServerOp::GroundItemHandler),
    (193, ServerOp::PrivateMessage),
    (202, ServerOp::ServerMessage),
    (205, ServerOp::Stats),
    (207, ServerOp::TradeOtherAccepted),
    (210, ServerOp::DuelOtherAccepted),
    (226, ServerOp::BankClose),
    (235, ServerOp::DuelAccepted),
    (237, ServerOp::AppearanceScreen),
    (238, ServerOp::SceneryHandler),
    (240, ServerOp::TradeWindow),
    (242, ServerOp::InventoryUpdateItem),
    (243, ServerOp::ShopClose),
    (245, ServerOp::TradeOtherItems),
    (246, ServerOp::RemoveWorldEntity),
    (250, ServerOp::PlaySound),
    (252, ServerOp::Bubble),
    (255, ServerOp::DuelConfirmWindow),
];
