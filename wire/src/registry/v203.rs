//! Opcode tables for client revision 203, the base dialect.

use payload::{ClientOp, ServerOp};

pub(super) const INBOUND: &[(u8, ClientOp)] = &[
    (0, ClientOp::Login),
    (1, ClientOp::Login),
    (4, ClientOp::CastOnInventoryItem),
    (8, ClientOp::DuelFirstSettingsChanged),
    (14, ClientOp::InteractWithBoundary),
    (16, ClientOp::WalkToEntity),
    (22, ClientOp::BankWithdraw),
    (23, ClientOp::BankDeposit),
    (29, ClientOp::CombatStyleChanged),
    (31, ClientOp::ConfirmLogout),
    (33, ClientOp::DuelOfferItem),
    (38, ClientOp::Command),
    (45, ClientOp::SleepwordEntered),
    (46, ClientOp::PlayerAddedItemsToTradeOffer),
    (50, ClientOp::CastOnNpc),
    (53, ClientOp::GroundItemUseItem),
    (55, ClientOp::PlayerAcceptedInitTradeRequest),
    (59, ClientOp::Blink),
    (60, ClientOp::PrayerActivated),
    (64, ClientOp::PrivacySettingsChanged),
    (67, ClientOp::Heartbeat),
    (77, ClientOp::DuelSecondAccepted),
    (79, ClientOp::ObjectCommand2),
    (90, ClientOp::ItemCommand),
    (91, ClientOp::ItemUseItem),
    (99, ClientOp::CastOnScenery),
    (102, ClientOp::Logout),
    (103, ClientOp::PlayerDuel),
    (104, ClientOp::PlayerAcceptedTrade),
    (111, ClientOp::GameSettingsChanged),
    (113, ClientOp::PlayerUseItem),
    (115, ClientOp::UseItemOnScenery),
    (116, ClientOp::QuestionDialogAnswer),
    (127, ClientOp::InteractWithBoundary2),
    (132, ClientOp::SocialAddIgnore),
    (135, ClientOp::NpcUseItem),
    (136, ClientOp::ObjectCommand),
    (137, ClientOp::CastOnSelf),
    (142, ClientOp::PlayerInitTradeRequest),
    (153, ClientOp::NpcTalkTo),
    (158, ClientOp::CastOnLand),
    (161, ClientOp::UseWithBoundary),
    (163, ClientOp::KnownPlayers),
    (165, ClientOp::PlayerFollow),
    (166, ClientOp::ShopClose),
    (167, ClientOp::SocialRemoveFriend),
    (169, ClientOp::ItemEquip),
    (170, ClientOp::ItemUnequip),
    (171, ClientOp::PlayerAttack),
    (176, ClientOp::DuelFirstAccepted),
    (180, ClientOp::CastOnBoundary),
    (187, ClientOp::WalkToPoint),
    (190, ClientOp::NpcAttack),
    (195, ClientOp::SocialAddFriend),
    (197, ClientOp::DuelDeclined),
    (202, ClientOp::NpcCommand),
    (206, ClientOp::ReportAbuse),
    (212, ClientOp::BankClose),
    (216, ClientOp::ChatMessage),
    (218, ClientOp::SocialSendPrivateMessage),
    (221, ClientOp::ShopSell),
    (229, ClientOp::PlayerCastPvp),
    (230, ClientOp::PlayerDeclinedTrade),
    (235, ClientOp::PlayerAppearanceChange),
    (236, ClientOp::ShopBuy),
    (241, ClientOp::SocialRemoveIgnore),
    (246, ClientOp::ItemDrop),
    (247, ClientOp::GroundItemTake),
    (249, ClientOp::CastOnGroundItem),
    (254, ClientOp::PrayerDeactivated),
];

pub(super) const OUTBOUND: &[(u8, ServerOp)] = &[
    (4, ServerOp::LogoutRequestConfirm),
    (5, ServerOp::Quests),
    (6, ServerOp::DuelOpponentsItems),
    (15, ServerOp::TradeAccepted),
    (20, ServerOp::TradeOpenConfirm),
    (25, ServerOp::WorldInfo),
    (30, ServerOp::DuelSettings),
    (33, ServerOp::Experience),
    (36, ServerOp::Bubble),
    (42, ServerOp::BankOpen),
    (48, ServerOp::SceneryHandler),
    (51, ServerOp::PrivacySettings),
    (52, ServerOp::SystemUpdate),
    (53, ServerOp::Inventory),
    (59, ServerOp::AppearanceScreen),
    (71, ServerOp::FriendList),
    (79, ServerOp::NpcCoords),
    (83, ServerOp::Death),
    (84, ServerOp::StopSleep),
    (89, ServerOp::Box2),
    (90, ServerOp::InventoryUpdateItem),
    (91, ServerOp::BoundaryHandler),
    (92, ServerOp::TradeWindow),
    (97, ServerOp::TradeOtherItems),
    (99, ServerOp::GroundItemHandler),
    (101, ServerOp::ShopOpen),
    (104, ServerOp::UpdateNpc),
    (109, ServerOp::IgnoreList),
    (114, ServerOp::Fatigue),
    (117, ServerOp::SleepScreen),
    (120, ServerOp::PrivateMessage),
    (123, ServerOp::InventoryRemoveItem),
    (128, ServerOp::TradeClose),
    (131, ServerOp::ServerMessage),
    (137, ServerOp::ShopClose),
    (149, ServerOp::FriendUpdate),
    (153, ServerOp::EquipmentStats),
    (156, ServerOp::Stats),
    (159, ServerOp::Stat),
    (162, ServerOp::TradeOtherAccepted),
    (172, ServerOp::DuelConfirmWindow),
    (176, ServerOp::DuelWindow),
    (182, ServerOp::WelcomeInfo),
    (183, ServerOp::CantLogout),
    (191, ServerOp::PlayerCoords),
    (194, ServerOp::SleepwordIncorrect),
    (203, ServerOp::BankClose),
    (204, ServerOp::PlaySound),
    (206, ServerOp::PrayersActive),
    (210, ServerOp::DuelAccepted),
    (211, ServerOp::RemoveWorldEntity),
    (222, ServerOp::Box),
    (225, ServerOp::DuelClose),
    (234, ServerOp::UpdatePlayers),
    (240, ServerOp::GameSettings),
    (244, ServerOp::SleepFatigue),
    (245, ServerOp::OptionsMenuOpen),
    (249, ServerOp::BankUpdate),
    (252, ServerOp::OptionsMenuClose),
    (253, ServerOp::DuelOtherAccepted),
];
