//! Opcode tables for client revision 199.

use payload::{ClientOp, ServerOp};

pub(super) const INBOUND: &[(u8, ClientOp)] = &[
    (0, ClientOp::Login),
    (1, ClientOp::ShopClose),
    (6, ClientOp::Command),
    (7, ClientOp::WalkToEntity),
    (10, ClientOp::ReportAbuse),
    (13, ClientOp::PrayerActivated),
    (18, ClientOp::SleepwordEntered),
    (22, ClientOp::PrivacySettingsChanged),
    (24, ClientOp::PlayerAddedItemsToTradeOffer),
    (29, ClientOp::ConfirmLogout),
    (31, ClientOp::NpcUseItem),
    (33, ClientOp::CastOnSelf),
    (37, ClientOp::KnownPlayers),
    (39, ClientOp::PlayerInitTradeRequest),
    (43, ClientOp::GroundItemTake),
    (44, ClientOp::CastOnNpc),
    (45, ClientOp::ItemDrop),
    (50, ClientOp::InteractWithBoundary2),
    (60, ClientOp::ItemUseItem),
    (64, ClientOp::BankClose),
    (65, ClientOp::PlayerAppearanceChange),
    (67, ClientOp::ObjectCommand2),
    (68, ClientOp::QuestionDialogAnswer),
    (76, ClientOp::ShopBuy),
    (79, ClientOp::CastOnGroundItem),
    (83, ClientOp::NpcCommand),
    (91, ClientOp::GameSettingsChanged),
    (92, ClientOp::DuelDeclined),
    (100, ClientOp::CastOnScenery),
    (105, ClientOp::ItemEquip),
    (122, ClientOp::PrayerDeactivated),
    (125, ClientOp::DuelSecondAccepted),
    (128, ClientOp::DuelFirstSettingsChanged),
    (133, ClientOp::SocialAddFriend),
    (134, ClientOp::PlayerAttack),
    (135, ClientOp::ItemUnequip),
    (136, ClientOp::SocialRemoveIgnore),
    (137, ClientOp::ItemCommand),
    (139, ClientOp::ShopSell),
    (142, ClientOp::NpcAttack),
    (145, ClientOp::PlayerAcceptedTrade),
    (148, ClientOp::CombatStyleChanged),
    (150, ClientOp::UseItemOnScenery),
    (151, ClientOp::InteractWithBoundary),
    (152, ClientOp::BankWithdraw),
    (153, ClientOp::DuelOfferItem),
    (157, ClientOp::UseWithBoundary),
    (163, ClientOp::CastOnLand),
    (170, ClientOp::PlayerDuel),
    (171, ClientOp::ObjectCommand),
    (177, ClientOp::PlayerAcceptedInitTradeRequest),
    (179, ClientOp::BankDeposit),
    (185, ClientOp::CastOnBoundary),
    (192, ClientOp::CastOnInventoryItem),
    (198, ClientOp::SocialSendPrivateMessage),
    (199, ClientOp::GroundItemUseItem),
    (204, ClientOp::ChatMessage),
    (207, ClientOp::NpcTalkTo),
    (208, ClientOp::DuelFirstAccepted),
    (214, ClientOp::PlayerFollow),
    (216, ClientOp::PlayerDeclinedTrade),
    (227, ClientOp::WalkToPoint),
    (232, ClientOp::SocialAddIgnore),
    (234, ClientOp::PlayerUseItem),
    (235, ClientOp::Logout),
    (243, ClientOp::PlayerCastPvp),
    (247, ClientOp::SocialRemoveFriend),
    (251, ClientOp::Heartbeat),
];

pub(super) const OUTBOUND: &[(u8, ServerOp)] = &[
    (3, ServerOp::ServerMessage),
    (6, ServerOp::PlaySound),
    (18, ServerOp::FriendUpdate),
    (31, ServerOp::RemoveWorldEntity),
    (32, ServerOp::Stats),
    (33, ServerOp::DuelOpponentsItems),
    (37, ServerOp::TradeOpenConfirm),
    (42, ServerOp::DuelClose),
    (43, ServerOp::WelcomeInfo),
    (45, ServerOp::FriendList),
    (47, ServerOp::BankOpen),
    (53, ServerOp::IgnoreList),
    (60, ServerOp::TradeOtherAccepted),
    (63, ServerOp::StopSleep),
    (65, ServerOp::UpdatePlayers),
    (71, ServerOp::SceneryHandler),
    (72, ServerOp::PrivacySettings),
    (79, ServerOp::SleepwordIncorrect),
    (80, ServerOp::DuelConfirmWindow),
    (91, ServerOp::OptionsMenuClose),
    (92, ServerOp::Bubble),
    (96, ServerOp::BoundaryHandler),
    (101, ServerOp::GameSettings),
    (102, ServerOp::CantLogout),
    (113, ServerOp::ShopOpen),
    (116, ServerOp::PlayerCoords),
    (122, ServerOp::DuelSettings),
    (123, ServerOp::AppearanceScreen),
    (127, ServerOp::Box2),
    (133, ServerOp::WorldInfo),
    (135, ServerOp::ShopClose),
    (139, ServerOp::BankUpdate),
    (140, ServerOp::DuelAccepted),
    (144, ServerOp::Death),
    (145, ServerOp::EquipmentStats),
    (148, ServerOp::TradeAccepted),
    (153, ServerOp::OptionsMenuOpen),
    (156, ServerOp::InventoryUpdateItem),
    (162, ServerOp::SleepFatigue),
    (170, ServerOp::Quests),
    (177, ServerOp::Box),
    (178, ServerOp::Inventory),
    (183, ServerOp::NpcCoords),
    (185, ServerOp::DuelWindow),
    (186, ServerOp::TradeWindow),
    (201, ServerOp::Fatigue),
    (202, ServerOp::DuelOtherAccepted),
    (204, ServerOp::PrayersActive),
    (206, ServerOp::UpdateNpc),
    (207, ServerOp::TradeClose),
    (208, ServerOp::LogoutRequestConfirm),
    (212, ServerOp::InventoryRemoveItem),
    (219, ServerOp::GroundItemHandler),
    (224, ServerOp::SleepScreen),
    (231, ServerOp::TradeOtherItems),
    (244, ServerOp::Stat),
    (246, ServerOp::SystemUpdate),
    (249, ServerOp::PrivateMessage),
    (254, ServerOp::BankClose),
    (255, ServerOp::Experience),
];
