//! Opcode tables for client revision 196.

use payload::{ClientOp, ServerOp};

pub(super) const INBOUND: &[(u8, ClientOp)] = &[
    (0, ClientOp::Login),
    (1, ClientOp::Login),
    (7, ClientOp::SocialRemoveFriend),
    (8, ClientOp::GameSettingsChanged),
    (14, ClientOp::Heartbeat),
    (22, ClientOp::NpcUseItem),
    (26, ClientOp::GroundItemTake),
    (27, ClientOp::NpcTalkTo),
    (34, ClientOp::PlayerUseItem),
    (39, ClientOp::WalkToPoint),
    (40, ClientOp::PlayerDeclinedTrade),
    (42, ClientOp::SocialAddFriend),
    (44, ClientOp::CastOnLand),
    (47, ClientOp::UseWithBoundary),
    (49, ClientOp::ObjectCommand),
    (53, ClientOp::WalkToEntity),
    (60, ClientOp::ItemDrop),
    (61, ClientOp::ObjectCommand2),
    (63, ClientOp::DuelDeclined),
    (70, ClientOp::ItemCommand),
    (71, ClientOp::InteractWithBoundary),
    (72, ClientOp::PrayerActivated),
    (78, ClientOp::CastOnInventoryItem),
    (86, ClientOp::GroundItemUseItem),
    (91, ClientOp::ShopBuy),
    (93, ClientOp::ShopClose),
    (100, ClientOp::DuelFirstSettingsChanged),
    (103, ClientOp::SocialSendPrivateMessage),
    (104, ClientOp::ShopSell),
    (110, ClientOp::SleepwordEntered),
    (112, ClientOp::PlayerInitTradeRequest),
    (116, ClientOp::PlayerAcceptedTrade),
    (119, ClientOp::PlayerAddedItemsToTradeOffer),
    (121, ClientOp::SocialAddIgnore),
    (129, ClientOp::BankDeposit),
    (131, ClientOp::CombatStyleChanged),
    (141, ClientOp::PlayerAppearanceChange),
    (142, ClientOp::ChatMessage),
    (143, ClientOp::ItemUnequip),
    (144, ClientOp::InteractWithBoundary2),
    (145, ClientOp::PrivacySettingsChanged),
    (152, ClientOp::PlayerCastPvp),
    (156, ClientOp::DuelOfferItem),
    (159, ClientOp::DuelFirstAccepted),
    (160, ClientOp::Logout),
    (171, ClientOp::Command),
    (175, ClientOp::DuelSecondAccepted),
    (177, ClientOp::ConfirmLogout),
    (183, ClientOp::UseItemOnScenery),
    (185, ClientOp::CastOnNpc),
    (186, ClientOp::ItemEquip),
    (197, ClientOp::CastOnScenery),
    (200, ClientOp::NpcCommand),
    (201, ClientOp::NpcAttack),
    (202, ClientOp::SocialRemoveIgnore),
    (209, ClientOp::CastOnSelf),
    (212, ClientOp::PrayerDeactivated),
    (215, ClientOp::BankClose),
    (223, ClientOp::QuestionDialogAnswer),
    (224, ClientOp::PlayerAcceptedInitTradeRequest),
    (225, ClientOp::ItemUseItem),
    (227, ClientOp::CastOnGroundItem),
    (231, ClientOp::ReportAbuse),
    (232, ClientOp::PlayerAttack),
    (238, ClientOp::KnownPlayers),
    (239, ClientOp::BankWithdraw),
    (242, ClientOp::PlayerDuel),
    (243, ClientOp::CastOnBoundary),
    (244, ClientOp::PlayerFollow),
];

pub(super) const OUTBOUND: &[(u8, ServerOp)] = &[
    (6, ServerOp::BankOpen),
    (7, ServerOp::SystemUpdate),
    (21, ServerOp::TradeAccepted),
    (24, ServerOp::ShopOpen),
    (28, ServerOp::InventoryUpdateItem),
    (29, ServerOp::PrivateMessage),
    (30, ServerOp::FriendList),
    (32, ServerOp::SleepFatigue),
    (36, ServerOp::CantLogout),
    (37, ServerOp::Box2),
    (44, ServerOp::DuelConfirmWindow),
    (50, ServerOp::PrivacySettings),
    (51, ServerOp::GameSettings),
    (53, ServerOp::ServerMessage),
    (54, ServerOp::DuelOtherAccepted),
    (64, ServerOp::DuelClose),
    (73, ServerOp::Death),
    (74, ServerOp::RemoveWorldEntity),
    (75, ServerOp::BankClose),
    (79, ServerOp::WorldInfo),
    (80, ServerOp::OptionsMenuOpen),
    (82, ServerOp::Fatigue),
    (84, ServerOp::IgnoreList),
    (94, ServerOp::BoundaryHandler),
    (108, ServerOp::FriendUpdate),
    (114, ServerOp::WelcomeInfo),
    (115, ServerOp::ShopClose),
    (116, ServerOp::SleepwordIncorrect),
    (119, ServerOp::TradeWindow),
    (120, ServerOp::SceneryHandler),
    (122, ServerOp::InventoryRemoveItem),
    (123, ServerOp::PlaySound),
    (125, ServerOp::OptionsMenuClose),
    (128, ServerOp::Stat),
    (133, ServerOp::PrayersActive),
    (135, ServerOp::NpcCoords),
    (138, ServerOp::StopSleep),
    (142, ServerOp::Bubble),
    (152, ServerOp::Box),
    (155, ServerOp::SleepScreen),
    (158, ServerOp::Experience),
    (160, ServerOp::DuelOpponentsItems),
    (161, ServerOp::TradeClose),
    (175, ServerOp::BankUpdate),
    (180, ServerOp::GroundItemHandler),
    (183, ServerOp::LogoutRequestConfirm),
    (184, ServerOp::Stats),
    (185, ServerOp::TradeOpenConfirm),
    (196, ServerOp::PlayerCoords),
    (197, ServerOp::TradeOtherItems),
    (207, ServerOp::EquipmentStats),
    (209, ServerOp::DuelWindow),
    (215, ServerOp::UpdateNpc),
    (228, ServerOp::DuelSettings),
    (229, ServerOp::DuelAccepted),
    (232, ServerOp::Inventory),
    (240, ServerOp::UpdatePlayers),
    (253, ServerOp::Quests),
    (255, ServerOp::AppearanceScreen),
];
