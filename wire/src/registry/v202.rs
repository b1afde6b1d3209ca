//! Opcode tables for client revision 202.

use payload::{ClientOp, ServerOp};

pub(super) const INBOUND: &[(u8, ClientOp)] = &[
    (0, ClientOp::Login),
    (1, ClientOp::Login),
    (7, ClientOp::ReportAbuse),
    (16, ClientOp::PlayerUseItem),
    (17, ClientOp::CastOnScenery),
    (25, ClientOp::SocialAddIgnore),
    (27, ClientOp::ItemUseItem),
    (34, ClientOp::GroundItemUseItem),
    (35, ClientOp::DuelDeclined),
    (36, ClientOp::UseWithBoundary),
    (39, ClientOp::ConfirmLogout),
    (40, ClientOp::ObjectCommand2),
    (41, ClientOp::CombatStyleChanged),
    (48, ClientOp::BankClose),
    (49, ClientOp::CastOnInventoryItem),
    (51, ClientOp::ObjectCommand),
    (52, ClientOp::SocialRemoveFriend),
    (53, ClientOp::PlayerAcceptedTrade),
    (55, ClientOp::PlayerCastPvp),
    (56, ClientOp::PrayerActivated),
    (57, ClientOp::PlayerAttack),
    (67, ClientOp::CastOnBoundary),
    (68, ClientOp::PlayerFollow),
    (70, ClientOp::PlayerAddedItemsToTradeOffer),
    (71, ClientOp::CastOnNpc),
    (72, ClientOp::SleepwordEntered),
    (73, ClientOp::NpcAttack),
    (74, ClientOp::NpcCommand),
    (83, ClientOp::KnownPlayers),
    (87, ClientOp::DuelSecondAccepted),
    (89, ClientOp::ItemCommand),
    (90, ClientOp::Command),
    (92, ClientOp::ItemUnequip),
    (94, ClientOp::UseItemOnScenery),
    (104, ClientOp::CastOnGroundItem),
    (108, ClientOp::SocialRemoveIgnore),
    (123, ClientOp::DuelOfferItem),
    (126, ClientOp::InteractWithBoundary),
    (128, ClientOp::ShopBuy),
    (129, ClientOp::Logout),
    (132, ClientOp::WalkToPoint),
    (142, ClientOp::NpcUseItem),
    (145, ClientOp::ChatMessage),
    (147, ClientOp::ItemDrop),
    (153, ClientOp::Heartbeat),
    (154, ClientOp::QuestionDialogAnswer),
    (157, ClientOp::GameSettingsChanged),
    (166, ClientOp::PlayerInitTradeRequest),
    (168, ClientOp::SocialAddFriend),
    (176, ClientOp::PrivacySettingsChanged),
    (177, ClientOp::NpcTalkTo),
    (181, ClientOp::ItemEquip),
    (183, ClientOp::BankWithdraw),
    (198, ClientOp::BankDeposit),
    (206, ClientOp::CastOnSelf),
    (211, ClientOp::PlayerAcceptedInitTradeRequest),
    (216, ClientOp::PlayerDeclinedTrade),
    (218, ClientOp::PlayerAppearanceChange),
    (222, ClientOp::PlayerDuel),
    (225, ClientOp::DuelFirstSettingsChanged),
    (232, ClientOp::CastOnLand),
    (235, ClientOp::InteractWithBoundary2),
    (245, ClientOp::GroundItemTake),
    (246, ClientOp::WalkToEntity),
    (248, ClientOp::PrayerDeactivated),
    (252, ClientOp::DuelFirstAccepted),
    (253, ClientOp::ShopClose),
    (254, ClientOp::SocialSendPrivateMessage),
    (255, ClientOp::ShopSell),
];

pub(super) const OUTBOUND: &[(u8, ServerOp)] = &[
    (2, ServerOp::IgnoreList),
    (4, ServerOp::TradeWindow),
    (11, ServerOp::PlaySound),
    (15, ServerOp::SleepwordIncorrect),
    (18, ServerOp::TradeAccepted),
    (23, ServerOp::Bubble),
    (25, ServerOp::FriendUpdate),
    (27, ServerOp::SceneryHandler),
    (48, ServerOp::ServerMessage),
    (53, ServerOp::UpdatePlayers),
    (63, ServerOp::DuelOpponentsItems),
    (64, ServerOp::Box),
    (65, ServerOp::DuelOtherAccepted),
    (72, ServerOp::SystemUpdate),
    (77, ServerOp::NpcCoords),
    (92, ServerOp::TradeOtherAccepted),
    (93, ServerOp::BankOpen),
    (95, ServerOp::BoundaryHandler),
    (103, ServerOp::StopSleep),
    (109, ServerOp::GroundItemHandler),
    (114, ServerOp::Inventory),
    (115, ServerOp::RemoveWorldEntity),
    (126, ServerOp::Fatigue),
    (127, ServerOp::OptionsMenuClose),
    (131, ServerOp::WorldInfo),
    (136, ServerOp::CantLogout),
    (139, ServerOp::BankUpdate),
    (145, ServerOp::PlayerCoords),
    (147, ServerOp::DuelConfirmWindow),
    (148, ServerOp::Box2),
    (152, ServerOp::GameSettings),
    (158, ServerOp::PrivacySettings),
    (160, ServerOp::DuelClose),
    (165, ServerOp::Death),
    (168, ServerOp::SleepFatigue),
    (170, ServerOp::PrivateMessage),
    (171, ServerOp::BankClose),
    (177, ServerOp::EquipmentStats),
    (180, ServerOp::Stats),
    (187, ServerOp::TradeClose),
    (190, ServerOp::UpdateNpc),
    (191, ServerOp::InventoryRemoveItem),
    (197, ServerOp::DuelAccepted),
    (198, ServerOp::DuelSettings),
    (207, ServerOp::AppearanceScreen),
    (208, ServerOp::Stat),
    (209, ServerOp::PrayersActive),
    (211, ServerOp::Experience),
    (219, ServerOp::SleepScreen),
    (220, ServerOp::ShopClose),
    (222, ServerOp::LogoutRequestConfirm),
    (223, ServerOp::OptionsMenuOpen),
    (224, ServerOp::Quests),
    (228, ServerOp::InventoryUpdateItem),
    (229, ServerOp::DuelWindow),
    (248, ServerOp::WelcomeInfo),
    (249, ServerOp::FriendList),
    (250, ServerOp::TradeOtherItems),
    (251, ServerOp::TradeOpenConfirm),
    (253, ServerOp::ShopOpen),
];
