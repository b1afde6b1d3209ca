//! Opcode tables for client revision 201.

use payload::{ClientOp, ServerOp};

pub(super) const INBOUND: &[(u8, ClientOp)] = &[
    (0, ClientOp::Login),
    (1, ClientOp::Login),
    (3, ClientOp::Logout),
    (10, ClientOp::CastOnNpc),
    (11, ClientOp::PlayerUseItem),
    (18, ClientOp::CastOnGroundItem),
    (24, ClientOp::ItemCommand),
    (27, ClientOp::PlayerDeclinedTrade),
    (32, ClientOp::Command),
    (38, ClientOp::ObjectCommand),
    (40, ClientOp::ItemUnequip),
    (43, ClientOp::DuelDeclined),
    (44, ClientOp::CastOnSelf),
    (52, ClientOp::SocialRemoveFriend),
    (56, ClientOp::PlayerCastPvp),
    (59, ClientOp::SocialSendPrivateMessage),
    (62, ClientOp::PlayerInitTradeRequest),
    (67, ClientOp::ShopBuy),
    (71, ClientOp::UseWithBoundary),
    (74, ClientOp::CombatStyleChanged),
    (76, ClientOp::CastOnBoundary),
    (78, ClientOp::BankClose),
    (89, ClientOp::NpcCommand),
    (91, ClientOp::PlayerFollow),
    (92, ClientOp::ShopClose),
    (94, ClientOp::PlayerAcceptedInitTradeRequest),
    (100, ClientOp::InteractWithBoundary),
    (102, ClientOp::PlayerAcceptedTrade),
    (104, ClientOp::ConfirmLogout),
    (118, ClientOp::NpcAttack),
    (121, ClientOp::InteractWithBoundary2),
    (123, ClientOp::ItemDrop),
    (124, ClientOp::PlayerAttack),
    (125, ClientOp::DuelFirstAccepted),
    (127, ClientOp::UseItemOnScenery),
    (131, ClientOp::BankWithdraw),
    (138, ClientOp::DuelFirstSettingsChanged),
    (142, ClientOp::SleepwordEntered),
    (143, ClientOp::NpcUseItem),
    (144, ClientOp::PlayerAddedItemsToTradeOffer),
    (159, ClientOp::NpcTalkTo),
    (162, ClientOp::PrayerDeactivated),
    (165, ClientOp::GameSettingsChanged),
    (166, ClientOp::CastOnInventoryItem),
    (172, ClientOp::ObjectCommand2),
    (175, ClientOp::DuelSecondAccepted),
    (177, ClientOp::ShopSell),
    (186, ClientOp::Heartbeat),
    (189, ClientOp::QuestionDialogAnswer),
    (190, ClientOp::BankDeposit),
    (199, ClientOp::ItemEquip),
    (201, ClientOp::CastOnLand),
    (202, ClientOp::PrayerActivated),
    (211, ClientOp::WalkToPoint),
    (215, ClientOp::ReportAbuse),
    (217, ClientOp::PlayerDuel),
    (226, ClientOp::WalkToEntity),
    (229, ClientOp::DuelOfferItem),
    (232, ClientOp::SocialAddFriend),
    (235, ClientOp::ItemUseItem),
    (237, ClientOp::CastOnScenery),
    (238, ClientOp::PlayerAppearanceChange),
    (241, ClientOp::KnownPlayers),
    (244, ClientOp::SocialRemoveIgnore),
    (247, ClientOp::PrivacySettingsChanged),
    (249, ClientOp::ChatMessage),
    (253, ClientOp::GroundItemTake),
    (254, ClientOp::SocialAddIgnore),
    (255, ClientOp::GroundItemUseItem),
];

pub(super) const OUTBOUND: &[(u8, ServerOp)] = &[
    (7, ServerOp::AppearanceScreen),
    (10, ServerOp::DuelConfirmWindow),
    (15, ServerOp::SleepScreen),
    (16, ServerOp::Stats),
    (20, ServerOp::SleepwordIncorrect),
    (23, ServerOp::Stat),
    (24, ServerOp::ShopOpen),
    (26, ServerOp::Quests),
    (28, ServerOp::SystemUpdate),
    (29, ServerOp::BoundaryHandler),
    (33, ServerOp::EquipmentStats),
    (37, ServerOp::Inventory),
    (41, ServerOp::NpcCoords),
    (42, ServerOp::ShopClose),
    (44, ServerOp::InventoryRemoveItem),
    (47, ServerOp::UpdateNpc),
    (49, ServerOp::Box),
    (54, ServerOp::FriendList),
    (60, ServerOp::Fatigue),
    (67, ServerOp::CantLogout),
    (69, ServerOp::Experience),
    (73, ServerOp::DuelOtherAccepted),
    (76, ServerOp::RemoveWorldEntity),
    (81, ServerOp::BankUpdate),
    (108, ServerOp::TradeWindow),
    (109, ServerOp::Death),
    (112, ServerOp::Box2),
    (113, ServerOp::TradeClose),
    (117, ServerOp::OptionsMenuOpen),
    (125, ServerOp::LogoutRequestConfirm),
    (126, ServerOp::WelcomeInfo),
    (128, ServerOp::TradeOpenConfirm),
    (130, ServerOp::BankClose),
    (131, ServerOp::DuelAccepted),
    (137, ServerOp::PrivacySettings),
    (141, ServerOp::PlayerCoords),
    (154, ServerOp::IgnoreList),
    (155, ServerOp::TradeOtherItems),
    (158, ServerOp::SceneryHandler),
    (161, ServerOp::GameSettings),
    (168, ServerOp::ServerMessage),
    (170, ServerOp::TradeAccepted),
    (172, ServerOp::GroundItemHandler),
    (174, ServerOp::SleepFatigue),
    (183, ServerOp::UpdatePlayers),
    (185, ServerOp::TradeOtherAccepted),
    (188, ServerOp::BankOpen),
    (198, ServerOp::DuelClose),
    (206, ServerOp::StopSleep),
    (208, ServerOp::OptionsMenuClose),
    (210, ServerOp::InventoryUpdateItem),
    (211, ServerOp::DuelSettings),
    (222, ServerOp::PrayersActive),
    (229, ServerOp::DuelOpponentsItems),
    (230, ServerOp::PrivateMessage),
    (238, ServerOp::PlaySound),
    (240, ServerOp::DuelWindow),
    (248, ServerOp::FriendUpdate),
    (249, ServerOp::WorldInfo),
    (253, ServerOp::Bubble),
];
