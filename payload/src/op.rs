//! Logical operations: version-independent message identifiers.

use std::fmt;

use crate::client::ClientPayloadKind;
use crate::server::ServerPayloadKind;

macro_rules! logical_ops {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )*
        }

        impl $name {
            /// Every operation, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Stable upper-case name used in logs and tooling.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            /// Looks an operation up by its [`name`](Self::name).
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|op| op.name().eq_ignore_ascii_case(name))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

logical_ops! {
    /// Operations sent by the client.
    ClientOp {
        Heartbeat => "HEARTBEAT",
        WalkToEntity => "WALK_TO_ENTITY",
        WalkToPoint => "WALK_TO_POINT",
        ConfirmLogout => "CONFIRM_LOGOUT",
        Logout => "LOGOUT",
        Blink => "BLINK",
        CombatStyleChanged => "COMBAT_STYLE_CHANGED",
        QuestionDialogAnswer => "QUESTION_DIALOG_ANSWER",
        PlayerAppearanceChange => "PLAYER_APPEARANCE_CHANGE",
        SocialAddIgnore => "SOCIAL_ADD_IGNORE",
        SocialAddFriend => "SOCIAL_ADD_FRIEND",
        SocialSendPrivateMessage => "SOCIAL_SEND_PRIVATE_MESSAGE",
        SocialRemoveFriend => "SOCIAL_REMOVE_FRIEND",
        SocialRemoveIgnore => "SOCIAL_REMOVE_IGNORE",
        DuelFirstAccepted => "DUEL_FIRST_ACCEPTED",
        DuelOfferItem => "DUEL_OFFER_ITEM",
        DuelSecondAccepted => "DUEL_SECOND_ACCEPTED",
        DuelFirstSettingsChanged => "DUEL_FIRST_SETTINGS_CHANGED",
        DuelDeclined => "DUEL_DECLINED",
        InteractWithBoundary => "INTERACT_WITH_BOUNDARY",
        InteractWithBoundary2 => "INTERACT_WITH_BOUNDARY2",
        CastOnBoundary => "CAST_ON_BOUNDARY",
        UseWithBoundary => "USE_WITH_BOUNDARY",
        NpcTalkTo => "NPC_TALK_TO",
        NpcCommand => "NPC_COMMAND",
        NpcAttack => "NPC_ATTACK",
        CastOnNpc => "CAST_ON_NPC",
        NpcUseItem => "NPC_USE_ITEM",
        PlayerCastPvp => "PLAYER_CAST_PVP",
        PlayerUseItem => "PLAYER_USE_ITEM",
        PlayerAttack => "PLAYER_ATTACK",
        PlayerDuel => "PLAYER_DUEL",
        PlayerInitTradeRequest => "PLAYER_INIT_TRADE_REQUEST",
        PlayerFollow => "PLAYER_FOLLOW",
        CastOnGroundItem => "CAST_ON_GROUND_ITEM",
        GroundItemUseItem => "GROUND_ITEM_USE_ITEM",
        GroundItemTake => "GROUND_ITEM_TAKE",
        ItemUseItem => "ITEM_USE_ITEM",
        ItemUnequip => "ITEM_UNEQUIP_FROM_INVENTORY",
        ItemEquip => "ITEM_EQUIP_FROM_INVENTORY",
        ItemCommand => "ITEM_COMMAND",
        ItemDrop => "ITEM_DROP",
        CastOnSelf => "CAST_ON_SELF",
        CastOnLand => "CAST_ON_LAND",
        ObjectCommand => "OBJECT_COMMAND",
        ObjectCommand2 => "OBJECT_COMMAND2",
        CastOnScenery => "CAST_ON_SCENERY",
        UseItemOnScenery => "USE_ITEM_ON_SCENERY",
        CastOnInventoryItem => "CAST_ON_INVENTORY_ITEM",
        ShopClose => "SHOP_CLOSE",
        ShopBuy => "SHOP_BUY",
        ShopSell => "SHOP_SELL",
        PlayerAcceptedInitTradeRequest => "PLAYER_ACCEPTED_INIT_TRADE_REQUEST",
        PlayerDeclinedTrade => "PLAYER_DECLINED_TRADE",
        PlayerAddedItemsToTradeOffer => "PLAYER_ADDED_ITEMS_TO_TRADE_OFFER",
        PlayerAcceptedTrade => "PLAYER_ACCEPTED_TRADE",
        PrayerActivated => "PRAYER_ACTIVATED",
        PrayerDeactivated => "PRAYER_DEACTIVATED",
        GameSettingsChanged => "GAME_SETTINGS_CHANGED",
        ChatMessage => "CHAT_MESSAGE",
        Command => "COMMAND",
        PrivacySettingsChanged => "PRIVACY_SETTINGS_CHANGED",
        ReportAbuse => "REPORT_ABUSE",
        BankClose => "BANK_CLOSE",
        BankWithdraw => "BANK_WITHDRAW",
        BankDeposit => "BANK_DEPOSIT",
        SleepwordEntered => "SLEEPWORD_ENTERED",
        KnownPlayers => "KNOWN_PLAYERS",
        ChangePassword => "CHANGE_PASS",
        SetRecovery => "SET_RECOVERY",
        Login => "LOGIN",
        RegisterAccount => "REGISTER_ACCOUNT",
        ForgotPassword => "FORGOT_PASSWORD",
        RecoveryAttempt => "RECOVERY_ATTEMPT",
        SendDebugInfo => "SEND_DEBUG_INFO",
    }
}

logical_ops! {
    /// Operations sent by the server.
    ServerOp {
        LogoutRequestConfirm => "SEND_LOGOUT_REQUEST_CONFIRM",
        CantLogout => "SEND_CANT_LOGOUT",
        AppearanceScreen => "SEND_APPEARANCE_SCREEN",
        Death => "SEND_DEATH",
        SleepwordIncorrect => "SEND_SLEEPWORD_INCORRECT",
        StopSleep => "SEND_STOPSLEEP",
        TradeClose => "SEND_TRADE_CLOSE",
        DuelClose => "SEND_DUEL_CLOSE",
        BankClose => "SEND_BANK_CLOSE",
        ShopClose => "SEND_SHOP_CLOSE",
        OptionsMenuClose => "SEND_OPTIONS_MENU_CLOSE",
        Box => "SEND_BOX",
        Box2 => "SEND_BOX2",
        ServerMessage => "SEND_SERVER_MESSAGE",
        OptionsMenuOpen => "SEND_OPTIONS_MENU_OPEN",
        SystemUpdate => "SEND_SYSTEM_UPDATE",
        Stats => "SEND_STATS",
        Stat => "SEND_STAT",
        Experience => "SEND_EXPERIENCE",
        EquipmentStats => "SEND_EQUIPMENT_STATS",
        Quests => "SEND_QUESTS",
        PrayersActive => "SEND_PRAYERS_ACTIVE",
        Fatigue => "SEND_FATIGUE",
        SleepFatigue => "SEND_SLEEP_FATIGUE",
        PlaySound => "SEND_PLAY_SOUND",
        Bubble => "SEND_BUBBLE",
        GameSettings => "SEND_GAME_SETTINGS",
        PrivacySettings => "SEND_PRIVACY_SETTINGS",
        TradeWindow => "SEND_TRADE_WINDOW",
        TradeAccepted => "SEND_TRADE_ACCEPTED",
        TradeOtherAccepted => "SEND_TRADE_OTHER_ACCEPTED",
        TradeOpenConfirm => "SEND_TRADE_OPEN_CONFIRM",
        TradeOtherItems => "SEND_TRADE_OTHER_ITEMS",
        DuelWindow => "SEND_DUEL_WINDOW",
        DuelAccepted => "SEND_DUEL_ACCEPTED",
        DuelOtherAccepted => "SEND_DUEL_OTHER_ACCEPTED",
        DuelSettings => "SEND_DUEL_SETTINGS",
        DuelOpponentsItems => "SEND_DUEL_OPPONENTS_ITEMS",
        DuelConfirmWindow => "SEND_DUEL_CONFIRMWINDOW",
        SleepScreen => "SEND_SLEEPSCREEN",
        FriendList => "SEND_FRIEND_LIST",
        FriendUpdate => "SEND_FRIEND_UPDATE",
        IgnoreList => "SEND_IGNORE_LIST",
        Inventory => "SEND_INVENTORY",
        InventoryRemoveItem => "SEND_INVENTORY_REMOVE_ITEM",
        InventoryUpdateItem => "SEND_INVENTORY_UPDATEITEM",
        BankOpen => "SEND_BANK_OPEN",
        BankUpdate => "SEND_BANK_UPDATE",
        ShopOpen => "SEND_SHOP_OPEN",
        PrivateMessage => "SEND_PRIVATE_MESSAGE",
        WelcomeInfo => "SEND_WELCOME_INFO",
        WorldInfo => "SEND_WORLD_INFO",
        NpcCoords => "SEND_NPC_COORDS",
        PlayerCoords => "SEND_PLAYER_COORDS",
        UpdateNpc => "SEND_UPDATE_NPC",
        UpdatePlayers => "SEND_UPDATE_PLAYERS",
        SceneryHandler => "SEND_SCENERY_HANDLER",
        BoundaryHandler => "SEND_BOUNDARY_HANDLER",
        GroundItemHandler => "SEND_GROUND_ITEM_HANDLER",
        RemoveWorldEntity => "SEND_REMOVE_WORLD_ENTITY",
    }
}

impl ClientOp {
    /// The struct shape this operation carries, or `None` for operations
    /// handled by the login pipeline before the translation layer.
    #[must_use]
    pub const fn kind(self) -> Option<ClientPayloadKind> {
        use ClientPayloadKind as K;
        let kind = match self {
            Self::Heartbeat
            | Self::ConfirmLogout
            | Self::Logout
            | Self::DuelFirstAccepted
            | Self::DuelSecondAccepted
            | Self::DuelDeclined
            | Self::ShopClose
            | Self::PlayerAcceptedInitTradeRequest
            | Self::PlayerDeclinedTrade
            | Self::PlayerAcceptedTrade
            | Self::BankClose => K::Empty,
            Self::WalkToEntity | Self::WalkToPoint => K::Walk,
            Self::Blink | Self::ObjectCommand | Self::ObjectCommand2 => K::Tile,
            Self::CombatStyleChanged => K::CombatStyle,
            Self::QuestionDialogAnswer => K::DialogAnswer,
            Self::PlayerAppearanceChange => K::Appearance,
            Self::SocialAddIgnore
            | Self::SocialAddFriend
            | Self::SocialRemoveFriend
            | Self::SocialRemoveIgnore => K::PlayerName,
            Self::SocialSendPrivateMessage => K::PrivateMessage,
            Self::DuelOfferItem | Self::PlayerAddedItemsToTradeOffer => K::ItemOffer,
            Self::DuelFirstSettingsChanged => K::DuelRules,
            Self::InteractWithBoundary | Self::InteractWithBoundary2 => K::Boundary,
            Self::CastOnBoundary
            | Self::CastOnNpc
            | Self::PlayerCastPvp
            | Self::CastOnGroundItem
            | Self::CastOnSelf
            | Self::CastOnLand
            | Self::CastOnScenery
            | Self::CastOnInventoryItem => K::SpellCast,
            Self::UseWithBoundary => K::ItemOnBoundary,
            Self::NpcTalkTo
            | Self::NpcCommand
            | Self::NpcAttack
            | Self::PlayerAttack
            | Self::PlayerDuel
            | Self::PlayerInitTradeRequest
            | Self::PlayerFollow => K::MobTarget,
            Self::NpcUseItem | Self::PlayerUseItem => K::ItemOnMob,
            Self::GroundItemUseItem => K::ItemOnGroundItem,
            Self::GroundItemTake => K::GroundItemTake,
            Self::ItemUseItem => K::ItemOnItem,
            Self::ItemUnequip | Self::ItemEquip | Self::ItemCommand | Self::ItemDrop => K::ItemIndex,
            Self::UseItemOnScenery => K::ItemOnScenery,
            Self::ShopBuy | Self::ShopSell => K::ShopTrade,
            Self::PrayerActivated | Self::PrayerDeactivated => K::Prayer,
            Self::GameSettingsChanged => K::GameSetting,
            Self::ChatMessage => K::Chat,
            Self::Command => K::Command,
            Self::PrivacySettingsChanged => K::Privacy,
            Self::ReportAbuse => K::ReportAbuse,
            Self::BankWithdraw | Self::BankDeposit => K::BankTransfer,
            Self::SleepwordEntered => K::Sleepword,
            Self::KnownPlayers => K::KnownPlayers,
            Self::ChangePassword => K::ChangePassword,
            Self::SetRecovery => K::SetRecovery,
            Self::Login
            | Self::RegisterAccount
            | Self::ForgotPassword
            | Self::RecoveryAttempt
            | Self::SendDebugInfo => return None,
        };
        Some(kind)
    }

    /// Returns `true` for operations owned by the login pipeline.
    #[must_use]
    pub const fn is_session_layer(self) -> bool {
        self.kind().is_none()
    }
}

impl ServerOp {
    /// The struct shape this operation carries.
    #[must_use]
    pub const fn kind(self) -> ServerPayloadKind {
        use ServerPayloadKind as K;
        match self {
            Self::LogoutRequestConfirm
            | Self::CantLogout
            | Self::AppearanceScreen
            | Self::Death
            | Self::SleepwordIncorrect
            | Self::StopSleep
            | Self::TradeClose
            | Self::DuelClose
            | Self::BankClose
            | Self::ShopClose
            | Self::OptionsMenuClose => K::Empty,
            Self::Box | Self::Box2 | Self::ServerMessage => K::Text,
            Self::OptionsMenuOpen => K::OptionsMenu,
            Self::SystemUpdate => K::SystemUpdate,
            Self::Stats => K::Stats,
            Self::Stat => K::Stat,
            Self::Experience => K::Experience,
            Self::EquipmentStats => K::EquipmentStats,
            Self::Quests => K::Quests,
            Self::PrayersActive => K::Prayers,
            Self::Fatigue | Self::SleepFatigue => K::Fatigue,
            Self::PlaySound => K::Sound,
            Self::Bubble => K::Bubble,
            Self::GameSettings => K::GameSettings,
            Self::PrivacySettings => K::Privacy,
            Self::TradeWindow | Self::DuelWindow => K::Window,
            Self::TradeAccepted
            | Self::TradeOtherAccepted
            | Self::DuelAccepted
            | Self::DuelOtherAccepted => K::Accepted,
            Self::TradeOpenConfirm => K::TradeConfirm,
            Self::TradeOtherItems | Self::DuelOpponentsItems => K::ItemList,
            Self::DuelSettings => K::DuelRules,
            Self::DuelConfirmWindow => K::DuelConfirm,
            Self::SleepScreen => K::SleepScreen,
            Self::FriendList => K::FriendList,
            Self::FriendUpdate => K::Friend,
            Self::IgnoreList => K::IgnoreList,
            Self::Inventory => K::Inventory,
            Self::InventoryRemoveItem => K::InventorySlot,
            Self::InventoryUpdateItem => K::InventorySlotUpdate,
            Self::BankOpen => K::Bank,
            Self::BankUpdate => K::BankSlotUpdate,
            Self::ShopOpen => K::Shop,
            Self::PrivateMessage => K::PrivateMessage,
            Self::WelcomeInfo => K::Welcome,
            Self::WorldInfo => K::WorldInfo,
            Self::NpcCoords => K::NpcPositions,
            Self::PlayerCoords => K::PlayerPositions,
            Self::UpdateNpc | Self::UpdatePlayers => K::Appearance,
            Self::SceneryHandler => K::Scenery,
            Self::BoundaryHandler => K::Boundaries,
            Self::GroundItemHandler => K::GroundItems,
            Self::RemoveWorldEntity => K::ClearLocations,
        }
    }
}
