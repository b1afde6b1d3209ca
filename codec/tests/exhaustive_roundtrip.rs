//! Every operation survives a trip through its own dialect, in every version
//! that has an opcode for it.
//!
//! Values sit on the grid of the lossy layouts: fatigue in whole wire units,
//! update timers on whole ticks, shop deltas within a signed byte and text
//! under the message-box limit.

use codec::{ConnectionContext, StackableItems, Translator, XorCipher};
use payload::{
    AbuseReport, AcceptState, ActionBubble, AddedNpc, AddedPlayer, AppearanceChange,
    AppearanceEntry, AppearanceUpdate, BankContents, BankSlotUpdate, BankTransfer,
    BoundaryPlacement, BoundaryTarget, BoundaryUpdate, CastTarget, ChatText, ClearLocations,
    ClientMessage, ClientOp, ClientPayload, ClientPayloadKind, CombatStyle, CommandText,
    DialogAnswer, DuelConfirm, DuelRules, EquipmentStats, ExperienceUpdate, FatigueLevel,
    FriendList, FriendStatus, GameSettingChange, GameSettings, GroundItemChange, GroundItemTake,
    GroundItemUpdate, IgnoreList, InventoryContents, InventoryItem, InventorySlot,
    InventorySlotUpdate, ItemIndex, ItemList, ItemOffer, ItemOnBoundary, ItemOnGroundItem,
    ItemOnItem, ItemOnMob, ItemOnScenery, ItemStack, KnownMobUpdate, KnownPlayer, KnownPlayers,
    MobTarget, NoPayload, NpcPositions, OptionsMenu, PasswordChange, PlayerName, PlayerPositions,
    PrayerStates, PrayerToggle, PrivacySettings, PrivateMessageReceived, PrivateMessageSend,
    QuestStages, RecoveryAge, RecoveryEntry, RecoverySetup, SceneryPlacement, SceneryUpdate,
    ServerMessage, ServerOp, ServerPayload, ServerPayloadKind, ShopContents, ShopItem, ShopTrade,
    SleepImage, SleepwordGuess, SoundEffect, SpellCast, StatUpdate, StatsSnapshot, SystemUpdate,
    TextMessage, TilePoint, TradeConfirm, WalkRequest, WelcomeInfo, WindowOpen, WorldInfo,
    QUEST_COUNT,
};
use proptest::prelude::*;
use wire::ProtocolVersion;

const STACKABLE: u16 = 10;

fn any_version() -> impl Strategy<Value = ProtocolVersion> {
    prop::sample::select(ProtocolVersion::ALL.to_vec())
}

fn translator() -> Translator {
    Translator::builder()
        .with_cipher(XorCipher::new(b"roundtrip-key"))
        .with_catalog([STACKABLE].into_iter().collect::<StackableItems>())
        .build()
}

fn tile(n: u16) -> TilePoint {
    TilePoint::new(n, n.wrapping_add(1))
}

fn cast_target(op: ClientOp, n: u16) -> CastTarget {
    match op {
        ClientOp::CastOnNpc => CastTarget::Npc(n),
        ClientOp::PlayerCastPvp => CastTarget::Player(n),
        ClientOp::CastOnInventoryItem => CastTarget::InventoryItem(n),
        ClientOp::CastOnLand => CastTarget::Land(tile(n)),
        ClientOp::CastOnScenery => CastTarget::Scenery(tile(n)),
        ClientOp::CastOnBoundary => CastTarget::Boundary {
            tile: tile(n),
            direction: 3,
        },
        ClientOp::CastOnGroundItem => CastTarget::GroundItem {
            tile: tile(n),
            item: n,
        },
        _ => CastTarget::Caster,
    }
}

/// A payload for `op` that `version` carries without loss, or `None` where
/// the version has no client encoder: the login pipeline's operations and
/// dictionary-coded 115 chat.
fn client_sample(op: ClientOp, version: ProtocolVersion, n: u16) -> Option<ClientPayload> {
    use ClientPayloadKind as K;

    let legacy = version == ProtocolVersion::V115;
    let payload: ClientPayload = match op.kind()? {
        K::Chat | K::PrivateMessage if legacy => return None,
        K::Empty => NoPayload.into(),
        K::Walk => WalkRequest {
            destination: tile(n),
            steps: vec![(1, -1), (0, 2), (-8, 7)],
        }
        .into(),
        K::Tile => tile(n).into(),
        K::CombatStyle => CombatStyle { style: 2 }.into(),
        K::DialogAnswer => DialogAnswer { option: 1 }.into(),
        K::Appearance => AppearanceChange {
            head_restrictions: 1,
            head_type: 2,
            body_type: 2,
            must_equal_2: 2,
            hair_colour: 5,
            top_colour: 8,
            trouser_colour: 14,
            skin_colour: 0,
            // Only the oldest client sends the class byte.
            class_index: legacy.then_some(3),
        }
        .into(),
        K::PlayerName => PlayerName {
            name: "Zezima".into(),
        }
        .into(),
        K::PrivateMessage => PrivateMessageSend {
            recipient: "Zezima".into(),
            message: "hello there".into(),
        }
        .into(),
        K::ItemOffer => ItemOffer {
            items: vec![ItemStack::new(n, 5_000), ItemStack::new(STACKABLE, 1)],
        }
        .into(),
        K::DuelRules => DuelRules {
            no_retreat: true,
            no_magic: false,
            no_prayer: true,
            no_weapons: false,
        }
        .into(),
        K::Boundary => BoundaryTarget {
            tile: tile(n),
            direction: 2,
        }
        .into(),
        K::SpellCast => SpellCast {
            spell: n,
            target: cast_target(op, n),
        }
        .into(),
        K::ItemOnBoundary => ItemOnBoundary {
            tile: tile(n),
            direction: 1,
            slot: 4,
        }
        .into(),
        K::MobTarget => MobTarget { server_index: n }.into(),
        K::ItemOnMob => ItemOnMob {
            server_index: n,
            slot: 7,
        }
        .into(),
        K::ItemOnGroundItem => ItemOnGroundItem {
            tile: tile(n),
            ground_item: 546,
            slot: 2,
        }
        .into(),
        K::GroundItemTake => GroundItemTake {
            tile: tile(n),
            item: 546,
        }
        .into(),
        K::ItemOnItem => ItemOnItem {
            slot: 0,
            other_slot: 29,
        }
        .into(),
        K::ItemIndex => ItemIndex { index: n }.into(),
        K::ItemOnScenery => ItemOnScenery {
            tile: tile(n),
            slot: 11,
        }
        .into(),
        // The 115 client sends stock as a short.
        K::ShopTrade => ShopTrade {
            item: n,
            stock_amount: -12,
        }
        .into(),
        K::Prayer => PrayerToggle { prayer: 4 }.into(),
        K::GameSetting => GameSettingChange { index: 2, value: 1 }.into(),
        K::Chat => ChatText {
            message: "hello world".into(),
        }
        .into(),
        K::Command => CommandText {
            command: "tele 120 648".into(),
        }
        .into(),
        K::Privacy => PrivacySettings {
            block_chat: false,
            block_private: true,
            block_trade: true,
            block_duel: false,
        }
        .into(),
        K::ReportAbuse => AbuseReport {
            player: "Zezima".into(),
            reason: 0x20 | 5,
            action: 1,
        }
        .into(),
        K::BankTransfer => BankTransfer {
            item: n,
            amount: 28,
            trap: matches!(version, ProtocolVersion::V202 | ProtocolVersion::V203).then_some(-7),
        }
        .into(),
        K::Sleepword => SleepwordGuess {
            word: "gnome".into(),
        }
        .into(),
        K::KnownPlayers => KnownPlayers {
            players: vec![KnownPlayer {
                server_index: n,
                appearance_id: 3,
            }],
        }
        .into(),
        K::ChangePassword => PasswordChange {
            old_password: "hunter2".into(),
            new_password: "correct horse".into(),
        }
        .into(),
        K::SetRecovery => RecoverySetup {
            entries: (0..5)
                .map(|i| RecoveryEntry {
                    question: format!("question {i}"),
                    answer: "blue".into(),
                })
                .collect(),
        }
        .into(),
    };
    Some(payload)
}

fn server_sample(op: ServerOp, n: u16) -> ServerPayload {
    use ServerPayloadKind as K;

    let owned = |text: &str| text.to_owned();
    match op.kind() {
        K::Empty => NoPayload.into(),
        K::Text => TextMessage::new("Welcome to RuneScape").into(),
        K::OptionsMenu => OptionsMenu {
            options: vec![owned("Yes please"), owned("No thanks")],
        }
        .into(),
        // 64 seconds is exactly 100 ticks.
        K::SystemUpdate => SystemUpdate { seconds: 64 }.into(),
        K::Stats => {
            let mut stats = StatsSnapshot {
                quest_points: 12,
                ..StatsSnapshot::default()
            };
            stats.current[3] = 10;
            stats.max[3] = 10;
            stats.experience[3] = 1_154;
            stats.into()
        }
        K::Stat => StatUpdate {
            skill: 3,
            current: 9,
            max: 10,
            experience: 1_154,
        }
        .into(),
        K::Experience => ExperienceUpdate {
            skill: 6,
            experience: u32::from(n) * 4,
        }
        .into(),
        K::EquipmentStats => EquipmentStats {
            armour: 12,
            aim: 20,
            power: 18,
            magic: 0,
            prayer: 3,
        }
        .into(),
        K::Quests => QuestStages {
            stages: (0..QUEST_COUNT).map(|i| (i % 3) as u8).collect(),
        }
        .into(),
        K::Prayers => PrayerStates {
            active: vec![true, false, false, true],
        }
        .into(),
        K::Fatigue => FatigueLevel {
            fatigue: u32::from(n) * 200,
        }
        .into(),
        K::Sound => SoundEffect {
            name: owned("click"),
        }
        .into(),
        K::Bubble => ActionBubble {
            is_grab: true,
            x: -2,
            y: 3,
        }
        .into(),
        K::GameSettings => GameSettings {
            camera_auto: true,
            one_mouse_button: false,
            sound_off: true,
        }
        .into(),
        K::Privacy => PrivacySettings {
            block_chat: true,
            block_private: false,
            block_trade: false,
            block_duel: true,
        }
        .into(),
        K::Window => WindowOpen { server_index: n }.into(),
        K::Accepted => AcceptState { accepted: true }.into(),
        K::TradeConfirm => TradeConfirm {
            opponent: owned("Zezima"),
            opponent_items: vec![ItemStack::new(n % 1_290, 3)],
            my_items: vec![ItemStack::new(STACKABLE, 5_000)],
        }
        .into(),
        K::ItemList => ItemList {
            items: vec![ItemStack::new(n, 1), ItemStack::new(STACKABLE, 70)],
        }
        .into(),
        K::DuelRules => DuelRules {
            no_retreat: false,
            no_magic: true,
            no_prayer: false,
            no_weapons: true,
        }
        .into(),
        K::DuelConfirm => DuelConfirm {
            opponent: owned("Zezima"),
            opponent_items: vec![ItemStack::new(n, 1)],
            my_items: Vec::new(),
            rules: DuelRules {
                no_retreat: true,
                ..DuelRules::default()
            },
        }
        .into(),
        K::SleepScreen => SleepImage {
            image: vec![1, 2, 3, n.to_be_bytes()[1]],
        }
        .into(),
        K::FriendList => FriendList {
            friends: vec![
                FriendStatus {
                    name: owned("Zezima"),
                    world: 1,
                },
                FriendStatus {
                    name: owned("Bob"),
                    world: 0,
                },
            ],
        }
        .into(),
        K::Friend => FriendStatus {
            name: owned("Zezima"),
            world: 2,
        }
        .into(),
        K::IgnoreList => IgnoreList {
            names: vec![owned("Zezima")],
        }
        .into(),
        K::Inventory => InventoryContents {
            items: vec![
                InventoryItem {
                    id: STACKABLE,
                    amount: u32::from(n),
                    wielded: false,
                },
                InventoryItem {
                    id: 81,
                    amount: 0,
                    wielded: true,
                },
            ],
        }
        .into(),
        K::InventorySlot => InventorySlot { slot: 4 }.into(),
        K::InventorySlotUpdate => InventorySlotUpdate {
            slot: 3,
            item: InventoryItem {
                id: STACKABLE,
                amount: u32::from(n) + 1,
                wielded: false,
            },
        }
        .into(),
        K::Bank => BankContents {
            capacity: 192,
            items: vec![ItemStack::new(n, 1_000_000), ItemStack::new(STACKABLE, 0)],
        }
        .into(),
        K::BankSlotUpdate => BankSlotUpdate {
            slot: 9,
            item: ItemStack::new(n, 250),
        }
        .into(),
        K::Shop => ShopContents {
            general: true,
            sell_modifier: 130,
            buy_modifier: 40,
            items: vec![ShopItem {
                id: n,
                stock: 3,
                base_stock: 5,
            }],
        }
        .into(),
        K::PrivateMessage => PrivateMessageReceived {
            sender: owned("Zezima"),
            message_id: i32::from(n),
            message: owned("hello there"),
        }
        .into(),
        K::Welcome => WelcomeInfo {
            last_ip: owned("127.0.0.1"),
            days_since_login: 2,
            recovery_age: RecoveryAge::DaysAgo(3),
            unread_messages: 4,
        }
        .into(),
        K::WorldInfo => WorldInfo {
            server_index: n,
            plane_width: 2_304,
            plane_height: 1_776,
            plane_floor: 0,
            floor_distance: 944,
        }
        .into(),
        K::NpcPositions => NpcPositions {
            known: vec![
                KnownMobUpdate::Moved { direction: 3 },
                KnownMobUpdate::Removed,
                KnownMobUpdate::Unchanged,
                KnownMobUpdate::Turned { sprite: 5 },
            ],
            added: vec![AddedNpc {
                server_index: n % 4_096,
                offset_x: -3,
                offset_y: 4,
                sprite: 2,
                npc_type: 1_023,
            }],
        }
        .into(),
        K::PlayerPositions => PlayerPositions {
            region_x: n % 2_048,
            region_y: 5_000,
            sprite: 4,
            known: vec![KnownMobUpdate::Moved { direction: 7 }],
            added: vec![AddedPlayer {
                server_index: n % 2_048,
                offset_x: 15,
                offset_y: -16,
                sprite: 0,
                needs_appearance: true,
            }],
        }
        .into(),
        // Entry boundaries are not on the wire, so only raw entries come back.
        K::Appearance => AppearanceUpdate {
            entries: vec![AppearanceEntry::Raw(vec![0, 1, n.to_be_bytes()[0]])],
        }
        .into(),
        K::Scenery => SceneryUpdate {
            objects: vec![SceneryPlacement {
                id: n,
                x: -5,
                y: 6,
            }],
        }
        .into(),
        K::Boundaries => BoundaryUpdate {
            boundaries: vec![BoundaryPlacement {
                id: n,
                x: 1,
                y: -1,
                direction: 2,
            }],
        }
        .into(),
        K::GroundItems => GroundItemUpdate {
            items: vec![
                GroundItemChange::Place {
                    id: n % 0xFF00,
                    x: 2,
                    y: -3,
                },
                GroundItemChange::ClearTile { x: 0, y: 1 },
            ],
        }
        .into(),
        K::ClearLocations => ClearLocations {
            points: vec![tile(n)],
        }
        .into(),
    }
}

proptest! {
    #[test]
    fn every_client_op_roundtrips(version in any_version(), n in any::<u16>()) {
        let translator = translator();
        let ctx = ConnectionContext::new(version).with_session(42);
        for &op in ClientOp::ALL {
            let Some(payload) = client_sample(op, version, n) else {
                continue;
            };
            let message = ClientMessage::new(op, payload).unwrap();
            let Some(packet) = translator.encode_client(&message, &ctx).unwrap() else {
                prop_assert!(wire::inbound(version).wire_code_for(op).is_none());
                continue;
            };
            prop_assert!(
                translator.is_well_formed(version, packet.opcode, packet.len()),
                "{} {} len {}", version, op, packet.len()
            );
            prop_assert_eq!(translator.parse(&packet, &ctx).unwrap(), message);
        }
    }

    #[test]
    fn every_server_op_roundtrips(version in any_version(), n in any::<u16>()) {
        let translator = translator();
        let ctx = ConnectionContext::new(version);
        for &op in ServerOp::ALL {
            let message = ServerMessage::new(op, server_sample(op, n)).unwrap();
            let Some(packet) = translator.generate(&message, &ctx).unwrap() else {
                // The 115 client has no outbound table at all.
                prop_assert!(wire::outbound(version).and_then(|t| t.wire_code_for(op)).is_none());
                continue;
            };
            prop_assert_eq!(translator.decode_server(&packet, &ctx).unwrap(), message);
        }
    }
}
