//! Server layouts of the newest dialect.
//!
//! Several layouts are lossy by construction: text and lists are truncated
//! to the configured limits, fatigue and update timers are rescaled, and the
//! shop price delta is clamped to a signed byte.

use bitstream::{ByteReader, ByteWriter};
use payload::{
    AcceptState, ActionBubble, AppearanceEntry, AppearanceUpdate, BankContents, BankSlotUpdate,
    BoundaryPlacement, BoundaryUpdate, ClearLocations, DuelConfirm, DuelRules, EquipmentStats,
    ExperienceUpdate, FatigueLevel, FriendList, FriendStatus, GameSettings, GroundItemChange,
    GroundItemUpdate, IgnoreList, InventoryContents, InventoryItem, InventorySlot,
    InventorySlotUpdate, ItemList, ItemStack, NoPayload, OptionsMenu, PrayerStates,
    PrivacySettings, PrivateMessageReceived, QuestStages, RecoveryAge, SceneryPlacement,
    SceneryUpdate, ServerOp, ServerPayload, ShopContents, ShopItem, SleepImage, SoundEffect,
    StatUpdate, StatsSnapshot, SystemUpdate, TextMessage, TilePoint, TradeConfirm, WelcomeInfo,
    WindowOpen, WorldInfo, QUEST_COUNT, SKILL_COUNT,
};

use super::ServerDialect;
use crate::dialect::{expect_payload, Dialect, Env, OpCodec};
use crate::error::{CodecError, CodecResult, LimitKind};
use crate::ip::{decode_ip_slot, encode_ip_slot};
use crate::mobs;
use crate::names::{decode_name, encode_name};

/// Longest single menu option, in bytes.
const MAX_OPTION_LEN: usize = u8::MAX as usize;
/// Bit set on an inventory id when the item is wielded.
const WIELDED_FLAG: u16 = 0x8000;
const ITEM_ID_MASK: u16 = 0x7FFF;
/// Update countdowns are sent in client ticks of 640 ms.
const TICKS_PER_32_SECONDS: u32 = 50;
/// World byte of friends who are offline or hidden; sent unshifted.
const WORLD_OFFLINE: u8 = 0;
const WORLD_HIDDEN: u8 = 255;
const WORLD_OFFSET: u8 = 9;
const RECOVERY_UNSET: u8 = 200;
const RECOVERY_LONG_AGO: u8 = 201;
const RECOVERY_RECENT_DAYS: u8 = 14;
const GROUND_TILE_CLEAR: u8 = 255;
const SHOP_DELTA_LIMIT: i32 = 127;

pub(super) fn dialect() -> ServerDialect {
    use ServerOp as Op;

    Dialect::new("203", None)
        .with(
            &[
                Op::LogoutRequestConfirm,
                Op::CantLogout,
                Op::AppearanceScreen,
                Op::Death,
                Op::SleepwordIncorrect,
                Op::StopSleep,
                Op::TradeClose,
                Op::DuelClose,
                Op::BankClose,
                Op::ShopClose,
                Op::OptionsMenuClose,
            ],
            OpCodec::new(decode_empty, encode_empty),
        )
        .with(
            &[Op::Box, Op::Box2, Op::ServerMessage],
            OpCodec::new(decode_text, encode_text),
        )
        .with(
            &[Op::OptionsMenuOpen],
            OpCodec::new(decode_options, encode_options),
        )
        .with(
            &[Op::SystemUpdate],
            OpCodec::new(decode_system_update, encode_system_update),
        )
        .with(&[Op::Stats], OpCodec::new(decode_stats, encode_stats))
        .with(&[Op::Stat], OpCodec::new(decode_stat, encode_stat))
        .with(
            &[Op::Experience],
            OpCodec::new(decode_experience, encode_experience),
        )
        .with(
            &[Op::EquipmentStats],
            OpCodec::new(decode_equipment, encode_equipment),
        )
        .with(&[Op::Quests], OpCodec::new(decode_quests, encode_quests))
        .with(
            &[Op::PrayersActive],
            OpCodec::new(decode_prayers, encode_prayers),
        )
        .with(
            &[Op::Fatigue, Op::SleepFatigue],
            OpCodec::new(decode_fatigue, encode_fatigue),
        )
        .with(&[Op::PlaySound], OpCodec::new(decode_sound, encode_sound))
        .with(&[Op::Bubble], OpCodec::new(decode_bubble, encode_bubble))
        .with(
            &[Op::GameSettings],
            OpCodec::new(decode_game_settings, encode_game_settings),
        )
        .with(
            &[Op::PrivacySettings],
            OpCodec::new(decode_privacy, encode_privacy),
        )
        .with(
            &[Op::TradeWindow, Op::DuelWindow],
            OpCodec::new(decode_window, encode_window),
        )
        .with(
            &[
                Op::TradeAccepted,
                Op::TradeOtherAccepted,
                Op::DuelAccepted,
                Op::DuelOtherAccepted,
            ],
            OpCodec::new(decode_accepted, encode_accepted),
        )
        .with(
            &[Op::TradeOpenConfirm],
            OpCodec::new(decode_trade_confirm, encode_trade_confirm),
        )
        .with(
            &[Op::TradeOtherItems, Op::DuelOpponentsItems],
            OpCodec::new(decode_item_list, encode_item_list),
        )
        .with(
            &[Op::DuelSettings],
            OpCodec::new(decode_duel_rules, encode_duel_rules),
        )
        .with(
            &[Op::DuelConfirmWindow],
            OpCodec::new(decode_duel_confirm, encode_duel_confirm),
        )
        .with(
            &[Op::SleepScreen],
            OpCodec::new(decode_sleep_screen, encode_sleep_screen),
        )
        .with(
            &[Op::FriendList],
            OpCodec::new(decode_friend_list, encode_friend_list),
        )
        .with(
            &[Op::FriendUpdate],
            OpCodec::new(decode_friend, encode_friend),
        )
        .with(
            &[Op::IgnoreList],
            OpCodec::new(decode_ignore_list, encode_ignore_list),
        )
        .with(
            &[Op::Inventory],
            OpCodec::new(decode_inventory, encode_inventory),
        )
        .with(
            &[Op::InventoryRemoveItem],
            OpCodec::new(decode_inventory_slot, encode_inventory_slot),
        )
        .with(
            &[Op::InventoryUpdateItem],
            OpCodec::new(decode_inventory_update, encode_inventory_update),
        )
        .with(&[Op::BankOpen], OpCodec::new(decode_bank, encode_bank))
        .with(
            &[Op::BankUpdate],
            OpCodec::new(decode_bank_update, encode_bank_update),
        )
        .with(&[Op::ShopOpen], OpCodec::new(decode_shop, encode_shop))
        .with(
            &[Op::PrivateMessage],
            OpCodec::new(decode_private_message, encode_private_message),
        )
        .with(
            &[Op::WelcomeInfo],
            OpCodec::new(decode_welcome, encode_welcome),
        )
        .with(
            &[Op::WorldInfo],
            OpCodec::new(decode_world_info, encode_world_info),
        )
        .with(
            &[Op::NpcCoords],
            OpCodec::new(decode_npc_coords, encode_npc_coords),
        )
        .with(
            &[Op::PlayerCoords],
            OpCodec::new(decode_player_coords, encode_player_coords),
        )
        .with(
            &[Op::UpdateNpc, Op::UpdatePlayers],
            OpCodec::new(decode_appearance, encode_appearance),
        )
        .with(
            &[Op::SceneryHandler],
            OpCodec::new(decode_scenery, encode_scenery),
        )
        .with(
            &[Op::BoundaryHandler],
            OpCodec::new(decode_boundaries, encode_boundaries),
        )
        .with(
            &[Op::GroundItemHandler],
            OpCodec::new(decode_ground_items, encode_ground_items),
        )
        .with(
            &[Op::RemoveWorldEntity],
            OpCodec::new(decode_clear_locations, encode_clear_locations),
        )
}

type Reader<'r, 'b> = &'r mut ByteReader<'b>;

fn decode_empty(_: ServerOp, _: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(NoPayload.into())
}

fn encode_empty(op: ServerOp, p: &ServerPayload, _: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    expect_payload!(p, op, ServerPayload::Empty);
    Ok(())
}

fn decode_text(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(TextMessage::new(r.read_str_rest()?).into())
}

// Only message boxes are bounded by the client's buffer.
fn encode_text(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, env: &Env<'_>) -> CodecResult<()> {
    let message = expect_payload!(p, op, ServerPayload::Text);
    match op {
        ServerOp::Box | ServerOp::Box2 => {
            w.write_str(&truncated(&message.text, env.limits.max_box_text))?;
        }
        _ => w.write_str(&message.text)?,
    }
    Ok(())
}

fn truncated(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn decode_options(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let count = r.read_u8()?;
    let options = (0..count)
        .map(|_| -> CodecResult<String> {
            let len = usize::from(r.read_u8()?);
            Ok(r.read_str(len)?)
        })
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(OptionsMenu { options }.into())
}

fn encode_options(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let menu = expect_payload!(p, op, ServerPayload::OptionsMenu);
    let count = menu
        .options
        .len()
        .min(env.limits.max_menu_options)
        .min(usize::from(u8::MAX));
    w.write_u8(u8::try_from(count).unwrap_or(u8::MAX))?;
    for option in menu.options.iter().take(count) {
        let text = truncated(option, MAX_OPTION_LEN);
        w.write_u8(u8::try_from(text.chars().count()).unwrap_or(u8::MAX))?;
        w.write_str(&text)?;
    }
    Ok(())
}

fn decode_system_update(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let ticks = u32::from(r.read_u16()?);
    Ok(SystemUpdate {
        seconds: (ticks * 32).div_ceil(TICKS_PER_32_SECONDS),
    }
    .into())
}

fn encode_system_update(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let update = expect_payload!(p, op, ServerPayload::SystemUpdate);
    let ticks = u64::from(update.seconds) * u64::from(TICKS_PER_32_SECONDS) / 32;
    w.write_u16(u16::try_from(ticks).unwrap_or(u16::MAX))?;
    Ok(())
}

fn decode_stats(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let mut stats = StatsSnapshot::default();
    for level in &mut stats.current {
        *level = r.read_u8()?;
    }
    for level in &mut stats.max {
        *level = r.read_u8()?;
    }
    for experience in &mut stats.experience {
        *experience = r.read_u32()?;
    }
    stats.quest_points = r.read_u8()?;
    Ok(stats.into())
}

fn encode_stats(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let stats = expect_payload!(p, op, ServerPayload::Stats);
    w.write_bytes(&stats.current)?;
    w.write_bytes(&stats.max)?;
    for experience in stats.experience {
        w.write_u32(experience)?;
    }
    w.write_u8(stats.quest_points)?;
    debug_assert_eq!(stats.current.len(), SKILL_COUNT);
    Ok(())
}

fn decode_stat(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(StatUpdate {
        skill: r.read_u8()?,
        current: r.read_u8()?,
        max: r.read_u8()?,
        experience: r.read_u32()?,
    }
    .into())
}

fn encode_stat(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let stat = expect_payload!(p, op, ServerPayload::Stat);
    w.write_u8(stat.skill)?;
    w.write_u8(stat.current)?;
    w.write_u8(stat.max)?;
    w.write_u32(stat.experience)?;
    Ok(())
}

fn decode_experience(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(ExperienceUpdate {
        skill: r.read_u8()?,
        experience: r.read_u32()?,
    }
    .into())
}

fn encode_experience(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let update = expect_payload!(p, op, ServerPayload::Experience);
    w.write_u8(update.skill)?;
    w.write_u32(update.experience)?;
    Ok(())
}

fn decode_equipment(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(EquipmentStats {
        armour: r.read_u8()?,
        aim: r.read_u8()?,
        power: r.read_u8()?,
        magic: r.read_u8()?,
        prayer: r.read_u8()?,
    }
    .into())
}

fn encode_equipment(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let stats = expect_payload!(p, op, ServerPayload::EquipmentStats);
    w.write_bytes(&[stats.armour, stats.aim, stats.power, stats.magic, stats.prayer])?;
    Ok(())
}

fn decode_quests(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(QuestStages {
        stages: r.read_bytes(QUEST_COUNT)?.to_vec(),
    }
    .into())
}

fn encode_quests(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let quests = expect_payload!(p, op, ServerPayload::Quests);
    let mut stages = [0u8; QUEST_COUNT];
    for (slot, &stage) in stages.iter_mut().zip(&quests.stages) {
        *slot = stage;
    }
    w.write_bytes(&stages)?;
    Ok(())
}

fn decode_prayers(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(PrayerStates {
        active: r.read_rest()?.iter().map(|&b| b != 0).collect(),
    }
    .into())
}

fn encode_prayers(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let prayers = expect_payload!(p, op, ServerPayload::Prayers);
    for &active in &prayers.active {
        w.write_u8(u8::from(active))?;
    }
    Ok(())
}

fn decode_fatigue(_: ServerOp, r: Reader<'_, '_>, env: &Env<'_>) -> CodecResult<ServerPayload> {
    let units = u32::from(r.read_u16()?);
    Ok(FatigueLevel {
        fatigue: units.saturating_mul(env.limits.fatigue_scale),
    }
    .into())
}

fn encode_fatigue(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, env: &Env<'_>) -> CodecResult<()> {
    let level = expect_payload!(p, op, ServerPayload::Fatigue);
    let units = level.fatigue / env.limits.fatigue_scale.max(1);
    w.write_u16(u16::try_from(units).unwrap_or(u16::MAX))?;
    Ok(())
}

fn decode_sound(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(SoundEffect {
        name: r.read_str_rest()?,
    }
    .into())
}

fn encode_sound(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let sound = expect_payload!(p, op, ServerPayload::Sound);
    w.write_str(&sound.name)?;
    Ok(())
}

fn decode_bubble(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(ActionBubble {
        is_grab: r.read_u8()? != 0,
        x: r.read_i8()?,
        y: r.read_i8()?,
    }
    .into())
}

fn encode_bubble(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let bubble = expect_payload!(p, op, ServerPayload::Bubble);
    w.write_u8(u8::from(bubble.is_grab))?;
    w.write_i8(bubble.x)?;
    w.write_i8(bubble.y)?;
    Ok(())
}

fn read_flags<const N: usize>(r: &mut ByteReader<'_>) -> CodecResult<[bool; N]> {
    let mut flags = [false; N];
    for flag in &mut flags {
        *flag = r.read_u8()? != 0;
    }
    Ok(flags)
}

fn write_flags(w: &mut ByteWriter, flags: &[bool]) -> CodecResult<()> {
    for &flag in flags {
        w.write_u8(u8::from(flag))?;
    }
    Ok(())
}

fn decode_game_settings(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let [camera_auto, one_mouse_button, sound_off] = read_flags(r)?;
    Ok(GameSettings {
        camera_auto,
        one_mouse_button,
        sound_off,
    }
    .into())
}

fn encode_game_settings(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let settings = expect_payload!(p, op, ServerPayload::GameSettings);
    write_flags(
        w,
        &[settings.camera_auto, settings.one_mouse_button, settings.sound_off],
    )
}

fn decode_privacy(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let [block_chat, block_private, block_trade, block_duel] = read_flags(r)?;
    Ok(PrivacySettings {
        block_chat,
        block_private,
        block_trade,
        block_duel,
    }
    .into())
}

fn encode_privacy(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let privacy = expect_payload!(p, op, ServerPayload::Privacy);
    write_flags(
        w,
        &[
            privacy.block_chat,
            privacy.block_private,
            privacy.block_trade,
            privacy.block_duel,
        ],
    )
}

fn read_rules(r: &mut ByteReader<'_>) -> CodecResult<DuelRules> {
    let [no_retreat, no_magic, no_prayer, no_weapons] = read_flags(r)?;
    Ok(DuelRules {
        no_retreat,
        no_magic,
        no_prayer,
        no_weapons,
    })
}

fn write_rules(w: &mut ByteWriter, rules: &DuelRules) -> CodecResult<()> {
    write_flags(
        w,
        &[
            rules.no_retreat,
            rules.no_magic,
            rules.no_prayer,
            rules.no_weapons,
        ],
    )
}

fn decode_duel_rules(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(read_rules(r)?.into())
}

fn encode_duel_rules(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    write_rules(w, expect_payload!(p, op, ServerPayload::DuelRules))
}

fn decode_window(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(WindowOpen {
        server_index: r.read_u16()?,
    }
    .into())
}

fn encode_window(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let window = expect_payload!(p, op, ServerPayload::Window);
    w.write_u16(window.server_index)?;
    Ok(())
}

fn decode_accepted(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(AcceptState {
        accepted: r.read_u8()? != 0,
    }
    .into())
}

fn encode_accepted(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let state = expect_payload!(p, op, ServerPayload::Accepted);
    w.write_u8(u8::from(state.accepted))?;
    Ok(())
}

fn read_items(r: &mut ByteReader<'_>) -> CodecResult<Vec<ItemStack>> {
    let count = r.read_u8()?;
    (0..count)
        .map(|_| -> CodecResult<ItemStack> { Ok(ItemStack::new(r.read_u16()?, r.read_u32()?)) })
        .collect()
}

/// Byte-counted item list; entries past the list limit are dropped.
fn write_items(w: &mut ByteWriter, items: &[ItemStack], env: &Env<'_>) -> CodecResult<()> {
    let count = env.limits.list_count(items.len());
    w.write_u8(count)?;
    for item in items.iter().take(usize::from(count)) {
        w.write_u16(item.id)?;
        w.write_u32(item.amount)?;
    }
    Ok(())
}

fn decode_trade_confirm(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(TradeConfirm {
        opponent: decode_name(r.read_i64()?),
        opponent_items: read_items(r)?,
        my_items: read_items(r)?,
    }
    .into())
}

fn encode_trade_confirm(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let confirm = expect_payload!(p, op, ServerPayload::TradeConfirm);
    let max = env.limits.max_authentic_item_id;
    if let Some(item) = confirm.opponent_items.iter().find(|item| item.id > max) {
        return Err(CodecError::ItemNotAuthentic { id: item.id, max });
    }
    w.write_i64(encode_name(&confirm.opponent))?;
    write_items(w, &confirm.opponent_items, env)?;
    write_items(w, &confirm.my_items, env)
}

fn decode_item_list(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(ItemList {
        items: read_items(r)?,
    }
    .into())
}

fn encode_item_list(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let list = expect_payload!(p, op, ServerPayload::ItemList);
    write_items(w, &list.items, env)
}

fn decode_duel_confirm(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(DuelConfirm {
        opponent: decode_name(r.read_i64()?),
        opponent_items: read_items(r)?,
        my_items: read_items(r)?,
        rules: read_rules(r)?,
    }
    .into())
}

fn encode_duel_confirm(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let confirm = expect_payload!(p, op, ServerPayload::DuelConfirm);
    w.write_i64(encode_name(&confirm.opponent))?;
    write_items(w, &confirm.opponent_items, env)?;
    write_items(w, &confirm.my_items, env)?;
    write_rules(w, &confirm.rules)
}

fn decode_sleep_screen(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(SleepImage {
        image: r.read_rest()?.to_vec(),
    }
    .into())
}

fn encode_sleep_screen(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let sleep = expect_payload!(p, op, ServerPayload::SleepScreen);
    w.write_bytes(&sleep.image)?;
    Ok(())
}

/// Converts between a world number and the byte a 203 client expects.
pub(super) type WorldMapping = fn(u8) -> u8;

pub(super) const fn shift_world(world: u8) -> u8 {
    match world {
        WORLD_OFFLINE | WORLD_HIDDEN => world,
        _ => world.wrapping_add(WORLD_OFFSET),
    }
}

pub(super) const fn unshift_world(byte: u8) -> u8 {
    match byte {
        WORLD_OFFLINE | WORLD_HIDDEN => byte,
        _ => byte.wrapping_sub(WORLD_OFFSET),
    }
}

pub(super) fn read_friends(
    r: &mut ByteReader<'_>,
    unmap: WorldMapping,
) -> CodecResult<ServerPayload> {
    let count = r.read_u8()?;
    let friends = (0..count)
        .map(|_| -> CodecResult<FriendStatus> {
            Ok(FriendStatus {
                name: decode_name(r.read_i64()?),
                world: unmap(r.read_u8()?),
            })
        })
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(FriendList { friends }.into())
}

pub(super) fn write_friends(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
    map: WorldMapping,
) -> CodecResult<()> {
    let list = expect_payload!(p, op, ServerPayload::FriendList);
    let count = env.limits.list_count(list.friends.len());
    w.write_u8(count)?;
    for friend in list.friends.iter().take(usize::from(count)) {
        w.write_i64(encode_name(&friend.name))?;
        w.write_u8(map(friend.world))?;
    }
    Ok(())
}

pub(super) fn read_friend(r: &mut ByteReader<'_>, unmap: WorldMapping) -> CodecResult<ServerPayload> {
    Ok(FriendStatus {
        name: decode_name(r.read_i64()?),
        world: unmap(r.read_u8()?),
    }
    .into())
}

pub(super) fn write_friend(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    map: WorldMapping,
) -> CodecResult<()> {
    let friend = expect_payload!(p, op, ServerPayload::Friend);
    w.write_i64(encode_name(&friend.name))?;
    w.write_u8(map(friend.world))?;
    Ok(())
}

fn decode_friend_list(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    read_friends(r, unshift_world)
}

fn encode_friend_list(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    write_friends(op, p, w, env, shift_world)
}

fn decode_friend(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    read_friend(r, unshift_world)
}

fn encode_friend(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    write_friend(op, p, w, shift_world)
}

fn decode_ignore_list(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let count = r.read_u8()?;
    let names = (0..count)
        .map(|_| -> CodecResult<String> { Ok(decode_name(r.read_i64()?)) })
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(IgnoreList { names }.into())
}

fn encode_ignore_list(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let list = expect_payload!(p, op, ServerPayload::IgnoreList);
    let count = env.limits.list_count(list.names.len());
    w.write_u8(count)?;
    for name in list.names.iter().take(usize::from(count)) {
        w.write_i64(encode_name(name))?;
    }
    Ok(())
}

fn flagged_id(item: &InventoryItem) -> CodecResult<u16> {
    if item.id > ITEM_ID_MASK {
        return Err(CodecError::out_of_range(
            "item_id",
            i64::from(item.id),
            0,
            i64::from(ITEM_ID_MASK),
        ));
    }
    Ok(if item.wielded {
        item.id | WIELDED_FLAG
    } else {
        item.id
    })
}

fn unflag_id(raw: u16) -> (u16, bool) {
    (raw & ITEM_ID_MASK, raw & WIELDED_FLAG != 0)
}

fn decode_inventory(_: ServerOp, r: Reader<'_, '_>, env: &Env<'_>) -> CodecResult<ServerPayload> {
    let count = r.read_u8()?;
    let items = (0..count)
        .map(|_| -> CodecResult<InventoryItem> {
            let (id, wielded) = unflag_id(r.read_u16()?);
            let amount = if env.catalog.is_stackable(id) {
                r.read_smart()?
            } else {
                0
            };
            Ok(InventoryItem {
                id,
                amount,
                wielded,
            })
        })
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(InventoryContents { items }.into())
}

// Non-stackable items carry amount 0, so the amount is present exactly when
// the catalog lists the item as stackable.
fn encode_inventory(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let inventory = expect_payload!(p, op, ServerPayload::Inventory);
    let count = env.limits.list_count(inventory.items.len());
    w.write_u8(count)?;
    for item in inventory.items.iter().take(usize::from(count)) {
        w.write_u16(flagged_id(item)?)?;
        if env.catalog.is_stackable(item.id) {
            w.write_smart(item.amount)?;
        } else if item.amount > 0 {
            return Err(CodecError::out_of_range(
                "inventory_amount",
                i64::from(item.amount),
                0,
                0,
            ));
        }
    }
    Ok(())
}

fn decode_inventory_slot(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(InventorySlot { slot: r.read_u8()? }.into())
}

fn encode_inventory_slot(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let slot = expect_payload!(p, op, ServerPayload::InventorySlot);
    w.write_u8(slot.slot)?;
    Ok(())
}

fn decode_inventory_update(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let slot = r.read_u8()?;
    let raw = r.read_u16()?;
    if raw == 0 && r.remaining() == 2 {
        let filler = r.read_u16()?;
        if filler != 0 {
            return Err(CodecError::out_of_range("empty_slot", i64::from(filler), 0, 0));
        }
        return Ok(InventorySlotUpdate {
            slot,
            item: InventoryItem::EMPTY,
        }
        .into());
    }
    let (id, wielded) = unflag_id(raw);
    let amount = if r.is_empty() { 0 } else { r.read_smart()? };
    Ok(InventorySlotUpdate {
        slot,
        item: InventoryItem {
            id,
            amount,
            wielded,
        },
    }
    .into())
}

/// An emptied slot is sent as two zero shorts, so slot 0 gives five zero bytes.
fn encode_inventory_update(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let update = expect_payload!(p, op, ServerPayload::InventorySlotUpdate);
    w.write_u8(update.slot)?;
    if update.item.is_empty_slot() {
        w.write_u16(0)?;
        w.write_u16(0)?;
        return Ok(());
    }
    w.write_u16(flagged_id(&update.item)?)?;
    if update.item.amount > 0 {
        w.write_smart(update.item.amount)?;
    }
    Ok(())
}

fn decode_bank(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let count = r.read_u8()?;
    let capacity = u16::from(r.read_u8()?);
    let items = (0..count)
        .map(|_| -> CodecResult<ItemStack> { Ok(ItemStack::new(r.read_u16()?, r.read_smart()?)) })
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(BankContents { capacity, items }.into())
}

fn encode_bank(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, env: &Env<'_>) -> CodecResult<()> {
    let bank = expect_payload!(p, op, ServerPayload::Bank);
    let count = env.limits.list_count(bank.items.len());
    w.write_u8(count)?;
    w.write_u8(u8::try_from(bank.capacity).unwrap_or(u8::MAX))?;
    for item in bank.items.iter().take(usize::from(count)) {
        w.write_u16(item.id)?;
        w.write_smart(item.amount)?;
    }
    Ok(())
}

fn decode_bank_update(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(BankSlotUpdate {
        slot: r.read_u8()?,
        item: ItemStack::new(r.read_u16()?, r.read_smart()?),
    }
    .into())
}

fn encode_bank_update(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let update = expect_payload!(p, op, ServerPayload::BankSlotUpdate);
    w.write_u8(update.slot)?;
    w.write_u16(update.item.id)?;
    w.write_smart(update.item.amount)?;
    Ok(())
}

fn decode_shop(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let count = r.read_u8()?;
    let general = r.read_u8()? != 0;
    let sell_modifier = r.read_u8()?;
    let buy_modifier = r.read_u8()?;
    let items = (0..count)
        .map(|_| -> CodecResult<ShopItem> {
            let id = r.read_u16()?;
            let stock = r.read_u16()?;
            let base = i32::from(stock) + i32::from(r.read_i8()?);
            Ok(ShopItem {
                id,
                stock,
                base_stock: u16::try_from(base.max(0)).unwrap_or(u16::MAX),
            })
        })
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(ShopContents {
        general,
        sell_modifier,
        buy_modifier,
        items,
    }
    .into())
}

fn encode_shop(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, env: &Env<'_>) -> CodecResult<()> {
    let shop = expect_payload!(p, op, ServerPayload::Shop);
    let count = env.limits.list_count(shop.items.len());
    w.write_u8(count)?;
    w.write_u8(u8::from(shop.general))?;
    w.write_u8(shop.sell_modifier)?;
    w.write_u8(shop.buy_modifier)?;
    for item in shop.items.iter().take(usize::from(count)) {
        let delta = (i32::from(item.base_stock) - i32::from(item.stock))
            .clamp(-SHOP_DELTA_LIMIT, SHOP_DELTA_LIMIT);
        w.write_u16(item.id)?;
        w.write_u16(item.stock)?;
        w.write_i8(i8::try_from(delta).unwrap_or_default())?;
    }
    Ok(())
}

fn decode_private_message(
    _: ServerOp,
    r: Reader<'_, '_>,
    env: &Env<'_>,
) -> CodecResult<ServerPayload> {
    Ok(PrivateMessageReceived {
        sender: decode_name(r.read_i64()?),
        message_id: r.read_i32()?,
        message: env.compressor.decompress(r.read_rest()?)?,
    }
    .into())
}

fn encode_private_message(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let pm = expect_payload!(p, op, ServerPayload::PrivateMessage);
    w.write_i64(encode_name(&pm.sender))?;
    w.write_i32(pm.message_id)?;
    w.write_bytes(&env.compressor.compress(&pm.message))?;
    Ok(())
}

const fn recovery_byte(age: RecoveryAge) -> u8 {
    match age {
        RecoveryAge::Unset => RECOVERY_UNSET,
        RecoveryAge::DaysAgo(days) if days < RECOVERY_RECENT_DAYS => days,
        RecoveryAge::DaysAgo(_) | RecoveryAge::LongAgo => RECOVERY_LONG_AGO,
    }
}

const fn recovery_age(byte: u8) -> RecoveryAge {
    match byte {
        RECOVERY_UNSET => RecoveryAge::Unset,
        days if days < RECOVERY_RECENT_DAYS => RecoveryAge::DaysAgo(days),
        _ => RecoveryAge::LongAgo,
    }
}

fn decode_welcome(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let mut slot = [0u8; 4];
    slot.copy_from_slice(r.read_bytes(4)?);
    Ok(WelcomeInfo {
        last_ip: decode_ip_slot(slot),
        days_since_login: r.read_u16()?,
        recovery_age: recovery_age(r.read_u8()?),
        unread_messages: r.read_u16()?.saturating_sub(1),
    }
    .into())
}

fn encode_welcome(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let welcome = expect_payload!(p, op, ServerPayload::Welcome);
    w.write_bytes(&encode_ip_slot(&welcome.last_ip))?;
    w.write_u16(welcome.days_since_login)?;
    w.write_u8(recovery_byte(welcome.recovery_age))?;
    w.write_u16(welcome.unread_messages.saturating_add(1))?;
    Ok(())
}

fn decode_world_info(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(WorldInfo {
        server_index: r.read_u16()?,
        plane_width: r.read_u16()?,
        plane_height: r.read_u16()?,
        plane_floor: r.read_u16()?,
        floor_distance: r.read_u16()?,
    }
    .into())
}

fn encode_world_info(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let info = expect_payload!(p, op, ServerPayload::WorldInfo);
    for value in [
        info.server_index,
        info.plane_width,
        info.plane_height,
        info.plane_floor,
        info.floor_distance,
    ] {
        w.write_u16(value)?;
    }
    Ok(())
}

fn decode_npc_coords(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(mobs::read_npcs(r)?.into())
}

fn encode_npc_coords(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    mobs::write_npcs(w, expect_payload!(p, op, ServerPayload::NpcPositions))
}

fn decode_player_coords(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    Ok(mobs::read_players(r)?.into())
}

fn encode_player_coords(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    mobs::write_players(w, expect_payload!(p, op, ServerPayload::PlayerPositions))
}

// Entry boundaries are not recoverable from the bytes.
fn decode_appearance(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let rest = r.read_rest()?;
    let entries = if rest.is_empty() {
        Vec::new()
    } else {
        vec![AppearanceEntry::Raw(rest.to_vec())]
    };
    Ok(AppearanceUpdate { entries }.into())
}

fn encode_appearance(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let update = expect_payload!(p, op, ServerPayload::Appearance);
    for entry in &update.entries {
        match entry {
            AppearanceEntry::Byte(value) => w.write_i8(*value)?,
            AppearanceEntry::Short(value) => w.write_i16(*value)?,
            AppearanceEntry::Int(value) => w.write_i32(*value)?,
            AppearanceEntry::Long(value) => w.write_i64(*value)?,
            AppearanceEntry::AppearanceByte(value) => w.write_u8(*value)?,
            AppearanceEntry::Text(text) => w.write_str(text)?,
            AppearanceEntry::Chat(text) => {
                let bytes = env.compressor.compress(text);
                let len = u8::try_from(bytes.len()).map_err(|_| CodecError::LimitsExceeded {
                    kind: LimitKind::ChatBytes,
                    limit: usize::from(u8::MAX),
                    actual: bytes.len(),
                })?;
                w.write_u8(len)?;
                w.write_bytes(&bytes)?;
            }
            AppearanceEntry::Raw(bytes) => w.write_bytes(bytes)?,
        }
    }
    Ok(())
}

const SCENERY_RECORD: usize = 4;
const BOUNDARY_RECORD: usize = 5;
const GROUND_ITEM_RECORD: usize = 4;
const CLEAR_TILE_RECORD: usize = 3;
const LOCATION_RECORD: usize = 4;

fn decode_scenery(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let mut objects = Vec::with_capacity(r.remaining() / SCENERY_RECORD);
    while r.remaining() >= SCENERY_RECORD {
        objects.push(SceneryPlacement {
            id: r.read_u16()?,
            x: r.read_i8()?,
            y: r.read_i8()?,
        });
    }
    Ok(SceneryUpdate { objects }.into())
}

fn encode_scenery(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let update = expect_payload!(p, op, ServerPayload::Scenery);
    for object in &update.objects {
        w.write_u16(object.id)?;
        w.write_i8(object.x)?;
        w.write_i8(object.y)?;
    }
    Ok(())
}

fn decode_boundaries(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let mut boundaries = Vec::with_capacity(r.remaining() / BOUNDARY_RECORD);
    while r.remaining() >= BOUNDARY_RECORD {
        boundaries.push(BoundaryPlacement {
            id: r.read_u16()?,
            x: r.read_i8()?,
            y: r.read_i8()?,
            direction: r.read_u8()?,
        });
    }
    Ok(BoundaryUpdate { boundaries }.into())
}

fn encode_boundaries(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let update = expect_payload!(p, op, ServerPayload::Boundaries);
    for boundary in &update.boundaries {
        w.write_u16(boundary.id)?;
        w.write_i8(boundary.x)?;
        w.write_i8(boundary.y)?;
        w.write_u8(boundary.direction)?;
    }
    Ok(())
}

fn decode_ground_items(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let mut items = Vec::new();
    while r.remaining() >= CLEAR_TILE_RECORD {
        let change = if r.peek_u8()? == GROUND_TILE_CLEAR {
            r.skip(1)?;
            GroundItemChange::ClearTile {
                x: r.read_i8()?,
                y: r.read_i8()?,
            }
        } else if r.remaining() >= GROUND_ITEM_RECORD {
            GroundItemChange::Place {
                id: r.read_u16()?,
                x: r.read_i8()?,
                y: r.read_i8()?,
            }
        } else {
            break;
        };
        items.push(change);
    }
    Ok(GroundItemUpdate { items }.into())
}

fn encode_ground_items(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let update = expect_payload!(p, op, ServerPayload::GroundItems);
    for change in &update.items {
        match *change {
            GroundItemChange::Place { id, x, y } => {
                // A leading 0xFF byte would read back as a tile clear.
                if id >> 8 == u16::from(GROUND_TILE_CLEAR) {
                    return Err(CodecError::out_of_range("ground_item_id", i64::from(id), 0, 0xFEFF));
                }
                w.write_u16(id)?;
                w.write_i8(x)?;
                w.write_i8(y)?;
            }
            GroundItemChange::ClearTile { x, y } => {
                w.write_u8(GROUND_TILE_CLEAR)?;
                w.write_i8(x)?;
                w.write_i8(y)?;
            }
        }
    }
    Ok(())
}

fn decode_clear_locations(_: ServerOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    let mut points = Vec::with_capacity(r.remaining() / LOCATION_RECORD);
    while r.remaining() >= LOCATION_RECORD {
        points.push(TilePoint::new(r.read_u16()?, r.read_u16()?));
    }
    Ok(ClearLocations { points }.into())
}

fn encode_clear_locations(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let update = expect_payload!(p, op, ServerPayload::ClearLocations);
    for point in &update.points {
        w.write_u16(point.x)?;
        w.write_u16(point.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{encode_with, roundtrip, roundtrip_with, EnvFixture};
    use crate::limits::CodecLimits;
    use wire::ProtocolVersion;

    fn fixture() -> EnvFixture {
        EnvFixture::new(ProtocolVersion::V203)
    }

    #[test]
    fn box_text_is_truncated_but_server_message_is_not() {
        let dialect = dialect();
        let fixture = fixture();
        let long = TextMessage::new("x".repeat(5000));
        let bytes = encode_with(&fixture, &dialect, ServerOp::Box, &long.clone().into()).unwrap();
        assert_eq!(bytes.len(), 4975);
        let bytes = encode_with(&fixture, &dialect, ServerOp::ServerMessage, &long.into()).unwrap();
        assert_eq!(bytes.len(), 5000);
    }

    #[test]
    fn menu_keeps_five_options() {
        let menu = OptionsMenu {
            options: (0..8).map(|i| format!("option {i}")).collect(),
        };
        let bytes = encode_with(&fixture(), &dialect(), ServerOp::OptionsMenuOpen, &menu.into()).unwrap();
        assert_eq!(bytes[0], 5);
    }

    #[test]
    fn system_update_rounds_through_ticks() {
        let update = SystemUpdate { seconds: 100 };
        let bytes = encode_with(&fixture(), &dialect(), ServerOp::SystemUpdate, &update.into()).unwrap();
        assert_eq!(bytes, [0, 156]);
        let decoded = roundtrip(&dialect(), ServerOp::SystemUpdate, &SystemUpdate { seconds: 64 }.into());
        assert_eq!(decoded, [0, 100]);
    }

    #[test]
    fn fatigue_is_scaled() {
        let level = FatigueLevel { fatigue: 150_000 };
        let bytes = encode_with(&fixture(), &dialect(), ServerOp::Fatigue, &level.into()).unwrap();
        assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), 750);
    }

    #[test]
    fn item_list_saturates_at_limit() {
        let list = ItemList {
            items: (0..300).map(|i| ItemStack::new(i, 1)).collect(),
        };
        let bytes = encode_with(&fixture(), &dialect(), ServerOp::TradeOtherItems, &list.into()).unwrap();
        assert_eq!(bytes[0], 255);
        assert_eq!(bytes.len(), 1 + 255 * 6);
    }

    #[test]
    fn inauthentic_trade_items_are_refused() {
        let confirm = TradeConfirm {
            opponent: "Bob".into(),
            opponent_items: vec![ItemStack::new(1290, 1)],
            my_items: Vec::new(),
        };
        let err = encode_with(&fixture(), &dialect(), ServerOp::TradeOpenConfirm, &confirm.into())
            .unwrap_err();
        assert_eq!(err, CodecError::ItemNotAuthentic { id: 1290, max: 1289 });
    }

    #[test]
    fn friend_world_is_shifted() {
        let list = FriendList {
            friends: vec![
                FriendStatus {
                    name: "Alice".into(),
                    world: 1,
                },
                FriendStatus {
                    name: "Bob".into(),
                    world: 0,
                },
                FriendStatus {
                    name: "Eve".into(),
                    world: 255,
                },
            ],
        };
        let bytes = roundtrip(&dialect(), ServerOp::FriendList, &list.into());
        assert_eq!(bytes[9], 10);
        assert_eq!(bytes[18], 0);
        assert_eq!(bytes[27], 255);
    }

    #[test]
    fn inventory_amount_follows_catalog() {
        let inventory = InventoryContents {
            items: vec![
                InventoryItem {
                    id: 10,
                    amount: 5000,
                    wielded: false,
                },
                InventoryItem {
                    id: 81,
                    amount: 0,
                    wielded: true,
                },
            ],
        };
        let fixture = fixture().with_stackable(&[10]);
        let bytes = roundtrip_with(&fixture, &dialect(), ServerOp::Inventory, &inventory.into());
        assert_eq!(bytes, [2, 0, 10, 0x80, 0, 0x13, 0x88, 0x80, 81]);
    }

    #[test]
    fn inventory_amount_needs_a_stackable_item() {
        let inventory = |amount| InventoryContents {
            items: vec![InventoryItem {
                id: 10,
                amount,
                wielded: false,
            }],
        };
        let err = encode_with(&fixture(), &dialect(), ServerOp::Inventory, &inventory(500).into())
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::ValueOutOfRange {
                field: "inventory_amount",
                value: 500,
                ..
            }
        ));

        // A stack of zero still carries its amount byte.
        let fixture = fixture().with_stackable(&[10]);
        let bytes = roundtrip_with(&fixture, &dialect(), ServerOp::Inventory, &inventory(0).into());
        assert_eq!(bytes, [1, 0, 10, 0]);
    }

    #[test]
    fn emptied_slot_zero_is_five_zero_bytes() {
        let update = InventorySlotUpdate {
            slot: 0,
            item: InventoryItem::EMPTY,
        };
        let bytes = roundtrip(&dialect(), ServerOp::InventoryUpdateItem, &update.into());
        assert_eq!(bytes, [0; 5]);
    }

    #[test]
    fn slot_update_with_amount() {
        let update = InventorySlotUpdate {
            slot: 3,
            item: InventoryItem {
                id: 10,
                amount: 12,
                wielded: false,
            },
        };
        let bytes = roundtrip(&dialect(), ServerOp::InventoryUpdateItem, &update.into());
        assert_eq!(bytes, [3, 0, 10, 12]);
    }

    #[test]
    fn bank_capacity_saturates() {
        let bank = BankContents {
            capacity: 400,
            items: vec![ItemStack::new(10, 1_000_000)],
        };
        let bytes = encode_with(&fixture(), &dialect(), ServerOp::BankOpen, &bank.into()).unwrap();
        assert_eq!(&bytes[..2], [1, 255]);
    }

    #[test]
    fn shop_delta_is_clamped() {
        let shop = ShopContents {
            general: true,
            sell_modifier: 100,
            buy_modifier: 60,
            items: vec![
                ShopItem {
                    id: 1,
                    stock: 5,
                    base_stock: 10,
                },
                ShopItem {
                    id: 2,
                    stock: 500,
                    base_stock: 0,
                },
            ],
        };
        let bytes = encode_with(&fixture(), &dialect(), ServerOp::ShopOpen, &shop.into()).unwrap();
        assert_eq!(bytes[8] as i8, 5);
        assert_eq!(bytes[13] as i8, -127);
    }

    #[test]
    fn welcome_info_layout() {
        let welcome = WelcomeInfo {
            last_ip: "10.0.0.1".into(),
            days_since_login: 3,
            recovery_age: RecoveryAge::DaysAgo(2),
            unread_messages: 0,
        };
        let bytes = roundtrip(&dialect(), ServerOp::WelcomeInfo, &welcome.into());
        assert_eq!(bytes, [10, 0, 0, 1, 0, 3, 2, 0, 1]);
        assert_eq!(recovery_byte(RecoveryAge::Unset), 200);
        assert_eq!(recovery_byte(RecoveryAge::DaysAgo(30)), 201);
        assert_eq!(recovery_age(201), RecoveryAge::LongAgo);
    }

    #[test]
    fn appearance_decodes_as_raw() {
        let update = AppearanceUpdate {
            entries: vec![
                AppearanceEntry::Short(1),
                AppearanceEntry::Byte(5),
                AppearanceEntry::Chat("hey".into()),
            ],
        };
        let fixture = fixture();
        let dialect = dialect();
        let bytes = encode_with(&fixture, &dialect, ServerOp::UpdatePlayers, &update.into()).unwrap();
        let (_, codec) = dialect.resolve(ServerOp::UpdatePlayers).unwrap();
        let mut reader = ByteReader::new(&bytes);
        let decoded = (codec.decode)(ServerOp::UpdatePlayers, &mut reader, &fixture.env()).unwrap();
        assert_eq!(
            decoded,
            AppearanceUpdate {
                entries: vec![AppearanceEntry::Raw(bytes.clone())],
            }
            .into()
        );
    }

    #[test]
    fn ground_items_mix_places_and_clears() {
        let update = GroundItemUpdate {
            items: vec![
                GroundItemChange::Place { id: 10, x: 1, y: -1 },
                GroundItemChange::ClearTile { x: 2, y: 3 },
            ],
        };
        let bytes = roundtrip(&dialect(), ServerOp::GroundItemHandler, &update.into());
        assert_eq!(bytes.len(), 7);
    }

    #[test]
    fn world_records_stop_at_partial_tail() {
        let dialect = dialect();
        let fixture = fixture();
        let (_, codec) = dialect.resolve(ServerOp::SceneryHandler).unwrap();
        let bytes = [0, 1, 2, 3, 9, 9];
        let mut reader = ByteReader::new(&bytes);
        let decoded = (codec.decode)(ServerOp::SceneryHandler, &mut reader, &fixture.env()).unwrap();
        assert_eq!(
            decoded,
            SceneryUpdate {
                objects: vec![SceneryPlacement { id: 1, x: 2, y: 3 }],
            }
            .into()
        );
    }

    #[test]
    fn quests_are_padded() {
        let quests = QuestStages { stages: vec![1, 2] };
        let bytes = encode_with(&fixture(), &dialect(), ServerOp::Quests, &quests.into()).unwrap();
        assert_eq!(bytes.len(), QUEST_COUNT);
        assert_eq!(&bytes[..3], [1, 2, 0]);
    }

    #[test]
    fn testing_limits_shrink_lists() {
        let fixture = fixture().with_limits(CodecLimits::for_testing());
        let names = IgnoreList {
            names: (0..20).map(|i| format!("user{i}")).collect(),
        };
        let bytes = encode_with(&fixture, &dialect(), ServerOp::IgnoreList, &names.into()).unwrap();
        assert_eq!(bytes[0], 8);
    }
}
