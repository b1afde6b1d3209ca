//! Client layouts of the newest dialect. Every other inbound dialect
//! delegates here for the operations it does not override.

use bitstream::{ByteReader, ByteWriter};
use payload::{
    AbuseReport, AppearanceChange, BankTransfer, BoundaryTarget, CastTarget, ChatText, ClientOp,
    ClientPayload, CombatStyle, CommandText, DialogAnswer, DuelRules, GameSettingChange,
    GroundItemTake, ItemIndex, ItemOffer, ItemOnBoundary, ItemOnGroundItem, ItemOnItem, ItemOnMob,
    ItemOnScenery, ItemStack, KnownPlayer, KnownPlayers, MobTarget, NoPayload, PasswordChange,
    PlayerName, PrayerToggle, PrivacySettings, PrivateMessageSend, RecoveryEntry, RecoverySetup,
    SecureField, ShopTrade, SleepwordGuess, SpellCast, TilePoint, WalkRequest,
};

use super::ClientDialect;
use crate::dialect::{expect_payload, Dialect, Env, OpCodec};
use crate::error::{CodecError, CodecResult, LimitKind};
use crate::names::{decode_name, encode_name};
use crate::secure::{blocks_for, field_text, padded, BlockReader, BlockWriter, CHUNK_LEN};

/// Characters of the old password at the front of the change-password text.
const OLD_PASSWORD_LEN: usize = 20;
/// Characters of the new password that follow it.
const NEW_PASSWORD_LEN: usize = 22;
const PASSWORD_BLOCKS: usize = (OLD_PASSWORD_LEN + NEW_PASSWORD_LEN) / CHUNK_LEN;
/// Question/answer pairs in a recovery setup.
const RECOVERY_ENTRIES: usize = 5;
/// Bit the client folds into every abuse-report reason.
const ABUSE_REASON_FLAG: u8 = 0x20;

pub(super) fn dialect() -> ClientDialect {
    use ClientOp as Op;

    Dialect::new("203", None)
        .with(
            &[
                Op::Heartbeat,
                Op::ConfirmLogout,
                Op::Logout,
                Op::DuelFirstAccepted,
                Op::DuelSecondAccepted,
                Op::DuelDeclined,
                Op::ShopClose,
                Op::PlayerAcceptedInitTradeRequest,
                Op::PlayerDeclinedTrade,
                Op::PlayerAcceptedTrade,
                Op::BankClose,
            ],
            OpCodec::new(decode_empty, encode_empty),
        )
        .with(
            &[Op::WalkToEntity, Op::WalkToPoint],
            OpCodec::new(decode_walk, encode_walk),
        )
        .with(
            &[Op::Blink, Op::ObjectCommand, Op::ObjectCommand2],
            OpCodec::new(decode_tile, encode_tile),
        )
        .with(
            &[Op::CombatStyleChanged],
            OpCodec::new(decode_combat_style, encode_combat_style),
        )
        .with(
            &[Op::QuestionDialogAnswer],
            OpCodec::new(decode_dialog_answer, encode_dialog_answer),
        )
        .with(
            &[Op::PlayerAppearanceChange],
            OpCodec::new(decode_appearance, encode_appearance),
        )
        .with(
            &[
                Op::SocialAddIgnore,
                Op::SocialAddFriend,
                Op::SocialRemoveFriend,
                Op::SocialRemoveIgnore,
            ],
            OpCodec::new(decode_player_name, encode_player_name),
        )
        .with(
            &[Op::SocialSendPrivateMessage],
            OpCodec::new(decode_private_message, encode_private_message),
        )
        .with(
            &[Op::DuelOfferItem, Op::PlayerAddedItemsToTradeOffer],
            OpCodec::new(decode_item_offer, encode_item_offer),
        )
        .with(
            &[Op::DuelFirstSettingsChanged],
            OpCodec::new(decode_duel_rules, encode_duel_rules),
        )
        .with(
            &[Op::InteractWithBoundary, Op::InteractWithBoundary2],
            OpCodec::new(decode_boundary, encode_boundary),
        )
        .with(
            &[
                Op::CastOnBoundary,
                Op::CastOnNpc,
                Op::PlayerCastPvp,
                Op::CastOnGroundItem,
                Op::CastOnSelf,
                Op::CastOnLand,
                Op::CastOnScenery,
                Op::CastOnInventoryItem,
            ],
            OpCodec::new(decode_cast, encode_cast),
        )
        .with(
            &[Op::UseWithBoundary],
            OpCodec::new(decode_item_on_boundary, encode_item_on_boundary),
        )
        .with(
            &[
                Op::NpcTalkTo,
                Op::NpcCommand,
                Op::NpcAttack,
                Op::PlayerAttack,
                Op::PlayerDuel,
                Op::PlayerInitTradeRequest,
                Op::PlayerFollow,
            ],
            OpCodec::new(decode_mob_target, encode_mob_target),
        )
        .with(
            &[Op::NpcUseItem, Op::PlayerUseItem],
            OpCodec::new(decode_item_on_mob, encode_item_on_mob),
        )
        .with(
            &[Op::GroundItemUseItem],
            OpCodec::new(decode_item_on_ground_item, encode_item_on_ground_item),
        )
        .with(
            &[Op::GroundItemTake],
            OpCodec::new(decode_ground_item_take, encode_ground_item_take),
        )
        .with(
            &[Op::ItemUseItem],
            OpCodec::new(decode_item_on_item, encode_item_on_item),
        )
        .with(
            &[Op::ItemUnequip, Op::ItemEquip, Op::ItemCommand, Op::ItemDrop],
            OpCodec::new(decode_item_index, encode_item_index),
        )
        .with(
            &[Op::UseItemOnScenery],
            OpCodec::new(decode_item_on_scenery, encode_item_on_scenery),
        )
        .with(
            &[Op::ShopBuy, Op::ShopSell],
            OpCodec::new(decode_shop_trade, encode_shop_trade),
        )
        .with(
            &[Op::PrayerActivated, Op::PrayerDeactivated],
            OpCodec::new(decode_prayer, encode_prayer),
        )
        .with(
            &[Op::GameSettingsChanged],
            OpCodec::new(decode_game_setting, encode_game_setting),
        )
        .with(&[Op::ChatMessage], OpCodec::new(decode_chat, encode_chat))
        .with(&[Op::Command], OpCodec::new(decode_command, encode_command))
        .with(
            &[Op::PrivacySettingsChanged],
            OpCodec::new(decode_privacy, encode_privacy),
        )
        .with(
            &[Op::ReportAbuse],
            OpCodec::new(decode_report_abuse, encode_report_abuse),
        )
        .with(
            &[Op::BankWithdraw, Op::BankDeposit],
            OpCodec::new(decode_bank, encode_bank),
        )
        .with(
            &[Op::SleepwordEntered],
            OpCodec::new(decode_sleepword, encode_sleepword),
        )
        .with(
            &[Op::KnownPlayers],
            OpCodec::new(decode_known_players, encode_known_players),
        )
        .with(
            &[Op::ChangePassword],
            OpCodec::new(decode_change_password, encode_change_password),
        )
        .with(
            &[Op::SetRecovery],
            OpCodec::new(decode_set_recovery, encode_set_recovery),
        )
}

type Reader<'r, 'b> = &'r mut ByteReader<'b>;

pub(super) fn read_tile(reader: &mut ByteReader<'_>) -> CodecResult<TilePoint> {
    Ok(TilePoint::new(reader.read_u16()?, reader.read_u16()?))
}

pub(super) fn write_tile(writer: &mut ByteWriter, tile: TilePoint) -> CodecResult<()> {
    writer.write_u16(tile.x)?;
    writer.write_u16(tile.y)?;
    Ok(())
}

fn decode_empty(_: ClientOp, _: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(NoPayload.into())
}

fn encode_empty(op: ClientOp, p: &ClientPayload, _: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    expect_payload!(p, op, ClientPayload::Empty);
    Ok(())
}

fn decode_walk(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    let destination = read_tile(r)?;
    let mut steps = Vec::with_capacity(r.remaining() / 2);
    while r.remaining() >= 2 {
        steps.push((r.read_i8()?, r.read_i8()?));
    }
    Ok(WalkRequest { destination, steps }.into())
}

fn encode_walk(op: ClientOp, p: &ClientPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let walk = expect_payload!(p, op, ClientPayload::Walk);
    write_tile(w, walk.destination)?;
    for &(dx, dy) in &walk.steps {
        w.write_i8(dx)?;
        w.write_i8(dy)?;
    }
    Ok(())
}

fn decode_tile(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(read_tile(r)?.into())
}

fn encode_tile(op: ClientOp, p: &ClientPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let tile = expect_payload!(p, op, ClientPayload::Tile);
    write_tile(w, *tile)
}

fn decode_combat_style(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(CombatStyle {
        style: r.read_i8()?,
    }
    .into())
}

fn encode_combat_style(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let style = expect_payload!(p, op, ClientPayload::CombatStyle);
    w.write_i8(style.style)?;
    Ok(())
}

fn decode_dialog_answer(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(DialogAnswer {
        option: r.read_i8()?,
    }
    .into())
}

fn encode_dialog_answer(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let answer = expect_payload!(p, op, ClientPayload::DialogAnswer);
    w.write_i8(answer.option)?;
    Ok(())
}

/// The eight designer bytes shared by every dialect.
pub(super) fn read_appearance(r: &mut ByteReader<'_>) -> CodecResult<AppearanceChange> {
    Ok(AppearanceChange {
        head_restrictions: r.read_i8()?,
        head_type: r.read_i8()?,
        body_type: r.read_i8()?,
        must_equal_2: r.read_i8()?,
        hair_colour: r.read_i8()?,
        top_colour: r.read_i8()?,
        trouser_colour: r.read_i8()?,
        skin_colour: r.read_i8()?,
        class_index: None,
    })
}

pub(super) fn write_appearance(w: &mut ByteWriter, a: &AppearanceChange) -> CodecResult<()> {
    for value in [
        a.head_restrictions,
        a.head_type,
        a.body_type,
        a.must_equal_2,
        a.hair_colour,
        a.top_colour,
        a.trouser_colour,
        a.skin_colour,
    ] {
        w.write_i8(value)?;
    }
    Ok(())
}

fn decode_appearance(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(read_appearance(r)?.into())
}

// The class byte only exists in the oldest dialect and is dropped here.
fn encode_appearance(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    write_appearance(w, expect_payload!(p, op, ClientPayload::Appearance))
}

fn decode_player_name(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(PlayerName {
        name: decode_name(r.read_i64()?),
    }
    .into())
}

fn encode_player_name(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let player = expect_payload!(p, op, ClientPayload::PlayerName);
    w.write_i64(encode_name(&player.name))?;
    Ok(())
}

fn decode_private_message(
    _: ClientOp,
    r: Reader<'_, '_>,
    env: &Env<'_>,
) -> CodecResult<ClientPayload> {
    let recipient = decode_name(r.read_i64()?);
    let message = env.compressor.decompress(r.read_rest()?)?;
    Ok(PrivateMessageSend { recipient, message }.into())
}

fn encode_private_message(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let pm = expect_payload!(p, op, ClientPayload::PrivateMessage);
    w.write_i64(encode_name(&pm.recipient))?;
    w.write_bytes(&env.compressor.compress(&pm.message))?;
    Ok(())
}

fn decode_item_offer(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    let count = r.read_u8()?;
    let items = (0..count)
        .map(|_| -> CodecResult<ItemStack> { Ok(ItemStack::new(r.read_u16()?, r.read_u32()?)) })
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(ItemOffer { items }.into())
}

fn encode_item_offer(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let offer = expect_payload!(p, op, ClientPayload::ItemOffer);
    let count = u8::try_from(offer.items.len()).map_err(|_| CodecError::LimitsExceeded {
        kind: LimitKind::ListEntries,
        limit: usize::from(u8::MAX),
        actual: offer.items.len(),
    })?;
    w.write_u8(count)?;
    for item in &offer.items {
        w.write_u16(item.id)?;
        w.write_u32(item.amount)?;
    }
    Ok(())
}

fn read_flags(r: &mut ByteReader<'_>) -> CodecResult<[bool; 4]> {
    Ok([
        r.read_u8()? != 0,
        r.read_u8()? != 0,
        r.read_u8()? != 0,
        r.read_u8()? != 0,
    ])
}

fn write_flags(w: &mut ByteWriter, flags: [bool; 4]) -> CodecResult<()> {
    for flag in flags {
        w.write_u8(u8::from(flag))?;
    }
    Ok(())
}

fn decode_duel_rules(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    let [no_retreat, no_magic, no_prayer, no_weapons] = read_flags(r)?;
    Ok(DuelRules {
        no_retreat,
        no_magic,
        no_prayer,
        no_weapons,
    }
    .into())
}

fn encode_duel_rules(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let rules = expect_payload!(p, op, ClientPayload::DuelRules);
    write_flags(
        w,
        [
            rules.no_retreat,
            rules.no_magic,
            rules.no_prayer,
            rules.no_weapons,
        ],
    )
}

fn decode_privacy(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    let [block_chat, block_private, block_trade, block_duel] = read_flags(r)?;
    Ok(PrivacySettings {
        block_chat,
        block_private,
        block_trade,
        block_duel,
    }
    .into())
}

fn encode_privacy(op: ClientOp, p: &ClientPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let privacy = expect_payload!(p, op, ClientPayload::Privacy);
    write_flags(
        w,
        [
            privacy.block_chat,
            privacy.block_private,
            privacy.block_trade,
            privacy.block_duel,
        ],
    )
}

fn decode_boundary(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(BoundaryTarget {
        tile: read_tile(r)?,
        direction: r.read_u8()?,
    }
    .into())
}

fn encode_boundary(op: ClientOp, p: &ClientPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let boundary = expect_payload!(p, op, ClientPayload::Boundary);
    write_tile(w, boundary.tile)?;
    w.write_u8(boundary.direction)?;
    Ok(())
}

fn decode_cast(op: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    let target = match op {
        ClientOp::CastOnSelf => CastTarget::Caster,
        ClientOp::CastOnNpc => CastTarget::Npc(r.read_u16()?),
        ClientOp::PlayerCastPvp => CastTarget::Player(r.read_u16()?),
        ClientOp::CastOnInventoryItem => CastTarget::InventoryItem(r.read_u16()?),
        ClientOp::CastOnLand => CastTarget::Land(read_tile(r)?),
        ClientOp::CastOnScenery => CastTarget::Scenery(read_tile(r)?),
        ClientOp::CastOnBoundary => CastTarget::Boundary {
            tile: read_tile(r)?,
            direction: r.read_u8()?,
        },
        ClientOp::CastOnGroundItem => CastTarget::GroundItem {
            tile: read_tile(r)?,
            item: r.read_u16()?,
        },
        other => return Err(CodecError::NoCodec { op: other.name() }),
    };
    let spell = r.read_u16()?;
    Ok(SpellCast { spell, target }.into())
}

fn encode_cast(op: ClientOp, p: &ClientPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let cast = expect_payload!(p, op, ClientPayload::SpellCast);
    if cast.target.op() != op {
        return Err(CodecError::TargetMismatch {
            op: op.name(),
            target_op: cast.target.op().name(),
        });
    }
    match cast.target {
        CastTarget::Caster => {}
        CastTarget::Npc(index) | CastTarget::Player(index) | CastTarget::InventoryItem(index) => {
            w.write_u16(index)?;
        }
        CastTarget::Land(tile) | CastTarget::Scenery(tile) => write_tile(w, tile)?,
        CastTarget::Boundary { tile, direction } => {
            write_tile(w, tile)?;
            w.write_u8(direction)?;
        }
        CastTarget::GroundItem { tile, item } => {
            write_tile(w, tile)?;
            w.write_u16(item)?;
        }
    }
    w.write_u16(cast.spell)?;
    Ok(())
}

fn decode_item_on_boundary(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(ItemOnBoundary {
        tile: read_tile(r)?,
        direction: r.read_u8()?,
        slot: r.read_u16()?,
    }
    .into())
}

fn encode_item_on_boundary(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let used = expect_payload!(p, op, ClientPayload::ItemOnBoundary);
    write_tile(w, used.tile)?;
    w.write_u8(used.direction)?;
    w.write_u16(used.slot)?;
    Ok(())
}

fn decode_mob_target(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(MobTarget {
        server_index: r.read_u16()?,
    }
    .into())
}

fn encode_mob_target(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let target = expect_payload!(p, op, ClientPayload::MobTarget);
    w.write_u16(target.server_index)?;
    Ok(())
}

fn decode_item_on_mob(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(ItemOnMob {
        server_index: r.read_u16()?,
        slot: r.read_u16()?,
    }
    .into())
}

fn encode_item_on_mob(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let used = expect_payload!(p, op, ClientPayload::ItemOnMob);
    w.write_u16(used.server_index)?;
    w.write_u16(used.slot)?;
    Ok(())
}

fn decode_item_on_ground_item(
    _: ClientOp,
    r: Reader<'_, '_>,
    _: &Env<'_>,
) -> CodecResult<ClientPayload> {
    Ok(ItemOnGroundItem {
        tile: read_tile(r)?,
        ground_item: r.read_u16()?,
        slot: r.read_u16()?,
    }
    .into())
}

fn encode_item_on_ground_item(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let used = expect_payload!(p, op, ClientPayload::ItemOnGroundItem);
    write_tile(w, used.tile)?;
    w.write_u16(used.ground_item)?;
    w.write_u16(used.slot)?;
    Ok(())
}

// Newer clients append bytes the server never reads.
fn decode_ground_item_take(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    let take = GroundItemTake {
        tile: read_tile(r)?,
        item: r.read_u16()?,
    };
    r.read_rest()?;
    Ok(take.into())
}

fn encode_ground_item_take(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let take = expect_payload!(p, op, ClientPayload::GroundItemTake);
    write_tile(w, take.tile)?;
    w.write_u16(take.item)?;
    Ok(())
}

fn decode_item_on_item(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(ItemOnItem {
        slot: r.read_u16()?,
        other_slot: r.read_u16()?,
    }
    .into())
}

fn encode_item_on_item(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let used = expect_payload!(p, op, ClientPayload::ItemOnItem);
    w.write_u16(used.slot)?;
    w.write_u16(used.other_slot)?;
    Ok(())
}

fn decode_item_index(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(ItemIndex {
        index: r.read_u16()?,
    }
    .into())
}

fn encode_item_index(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let item = expect_payload!(p, op, ClientPayload::ItemIndex);
    w.write_u16(item.index)?;
    Ok(())
}

fn decode_item_on_scenery(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(ItemOnScenery {
        tile: read_tile(r)?,
        slot: r.read_u16()?,
    }
    .into())
}

fn encode_item_on_scenery(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let used = expect_payload!(p, op, ClientPayload::ItemOnScenery);
    write_tile(w, used.tile)?;
    w.write_u16(used.slot)?;
    Ok(())
}

fn decode_shop_trade(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(ShopTrade {
        item: r.read_u16()?,
        stock_amount: r.read_i32()?,
    }
    .into())
}

fn encode_shop_trade(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let trade = expect_payload!(p, op, ClientPayload::ShopTrade);
    w.write_u16(trade.item)?;
    w.write_i32(trade.stock_amount)?;
    Ok(())
}

fn decode_prayer(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(PrayerToggle {
        prayer: r.read_u8()?,
    }
    .into())
}

fn encode_prayer(op: ClientOp, p: &ClientPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let prayer = expect_payload!(p, op, ClientPayload::Prayer);
    w.write_u8(prayer.prayer)?;
    Ok(())
}

fn decode_game_setting(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(GameSettingChange {
        index: r.read_u8()?,
        value: r.read_u8()?,
    }
    .into())
}

fn encode_game_setting(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let change = expect_payload!(p, op, ClientPayload::GameSetting);
    w.write_u8(change.index)?;
    w.write_u8(change.value)?;
    Ok(())
}

fn decode_chat(_: ClientOp, r: Reader<'_, '_>, env: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(ChatText {
        message: env.compressor.decompress(r.read_rest()?)?,
    }
    .into())
}

fn encode_chat(op: ClientOp, p: &ClientPayload, w: &mut ByteWriter, env: &Env<'_>) -> CodecResult<()> {
    let chat = expect_payload!(p, op, ClientPayload::Chat);
    w.write_bytes(&env.compressor.compress(&chat.message))?;
    Ok(())
}

fn decode_command(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(CommandText {
        command: r.read_str_nul()?,
    }
    .into())
}

fn encode_command(op: ClientOp, p: &ClientPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let command = expect_payload!(p, op, ClientPayload::Command);
    w.write_str_nul(&command.command)?;
    Ok(())
}

fn decode_sleepword(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(SleepwordGuess {
        word: r.read_str_nul()?,
    }
    .into())
}

fn encode_sleepword(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let guess = expect_payload!(p, op, ClientPayload::Sleepword);
    w.write_str_nul(&guess.word)?;
    Ok(())
}

fn decode_report_abuse(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(AbuseReport {
        player: decode_name(r.read_i64()?),
        reason: r.read_u8()? | ABUSE_REASON_FLAG,
        action: r.read_u8()?,
    }
    .into())
}

// The stored reason already carries the flag, so it goes out unchanged.
fn encode_report_abuse(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let report = expect_payload!(p, op, ClientPayload::ReportAbuse);
    w.write_i64(encode_name(&report.player))?;
    w.write_u8(report.reason)?;
    w.write_u8(report.action)?;
    Ok(())
}

fn decode_bank(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(BankTransfer {
        item: r.read_u16()?,
        amount: r.read_u16()?,
        trap: Some(r.read_i32()?),
    }
    .into())
}

fn encode_bank(op: ClientOp, p: &ClientPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let transfer = expect_payload!(p, op, ClientPayload::BankTransfer);
    w.write_u16(transfer.item)?;
    w.write_u16(transfer.amount)?;
    w.write_i32(transfer.trap.unwrap_or(0))?;
    Ok(())
}

fn decode_known_players(_: ClientOp, r: Reader<'_, '_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    let count = r.read_u16()?;
    let players = (0..count)
        .map(|_| -> CodecResult<KnownPlayer> {
            Ok(KnownPlayer {
                server_index: r.read_u16()?,
                appearance_id: r.read_u16()?,
            })
        })
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(KnownPlayers { players }.into())
}

fn encode_known_players(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let known = expect_payload!(p, op, ClientPayload::KnownPlayers);
    let count = u16::try_from(known.players.len()).map_err(|_| CodecError::LimitsExceeded {
        kind: LimitKind::ListEntries,
        limit: usize::from(u16::MAX),
        actual: known.players.len(),
    })?;
    w.write_u16(count)?;
    for player in &known.players {
        w.write_u16(player.server_index)?;
        w.write_u16(player.appearance_id)?;
    }
    Ok(())
}

/// Reads the six password blocks as one field. A bad block errors both
/// passwords; nothing is assembled from the blocks that did open.
pub(super) fn read_password_change(
    r: &mut ByteReader<'_>,
    env: &Env<'_>,
    seed: Option<i32>,
) -> CodecResult<PasswordChange> {
    let cipher = env.cipher.ok_or(CodecError::CipherUnavailable)?;
    let mut blocks = BlockReader::new(cipher, seed);
    let Some(text) = blocks.read_field(r, PASSWORD_BLOCKS, "password")? else {
        return Ok(PasswordChange {
            old_password: SecureField::Errored,
            new_password: SecureField::Errored,
        });
    };
    let (old, new) = text.split_at(OLD_PASSWORD_LEN.min(text.len()));
    Ok(PasswordChange {
        old_password: field_text(Some(old)),
        new_password: field_text(Some(new)),
    })
}

/// Reads five question/answer pairs. The answers share one session check:
/// a bad block in any answer errors all of them.
pub(super) fn read_recovery_setup(
    r: &mut ByteReader<'_>,
    env: &Env<'_>,
    seed: Option<i32>,
) -> CodecResult<RecoverySetup> {
    let cipher = env.cipher.ok_or(CodecError::CipherUnavailable)?;
    let mut blocks = BlockReader::new(cipher, seed);
    let mut read = Vec::with_capacity(RECOVERY_ENTRIES);
    for _ in 0..RECOVERY_ENTRIES {
        let question_len = usize::from(r.read_u8()?);
        let question = bitstream::latin1_to_string(r.read_bytes(question_len)?);
        let answer_len = usize::from(r.read_u8()?);
        let text = blocks.read_field(r, blocks_for(answer_len), "recovery_answer")?;
        read.push((question, answer_len, text));
    }
    let errored = read.iter().any(|(_, _, text)| text.is_none());
    let entries = read
        .into_iter()
        .map(|(question, answer_len, text)| {
            let answer = if errored {
                SecureField::Errored
            } else {
                field_text(text.as_deref().map(|t| &t[..answer_len.min(t.len())]))
            };
            RecoveryEntry { question, answer }
        })
        .collect();
    Ok(RecoverySetup { entries })
}

fn decode_change_password(_: ClientOp, r: Reader<'_, '_>, env: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(read_password_change(r, env, None)?.into())
}

fn decode_set_recovery(_: ClientOp, r: Reader<'_, '_>, env: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(read_recovery_setup(r, env, None)?.into())
}

fn block_writer<'c>(env: &Env<'c>) -> CodecResult<BlockWriter<'c>> {
    let cipher = env.cipher.ok_or(CodecError::CipherUnavailable)?;
    Ok(BlockWriter::new(
        cipher,
        env.ctx.session_id.unwrap_or(0),
        env.ctx.nonce,
    ))
}

pub(super) fn encode_change_password(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let change = expect_payload!(p, op, ClientPayload::ChangePassword);
    let mut text = padded("old_password", &change.old_password, OLD_PASSWORD_LEN)?;
    text.extend(padded("new_password", &change.new_password, NEW_PASSWORD_LEN)?);
    block_writer(env)?.write_field(w, &text)
}

pub(super) fn encode_set_recovery(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    let setup = expect_payload!(p, op, ClientPayload::SetRecovery);
    if setup.entries.len() != RECOVERY_ENTRIES {
        return Err(CodecError::EntryCount {
            field: "recovery_entries",
            expected: RECOVERY_ENTRIES,
            found: setup.entries.len(),
        });
    }
    let blocks = block_writer(env)?;
    for entry in &setup.entries {
        write_short_bytes(w, "question", &latin1_bytes(&entry.question))?;
        let answer = entry
            .answer
            .value()
            .ok_or(CodecError::ErroredSecureField {
                field: "recovery_answer",
            })?;
        let answer = latin1_bytes(answer);
        let len = u8::try_from(answer.len()).map_err(|_| {
            CodecError::out_of_range("recovery_answer", answer.len() as i64, 0, 255)
        })?;
        w.write_u8(len)?;
        blocks.write_field(w, &answer)?;
    }
    Ok(())
}

/// One length byte followed by the bytes themselves.
fn write_short_bytes(w: &mut ByteWriter, field: &'static str, bytes: &[u8]) -> CodecResult<()> {
    let len = u8::try_from(bytes.len())
        .map_err(|_| CodecError::out_of_range(field, bytes.len() as i64, 0, 255))?;
    w.write_u8(len)?;
    w.write_bytes(bytes)?;
    Ok(())
}

fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
