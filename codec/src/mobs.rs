//! Bit-packed position batches for players and NPCs.

use bitstream::{ByteReader, ByteWriter};
use payload::{AddedNpc, AddedPlayer, KnownMobUpdate, NpcPositions, PlayerPositions};

use crate::error::{CodecError, CodecResult};

const REGION_X_BITS: u8 = 11;
const REGION_Y_BITS: u8 = 13;
const SPRITE_BITS: u8 = 4;
const COUNT_BITS: u8 = 8;
const DIRECTION_BITS: u8 = 3;
const OFFSET_BITS: u8 = 5;
const PLAYER_INDEX_BITS: u8 = 11;
const NPC_INDEX_BITS: u8 = 12;
const NPC_TYPE_BITS: u8 = 10;

/// A turned sprite at or above this value means the mob left view.
const REMOVED_SPRITE: u8 = 12;

const ADDED_PLAYER_BITS: usize = (PLAYER_INDEX_BITS + 2 * OFFSET_BITS + SPRITE_BITS + 1) as usize;
const ADDED_NPC_BITS: usize =
    (NPC_INDEX_BITS + 2 * OFFSET_BITS + SPRITE_BITS + NPC_TYPE_BITS) as usize;

pub(crate) fn write_players(writer: &mut ByteWriter, positions: &PlayerPositions) -> CodecResult<()> {
    writer.enter_bit_mode()?;
    writer.write_bits(u32::from(positions.region_x), REGION_X_BITS)?;
    writer.write_bits(u32::from(positions.region_y), REGION_Y_BITS)?;
    writer.write_bits(u32::from(positions.sprite), SPRITE_BITS)?;
    write_known(writer, &positions.known)?;
    for added in &positions.added {
        writer.write_bits(u32::from(added.server_index), PLAYER_INDEX_BITS)?;
        write_offset(writer, "offset_x", added.offset_x)?;
        write_offset(writer, "offset_y", added.offset_y)?;
        writer.write_bits(u32::from(added.sprite), SPRITE_BITS)?;
        writer.write_bits(u32::from(added.needs_appearance), 1)?;
    }
    writer.exit_bit_mode()?;
    Ok(())
}

pub(crate) fn read_players(reader: &mut ByteReader<'_>) -> CodecResult<PlayerPositions> {
    reader.enter_bit_mode()?;
    let region_x = narrow(reader.read_bits(REGION_X_BITS)?);
    let region_y = narrow(reader.read_bits(REGION_Y_BITS)?);
    let sprite = narrow(reader.read_bits(SPRITE_BITS)?);
    let known = read_known(reader)?;
    let mut added = Vec::new();
    while reader.bits_remaining() >= ADDED_PLAYER_BITS {
        added.push(AddedPlayer {
            server_index: narrow(reader.read_bits(PLAYER_INDEX_BITS)?),
            offset_x: read_offset(reader)?,
            offset_y: read_offset(reader)?,
            sprite: narrow(reader.read_bits(SPRITE_BITS)?),
            needs_appearance: reader.read_bits(1)? == 1,
        });
    }
    reader.exit_bit_mode()?;
    Ok(PlayerPositions {
        region_x,
        region_y,
        sprite,
        known,
        added,
    })
}

pub(crate) fn write_npcs(writer: &mut ByteWriter, positions: &NpcPositions) -> CodecResult<()> {
    writer.enter_bit_mode()?;
    write_known(writer, &positions.known)?;
    for added in &positions.added {
        writer.write_bits(u32::from(added.server_index), NPC_INDEX_BITS)?;
        write_offset(writer, "offset_x", added.offset_x)?;
        write_offset(writer, "offset_y", added.offset_y)?;
        writer.write_bits(u32::from(added.sprite), SPRITE_BITS)?;
        writer.write_bits(u32::from(added.npc_type), NPC_TYPE_BITS)?;
    }
    writer.exit_bit_mode()?;
    Ok(())
}

pub(crate) fn read_npcs(reader: &mut ByteReader<'_>) -> CodecResult<NpcPositions> {
    reader.enter_bit_mode()?;
    let known = read_known(reader)?;
    let mut added = Vec::new();
    while reader.bits_remaining() >= ADDED_NPC_BITS {
        added.push(AddedNpc {
            server_index: narrow(reader.read_bits(NPC_INDEX_BITS)?),
            offset_x: read_offset(reader)?,
            offset_y: read_offset(reader)?,
            sprite: narrow(reader.read_bits(SPRITE_BITS)?),
            npc_type: narrow(reader.read_bits(NPC_TYPE_BITS)?),
        });
    }
    reader.exit_bit_mode()?;
    Ok(NpcPositions { known, added })
}

// Unlike byte-counted lists this never truncates: the client applies updates
// to its known mobs in order, so a short list desyncs every mob after the cut.
fn write_known(writer: &mut ByteWriter, known: &[KnownMobUpdate]) -> CodecResult<()> {
    let count = u8::try_from(known.len())
        .map_err(|_| CodecError::out_of_range("known_count", known.len() as i64, 0, 255))?;
    writer.write_bits(u32::from(count), COUNT_BITS)?;
    for update in known {
        match *update {
            KnownMobUpdate::Unchanged => writer.write_bits(0, 1)?,
            KnownMobUpdate::Moved { direction } => {
                writer.write_bits(0b10, 2)?;
                writer.write_bits(u32::from(direction), DIRECTION_BITS)?;
            }
            KnownMobUpdate::Turned { sprite } => {
                if sprite >= REMOVED_SPRITE {
                    return Err(CodecError::out_of_range(
                        "sprite",
                        i64::from(sprite),
                        0,
                        i64::from(REMOVED_SPRITE - 1),
                    ));
                }
                writer.write_bits(0b11, 2)?;
                writer.write_bits(u32::from(sprite), SPRITE_BITS)?;
            }
            KnownMobUpdate::Removed => {
                writer.write_bits(0b11, 2)?;
                writer.write_bits(u32::from(REMOVED_SPRITE), SPRITE_BITS)?;
            }
        }
    }
    Ok(())
}

fn read_known(reader: &mut ByteReader<'_>) -> CodecResult<Vec<KnownMobUpdate>> {
    let count = reader.read_bits(COUNT_BITS)?;
    let mut known = Vec::with_capacity(count as usize);
    for _ in 0..count {
        if reader.read_bits(1)? == 0 {
            known.push(KnownMobUpdate::Unchanged);
            continue;
        }
        let update = if reader.read_bits(1)? == 0 {
            KnownMobUpdate::Moved {
                direction: narrow(reader.read_bits(DIRECTION_BITS)?),
            }
        } else {
            let sprite: u8 = narrow(reader.read_bits(SPRITE_BITS)?);
            if sprite >= REMOVED_SPRITE {
                KnownMobUpdate::Removed
            } else {
                KnownMobUpdate::Turned { sprite }
            }
        };
        known.push(update);
    }
    Ok(known)
}

fn write_offset(writer: &mut ByteWriter, field: &'static str, offset: i8) -> CodecResult<()> {
    if !(-16..=15).contains(&offset) {
        return Err(CodecError::out_of_range(field, i64::from(offset), -16, 15));
    }
    writer.write_bits(u32::from(offset as u8) & 0x1F, OFFSET_BITS)?;
    Ok(())
}

fn read_offset(reader: &mut ByteReader<'_>) -> CodecResult<i8> {
    let raw = reader.read_bits(OFFSET_BITS)? as i8;
    Ok(if raw > 15 { raw - 32 } else { raw })
}

/// Bit reads are bounded by their width, so the narrowing cannot lose data.
fn narrow<T: TryFrom<u32> + Default>(value: u32) -> T {
    T::try_from(value).unwrap_or_default()
}
