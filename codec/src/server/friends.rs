//! Friend layouts of servers that send the world number unshifted.

use std::sync::Arc;

use bitstream::{ByteReader, ByteWriter};
use payload::{ServerOp, ServerPayload};

use super::base::{read_friend, read_friends, write_friend, write_friends};
use super::ServerDialect;
use crate::dialect::{Dialect, Env, OpCodec};
use crate::error::CodecResult;

pub(super) fn dialect(base: Arc<ServerDialect>) -> ServerDialect {
    Dialect::new("202", Some(base))
        .with(
            &[ServerOp::FriendList],
            OpCodec::new(decode_friend_list, encode_friend_list),
        )
        .with(
            &[ServerOp::FriendUpdate],
            OpCodec::new(decode_friend, encode_friend),
        )
}

const fn raw(world: u8) -> u8 {
    world
}

fn decode_friend_list(_: ServerOp, r: &mut ByteReader<'_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    read_friends(r, raw)
}

fn encode_friend_list(
    op: ServerOp,
    p: &ServerPayload,
    w: &mut ByteWriter,
    env: &Env<'_>,
) -> CodecResult<()> {
    write_friends(op, p, w, env, raw)
}

fn decode_friend(_: ServerOp, r: &mut ByteReader<'_>, _: &Env<'_>) -> CodecResult<ServerPayload> {
    read_friend(r, raw)
}

fn encode_friend(op: ServerOp, p: &ServerPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    write_friend(op, p, w, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::roundtrip;
    use payload::FriendStatus;

    #[test]
    fn world_is_sent_as_is() {
        let dialect = dialect(Arc::new(super::super::base::dialect()));
        let friend = FriendStatus {
            name: "Zezima".into(),
            world: 1,
        };
        let bytes = roundtrip(&dialect, ServerOp::FriendUpdate, &friend.into());
        assert_eq!(bytes[8], 1);
        assert_eq!(dialect.handled_by(ServerOp::FriendUpdate), Some("202"));
        assert_eq!(dialect.handled_by(ServerOp::Inventory), Some("203"));
    }
}
