//! Overrides for the 115 client.
//!
//! Its chat is dictionary coded, and its secure blocks must carry the
//! session id agreed at login rather than whatever the first block says.

use std::sync::Arc;

use bitstream::{ByteReader, ByteWriter};
use payload::{ChatText, ClientOp, ClientPayload, PrivateMessageSend, ShopTrade};

use super::base::{
    encode_change_password, encode_set_recovery, read_appearance, read_password_change,
    read_recovery_setup, write_appearance,
};
use super::{trapless, ClientDialect};
use crate::dialect::{expect_payload, Dialect, Env, OpCodec};
use crate::error::{CodecError, CodecResult};
use crate::legacy::decode_text;
use crate::names::decode_name;

pub(super) fn dialect(base: Arc<ClientDialect>) -> ClientDialect {
    use ClientOp as Op;

    Dialect::new("115", Some(base))
        .with(
            &[Op::PlayerAppearanceChange],
            OpCodec::new(decode_appearance, encode_appearance),
        )
        .with(&[Op::ChatMessage], OpCodec::new(decode_chat, no_encoder))
        .with(
            &[Op::SocialSendPrivateMessage],
            OpCodec::new(decode_private_message, no_encoder),
        )
        .with(&[Op::BankWithdraw, Op::BankDeposit], trapless::BANK)
        .with(
            &[Op::ShopBuy, Op::ShopSell],
            OpCodec::new(decode_shop_trade, encode_shop_trade),
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

fn decode_appearance(_: ClientOp, r: &mut ByteReader<'_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    let mut appearance = read_appearance(r)?;
    appearance.class_index = Some(r.read_i8()?);
    Ok(appearance.into())
}

fn encode_appearance(
    op: ClientOp,
    p: &ClientPayload,
    w: &mut ByteWriter,
    _: &Env<'_>,
) -> CodecResult<()> {
    let appearance = expect_payload!(p, op, ClientPayload::Appearance);
    write_appearance(w, appearance)?;
    w.write_i8(appearance.class_index.unwrap_or(0))?;
    Ok(())
}

fn decode_chat(_: ClientOp, r: &mut ByteReader<'_>, env: &Env<'_>) -> CodecResult<ClientPayload> {
    let message = decode_text(r.read_rest()?, env.dictionary, env.limits.max_chat_chars);
    Ok(ChatText { message }.into())
}

fn decode_private_message(
    _: ClientOp,
    r: &mut ByteReader<'_>,
    env: &Env<'_>,
) -> CodecResult<ClientPayload> {
    let recipient = decode_name(r.read_i64()?);
    let message = decode_text(r.read_rest()?, env.dictionary, env.limits.max_chat_chars);
    Ok(PrivateMessageSend { recipient, message }.into())
}

// Dictionary coding is lossy, so legacy chat is decode-only.
fn no_encoder(op: ClientOp, _: &ClientPayload, _: &mut ByteWriter, env: &Env<'_>) -> CodecResult<()> {
    Err(CodecError::NoEncoder {
        op: op.name(),
        version: env.ctx.version,
    })
}

fn decode_shop_trade(_: ClientOp, r: &mut ByteReader<'_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(ShopTrade {
        item: r.read_u16()?,
        stock_amount: i32::from(r.read_i16()?),
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
    let stock = i16::try_from(trade.stock_amount).map_err(|_| {
        CodecError::out_of_range(
            "stock_amount",
            i64::from(trade.stock_amount),
            i64::from(i16::MIN),
            i64::from(i16::MAX),
        )
    })?;
    w.write_u16(trade.item)?;
    w.write_i16(stock)?;
    Ok(())
}

fn decode_change_password(
    _: ClientOp,
    r: &mut ByteReader<'_>,
    env: &Env<'_>,
) -> CodecResult<ClientPayload> {
    Ok(read_password_change(r, env, env.ctx.session_id)?.into())
}

fn decode_set_recovery(_: ClientOp, r: &mut ByteReader<'_>, env: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(read_recovery_setup(r, env, env.ctx.session_id)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{roundtrip_with, EnvFixture};
    use payload::{AppearanceChange, CharacterClass, PasswordChange, SecureField};
    use wire::ProtocolVersion;

    fn legacy() -> ClientDialect {
        dialect(Arc::new(super::super::base::dialect()))
    }

    #[test]
    fn appearance_carries_class() {
        let appearance = AppearanceChange {
            body_type: 2,
            must_equal_2: 2,
            class_index: Some(3),
            ..AppearanceChange::default()
        };
        let fixture = EnvFixture::new(ProtocolVersion::V115);
        let bytes = roundtrip_with(&fixture, &legacy(), ClientOp::PlayerAppearanceChange, &appearance.into());
        assert_eq!(bytes.len(), 9);
        assert_eq!(appearance.class(), Some(CharacterClass::Ranger));
    }

    #[test]
    fn chat_is_decode_only() {
        let fixture = EnvFixture::new(ProtocolVersion::V115);
        let dialect = legacy();
        let (owner, codec) = dialect.resolve(ClientOp::ChatMessage).unwrap();
        assert_eq!(owner, "115");

        let mut reader = ByteReader::new(&[7, 8]);
        let payload = (codec.decode)(ClientOp::ChatMessage, &mut reader, &fixture.env()).unwrap();
        assert_eq!(payload, ChatText { message: "Hi".into() }.into());

        let mut writer = ByteWriter::new();
        let err = (codec.encode)(ClientOp::ChatMessage, &payload, &mut writer, &fixture.env())
            .unwrap_err();
        assert!(matches!(err, CodecError::NoEncoder { version: ProtocolVersion::V115, .. }));
    }

    #[test]
    fn shop_stock_is_short() {
        let fixture = EnvFixture::new(ProtocolVersion::V115);
        let trade = ShopTrade {
            item: 10,
            stock_amount: -3,
        };
        let bytes = roundtrip_with(&fixture, &legacy(), ClientOp::ShopSell, &trade.into());
        assert_eq!(bytes, [0, 10, 255, 253]);

        let big = ShopTrade {
            item: 10,
            stock_amount: 40_000,
        };
        let mut writer = ByteWriter::new();
        assert!(encode_shop_trade(ClientOp::ShopSell, &big.into(), &mut writer, &fixture.env()).is_err());
    }

    #[test]
    fn password_blocks_must_match_login_session() {
        let change = PasswordChange {
            old_password: SecureField::from("old"),
            new_password: SecureField::from("new"),
        };
        let sender = EnvFixture::new(ProtocolVersion::V115).with_session(7);
        let mut writer = ByteWriter::new();
        encode_change_password(ClientOp::ChangePassword, &change.clone().into(), &mut writer, &sender.env()).unwrap();
        let bytes = writer.finish().unwrap();

        let receiver = EnvFixture::new(ProtocolVersion::V115).with_session(42);
        let mut reader = ByteReader::new(&bytes);
        let payload =
            decode_change_password(ClientOp::ChangePassword, &mut reader, &receiver.env()).unwrap();
        assert_eq!(
            payload,
            PasswordChange {
                old_password: SecureField::Errored,
                new_password: SecureField::Errored,
            }
            .into()
        );
        assert!(reader.is_empty());

        let mut reader = ByteReader::new(&bytes);
        let payload =
            decode_change_password(ClientOp::ChangePassword, &mut reader, &sender.env()).unwrap();
        assert_eq!(payload, change.into());
    }
}
