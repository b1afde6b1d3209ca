//! Bank layout of clients that predate the trap field.

use std::sync::Arc;

use bitstream::{ByteReader, ByteWriter};
use payload::{BankTransfer, ClientOp, ClientPayload};

use super::ClientDialect;
use crate::dialect::{expect_payload, Dialect, Env, OpCodec};
use crate::error::CodecResult;

pub(super) const BANK: OpCodec<ClientOp, ClientPayload> = OpCodec::new(decode_bank, encode_bank);

pub(super) fn dialect(base: Arc<ClientDialect>) -> ClientDialect {
    Dialect::new("201", Some(base)).with(&[ClientOp::BankWithdraw, ClientOp::BankDeposit], BANK)
}

fn decode_bank(_: ClientOp, r: &mut ByteReader<'_>, _: &Env<'_>) -> CodecResult<ClientPayload> {
    Ok(BankTransfer {
        item: r.read_u16()?,
        amount: r.read_u16()?,
        trap: None,
    }
    .into())
}

fn encode_bank(op: ClientOp, p: &ClientPayload, w: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
    let transfer = expect_payload!(p, op, ClientPayload::BankTransfer);
    w.write_u16(transfer.item)?;
    w.write_u16(transfer.amount)?;
    Ok(())
}
