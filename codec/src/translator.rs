//! The translation entry point: raw packets in, messages out, and back.

use std::fmt;

use bitstream::{ByteReader, ByteWriter};
use payload::{ClientMessage, ClientOp, ServerMessage, ServerOp, ServerPayload};
use tracing::{debug, error, trace, warn};
use wire::{Limits as WireLimits, ProtocolVersion, RawPacket};

use crate::catalog::{ItemCatalog, StackableItems};
use crate::cipher::BlockCipher;
use crate::client::{self, ClientDialect};
use crate::compress::{MessageCompressor, NibbleCompressor};
use crate::context::ConnectionContext;
use crate::dialect::Env;
use crate::error::{CodecError, GenerateError, RejectReason, Rejection};
use crate::legacy::LegacyDictionary;
use crate::limits::CodecLimits;
use crate::server::{self, ServerDialect};

type SharedCatalog = Box<dyn ItemCatalog + Send + Sync>;
type SharedCompressor = Box<dyn MessageCompressor + Send + Sync>;
type SharedCipher = Box<dyn BlockCipher + Send + Sync>;

/// Converts between wire packets and logical messages for every supported
/// protocol version.
///
/// A translator holds only read-only configuration. One instance serves all
/// connections; per-connection state travels in [`ConnectionContext`].
pub struct Translator {
    limits: CodecLimits,
    wire_limits: WireLimits,
    catalog: SharedCatalog,
    compressor: SharedCompressor,
    dictionary: LegacyDictionary,
    cipher: Option<SharedCipher>,
}

impl Translator {
    /// A translator with default limits, an empty item catalog and no cipher.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    #[must_use]
    pub const fn limits(&self) -> &CodecLimits {
        &self.limits
    }

    #[must_use]
    pub const fn wire_limits(&self) -> &WireLimits {
        &self.wire_limits
    }

    /// Decodes a packet sent by a client.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] when the opcode is unknown to the connection's
    /// version, the length does not fit the operation, the operation belongs to
    /// the login pipeline, or a field fails to decode. A rejection concerns
    /// this packet only.
    pub fn parse(&self, packet: &RawPacket, ctx: &ConnectionContext) -> Result<ClientMessage, Rejection> {
        let version = ctx.version;
        let opcode = packet.opcode;
        let reject = |reason| Rejection::new(version, opcode, reason);

        let Some(op) = wire::inbound(version).resolve(opcode) else {
            warn!(version = %version, opcode, len = packet.len(), "unknown opcode");
            return Err(reject(RejectReason::UnknownOpcode));
        };
        let shape = wire::client_shape(version, op);
        if !shape.accepts(packet.len()) {
            debug!(version = %version, opcode, op = %op, len = packet.len(), ?shape, "malformed length");
            return Err(reject(RejectReason::MalformedLength {
                len: packet.len(),
                shape,
            }));
        }
        if op.is_session_layer() {
            debug!(version = %version, op = %op, "session-layer operation");
            return Err(reject(RejectReason::SessionLayer { op: op.name() }));
        }
        let Some((handler, codec)) = client::dialect(version).resolve(op) else {
            error!(version = %version, op = %op, "no codec for operation");
            return Err(reject(RejectReason::NoCodec { op: op.name() }));
        };

        let mut reader = ByteReader::new(&packet.payload);
        let decoded = (codec.decode)(op, &mut reader, &self.env(ctx))
            .and_then(|payload| Ok(ClientMessage::new(op, payload)?));
        match decoded {
            Ok(message) => {
                if !reader.is_empty() {
                    trace!(version = %version, op = %op, trailing = reader.remaining(), "ignored trailing bytes");
                }
                trace!(version = %version, op = %op, dialect = handler, "parsed");
                Ok(message)
            }
            Err(err) => {
                log_codec_failure(version, op.name(), &err, "decode failed");
                Err(reject(RejectReason::Decode(err)))
            }
        }
    }

    /// Encodes a server message for the connection's version.
    ///
    /// Returns `Ok(None)` when the operation has no wire form in that version;
    /// the caller then sends nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerateError`] if encoding fails. No partial packet is
    /// produced.
    pub fn generate(
        &self,
        message: &ServerMessage,
        ctx: &ConnectionContext,
    ) -> Result<Option<RawPacket>, GenerateError> {
        let version = ctx.version;
        let op = message.op();
        let Some(opcode) = wire::outbound(version).and_then(|registry| registry.wire_code_for(op)) else {
            trace!(version = %version, op = %op, "no outbound opcode");
            return Ok(None);
        };
        let Some(dialect) = server::dialect(version) else {
            trace!(version = %version, op = %op, "no outbound dialect");
            return Ok(None);
        };
        let Some((_, codec)) = dialect.resolve(op) else {
            error!(version = %version, op = %op, "no codec for operation");
            return Err(CodecError::NoCodec { op: op.name() }.into());
        };

        let mut writer = ByteWriter::new();
        let encoded = (codec.encode)(op, message.payload(), &mut writer, &self.env(ctx))
            .and_then(|()| Ok(writer.finish()?));
        match encoded {
            Ok(bytes) => Ok(Some(RawPacket::new(opcode, bytes))),
            Err(err) => {
                log_codec_failure(version, op.name(), &err, "encode failed");
                Err(err.into())
            }
        }
    }

    /// Pairs `op` with `payload` and generates it.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Mismatch`] if the payload does not belong to
    /// `op`, otherwise as [`generate`](Self::generate).
    pub fn generate_message(
        &self,
        op: ServerOp,
        payload: ServerPayload,
        ctx: &ConnectionContext,
    ) -> Result<Option<RawPacket>, GenerateError> {
        let message = ServerMessage::new(op, payload).map_err(|mismatch| {
            error!(version = %ctx.version, op = %op, found = mismatch.found, "payload does not fit operation");
            GenerateError::Mismatch(mismatch)
        })?;
        self.generate(&message, ctx)
    }

    /// Builds the packet a client of the connection's version would send.
    ///
    /// This is the client half of [`parse`](Self::parse), used to replay
    /// captures and to test the inbound dialects.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerateError`] if the dialect cannot encode the message.
    pub fn encode_client(
        &self,
        message: &ClientMessage,
        ctx: &ConnectionContext,
    ) -> Result<Option<RawPacket>, GenerateError> {
        let version = ctx.version;
        let op = message.op();
        let Some(opcode) = wire::inbound(version).wire_code_for(op) else {
            trace!(version = %version, op = %op, "no inbound opcode");
            return Ok(None);
        };
        let Some((_, codec)) = client::dialect(version).resolve(op) else {
            return Err(CodecError::NoCodec { op: op.name() }.into());
        };
        let mut writer = ByteWriter::new();
        (codec.encode)(op, message.payload(), &mut writer, &self.env(ctx))?;
        Ok(Some(RawPacket::new(opcode, writer.finish().map_err(CodecError::from)?)))
    }

    /// Decodes a packet a server sent, the client half of
    /// [`generate`](Self::generate).
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if the version has no outbound table, the
    /// opcode is unknown, or a field fails to decode.
    pub fn decode_server(
        &self,
        packet: &RawPacket,
        ctx: &ConnectionContext,
    ) -> Result<ServerMessage, Rejection> {
        let version = ctx.version;
        let reject = |reason| Rejection::new(version, packet.opcode, reason);
        let Some(op) = wire::outbound(version).and_then(|registry| registry.resolve(packet.opcode))
        else {
            debug!(version = %version, opcode = packet.opcode, "unknown server opcode");
            return Err(reject(RejectReason::UnknownOpcode));
        };
        let Some((_, codec)) = server::dialect(version).and_then(|dialect| dialect.resolve(op)) else {
            return Err(reject(RejectReason::NoCodec { op: op.name() }));
        };
        let mut reader = ByteReader::new(&packet.payload);
        (codec.decode)(op, &mut reader, &self.env(ctx))
            .and_then(|payload| Ok(ServerMessage::new(op, payload)?))
            .map_err(|err| {
                log_codec_failure(version, op.name(), &err, "decode failed");
                reject(RejectReason::Decode(err))
            })
    }

    /// Returns `true` if a client payload of `len` bytes under `opcode` may be
    /// handed to [`parse`](Self::parse).
    #[must_use]
    pub fn is_well_formed(&self, version: ProtocolVersion, opcode: u8, len: usize) -> bool {
        wire::is_well_formed(version, opcode, len) && len <= self.wire_limits.max_packet_bytes
    }

    /// Inbound dialect of `version`.
    #[must_use]
    pub fn client_dialect(version: ProtocolVersion) -> &'static ClientDialect {
        client::dialect(version)
    }

    /// Outbound dialect of `version`; the oldest client has none.
    #[must_use]
    pub fn server_dialect(version: ProtocolVersion) -> Option<&'static ServerDialect> {
        server::dialect(version)
    }

    /// Whether [`parse`](Self::parse) decodes `op` for `version`.
    #[must_use]
    pub fn handles(&self, version: ProtocolVersion, op: ClientOp) -> bool {
        !op.is_session_layer() && client::dialect(version).handled_by(op).is_some()
    }

    fn env<'a>(&'a self, ctx: &'a ConnectionContext) -> Env<'a> {
        Env {
            limits: &self.limits,
            catalog: self.catalog.as_ref(),
            compressor: self.compressor.as_ref(),
            dictionary: &self.dictionary,
            cipher: self.cipher.as_deref().map(|c| c as &dyn BlockCipher),
            ctx,
        }
    }
}

fn log_codec_failure(version: ProtocolVersion, op: &'static str, err: &CodecError, message: &str) {
    if err.is_programming_error() {
        error!(version = %version, op, error = %err, "{message}");
    } else {
        debug!(version = %version, op, error = %err, "{message}");
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("limits", &self.limits)
            .field("wire_limits", &self.wire_limits)
            .field("has_cipher", &self.cipher.is_some())
            .finish_non_exhaustive()
    }
}

/// Configures a [`Translator`].
#[derive(Default)]
pub struct TranslatorBuilder {
    limits: CodecLimits,
    wire_limits: WireLimits,
    catalog: Option<SharedCatalog>,
    compressor: Option<SharedCompressor>,
    dictionary: Option<LegacyDictionary>,
    cipher: Option<SharedCipher>,
}

impl TranslatorBuilder {
    #[must_use]
    pub fn with_limits(mut self, limits: CodecLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_wire_limits(mut self, limits: WireLimits) -> Self {
        self.wire_limits = limits;
        self
    }

    /// Item definitions consulted when decoding inventories.
    #[must_use]
    pub fn with_catalog(mut self, catalog: impl ItemCatalog + Send + Sync + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    /// Cipher for password and recovery blocks. Without one, secure
    /// operations fail with [`CodecError::CipherUnavailable`].
    #[must_use]
    pub fn with_cipher(mut self, cipher: impl BlockCipher + Send + Sync + 'static) -> Self {
        self.cipher = Some(Box::new(cipher));
        self
    }

    #[must_use]
    pub fn with_compressor(mut self, compressor: impl MessageCompressor + Send + Sync + 'static) -> Self {
        self.compressor = Some(Box::new(compressor));
        self
    }

    #[must_use]
    pub fn with_dictionary(mut self, dictionary: LegacyDictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    #[must_use]
    pub fn build(self) -> Translator {
        Translator {
            limits: self.limits,
            wire_limits: self.wire_limits,
            catalog: self
                .catalog
                .unwrap_or_else(|| Box::new(StackableItems::new())),
            compressor: self.compressor.unwrap_or_else(|| Box::new(NibbleCompressor)),
            dictionary: self.dictionary.unwrap_or_default(),
            cipher: self.cipher,
        }
    }
}

impl fmt::Debug for TranslatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorBuilder")
            .field("limits", &self.limits)
            .field("wire_limits", &self.wire_limits)
            .field("has_cipher", &self.cipher.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::XorCipher;
    use payload::{
        BankTransfer, ChatText, InventoryItem, InventorySlotUpdate, NoPayload, PasswordChange,
        SecureField, TextMessage, TilePoint, WalkRequest,
    };

    fn translator() -> Translator {
        Translator::builder()
            .with_cipher(XorCipher::new(*b"secret"))
            .build()
    }

    fn client_roundtrip(version: ProtocolVersion, message: ClientMessage) {
        let translator = translator();
        let ctx = ConnectionContext::new(version).with_session(42);
        let packet = translator.encode_client(&message, &ctx).unwrap().unwrap();
        assert!(translator.is_well_formed(version, packet.opcode, packet.len()));
        assert_eq!(translator.parse(&packet, &ctx).unwrap(), message);
    }

    #[test]
    fn walk_roundtrips_on_every_version() {
        let message = ClientMessage::new(
            ClientOp::WalkToPoint,
            WalkRequest {
                destination: TilePoint::new(120, 648),
                steps: vec![(1, -1), (2, 0)],
            }
            .into(),
        )
        .unwrap();
        for version in ProtocolVersion::ALL {
            client_roundtrip(version, message.clone());
        }
    }

    #[test]
    fn password_change_roundtrips() {
        let message = ClientMessage::new(
            ClientOp::ChangePassword,
            PasswordChange {
                old_password: SecureField::from("hunter2"),
                new_password: SecureField::from("new password"),
            }
            .into(),
        )
        .unwrap();
        // Only the 115 client sends credentials in game.
        assert!(wire::inbound(ProtocolVersion::V203)
            .wire_code_for(ClientOp::ChangePassword)
            .is_none());
        client_roundtrip(ProtocolVersion::V115, message);
    }

    #[test]
    fn unknown_opcode_is_rejected() {
        let translator = translator();
        let ctx = ConnectionContext::new(ProtocolVersion::V203);
        let err = translator.parse(&RawPacket::new(250, vec![0; 4]), &ctx).unwrap_err();
        assert_eq!(err.reason, RejectReason::UnknownOpcode);
        assert_eq!(err.opcode, 250);
        assert!(!translator.is_well_formed(ProtocolVersion::V203, 250, 4));
    }

    #[test]
    fn malformed_length_is_rejected_before_decode() {
        let translator = translator();
        let ctx = ConnectionContext::new(ProtocolVersion::V201);
        let opcode = wire::inbound(ProtocolVersion::V201)
            .wire_code_for(ClientOp::BankWithdraw)
            .unwrap();
        let err = translator.parse(&RawPacket::new(opcode, vec![0; 8]), &ctx).unwrap_err();
        assert!(matches!(err.reason, RejectReason::MalformedLength { len: 8, .. }));
    }

    #[test]
    fn truncated_payload_is_a_decode_rejection() {
        let translator = translator();
        let ctx = ConnectionContext::new(ProtocolVersion::V203);
        let opcode = wire::inbound(ProtocolVersion::V203)
            .wire_code_for(ClientOp::KnownPlayers)
            .unwrap();
        let err = translator.parse(&RawPacket::new(opcode, vec![0, 5]), &ctx).unwrap_err();
        assert!(matches!(err.reason, RejectReason::Decode(_)));
    }

    #[test]
    fn session_layer_ops_are_not_decoded() {
        let translator = translator();
        let ctx = ConnectionContext::new(ProtocolVersion::V203);
        let Some(opcode) = wire::inbound(ProtocolVersion::V203).wire_code_for(ClientOp::Login) else {
            return;
        };
        let err = translator.parse(&RawPacket::new(opcode, vec![0; 64]), &ctx).unwrap_err();
        assert!(matches!(
            err.reason,
            RejectReason::SessionLayer { .. } | RejectReason::MalformedLength { .. }
        ));
        assert!(!translator.handles(ProtocolVersion::V203, ClientOp::Login));
    }

    #[test]
    fn legacy_has_no_outbound_packets() {
        let translator = translator();
        let ctx = ConnectionContext::new(ProtocolVersion::V115);
        let message = ServerMessage::new(ServerOp::Death, NoPayload.into()).unwrap();
        assert_eq!(translator.generate(&message, &ctx).unwrap(), None);
    }

    #[test]
    fn generate_then_decode_server() {
        let translator = translator();
        let ctx = ConnectionContext::new(ProtocolVersion::V203);
        let message = ServerMessage::new(
            ServerOp::InventoryUpdateItem,
            InventorySlotUpdate {
                slot: 0,
                item: InventoryItem::EMPTY,
            }
            .into(),
        )
        .unwrap();
        let packet = translator.generate(&message, &ctx).unwrap().unwrap();
        assert_eq!(packet.payload, [0; 5]);
        assert_eq!(translator.decode_server(&packet, &ctx).unwrap(), message);
    }

    #[test]
    fn mismatched_payload_is_refused() {
        let translator = translator();
        let ctx = ConnectionContext::new(ProtocolVersion::V203);
        let err = translator
            .generate_message(ServerOp::Box, NoPayload.into(), &ctx)
            .unwrap_err();
        assert!(matches!(err, GenerateError::Mismatch(_)));
        let packet = translator
            .generate_message(ServerOp::Box, TextMessage::new("hi").into(), &ctx)
            .unwrap();
        assert!(packet.is_some());
    }

    #[test]
    fn legacy_chat_cannot_be_encoded() {
        let translator = translator();
        let ctx = ConnectionContext::new(ProtocolVersion::V115);
        let message =
            ClientMessage::new(ClientOp::ChatMessage, ChatText { message: "hi".into() }.into()).unwrap();
        let err = translator.encode_client(&message, &ctx).unwrap_err();
        assert!(matches!(err, GenerateError::Encode(CodecError::NoEncoder { .. })));
    }

    #[test]
    fn missing_cipher_rejects_secure_ops() {
        let sender = translator();
        let receiver = Translator::new();
        let ctx = ConnectionContext::new(ProtocolVersion::V115).with_session(42);
        let message = ClientMessage::new(
            ClientOp::ChangePassword,
            PasswordChange {
                old_password: SecureField::from("a"),
                new_password: SecureField::from("b"),
            }
            .into(),
        )
        .unwrap();
        let packet = sender.encode_client(&message, &ctx).unwrap().unwrap();
        let err = receiver.parse(&packet, &ctx).unwrap_err();
        assert_eq!(err.reason, RejectReason::Decode(CodecError::CipherUnavailable));
    }

    #[test]
    fn bank_trap_is_version_dependent() {
        let translator = translator();
        let transfer = BankTransfer {
            item: 10,
            amount: 5,
            trap: Some(0x1234),
        };
        let message = ClientMessage::new(ClientOp::BankDeposit, transfer.into()).unwrap();
        let v203 = ConnectionContext::new(ProtocolVersion::V203);
        assert_eq!(translator.encode_client(&message, &v203).unwrap().unwrap().len(), 8);
        let v199 = ConnectionContext::new(ProtocolVersion::V199);
        let packet = translator.encode_client(&message, &v199).unwrap().unwrap();
        assert_eq!(packet.len(), 4);
        let parsed = translator.parse(&packet, &v199).unwrap();
        assert_eq!(
            parsed.payload(),
            &BankTransfer {
                item: 10,
                amount: 5,
                trap: None,
            }
            .into()
        );
    }

    #[test]
    fn wire_limit_bounds_well_formedness() {
        let translator = Translator::builder()
            .with_wire_limits(WireLimits::for_testing())
            .build();
        let opcode = wire::inbound(ProtocolVersion::V203)
            .wire_code_for(ClientOp::ChatMessage)
            .unwrap();
        assert!(translator.is_well_formed(ProtocolVersion::V203, opcode, 100));
        assert!(!translator.is_well_formed(ProtocolVersion::V203, opcode, 4000));
    }
}
