//! Fixtures shared by the dialect unit tests.

use std::fmt::Debug;
use std::hash::Hash;

use bitstream::{ByteReader, ByteWriter};
use wire::ProtocolVersion;

use crate::catalog::StackableItems;
use crate::cipher::{BlockCipher, XorCipher};
use crate::compress::NibbleCompressor;
use crate::context::ConnectionContext;
use crate::dialect::{Dialect, Env};
use crate::error::CodecResult;
use crate::legacy::LegacyDictionary;
use crate::limits::CodecLimits;

pub(crate) const TEST_KEY: &[u8] = b"pvtl-test-key";

/// Owns everything an [`Env`] borrows.
pub(crate) struct EnvFixture {
    limits: CodecLimits,
    catalog: StackableItems,
    dictionary: LegacyDictionary,
    cipher: Option<XorCipher>,
    ctx: ConnectionContext,
}

impl EnvFixture {
    pub(crate) fn new(version: ProtocolVersion) -> Self {
        Self {
            limits: CodecLimits::default(),
            catalog: StackableItems::new(),
            dictionary: LegacyDictionary::default(),
            cipher: Some(XorCipher::new(TEST_KEY)),
            ctx: ConnectionContext::new(version),
        }
    }

    pub(crate) fn with_session(mut self, session_id: i32) -> Self {
        self.ctx = self.ctx.with_session(session_id);
        self
    }

    pub(crate) fn without_cipher(mut self) -> Self {
        self.cipher = None;
        self
    }

    pub(crate) fn with_limits(mut self, limits: CodecLimits) -> Self {
        self.limits = limits;
        self
    }

    pub(crate) fn with_stackable(mut self, ids: &[u16]) -> Self {
        self.catalog = ids.iter().copied().collect();
        self
    }

    pub(crate) fn env(&self) -> Env<'_> {
        Env {
            limits: &self.limits,
            catalog: &self.catalog,
            compressor: &NibbleCompressor,
            dictionary: &self.dictionary,
            cipher: self.cipher.as_ref().map(|c| c as &dyn BlockCipher),
            ctx: &self.ctx,
        }
    }
}

/// Encodes `payload` with the codec `dialect` resolves for `op`.
pub(crate) fn encode_with<Op, P>(
    fixture: &EnvFixture,
    dialect: &Dialect<Op, P>,
    op: Op,
    payload: &P,
) -> CodecResult<Vec<u8>>
where
    Op: Copy + Eq + Hash + Debug,
{
    let (_, codec) = dialect
        .resolve(op)
        .unwrap_or_else(|| panic!("no codec for {op:?}"));
    let mut writer = ByteWriter::new();
    (codec.encode)(op, payload, &mut writer, &fixture.env())?;
    Ok(writer.finish()?)
}

/// Encodes then decodes, asserting the payload survives and every byte is
/// consumed. Returns the encoded bytes.
pub(crate) fn roundtrip_with<Op, P>(
    fixture: &EnvFixture,
    dialect: &Dialect<Op, P>,
    op: Op,
    payload: &P,
) -> Vec<u8>
where
    Op: Copy + Eq + Hash + Debug,
    P: PartialEq + Debug,
{
    let bytes = encode_with(fixture, dialect, op, payload).unwrap();
    let (_, codec) = dialect.resolve(op).unwrap();
    let mut reader = ByteReader::new(&bytes);
    let decoded = (codec.decode)(op, &mut reader, &fixture.env()).unwrap();
    assert_eq!(&decoded, payload, "{op:?} did not survive a roundtrip");
    assert!(reader.is_empty(), "{op:?} left {} bytes", reader.remaining());
    bytes
}

/// [`roundtrip_with`] against a default fixture.
pub(crate) fn roundtrip<Op, P>(dialect: &Dialect<Op, P>, op: Op, payload: &P) -> Vec<u8>
where
    Op: Copy + Eq + Hash + Debug,
    P: PartialEq + Debug,
{
    roundtrip_with(&EnvFixture::new(ProtocolVersion::V203), dialect, op, payload)
}
