//! Version dialects: per-operation codec tables that delegate to an older or
//! newer base.
//!
//! A dialect owns only the operations whose layout differs from its delegate.
//! Lookup walks the chain until some dialect claims the operation, so the
//! base dialect is the single home of every shared layout.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use bitstream::{ByteReader, ByteWriter};

use crate::catalog::ItemCatalog;
use crate::cipher::BlockCipher;
use crate::compress::MessageCompressor;
use crate::context::ConnectionContext;
use crate::error::CodecResult;
use crate::legacy::LegacyDictionary;
use crate::limits::CodecLimits;

/// Everything a codec may consult besides the bytes themselves.
pub(crate) struct Env<'a> {
    pub limits: &'a CodecLimits,
    pub catalog: &'a dyn ItemCatalog,
    pub compressor: &'a dyn MessageCompressor,
    pub dictionary: &'a LegacyDictionary,
    pub cipher: Option<&'a dyn BlockCipher>,
    pub ctx: &'a ConnectionContext,
}

pub(crate) type DecodeFn<Op, P> = fn(Op, &mut ByteReader<'_>, &Env<'_>) -> CodecResult<P>;
pub(crate) type EncodeFn<Op, P> = fn(Op, &P, &mut ByteWriter, &Env<'_>) -> CodecResult<()>;

/// Decode and encode halves of one layout.
pub(crate) struct OpCodec<Op, P> {
    pub decode: DecodeFn<Op, P>,
    pub encode: EncodeFn<Op, P>,
}

impl<Op, P> OpCodec<Op, P> {
    pub(crate) const fn new(decode: DecodeFn<Op, P>, encode: EncodeFn<Op, P>) -> Self {
        Self { decode, encode }
    }
}

impl<Op, P> Clone for OpCodec<Op, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Op, P> Copy for OpCodec<Op, P> {}

/// One protocol revision's codecs for one direction.
pub struct Dialect<Op, P> {
    name: &'static str,
    codecs: HashMap<Op, OpCodec<Op, P>>,
    delegate: Option<Arc<Dialect<Op, P>>>,
}

impl<Op: Copy + Eq + Hash, P> Dialect<Op, P> {
    /// A dialect with no codecs of its own.
    pub(crate) fn new(name: &'static str, delegate: Option<Arc<Self>>) -> Self {
        Self {
            name,
            codecs: HashMap::new(),
            delegate,
        }
    }

    /// Registers `codec` for each of `ops`, replacing earlier entries.
    #[must_use]
    pub(crate) fn with(mut self, ops: &[Op], codec: OpCodec<Op, P>) -> Self {
        for &op in ops {
            self.codecs.insert(op, codec);
        }
        self
    }

    /// The codec for `op` and the name of the dialect that owns it.
    pub(crate) fn resolve(&self, op: Op) -> Option<(&'static str, &OpCodec<Op, P>)> {
        let mut dialect = self;
        loop {
            if let Some(codec) = dialect.codecs.get(&op) {
                return Some((dialect.name, codec));
            }
            dialect = dialect.delegate.as_deref()?;
        }
    }

    /// Label of this dialect, e.g. `"201"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Label of the dialect in the chain whose layout `op` uses.
    pub fn handled_by(&self, op: Op) -> Option<&'static str> {
        self.resolve(op).map(|(name, _)| name)
    }

    /// Operations this dialect lays out itself rather than delegating.
    pub fn own_ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.codecs.keys().copied()
    }

    /// The dialect this one falls back to.
    pub fn delegate(&self) -> Option<&Self> {
        self.delegate.as_deref()
    }

    /// Number of dialects consulted before the base, inclusive of this one.
    pub fn depth(&self) -> usize {
        1 + self.delegate.as_ref().map_or(0, |d| d.depth())
    }
}

impl<Op, P> fmt::Debug for Dialect<Op, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialect")
            .field("name", &self.name)
            .field("own_ops", &self.codecs.len())
            .field("delegate", &self.delegate.as_ref().map(|d| d.name))
            .finish()
    }
}

/// Unwraps the payload variant an operation carries, or reports a shape
/// mismatch.
macro_rules! expect_payload {
    ($payload:expr, $op:expr, $enum:ident :: $variant:ident) => {
        match $payload {
            $enum::$variant(inner) => inner,
            other => {
                return Err($crate::error::CodecError::Shape(::payload::ShapeMismatch {
                    op: $op.name(),
                    expected: Some(stringify!($variant)),
                    found: other.kind().name(),
                }))
            }
        }
    };
}

pub(crate) use expect_payload;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_one(_: u8, reader: &mut ByteReader<'_>, _: &Env<'_>) -> CodecResult<u32> {
        Ok(u32::from(reader.read_u8()?))
    }

    fn decode_two(_: u8, reader: &mut ByteReader<'_>, _: &Env<'_>) -> CodecResult<u32> {
        Ok(u32::from(reader.read_u16()?))
    }

    fn encode_nothing(_: u8, _: &u32, _: &mut ByteWriter, _: &Env<'_>) -> CodecResult<()> {
        Ok(())
    }

    fn chain() -> Dialect<u8, u32> {
        let base = Arc::new(
            Dialect::new("base", None).with(&[1, 2, 3], OpCodec::new(decode_one, encode_nothing)),
        );
        let middle = Arc::new(
            Dialect::new("middle", Some(base)).with(&[2], OpCodec::new(decode_two, encode_nothing)),
        );
        Dialect::new("leaf", Some(middle))
    }

    #[test]
    fn lookup_walks_the_chain() {
        let leaf = chain();
        assert_eq!(leaf.handled_by(1), Some("base"));
        assert_eq!(leaf.handled_by(2), Some("middle"));
        assert_eq!(leaf.handled_by(9), None);
        assert_eq!(leaf.depth(), 3);
        assert_eq!(leaf.own_ops().count(), 0);
        assert_eq!(leaf.delegate().map(Dialect::name), Some("middle"));
    }

    #[test]
    fn override_wins() {
        let leaf = chain();
        let (_, codec) = leaf.resolve(2).unwrap();
        let bytes = [0x01, 0x02];
        let mut reader = ByteReader::new(&bytes);
        let limits = CodecLimits::default();
        let catalog = crate::catalog::StackableItems::new();
        let dictionary = LegacyDictionary::default();
        let ctx = ConnectionContext::new(wire::ProtocolVersion::V203);
        let env = Env {
            limits: &limits,
            catalog: &catalog,
            compressor: &crate::compress::NibbleCompressor,
            dictionary: &dictionary,
            cipher: None,
            ctx: &ctx,
        };
        assert_eq!((codec.decode)(2, &mut reader, &env).unwrap(), 0x0102);
    }
}
