//! Version dialects and the translator for the RSC protocol translation layer.
//!
//! This is the main codec crate that ties together bitstream, payload, and wire
//! to turn raw packets of any supported client revision into logical messages
//! and back.
//!
//! # Features
//!
//! - Per-version dialects that override only the layouts that changed
//! - Multi-block credential fields with an explicit errored state
//! - The 115 client's dictionary chat codec and profanity filter
//! - Chat compression, name hashing and IP slot encoding
//!
//! # Design Principles
//!
//! - **One bad packet, one rejection** - Decode failures never escape the packet.
//! - **Built once, shared everywhere** - Dialect tables are immutable after first use.
//! - **Lossy only where the client is** - Truncation and rescaling happen in
//!   exactly the layouts whose wire width demands them, and are documented there.

mod catalog;
mod cipher;
mod client;
mod compress;
mod context;
mod dialect;
mod error;
mod ip;
pub mod legacy;
mod limits;
mod mobs;
mod names;
mod secure;
mod server;
#[cfg(test)]
mod test_support;
mod translator;

pub use catalog::{ItemCatalog, StackableItems};
pub use cipher::{BlockCipher, CipherError, XorCipher};
pub use client::ClientDialect;
pub use compress::{MessageCompressor, NibbleCompressor};
pub use context::ConnectionContext;
pub use dialect::Dialect;
pub use error::{CodecError, CodecResult, GenerateError, LimitKind, RejectReason, Rejection};
pub use ip::{decode_ip_slot, encode_ip_slot};
pub use legacy::LegacyDictionary;
pub use limits::CodecLimits;
pub use names::{decode_name, encode_name};
pub use secure::{blocks_for, BLOCK_LEN, CHUNK_LEN};
pub use server::ServerDialect;
pub use translator::{Translator, TranslatorBuilder};
pub use wire::Limits as WireLimits;
