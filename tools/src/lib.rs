//! Inspection tools for the RSC protocol translation layer.
//!
//! This crate provides utilities for looking at captured traffic:
//!
//! - Decode a raw frame of any version into JSON
//! - Dump the opcode tables of a version with their fingerprints
//! - Run the length validator on an opcode
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the translator is doing.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use codec::{ConnectionContext, LegacyDictionary, StackableItems, Translator};
use serde::Serialize;
use wire::{LogicalOp, OpcodeRegistry, ProtocolVersion, RawPacket};

/// Which side sent the captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Client to server.
    In,
    /// Server to client.
    Out,
}

/// Outcome of decoding one frame.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport {
    pub version: u16,
    pub direction: Direction,
    pub opcode: u8,
    pub payload_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
}

impl DecodeReport {
    #[must_use]
    pub const fn is_decoded(&self) -> bool {
        self.message.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OpcodeEntry {
    pub opcode: u8,
    pub op: &'static str,
}

/// One direction of a version's opcode table.
#[derive(Debug, Clone, Serialize)]
pub struct OpcodeTable {
    pub version: u16,
    pub direction: Direction,
    pub fingerprint: String,
    pub entries: Vec<OpcodeEntry>,
}

/// Validator verdict for one opcode and length.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub version: u16,
    pub opcode: u8,
    pub len: usize,
    pub well_formed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

/// Maps a client revision number such as `203` to its version.
pub fn parse_version(number: u16) -> Result<ProtocolVersion> {
    ProtocolVersion::from_client_version(number)
        .with_context(|| format!("unsupported client version {number}"))
}

/// Parses hex text into a frame, ignoring whitespace and an optional `0x`.
pub fn parse_hex_frame(text: &str) -> Result<Vec<u8>> {
    let cleaned: String = text
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    hex::decode(&cleaned).context("invalid hex frame")
}

/// Decodes one frame (opcode byte followed by payload).
///
/// Rejections are part of the report, not errors; only a frame that cannot
/// be split is an error.
pub fn decode_frame(
    translator: &Translator,
    frame: &[u8],
    direction: Direction,
    ctx: &ConnectionContext,
) -> Result<DecodeReport> {
    let packet = RawPacket::from_frame(frame, translator.wire_limits()).context("split frame")?;
    let mut report = DecodeReport {
        version: ctx.version.number(),
        direction,
        opcode: packet.opcode,
        payload_len: packet.len(),
        op: None,
        message: None,
        rejection: None,
    };
    match direction {
        Direction::In => {
            report.op = wire::inbound(ctx.version)
                .resolve(packet.opcode)
                .map(|op| op.name());
            match translator.parse(&packet, ctx) {
                Ok(message) => {
                    report.message =
                        Some(serde_json::to_value(&message).context("serialize message")?);
                }
                Err(rejection) => report.rejection = Some(rejection.to_string()),
            }
        }
        Direction::Out => {
            report.op = wire::outbound(ctx.version)
                .and_then(|registry| registry.resolve(packet.opcode))
                .map(|op| op.name());
            match translator.decode_server(&packet, ctx) {
                Ok(message) => {
                    report.message =
                        Some(serde_json::to_value(&message).context("serialize message")?);
                }
                Err(rejection) => report.rejection = Some(rejection.to_string()),
            }
        }
    }
    Ok(report)
}

/// The opcode table of `version` in one direction.
///
/// The oldest client has no outbound table; it yields an empty one.
#[must_use]
pub fn opcode_table(version: ProtocolVersion, direction: Direction) -> OpcodeTable {
    match direction {
        Direction::In => table_of(version, direction, Some(wire::inbound(version))),
        Direction::Out => table_of(version, direction, wire::outbound(version)),
    }
}

fn table_of<Op: LogicalOp>(
    version: ProtocolVersion,
    direction: Direction,
    registry: Option<&OpcodeRegistry<Op>>,
) -> OpcodeTable {
    let (fingerprint, entries) = registry.map_or_else(
        || (String::from("none"), Vec::new()),
        |registry| {
            let entries = registry
                .iter()
                .map(|(opcode, op)| OpcodeEntry {
                    opcode,
                    op: op.op_name(),
                })
                .collect();
            (format!("{:016x}", registry.fingerprint()), entries)
        },
    );
    OpcodeTable {
        version: version.number(),
        direction,
        fingerprint,
        entries,
    }
}

/// Runs the length validator the transport calls before `parse`.
#[must_use]
pub fn check_length(
    translator: &Translator,
    version: ProtocolVersion,
    opcode: u8,
    len: usize,
) -> CheckReport {
    let op = wire::inbound(version).resolve(opcode);
    CheckReport {
        version: version.number(),
        opcode,
        len,
        well_formed: translator.is_well_formed(version, opcode, len),
        op: op.map(|op| op.name()),
        shape: op.map(|op| format!("{:?}", wire::client_shape(version, op))),
    }
}

/// Loads a replacement word table for the 115 chat codec.
pub fn load_dictionary(path: &Path) -> Result<LegacyDictionary> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read dictionary {}", path.display()))?;
    serde_json::from_str(&contents).context("parse dictionary json")
}

/// Loads the stackable item ids, a JSON array of numbers.
pub fn load_catalog(path: &Path) -> Result<StackableItems> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read catalog {}", path.display()))?;
    serde_json::from_str(&contents).context("parse catalog json")
}

/// One-line-per-field rendering of a decode report.
#[must_use]
pub fn format_decode_pretty(report: &DecodeReport) -> String {
    let mut out = String::new();
    let direction = match report.direction {
        Direction::In => "client",
        Direction::Out => "server",
    };
    let _ = writeln!(
        out,
        "version {} {direction} opcode {} ({}) {} bytes",
        report.version,
        report.opcode,
        report.op.unwrap_or("unknown"),
        report.payload_len
    );
    if let Some(message) = &report.message {
        let _ = writeln!(out, "  {message}");
    }
    if let Some(rejection) = &report.rejection {
        let _ = writeln!(out, "  rejected: {rejection}");
    }
    out
}
