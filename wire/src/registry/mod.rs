//! Per-version opcode registries.
//!
//! Each dialect numbers the same logical operations differently. The tables in
//! the `v*` modules are the compatibility surface with the historical clients
//! and must match captured traffic byte for byte. Registries are built once on
//! first use and are read-only afterwards.

use std::fmt;
use std::sync::OnceLock;

use blake3::Hasher;
use payload::{ClientOp, ServerOp};

use crate::error::{WireError, WireResult};
use crate::version::ProtocolVersion;

mod v115;
mod v196;
mod v198;
mod v199;
mod v201;
mod v202;
mod v203;

/// A logical operation that can sit in a registry.
pub trait LogicalOp: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Stable name, used for fingerprints.
    fn op_name(self) -> &'static str;
}

impl LogicalOp for ClientOp {
    fn op_name(self) -> &'static str {
        self.name()
    }
}

impl LogicalOp for ServerOp {
    fn op_name(self) -> &'static str {
        self.name()
    }
}

/// Bidirectional wire opcode table for one version and direction.
#[derive(Debug, Clone)]
pub struct OpcodeRegistry<Op: LogicalOp> {
    version: ProtocolVersion,
    by_code: [Option<Op>; 256],
    entries: Vec<(u8, Op)>,
}

impl<Op: LogicalOp> OpcodeRegistry<Op> {
    /// Builds a registry from `(code, op)` rows.
    ///
    /// Several codes may resolve to the same operation (the login opcodes do);
    /// the reverse lookup then yields the lowest code.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::DuplicateOpcode`] if a code appears twice.
    pub fn from_table(version: ProtocolVersion, table: &[(u8, Op)]) -> WireResult<Self> {
        let mut by_code = [None; 256];
        let mut entries = Vec::with_capacity(table.len());
        for &(code, op) in table {
            let slot = &mut by_code[usize::from(code)];
            if slot.is_some() {
                return Err(WireError::DuplicateOpcode { code });
            }
            *slot = Some(op);
            entries.push((code, op));
        }
        entries.sort_by_key(|&(code, _)| code);
        Ok(Self {
            version,
            by_code,
            entries,
        })
    }

    /// Like [`from_table`](Self::from_table), but also requires every
    /// operation to own exactly one code.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::DuplicateOpcode`] or [`WireError::DuplicateOperation`].
    pub fn from_injective_table(version: ProtocolVersion, table: &[(u8, Op)]) -> WireResult<Self> {
        let registry = Self::from_table(version, table)?;
        for (i, &(_, op)) in registry.entries.iter().enumerate() {
            if registry.entries[..i].iter().any(|&(_, seen)| seen == op) {
                return Err(WireError::DuplicateOperation { name: op.op_name() });
            }
        }
        Ok(registry)
    }

    #[must_use]
    pub const fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Wire byte to logical operation; `None` means unsupported.
    #[must_use]
    pub fn resolve(&self, code: u8) -> Option<Op> {
        self.by_code[usize::from(code)]
    }

    /// Logical operation to wire byte; `None` means this version has no
    /// representation for it.
    #[must_use]
    pub fn wire_code_for(&self, op: Op) -> Option<u8> {
        self.entries
            .iter()
            .find(|&&(_, candidate)| candidate == op)
            .map(|&(code, _)| code)
    }

    #[must_use]
    pub fn supports(&self, op: Op) -> bool {
        self.wire_code_for(op).is_some()
    }

    /// Rows in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Op)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deterministic digest of the table, for comparing deployments.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Hasher::new();
        hasher.update(&self.version.number().to_le_bytes());
        hasher.update(&(self.entries.len() as u32).to_le_bytes());
        for &(code, op) in &self.entries {
            hasher.update(&[code]);
            let name = op.op_name();
            hasher.update(&(name.len() as u32).to_le_bytes());
            hasher.update(name.as_bytes());
        }
        let hash = hasher.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }
}

const fn inbound_table(version: ProtocolVersion) -> &'static [(u8, ClientOp)] {
    match version {
        ProtocolVersion::V115 => v115::INBOUND,
        ProtocolVersion::V196 => v196::INBOUND,
        ProtocolVersion::V198 => v198::INBOUND,
        ProtocolVersion::V199 => v199::INBOUND,
        ProtocolVersion::V201 => v201::INBOUND,
        ProtocolVersion::V202 => v202::INBOUND,
        ProtocolVersion::V203 => v203::INBOUND,
    }
}

const fn outbound_table(version: ProtocolVersion) -> Option<&'static [(u8, ServerOp)]> {
    match version {
        ProtocolVersion::V115 => None,
        ProtocolVersion::V196 => Some(v196::OUTBOUND),
        ProtocolVersion::V198 => Some(v198::OUTBOUND),
        ProtocolVersion::V199 => Some(v199::OUTBOUND),
        ProtocolVersion::V201 => Some(v201::OUTBOUND),
        ProtocolVersion::V202 => Some(v202::OUTBOUND),
        ProtocolVersion::V203 => Some(v203::OUTBOUND),
    }
}

fn version_index(version: ProtocolVersion) -> usize {
    ProtocolVersion::ALL
        .iter()
        .position(|&candidate| candidate == version)
        .unwrap_or(0)
}

type InboundSet = Vec<OpcodeRegistry<ClientOp>>;
type OutboundSet = Vec<Option<OpcodeRegistry<ServerOp>>>;

fn inbound_set() -> &'static InboundSet {
    static SET: OnceLock<InboundSet> = OnceLock::new();
    SET.get_or_init(|| {
        ProtocolVersion::ALL
            .iter()
            .map(|&version| build_lenient(version, inbound_table(version)))
            .collect()
    })
}

fn outbound_set() -> &'static OutboundSet {
    static SET: OnceLock<OutboundSet> = OnceLock::new();
    SET.get_or_init(|| {
        ProtocolVersion::ALL
            .iter()
            .map(|&version| outbound_table(version).map(|table| build_lenient(version, table)))
            .collect()
    })
}

// The static tables are checked by tests; a duplicate row would keep its first code.
fn build_lenient<Op: LogicalOp>(version: ProtocolVersion, table: &[(u8, Op)]) -> OpcodeRegistry<Op> {
    let mut seen = [false; 256];
    let unique: Vec<(u8, Op)> = table
        .iter()
        .copied()
        .filter(|&(code, _)| !std::mem::replace(&mut seen[usize::from(code)], true))
        .collect();
    match OpcodeRegistry::from_table(version, &unique) {
        Ok(registry) => registry,
        Err(_) => OpcodeRegistry {
            version,
            by_code: [None; 256],
            entries: Vec::new(),
        },
    }
}

/// Client-to-server table for `version`.
#[must_use]
pub fn inbound(version: ProtocolVersion) -> &'static OpcodeRegistry<ClientOp> {
    &inbound_set()[version_index(version)]
}

/// Server-to-client table for `version`; `None` for dialects the server
/// never writes to.
#[must_use]
pub fn outbound(version: ProtocolVersion) -> Option<&'static OpcodeRegistry<ServerOp>> {
    outbound_set()[version_index(version)].as_ref()
}
