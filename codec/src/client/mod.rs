//! Inbound dialects: client packet bodies to [`ClientPayload`] and back.

mod base;
mod legacy;
mod trapless;

use std::sync::{Arc, OnceLock};

use payload::{ClientOp, ClientPayload};
use wire::ProtocolVersion;

use crate::dialect::Dialect;

/// Client codecs of one protocol revision.
pub type ClientDialect = Dialect<ClientOp, ClientPayload>;

type DialectSet = [Arc<ClientDialect>; 7];

fn build() -> DialectSet {
    let base = Arc::new(base::dialect());
    let v202 = Arc::new(Dialect::new("202", Some(Arc::clone(&base))));
    let v201 = Arc::new(trapless::dialect(Arc::clone(&base)));
    let older = |name| Arc::new(Dialect::new(name, Some(Arc::clone(&v201))));
    [
        Arc::new(legacy::dialect(Arc::clone(&base))),
        older("196"),
        older("198"),
        older("199"),
        Arc::clone(&v201),
        v202,
        base,
    ]
}

const fn slot(version: ProtocolVersion) -> usize {
    match version {
        ProtocolVersion::V115 => 0,
        ProtocolVersion::V196 => 1,
        ProtocolVersion::V198 => 2,
        ProtocolVersion::V199 => 3,
        ProtocolVersion::V201 => 4,
        ProtocolVersion::V202 => 5,
        ProtocolVersion::V203 => 6,
    }
}

/// The inbound dialect for `version`, built on first use.
pub(crate) fn dialect(version: ProtocolVersion) -> &'static ClientDialect {
    static SET: OnceLock<DialectSet> = OnceLock::new();
    &SET.get_or_init(build)[slot(version)]
}
