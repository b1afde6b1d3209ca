//! Outbound dialects: [`ServerPayload`] to server packet bodies and back.
//!
//! The oldest client has no outbound dialect; nothing is ever generated for it.

mod base;
mod friends;

use std::sync::{Arc, OnceLock};

use payload::{ServerOp, ServerPayload};
use wire::ProtocolVersion;

use crate::dialect::Dialect;

/// Server codecs of one protocol revision.
pub type ServerDialect = Dialect<ServerOp, ServerPayload>;

type DialectSet = [Arc<ServerDialect>; 6];

fn build() -> DialectSet {
    let base = Arc::new(base::dialect());
    let v202 = Arc::new(friends::dialect(Arc::clone(&base)));
    let older = |name| Arc::new(Dialect::new(name, Some(Arc::clone(&v202))));
    [
        older("196"),
        older("198"),
        older("199"),
        older("201"),
        v202,
        base,
    ]
}

const fn slot(version: ProtocolVersion) -> Option<usize> {
    match version {
        ProtocolVersion::V115 => None,
        ProtocolVersion::V196 => Some(0),
        ProtocolVersion::V198 => Some(1),
        ProtocolVersion::V199 => Some(2),
        ProtocolVersion::V201 => Some(3),
        ProtocolVersion::V202 => Some(4),
        ProtocolVersion::V203 => Some(5),
    }
}

/// The outbound dialect for `version`, if that version has one.
pub(crate) fn dialect(version: ProtocolVersion) -> Option<&'static ServerDialect> {
    static SET: OnceLock<DialectSet> = OnceLock::new();
    let index = slot(version)?;
    Some(&SET.get_or_init(build)[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_has_no_outbound_dialect() {
        assert!(dialect(ProtocolVersion::V115).is_none());
    }

    #[test]
    fn older_versions_share_the_raw_world_layout() {
        for version in [
            ProtocolVersion::V196,
            ProtocolVersion::V198,
            ProtocolVersion::V199,
            ProtocolVersion::V201,
            ProtocolVersion::V202,
        ] {
            let dialect = dialect(version).unwrap();
            assert_eq!(dialect.handled_by(ServerOp::FriendList), Some("202"));
            assert_eq!(dialect.handled_by(ServerOp::Box), Some("203"));
        }
        assert_eq!(
            dialect(ProtocolVersion::V203)
                .unwrap()
                .handled_by(ServerOp::FriendList),
            Some("203")
        );
    }

    #[test]
    fn every_server_op_has_a_codec() {
        let base = dialect(ProtocolVersion::V203).unwrap();
        for op in ServerOp::ALL {
            assert!(base.handled_by(*op).is_some(), "{op}");
        }
        assert_eq!(base.depth(), 1);
        assert_eq!(dialect(ProtocolVersion::V196).unwrap().depth(), 3);
    }
}
