//! Every operation a version supports resolves back to itself.

use payload::{ClientOp, ServerOp};
use proptest::prelude::*;
use wire::{inbound, is_well_formed, outbound, ProtocolVersion};

fn any_version() -> impl Strategy<Value = ProtocolVersion> {
    prop::sample::select(ProtocolVersion::ALL.to_vec())
}

#[test]
fn inbound_ops_are_stable() {
    for version in ProtocolVersion::ALL {
        let registry = inbound(version);
        for &op in ClientOp::ALL {
            if let Some(code) = registry.wire_code_for(op) {
                assert_eq!(registry.resolve(code), Some(op), "{version} {op}");
            }
        }
    }
}

#[test]
fn outbound_ops_are_stable() {
    for version in ProtocolVersion::ALL {
        let Some(registry) = outbound(version) else {
            continue;
        };
        for &op in ServerOp::ALL {
            if let Some(code) = registry.wire_code_for(op) {
                assert_eq!(registry.resolve(code), Some(op), "{version} {op}");
            }
        }
    }
}

#[test]
fn every_outbound_table_but_oldest_is_nearly_complete() {
    for version in ProtocolVersion::ALL {
        match outbound(version) {
            Some(registry) => assert!(registry.len() >= ServerOp::ALL.len() - 1),
            None => assert_eq!(version, ProtocolVersion::V115),
        }
    }
}

proptest! {
    #[test]
    fn resolve_then_code_roundtrips(version in any_version(), code in any::<u8>()) {
        let registry = inbound(version);
        if let Some(op) = registry.resolve(code) {
            let back = registry.wire_code_for(op).unwrap();
            prop_assert_eq!(registry.resolve(back), Some(op));
        }
    }

    #[test]
    fn unknown_codes_never_validate(version in any_version(), code in any::<u8>(), len in 0usize..6000) {
        if inbound(version).resolve(code).is_none() {
            prop_assert!(!is_well_formed(version, code, len));
        }
    }
}
