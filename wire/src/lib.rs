//! Opcode tables, packet framing and length validation for the RSC dialects.
//!
//! This crate knows which byte means which operation in each client revision
//! and how long each payload may be. It does not decode payload fields; that
//! is the codec crate's job.
//!
//! # Design Principles
//!
//! - **Tables are the contract** - Opcode numbers are reproduced exactly from
//!   captured traffic and never computed.
//! - **Built once, read forever** - Registries are constructed on first use and
//!   shared read-only between connections.
//! - **Reject early** - Unknown opcodes and implausible lengths are refused
//!   before any field is read.

mod error;
mod limits;
mod packet;
pub mod registry;
mod validator;
mod version;

pub use error::{LimitKind, WireError, WireResult};
pub use limits::Limits;
pub use packet::RawPacket;
pub use registry::{inbound, outbound, LogicalOp, OpcodeRegistry};
pub use validator::{client_shape, is_well_formed, PayloadShape};
pub use version::ProtocolVersion;

#[cfg(test)]
mod tests {
    use super::*;
    use payload::ClientOp;

    #[test]
    fn public_api_exports() {
        let _ = Limits::default();
        let _ = RawPacket::new(0, Vec::new());
        let _ = ProtocolVersion::ALL;
        let _ = PayloadShape::Unconstrained;
        let _: WireResult<()> = Ok(());
        let _ = inbound(ProtocolVersion::BASE);
        let _ = outbound(ProtocolVersion::BASE);
    }

    #[test]
    fn validator_and_registry_agree() {
        let version = ProtocolVersion::V203;
        let code = inbound(version).wire_code_for(ClientOp::PlayerAppearanceChange).unwrap();
        assert!(is_well_formed(version, code, 8));
    }
}
