//! Raw `(opcode, payload)` packets as handed over by the transport.

use crate::error::{LimitKind, WireError, WireResult};
use crate::limits::Limits;

/// One undecoded packet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPacket {
    pub opcode: u8,
    pub payload: Vec<u8>,
}

impl RawPacket {
    #[must_use]
    pub fn new(opcode: u8, payload: Vec<u8>) -> Self {
        Self { opcode, payload }
    }

    /// Payload length, the figure the validator checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Splits a frame whose first byte is the opcode.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::EmptyFrame`] for an empty buffer and
    /// [`WireError::LimitsExceeded`] when the payload is over the limit.
    pub fn from_frame(frame: &[u8], limits: &Limits) -> WireResult<Self> {
        let Some((&opcode, payload)) = frame.split_first() else {
            return Err(WireError::EmptyFrame);
        };
        if payload.len() > limits.max_packet_bytes {
            return Err(WireError::LimitsExceeded {
                kind: LimitKind::PacketBytes,
                limit: limits.max_packet_bytes,
                actual: payload.len(),
            });
        }
        Ok(Self::new(opcode, payload.to_vec()))
    }

    /// Opcode byte followed by the payload.
    #[must_use]
    pub fn to_frame(&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(1 + self.payload.len());
        frame.push(self.opcode);
        frame.extend_from_slice(&self.payload);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_roundtrip() {
        let packet = RawPacket::new(67, vec![1, 2, 3]);
        let frame = packet.to_frame();
        assert_eq!(frame, vec![67, 1, 2, 3]);
        assert_eq!(RawPacket::from_frame(&frame, &Limits::default()), Ok(packet));
    }

    #[test]
    fn opcode_only_frame() {
        let packet = RawPacket::from_frame(&[5], &Limits::default()).unwrap();
        assert_eq!(packet.opcode, 5);
        assert!(packet.is_empty());
    }

    #[test]
    fn empty_frame_rejected() {
        assert_eq!(
            RawPacket::from_frame(&[], &Limits::default()),
            Err(WireError::EmptyFrame)
        );
    }

    #[test]
    fn oversized_frame_rejected() {
        let limits = Limits::for_testing();
        let frame = vec![0u8; limits.max_packet_bytes + 2];
        let err = RawPacket::from_frame(&frame, &limits).unwrap_err();
        assert!(matches!(
            err,
            WireError::LimitsExceeded {
                kind: LimitKind::PacketBytes,
                ..
            }
        ));
    }
}
