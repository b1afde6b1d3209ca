//! Logical messages: an operation paired with a payload of the right shape.

use crate::client::ClientPayload;
use crate::error::{ShapeMismatch, ShapeResult};
use crate::op::{ClientOp, ServerOp};
use crate::server::ServerPayload;

/// Payload of operations that carry no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoPayload;

/// A decoded client-to-server message.
///
/// Construction checks that the payload shape belongs to the operation, so a
/// `ClientMessage` in hand is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClientMessage {
    op: ClientOp,
    payload: ClientPayload,
}

impl ClientMessage {
    /// Pairs `op` with `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if the payload shape does not belong to `op`.
    pub fn new(op: ClientOp, payload: ClientPayload) -> ShapeResult<Self> {
        if !payload.matches(op) {
            return Err(ShapeMismatch {
                op: op.name(),
                expected: op.kind().map(|kind| kind.name()),
                found: payload.kind().name(),
            });
        }
        Ok(Self { op, payload })
    }

    /// Shorthand for operations without a payload.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if `op` carries data.
    pub fn empty(op: ClientOp) -> ShapeResult<Self> {
        Self::new(op, NoPayload.into())
    }

    #[must_use]
    pub const fn op(&self) -> ClientOp {
        self.op
    }

    #[must_use]
    pub const fn payload(&self) -> &ClientPayload {
        &self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> ClientPayload {
        self.payload
    }
}

/// A server-to-client message awaiting encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ServerMessage {
    op: ServerOp,
    payload: ServerPayload,
}

impl ServerPayload {
    /// Returns `true` if this payload can be carried by `op`.
    #[must_use]
    pub fn matches(&self, op: ServerOp) -> bool {
        op.kind() == self.kind()
    }
}

impl ServerMessage {
    /// Pairs `op` with `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if the payload shape does not belong to `op`.
    pub fn new(op: ServerOp, payload: ServerPayload) -> ShapeResult<Self> {
        if !payload.matches(op) {
            return Err(ShapeMismatch {
                op: op.name(),
                expected: Some(op.kind().name()),
                found: payload.kind().name(),
            });
        }
        Ok(Self { op, payload })
    }

    /// Shorthand for operations without a payload.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if `op` carries data.
    pub fn empty(op: ServerOp) -> ShapeResult<Self> {
        Self::new(op, NoPayload.into())
    }

    #[must_use]
    pub const fn op(&self) -> ServerOp {
        self.op
    }

    #[must_use]
    pub const fn payload(&self) -> &ServerPayload {
        &self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> ServerPayload {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{BankTransfer, ChatText};
    use crate::server::TextMessage;

    #[test]
    fn client_message_accepts_matching_shape() {
        let msg = ClientMessage::new(
            ClientOp::BankWithdraw,
            BankTransfer {
                item: 10,
                amount: 5,
                trap: None,
            }
            .into(),
        )
        .unwrap();
        assert_eq!(msg.op(), ClientOp::BankWithdraw);
        assert!(matches!(msg.payload(), ClientPayload::BankTransfer(_)));
    }

    #[test]
    fn client_message_rejects_wrong_shape() {
        let err = ClientMessage::new(
            ClientOp::BankWithdraw,
            ChatText {
                message: "hi".into(),
            }
            .into(),
        )
        .unwrap_err();
        assert_eq!(err.op, "BANK_WITHDRAW");
        assert_eq!(err.expected, Some("BankTransfer"));
        assert_eq!(err.found, "Chat");
    }

    #[test]
    fn session_layer_ops_cannot_be_built() {
        let err = ClientMessage::empty(ClientOp::Login).unwrap_err();
        assert_eq!(err.expected, None);
    }

    #[test]
    fn server_message_shapes() {
        assert!(ServerMessage::empty(ServerOp::Death).is_ok());
        assert!(ServerMessage::new(ServerOp::Box, TextMessage::new("x").into()).is_ok());
        assert!(ServerMessage::empty(ServerOp::Box).is_err());
    }
}
