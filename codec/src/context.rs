//! Per-connection state the translator reads but never mutates.

use wire::ProtocolVersion;

/// What the translator needs to know about one client connection.
///
/// The login pipeline builds this after the handshake. The translator only
/// borrows it, so one context can serve concurrent parse and generate calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionContext {
    /// Dialect negotiated at login.
    pub version: ProtocolVersion,
    /// Session id agreed at login; seeds secure block checks when present.
    pub session_id: Option<i32>,
    /// Nonce stamped into secure blocks this side encrypts.
    pub nonce: i32,
}

impl ConnectionContext {
    #[must_use]
    pub const fn new(version: ProtocolVersion) -> Self {
        Self {
            version,
            session_id: None,
            nonce: 0,
        }
    }

    #[must_use]
    pub const fn with_session(mut self, session_id: i32) -> Self {
        self.session_id = Some(session_id);
        self
    }

    #[must_use]
    pub const fn with_nonce(mut self, nonce: i32) -> Self {
        self.nonce = nonce;
        self
    }
}

impl From<ProtocolVersion> for ConnectionContext {
    fn from(version: ProtocolVersion) -> Self {
        Self::new(version)
    }
}
