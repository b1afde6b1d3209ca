//! Block cipher seam for credential fields.

use std::fmt;

/// A block could not be decrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherError {
    pub reason: String,
}

impl CipherError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block decryption failed: {}", self.reason)
    }
}

impl std::error::Error for CipherError {}

/// Decrypts the blocks that carry passwords and recovery answers.
///
/// The server plugs in its private key. `encrypt` is the client-side half and
/// is used to build packets in tests and tools.
pub trait BlockCipher {
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;

    fn encrypt(&self, plaintext: &[u8]) -> Vec<u8>;
}

/// Repeating-key XOR. Provides no secrecy; for tests and offline capture replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorCipher {
    key: Vec<u8>,
}

impl XorCipher {
    /// Creates the cipher. An empty key is replaced by a single zero byte.
    #[must_use]
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        let mut key = key.into();
        if key.is_empty() {
            key.push(0);
        }
        Self { key }
    }

    fn apply(&self, data: &[u8]) -> Vec<u8> {
        data.iter()
            .zip(self.key.iter().cycle())
            .map(|(byte, k)| byte ^ k)
            .collect()
    }
}

impl BlockCipher for XorCipher {
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        if block.is_empty() {
            return Err(CipherError::new("empty block"));
        }
        Ok(self.apply(block))
    }

    fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        self.apply(plaintext)
    }
}
