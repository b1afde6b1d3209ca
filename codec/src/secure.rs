//! Credential fields split across encrypted blocks.
//!
//! Each block is a length byte followed by ciphertext. Decrypted, a block is
//! 15 bytes: a 4-byte nonce, the 4-byte session id and 7 bytes of text.
//! Every block of a packet must carry the same session id.

use bitstream::{ByteReader, ByteWriter};
use payload::SecureField;
use tracing::debug;

use crate::cipher::BlockCipher;
use crate::error::{CodecError, CodecResult, LimitKind};

/// Decrypted block size.
pub const BLOCK_LEN: usize = 15;
/// Text bytes carried by one block.
pub const CHUNK_LEN: usize = 7;

/// Blocks needed for `len` bytes of text.
#[must_use]
pub const fn blocks_for(len: usize) -> usize {
    len.div_ceil(CHUNK_LEN)
}

/// Reads block groups for one packet, tracking the expected session id.
pub(crate) struct BlockReader<'c> {
    cipher: &'c dyn BlockCipher,
    session: Option<i32>,
    blocks_read: usize,
}

impl<'c> BlockReader<'c> {
    /// `session` seeds the expected id; otherwise the first good block sets it.
    pub(crate) fn new(cipher: &'c dyn BlockCipher, session: Option<i32>) -> Self {
        Self {
            cipher,
            session,
            blocks_read: 0,
        }
    }

    /// Reads `count` blocks and joins their text.
    ///
    /// A block that fails to decrypt, has the wrong size or disagrees on the
    /// session errors the field, but the remaining blocks are still consumed
    /// so the next field starts at the right byte.
    pub(crate) fn read_field(
        &mut self,
        reader: &mut ByteReader<'_>,
        count: usize,
        field: &'static str,
    ) -> CodecResult<Option<Vec<u8>>> {
        let mut text = Vec::with_capacity(count * CHUNK_LEN);
        let mut errored = false;
        for _ in 0..count {
            let len = usize::from(reader.read_u8()?);
            let block = reader.read_bytes(len)?;
            let index = self.blocks_read;
            self.blocks_read += 1;
            if errored {
                continue;
            }
            match self.open(block) {
                Some(chunk) => text.extend_from_slice(chunk.as_slice()),
                None => {
                    debug!(field, block = index, "secure block rejected");
                    errored = true;
                }
            }
        }
        Ok((!errored).then_some(text))
    }

    fn open(&mut self, block: &[u8]) -> Option<[u8; CHUNK_LEN]> {
        let plain = self.cipher.decrypt(block).ok()?;
        if plain.len() != BLOCK_LEN {
            return None;
        }
        let session = i32::from_be_bytes([plain[4], plain[5], plain[6], plain[7]]);
        match self.session {
            None => self.session = Some(session),
            Some(expected) if expected != session => return None,
            Some(_) => {}
        }
        let mut chunk = [0u8; CHUNK_LEN];
        chunk.copy_from_slice(&plain[8..BLOCK_LEN]);
        Some(chunk)
    }
}

/// Seals text into blocks, the client side of [`BlockReader`].
pub(crate) struct BlockWriter<'c> {
    cipher: &'c dyn BlockCipher,
    session: i32,
    nonce: i32,
}

impl<'c> BlockWriter<'c> {
    pub(crate) fn new(cipher: &'c dyn BlockCipher, session: i32, nonce: i32) -> Self {
        Self {
            cipher,
            session,
            nonce,
        }
    }

    /// Writes `text` as `ceil(len / 7)` blocks, space-padding the last one.
    pub(crate) fn write_field(&self, writer: &mut ByteWriter, text: &[u8]) -> CodecResult<()> {
        for chunk in text.chunks(CHUNK_LEN) {
            let mut plain = [b' '; BLOCK_LEN];
            plain[..4].copy_from_slice(&self.nonce.to_be_bytes());
            plain[4..8].copy_from_slice(&self.session.to_be_bytes());
            plain[8..8 + chunk.len()].copy_from_slice(chunk);
            let sealed = self.cipher.encrypt(&plain);
            let len = u8::try_from(sealed.len()).map_err(|_| CodecError::LimitsExceeded {
                kind: LimitKind::CipherBlockBytes,
                limit: usize::from(u8::MAX),
                actual: sealed.len(),
            })?;
            writer.write_u8(len)?;
            writer.write_bytes(&sealed)?;
        }
        Ok(())
    }
}

/// Turns joined block text into a field value; whitespace and control
/// characters at either end are dropped.
pub(crate) fn field_text(bytes: Option<&[u8]>) -> SecureField {
    match bytes {
        Some(bytes) => SecureField::Value(
            bitstream::latin1_to_string(bytes)
                .trim_matches(|c: char| c <= ' ')
                .to_owned(),
        ),
        None => SecureField::Errored,
    }
}

/// Space-pads `text` to exactly `width` bytes.
pub(crate) fn padded(
    field: &'static str,
    value: &SecureField,
    width: usize,
) -> CodecResult<Vec<u8>> {
    let text = value
        .value()
        .ok_or(CodecError::ErroredSecureField { field })?;
    let mut bytes: Vec<u8> = text
        .chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect();
    if bytes.len() > width {
        return Err(CodecError::out_of_range(
            field,
            i64::try_from(bytes.len()).unwrap_or(i64::MAX),
            0,
            i64::try_from(width).unwrap_or(i64::MAX),
        ));
    }
    bytes.resize(width, b' ');
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::XorCipher;

    fn seal(cipher: &XorCipher, session: i32, text: &[u8]) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        BlockWriter::new(cipher, session, 99)
            .write_field(&mut writer, text)
            .unwrap();
        writer.finish().unwrap()
    }

    #[test]
    fn block_count() {
        assert_eq!(blocks_for(0), 0);
        assert_eq!(blocks_for(7), 1);
        assert_eq!(blocks_for(8), 2);
        assert_eq!(blocks_for(42), 6);
    }

    #[test]
    fn first_block_sets_session() {
        let cipher = XorCipher::new(*b"k3y");
        let bytes = seal(&cipher, 42, b"fourteen chars");
        let mut reader = ByteReader::new(&bytes);
        let mut blocks = BlockReader::new(&cipher, None);
        let text = blocks.read_field(&mut reader, 2, "answer").unwrap();
        assert_eq!(text.as_deref(), Some(&b"fourteen chars"[..]));
        assert_eq!(blocks.session, Some(42));
        assert!(reader.is_empty());
    }

    #[test]
    fn seeded_session_mismatch_errors_but_consumes() {
        let cipher = XorCipher::new(*b"k3y");
        let mut bytes = seal(&cipher, 7, b"abcdefg");
        bytes.extend(seal(&cipher, 7, b"hijklmn"));
        let mut reader = ByteReader::new(&bytes);
        let mut blocks = BlockReader::new(&cipher, Some(42));
        let text = blocks.read_field(&mut reader, 2, "password").unwrap();
        assert_eq!(text, None);
        assert!(reader.is_empty());
    }

    #[test]
    fn wrong_block_size_errors() {
        let cipher = XorCipher::new(*b"k3y");
        let bytes = [3, 1, 2, 3];
        let mut reader = ByteReader::new(&bytes);
        let mut blocks = BlockReader::new(&cipher, None);
        assert_eq!(blocks.read_field(&mut reader, 1, "x").unwrap(), None);
    }

    #[test]
    fn truncated_block_is_decode_error() {
        let cipher = XorCipher::new(*b"k3y");
        let bytes = [15, 1, 2];
        let mut reader = ByteReader::new(&bytes);
        let mut blocks = BlockReader::new(&cipher, None);
        assert!(blocks.read_field(&mut reader, 1, "x").is_err());
    }

    #[test]
    fn field_text_trims_and_keeps_error() {
        assert_eq!(
            field_text(Some(b"  secret   ")),
            SecureField::Value("secret".into())
        );
        assert_eq!(field_text(Some(b"       ")), SecureField::Value(String::new()));
        assert_eq!(field_text(None), SecureField::Errored);
    }

    #[test]
    fn padding() {
        let bytes = padded("old", &SecureField::from("abc"), 5).unwrap();
        assert_eq!(bytes, b"abc  ");
        assert!(padded("old", &SecureField::Errored, 5).is_err());
        assert!(padded("old", &SecureField::from("toolong"), 5).is_err());
    }
}
