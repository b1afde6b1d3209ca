//! Chat compression used by the 196-and-newer dialects.

use crate::error::{CodecError, CodecResult};

/// Turns chat text into its wire form and back.
pub trait MessageCompressor {
    fn compress(&self, text: &str) -> Vec<u8>;

    fn decompress(&self, bytes: &[u8]) -> CodecResult<String>;
}

/// Packs the 13 most frequent characters into a single nibble.
///
/// Nibbles are written high half first. `0..=12` index [`FREQUENT`], `13`
/// escapes the next two nibbles as one Latin-1 byte, and `15` pads an odd
/// nibble count. Characters outside Latin-1 are written as `?`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NibbleCompressor;

const FREQUENT: [u8; 13] = *b" etaoinshrdlu";
const ESCAPE: u8 = 13;
const PAD: u8 = 15;

impl MessageCompressor for NibbleCompressor {
    fn compress(&self, text: &str) -> Vec<u8> {
        let mut nibbles = Vec::with_capacity(text.len() * 2);
        for c in text.chars() {
            let byte = u8::try_from(u32::from(c)).unwrap_or(b'?');
            match FREQUENT.iter().position(|&f| f == byte) {
                Some(index) => nibbles.push(index as u8),
                None => {
                    nibbles.push(ESCAPE);
                    nibbles.push(byte >> 4);
                    nibbles.push(byte & 0x0F);
                }
            }
        }
        if nibbles.len() % 2 == 1 {
            nibbles.push(PAD);
        }
        nibbles
            .chunks_exact(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect()
    }

    fn decompress(&self, bytes: &[u8]) -> CodecResult<String> {
        let mut nibbles = bytes.iter().flat_map(|&b| [b >> 4, b & 0x0F]).enumerate();
        let mut text = String::with_capacity(bytes.len() * 2);
        while let Some((offset, nibble)) = nibbles.next() {
            match nibble {
                0..=12 => text.push(char::from(FREQUENT[usize::from(nibble)])),
                ESCAPE => {
                    let (Some((_, high)), Some((_, low))) = (nibbles.next(), nibbles.next())
                    else {
                        return Err(CodecError::InvalidCompressedText { offset });
                    };
                    text.push(char::from((high << 4) | low));
                }
                PAD if offset + 1 == bytes.len() * 2 => {}
                _ => return Err(CodecError::InvalidCompressedText { offset }),
            }
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequent_characters_take_half_a_byte() {
        let packed = NibbleCompressor.compress("the tin");
        assert_eq!(packed.len(), 4);
        assert_eq!(NibbleCompressor.decompress(&packed).unwrap(), "the tin");
    }

    #[test]
    fn escapes_everything_else() {
        let text = "Hello, World! 123 \u{e9}";
        let packed = NibbleCompressor.compress(text);
        assert_eq!(NibbleCompressor.decompress(&packed).unwrap(), text);
    }

    #[test]
    fn empty_text() {
        assert!(NibbleCompressor.compress("").is_empty());
        assert_eq!(NibbleCompressor.decompress(&[]).unwrap(), "");
    }

    #[test]
    fn truncated_escape_fails() {
        // Escape nibble followed by a single nibble.
        let err = NibbleCompressor.decompress(&[0xD4]).unwrap_err();
        assert_eq!(err, CodecError::InvalidCompressedText { offset: 0 });
    }

    #[test]
    fn padding_only_at_end() {
        assert!(NibbleCompressor.decompress(&[0xF0]).is_err());
        assert!(NibbleCompressor.decompress(&[0x0F]).is_ok());
        assert!(NibbleCompressor.decompress(&[0xE0]).is_err());
    }
}
