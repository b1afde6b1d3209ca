//! Sequential reader with bounded operations.

use crate::error::{BitError, BitResult};

/// A big-endian reader over a received packet body.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    /// Absolute bit position while in bit mode.
    bit_pos: Option<usize>,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            bit_pos: None,
        }
    }

    /// Returns the number of whole bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` while bit mode is active.
    #[must_use]
    pub const fn in_bit_mode(&self) -> bool {
        self.bit_pos.is_some()
    }

    /// Returns the number of bits left to read in bit mode.
    #[must_use]
    pub fn bits_remaining(&self) -> usize {
        let pos = self.bit_pos.unwrap_or(self.pos * 8);
        self.data.len().saturating_mul(8).saturating_sub(pos)
    }

    fn ensure_byte_mode(&self) -> BitResult<()> {
        if self.bit_pos.is_some() {
            return Err(BitError::BitModeActive);
        }
        Ok(())
    }

    /// Reads `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> BitResult<&'a [u8]> {
        self.ensure_byte_mode()?;
        if len > self.remaining() {
            return Err(BitError::EndOfBuffer {
                requested: len,
                available: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Reads every remaining byte.
    pub fn read_rest(&mut self) -> BitResult<&'a [u8]> {
        self.read_bytes(self.remaining())
    }

    /// Skips `len` bytes.
    pub fn skip(&mut self, len: usize) -> BitResult<()> {
        self.read_bytes(len).map(|_| ())
    }

    fn read_array<const N: usize>(&mut self) -> BitResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Returns the next byte without consuming it.
    pub fn peek_u8(&self) -> BitResult<u8> {
        self.ensure_byte_mode()?;
        self.data.get(self.pos).copied().ok_or(BitError::EndOfBuffer {
            requested: 1,
            available: 0,
        })
    }

    /// Reads one unsigned byte.
    pub fn read_u8(&mut self) -> BitResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Reads one signed byte.
    pub fn read_i8(&mut self) -> BitResult<i8> {
        Ok(i8::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> BitResult<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `i16`.
    pub fn read_i16(&mut self) -> BitResult<i16> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32(&mut self) -> BitResult<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `i32`.
    pub fn read_i32(&mut self) -> BitResult<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `u64`.
    pub fn read_u64(&mut self) -> BitResult<u64> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian `i64`.
    pub fn read_i64(&mut self) -> BitResult<i64> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    /// Reads an "unsigned byte int" written by
    /// [`ByteWriter::write_smart`](crate::ByteWriter::write_smart).
    pub fn read_smart(&mut self) -> BitResult<u32> {
        let first = self.peek_u8()?;
        if first < 0x80 {
            self.pos += 1;
            return Ok(u32::from(first));
        }
        Ok(self.read_u32()? & 0x7FFF_FFFF)
    }

    /// Reads the rest of the packet as a Latin-1 string.
    pub fn read_str_rest(&mut self) -> BitResult<String> {
        Ok(latin1_to_string(self.read_rest()?))
    }

    /// Reads `len` bytes as a Latin-1 string.
    pub fn read_str(&mut self, len: usize) -> BitResult<String> {
        Ok(latin1_to_string(self.read_bytes(len)?))
    }

    /// Reads a zero-terminated Latin-1 string, consuming the terminator.
    pub fn read_str_nul(&mut self) -> BitResult<String> {
        self.ensure_byte_mode()?;
        let rest = &self.data[self.pos.min(self.data.len())..];
        let Some(end) = rest.iter().position(|&b| b == 0) else {
            return Err(BitError::UnterminatedString {
                scanned: rest.len(),
            });
        };
        let text = latin1_to_string(&rest[..end]);
        self.pos += end + 1;
        Ok(text)
    }

    /// Enters bit mode at the current byte boundary.
    pub fn enter_bit_mode(&mut self) -> BitResult<()> {
        self.ensure_byte_mode()?;
        self.bit_pos = Some(self.pos * 8);
        Ok(())
    }

    /// Reads `bits` bits, most significant bit first.
    pub fn read_bits(&mut self, bits: u8) -> BitResult<u32> {
        let Some(mut pos) = self.bit_pos else {
            return Err(BitError::BitModeInactive);
        };
        if bits > 32 {
            return Err(BitError::InvalidBitCount { bits, max_bits: 32 });
        }
        let available = self.bits_remaining();
        if usize::from(bits) > available {
            return Err(BitError::EndOfBits {
                requested: usize::from(bits),
                available,
            });
        }
        let mut value = 0u32;
        for _ in 0..bits {
            let bit = (self.data[pos / 8] >> (7 - pos % 8)) & 1;
            value = (value << 1) | u32::from(bit);
            pos += 1;
        }
        self.bit_pos = Some(pos);
        Ok(value)
    }

    /// Leaves bit mode, skipping the zero padding up to the next byte.
    pub fn exit_bit_mode(&mut self) -> BitResult<()> {
        let Some(pos) = self.bit_pos.take() else {
            return Err(BitError::BitModeInactive);
        };
        self.pos = pos.div_ceil(8).min(self.data.len());
        Ok(())
    }
}

/// Decodes Latin-1 bytes into a `String`.
#[must_use]
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
