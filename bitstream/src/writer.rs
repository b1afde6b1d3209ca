//! Sequential writer for packet bodies.

use crate::error::{BitError, BitResult};

/// Largest value the "unsigned byte int" encoding can carry.
pub const MAX_SMART: u32 = 0x7FFF_FFFF;

/// A growable big-endian writer with an explicit bit-packing sub-mode.
///
/// Byte-level writes are rejected while bit mode is active, and bit-level
/// writes are rejected outside of it. Call [`finish`](Self::finish) to get the
/// encoded bytes; finishing inside bit mode is an error.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
    bits: Option<BitRun>,
}

/// Partial byte state while in bit mode.
#[derive(Debug, Default, Clone, Copy)]
struct BitRun {
    current: u8,
    /// Number of bits written to `current` (0-7).
    count: u8,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            bits: None,
        }
    }

    /// Number of complete bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty() && self.bits.map_or(true, |run| run.count == 0)
    }

    /// Returns `true` while bit mode is active.
    #[must_use]
    pub const fn in_bit_mode(&self) -> bool {
        self.bits.is_some()
    }

    fn ensure_byte_mode(&self) -> BitResult<()> {
        if self.bits.is_some() {
            return Err(BitError::BitModeActive);
        }
        Ok(())
    }

    /// Writes one unsigned byte.
    pub fn write_u8(&mut self, value: u8) -> BitResult<()> {
        self.ensure_byte_mode()?;
        self.bytes.push(value);
        Ok(())
    }

    /// Writes one signed byte.
    pub fn write_i8(&mut self, value: i8) -> BitResult<()> {
        self.write_u8(value.to_be_bytes()[0])
    }

    /// Writes a big-endian `u16`.
    pub fn write_u16(&mut self, value: u16) -> BitResult<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes a big-endian `i16`.
    pub fn write_i16(&mut self, value: i16) -> BitResult<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes a big-endian `u32`.
    pub fn write_u32(&mut self, value: u32) -> BitResult<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes a big-endian `i32`.
    pub fn write_i32(&mut self, value: i32) -> BitResult<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes a big-endian `u64`.
    pub fn write_u64(&mut self, value: u64) -> BitResult<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes a big-endian `i64`.
    pub fn write_i64(&mut self, value: i64) -> BitResult<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes a raw byte range.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> BitResult<()> {
        self.ensure_byte_mode()?;
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }

    /// Writes the "unsigned byte int": one byte below 128, otherwise four
    /// bytes with the high bit set.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::SmartOutOfRange`] if `value > MAX_SMART`.
    pub fn write_smart(&mut self, value: u32) -> BitResult<()> {
        if value > MAX_SMART {
            return Err(BitError::SmartOutOfRange { value });
        }
        match u8::try_from(value) {
            Ok(small) if small < 0x80 => self.write_u8(small),
            _ => self.write_u32(value | 0x8000_0000),
        }
    }

    /// Writes a string with no terminator; the reader takes the rest of the
    /// packet. Characters outside Latin-1 are written as `?`.
    pub fn write_str(&mut self, text: &str) -> BitResult<()> {
        self.ensure_byte_mode()?;
        self.bytes.extend(text.chars().map(latin1));
        Ok(())
    }

    /// Writes a string followed by a zero byte.
    pub fn write_str_nul(&mut self, text: &str) -> BitResult<()> {
        self.write_str(text)?;
        self.write_u8(0)
    }

    /// Enters bit mode.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::BitModeActive`] if bit mode is already active.
    pub fn enter_bit_mode(&mut self) -> BitResult<()> {
        self.ensure_byte_mode()?;
        self.bits = Some(BitRun::default());
        Ok(())
    }

    /// Writes the low `bits` bits of `value`, most significant bit first.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::BitModeInactive`] outside bit mode,
    /// [`BitError::InvalidBitCount`] if `bits > 32`, and
    /// [`BitError::ValueOutOfRange`] if `value` doesn't fit in `bits`.
    pub fn write_bits(&mut self, value: u32, bits: u8) -> BitResult<()> {
        let Some(mut run) = self.bits else {
            return Err(BitError::BitModeInactive);
        };
        if bits > 32 {
            return Err(BitError::InvalidBitCount { bits, max_bits: 32 });
        }
        if bits < 32 && u64::from(value) >= (1u64 << bits) {
            return Err(BitError::ValueOutOfRange {
                value: u64::from(value),
                bits,
            });
        }
        for i in (0..bits).rev() {
            run.current = (run.current << 1) | u8::from((value >> i) & 1 == 1);
            run.count += 1;
            if run.count == 8 {
                self.bytes.push(run.current);
                run = BitRun::default();
            }
        }
        self.bits = Some(run);
        Ok(())
    }

    /// Leaves bit mode, padding a partial byte with zero bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::BitModeInactive`] if bit mode is not active.
    pub fn exit_bit_mode(&mut self) -> BitResult<()> {
        let Some(run) = self.bits.take() else {
            return Err(BitError::BitModeInactive);
        };
        if run.count > 0 {
            self.bytes.push(run.current << (8 - run.count));
        }
        Ok(())
    }

    /// Finishes writing and returns the byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::BitModeActive`] if a bit run was never exited.
    pub fn finish(self) -> BitResult<Vec<u8>> {
        self.ensure_byte_mode()?;
        Ok(self.bytes)
    }
}

fn latin1(c: char) -> u8 {
    u8::try_from(u32::from(c)).unwrap_or(b'?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = ByteWriter::new();
        assert!(writer.is_empty());
        assert_eq!(writer.finish().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn integers_are_big_endian() {
        let mut writer = ByteWriter::new();
        writer.write_u16(0x1234).unwrap();
        writer.write_i32(-2).unwrap();
        writer.write_u64(0x0102_0304_0506_0708).unwrap();
        assert_eq!(
            writer.finish().unwrap(),
            vec![0x12, 0x34, 0xFF, 0xFF, 0xFF, 0xFE, 1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn smart_small_and_large() {
        let mut writer = ByteWriter::new();
        writer.write_smart(127).unwrap();
        writer.write_smart(128).unwrap();
        assert_eq!(writer.finish().unwrap(), vec![127, 0x80, 0, 0, 128]);
    }

    #[test]
    fn smart_rejects_high_bit() {
        let mut writer = ByteWriter::new();
        assert_eq!(
            writer.write_smart(0x8000_0000),
            Err(BitError::SmartOutOfRange { value: 0x8000_0000 })
        );
    }

    #[test]
    fn strings_terminated_and_not() {
        let mut writer = ByteWriter::new();
        writer.write_str_nul("ab").unwrap();
        writer.write_str("cd").unwrap();
        assert_eq!(writer.finish().unwrap(), b"ab\0cd".to_vec());
    }

    #[test]
    fn non_latin1_becomes_question_mark() {
        let mut writer = ByteWriter::new();
        writer.write_str("a\u{263A}").unwrap();
        assert_eq!(writer.finish().unwrap(), b"a?".to_vec());
    }

    #[test]
    fn bit_mode_pads_to_byte() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xAA).unwrap();
        writer.enter_bit_mode().unwrap();
        writer.write_bits(0b101, 3).unwrap();
        writer.exit_bit_mode().unwrap();
        writer.write_u8(0x55).unwrap();
        assert_eq!(writer.finish().unwrap(), vec![0xAA, 0b1010_0000, 0x55]);
    }

    #[test]
    fn bit_mode_spans_bytes() {
        let mut writer = ByteWriter::new();
        writer.enter_bit_mode().unwrap();
        writer.write_bits(0x7FF, 11).unwrap();
        writer.write_bits(0, 5).unwrap();
        writer.exit_bit_mode().unwrap();
        assert_eq!(writer.finish().unwrap(), vec![0xFF, 0xE0]);
    }

    #[test]
    fn byte_write_in_bit_mode_fails() {
        let mut writer = ByteWriter::new();
        writer.enter_bit_mode().unwrap();
        assert_eq!(writer.write_u8(1), Err(BitError::BitModeActive));
        assert_eq!(writer.enter_bit_mode(), Err(BitError::BitModeActive));
    }

    #[test]
    fn bit_write_outside_bit_mode_fails() {
        let mut writer = ByteWriter::new();
        assert_eq!(writer.write_bits(1, 1), Err(BitError::BitModeInactive));
        assert_eq!(writer.exit_bit_mode(), Err(BitError::BitModeInactive));
    }

    #[test]
    fn unterminated_bit_run_fails_finish() {
        let mut writer = ByteWriter::new();
        writer.enter_bit_mode().unwrap();
        writer.write_bits(1, 1).unwrap();
        assert_eq!(writer.finish(), Err(BitError::BitModeActive));
    }

    #[test]
    fn bits_value_out_of_range() {
        let mut writer = ByteWriter::new();
        writer.enter_bit_mode().unwrap();
        assert_eq!(
            writer.write_bits(16, 4),
            Err(BitError::ValueOutOfRange { value: 16, bits: 4 })
        );
        assert_eq!(
            writer.write_bits(0, 33),
            Err(BitError::InvalidBitCount {
                bits: 33,
                max_bits: 32
            })
        );
    }
}
