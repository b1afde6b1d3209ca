//! Byte and bit cursors for the RSC protocol translation layer.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`]: sequential, big-endian
//! cursors over a packet body, with a bit-packing sub-mode used for coordinate
//! batches. It is designed for bounded, panic-free operation with explicit
//! error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about opcodes or game messages.
//! - **Balanced bit mode** - Entering and exiting bit mode must pair up; a mismatch is
//!   reported as a programming error, distinct from malformed input.
//!
//! # Example
//!
//! ```
//! use bitstream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u16(1234).unwrap();
//! writer.enter_bit_mode().unwrap();
//! writer.write_bits(42, 7).unwrap();
//! writer.exit_bit_mode().unwrap();
//!
//! let bytes = writer.finish().unwrap();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u16().unwrap(), 1234);
//! reader.enter_bit_mode().unwrap();
//! assert_eq!(reader.read_bits(7).unwrap(), 42);
//! reader.exit_bit_mode().unwrap();
//! assert!(reader.is_empty());
//! ```

mod error;
mod reader;
mod writer;

pub use error::{BitError, BitResult};
pub use reader::{latin1_to_string, ByteReader};
pub use writer::{ByteWriter, MAX_SMART};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = ByteWriter::new();
        let _ = ByteReader::new(&[]);
        let _: BitResult<()> = Ok(());
        assert_eq!(MAX_SMART, i32::MAX as u32);
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = ByteWriter::new();
        writer.write_i8(-5).unwrap();
        writer.write_i64(-1).unwrap();
        writer.write_str_nul("cmd").unwrap();
        writer.enter_bit_mode().unwrap();
        writer.write_bits(3, 2).unwrap();
        writer.write_bits(1000, 11).unwrap();
        writer.exit_bit_mode().unwrap();
        writer.write_smart(70_000).unwrap();
        writer.write_str("tail").unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_i8().unwrap(), -5);
        assert_eq!(reader.read_i64().unwrap(), -1);
        assert_eq!(reader.read_str_nul().unwrap(), "cmd");
        reader.enter_bit_mode().unwrap();
        assert_eq!(reader.read_bits(2).unwrap(), 3);
        assert_eq!(reader.read_bits(11).unwrap(), 1000);
        reader.exit_bit_mode().unwrap();
        assert_eq!(reader.read_smart().unwrap(), 70_000);
        assert_eq!(reader.read_str_rest().unwrap(), "tail");
        assert!(reader.is_empty());
    }
}
