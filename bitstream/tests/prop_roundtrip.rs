use bitstream::{ByteReader, ByteWriter, MAX_SMART};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    U8(u8),
    I16(i16),
    U32(u32),
    I64(i64),
    Smart(u32),
    Nul(String),
    Bits(Vec<(u8, u32)>),
}

fn mask_value(bits: u8, value: u32) -> u32 {
    if bits >= 32 {
        value
    } else {
        value & ((1u32 << bits) - 1)
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::U8),
        any::<i16>().prop_map(Op::I16),
        any::<u32>().prop_map(Op::U32),
        any::<i64>().prop_map(Op::I64),
        (0..=MAX_SMART).prop_map(Op::Smart),
        "[a-z0-9 ]{0,12}".prop_map(Op::Nul),
        prop::collection::vec(
            (1u8..=32, any::<u32>()).prop_map(|(bits, value)| (bits, mask_value(bits, value))),
            0..16
        )
        .prop_map(Op::Bits),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..48)) {
        let mut writer = ByteWriter::new();
        for op in &ops {
            match op {
                Op::U8(v) => writer.write_u8(*v).unwrap(),
                Op::I16(v) => writer.write_i16(*v).unwrap(),
                Op::U32(v) => writer.write_u32(*v).unwrap(),
                Op::I64(v) => writer.write_i64(*v).unwrap(),
                Op::Smart(v) => writer.write_smart(*v).unwrap(),
                Op::Nul(s) => writer.write_str_nul(s).unwrap(),
                Op::Bits(fields) => {
                    writer.enter_bit_mode().unwrap();
                    for (bits, value) in fields {
                        writer.write_bits(*value, *bits).unwrap();
                    }
                    writer.exit_bit_mode().unwrap();
                }
            }
        }
        let bytes = writer.finish().unwrap();

        let mut reader = ByteReader::new(&bytes);
        for op in &ops {
            match op {
                Op::U8(v) => prop_assert_eq!(reader.read_u8().unwrap(), *v),
                Op::I16(v) => prop_assert_eq!(reader.read_i16().unwrap(), *v),
                Op::U32(v) => prop_assert_eq!(reader.read_u32().unwrap(), *v),
                Op::I64(v) => prop_assert_eq!(reader.read_i64().unwrap(), *v),
                Op::Smart(v) => prop_assert_eq!(reader.read_smart().unwrap(), *v),
                Op::Nul(s) => prop_assert_eq!(&reader.read_str_nul().unwrap(), s),
                Op::Bits(fields) => {
                    reader.enter_bit_mode().unwrap();
                    for (bits, value) in fields {
                        prop_assert_eq!(reader.read_bits(*bits).unwrap(), *value);
                    }
                    reader.exit_bit_mode().unwrap();
                }
            }
        }
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_reader_never_panics(data in prop::collection::vec(any::<u8>(), 0..64), widths in prop::collection::vec(0u8..=40, 0..16)) {
        let mut reader = ByteReader::new(&data);
        let _ = reader.read_smart();
        let _ = reader.read_str_nul();
        if reader.enter_bit_mode().is_ok() {
            for w in widths {
                let _ = reader.read_bits(w);
            }
            let _ = reader.exit_bit_mode();
        }
        let _ = reader.read_i64();
    }
}
