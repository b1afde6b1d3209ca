#![no_main]

use bitstream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 9;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_u8();
            }
            1 => {
                let _ = reader.read_u16();
            }
            2 => {
                let _ = reader.read_i64();
            }
            3 => {
                let _ = reader.read_smart();
            }
            4 => {
                let _ = reader.read_str_nul();
            }
            5 => {
                let len = usize::from(data[idx.saturating_sub(1)] % 32);
                let _ = reader.read_bytes(len);
            }
            6 => {
                let _ = reader.enter_bit_mode();
            }
            7 => {
                let bits = (data[idx.saturating_sub(1)] % 40).saturating_add(1);
                let _ = reader.read_bits(bits);
            }
            _ => {
                let _ = reader.exit_bit_mode();
            }
        }
    }
});
