#![no_main]

use codec::{ConnectionContext, Translator, XorCipher};
use libfuzzer_sys::fuzz_target;
use wire::{ProtocolVersion, RawPacket};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, frame)) = data.split_first() else {
        return;
    };
    let version = ProtocolVersion::ALL[usize::from(selector) % ProtocolVersion::ALL.len()];
    let mut ctx = ConnectionContext::new(version);
    if selector & 0x80 != 0 {
        ctx = ctx.with_session(i32::from(selector));
    }
    let translator = Translator::builder()
        .with_cipher(XorCipher::new(*b"fuzz"))
        .with_wire_limits(wire::Limits::for_testing())
        .build();

    let Ok(packet) = RawPacket::from_frame(frame, translator.wire_limits()) else {
        return;
    };
    let well_formed = translator.is_well_formed(version, packet.opcode, packet.len());
    if let Ok(message) = translator.parse(&packet, &ctx) {
        assert!(well_formed, "parsed a packet the validator refuses");
        // Re-encoding what parsed must not panic.
        let _ = translator.encode_client(&message, &ctx);
    }
    let _ = translator.decode_server(&packet, &ctx);
});
