//! The four-byte "last login address" slot of the welcome message.

use std::net::Ipv4Addr;

/// Marker in the first byte for an IPv6 address.
const IPV6_MARKER: u8 = 6;

/// Packs an address into the slot.
///
/// Dotted quads keep the low byte of each part. IPv6 text stores the marker
/// byte followed by the low byte of the last three groups; groups that fail to
/// parse stay zero. Anything else is four zero bytes.
#[must_use]
pub fn encode_ip_slot(address: &str) -> [u8; 4] {
    if address.contains(':') {
        return encode_ipv6_tail(address);
    }
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != 4 {
        return [0; 4];
    }
    let mut slot = [0u8; 4];
    for (byte, part) in slot.iter_mut().zip(&parts) {
        match part.trim().parse::<i64>() {
            Ok(value) => *byte = (value & 0xFF) as u8,
            Err(_) => return [0; 4],
        }
    }
    slot
}

fn encode_ipv6_tail(address: &str) -> [u8; 4] {
    let mut slot = [IPV6_MARKER, 0, 0, 0];
    let groups: Vec<&str> = address.split(':').collect();
    // Fill from the right, skipping the first group.
    for (byte, group) in slot[1..]
        .iter_mut()
        .rev()
        .zip(groups.iter().skip(1).rev())
    {
        if let Ok(value) = u32::from_str_radix(group, 16) {
            *byte = (value & 0xFF) as u8;
        }
    }
    slot
}

/// Reads the slot back as a dotted quad.
#[must_use]
pub fn decode_ip_slot(slot: [u8; 4]) -> String {
    Ipv4Addr::from(slot).to_string()
}
