//! Base-37 player name hashing.
//!
//! Names travel as a 64-bit hash: each of up to 12 characters is a digit in
//! base 37 (space, `a`-`z`, `0`-`9`).

const MAX_NAME_CHARS: usize = 12;

/// Hash of a display name. Characters outside `[a-z0-9]` become spaces,
/// surrounding spaces are trimmed, and only the first 12 characters count.
#[must_use]
pub fn encode_name(name: &str) -> i64 {
    let cleaned: String = name
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .trim()
        .chars()
        .take(MAX_NAME_CHARS)
        .fold(0i64, |hash, c| {
            let digit = match c {
                'a'..='z' => i64::from(c as u8 - b'a') + 1,
                '0'..='9' => i64::from(c as u8 - b'0') + 27,
                _ => 0,
            };
            hash * 37 + digit
        })
}

/// Display name of a hash. The first letter of each word is capitalized;
/// negative hashes decode to `invalid_name`.
#[must_use]
pub fn decode_name(hash: i64) -> String {
    if hash < 0 {
        return String::from("invalid_name");
    }
    let mut reversed = Vec::new();
    let mut rest = hash;
    while rest != 0 {
        let digit = rest % 37;
        rest /= 37;
        let c = match digit {
            0 => ' ',
            1..=26 => {
                let letter = b'a' + (digit as u8) - 1;
                // Word starts (no letter before it) are upper-case.
                if rest % 37 == 0 {
                    char::from(letter.to_ascii_uppercase())
                } else {
                    char::from(letter)
                }
            }
            _ => char::from(b'0' + (digit as u8) - 27),
        };
        reversed.push(c);
    }
    reversed.iter().rev().collect()
}
