//! Chat text as sent by the 115 client.
//!
//! Each byte is a literal from a 50-character alphabet, a one- or two-byte
//! dictionary reference, or a colour escape. The decoded text is passed
//! through the profanity filter, truncated, lower-cased and re-capitalized at
//! sentence starts.

mod dictionary;
mod filter;

pub use dictionary::LegacyDictionary;
pub use filter::{censor, mask_pass, FilterError, FILTER_FAILURE_TEXT};

use std::fmt;

/// Text returned when the bytes cannot be decoded.
pub const DECODE_FAILURE_TEXT: &str = "eep!";

const ALPHABET: [char; 50] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    ' ', '!', '?', '.', ',', ':', ';', '(', ')', '-', '&', '*', '\\', '\'',
];

const COLOURS: [&str; 10] = [
    "@red@", "@gre@", "@blu@", "@cya@", "@ran@", "@whi@", "@bla@", "@ora@", "@yel@", "@mag@",
];

/// Why legacy bytes could not be turned into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyTextError {
    /// A two-byte code or colour escape ran past the end.
    Truncated { offset: usize },
    /// A dictionary code points past the end of the word table.
    UnknownWord { index: usize },
}

impl fmt::Display for LegacyTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { offset } => write!(f, "code at byte {offset} is truncated"),
            Self::UnknownWord { index } => write!(f, "dictionary has no word {index}"),
        }
    }
}

impl std::error::Error for LegacyTextError {}

/// Expanded text and the colour tag picked by the last colour escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLegacyText {
    pub text: String,
    pub colour: Option<&'static str>,
}

/// Expands codes into text without any post-processing.
pub fn expand(bytes: &[u8], dictionary: &LegacyDictionary) -> Result<RawLegacyText, LegacyTextError> {
    let mut text = String::new();
    let mut colour = None;
    let mut iter = bytes.iter().copied().enumerate();

    while let Some((offset, code)) = iter.next() {
        let mut second = || {
            iter.next()
                .map(|(_, b)| usize::from(b))
                .ok_or(LegacyTextError::Truncated { offset })
        };
        match code {
            0..=49 => text.push(ALPHABET[usize::from(code)]),
            50..=69 => {
                let index = usize::from(code - 50) * 256 + second()?;
                text.push_str(lookup(dictionary, index)?);
                text.push(' ');
            }
            70..=89 => {
                let index = usize::from(code - 70) * 256 + second()?;
                text.push_str(lookup(dictionary, index)?);
            }
            90..=254 => {
                text.push_str(lookup(dictionary, usize::from(code - 90))?);
                text.push(' ');
            }
            255 => {
                if let Some(tag) = COLOURS.get(second()?) {
                    colour = Some(*tag);
                }
            }
        }
    }
    Ok(RawLegacyText { text, colour })
}

fn lookup(dictionary: &LegacyDictionary, index: usize) -> Result<&str, LegacyTextError> {
    dictionary
        .word(index)
        .ok_or(LegacyTextError::UnknownWord { index })
}

/// Decodes chat bytes into display text.
///
/// Never fails: undecodable bytes give [`DECODE_FAILURE_TEXT`], and an
/// unusable blacklist gives [`FILTER_FAILURE_TEXT`].
#[must_use]
pub fn decode_text(bytes: &[u8], dictionary: &LegacyDictionary, max_chars: usize) -> String {
    let Ok(raw) = expand(bytes, dictionary) else {
        return DECODE_FAILURE_TEXT.to_owned();
    };
    let filtered = censor(&raw.text, &dictionary.blacklist);
    let truncated: String = filtered.chars().take(max_chars).collect();
    let mut out = String::from(raw.colour.unwrap_or(""));
    out.push_str(&capitalize_sentences(&truncated.to_lowercase()));
    out
}

/// Upper-cases the first letter of the text and of each sentence.
fn capitalize_sentences(text: &str) -> String {
    let mut sentence_start = true;
    text.chars()
        .map(|c| {
            let c = if sentence_start && c.is_ascii_lowercase() {
                sentence_start = false;
                c.to_ascii_uppercase()
            } else {
                c
            };
            if matches!(c, '.' | '!' | '?') {
                sentence_start = true;
            }
            c
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> LegacyDictionary {
        LegacyDictionary::new(
            vec!["hello".into(), "kill".into(), "world".into()],
            vec!["kill".into()],
        )
    }

    #[test]
    fn literals_and_single_byte_words() {
        // "HI" then word 0 with trailing space then "!"
        let bytes = [7, 8, 36, 90, 37];
        assert_eq!(decode_text(&bytes, &dictionary(), 80), "Hi hello !");
    }

    #[test]
    fn two_byte_codes() {
        let raw = expand(&[50, 2, 70, 0], &dictionary()).unwrap();
        assert_eq!(raw.text, "world hello");
    }

    #[test]
    fn last_colour_wins_and_prefixes() {
        let bytes = [255, 0, 0, 255, 8, 1];
        assert_eq!(decode_text(&bytes, &dictionary(), 80), "@yel@Ab");
    }

    #[test]
    fn unknown_colour_is_ignored() {
        let raw = expand(&[255, 42, 0], &dictionary()).unwrap();
        assert_eq!(raw.colour, None);
        assert_eq!(raw.text, "A");
    }

    #[test]
    fn dictionary_words_are_filtered() {
        assert_eq!(decode_text(&[91], &dictionary(), 80), "**** ");
    }

    #[test]
    fn literal_letters_are_not_masked() {
        // K I L L from the alphabet arrive upper-case.
        assert_eq!(decode_text(&[10, 8, 11, 11], &dictionary(), 80), "Kill");
    }

    #[test]
    fn sentence_capitalization() {
        // "A. B? C" in literals
        let bytes = [0, 39, 36, 1, 38, 36, 2];
        assert_eq!(decode_text(&bytes, &dictionary(), 80), "A. B? C");
        let raw = "hi there. how are you? 1 ok";
        assert_eq!(capitalize_sentences(raw), "Hi there. How are you? 1 Ok");
    }

    #[test]
    fn truncates_before_lowercasing() {
        let bytes = [0; 100];
        assert_eq!(decode_text(&bytes, &dictionary(), 80).len(), 80);
    }

    #[test]
    fn errors_become_eep() {
        assert_eq!(decode_text(&[50], &dictionary(), 80), DECODE_FAILURE_TEXT);
        assert_eq!(decode_text(&[200], &dictionary(), 80), DECODE_FAILURE_TEXT);
        assert_eq!(decode_text(&[255], &dictionary(), 80), DECODE_FAILURE_TEXT);
        assert_eq!(
            expand(&[93], &dictionary()),
            Err(LegacyTextError::UnknownWord { index: 3 })
        );
    }
}
