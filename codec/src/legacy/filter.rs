//! Profanity masking for decoded legacy chat.
//!
//! A blacklisted word matches loosely: look-alike characters stand in for
//! letters (`1` for `i`, `5` for `s`, ...), punctuation and spaces between
//! letters are skipped, and long words tolerate one stray letter.

use std::fmt;

/// Text returned when the blacklist itself is unusable.
pub const FILTER_FAILURE_TEXT: &str = "wibble!";

const MAX_PASSES: usize = 2;

/// The blacklist contains a word too short to match against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterError {
    pub word: String,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blacklist word {:?} is shorter than two characters", self.word)
    }
}

impl std::error::Error for FilterError {}

/// Masks blacklisted words, repeating until the text is stable or two passes
/// have run. Falls back to [`FILTER_FAILURE_TEXT`] on a bad blacklist.
#[must_use]
pub fn censor(text: &str, blacklist: &[String]) -> String {
    let mut current = text.to_owned();
    for _ in 0..MAX_PASSES {
        match mask_pass(&current, blacklist) {
            Ok(next) if next == current => break,
            Ok(next) => current = next,
            Err(_) => return FILTER_FAILURE_TEXT.to_owned(),
        }
    }
    current
}

/// One pass over the text for every blacklist word.
///
/// Matching runs on a lower-cased copy. A matched span is masked only if the
/// current text has no upper-case letter inside it; masking turns every
/// non-space character of the span into `*`.
pub fn mask_pass(text: &str, blacklist: &[String]) -> Result<String, FilterError> {
    let lower: Vec<char> = text.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut current: Vec<char> = text.chars().collect();

    for start in 0..lower.len() {
        for word in blacklist {
            let word: Vec<char> = word.chars().collect();
            if word.len() < 2 {
                return Err(FilterError {
                    word: word.iter().collect(),
                });
            }
            if !lookalike(word[0], lower[start], 0) {
                continue;
            }
            let Some(end) = match_from(&lower, start, &word) else {
                continue;
            };
            let span = &mut current[start..=end];
            if span.iter().any(char::is_ascii_uppercase) {
                continue;
            }
            for c in span.iter_mut().filter(|c| **c != ' ') {
                *c = '*';
            }
        }
    }
    Ok(current.into_iter().collect())
}

/// Index of the last character of a match that begins at `start`.
fn match_from(lower: &[char], start: usize, word: &[char]) -> Option<usize> {
    let len = word.len();
    let mut matched = 1;
    let mut previous = word[0];
    let mut tolerance: i32 = i32::from(len >= 6);

    for (offset, &c) in lower[start + 1..].iter().enumerate() {
        let expected = word[matched];
        if lookalike(expected, c, len) {
            matched += 1;
            if matched >= len {
                return Some(start + 1 + offset);
            }
            previous = expected;
        } else if !skippable(previous, c, len) {
            tolerance -= 1;
            if tolerance < 0 {
                return None;
            }
        }
    }
    None
}

/// `c` may stand in for the letter `expected` in a word of `len` letters.
fn lookalike(expected: char, c: char, len: usize) -> bool {
    if expected == c {
        return true;
    }
    match expected {
        'i' => matches!(c, 'y' | '1' | '!' | ':' | ';') || (len >= 4 && c == 'l'),
        's' => matches!(c, '5' | 'z'),
        'e' => c == '3',
        'a' => c == '4',
        'o' => matches!(c, '0' | '*'),
        'u' | 'w' => c == 'v',
        'c' => matches!(c, '(' | 'k'),
        'k' => matches!(c, '(' | 'c'),
        _ => false,
    }
}

/// `c` may sit between two matched letters without breaking the match.
fn skippable(previous: char, c: char, len: usize) -> bool {
    if previous == c {
        return true;
    }
    if c < 'a' || (c > 'u' && c != 'y') {
        return true;
    }
    match (previous, c) {
        ('i', 'y') | ('c', 'k') | ('k', 'c') => true,
        _ => len >= 5 && is_vowel(previous) && is_vowel(c),
    }
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
