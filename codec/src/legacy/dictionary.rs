//! Word tables for the oldest client's chat encoding.

/// Words the 115 client can send as a one- or two-byte code, plus the
/// blacklist the profanity filter masks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LegacyDictionary {
    /// Indexed by the dictionary code; the first 165 also have one-byte codes.
    pub words: Vec<String>,
    /// Lower-case words masked in decoded chat.
    pub blacklist: Vec<String>,
}

impl LegacyDictionary {
    #[must_use]
    pub fn new(words: Vec<String>, blacklist: Vec<String>) -> Self {
        Self { words, blacklist }
    }

    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }
}

impl Default for LegacyDictionary {
    fn default() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| (*w).to_owned()).collect(),
            blacklist: BUILTIN_BLACKLIST.iter().map(|w| (*w).to_owned()).collect(),
        }
    }
}

const BUILTIN_BLACKLIST: &[&str] = &["kill", "idiot", "stupid", "noob", "damn", "crap"];

const BUILTIN_WORDS: &[&str] = &[
    "the", "and", "you", "that", "was", "for", "are", "with", "his", "they",
    "this", "have", "from", "one", "had", "word", "but", "not", "what", "all",
    "were", "when", "your", "can", "said", "there", "use", "each", "which", "she",
    "how", "their", "will", "other", "about", "out", "many", "then", "them", "these",
    "some", "her", "would", "make", "like", "him", "into", "time", "has", "look",
    "two", "more", "write", "see", "number", "way", "could", "people", "than", "first",
    "water", "been", "call", "who", "now", "find", "long", "down", "day", "did",
    "get", "come", "made", "may", "part", "over", "new", "sound", "take", "only",
    "little", "work", "know", "place", "year", "live", "back", "give", "most", "very",
    "after", "thing", "our", "just", "name", "good", "sentence", "man", "think", "say",
    "great", "where", "help", "through", "much", "before", "line", "right", "too", "mean",
    "old", "any", "same", "tell", "boy", "follow", "came", "want", "show", "also",
    "around", "form", "three", "small", "set", "put", "end", "does", "another", "well",
    "large", "must", "big", "even", "such", "because", "turn", "here", "why", "ask",
    "went", "men", "read", "need", "land", "different", "home", "move", "try", "kind",
    "hand", "picture", "again", "change", "off", "play", "spell", "air", "away", "animal",
    "house", "point", "page", "letter", "mother", "answer", "found", "study", "still", "learn",
    "trade", "sell", "buy", "gold", "coins", "sword", "shield", "bank", "level", "quest",
    "mining", "fishing", "cooking", "magic", "prayer", "attack", "defense", "strength", "rune", "mithril",
    "adamantite", "bronze", "iron", "steel", "varrock", "lumbridge", "falador", "draynor", "wilderness", "dragon",
    "hello", "thanks", "please", "friend", "team", "fight", "duel", "later", "wait", "lol",
];
