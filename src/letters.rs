//! Alphabet constants and per-character helpers shared by the anagram engine.

use std::ops::RangeInclusive;

// Character-set constants
pub const ALPHABET_SIZE: usize = 26;
pub const LOWERCASE_ALPHABET: RangeInclusive<u8> = b'a'..=b'z';

/// Query-only placeholder that stands for any single letter.
pub const WILDCARD: u8 = b'*';

/// Most wildcards a query may carry; the expansion cost is exponential in this.
pub const MAX_WILDCARDS: usize = 4;

/// Map a lowercase ASCII letter to `0..26`, or `None` for anything else.
#[must_use]
pub fn letter_index(c: u8) -> Option<usize> {
    c.checked_sub(b'a').map(usize::from).filter(|&diff| diff < ALPHABET_SIZE)
}

pub trait AnagramChar {
    fn is_letter(&self) -> bool;
    fn is_wildcard(&self) -> bool;
}

impl AnagramChar for u8 {
    fn is_letter(&self) -> bool {
        self.is_ascii_lowercase()
    }
    fn is_wildcard(&self) -> bool {
        *self == WILDCARD
    }
}

impl AnagramChar for char {
    fn is_letter(&self) -> bool {
        self.is_ascii_lowercase()
    }
    fn is_wildcard(&self) -> bool {
        *self == char::from(WILDCARD)
    }
}

/// Number of wildcard symbols in `word`.
#[must_use]
pub fn count_wildcards(word: &str) -> usize {
    word.bytes().filter(|c| c.is_wildcard()).count()
}
