//! Letter-multiset comparison with bounded wildcard slack.
//!
//! Two strings are anagrams when they have the same length and, after every
//! letter of one is paired with an equal letter of the other, each leftover
//! letter can be covered by a wildcard (`*`) on the opposite side. At most
//! [`MAX_WILDCARDS`] wildcards per side count as slack; any further `*` is
//! treated like any other non-letter and fails the comparison.
//!
//! Dictionary words never carry wildcards, so in practice only the query side
//! spends slack. Allowing it on both sides keeps the test symmetric.

use crate::letters::{letter_index, AnagramChar, ALPHABET_SIZE, MAX_WILDCARDS};

/// Returns `true` iff `a` and `b` are anagrams of each other, with each `*`
/// (up to four per side) standing for any single letter.
///
/// Never panics; malformed input (uppercase, digits, a fifth wildcard, ...)
/// is simply "not an anagram".
#[must_use]
pub fn are_anagrams(a: &str, b: &str) -> bool {
    are_anagrams_bytes(a.as_bytes(), b.as_bytes())
}

/// Byte-level form of [`are_anagrams`]; non-ASCII bytes are never letters.
pub(crate) fn are_anagrams_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    // Positive: `a` has more of that letter. Negative: `b` has more.
    let mut counts = [0i32; ALPHABET_SIZE];
    let mut slack_a = 0usize;
    let mut slack_b = 0usize;

    for (&x, &y) in a.iter().zip(b) {
        if !tally(x, 1, &mut counts, &mut slack_a) || !tally(y, -1, &mut counts, &mut slack_b) {
            return false;
        }
    }

    for count in counts {
        let excess = count.unsigned_abs() as usize;
        let pool = if count > 0 { &mut slack_b } else { &mut slack_a };
        match pool.checked_sub(excess) {
            Some(rest) => *pool = rest,
            None => return false,
        }
    }

    // Equal lengths mean whatever slack is left pairs wildcard with wildcard.
    debug_assert_eq!(slack_a, slack_b);
    true
}

/// Record one character; `false` means it is neither a letter nor an allowed wildcard.
fn tally(c: u8, delta: i32, counts: &mut [i32; ALPHABET_SIZE], slack: &mut usize) -> bool {
    if c.is_wildcard() && *slack < MAX_WILDCARDS {
        *slack += 1;
        return true;
    }
    match letter_index(c) {
        Some(i) => {
            counts[i] += delta;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_silent() {
        assert!(are_anagrams("listen", "silent"));
    }

    #[test]
    fn test_hello_world() {
        assert!(!are_anagrams("hello", "world"));
    }

    #[test]
    fn test_length_gate() {
        assert!(!are_anagrams("abc", "abcd"));
        assert!(!are_anagrams("abcd", "abc"));
        assert!(!are_anagrams("", "a"));
        assert!(!are_anagrams("****", "abc"));
    }

    #[test]
    fn test_empty_strings_are_anagrams() {
        assert!(are_anagrams("", ""));
    }

    #[test]
    fn test_reflexive() {
        for w in ["a", "zz", "banana", "abcdefghijklmnopqrstuvwxyz", "mississippi"] {
            assert!(are_anagrams(w, w), "'{w}' should be an anagram of itself");
        }
    }

    #[test]
    fn test_same_letters_different_counts() {
        assert!(!are_anagrams("aab", "abb"));
        assert!(!are_anagrams("banana", "bannna"));
    }

    #[test]
    fn test_single_wildcard() {
        assert!(are_anagrams("a*c", "abc"));
        assert!(are_anagrams("ab*d", "abcd"));
        assert!(are_anagrams("*at", "tac"));
        assert!(!are_anagrams("a*c", "abd"));
    }

    #[test]
    fn test_wildcard_covers_repeated_letter() {
        assert!(are_anagrams("b*nana", "banana"));
        assert!(are_anagrams("**nana", "banana"));
        assert!(are_anagrams("****na", "banana"));
    }

    #[test]
    fn test_all_wildcards() {
        assert!(are_anagrams("****", "word"));
        assert!(are_anagrams("*", "q"));
    }

    #[test]
    fn test_fifth_wildcard_fails() {
        // The fifth '*' is not slack; it is an illegal character.
        assert!(!are_anagrams("*****", "abcde"));
        assert!(!are_anagrams("*****a", "abcdea"));
    }

    #[test]
    fn test_wildcards_on_both_sides() {
        assert!(are_anagrams("*x", "*y"));
        assert!(are_anagrams("**", "**"));
        assert!(are_anagrams("a*", "*b"));
        assert!(!are_anagrams("xx*", "yy*"));
    }

    #[test]
    fn test_invalid_characters_fail_closed() {
        assert!(!are_anagrams("Abc", "bca"));
        assert!(!are_anagrams("abc", "bcA"));
        assert!(!are_anagrams("a1c", "ca1"));
        assert!(!are_anagrams("a c", "ca "));
        assert!(!are_anagrams("ab{", "{ba"));
        assert!(!are_anagrams("é", "é"));
    }

    #[test]
    fn test_symmetry() {
        let words = [
            "", "a", "b", "ab", "ba", "aa", "a*", "*b", "**", "abc", "cab", "a*c", "abd",
            "***", "*x*", "listen", "silent", "enlist", "tinsel", "l*sten", "s***nt",
        ];
        for a in words {
            for b in words {
                assert_eq!(
                    are_anagrams(a, b),
                    are_anagrams(b, a),
                    "symmetry failed for ('{a}', '{b}')"
                );
            }
        }
    }
}
