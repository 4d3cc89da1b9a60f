//! Canonical anagram key: FNV-1a over the word's letters in sorted order.
//!
//! All exact anagrams share a key because sorting erases letter order. The
//! converse does not hold; distinct multisets may collide, so callers must
//! confirm candidates with [`crate::equivalence::are_anagrams`].

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Return a copy of `word`'s bytes in ascending order.
///
/// Insertion sort: dictionary words are short and this keeps the sort stable
/// and allocation-free beyond the copy.
#[must_use]
pub fn sort_letters(word: &str) -> Vec<u8> {
    sort_bytes(word.as_bytes())
}

fn sort_bytes(word: &[u8]) -> Vec<u8> {
    let mut letters = word.to_vec();
    for i in 1..letters.len() {
        let x = letters[i];
        let mut j = i;
        while j > 0 && letters[j - 1] > x {
            letters[j] = letters[j - 1];
            j -= 1;
        }
        letters[j] = x;
    }
    letters
}

/// 64-bit FNV-1a hash of `sort_letters(word)`.
#[must_use]
pub fn canonical_hash(word: &str) -> u64 {
    canonical_hash_bytes(word.as_bytes())
}

pub(crate) fn canonical_hash_bytes(word: &[u8]) -> u64 {
    sort_bytes(word)
        .into_iter()
        .fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
}
