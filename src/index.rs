//! Hashed anagram index.
//!
//! Words are bucketed by `canonical_hash(word) % slot_count`, so every exact
//! anagram of a word lands in the same bucket as that word. A lookup scans a
//! single bucket and keeps only the entries that pass the equivalence test;
//! anything else in the bucket is a hash collision.
//!
//! Entries borrow from the caller's storage (usually a [`WordStore`]), so the
//! index can never outlive the words it points at.
//!
//! Growth: before each insertion the table doubles if that insertion would
//! bring the load factor (`len / slot_count`) to 0.5 or above, so the load
//! factor is strictly below 0.5 whenever `insert` returns.

use log::debug;

use crate::canonical::canonical_hash_bytes;
use crate::equivalence::are_anagrams_bytes;
use crate::word_store::WordStore;

/// Number of slots in a freshly created index.
pub const INITIAL_SLOTS: usize = 10;

#[derive(Debug, Clone)]
pub struct AnagramIndex<'w> {
    buckets: Vec<Vec<&'w str>>,
    count: usize,
}

impl Default for AnagramIndex<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'w> AnagramIndex<'w> {
    /// An empty index with [`INITIAL_SLOTS`] buckets.
    #[must_use]
    pub fn new() -> Self {
        AnagramIndex {
            buckets: vec![Vec::new(); INITIAL_SLOTS],
            count: 0,
        }
    }

    /// Build an index over every word of `store`, in store order.
    #[must_use]
    pub fn from_store(store: &'w WordStore) -> Self {
        let mut index = Self::new();
        index.extend(store.iter());
        debug!(
            "Indexed {} words into {} slots",
            index.len(),
            index.slot_count()
        );
        index
    }

    /// Number of words stored (duplicates included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of buckets currently allocated.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.slot_count() as f64
    }

    /// Every stored word, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &'w str> + '_ {
        self.buckets.iter().flatten().copied()
    }

    /// Add `word`, growing the table first if needed.
    pub fn insert(&mut self, word: &'w str) {
        if 2 * (self.count + 1) >= self.slot_count() {
            self.resize();
        }
        let slot = slot_for(word, self.slot_count());
        self.buckets[slot].push(word);
        self.count += 1;
    }

    /// Double the number of slots and redistribute every entry.
    ///
    /// Each entry moves exactly once; the old table is dropped afterwards.
    pub fn resize(&mut self) {
        let new_size = self.slot_count() * 2;
        let mut new_buckets: Vec<Vec<&'w str>> = vec![Vec::new(); new_size];

        for word in std::mem::take(&mut self.buckets).into_iter().flatten() {
            new_buckets[slot_for(word, new_size)].push(word);
        }

        debug!(
            "Resized anagram index: {} -> {} slots ({} words)",
            new_size / 2,
            new_size,
            self.count
        );
        self.buckets = new_buckets;
    }

    /// Every stored word that is an exact anagram of `word`, in bucket order.
    ///
    /// An empty vector means "no anagrams"; it is not an error.
    #[must_use]
    pub fn search_exact(&self, word: &str) -> Vec<&'w str> {
        let mut matches = Vec::new();
        self.search_exact_into(word, &mut matches);
        matches
    }

    /// Like [`Self::search_exact`], appending matches to `out`.
    pub fn search_exact_into(&self, word: &str, out: &mut Vec<&'w str>) {
        self.search_exact_bytes_into(word.as_bytes(), out);
    }

    /// Byte-level lookup, for callers that assemble the query in place.
    pub(crate) fn search_exact_bytes_into(&self, word: &[u8], out: &mut Vec<&'w str>) {
        let bucket = &self.buckets[slot_for(word, self.slot_count())];
        out.extend(
            bucket
                .iter()
                .copied()
                .filter(|candidate| are_anagrams_bytes(word, candidate.as_bytes())),
        );
    }
}

impl<'w> Extend<&'w str> for AnagramIndex<'w> {
    fn extend<I: IntoIterator<Item = &'w str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

fn slot_for(word: impl AsRef<[u8]>, size: usize) -> usize {
    // The remainder is below `size`, so it always fits back into a usize.
    (canonical_hash_bytes(word.as_ref()) % size as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::are_anagrams;
    use std::collections::HashSet;

    fn sorted(mut v: Vec<&str>) -> Vec<&str> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_new_index_is_empty() {
        let index = AnagramIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.slot_count(), INITIAL_SLOTS);
        assert!(index.search_exact("anything").is_empty());
    }

    #[test]
    fn test_search_exact_groups_anagrams() {
        let store: WordStore = ["listen", "enlist", "silent", "banana", "anaban"].into_iter().collect();
        let index = AnagramIndex::from_store(&store);

        assert_eq!(sorted(index.search_exact("listen")), vec!["enlist", "listen", "silent"]);
        assert_eq!(sorted(index.search_exact("banana")), vec!["anaban", "banana"]);
        assert!(index.search_exact("tinsel").len() == 3);
        assert!(index.search_exact("listens").is_empty());
    }

    #[test]
    fn test_resize_trigger_points() {
        let words = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"];
        let mut index = AnagramIndex::new();
        let mut sizes = Vec::new();
        for w in words {
            index.insert(w);
            sizes.push(index.slot_count());
        }
        // 5th insertion would reach 5/10, 10th would reach 10/20.
        assert_eq!(sizes, vec![10, 10, 10, 10, 20, 20, 20, 20, 20, 40, 40]);
    }

    #[test]
    fn test_load_factor_stays_below_half() {
        // "aaa", "aab", ... distinct three-letter words
        let owned: Vec<String> = (0..500u32)
            .map(|i| {
                [i / 676, (i / 26) % 26, i % 26]
                    .iter()
                    .map(|&d| char::from(b'a' + d as u8))
                    .collect()
            })
            .collect();
        let mut index = AnagramIndex::new();
        for w in &owned {
            index.insert(w);
            assert!(
                2 * index.len() < index.slot_count(),
                "load factor {} after {} insertions",
                index.load_factor(),
                index.len()
            );
        }
        assert!(index.load_factor() < 0.5);
    }

    #[test]
    fn test_resize_preserves_every_word_once() {
        let store: WordStore = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"]
            .into_iter()
            .collect();
        let mut index = AnagramIndex::from_store(&store);
        let before = sorted(index.iter().collect());
        let slots = index.slot_count();

        index.resize();

        assert_eq!(index.slot_count(), slots * 2);
        assert_eq!(index.len(), store.len());
        assert_eq!(sorted(index.iter().collect()), before);
        for w in store.iter() {
            assert_eq!(index.search_exact(w), vec![w]);
        }
    }

    #[test]
    fn test_round_trip_many_words() {
        let mut owned = Vec::new();
        for a in b'a'..=b'z' {
            for b in b'a'..=b'e' {
                owned.push(String::from_utf8(vec![a, b, b'q']).unwrap());
            }
        }
        let store: WordStore = owned.iter().map(String::as_str).collect();
        let index = AnagramIndex::from_store(&store);
        assert_eq!(index.len(), owned.len());

        for w in store.iter() {
            let found = index.search_exact(w);
            assert!(found.contains(&w), "'{w}' should find itself");
            assert!(found.iter().all(|f| are_anagrams(w, f)));
        }
    }

    #[test]
    fn test_duplicates_stored_separately() {
        let store: WordStore = ["stop", "pots", "stop"].into_iter().collect();
        let index = AnagramIndex::from_store(&store);
        assert_eq!(index.len(), 3);
        assert_eq!(sorted(index.search_exact("tops")), vec!["pots", "stop", "stop"]);
    }

    #[test]
    fn test_bucket_keeps_insertion_order() {
        let store: WordStore = ["evil", "vile", "live", "veil"].into_iter().collect();
        let index = AnagramIndex::from_store(&store);
        assert_eq!(index.search_exact("levi"), vec!["evil", "vile", "live", "veil"]);
    }

    #[test]
    fn test_byte_lookup_matches_str_lookup() {
        let store: WordStore = ["stop", "pots", "spot", "post", "step"].into_iter().collect();
        let index = AnagramIndex::from_store(&store);
        for query in ["tops", "pets", "s*op", "zzzz", "t\u{e9}"] {
            let mut from_bytes = Vec::new();
            index.search_exact_bytes_into(query.as_bytes(), &mut from_bytes);
            assert_eq!(from_bytes, index.search_exact(query), "lookup of '{query}'");
        }
    }

    #[test]
    fn test_empty_word() {
        let mut index = AnagramIndex::new();
        index.insert("");
        index.insert("a");
        assert_eq!(index.search_exact(""), vec![""]);
    }

    #[test]
    fn test_extend_with_borrowed_words() {
        let owned = vec!["tea".to_string(), "eat".to_string(), "ate".to_string()];
        let mut index = AnagramIndex::default();
        index.extend(owned.iter().map(String::as_str));
        let found: HashSet<&str> = index.search_exact("eta").into_iter().collect();
        assert_eq!(found, HashSet::from(["tea", "eat", "ate"]));
    }
}
