//! Wildcard expansion on top of the hashed index.
//!
//! A query like `"a**le"` cannot be hashed directly, because the canonical key
//! depends on the letters the wildcards stand for. Instead every wildcard is
//! replaced by concrete letters and each resulting word is looked up exactly.
//!
//! Letters are assigned to wildcard positions (left to right) in
//! non-decreasing order, so `"**"` tries `aa, ab, ..., az, bb, bc, ...` but
//! never `ba`. Because anagram lookup only depends on the multiset of letters,
//! swapping which wildcard received which letter would produce the same key
//! and the same matches; each multiset is therefore tried once.
//!
//! Results from different substitutions are concatenated as-is, with no
//! de-duplication.

use log::debug;

use crate::errors::AnagramError;
use crate::index::AnagramIndex;
use crate::letters::{AnagramChar, LOWERCASE_ALPHABET, MAX_WILDCARDS};

/// Positions of the wildcards in a query, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WildcardDescriptor {
    positions: Vec<usize>,
}

impl WildcardDescriptor {
    /// Locate every `*` in `query`.
    ///
    /// # Errors
    ///
    /// Returns [`AnagramError::TooManyWildcards`] if there are more than
    /// [`MAX_WILDCARDS`] of them.
    pub fn scan(query: &str) -> Result<Self, AnagramError> {
        let positions: Vec<usize> = query
            .bytes()
            .enumerate()
            .filter(|(_, c)| c.is_wildcard())
            .map(|(i, _)| i)
            .collect();

        if positions.len() > MAX_WILDCARDS {
            return Err(AnagramError::TooManyWildcards {
                query: query.to_string(),
                count: positions.len(),
            });
        }
        Ok(WildcardDescriptor { positions })
    }

    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Strict query check for callers that want an error instead of "no match".
///
/// # Errors
///
/// - [`AnagramError::InvalidQueryChar`] for any character other than a-z or `*`.
/// - [`AnagramError::TooManyWildcards`] for more than four `*`.
pub fn validate_query(query: &str) -> Result<(), AnagramError> {
    if let Some(invalid_char) = query.chars().find(|c| !c.is_letter() && !c.is_wildcard()) {
        return Err(AnagramError::InvalidQueryChar {
            query: query.to_string(),
            invalid_char,
        });
    }
    WildcardDescriptor::scan(query).map(|_| ())
}

/// Every indexed word that is an anagram of `query`, where each `*` in the
/// query stands for any letter.
///
/// With no wildcards this is a single [`AnagramIndex::search_exact`].
/// Otherwise the query is expanded as described in the module docs, one
/// exact lookup per combination. Characters outside a-z simply produce no
/// matches.
///
/// # Errors
///
/// Returns [`AnagramError::TooManyWildcards`] before doing any lookup if the
/// query has more than four `*`.
pub fn search_with_wildcards<'w>(
    index: &AnagramIndex<'w>,
    query: &str,
) -> Result<Vec<&'w str>, AnagramError> {
    let wildcards = WildcardDescriptor::scan(query)?;
    if wildcards.is_empty() {
        return Ok(index.search_exact(query));
    }

    let mut concrete = query.as_bytes().to_vec();
    let mut results = Vec::new();
    let lookups = expand(index, &mut concrete, wildcards.positions(), *LOWERCASE_ALPHABET.start(), &mut results);

    debug!(
        "Expanded '{query}' ({} wildcards) into {lookups} lookups, {} matches",
        wildcards.count(),
        results.len()
    );
    Ok(results)
}

/// Fill `positions[0]` with each letter from `min_letter` to `z`, recursing on
/// the rest. Returns the number of exact lookups performed.
fn expand<'w>(
    index: &AnagramIndex<'w>,
    concrete: &mut [u8],
    positions: &[usize],
    min_letter: u8,
    results: &mut Vec<&'w str>,
) -> usize {
    let Some((&pos, rest)) = positions.split_first() else {
        index.search_exact_bytes_into(concrete, results);
        return 1;
    };

    let mut lookups = 0;
    for letter in min_letter..=*LOWERCASE_ALPHABET.end() {
        concrete[pos] = letter;
        lookups += expand(index, concrete, rest, letter, results);
    }
    lookups
}
