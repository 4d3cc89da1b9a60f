// Reusable library API; the CLI and the bench runner both build on it
pub mod canonical;
pub mod equivalence;
pub mod errors;
pub mod index;
pub mod letters;
pub mod log;
pub mod wildcard;
pub mod word_store;

pub use canonical::{canonical_hash, sort_letters};
pub use equivalence::are_anagrams;
pub use errors::AnagramError;
pub use index::AnagramIndex;
pub use wildcard::{search_with_wildcards, validate_query, WildcardDescriptor};
pub use word_store::WordStore;
