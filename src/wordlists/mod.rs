//! Word lists for Hangman
//!
//! Provides the embedded word list and the selectors that pick a secret word.

mod embedded;
pub mod loader;
pub mod selection;

pub use embedded::WORDS;
pub use selection::{FixedSelector, RandomSelector, WordSelector};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
