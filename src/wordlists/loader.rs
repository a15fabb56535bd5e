//! Word list loading utilities
//!
//! Turns the embedded word constants into validated secret words.

use crate::core::SecretWord;

/// Convert embedded string slice to a word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}
