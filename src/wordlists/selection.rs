//! Secret word selection
//!
//! Defines the `WordSelector` trait and concrete implementations.

use crate::core::SecretWord;

/// A strategy for picking the secret word of a new session
pub trait WordSelector {
    /// Select a word from `words`
    ///
    /// Returns `None` if nothing can be selected (e.g. the list is empty).
    fn select<'a>(&self, words: &'a [SecretWord]) -> Option<&'a SecretWord>;
}

/// Uniformly random selection using the thread-local RNG
pub struct RandomSelector;

impl WordSelector for RandomSelector {
    fn select<'a>(&self, words: &'a [SecretWord]) -> Option<&'a SecretWord> {
        use rand::prelude::IndexedRandom;

        words.choose(&mut rand::rng())
    }
}

/// Always selects one specific word, if it is in the list
///
/// Pins the secret word for deterministic games.
pub struct FixedSelector {
    text: String,
}

impl FixedSelector {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_lowercase(),
        }
    }
}

impl WordSelector for FixedSelector {
    fn select<'a>(&self, words: &'a [SecretWord]) -> Option<&'a SecretWord> {
        words.iter().find(|w| w.text() == self.text)
    }
}
