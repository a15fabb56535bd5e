//! Secret word representation
//!
//! A `SecretWord` stores the lowercase word along with letter position indices so a guess
//! can reveal every occurrence at once.

use rustc_hash::FxHashMap;
use std::fmt;

/// The word the player has to guess
///
/// Immutable once created. Letters are stored as `char`s so non-ASCII alphabetic words work too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<char>,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything but letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Python").unwrap();
    /// assert_eq!(word.text(), "python");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("pyth0n").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: Vec<char> = text.chars().collect();

        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false` for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters of the word in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
