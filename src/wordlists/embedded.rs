//! Embedded word list
//!
//! The built-in words compiled into the binary.

/// Built-in secret words
pub const WORDS: &[&str] = &[
    "python",
    "hangman",
    "programming",
    "computer",
    "developer",
    "challenge",
    "algorithm",
    "function",
];
