//! Gallows drawings
//!
//! Ten frames, one per incorrect guess, each adding detail to the figure.

/// Drawing frames indexed by incorrect-guess count
pub const FRAMES: [&[&str]; 10] = [
    &["   ------", "   |    |", "   |", "   |", "   |", "   |", "---|---"],
    &["   ------", "   |    |", "   |    O", "   |", "   |", "   |", "---|---"],
    &["   ------", "   |    |", "   |    O", "   |    |", "   |", "   |", "---|---"],
    &["   ------", "   |    |", "   |    O", "   |   /|", "   |", "   |", "---|---"],
    &["   ------", "   |    |", "   |    O", r"   |   /|\", "   |", "   |", "---|---"],
    &["   ------", "   |    |", "   |    O", r"   |   /|\", "   |   /", "   |", "---|---"],
    &["   ------", "   |    |", "   |    O", r"   |   /|\", r"   |   / \", "   |", "---|---"],
    &["   ------", "   |    |", "   |    O", r"   |   /|\", r"   |   / \", "   |   |", "---|---"],
    &["   ------", "   |    |", "   |    O", r"   |   /|\", r"   |   / \", "   |   | |", "---|---"],
    &[
        "   ------",
        "   |    |",
        "   |    O",
        r"   |   /|\",
        r"   |   / \",
        "   |   | |",
        "   |  /",
        "---|---",
    ],
];

/// Frame for `incorrect` misses
///
/// Counts past the last frame reuse it, so the tenth miss shows the same frame as the ninth.
#[must_use]
pub fn drawing_frame(incorrect: usize) -> &'static [&'static str] {
    FRAMES[incorrect.min(FRAMES.len() - 1)]
}

/// Frame as a single newline-joined block
#[must_use]
pub fn frame_text(incorrect: usize) -> String {
    drawing_frame(incorrect).join("\n")
}
