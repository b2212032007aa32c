//! Alphabet policy shared by grid construction and text normalization
//!
//! A Playfair grid holds 25 letters, so one letter of the 26-letter Latin
//! alphabet has to go. The two classical choices are folding J into I or
//! dropping Q. Grid and text must be reduced with the same policy or
//! position lookups silently miss; [`AlphabetPolicy::map_letter`] is the
//! single filter both paths go through.

/// Key substituted when the supplied key string is empty.
pub const DEFAULT_KEY: &str = "KEYWORD";

/// Letter inserted to split duplicate pairs and to pad odd-length text.
pub const PADDING_LETTER: u8 = b'X';

/// Rule reducing the 26-letter alphabet to the 25 letters of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetPolicy {
    /// J collapses into I; Q is retained.
    MergeJIntoI,
    /// Q is dropped; I and J stay distinct.
    OmitQ,
}

impl AlphabetPolicy {
    /// Map a raw input character to its grid letter, if it has one.
    ///
    /// Uppercases, rejects anything outside ASCII A-Z, and applies the
    /// policy. Returns `None` for characters with no place in the grid.
    pub fn map_letter(self, c: char) -> Option<u8> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let upper = c.to_ascii_uppercase() as u8;
        match (self, upper) {
            (AlphabetPolicy::MergeJIntoI, b'J') => Some(b'I'),
            (AlphabetPolicy::OmitQ, b'Q') => None,
            _ => Some(upper),
        }
    }

    /// Whether a letter is a member of this policy's 25-letter set.
    pub fn contains(self, letter: u8) -> bool {
        self.map_letter(letter as char) == Some(letter)
    }

    /// The policy's 25 letters in alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&l| self.contains(l))
    }
}
