//! Text normalization into digraphs
//!
//! Raw input becomes an even-length run of uppercase grid letters, grouped
//! into adjacent pairs. Filtering uses the same policy mapping as grid
//! construction, so every normalized letter is guaranteed a grid position.

use std::fmt;

use crate::alphabet::{AlphabetPolicy, PADDING_LETTER};

/// Even-length sequence of uppercase letters, consumed pairwise.
///
/// Only produced by [`normalize`] and the transformer, which both uphold
/// the even-length invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigraphSequence(String);

impl DigraphSequence {
    pub(crate) fn new(letters: String) -> Self {
        debug_assert!(letters.len() % 2 == 0);
        Self(letters)
    }

    /// The raw letter run, without pair separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (always even).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adjacent non-overlapping pairs, in order.
    pub fn pairs(&self) -> impl Iterator<Item = (u8, u8)> {
        self.0.as_bytes().chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

impl fmt::Display for DigraphSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize raw text into an even-length digraph sequence.
///
/// Uppercases, discards non-alphabetic characters, and applies the policy
/// mapping. When `for_encryption` is set, the filtered text is scanned two
/// letters at a time and a [`PADDING_LETTER`] is inserted between the two
/// halves of a duplicate pair; the inserted pad shifts pairing alignment
/// for the remainder of the text. Decryption skips the duplicate pass.
/// An odd-length result is padded with one final [`PADDING_LETTER`].
pub fn normalize(text: &str, policy: AlphabetPolicy, for_encryption: bool) -> DigraphSequence {
    let mut filtered = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(letter) = policy.map_letter(c) {
            filtered.push(letter as char);
        }
    }

    let mut prepared = if for_encryption {
        let letters = filtered.as_bytes();
        let mut out = String::with_capacity(letters.len() + 1);
        let mut index = 0;
        while index < letters.len() {
            out.push(letters[index] as char);
            if index + 1 < letters.len() {
                if letters[index] == letters[index + 1] {
                    out.push(PADDING_LETTER as char);
                }
                out.push(letters[index + 1] as char);
            }
            index += 2;
        }
        out
    } else {
        filtered
    };

    if prepared.len() % 2 == 1 {
        prepared.push(PADDING_LETTER as char);
    }

    DigraphSequence::new(prepared)
}
