//! Output formatting
//!
//! Presentation-only rendering of a digraph sequence: two-letter groups
//! separated by single spaces, wrapped after a fixed number of pairs per
//! line. Not part of the cipher contract.

use crate::digraph::DigraphSequence;

/// Pairs printed per line before wrapping.
pub const PAIRS_PER_LINE: usize = 26;

/// Render a digraph sequence as spaced pairs with line wrapping.
///
/// Returns an empty string for an empty sequence. No trailing whitespace.
pub fn format_pairs(sequence: &DigraphSequence) -> String {
    let mut out = String::with_capacity(sequence.len() + sequence.len() / 2);
    for (index, (first, second)) in sequence.pairs().enumerate() {
        if index > 0 {
            out.push(if index % PAIRS_PER_LINE == 0 { '\n' } else { ' ' });
        }
        out.push(first as char);
        out.push(second as char);
    }
    out
}
