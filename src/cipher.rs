//! Digraph transformation
//!
//! Applies the Playfair row/column/rectangle rule to each digraph:
//! - Same row: shift right (encrypt) or left (decrypt)
//! - Same column: shift down (encrypt) or up (decrypt)
//! - Rectangle: swap columns (direction-independent, self-inverse)
//!
//! The shift direction is the only difference between encryption and
//! decryption, which is what makes the two operations symmetric.

use crate::alphabet::AlphabetPolicy;
use crate::digraph::{self, DigraphSequence};
use crate::grid::Grid;

/// Shift direction for the row and column rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn shift(self) -> isize {
        match self {
            Direction::Encrypt => 1,
            Direction::Decrypt => -1,
        }
    }
}

/// Transform a digraph sequence over a grid.
///
/// Pairs are taken in non-overlapping steps of two. A pair with either
/// letter absent from the grid is skipped entirely; this cannot happen when
/// the sequence was normalized under the grid's own alphabet policy.
pub fn transform(sequence: &DigraphSequence, grid: &Grid, direction: Direction) -> DigraphSequence {
    let mut out = String::with_capacity(sequence.len());

    for (first, second) in sequence.pairs() {
        let (Some(a), Some(b)) = (grid.position(first), grid.position(second)) else {
            continue;
        };

        let shift = direction.shift();
        if a.row == b.row {
            out.push(grid.at_wrapped(a.row as isize, a.col as isize + shift) as char);
            out.push(grid.at_wrapped(b.row as isize, b.col as isize + shift) as char);
        } else if a.col == b.col {
            out.push(grid.at_wrapped(a.row as isize + shift, a.col as isize) as char);
            out.push(grid.at_wrapped(b.row as isize + shift, b.col as isize) as char);
        } else {
            out.push(grid.at_wrapped(a.row as isize, b.col as isize) as char);
            out.push(grid.at_wrapped(b.row as isize, a.col as isize) as char);
        }
    }

    DigraphSequence::new(out)
}

/// Build the grid, normalize the text, and transform it in one call.
///
/// Duplicate-letter splitting during normalization applies only when
/// encrypting.
pub fn process(
    key: &str,
    text: &str,
    policy: AlphabetPolicy,
    direction: Direction,
) -> DigraphSequence {
    let grid = Grid::build(key, policy);
    let sequence = digraph::normalize(text, policy, direction == Direction::Encrypt);
    transform(&sequence, &grid, direction)
}

/// Encrypt plaintext with a key under an alphabet policy.
pub fn encrypt(key: &str, plaintext: &str, policy: AlphabetPolicy) -> DigraphSequence {
    process(key, plaintext, policy, Direction::Encrypt)
}

/// Decrypt ciphertext with a key under an alphabet policy.
///
/// Output is the normalized digraph run of the plaintext: uppercase, with
/// any padding letters that encryption inserted still present.
pub fn decrypt(key: &str, ciphertext: &str, policy: AlphabetPolicy) -> DigraphSequence {
    process(key, ciphertext, policy, Direction::Decrypt)
}
