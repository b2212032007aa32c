//! Cipher grid construction
//!
//! The grid is a 5x5 arrangement of the 25 letters of the active alphabet
//! policy, each appearing exactly once. The key's letters (deduplicated,
//! first occurrence wins) occupy the earliest cells; the remaining alphabet
//! fills the rest in order. Construction cannot fail: the full alphabet is
//! appended to the key, so 25 unique candidates always exist.

use crate::alphabet::{AlphabetPolicy, DEFAULT_KEY};

/// Side length of the cipher grid.
pub const GRID_SIZE: usize = 5;

const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Location of a letter within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Immutable 5x5 cipher grid with constant-time letter lookup.
///
/// The letter-to-position table is built once at construction instead of
/// scanning the grid per lookup, which matters for long texts.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
    positions: [Option<Position>; 26],
}

impl Grid {
    /// Build the grid from a key string under an alphabet policy.
    ///
    /// An empty key string is replaced by [`DEFAULT_KEY`]. Non-alphabetic
    /// characters are discarded and the policy mapping is applied, so any
    /// key yields a valid grid.
    pub fn build(key: &str, policy: AlphabetPolicy) -> Self {
        let key = if key.is_empty() { DEFAULT_KEY } else { key };

        let mut ordered = [0u8; GRID_CELLS];
        let mut seen = [false; 26];
        let mut count = 0;
        let candidates = key.chars().chain('A'..='Z');
        for c in candidates {
            let Some(letter) = policy.map_letter(c) else {
                continue;
            };
            let slot = (letter - b'A') as usize;
            if seen[slot] {
                continue;
            }
            seen[slot] = true;
            ordered[count] = letter;
            count += 1;
            if count == GRID_CELLS {
                break;
            }
        }

        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        let mut positions = [None; 26];
        for (index, &letter) in ordered.iter().enumerate() {
            let row = index / GRID_SIZE;
            let col = index % GRID_SIZE;
            cells[row][col] = letter;
            positions[(letter - b'A') as usize] = Some(Position { row, col });
        }

        Self { cells, positions }
    }

    /// Position of a letter, or `None` if the policy excluded it.
    pub fn position(&self, letter: u8) -> Option<Position> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        self.positions[(letter - b'A') as usize]
    }

    /// Letter at a possibly out-of-range position, wrapping modulo 5.
    ///
    /// Handles negative pre-wrap values so a -1 shift lands on the far
    /// edge of the grid.
    pub fn at_wrapped(&self, row: isize, col: isize) -> u8 {
        let size = GRID_SIZE as isize;
        let row = ((row % size) + size) % size;
        let col = ((col % size) + size) % size;
        self.cells[row as usize][col as usize]
    }

    /// The grid cells in row-major order.
    pub fn rows(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }
}
