//! Playfair - classical digraph substitution cipher over a 5x5 key grid

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod cipher;
pub mod digraph;
pub mod error;
pub mod format;
pub mod grid;
pub mod keyreader;
pub mod text_ops;
