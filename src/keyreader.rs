//! Key reading functionality

use crate::error::{ErrorCategory, ErrorKind, PlayfairError, Result};
use std::io::{self, IsTerminal, Read, Write};
use zeroize::Zeroizing;

/// Trait for reading cipher keys from various sources
pub trait KeyReader {
    /// Read a key as text.
    ///
    /// Returns the key wrapped in `Zeroizing` so it is wiped from memory
    /// when dropped. Trailing newlines and other non-alphabetic characters
    /// are harmless; the cipher's letter filter discards them. An empty key
    /// is valid and selects the default key.
    fn read_key(&mut self) -> Result<Zeroizing<String>>;
}

/// Returns a fixed key (for testing and embedding)
pub struct ConstantKeyReader {
    key: Zeroizing<String>,
}

impl ConstantKeyReader {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Zeroizing::new(key.into()),
        }
    }
}

impl KeyReader for ConstantKeyReader {
    fn read_key(&mut self) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new((*self.key).clone()))
    }
}

/// Reads the key from any io::Read source
pub struct ReaderKeyReader {
    reader: Box<dyn Read>,
}

impl ReaderKeyReader {
    pub fn new(reader: Box<dyn Read>) -> Self {
        Self { reader }
    }
}

impl KeyReader for ReaderKeyReader {
    fn read_key(&mut self) -> Result<Zeroizing<String>> {
        let mut data = Zeroizing::new(Vec::new());
        self.reader.read_to_end(&mut data).map_err(|e| {
            PlayfairError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("error reading key: {}", e),
                e,
            )
        })?;
        let key = std::str::from_utf8(&data).map_err(|e| {
            PlayfairError::with_kind_and_source(
                ErrorCategory::User,
                ErrorKind::InvalidEncoding,
                "key is not valid UTF-8",
                e,
            )
        })?;
        Ok(Zeroizing::new(key.to_string()))
    }
}

/// Reads the key from the terminal with no echo
pub struct TerminalKeyReader;

impl TerminalKeyReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalKeyReader {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyReader for TerminalKeyReader {
    fn read_key(&mut self) -> Result<Zeroizing<String>> {
        if !io::stdin().is_terminal() {
            return Err(PlayfairError::with_kind(
                ErrorCategory::User,
                ErrorKind::KeyUnavailable,
                "cannot read key from terminal - stdin is not a terminal",
            ));
        }

        io::stderr().write_all(b"Key (playfair): ").map_err(|e| {
            PlayfairError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("failed to write prompt: {}", e),
                e,
            )
        })?;
        io::stderr().flush().map_err(|e| {
            PlayfairError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("failed to flush prompt: {}", e),
                e,
            )
        })?;

        // Read the key *without echo*
        let key = rpassword::read_password().map_err(|e| {
            PlayfairError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::KeyUnavailable,
                format!("failure reading key: {}", e),
                e,
            )
        })?;

        Ok(Zeroizing::new(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_reader() {
        let mut reader = ConstantKeyReader::new("monarchy");
        assert_eq!(&*reader.read_key().unwrap(), "monarchy");
        assert_eq!(&*reader.read_key().unwrap(), "monarchy");
    }

    #[test]
    fn test_constant_reader_empty_key() {
        let mut reader = ConstantKeyReader::new("");
        assert_eq!(&*reader.read_key().unwrap(), "");
    }

    #[test]
    fn test_reader_key_reader() {
        let data = b"keyword\n";
        let mut reader = ReaderKeyReader::new(Box::new(&data[..]));
        assert_eq!(&*reader.read_key().unwrap(), "keyword\n");
    }

    #[test]
    fn test_reader_key_reader_rejects_non_utf8() {
        let data: &[u8] = &[0xff, 0xfe, 0x00, 0x01];
        let mut reader = ReaderKeyReader::new(Box::new(data));
        let err = reader.read_key().expect_err("expected encoding error");
        assert_eq!(err.kind, Some(ErrorKind::InvalidEncoding));
        assert_eq!(err.category, ErrorCategory::User);
    }

    /// Tests the terminal reader. This is ignored by default and must be run
    /// explicitly and with human input:
    ///
    /// cargo test test_terminal_reader_interactive -- --ignored --nocapture
    #[test]
    #[ignore]
    fn test_terminal_reader_interactive() {
        let mut reader = TerminalKeyReader::new();
        println!("\nPlease enter a test key:");
        let key = reader.read_key().unwrap();
        println!("You entered: {}", &*key);
        assert!(!key.is_empty(), "Expected non-empty key");
    }
}
