//! File-oriented cipher operations
//!
//! High-level operations tying the pieces together: read input text from a
//! file, obtain the key from a reader, run the cipher, and write the
//! formatted digraph output to a file or stdout.

use crate::alphabet::AlphabetPolicy;
use crate::cipher::{self, Direction};
use crate::error::{ErrorCategory, ErrorKind, PlayfairError, Result};
use crate::format;
use crate::keyreader::KeyReader;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Encrypt a text file with a key
///
/// Reads plaintext from `input_path`, encrypts it using a key from
/// `key_reader`, and writes the formatted ciphertext digraphs to
/// `output_path`, or to stdout when no output path is given.
pub fn encrypt_file(
    input_path: &Path,
    output_path: Option<&Path>,
    key_reader: &mut dyn KeyReader,
    policy: AlphabetPolicy,
) -> Result<()> {
    process_file(input_path, output_path, key_reader, policy, Direction::Encrypt)
}

/// Decrypt a text file with a key
///
/// Reads ciphertext from `input_path` and writes the decrypted digraphs to
/// `output_path` or stdout. Output is the normalized digraph run of the
/// plaintext: uppercase, with padding letters still present.
pub fn decrypt_file(
    input_path: &Path,
    output_path: Option<&Path>,
    key_reader: &mut dyn KeyReader,
    policy: AlphabetPolicy,
) -> Result<()> {
    process_file(input_path, output_path, key_reader, policy, Direction::Decrypt)
}

fn process_file(
    input_path: &Path,
    output_path: Option<&Path>,
    key_reader: &mut dyn KeyReader,
    policy: AlphabetPolicy,
    direction: Direction,
) -> Result<()> {
    let raw = fs::read(input_path).map_err(|e| read_error(input_path, e))?;
    let text = String::from_utf8(raw).map_err(|e| {
        PlayfairError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::InvalidEncoding,
            "input file is not valid UTF-8",
            e,
        )
    })?;
    let key = key_reader.read_key()?;

    let output = cipher::process(&key, &text, policy, direction);
    let rendered = format::format_pairs(&output);

    // An empty sequence produces no output at all, not an empty line.
    match output_path {
        Some(path) => {
            let contents = if rendered.is_empty() {
                rendered
            } else {
                rendered + "\n"
            };
            fs::write(path, contents).map_err(|e| {
                PlayfairError::with_kind_and_source(
                    ErrorCategory::User,
                    ErrorKind::Io,
                    format!("failed to write {}", path.display()),
                    e,
                )
            })?;
        }
        None => {
            if !rendered.is_empty() {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", rendered).map_err(|e| {
                    PlayfairError::with_kind_and_source(
                        ErrorCategory::Internal,
                        ErrorKind::Io,
                        "failed to write to stdout",
                        e,
                    )
                })?;
            }
        }
    }

    Ok(())
}

fn read_error(path: &Path, err: io::Error) -> PlayfairError {
    let category = if err.kind() == io::ErrorKind::NotFound {
        ErrorCategory::User
    } else {
        ErrorCategory::Internal
    };
    PlayfairError::with_kind_and_source(
        category,
        ErrorKind::Io,
        format!("failed to read from {}", path.display()),
        err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::keyreader::ConstantKeyReader;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_encrypt_file_writes_formatted_pairs() {
        let temp_dir = TempDir::new().unwrap();
        let plain_path = temp_dir.path().join("plain.txt");
        let crypt_path = temp_dir.path().join("crypt.txt");

        fs::write(&plain_path, "Hello, World!").unwrap();

        let mut reader = ConstantKeyReader::new("test");
        encrypt_file(
            &plain_path,
            Some(&crypt_path),
            &mut reader,
            AlphabetPolicy::MergeJIntoI,
        )
        .unwrap();

        let ciphertext = fs::read_to_string(&crypt_path).unwrap();
        assert_eq!(ciphertext, "DB QS IQ VP QM FW\n");
    }

    #[test]
    fn test_round_trip_recovers_digraphs() {
        let temp_dir = TempDir::new().unwrap();
        let plain_path = temp_dir.path().join("plain.txt");
        let crypt_path = temp_dir.path().join("crypt.txt");
        let decrypted_path = temp_dir.path().join("decrypted.txt");

        fs::write(&plain_path, "Hello, World!").unwrap();

        let mut reader = ConstantKeyReader::new("test");
        encrypt_file(
            &plain_path,
            Some(&crypt_path),
            &mut reader,
            AlphabetPolicy::MergeJIntoI,
        )
        .unwrap();

        let mut reader = ConstantKeyReader::new("test");
        decrypt_file(
            &crypt_path,
            Some(&decrypted_path),
            &mut reader,
            AlphabetPolicy::MergeJIntoI,
        )
        .unwrap();

        let decrypted = fs::read_to_string(&decrypted_path).unwrap();
        assert_eq!(decrypted, "HE LX LO WO RL DX\n");
    }

    #[test]
    fn test_empty_input_writes_empty_output() {
        let temp_dir = TempDir::new().unwrap();
        let plain_path = temp_dir.path().join("empty.txt");
        let crypt_path = temp_dir.path().join("crypt.txt");

        fs::write(&plain_path, "").unwrap();

        let mut reader = ConstantKeyReader::new("test");
        encrypt_file(
            &plain_path,
            Some(&crypt_path),
            &mut reader,
            AlphabetPolicy::MergeJIntoI,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&crypt_path).unwrap(), "");
    }

    #[test]
    fn test_missing_input_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let mut reader = ConstantKeyReader::new("test");
        let err = encrypt_file(&missing, None, &mut reader, AlphabetPolicy::MergeJIntoI)
            .expect_err("expected read failure");
        assert_eq!(err.kind, Some(ErrorKind::Io));
        assert_eq!(err.category, ErrorCategory::User);
    }

    #[test]
    fn test_non_utf8_input_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let plain_path = temp_dir.path().join("binary.bin");
        fs::write(&plain_path, [0xff, 0xfe, 0x01]).unwrap();

        let mut reader = ConstantKeyReader::new("test");
        let err = encrypt_file(&plain_path, None, &mut reader, AlphabetPolicy::MergeJIntoI)
            .expect_err("expected encoding failure");
        assert_eq!(err.kind, Some(ErrorKind::InvalidEncoding));
    }
}
