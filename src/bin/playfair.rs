//! Playfair CLI - classical digraph cipher
//!
//! Command-line interface for encrypting and decrypting text with the
//! Playfair cipher over a 5x5 key-derived letter grid.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

use playfair::alphabet::AlphabetPolicy;
use playfair::keyreader::{KeyReader, ReaderKeyReader, TerminalKeyReader};
use playfair::text_ops;

#[derive(Parser)]
#[command(name = "playfair")]
#[command(version)]
#[command(about = "Classical Playfair digraph cipher.", long_about = None)]
struct Cli {
    /// Read the key from stdin instead of from terminal
    #[arg(long, global = true)]
    key_stdin: bool,

    /// 25-letter alphabet variant used for the grid and the text
    #[arg(long, global = true, value_enum, default_value_t = Alphabet::MergeIj)]
    alphabet: Alphabet,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Alphabet {
    /// Fold J into I, keep Q
    MergeIj,
    /// Drop Q, keep I and J distinct
    OmitQ,
}

impl From<Alphabet> for AlphabetPolicy {
    fn from(alphabet: Alphabet) -> Self {
        match alphabet {
            Alphabet::MergeIj => AlphabetPolicy::MergeJIntoI,
            Alphabet::OmitQ => AlphabetPolicy::OmitQ,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a text file
    #[command(alias = "e")]
    Encrypt {
        /// Path to the file whose contents is to be encrypted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the ciphertext digraphs to (stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Decrypt a text file
    #[command(alias = "d")]
    Decrypt {
        /// Path to the file whose contents is to be decrypted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the plaintext digraphs to (stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let policy = AlphabetPolicy::from(cli.alphabet);

    let result = match cli.command {
        Commands::Encrypt { input, output } => {
            let mut reader = get_key_reader(cli.key_stdin);
            text_ops::encrypt_file(&input, output.as_deref(), &mut *reader, policy)
        }
        Commands::Decrypt { input, output } => {
            let mut reader = get_key_reader(cli.key_stdin);
            text_ops::decrypt_file(&input, output.as_deref(), &mut *reader, policy)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn get_key_reader(use_stdin: bool) -> Box<dyn KeyReader> {
    if use_stdin {
        Box::new(ReaderKeyReader::new(Box::new(std::io::stdin())))
    } else {
        Box::new(TerminalKeyReader)
    }
}
