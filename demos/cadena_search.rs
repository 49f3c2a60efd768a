//! Cadena Search Driver
//!
//! Loads a file into a cadena, then reports its contents, length, and how
//! often a pattern occurs in it.
//!
//! ```bash
//! cargo run --example cadena_search -- notes.txt "the"
//! cargo run --example cadena_search -- notes.txt "the" --contains --replacement ' '
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use cadena::{CharSequence, SequenceError, DEFAULT_NEWLINE_REPLACEMENT};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Count pattern occurrences in a file loaded as a cadena")]
struct Args {
    /// File to load.
    path: PathBuf,

    /// Literal pattern to search for.
    pattern: String,

    /// Byte that replaces each line break (default: NUL, which drops them).
    #[arg(long, value_parser = parse_replacement)]
    replacement: Option<u8>,

    /// Print whether the pattern occurs instead of the count.
    #[arg(long)]
    contains: bool,
}

fn parse_replacement(raw: &str) -> Result<u8, String> {
    match raw.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(format!("expected a single byte, got {raw:?}")),
    }
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    let replacement = args.replacement.unwrap_or(DEFAULT_NEWLINE_REPLACEMENT);

    let cadena = match CharSequence::from_path(&args.path, replacement) {
        Ok(cadena) => cadena,
        Err(SequenceError::InvalidSource(err)) => {
            println!("ERROR: File not found ({}: {err}).", args.path.display());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            println!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Cadena is: {cadena}");
    println!("Length is: {}", cadena.len());

    if args.contains {
        println!(
            "Cadena contains string {}? {}",
            args.pattern,
            cadena.contains(&args.pattern)
        );
    } else {
        println!(
            "Occurrences of {}: {}",
            args.pattern,
            cadena.search(&args.pattern)
        );
    }

    ExitCode::SUCCESS
}
