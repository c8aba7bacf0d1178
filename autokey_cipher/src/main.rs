use anyhow::{Context, Result};
use autokey::{cipher, text};
use clap::{Parser, ValueEnum};

/// Command-line arguments for the Autokey cipher program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Autokey cipher
    #[arg(short, long, help = "Key string for the cipher (letters only)")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the Autokey cipher program.
fn main() -> Result<()> {
    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;
    let key = cipher::parse_key(&cli.key)?;

    let normalized = text::normalize_report(&content);
    if normalized.discarded > 0 {
        eprintln!(
            "Warning: ignored {} non-letter characters in the input",
            normalized.discarded
        );
    }

    let result = run(&cli.mode, &key, &normalized.text);

    std::fs::write(&cli.output, result)
        .with_context(|| format!("Failed to write output file {}", cli.output))?;

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}

/// Applies the selected operation to normalised text.
fn run(mode: &OperationMode, key: &str, text: &str) -> String {
    match mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", key);
            cipher::encipher(key, text)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", key);
            cipher::decipher(key, text)
        }
    }
}
