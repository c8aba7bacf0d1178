use anyhow::{Context, Result};
use autokey::search::{self, AnalysisOutcome, KeyLengthRange, KeyLengthResult};
use autokey::text::{self, Ciphertext};
use clap::Parser;

/// Command-line arguments for the Autokey solver program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Shortest key length to test
    #[arg(
        short,
        long = "min-keylength",
        default_value_t = search::DEFAULT_MIN_KEY_LENGTH,
        help = "Shortest key length to test"
    )]
    min_keylength: usize,

    /// Longest key length to test
    #[arg(
        short = 'M',
        long = "max-keylength",
        default_value_t = search::DEFAULT_MAX_KEY_LENGTH,
        help = "Longest key length to test"
    )]
    max_keylength: usize,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<String>,

    /// Print the text deciphered with every candidate key
    #[arg(short, long, help = "Print the deciphered text for every key length")]
    verbose: bool,
}

/// Below this many letters the statistics get unreliable
const SHORT_TEXT_WARNING: usize = 50;

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    let input: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;

    let ciphertext = load_ciphertext(&input)?;
    println!("Ciphertext loaded ({} letters):\n{}\n", ciphertext.len(), ciphertext);

    if ciphertext.len() < SHORT_TEXT_WARNING {
        eprintln!("Warning: Text may be too short for reliable analysis");
    }

    let range = key_length_range(cli.min_keylength, cli.max_keylength, ciphertext.len())?;
    let outcome = search::analyze(&ciphertext, range)?;

    for result in &outcome.trace {
        print_candidate(result, &ciphertext, cli.verbose);
    }
    print_outcome(&outcome);

    if let Some(path) = &cli.output {
        std::fs::write(path, &outcome.plaintext)
            .with_context(|| format!("Failed to write output file {}", path))?;
        println!("\nDecrypted text saved to: {}", path);
    }

    Ok(())
}

/// Normalises the raw file content, warning about dropped characters.
fn load_ciphertext(input: &str) -> Result<Ciphertext> {
    let normalized = text::normalize_report(input);
    if normalized.discarded > 0 {
        eprintln!(
            "Warning: ignored {} non-letter characters in the input",
            normalized.discarded
        );
    }

    Ciphertext::new(normalized.text).context("Input file contains no letters to analyze")
}

/// Validates the requested range and shrinks it to fit the ciphertext.
fn key_length_range(min: usize, max: usize, text_len: usize) -> Result<KeyLengthRange> {
    let requested = KeyLengthRange::new(min, max)?;
    let range = requested.clamp_to(text_len);

    if range != requested {
        eprintln!(
            "Warning: ciphertext has only {} letters, testing key lengths {} to {}",
            text_len,
            range.min(),
            range.max()
        );
    }

    Ok(range)
}

/// Prints the best key found for one key length.
fn print_candidate(result: &KeyLengthResult, ciphertext: &Ciphertext, verbose: bool) {
    println!("Possible key for length {}:\t{}", result.key_length, result.key);
    println!("Score:\t\t{}", result.score);

    if verbose {
        println!("Deciphered text using key:");
        println!("\"{}\"", result.decipher(ciphertext));
    }
    println!();
}

/// Prints the winning key and the plaintext.
fn print_outcome(outcome: &AnalysisOutcome) {
    println!("***************************************");
    println!("Guessed key:\t{}", outcome.key);
    println!("Length:\t\t{}", outcome.key_length);
    println!("Score:\t\t{}", outcome.score);
    println!();
    println!("Cipher decrypted using key '{}':\n", outcome.key);
    println!("{}", outcome.plaintext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_ciphertext() {
        let ciphertext = load_ciphertext("HFSP zxmz,\nyzeu wpgzs\n").unwrap();
        assert_eq!(ciphertext.as_str(), "hfspzxmzyzeuwpgzs");

        assert!(load_ciphertext("1234 -- !!\n").is_err());
    }

    #[test]
    fn test_key_length_range() {
        let range = key_length_range(1, 100, 17).unwrap();
        assert_eq!((range.min(), range.max()), (1, 17));

        let range = key_length_range(2, 6, 17).unwrap();
        assert_eq!((range.min(), range.max()), (2, 6));

        assert!(key_length_range(0, 6, 17).is_err());
        assert!(key_length_range(7, 6, 17).is_err());
    }
}
