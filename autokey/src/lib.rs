//! # Autokey Library
//!
//! This library implements the Vigenère Autokey cipher and a ciphertext-only
//! attack that recovers the key from single-letter frequency statistics.
//!
//! ## Modules
//!
//! - **cipher** - letter shifts and the Autokey encipher/decipher functions
//! - **frequency** - letter frequencies and chi-squared fit against English
//! - **keystream** - deciphers one key position's chain of letters for a guessed key letter
//! - **search** - greedy key recovery for each key length and selection of the best one
//! - **text** - input normalisation and the validated [`Ciphertext`] type
//!
//! ## Usage
//!
//! ```rust
//! use autokey::{analyze, cipher, Ciphertext, KeyLengthRange};
//!
//! let plaintext = autokey::text::normalize(
//!     "It was the best of times, it was the worst of times, it was the age of wisdom, \
//!      it was the age of foolishness, it was the epoch of belief, it was the epoch of \
//!      incredulity, it was the season of Light, it was the season of Darkness, it was \
//!      the spring of hope, it was the winter of despair.",
//! );
//! let ciphertext = Ciphertext::new(cipher::encipher("key", &plaintext))?;
//!
//! let outcome = analyze(&ciphertext, KeyLengthRange::new(1, 6)?)?;
//! assert_eq!(outcome.plaintext.len(), plaintext.len());
//! # Ok::<(), autokey::AutokeyError>(())
//! ```

pub mod cipher;
pub mod error;
pub mod frequency;
pub mod keystream;
pub mod search;
pub mod text;

pub use cipher::{decipher, encipher};
pub use error::{AutokeyError, Result};
pub use frequency::{FrequencyVector, ENGLISH_FREQUENCIES};
pub use search::{analyze, AnalysisOutcome, KeyLengthRange, KeyLengthResult};
pub use text::Ciphertext;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_loader_to_plaintext() {
        let plaintext = "meetmeatthetrainstationatnoonandbringthedocuments";
        let ciphertext = encipher("spy", plaintext);

        // what a loader would hand over: mixed case, spaces, line breaks
        let raw = format!("{}\n{} {}\n", &ciphertext[..10].to_uppercase(), &ciphertext[10..30], &ciphertext[30..]);
        let parsed = Ciphertext::parse(&raw).unwrap();

        assert_eq!(parsed.as_str(), ciphertext);
        assert_eq!(decipher("spy", parsed.as_str()), plaintext);
    }
}
