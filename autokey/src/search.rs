//! Key-length search
//!
//! For every key length in the configured range, each key position is
//! solved greedily: all 26 letters are tried through
//! [`extract_set`](crate::keystream::extract_set) and the one whose chain
//! fits English best (lowest chi-squared) is kept. The mean of the
//! per-position scores rates the key length itself, and the best rated
//! length wins.

use std::ops::RangeInclusive;

use crate::cipher::{decipher, index_letter, ALPHABET_LEN};
use crate::error::{AutokeyError, Result};
use crate::frequency::{chi_squared_score, letter_frequencies};
use crate::keystream::extract_set;
use crate::text::Ciphertext;

/// Shortest key length tried by default
pub const DEFAULT_MIN_KEY_LENGTH: usize = 1;

/// Longest key length tried by default
pub const DEFAULT_MAX_KEY_LENGTH: usize = 100;

/// Inclusive range of key lengths to test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLengthRange {
    min: usize,
    max: usize,
}

impl KeyLengthRange {
    /// Creates a range, rejecting `min == 0` and `max < min`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min < 1 {
            return Err(AutokeyError::InvalidMinKeyLength);
        }
        if max < min {
            return Err(AutokeyError::InvalidKeyLengthRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// All key lengths of the range in ascending order
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    /// Lowers the bounds so no key length exceeds `text_len` (>= 1).
    pub fn clamp_to(self, text_len: usize) -> Self {
        let max = self.max.min(text_len.max(1));
        Self {
            min: self.min.min(max),
            max,
        }
    }

    /// Every key position needs at least one ciphertext letter to score.
    pub fn check_against(&self, ciphertext: &Ciphertext) -> Result<()> {
        if self.max > ciphertext.len() {
            return Err(AutokeyError::KeyLengthExceedsText {
                max: self.max,
                len: ciphertext.len(),
            });
        }
        Ok(())
    }
}

impl Default for KeyLengthRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_KEY_LENGTH,
            max: DEFAULT_MAX_KEY_LENGTH,
        }
    }
}

/// Best key found for one key length
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLengthResult {
    pub key_length: usize,
    pub key: String,
    /// Mean chi-squared score over all key positions (lower is better)
    pub score: f64,
}

impl KeyLengthResult {
    /// Deciphers `ciphertext` with this candidate key.
    pub fn decipher(&self, ciphertext: &Ciphertext) -> String {
        decipher(&self.key, ciphertext.as_str())
    }
}

/// Outcome of a full key-length search
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub key_length: usize,
    pub key: String,
    pub score: f64,
    pub plaintext: String,
    /// One entry per tested key length, ascending
    pub trace: Vec<KeyLengthResult>,
}

/// Finds the most likely key letter at `position` for a key of `key_length`.
///
/// # Returns
///
/// The letter with the lowest chi-squared score and that score. Among equal
/// scores the alphabetically first letter wins.
pub fn guess_key_char(ciphertext: &Ciphertext, position: usize, key_length: usize) -> (char, f64) {
    let text = ciphertext.as_str();
    let mut best_char = 'a';
    let mut best_score = f64::INFINITY;

    for index in 0..ALPHABET_LEN as u8 {
        let candidate = index_letter(index);
        let set = extract_set(position, key_length, candidate, text);
        let score = chi_squared_score(&letter_frequencies(&set), 0, text.len());

        if score < best_score {
            best_score = score;
            best_char = candidate;
        }
    }

    (best_char, best_score)
}

/// Builds the most likely key of `key_length` letters, one position at a time.
///
/// `key_length` must lie in `1..=ciphertext.len()`.
pub fn analyze_key_length(ciphertext: &Ciphertext, key_length: usize) -> KeyLengthResult {
    let mut key = String::with_capacity(key_length);
    let mut total = 0.0;

    for position in 0..key_length {
        let (key_char, score) = guess_key_char(ciphertext, position, key_length);
        key.push(key_char);
        total += score;
    }

    KeyLengthResult {
        key_length,
        key,
        score: total / key_length as f64,
    }
}

/// Picks the result with the lowest score; the earliest one wins ties.
fn best_result(trace: &[KeyLengthResult]) -> Option<&KeyLengthResult> {
    trace.iter().fold(None::<&KeyLengthResult>, |best, result| match best {
        Some(current) if result.score >= current.score => Some(current),
        _ => Some(result),
    })
}

/// Runs the search over every key length in `range` and deciphers the
/// ciphertext with the winning key.
///
/// # Errors
///
/// [`AutokeyError::KeyLengthExceedsText`] when `range` reaches beyond the
/// ciphertext length.
pub fn analyze(ciphertext: &Ciphertext, range: KeyLengthRange) -> Result<AnalysisOutcome> {
    range.check_against(ciphertext)?;

    let trace: Vec<KeyLengthResult> = range
        .lengths()
        .map(|key_length| analyze_key_length(ciphertext, key_length))
        .collect();

    let best = best_result(&trace).ok_or(AutokeyError::InvalidKeyLengthRange {
        min: range.min(),
        max: range.max(),
    })?;

    let key_length = best.key_length;
    let key = best.key.clone();
    let score = best.score;
    let plaintext = decipher(&key, ciphertext.as_str());

    Ok(AnalysisOutcome {
        key_length,
        key,
        score,
        plaintext,
        trace,
    })
}
