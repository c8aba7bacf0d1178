//! Input normalisation and the validated ciphertext type

use std::fmt;

use crate::error::{AutokeyError, Result};

/// Result of normalising raw input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Lowercase letters only
    pub text: String,
    /// Non-whitespace characters that were dropped
    pub discarded: usize,
}

/// Folds `raw` to lowercase and keeps only ASCII letters.
///
/// Line breaks disappear along with all other whitespace, so multi-line
/// input is joined into one string.
pub fn normalize(raw: &str) -> String {
    normalize_report(raw).text
}

/// Like [`normalize`] but also counts the dropped non-whitespace characters.
pub fn normalize_report(raw: &str) -> Normalized {
    let mut text = String::with_capacity(raw.len());
    let mut discarded = 0;

    for c in raw.chars() {
        if c.is_ascii_alphabetic() {
            text.push(c.to_ascii_lowercase());
        } else if !c.is_whitespace() {
            discarded += 1;
        }
    }

    Normalized { text, discarded }
}

/// Non-empty text made only of the letters `a..z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(String);

impl Ciphertext {
    /// Wraps text that is already normalised.
    ///
    /// Fails on an empty string or any character outside `a..z`.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(AutokeyError::InvalidCharacter(bad));
        }
        if text.is_empty() {
            return Err(AutokeyError::EmptyText);
        }
        Ok(Self(text))
    }

    /// Normalises raw input (see [`normalize`]) and wraps the result.
    pub fn parse(raw: &str) -> Result<Self> {
        let text = normalize(raw);
        if text.is_empty() {
            return Err(AutokeyError::EmptyText);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Ciphertext {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
