//! Autokey cipher transform over the lowercase Latin alphabet
//!
//! The Autokey variant of Vigenère keys the first `key.len()` letters with
//! the key itself and every later letter with the plaintext letter
//! `key.len()` positions earlier.

use crate::error::{AutokeyError, Result};

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Alphabet index of a lowercase letter (`a` = 0, `z` = 25)
#[inline]
pub fn letter_index(c: char) -> u8 {
    (c as u8).wrapping_sub(b'a')
}

/// Lowercase letter for an alphabet index in `0..26`
#[inline]
pub fn index_letter(index: u8) -> char {
    (b'a' + index % ALPHABET_LEN as u8) as char
}

/// Rotates a lowercase letter forward by `amount` positions (encryption direction).
pub fn shift(c: char, amount: u8) -> char {
    let amount = amount % ALPHABET_LEN as u8;
    index_letter(letter_index(c) + amount)
}

/// Rotates a lowercase letter backward by `amount` positions (decryption direction).
pub fn unshift(c: char, amount: u8) -> char {
    let amount = amount % ALPHABET_LEN as u8;
    index_letter(letter_index(c) + ALPHABET_LEN as u8 - amount)
}

/// Enciphers `plaintext` with the Autokey cipher.
///
/// The effective keystream is `key` followed by `plaintext`.
///
/// # Arguments
///
/// * `key` - Non-empty key of lowercase letters.
/// * `plaintext` - Lowercase letters only.
///
/// # Returns
///
/// A `String` of the same length as `plaintext`.
pub fn encipher(key: &str, plaintext: &str) -> String {
    let keystream = key.chars().chain(plaintext.chars());

    plaintext
        .chars()
        .zip(keystream)
        .map(|(p, k)| shift(p, letter_index(k)))
        .collect()
}

/// Deciphers Autokey `ciphertext`.
///
/// Works strictly left to right: once the key is used up, each letter is
/// keyed by the plaintext letter recovered `key.len()` positions earlier.
///
/// # Arguments
///
/// * `key` - Non-empty key of lowercase letters.
/// * `ciphertext` - Lowercase letters only.
///
/// # Returns
///
/// A `String` of the same length as `ciphertext`.
pub fn decipher(key: &str, ciphertext: &str) -> String {
    debug_assert!(!key.is_empty(), "autokey key must not be empty");

    let key = key.as_bytes();
    let mut plaintext = String::with_capacity(ciphertext.len());

    for (i, c) in ciphertext.chars().enumerate() {
        let key_byte = if i < key.len() {
            key[i]
        } else {
            // plaintext is pure ASCII, so byte offsets equal char offsets
            plaintext.as_bytes()[i - key.len()]
        };
        plaintext.push(unshift(c, letter_index(key_byte as char)));
    }

    plaintext
}

/// Validates a user supplied key and folds it to lowercase.
pub fn parse_key(raw: &str) -> Result<String> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(AutokeyError::EmptyKey);
    }

    if let Some(bad) = key.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(AutokeyError::InvalidCharacter(bad));
    }

    Ok(key.to_ascii_lowercase())
}
