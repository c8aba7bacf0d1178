//! Strided keystream extraction for a single key position
//!
//! Under a key of length `L`, ciphertext letter `i + L` is keyed by the
//! plaintext letter at `i`. Guessing the key letter at position `p`
//! therefore fixes the whole chain `p, p + L, p + 2L, ...`: each recovered
//! letter is the key for the next one in the same chain, independently of
//! the other key positions. A correct guess yields English text along the
//! chain, a wrong one yields a letter soup that fails frequency analysis.

use crate::cipher::{letter_index, unshift};

/// Deciphers the chain of ciphertext letters at `position`,
/// `position + key_length`, ... assuming `candidate` is the key letter at
/// `position` of a key `key_length` letters long.
///
/// # Arguments
///
/// * `position` - Key position in `0..key_length`.
/// * `key_length` - Hypothesised key length (>= 1).
/// * `candidate` - Lowercase key letter to test.
/// * `ciphertext` - Lowercase letters only.
///
/// # Returns
///
/// The plaintext letters that chain would hold if the guess is right.
/// Empty when `position` lies beyond the ciphertext.
///
/// # Example
///
/// ```rust
/// use autokey::{cipher, keystream};
///
/// let ciphertext = cipher::encipher("ab", "hellomynameishose");
/// assert_eq!(keystream::extract_set(0, 2, 'a', &ciphertext), "hloyaesoe");
/// assert_eq!(keystream::extract_set(1, 2, 'b', &ciphertext), "elmnmihs");
/// ```
pub fn extract_set(position: usize, key_length: usize, candidate: char, ciphertext: &str) -> String {
    debug_assert!(key_length >= 1, "key length must be at least 1");

    let bytes = ciphertext.as_bytes();
    let mut set = String::with_capacity(bytes.len().saturating_sub(position).div_ceil(key_length));
    let mut key_char = candidate;

    for &byte in bytes.iter().skip(position).step_by(key_length) {
        let plain = unshift(byte as char, letter_index(key_char));
        set.push(plain);
        key_char = plain;
    }

    set
}
