//! Single-letter frequency statistics and chi-squared goodness-of-fit

use crate::cipher::{letter_index, ALPHABET_LEN};

/// Relative letter frequencies indexed `a..z`
pub type FrequencyVector = [f64; ALPHABET_LEN];

/// English letter frequencies for frequency analysis
pub const ENGLISH_FREQUENCIES: FrequencyVector = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// Rounds a ratio to three decimal places.
fn round_ratio(ratio: f64) -> f64 {
    (ratio * 1000.0).round() / 1000.0
}

/// Counts the occurrences of each letter in the given text.
///
/// Characters outside `a..z` are ignored.
pub fn count_letters(text: &str) -> [u32; ALPHABET_LEN] {
    let mut counts: [u32; ALPHABET_LEN] = [0; ALPHABET_LEN];

    for c in text.chars() {
        if c.is_ascii_lowercase() {
            counts[letter_index(c) as usize] += 1;
        }
    }

    counts
}

/// Ratio of occurrences of `letter` in `text` to the length of `text`,
/// rounded to three decimal places.
///
/// `text` must not be empty; the ratio is undefined (NaN) otherwise.
pub fn letter_frequency(letter: char, text: &str) -> f64 {
    debug_assert!(!text.is_empty(), "frequency of an empty text is undefined");

    let count = text.chars().filter(|&c| c == letter).count();
    round_ratio(count as f64 / text.len() as f64)
}

/// Frequency of every letter `a..z` in `text`, each rounded like
/// [`letter_frequency`].
///
/// `text` must not be empty.
pub fn letter_frequencies(text: &str) -> FrequencyVector {
    debug_assert!(!text.is_empty(), "frequency of an empty text is undefined");

    let counts = count_letters(text);
    let length = text.len() as f64;
    let mut frequencies: FrequencyVector = [0.0; ALPHABET_LEN];

    for (frequency, &count) in frequencies.iter_mut().zip(counts.iter()) {
        *frequency = round_ratio(count as f64 / length);
    }

    frequencies
}

/// Chi-squared statistic of `observed` against [`ENGLISH_FREQUENCIES`].
///
/// `observed` is first rotated so that index `i` reads `observed[(i + shift) % 26]`;
/// pass `0` to test it as is. Both distributions are scaled by
/// `sample_length` before comparing, so the score grows with the size of
/// the sample the frequencies came from.
///
/// Lower values indicate a closer match to English.
pub fn chi_squared_score(observed: &FrequencyVector, shift: usize, sample_length: usize) -> f64 {
    let length = sample_length as f64;

    (0..ALPHABET_LEN)
        .map(|i| {
            let actual = observed[(i + shift) % ALPHABET_LEN] * length;
            let expected = ENGLISH_FREQUENCIES[i] * length;
            (actual - expected).powi(2) / expected
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "itwasthebestoftimesitwastheworstoftimesitwastheageofwisdom";

    #[test]
    fn test_reference_table_sums_to_one() {
        let total: f64 = ENGLISH_FREQUENCIES.iter().sum();
        assert!((total - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_letter_frequency() {
        assert_eq!(letter_frequency('l', "hello"), 0.4);
        assert_eq!(letter_frequency('z', "hello"), 0.0);
        assert_eq!(letter_frequency('a', "aaaa"), 1.0);
        // 1/3 rounds to three places
        assert_eq!(letter_frequency('a', "abc"), 0.333);
        // 2/3 rounds up
        assert_eq!(letter_frequency('b', "abb"), 0.667);
    }

    #[test]
    fn test_letter_frequencies_match_single_letter() {
        let frequencies = letter_frequencies(SAMPLE);
        for (i, &frequency) in frequencies.iter().enumerate() {
            let letter = (b'a' + i as u8) as char;
            assert_eq!(frequency, letter_frequency(letter, SAMPLE));
        }
    }

    #[test]
    fn test_frequencies_sum_to_one() {
        for text in ["hellomynameishose", "a", SAMPLE] {
            let total: f64 = letter_frequencies(text).iter().sum();
            assert!((total - 1.0).abs() <= 0.003, "{text}: {total}");
        }

        // each of the 26 roundings is off by at most half a thousandth
        let total: f64 = letter_frequencies("thequickbrownfoxjumpsoverthelazydog").iter().sum();
        assert!((total - 1.0).abs() <= 26.0 * 0.0005);
    }

    #[test]
    fn test_count_letters_ignores_other_characters() {
        let counts = count_letters("ab, ba! Z");
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 2);
        assert_eq!(counts[25], 0);
        assert_eq!(counts.iter().sum::<u32>(), 4);
    }

    #[test]
    fn test_chi_squared_zero_at_reference() {
        assert_eq!(chi_squared_score(&ENGLISH_FREQUENCIES, 0, 1), 0.0);
        assert_eq!(chi_squared_score(&ENGLISH_FREQUENCIES, 0, 500), 0.0);
    }

    #[test]
    fn test_chi_squared_shift_undoes_rotation() {
        // observed[j] = reference[j - 3], so reading at (i + 3) restores the table
        let mut rotated: FrequencyVector = [0.0; ALPHABET_LEN];
        for (i, &frequency) in ENGLISH_FREQUENCIES.iter().enumerate() {
            rotated[(i + 3) % ALPHABET_LEN] = frequency;
        }

        assert_eq!(chi_squared_score(&rotated, 3, 100), 0.0);
        assert!(chi_squared_score(&rotated, 0, 100) > 0.0);
    }

    #[test]
    fn test_chi_squared_prefers_english() {
        let english = letter_frequencies(SAMPLE);
        let uniform = [1.0 / ALPHABET_LEN as f64; ALPHABET_LEN];
        let single = letter_frequencies("qqqqqqqqqq");

        let english_score = chi_squared_score(&english, 0, SAMPLE.len());
        let uniform_score = chi_squared_score(&uniform, 0, SAMPLE.len());
        let single_score = chi_squared_score(&single, 0, SAMPLE.len());

        assert!(english_score < uniform_score);
        assert!(uniform_score < single_score);
    }

    #[test]
    fn test_chi_squared_scales_with_sample_length() {
        let frequencies = letter_frequencies(SAMPLE);
        let short = chi_squared_score(&frequencies, 0, 10);
        let long = chi_squared_score(&frequencies, 0, 100);
        assert!((long - short * 10.0).abs() < 1e-9);
    }
}
