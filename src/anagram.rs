//! Anagram counting module
//!
//! Counts the distinct arrangements of a word's characters, i.e. the
//! multinomial coefficient `n! / (x1! * x2! * ...)` where `x1, x2, ...` are
//! the occurrence counts of each distinct character.

use num_bigint::BigUint;
use num_traits::One;
use std::collections::HashMap;
use std::fmt;

/// Reasons a word is rejected before it reaches the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    /// The word has no characters
    Empty,
    /// At least one character is not alphabetic
    NotAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::NotAlphabetic => write!(f, "invalid"),
        }
    }
}

impl std::error::Error for WordError {}

/// Check that a word can be counted
///
/// Returns the word unchanged when it is non-empty and every character is
/// alphabetic.
pub fn validate_word(word: &str) -> Result<&str, WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    if !word.chars().all(char::is_alphabetic) {
        return Err(WordError::NotAlphabetic);
    }
    Ok(word)
}

/// `n!` as an unbounded integer, with `0! = 1`
pub fn factorial(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// Occurrence count of each character in the lowercased word
pub fn frequencies(word: &str) -> HashMap<char, u64> {
    let mut counts = HashMap::new();
    for c in word.chars().flat_map(char::to_lowercase) {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Number of distinct anagrams of `word`, ignoring case
///
/// Callers are expected to run [`validate_word`] first; the empty string
/// yields `1` here (the single empty arrangement).
pub fn count_anagrams(word: &str) -> BigUint {
    let counts = frequencies(word);
    let length: u64 = counts.values().sum();

    let denominator = counts
        .values()
        .fold(BigUint::one(), |acc, &count| acc * factorial(count));

    // Exact: the multinomial coefficient is always an integer
    factorial(length) / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(word: &str) -> String {
        count_anagrams(word).to_string()
    }

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0), BigUint::from(1u32));
        assert_eq!(factorial(1), BigUint::from(1u32));
        assert_eq!(factorial(5), BigUint::from(120u32));
        assert_eq!(factorial(20), BigUint::from(2_432_902_008_176_640_000u64));
    }

    #[test]
    fn test_factorial_past_u64() {
        assert_eq!(
            factorial(25).to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(count("aabb"), "6");
        assert_eq!(count("abc"), "6");
        assert_eq!(count("aaa"), "1");
        assert_eq!(count("a"), "1");
        assert_eq!(count("mississippi"), "34650");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count_anagrams("Abc"), count_anagrams("abc"));
        assert_eq!(count_anagrams("CAB"), count_anagrams("abc"));
        assert_eq!(count("AaBb"), "6");
    }

    #[test]
    fn test_frequencies_lowercases() {
        let counts = frequencies("AbBa");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&'a'], 2);
        assert_eq!(counts[&'b'], 2);
    }

    #[test]
    fn test_long_distinct_word_overflows_u64() {
        // 26 distinct letters: 26! > u64::MAX
        let word = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(count_anagrams(word), factorial(26));
        assert_eq!(count(word), "403291461126605635584000000");
    }

    #[test]
    fn test_matches_multinomial_formula() {
        for word in ["banana", "letter", "Committee", "zz", "abcabcabc"] {
            let counts = frequencies(word);
            let n: u64 = counts.values().sum();
            let numerator = factorial(n);
            let denominator = counts
                .values()
                .fold(BigUint::one(), |acc, &c| acc * factorial(c));
            assert_eq!(&numerator % &denominator, BigUint::from(0u32), "{word}");
            assert_eq!(count_anagrams(word), numerator / denominator, "{word}");
        }
    }

    #[test]
    fn test_validate_word() {
        assert_eq!(validate_word("abc"), Ok("abc"));
        assert_eq!(validate_word("Été"), Ok("Été"));
        assert_eq!(validate_word(""), Err(WordError::Empty));
        assert_eq!(validate_word("ab1"), Err(WordError::NotAlphabetic));
        assert_eq!(validate_word("a b"), Err(WordError::NotAlphabetic));
        assert_eq!(validate_word("a-b"), Err(WordError::NotAlphabetic));
    }
}
