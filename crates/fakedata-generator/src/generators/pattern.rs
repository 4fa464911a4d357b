//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `#` - random digit
//! - `^` - random non-zero digit
//! - `?` - random upper-case ASCII letter
//!
//! Every other character is copied as-is.

use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => random_digit(rng, 0),
            '^' => random_digit(rng, 1),
            '?' => random_letter(rng, LETTERS),
            other => other,
        })
        .collect()
}

/// Pick a random character from an ASCII alphabet.
pub fn random_letter<R: Rng>(rng: &mut R, alphabet: &[u8]) -> char {
    alphabet[rng.gen_range(0..alphabet.len())] as char
}

fn random_digit<R: Rng>(rng: &mut R, min: u8) -> char {
    (b'0' + rng.gen_range(min..10)) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_pattern_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("code-###", &mut rng);

        assert!(value.starts_with("code-"));
        assert_eq!(value.len(), 5 + 3);
        assert!(value[5..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_pattern_non_zero_digit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let value = generate_pattern("^", &mut rng);
            assert_ne!(value, "0");
        }
    }

    #[test]
    fn test_generate_pattern_letters() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("?#? #?#", &mut rng);

        let chars: Vec<char> = value.chars().collect();
        assert_eq!(chars.len(), 7);
        assert!(chars[0].is_ascii_uppercase());
        assert!(chars[1].is_ascii_digit());
        assert_eq!(chars[3], ' ');
    }

    #[test]
    fn test_generate_pattern_literal() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_pattern("no placeholders", &mut rng), "no placeholders");
    }
}
