//! Seeded per-type constants.
//!
//! Serialization ids and hash magics baked into generated sources come from a
//! fixed seed. Draw order matters: the same seed and the same sequence of
//! calls always reproduce the same literals.
//!
//! The generator is ChaCha12 by name, not `StdRng`, whose algorithm may
//! change between `rand` releases.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Seed used for the range classes.
pub const RANGE_SEED: i64 = -977_415_259;

/// Deterministic stream of Java literal constants.
#[derive(Debug, Clone)]
pub struct SeededConstants {
    rng: ChaCha12Rng,
}

impl SeededConstants {
    /// Creates a stream from a seed.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            rng: ChaCha12Rng::seed_from_u64(seed as u64),
        }
    }

    /// Draws a `serialVersionUID` literal (`<long>L`).
    pub fn next_serial_version_uid(&mut self) -> String {
        format!("{}L", self.rng.random::<i64>())
    }

    /// Draws a hash magic literal (`<int>`).
    pub fn next_hash_magic(&mut self) -> String {
        self.rng.random::<i32>().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(seed: i64, n: usize) -> Vec<(String, String)> {
        let mut constants = SeededConstants::new(seed);
        (0..n)
            .map(|_| {
                let uid = constants.next_serial_version_uid();
                let magic = constants.next_hash_magic();
                (uid, magic)
            })
            .collect()
    }

    #[test]
    fn test_same_seed_same_sequence() {
        assert_eq!(draw(RANGE_SEED, 7), draw(RANGE_SEED, 7));
    }

    #[test]
    fn test_range_seed_literals_are_stable() {
        let expected = [
            ("-8724887830193570411L", "-1374902371"),
            ("1629170514928801660L", "-1029235184"),
            ("1990238609809572806L", "-1644787182"),
            ("4493536196903333288L", "1446904976"),
            ("7768264802614565497L", "768039484"),
            ("1438555895581509395L", "-1607375038"),
            ("-1427708083177878002L", "1998884018"),
        ];
        let drawn = draw(RANGE_SEED, expected.len());
        let drawn: Vec<(&str, &str)> = drawn
            .iter()
            .map(|(uid, magic)| (uid.as_str(), magic.as_str()))
            .collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_different_seed_different_sequence() {
        assert_ne!(draw(RANGE_SEED, 7), draw(42, 7));
    }

    #[test]
    fn test_literal_shapes() {
        let mut constants = SeededConstants::new(RANGE_SEED);
        let uid = constants.next_serial_version_uid();
        assert!(uid.ends_with('L'));
        assert!(uid.trim_end_matches('L').parse::<i64>().is_ok());

        let magic = constants.next_hash_magic();
        assert!(magic.parse::<i32>().is_ok());
    }
}
