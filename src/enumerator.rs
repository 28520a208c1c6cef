//! Exhaustive enumeration of sum-matching strings

use std::iter::FusedIterator;

use crate::alphabet::Alphabet;
use crate::error::{Result, SumForgeError};
use crate::types::{Candidate, SpaceSize};

/// Odometer over `radix^length` digit tuples.
///
/// Starts at all zeros; the rightmost digit moves fastest and carries
/// propagate leftward. Iteration ends when a carry leaves digit 0.
#[derive(Debug, Clone)]
pub struct MixedRadixCounter {
    digits: Vec<usize>,
    radix: usize,
    exhausted: bool,
}

impl MixedRadixCounter {
    pub fn new(length: usize, radix: usize) -> Self {
        Self {
            digits: vec![0; length],
            radix,
            exhausted: radix == 0 && length > 0,
        }
    }

    /// Current digit tuple, or `None` once the counter has wrapped
    pub fn current(&self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(&self.digits)
        }
    }

    /// Step to the next tuple. Returns `false` when the counter wraps.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        for pos in (0..self.digits.len()).rev() {
            self.digits[pos] += 1;
            if self.digits[pos] < self.radix {
                return true;
            }
            self.digits[pos] = 0;
        }

        self.exhausted = true;
        false
    }
}

impl Iterator for MixedRadixCounter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current()?.to_vec();
        self.advance();
        Some(current)
    }
}

impl FusedIterator for MixedRadixCounter {}

/// Lazy stream of every candidate whose codes sum to the target, in
/// lexicographic order
#[derive(Debug)]
pub struct Enumeration<'a> {
    alphabet: &'a Alphabet,
    counter: MixedRadixCounter,
    target: i64,
    checked: u128,
    total: u128,
}

impl<'a> Enumeration<'a> {
    /// Number of combinations examined so far
    pub fn checked(&self) -> u128 {
        self.checked
    }

    /// Size of the full space
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Combinations not yet examined
    pub fn remaining(&self) -> u128 {
        self.total.saturating_sub(self.checked)
    }

    /// Get progress percentage
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.checked as f64 / self.total as f64) * 100.0
        }
    }
}

impl Iterator for Enumeration<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        let codes = self.alphabet.codes();
        loop {
            let digits = self.counter.current()?;
            let sum: i64 = digits.iter().map(|&i| i64::from(codes[i])).sum();
            let hit = (sum == self.target)
                .then(|| Candidate::new(digits.iter().map(|&i| codes[i]).collect()));

            self.counter.advance();
            self.checked += 1;

            if hit.is_some() {
                return hit;
            }
        }
    }
}

impl FusedIterator for Enumeration<'_> {}

/// Full-space walker guarded by a size ceiling
#[derive(Debug, Clone, Copy)]
pub struct ExhaustiveEnumerator<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> ExhaustiveEnumerator<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Start enumerating, or decline with `Overflow` when `|alphabet|^length`
    /// exceeds `space_ceiling`. Nothing is enumerated when declining.
    pub fn enumerate_all(
        &self,
        length: usize,
        target: i64,
        space_ceiling: u128,
    ) -> Result<Enumeration<'a>> {
        if length == 0 {
            return Err(SumForgeError::validation("length must be at least 1"));
        }

        let total = match self.alphabet.total_combinations(length) {
            SpaceSize::Exact(total) if total <= space_ceiling => total,
            size => return Err(SumForgeError::overflow(length, size, space_ceiling)),
        };

        tracing::debug!(
            length = length,
            target = target,
            total_combinations = %total,
            "Starting exhaustive enumeration"
        );

        Ok(Enumeration {
            alphabet: self.alphabet,
            counter: MixedRadixCounter::new(length, self.alphabet.len()),
            target,
            checked: 0,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_order() {
        let tuples: Vec<Vec<usize>> = MixedRadixCounter::new(2, 3).collect();
        assert_eq!(
            tuples,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
                vec![2, 0],
                vec![2, 1],
                vec![2, 2],
            ]
        );
    }

    #[test]
    fn test_counter_degenerate() {
        assert_eq!(MixedRadixCounter::new(3, 0).count(), 0);
        assert_eq!(MixedRadixCounter::new(0, 5).count(), 1);
        assert_eq!(MixedRadixCounter::new(3, 1).count(), 1);
    }

    #[test]
    fn test_small_alphabet_all_solutions() {
        let alphabet = Alphabet::from_codes([1, 2, 3]).unwrap();
        let found: Vec<Vec<u32>> = ExhaustiveEnumerator::new(&alphabet)
            .enumerate_all(2, 4, 1_000)
            .unwrap()
            .map(Candidate::into_codes)
            .collect();
        assert_eq!(found, vec![vec![1, 3], vec![2, 2], vec![3, 1]]);
    }

    #[test]
    fn test_overflow_declines() {
        let alphabet = Alphabet::alphanumeric();
        let enumerator = ExhaustiveEnumerator::new(&alphabet);

        // 62^4 = 14,776,336 > 10M
        match enumerator.enumerate_all(4, 300, 10_000_000) {
            Err(SumForgeError::Overflow { total, ceiling, .. }) => {
                assert_eq!(total, SpaceSize::Exact(14_776_336));
                assert_eq!(ceiling, 10_000_000);
            }
            other => panic!("expected overflow, got {:?}", other.map(|e| e.total())),
        }

        // Exactly at the ceiling is allowed
        assert!(enumerator.enumerate_all(2, 200, 3_844).is_ok());
        assert!(enumerator.enumerate_all(2, 200, 3_843).is_err());
        assert!(matches!(
            enumerator.enumerate_all(40, 3000, u128::MAX),
            Err(SumForgeError::Overflow { total: SpaceSize::Unbounded, .. })
        ));
    }

    #[test]
    fn test_progress_tracking() {
        let alphabet = Alphabet::digits();
        let mut enumeration = ExhaustiveEnumerator::new(&alphabet)
            .enumerate_all(2, 96, 100)
            .unwrap();
        assert_eq!(enumeration.total(), 100);

        // "00" is the very first combination
        let first = enumeration.next().unwrap();
        assert_eq!(first.as_string(), "00");
        assert_eq!(enumeration.checked(), 1);

        assert!(enumeration.next().is_none());
        assert_eq!(enumeration.checked(), 100);
        assert_eq!(enumeration.remaining(), 0);
        assert_eq!(enumeration.progress_percent(), 100.0);
        assert!(enumeration.next().is_none());
    }

    #[test]
    fn test_lexicographic_output() {
        let alphabet = Alphabet::digits();
        let found: Vec<String> = ExhaustiveEnumerator::new(&alphabet)
            .enumerate_all(3, 150, 1_000)
            .unwrap()
            .map(|c| c.as_string())
            .collect();

        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
        assert!(found.contains(&"033".to_string()));
        assert!(found.iter().all(|s| s.bytes().map(u32::from).sum::<u32>() == 150));
    }
}
