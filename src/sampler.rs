//! Constrained random construction of sum-matching strings
//!
//! Each attempt fills positions left to right. At every position only the
//! codes that keep the remaining sum reachable by the remaining positions are
//! eligible, and one of them is picked uniformly. The last position is forced
//! to whatever is left. A dead end discards the whole attempt; there is no
//! backtracking.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::Alphabet;
use crate::error::{Result, SumForgeError};
use crate::types::Candidate;

/// Rejection-style sampler over an alphabet
#[derive(Debug, Clone, Copy)]
pub struct ConstrainedSampler<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> ConstrainedSampler<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Run a single construction attempt.
    ///
    /// Returns `None` when a position has no eligible code or the forced last
    /// code is not in the alphabet.
    pub fn attempt<R: Rng + ?Sized>(
        &self,
        length: usize,
        target: i64,
        rng: &mut R,
    ) -> Option<Candidate> {
        if length == 0 {
            return None;
        }

        let min_code = i64::from(self.alphabet.min_code());
        let max_code = i64::from(self.alphabet.max_code());
        let mut codes = Vec::with_capacity(length);
        let mut remaining_sum = target;

        for position in 0..length - 1 {
            let remaining_positions = (length - position - 1) as i64;
            let min_needed = remaining_sum - remaining_positions * max_code;
            let max_allowed = remaining_sum - remaining_positions * min_code;

            let &code = self
                .alphabet
                .codes_between(min_needed, max_allowed)
                .choose(rng)?;
            codes.push(code);
            remaining_sum -= i64::from(code);
        }

        if !self.alphabet.contains(remaining_sum) {
            return None;
        }
        // contains() guarantees the value fits in u32
        codes.push(remaining_sum as u32);

        Some(Candidate::new(codes))
    }

    /// Try up to `max_attempts` fresh attempts, returning the first success
    pub fn sample_one<R: Rng + ?Sized>(
        &self,
        length: usize,
        target: i64,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Candidate> {
        if length == 0 {
            return Err(SumForgeError::validation("length must be at least 1"));
        }

        for _ in 0..max_attempts {
            if let Some(candidate) = self.attempt(length, target, rng) {
                return Ok(candidate);
            }
        }

        tracing::debug!(
            length = length,
            target = target,
            attempts = max_attempts,
            "Sampler exhausted its attempts"
        );
        Err(SumForgeError::not_found(length, target, max_attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_hits_target() {
        let alphabet = Alphabet::alphanumeric();
        let sampler = ConstrainedSampler::new(&alphabet);
        let mut rng = StdRng::seed_from_u64(42);

        for length in 8..=12 {
            let candidate = sampler.sample_one(length, 867, &mut rng, 100_000).unwrap();
            assert_eq!(candidate.len(), length);
            assert_eq!(candidate.sum(), 867);
            assert!(candidate.codes().iter().all(|&c| alphabet.contains(i64::from(c))));
        }
    }

    #[test]
    fn test_length_one_requires_exact_code() {
        let alphabet = Alphabet::alphanumeric();
        let sampler = ConstrainedSampler::new(&alphabet);
        let mut rng = StdRng::seed_from_u64(7);

        let candidate = sampler.sample_one(1, 65, &mut rng, 1).unwrap();
        assert_eq!(candidate.as_string(), "A");

        // '@' is not in the alphabet
        let err = sampler.sample_one(1, 64, &mut rng, 5).unwrap_err();
        assert_eq!(err, SumForgeError::not_found(1, 64, 5));
    }

    #[test]
    fn test_infeasible_target_is_not_found() {
        let alphabet = Alphabet::alphanumeric();
        let sampler = ConstrainedSampler::new(&alphabet);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(sampler.attempt(3, 10_000, &mut rng).is_none());
        let err = sampler.sample_one(3, 10_000, &mut rng, 50).unwrap_err();
        assert!(matches!(err, SumForgeError::NotFound { attempts: 50, .. }));
    }

    #[test]
    fn test_zero_attempts_and_zero_length() {
        let alphabet = Alphabet::alphanumeric();
        let sampler = ConstrainedSampler::new(&alphabet);
        let mut rng = StdRng::seed_from_u64(3);

        assert!(matches!(
            sampler.sample_one(8, 867, &mut rng, 0),
            Err(SumForgeError::NotFound { attempts: 0, .. })
        ));
        assert!(matches!(
            sampler.sample_one(0, 0, &mut rng, 10),
            Err(SumForgeError::Validation { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_output() {
        let alphabet = Alphabet::alphanumeric();
        let sampler = ConstrainedSampler::new(&alphabet);
        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);

        let a = sampler.sample_one(10, 867, &mut rng_a, 1000).unwrap();
        let b = sampler.sample_one(10, 867, &mut rng_b, 1000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_small_alphabet_covers_all_solutions() {
        let alphabet = Alphabet::from_codes([1, 2, 3]).unwrap();
        let sampler = ConstrainedSampler::new(&alphabet);
        let mut rng = StdRng::seed_from_u64(99);

        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            let candidate = sampler.sample_one(2, 4, &mut rng, 10).unwrap();
            seen.insert(candidate.into_codes());
        }
        let expected: std::collections::BTreeSet<Vec<u32>> =
            [vec![1, 3], vec![2, 2], vec![3, 1]].into_iter().collect();
        assert_eq!(seen, expected);
    }
}
