//! Repeated sampling up to a requested count

use rand::Rng;

use crate::error::{Result, SumForgeError};
use crate::sampler::ConstrainedSampler;
use crate::types::{Candidate, SampleBatch};

/// Collects independent samples with replacement.
///
/// Each collector attempt is one full `sample_one` call, itself bounded by
/// `max_attempts` construction attempts.
#[derive(Debug, Clone, Copy)]
pub struct SampleCollector<'a> {
    sampler: ConstrainedSampler<'a>,
    max_attempts: usize,
}

impl<'a> SampleCollector<'a> {
    pub fn new(sampler: ConstrainedSampler<'a>, max_attempts: usize) -> Self {
        Self {
            sampler,
            max_attempts,
        }
    }

    /// Gather up to `sample_size` candidates, spending at most
    /// `attempt_budget` sampler calls. A short batch is not an error.
    pub fn collect_sample<R: Rng + ?Sized>(
        &self,
        length: usize,
        target: i64,
        sample_size: usize,
        attempt_budget: usize,
        rng: &mut R,
    ) -> Result<SampleBatch> {
        if length == 0 {
            return Err(SumForgeError::validation("length must be at least 1"));
        }

        let mut candidates = Vec::with_capacity(sample_size.min(attempt_budget));
        let mut attempts = 0;

        while candidates.len() < sample_size && attempts < attempt_budget {
            attempts += 1;
            match self.sampler.sample_one(length, target, rng, self.max_attempts) {
                Ok(candidate) if Self::verify(&candidate, length, target) => {
                    candidates.push(candidate);
                }
                Ok(candidate) => {
                    tracing::warn!(
                        length = length,
                        candidate = %candidate,
                        "Discarding candidate that failed verification"
                    );
                }
                Err(SumForgeError::NotFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        let batch = SampleBatch {
            candidates,
            requested: sample_size,
            attempts,
        };

        if batch.is_complete() {
            tracing::info!(
                length = length,
                generated = batch.len(),
                attempts = attempts,
                "Sample collection completed"
            );
        } else {
            tracing::warn!(
                length = length,
                generated = batch.len(),
                requested = sample_size,
                attempts = attempts,
                "Attempt budget exhausted before sample was complete"
            );
        }

        Ok(batch)
    }

    fn verify(candidate: &Candidate, length: usize, target: i64) -> bool {
        candidate.len() == length && candidate.sum() == target
    }
}
