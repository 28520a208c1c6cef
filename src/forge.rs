//! Entry point tying the generators to one alphabet, config and RNG stream

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::alphabet::Alphabet;
use crate::collector::SampleCollector;
use crate::config::GeneratorConfig;
use crate::enumerator::{Enumeration, ExhaustiveEnumerator};
use crate::error::{Result, SumForgeError};
use crate::feasibility::{self, SumBounds};
use crate::sampler::ConstrainedSampler;
use crate::types::{Candidate, GenerationReport, SampleBatch, Strategy};

/// Sum-constrained string generator.
///
/// Owns the process-wide RNG stream. The stream is seeded once at
/// construction and consumed sequentially by every call.
#[derive(Debug)]
pub struct SumForge {
    alphabet: Alphabet,
    config: GeneratorConfig,
    rng: StdRng,
}

impl SumForge {
    /// Generator over the 62-symbol alphanumeric alphabet
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_alphabet(Alphabet::alphanumeric(), config)
    }

    pub fn with_alphabet(alphabet: Alphabet, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            alphabet,
            config,
            rng,
        })
    }

    /// Generator configured from `SUM_FORGE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GeneratorConfig::from_env()?)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn is_feasible(&self, length: usize, target: i64) -> bool {
        feasibility::is_feasible(
            length,
            target,
            self.alphabet.min_code(),
            self.alphabet.max_code(),
        )
    }

    pub fn bounds(&self, length: usize) -> SumBounds {
        SumBounds::for_alphabet(length, &self.alphabet)
    }

    /// Lengths in `1..=max_length` for which the configured target is reachable
    pub fn feasible_lengths(&self) -> Vec<usize> {
        (1..=self.config.max_length)
            .filter(|&length| self.is_feasible(length, self.config.target_sum))
            .collect()
    }

    pub fn sample_one(
        &mut self,
        length: usize,
        target: i64,
        max_attempts: usize,
    ) -> Result<Candidate> {
        self.check_length(length)?;
        let sampler = ConstrainedSampler::new(&self.alphabet);
        sampler.sample_one(length, target, &mut self.rng, max_attempts)
    }

    pub fn enumerate_all(
        &self,
        length: usize,
        target: i64,
        space_ceiling: u128,
    ) -> Result<Enumeration<'_>> {
        self.check_length(length)?;
        ExhaustiveEnumerator::new(&self.alphabet).enumerate_all(length, target, space_ceiling)
    }

    pub fn collect_sample(
        &mut self,
        length: usize,
        target: i64,
        sample_size: usize,
        attempt_budget: usize,
    ) -> Result<SampleBatch> {
        self.check_length(length)?;
        let sampler = ConstrainedSampler::new(&self.alphabet);
        SampleCollector::new(sampler, self.config.max_attempts).collect_sample(
            length,
            target,
            sample_size,
            attempt_budget,
            &mut self.rng,
        )
    }

    /// Produce strings of `length` summing to the configured target.
    ///
    /// Fails with `Infeasible` when the target is out of range. Otherwise
    /// enumerates exhaustively if the space fits under `space_ceiling`, and
    /// samples `sample_size` strings if it does not.
    pub fn generate(&mut self, length: usize) -> Result<GenerationReport> {
        self.check_length(length)?;
        let target = self.config.target_sum;
        feasibility::check_feasible(length, target, &self.alphabet)?;

        let total = self.alphabet.total_combinations(length);
        match self.enumerate_all(length, target, self.config.space_ceiling) {
            Ok(enumeration) => {
                let candidates: Vec<Candidate> = enumeration.collect();
                tracing::info!(
                    length = length,
                    target = target,
                    found = candidates.len(),
                    "Exhaustive generation completed"
                );
                return Ok(GenerationReport::new(
                    length,
                    target,
                    Strategy::Exhaustive,
                    total,
                    candidates,
                ));
            }
            Err(SumForgeError::Overflow { total, ceiling, .. }) => {
                tracing::warn!(
                    length = length,
                    total_combinations = %total,
                    ceiling = %ceiling,
                    "Too many combinations, using sampling instead"
                );
            }
            Err(e) => return Err(e),
        }

        let sample_size = self.config.sample_size;
        let budget = self.config.attempt_budget();
        let batch = self.collect_sample(length, target, sample_size, budget)?;

        Ok(GenerationReport::new(
            length,
            target,
            Strategy::Sampled,
            total,
            batch.candidates,
        ))
    }

    fn check_length(&self, length: usize) -> Result<()> {
        if length == 0 || length > self.config.max_length {
            return Err(crate::validation_error!(
                "length {} outside 1..={}",
                length,
                self.config.max_length
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(config: GeneratorConfig) -> SumForge {
        SumForge::new(GeneratorConfig {
            seed: Some(2024),
            ..config
        })
        .unwrap()
    }

    #[test]
    fn test_feasible_lengths_for_867() {
        let forge = seeded(GeneratorConfig::default());
        assert_eq!(forge.feasible_lengths(), (8..=18).collect::<Vec<_>>());
    }

    #[test]
    fn test_length_limits() {
        let mut forge = seeded(GeneratorConfig::default());
        assert!(matches!(
            forge.sample_one(0, 867, 10),
            Err(SumForgeError::Validation { .. })
        ));
        assert!(matches!(
            forge.collect_sample(21, 867, 1, 1),
            Err(SumForgeError::Validation { .. })
        ));
    }

    #[test]
    fn test_generate_infeasible() {
        let mut forge = seeded(GeneratorConfig::default());
        assert!(matches!(
            forge.generate(5),
            Err(SumForgeError::Infeasible { min_sum: 240, max_sum: 610, .. })
        ));
    }

    #[test]
    fn test_generate_falls_back_to_sampling() {
        let mut forge = seeded(GeneratorConfig {
            sample_size: 20,
            ..Default::default()
        });
        let report = forge.generate(8).unwrap();
        assert_eq!(report.strategy, Strategy::Sampled);
        assert_eq!(report.candidates.len(), 20);
        assert!(report.candidates.iter().all(|c| c.sum() == 867 && c.len() == 8));
    }

    #[test]
    fn test_generate_exhaustive_when_small() {
        let mut forge = SumForge::with_alphabet(
            Alphabet::digits(),
            GeneratorConfig {
                target_sum: 150,
                seed: Some(1),
                ..Default::default()
            },
        )
        .unwrap();
        let report = forge.generate(3).unwrap();
        assert_eq!(report.strategy, Strategy::Exhaustive);
        assert_eq!(report.total_combinations.exact(), Some(1000));
        assert!(report.strings().contains(&"033".to_string()));
    }
}
