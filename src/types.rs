//! Core types and structures for sum-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generation strategy used for a length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Exhaustive,
    Sampled,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Exhaustive => write!(f, "exhaustive"),
            Strategy::Sampled => write!(f, "sampled"),
        }
    }
}

/// Size of a combinatorial search space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceSize {
    Exact(u128),
    /// Larger than `u128::MAX`
    Unbounded,
}

impl SpaceSize {
    /// Whether the space is strictly larger than `ceiling`
    pub fn exceeds(&self, ceiling: u128) -> bool {
        match self {
            SpaceSize::Exact(total) => *total > ceiling,
            SpaceSize::Unbounded => true,
        }
    }

    pub fn exact(&self) -> Option<u128> {
        match self {
            SpaceSize::Exact(total) => Some(*total),
            SpaceSize::Unbounded => None,
        }
    }
}

impl std::fmt::Display for SpaceSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpaceSize::Exact(total) => write!(f, "{}", total),
            SpaceSize::Unbounded => write!(f, "more than {}", u128::MAX),
        }
    }
}

/// A fixed-length sequence of alphabet codes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Candidate {
    codes: Vec<u32>,
}

impl Candidate {
    pub fn new(codes: Vec<u32>) -> Self {
        Self { codes }
    }

    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Sum of all codes
    pub fn sum(&self) -> i64 {
        self.codes.iter().map(|&c| i64::from(c)).sum()
    }

    /// Render the codes as characters. Codes that are not valid scalar values
    /// become U+FFFD.
    pub fn as_string(&self) -> String {
        self.codes
            .iter()
            .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    pub fn into_codes(self) -> Vec<u32> {
        self.codes
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// Output of a sample collection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleBatch {
    pub candidates: Vec<Candidate>,
    /// Number of results asked for
    pub requested: usize,
    /// Sampler invocations spent
    pub attempts: usize,
}

impl SampleBatch {
    /// Whether the requested size was reached
    pub fn is_complete(&self) -> bool {
        self.candidates.len() >= self.requested
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Result of generating strings for a single length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub length: usize,
    pub target: i64,
    pub strategy: Strategy,
    pub total_combinations: SpaceSize,
    pub candidates: Vec<Candidate>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationReport {
    pub fn new(
        length: usize,
        target: i64,
        strategy: Strategy,
        total_combinations: SpaceSize,
        candidates: Vec<Candidate>,
    ) -> Self {
        Self {
            length,
            target,
            strategy,
            total_combinations,
            candidates,
            generated_at: Utc::now(),
        }
    }

    /// Candidates rendered as strings
    pub fn strings(&self) -> Vec<String> {
        self.candidates.iter().map(Candidate::as_string).collect()
    }
}
