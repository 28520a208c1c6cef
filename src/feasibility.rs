//! Achievable-sum bounds for a given length

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::{Result, SumForgeError};

/// Inclusive range of sums reachable with `length` codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumBounds {
    pub min_sum: i64,
    pub max_sum: i64,
}

impl SumBounds {
    pub fn new(length: usize, min_code: u32, max_code: u32) -> Self {
        let length = length as i64;
        Self {
            min_sum: length * i64::from(min_code),
            max_sum: length * i64::from(max_code),
        }
    }

    pub fn for_alphabet(length: usize, alphabet: &Alphabet) -> Self {
        Self::new(length, alphabet.min_code(), alphabet.max_code())
    }

    pub fn contains(&self, target: i64) -> bool {
        self.min_sum <= target && target <= self.max_sum
    }
}

/// Whether `target` lies in `[length * min_code, length * max_code]`
pub fn is_feasible(length: usize, target: i64, min_code: u32, max_code: u32) -> bool {
    SumBounds::new(length, min_code, max_code).contains(target)
}

/// Bounds for `length`, or `Infeasible` when the target falls outside them
pub fn check_feasible(length: usize, target: i64, alphabet: &Alphabet) -> Result<SumBounds> {
    let bounds = SumBounds::for_alphabet(length, alphabet);
    if bounds.contains(target) {
        Ok(bounds)
    } else {
        Err(SumForgeError::infeasible(
            length,
            target,
            bounds.min_sum,
            bounds.max_sum,
        ))
    }
}
