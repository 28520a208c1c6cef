//! Symbol alphabet for generated strings

use std::ops::RangeInclusive;

use crate::error::{Result, SumForgeError};
use crate::types::SpaceSize;

const DIGITS: RangeInclusive<u32> = 48..=57;
const UPPERCASE: RangeInclusive<u32> = 65..=90;
const LOWERCASE: RangeInclusive<u32> = 97..=122;

/// An ordered set of distinct symbol codes.
///
/// Codes are kept sorted ascending, so lexicographic order over code indices
/// matches lexicographic order over the codes themselves, and every value
/// range maps to a contiguous slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    codes: Vec<u32>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::alphanumeric()
    }
}

impl Alphabet {
    /// `0-9`, `A-Z`, `a-z`: 62 ASCII codes from 48 to 122
    pub fn alphanumeric() -> Self {
        let codes = DIGITS.chain(UPPERCASE).chain(LOWERCASE).collect();
        Self { codes }
    }

    /// `0-9` only
    pub fn digits() -> Self {
        Self {
            codes: DIGITS.collect(),
        }
    }

    /// Build an alphabet from arbitrary codes. Duplicates are dropped.
    pub fn from_codes(codes: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut codes: Vec<u32> = codes.into_iter().collect();
        codes.sort_unstable();
        codes.dedup();

        if codes.is_empty() {
            return Err(SumForgeError::validation("alphabet must contain at least one code"));
        }

        Ok(Self { codes })
    }

    /// Build an alphabet from the characters of a string
    pub fn from_chars(chars: &str) -> Result<Self> {
        Self::from_codes(chars.chars().map(u32::from))
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

    pub fn min_code(&self) -> u32 {
        self.codes[0]
    }

    pub fn max_code(&self) -> u32 {
        self.codes[self.codes.len() - 1]
    }

    /// Code at an index in alphabet order
    pub fn code_at(&self, index: usize) -> Option<u32> {
        self.codes.get(index).copied()
    }

    /// Membership test for an arbitrary (possibly negative) value
    pub fn contains(&self, value: i64) -> bool {
        u32::try_from(value)
            .map(|code| self.codes.binary_search(&code).is_ok())
            .unwrap_or(false)
    }

    /// All codes inside `[low, high]`, in alphabet order
    pub fn codes_between(&self, low: i64, high: i64) -> &[u32] {
        if low > high {
            return &[];
        }
        let start = self.codes.partition_point(|&c| i64::from(c) < low);
        let end = self.codes.partition_point(|&c| i64::from(c) <= high);
        &self.codes[start..end]
    }

    /// `len ^ length`, or `Unbounded` once the product leaves `u128`
    pub fn total_combinations(&self, length: usize) -> SpaceSize {
        let base = self.codes.len() as u128;
        let mut total: u128 = 1;
        for _ in 0..length {
            match total.checked_mul(base) {
                Some(next) => total = next,
                None => return SpaceSize::Unbounded,
            }
        }
        SpaceSize::Exact(total)
    }
}
