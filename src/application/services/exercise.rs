//! Menu exercise service
//!
//! One method per numbered menu exercise. Each takes already-parsed input and
//! returns a report; reading prompts and printing happen in the CLI.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::algorithms;
use crate::application::{ApplicationError, ApplicationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeReport {
    pub start: i32,
    pub end: i32,
    pub primes: Vec<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GcdLcmReport {
    pub a: i32,
    pub b: i32,
    pub gcd: i64,
    pub lcm: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub target: i32,
    pub iterative: Option<usize>,
    pub recursive: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub original: Vec<i32>,
    pub sorted: Vec<i32>,
    pub passes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromeReport {
    pub text: String,
    pub is_palindrome: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapReport {
    pub before: (i32, i32),
    pub after: (i32, i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyReport {
    /// (value, count) in order of first appearance
    pub counts: Vec<(i32, usize)>,
}

/// Stateless service behind the numbered menu.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExerciseService;

impl ExerciseService {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self))]
    pub fn primes(&self, start: i32, end: i32) -> PrimeReport {
        let primes = algorithms::primes_in_range(start, end);
        debug!(count = primes.len(), "primes found");
        PrimeReport { start, end, primes }
    }

    pub fn gcd_lcm(&self, a: i32, b: i32) -> GcdLcmReport {
        GcdLcmReport {
            a,
            b,
            gcd: algorithms::gcd(a, b),
            lcm: algorithms::lcm(a, b),
        }
    }

    /// Runs both binary search variants. Rejects input that is not ascending.
    #[instrument(level = "debug", skip(self, sorted))]
    pub fn binary_search(&self, sorted: &[i32], target: i32) -> ApplicationResult<SearchReport> {
        if let Some((a, b)) = sorted.iter().tuple_windows().find(|(a, b)| a > b) {
            return Err(ApplicationError::InvalidInput {
                message: format!("values must be sorted ascending ({} comes before {})", a, b),
            });
        }
        Ok(SearchReport {
            target,
            iterative: algorithms::binary_search_iterative(sorted, target),
            recursive: algorithms::binary_search_recursive(sorted, target),
        })
    }

    pub fn bubble_sort(&self, values: &[i32]) -> SortReport {
        let mut sorted = values.to_vec();
        let passes = algorithms::bubble_sort(&mut sorted);
        SortReport {
            original: values.to_vec(),
            sorted,
            passes,
        }
    }

    pub fn palindrome(&self, text: &str) -> PalindromeReport {
        PalindromeReport {
            text: text.to_string(),
            is_palindrome: algorithms::is_palindrome(text),
        }
    }

    pub fn swap(&self, a: i32, b: i32) -> SwapReport {
        let (mut x, mut y) = (a, b);
        algorithms::swap(&mut x, &mut y);
        SwapReport {
            before: (a, b),
            after: (x, y),
        }
    }

    pub fn frequency(&self, values: &[i32]) -> FrequencyReport {
        FrequencyReport {
            counts: algorithms::frequencies(values),
        }
    }
}
