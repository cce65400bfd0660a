use ordered_float::NotNan;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::item::Item;
use crate::vec_sets::is_subset;

// Absorbs representation error in `min_frequency * num_transactions`, so
// that e.g. 0.1 * 30 requires 3 transactions rather than 4.
const THRESHOLD_EPSILON: f64 = 1e-9;

/// Minimum support threshold, resolved to an absolute transaction count
/// for one database.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MinSupport {
    min_frequency: NotNan<f64>,
    min_count: usize,
}

/// Rejects NaN and non-positive frequencies. Frequencies above 1 are valid;
/// nothing is frequent at such a threshold.
pub fn check_min_frequency(min_frequency: f64) -> Result<NotNan<f64>> {
    match NotNan::new(min_frequency) {
        Ok(f) if f.into_inner() > 0.0 => Ok(f),
        _ => Err(Error::InvalidMinFrequency(min_frequency)),
    }
}

impl MinSupport {
    pub fn new(min_frequency: f64, num_transactions: usize) -> Result<MinSupport> {
        let min_frequency = check_min_frequency(min_frequency)?;
        let threshold = (min_frequency.into_inner() * num_transactions as f64 - THRESHOLD_EPSILON).ceil();
        // Float to int casts saturate, so huge thresholds stay unreachable.
        let min_count = if threshold < 1.0 { 1 } else { threshold as usize };
        Ok(MinSupport {
            min_frequency,
            min_count,
        })
    }

    pub fn min_frequency(&self) -> f64 {
        self.min_frequency.into_inner()
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn is_frequent(&self, count: usize) -> bool {
        count >= self.min_count
    }
}

/// Counts the transactions containing `itemset` by scanning the database.
pub fn count_containing(database: &Database, itemset: &[Item]) -> usize {
    database
        .transactions()
        .iter()
        .filter(|transaction| is_subset(itemset, transaction))
        .count()
}

/// Relative support. Zero for an empty database.
pub fn support(count: usize, num_transactions: usize) -> f64 {
    if num_transactions == 0 {
        return 0.0;
    }
    count as f64 / num_transactions as f64
}
