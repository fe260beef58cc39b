//! Implied probability aggregation.
//!
//! The sum of effective implied probabilities across every leg is the
//! arbitrage percentage: below 100% the book can be covered at a profit.

use super::bet::Leg;

/// Per-leg effective implied probabilities and their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpliedBook {
    probabilities: Vec<f64>,
    total: f64,
}

impl ImpliedBook {
    pub fn from_legs(legs: &[Leg]) -> Self {
        let probabilities: Vec<f64> = legs.iter().map(Leg::implied_probability).collect();
        let total = probabilities.iter().sum();
        Self {
            probabilities,
            total,
        }
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Sum of the implied probabilities (1.0 = fair book).
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Sum as a percentage, unrounded.
    pub fn percentage(&self) -> f64 {
        self.total * 100.0
    }

    /// Share of the book held by leg `index`, `0.0` for an empty book.
    pub fn weight(&self, index: usize) -> f64 {
        if self.total <= 0.0 || !self.total.is_finite() {
            return 0.0;
        }
        self.probabilities.get(index).map_or(0.0, |p| p / self.total)
    }
}
