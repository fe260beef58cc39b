//! Stake distribution strategies.
//!
//! Exactly one strategy runs per calculation. [`StakeStrategy::select`]
//! picks it once from the shape of the input:
//!
//! 1. a pinned leg with a positive stake: balance every other leg to the
//!    pinned leg's return, honouring manual overrides
//! 2. a pinned leg without a positive stake: nothing to distribute
//! 3. any numeric manual stake: every leg takes its manual stake as is
//! 4. otherwise: split a target investment by implied probability
//!
//! Distributors return full-precision stakes. Rounding happens when the
//! result is assembled.

use super::bet::Leg;
use super::numeric::round_cents;
use super::probability::ImpliedBook;

/// The selected distribution strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StakeStrategy {
    /// First pinned leg, with its positive stake.
    Fixed { index: usize, stake: f64 },
    /// First pinned leg carries no positive stake.
    UnfundedPin { index: usize },
    /// Manual stakes for every leg, missing ones at zero.
    Manual,
    /// Probability-weighted split of a target investment.
    Proportional { target_investment: f64 },
}

impl StakeStrategy {
    /// Pick the strategy for these legs.
    ///
    /// Only the first pinned leg is honoured. Manual mode needs at least
    /// one manual stake sent as a JSON number.
    pub fn select(legs: &[Leg], target_investment: f64) -> Self {
        let pinned = legs
            .iter()
            .enumerate()
            .find_map(|(index, leg)| leg.pinned_stake.map(|stake| (index, stake)));

        if let Some((index, stake)) = pinned {
            return if stake > 0.0 {
                Self::Fixed { index, stake }
            } else {
                Self::UnfundedPin { index }
            };
        }

        let has_manual = legs
            .iter()
            .any(|leg| leg.manual_stake.is_some_and(|m| m.is_numeric));

        if has_manual {
            Self::Manual
        } else {
            Self::Proportional { target_investment }
        }
    }

    /// Run the strategy. The result has one stake per leg, except for
    /// [`StakeStrategy::UnfundedPin`] which yields none.
    pub fn distribute(&self, legs: &[Leg], book: &ImpliedBook) -> Vec<f64> {
        match *self {
            Self::Fixed { index, stake } => distribute_fixed(legs, index, stake),
            Self::UnfundedPin { .. } => Vec::new(),
            Self::Manual => distribute_manual(legs),
            Self::Proportional { target_investment } => {
                distribute_proportional(legs, book, target_investment)
            }
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fixed { .. } => "fixed",
            Self::UnfundedPin { .. } => "unfunded_pin",
            Self::Manual => "manual",
            Self::Proportional { .. } => "proportional",
        }
    }
}

impl std::fmt::Display for StakeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Balance every leg against a pinned stake.
///
/// The pinned leg's winning return `T = stake * return_factor` becomes the
/// target: every other leg gets `T / return_factor`, or its manual stake
/// when one is present (numeric or text).
pub fn distribute_fixed(legs: &[Leg], fixed_index: usize, fixed_stake: f64) -> Vec<f64> {
    let Some(fixed) = legs.get(fixed_index) else {
        return vec![0.0; legs.len()];
    };
    let target_return = fixed_stake * fixed.return_factor();

    legs.iter()
        .enumerate()
        .map(|(index, leg)| {
            if index == fixed_index {
                fixed_stake
            } else if let Some(manual) = leg.manual_stake {
                manual.amount
            } else {
                leg.stake_for_return(target_return)
            }
        })
        .collect()
}

/// Every leg at its manual stake, no fill-in for legs without one.
pub fn distribute_manual(legs: &[Leg]) -> Vec<f64> {
    legs.iter()
        .map(|leg| leg.manual_stake.map_or(0.0, |m| m.amount))
        .collect()
}

/// Split `target_investment` across legs by implied probability.
///
/// The first pass weights stakes by probability share. Lay legs put their
/// liability at risk rather than their stake, so the first pass misses
/// the target; the second pass rescales every stake uniformly so that
/// stakes plus liabilities add up to exactly `target_investment`.
pub fn distribute_proportional(
    legs: &[Leg],
    book: &ImpliedBook,
    target_investment: f64,
) -> Vec<f64> {
    let initial: Vec<f64> = (0..legs.len())
        .map(|index| target_investment * book.weight(index))
        .collect();

    let actual = capital_at_risk(legs, &initial);
    if actual <= 0.0 || !actual.is_finite() {
        return vec![0.0; legs.len()];
    }

    let scale = target_investment / actual;
    initial.iter().map(|stake| stake * scale).collect()
}

/// Back stakes plus lay liabilities. Missing stakes count as zero.
pub fn capital_at_risk(legs: &[Leg], stakes: &[f64]) -> f64 {
    legs.iter()
        .zip(stakes)
        .map(|(leg, stake)| leg.loss_outlay(*stake))
        .sum()
}

/// Simple proportional distributor over plain back odds.
///
/// Kept for callers that have no bet-type metadata. The pinned leg keeps
/// `fixed_stake`; every other leg gets `(1 / odd) * fixed_stake * odds[fixed]`,
/// rounded to cents. Bad input (out-of-range index, non-positive stake, any
/// non-positive or NaN odd) yields all zeros.
///
/// ```
/// use arbitrage_calculator::domain::distribution::distribute_stakes;
/// assert_eq!(distribute_stakes(&[2.0, 2.0], 0, 100.0), vec![100.0, 100.0]);
/// ```
pub fn distribute_stakes(odds: &[f64], fixed_index: usize, fixed_stake: f64) -> Vec<f64> {
    if fixed_index >= odds.len() || fixed_stake <= 0.0 || fixed_stake.is_nan() {
        return vec![0.0; odds.len()];
    }
    if odds.iter().any(|odd| *odd <= 0.0 || odd.is_nan()) {
        return vec![0.0; odds.len()];
    }

    let implied = 1.0 / odds[fixed_index];
    let ratio = fixed_stake / implied;

    odds.iter()
        .enumerate()
        .map(|(index, odd)| {
            if index == fixed_index {
                fixed_stake
            } else {
                round_cents((1.0 / odd) * ratio)
            }
        })
        .collect()
}
