//! Scenario evaluation.
//!
//! For every leg, assume it is the one that wins and settle the whole
//! book: the winner pays its net winnings, every other leg costs its
//! stake (back, freebet) or its liability (lay).

use super::bet::Leg;
use super::numeric::round_cents;

/// Settlement of one winning scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Net winnings of the winning leg.
    pub total_return: f64,
    /// Stakes and liabilities lost on every other leg.
    pub total_outlay: f64,
}

impl Scenario {
    pub fn profit(&self) -> f64 {
        self.total_return - self.total_outlay
    }
}

/// Settle the book assuming leg `winner` wins. Missing stakes count as
/// zero.
pub fn settle(legs: &[Leg], stakes: &[f64], winner: usize) -> Scenario {
    let stake_at = |index: usize| stakes.get(index).copied().unwrap_or(0.0);

    let total_return = legs
        .get(winner)
        .map_or(0.0, |leg| leg.net_win(stake_at(winner)));

    let total_outlay = legs
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != winner)
        .map(|(index, leg)| leg.loss_outlay(stake_at(index)))
        .sum();

    Scenario {
        total_return,
        total_outlay,
    }
}

/// Profit of every winning scenario, in leg order, rounded to cents.
pub fn evaluate_returns(legs: &[Leg], stakes: &[f64]) -> Vec<f64> {
    (0..legs.len())
        .map(|winner| round_cents(settle(legs, stakes, winner).profit()))
        .collect()
}

/// Worst-case profit across scenarios. `0.0` when there are none.
pub fn guaranteed_profit(returns: &[f64]) -> f64 {
    returns.iter().copied().reduce(f64::min).unwrap_or(0.0)
}
