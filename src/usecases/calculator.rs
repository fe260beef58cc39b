//! Arbitrage Calculator - Full Calculation Pipeline
//!
//! Runs the domain steps in order over one list of outcomes:
//! 1. Normalise every outcome into a leg (parse + lay-to-back)
//! 2. Reject the whole list if any odd is unusable
//! 3. Aggregate implied probabilities
//! 4. Select and run one stake strategy
//! 5. Settle every winning scenario
//! 6. Assemble the rounded result bundle
//!
//! Stateless: the calculator only holds its target investment, so one
//! instance can serve any number of concurrent callers.

use tracing::{debug, instrument};

use crate::config::CalculatorConfig;
use crate::domain::bet::Leg;
use crate::domain::distribution::{StakeStrategy, capital_at_risk};
use crate::domain::evaluator::{evaluate_returns, guaranteed_profit};
use crate::domain::numeric::round_cents;
use crate::domain::outcome::Outcome;
use crate::domain::probability::ImpliedBook;
use crate::domain::result::ArbitrageResult;

/// Investment the proportional strategy sizes to when nothing else is set.
pub const DEFAULT_TARGET_INVESTMENT: f64 = 100.0;

/// Arbitrage calculator with a configured target investment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArbitrageCalculator {
  /// Total capital the proportional strategy distributes.
  target_investment: f64,
}

impl ArbitrageCalculator {
  /// Create a calculator from config.
  pub fn new(config: &CalculatorConfig) -> Self {
    Self::with_target_investment(config.target_investment)
  }

  /// Create a calculator with an explicit target investment.
  ///
  /// Non-finite or non-positive targets fall back to the default.
  pub fn with_target_investment(target_investment: f64) -> Self {
    let target_investment = if target_investment.is_finite() && target_investment > 0.0 {
      target_investment
    } else {
      DEFAULT_TARGET_INVESTMENT
    };
    Self { target_investment }
  }

  pub fn target_investment(&self) -> f64 {
    self.target_investment
  }

  /// Compute probabilities, stakes and scenario profits for one book.
  ///
  /// Never fails: an empty list or any unusable odd yields
  /// [`ArbitrageResult::not_computable`].
  #[instrument(skip_all, fields(outcomes = outcomes.len()))]
  pub fn calculate(&self, outcomes: &[Outcome]) -> ArbitrageResult {
    let legs: Vec<Leg> = outcomes.iter().map(Leg::from_outcome).collect();

    if legs.is_empty() {
      debug!("No outcomes supplied, nothing to compute");
      return ArbitrageResult::not_computable();
    }
    if let Some(index) = legs.iter().position(|leg| !leg.is_usable()) {
      debug!(index, "Unusable odd, returning zeroed result");
      return ArbitrageResult::not_computable();
    }

    let book = ImpliedBook::from_legs(&legs);
    let arbitrage_percentage = round_cents(book.percentage());
    let is_arbitrage = arbitrage_percentage < 100.0;

    let strategy = StakeStrategy::select(&legs, self.target_investment);
    debug!(%strategy, "Stake strategy selected");

    let stakes = strategy.distribute(&legs, &book);
    let total_investment = round_cents(capital_at_risk(&legs, &stakes));
    let returns = evaluate_returns(&legs, &stakes);
    let profit = round_cents(guaranteed_profit(&returns));
    let profit_percentage = if total_investment > 0.0 {
      round_cents(profit / total_investment * 100.0)
    } else {
      0.0
    };

    if is_arbitrage {
      debug!(
        arbitrage_pct = arbitrage_percentage,
        profit,
        total_investment,
        "Arbitrage found"
      );
    }

    ArbitrageResult {
      arbitrage_percentage,
      is_arbitrage,
      total_investment,
      distributed_stakes: stakes.into_iter().map(round_cents).collect(),
      returns,
      profit,
      profit_percentage,
    }
  }
}

impl Default for ArbitrageCalculator {
  /// Default: 100 units of target investment.
  fn default() -> Self {
    Self {
      target_investment: DEFAULT_TARGET_INVESTMENT,
    }
  }
}

/// Run the calculator with the default target investment.
pub fn calculate_arbitrage(outcomes: &[Outcome]) -> ArbitrageResult {
  ArbitrageCalculator::default().calculate(outcomes)
}
