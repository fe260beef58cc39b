//! Calculation result bundle.

use serde::{Deserialize, Serialize};

/// Everything a caller needs to place and judge an arbitrage.
///
/// Money and percentages are rounded to cents. Serialises with the
/// camelCase field names form and API callers expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbitrageResult {
    /// Sum of effective implied probabilities, in percent.
    pub arbitrage_percentage: f64,
    /// The book sums to less than 100%.
    pub is_arbitrage: bool,
    /// Back stakes plus lay liabilities.
    pub total_investment: f64,
    /// One stake per input outcome, in input order.
    pub distributed_stakes: Vec<f64>,
    /// Profit if each outcome in turn is the winner.
    pub returns: Vec<f64>,
    /// Worst-case profit across `returns`.
    pub profit: f64,
    /// `profit / total_investment` in percent.
    pub profit_percentage: f64,
}

impl ArbitrageResult {
    /// The zeroed bundle returned when the input cannot be computed.
    pub fn not_computable() -> Self {
        Self::default()
    }

    /// Spread between the best and worst scenario.
    pub fn return_spread(&self) -> f64 {
        let max = self.returns.iter().copied().reduce(f64::max);
        let min = self.returns.iter().copied().reduce(f64::min);
        match (max, min) {
            (Some(max), Some(min)) => max - min,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_computable_is_zeroed() {
        let result = ArbitrageResult::not_computable();
        assert_eq!(result.arbitrage_percentage, 0.0);
        assert!(!result.is_arbitrage);
        assert_eq!(result.total_investment, 0.0);
        assert!(result.distributed_stakes.is_empty());
        assert!(result.returns.is_empty());
        assert_eq!(result.profit, 0.0);
        assert_eq!(result.profit_percentage, 0.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ArbitrageResult::not_computable()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "arbitragePercentage": 0.0,
                "isArbitrage": false,
                "totalInvestment": 0.0,
                "distributedStakes": [],
                "returns": [],
                "profit": 0.0,
                "profitPercentage": 0.0
            })
        );
    }

    #[test]
    fn test_return_spread() {
        let result = ArbitrageResult {
            returns: vec![3.5, 3.25, 4.0],
            ..ArbitrageResult::default()
        };
        assert!((result.return_spread() - 0.75).abs() < 1e-12);
        assert_eq!(ArbitrageResult::default().return_spread(), 0.0);
    }
}
