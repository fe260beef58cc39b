//! Outcome records as supplied by callers.
//!
//! One record per bookmaker leg. Field names follow the camelCase JSON
//! used by form and API callers. Every field is optional and read
//! defensively: numbers may arrive as strings, flags may arrive as any
//! JSON value and are read by truthiness.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::numeric::NumericInput;

/// A single bookmaker outcome (bet leg) as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Outcome {
    /// Decimal odd quoted by the bookmaker or exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_odd: Option<NumericInput>,
    /// Lay bet (betting against the outcome).
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_lay_bet: bool,
    /// Exchange commission on lay winnings, in percent (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<NumericInput>,
    /// Freebet: a win pays net profit only.
    #[serde(deserialize_with = "deserialize_flag")]
    pub freebet: bool,
    /// The user pinned this leg's stake.
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_stake_fixed: bool,
    /// Pinned stake, read only when `is_stake_fixed` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stake: Option<NumericInput>,
    /// Per-leg override that wins over any computed stake.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_stake: Option<NumericInput>,
}

impl Outcome {
    /// Back bet at the given decimal odd.
    pub fn back(odd: f64) -> Self {
        Self {
            final_odd: Some(odd.into()),
            ..Self::default()
        }
    }

    /// Lay bet at the given odd with commission in percent.
    pub fn lay(odd: f64, commission_rate: f64) -> Self {
        Self {
            final_odd: Some(odd.into()),
            is_lay_bet: true,
            commission_rate: Some(commission_rate.into()),
            ..Self::default()
        }
    }

    /// Freebet at the given decimal odd.
    pub fn freebet(odd: f64) -> Self {
        Self {
            final_odd: Some(odd.into()),
            freebet: true,
            ..Self::default()
        }
    }

    /// Pin this leg's stake.
    pub fn with_fixed_stake(mut self, stake: f64) -> Self {
        self.is_stake_fixed = true;
        self.stake = Some(stake.into());
        self
    }

    /// Override this leg's stake.
    pub fn with_manual_stake(mut self, stake: f64) -> Self {
        self.manual_stake = Some(stake.into());
        self
    }
}

/// Read a flag with truthiness: `null`, `false`, `0`, `""` are false.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(is_truthy))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_form_payload() {
        let json = r#"{
            "finalOdd": "2.10",
            "isLayBet": false,
            "commissionRate": 5,
            "isStakeFixed": true,
            "stake": 50,
            "manualStake": null
        }"#;
        let outcome: Outcome = serde_json::from_str(json).unwrap();

        assert_eq!(outcome.final_odd, Some(NumericInput::Text("2.10".into())));
        assert!(!outcome.is_lay_bet);
        assert!(outcome.is_stake_fixed);
        assert_eq!(outcome.stake, Some(NumericInput::Number(50.0)));
        assert_eq!(outcome.manual_stake, None);
        assert!(!outcome.freebet);
    }

    #[test]
    fn test_missing_fields_default() {
        let outcome: Outcome = serde_json::from_str("{}").unwrap();
        assert_eq!(outcome, Outcome::default());
    }

    #[test]
    fn test_flags_use_truthiness() {
        let outcome: Outcome = serde_json::from_str(
            r#"{"isLayBet": 1, "freebet": "", "isStakeFixed": null}"#,
        )
        .unwrap();
        assert!(outcome.is_lay_bet);
        assert!(!outcome.freebet);
        assert!(!outcome.is_stake_fixed);
    }

    #[test]
    fn test_builders() {
        let outcome = Outcome::lay(3.0, 2.0).with_manual_stake(10.0);
        assert!(outcome.is_lay_bet);
        assert_eq!(outcome.commission_rate, Some(NumericInput::Number(2.0)));
        assert_eq!(outcome.manual_stake, Some(NumericInput::Number(10.0)));

        let fixed = Outcome::back(2.0).with_fixed_stake(25.0);
        assert!(fixed.is_stake_fixed);
        assert_eq!(fixed.stake, Some(NumericInput::Number(25.0)));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Outcome::freebet(4.0)).unwrap();
        assert_eq!(json["finalOdd"], 4.0);
        assert_eq!(json["freebet"], true);
        assert_eq!(json["isLayBet"], false);
        assert!(json.get("manualStake").is_none());
    }
}
