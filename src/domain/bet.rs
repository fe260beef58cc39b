//! Bet types and normalised legs.
//!
//! A [`BetKind`] knows the three things that differ between back, lay and
//! freebet legs: implied probability, return factor and settlement. A
//! [`Leg`] is an [`Outcome`] with every field parsed and the odd normalised.
//!
//! Settlement per unit stake, with `O` the quoted odd and `c` the
//! commission fraction:
//!
//! | kind    | wins        | loses      | return factor |
//! |---------|-------------|------------|---------------|
//! | back    | `O - 1`     | `-1`       | `O`           |
//! | lay     | `1 - c`     | `-(O - 1)` | `O - c`       |
//! | freebet | `O - 1`     | `-1`       | `O - 1`       |

use serde::{Deserialize, Serialize};

use super::numeric::parse_optional;
use super::odds::back_equivalent;
use super::outcome::Outcome;

/// Closed set of bet types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BetKind {
    /// Conventional bet, stake returned with winnings.
    Back,
    /// Bet against the outcome. `commission` is a fraction (0.05 = 5%).
    Lay { commission: f64 },
    /// Stake not returned on a win.
    Freebet,
}

impl BetKind {
    /// Effective implied probability from the back-equivalent odd.
    ///
    /// Lay commission inflates the odd (`odd / (1 - c)`) before taking
    /// `(odd - 1) / odd`.
    pub fn implied_probability(self, back_odd: f64) -> f64 {
        match self {
            Self::Back => {
                if back_odd > 0.0 {
                    1.0 / back_odd
                } else {
                    0.0
                }
            }
            Self::Freebet => {
                if back_odd > 1.0 {
                    1.0 / (back_odd - 1.0)
                } else {
                    0.0
                }
            }
            Self::Lay { commission } => {
                let kept = 1.0 - commission;
                if kept <= 0.0 || back_odd <= 0.0 {
                    return 0.0;
                }
                let effective_odd = back_odd / kept;
                (effective_odd - 1.0) / effective_odd
            }
        }
    }

    /// Total return per unit stake when this leg wins.
    ///
    /// Used to balance a pinned stake: every leg sized as
    /// `target / return_factor` returns the same total.
    pub fn return_factor(self, quoted_odd: f64) -> f64 {
        match self {
            Self::Back => quoted_odd,
            Self::Lay { commission } => quoted_odd - commission,
            Self::Freebet => quoted_odd - 1.0,
        }
    }

    /// Net winnings when this leg wins.
    pub fn net_win(self, stake: f64, quoted_odd: f64) -> f64 {
        match self {
            Self::Back | Self::Freebet => stake * (quoted_odd - 1.0),
            Self::Lay { commission } => stake * (1.0 - commission),
        }
    }

    /// Money lost when this leg loses: the liability for a lay, the stake
    /// otherwise. Also the capital this leg puts at risk.
    pub fn loss_outlay(self, stake: f64, quoted_odd: f64) -> f64 {
        match self {
            Self::Lay { .. } => stake * (quoted_odd - 1.0),
            Self::Back | Self::Freebet => stake,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Lay { .. } => "lay",
            Self::Freebet => "freebet",
        }
    }
}

impl std::fmt::Display for BetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A manual stake override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualStake {
    /// Parsed amount.
    pub amount: f64,
    /// The caller sent a JSON number (not text).
    pub is_numeric: bool,
}

/// An outcome with every field parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub kind: BetKind,
    /// Odd as quoted. Lay liabilities and return factors use this.
    pub quoted_odd: f64,
    /// Back-equivalent odd. Probabilities use this. `0.0` when unusable.
    pub back_odd: f64,
    /// Pinned stake, present when the outcome is marked fixed.
    pub pinned_stake: Option<f64>,
    pub manual_stake: Option<ManualStake>,
}

impl Leg {
    /// Normalise a caller-supplied outcome.
    ///
    /// A leg flagged both lay and freebet is a lay.
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let quoted_odd = parse_optional(outcome.final_odd.as_ref());

        let kind = if outcome.is_lay_bet {
            BetKind::Lay {
                commission: parse_optional(outcome.commission_rate.as_ref()) / 100.0,
            }
        } else if outcome.freebet {
            BetKind::Freebet
        } else {
            BetKind::Back
        };

        let pinned_stake = outcome
            .is_stake_fixed
            .then(|| parse_optional(outcome.stake.as_ref()));

        let manual_stake = outcome.manual_stake.as_ref().map(|raw| ManualStake {
            amount: raw.value(),
            is_numeric: raw.is_number(),
        });

        Self {
            kind,
            quoted_odd,
            back_odd: back_equivalent(quoted_odd, outcome.is_lay_bet),
            pinned_stake,
            manual_stake,
        }
    }

    /// A leg is usable when its back-equivalent odd is positive.
    pub fn is_usable(&self) -> bool {
        self.back_odd > 0.0
    }

    pub fn implied_probability(&self) -> f64 {
        self.kind.implied_probability(self.back_odd)
    }

    pub fn return_factor(&self) -> f64 {
        self.kind.return_factor(self.quoted_odd)
    }

    /// Stake that makes this leg return `target` when it wins.
    /// `0.0` when the return factor is not positive.
    pub fn stake_for_return(&self, target: f64) -> f64 {
        let factor = self.return_factor();
        if factor > 0.0 { target / factor } else { 0.0 }
    }

    pub fn net_win(&self, stake: f64) -> f64 {
        self.kind.net_win(stake, self.quoted_odd)
    }

    pub fn loss_outlay(&self, stake: f64) -> f64 {
        self.kind.loss_outlay(stake, self.quoted_odd)
    }
}
