//! Property-Based Tests - Calculator Invariants
//!
//! Uses `proptest` to verify that the stake distribution and scenario
//! evaluation hold their guarantees across random books.

use proptest::prelude::*;

use arbitrage_calculator::domain::bet::BetKind;
use arbitrage_calculator::domain::odds::lay_to_back;
use arbitrage_calculator::{Outcome, calculate_arbitrage, distribute_stakes};

/// One random outcome: back, lay (with commission) or freebet.
fn any_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        (1.01f64..20.0).prop_map(Outcome::back),
        (1.01f64..20.0, 0.0f64..10.0).prop_map(|(odd, c)| Outcome::lay(odd, c)),
        (1.01f64..20.0).prop_map(Outcome::freebet),
    ]
}

fn back_or_freebet() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        (1.01f64..20.0).prop_map(Outcome::back),
        (1.5f64..20.0).prop_map(Outcome::freebet),
    ]
}

// ── Book-level Properties ───────────────────────────────────

proptest! {
    /// The arbitrage flag is exactly "rounded percentage below 100".
    #[test]
    fn arbitrage_flag_matches_percentage(
        outcomes in prop::collection::vec(any_outcome(), 1..6),
    ) {
        let result = calculate_arbitrage(&outcomes);
        prop_assert_eq!(result.is_arbitrage, result.arbitrage_percentage < 100.0);
        prop_assert!(result.arbitrage_percentage > 0.0);
    }

    /// Same input, same output, bit for bit.
    #[test]
    fn calculation_is_idempotent(
        outcomes in prop::collection::vec(any_outcome(), 1..6),
    ) {
        prop_assert_eq!(calculate_arbitrage(&outcomes), calculate_arbitrage(&outcomes));
    }

    /// Every computable book yields one stake and one return per outcome.
    #[test]
    fn result_shape_follows_input(
        outcomes in prop::collection::vec(any_outcome(), 1..6),
    ) {
        let result = calculate_arbitrage(&outcomes);
        prop_assert_eq!(result.distributed_stakes.len(), outcomes.len());
        prop_assert_eq!(result.returns.len(), outcomes.len());
        prop_assert!(result.distributed_stakes.iter().all(|s| *s >= 0.0));
    }
}

// ── Distribution Properties ─────────────────────────────────

proptest! {
    /// A pinned back stake balances an all-back book: every scenario
    /// pays the same profit.
    #[test]
    fn fixed_back_book_has_flat_returns(
        odds in prop::collection::vec(1.01f64..20.0, 2..6),
        stake in 1.0f64..1000.0,
        pin in 0usize..6,
    ) {
        let pin = pin % odds.len();
        let outcomes: Vec<Outcome> = odds
            .iter()
            .enumerate()
            .map(|(i, odd)| {
                let outcome = Outcome::back(*odd);
                if i == pin { outcome.with_fixed_stake(stake) } else { outcome }
            })
            .collect();

        let result = calculate_arbitrage(&outcomes);
        prop_assert!(
            result.return_spread() <= 0.02,
            "returns not flat: {:?}",
            result.returns
        );
    }

    /// Back and freebet stakes add up to the target investment.
    #[test]
    fn proportional_stakes_sum_to_target(
        outcomes in prop::collection::vec(back_or_freebet(), 1..5),
    ) {
        let result = calculate_arbitrage(&outcomes);
        let sum: f64 = result.distributed_stakes.iter().sum();
        prop_assert!((sum - 100.0).abs() <= 0.021, "stakes sum to {sum}");
    }

    /// With lay legs the liabilities are part of the investment, and the
    /// rescale still lands on the target.
    #[test]
    fn proportional_investment_is_target(
        outcomes in prop::collection::vec(any_outcome(), 1..6),
    ) {
        let result = calculate_arbitrage(&outcomes);
        prop_assert_eq!(result.total_investment, 100.0);
    }
}

// ── Bet Settlement Properties ───────────────────────────────

proptest! {
    /// A winning lay keeps the backer's stake less commission.
    #[test]
    fn lay_net_win_is_stake_less_commission(
        stake in 0.0f64..10_000.0,
        odd in 1.01f64..50.0,
        commission in 0.0f64..0.2,
    ) {
        let lay = BetKind::Lay { commission };
        let expected = stake * (1.0 - commission);
        prop_assert!((lay.net_win(stake, odd) - expected).abs() < 1e-9);
        prop_assert!((lay.loss_outlay(stake, odd) - stake * (odd - 1.0)).abs() < 1e-6);
    }

    /// Lay-to-back conversion is its own inverse.
    #[test]
    fn lay_to_back_is_an_involution(odd in 1.01f64..100.0) {
        let round_trip = lay_to_back(lay_to_back(odd));
        prop_assert!((round_trip - odd).abs() < 1e-6 * odd);
    }

    /// The legacy distributor keeps the pinned stake untouched.
    #[test]
    fn legacy_pin_is_kept(
        odds in prop::collection::vec(1.01f64..20.0, 1..6),
        stake in 0.01f64..1000.0,
        pin in 0usize..6,
    ) {
        let pin = pin % odds.len();
        let stakes = distribute_stakes(&odds, pin, stake);
        prop_assert_eq!(stakes.len(), odds.len());
        prop_assert_eq!(stakes[pin], stake);
    }
}

#[test]
fn legacy_even_book() {
    assert_eq!(distribute_stakes(&[2.0, 2.0], 0, 100.0), vec![100.0, 100.0]);
}
