//! Odds normalisation.
//!
//! Lay odds are turned into their back-equivalent before any probability
//! math. Back and freebet odds are already in back terms.

/// Back-equivalent of a lay odd: `L / (L - 1)`.
///
/// Returns `0.0` for `L <= 1`, which marks the odd as unusable.
///
/// ```
/// use arbitrage_calculator::domain::odds::lay_to_back;
/// assert!((lay_to_back(3.0) - 1.5).abs() < 1e-12);
/// assert_eq!(lay_to_back(1.0), 0.0);
/// ```
pub fn lay_to_back(lay_odd: f64) -> f64 {
    if lay_odd <= 1.0 || lay_odd.is_nan() {
        return 0.0;
    }
    lay_odd / (lay_odd - 1.0)
}

/// Back-equivalent of a quoted odd.
///
/// Non-positive quotes stay at `0.0` so the caller can reject them.
pub fn back_equivalent(quoted_odd: f64, is_lay: bool) -> f64 {
    if quoted_odd <= 0.0 || quoted_odd.is_nan() {
        return 0.0;
    }
    if is_lay {
        lay_to_back(quoted_odd)
    } else {
        quoted_odd
    }
}
