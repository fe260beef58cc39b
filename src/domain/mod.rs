//! Domain layer - arbitrage math.
//!
//! Pure functions over outcome records: odds normalisation, implied
//! probabilities, stake distribution and scenario settlement.
//! No I/O and no logging here (hexagonal architecture inner ring).

pub mod bet;
pub mod distribution;
pub mod evaluator;
pub mod numeric;
pub mod odds;
pub mod outcome;
pub mod probability;
pub mod result;

// Re-export core types for convenience
pub use bet::{BetKind, Leg, ManualStake};
pub use distribution::{StakeStrategy, distribute_stakes};
pub use numeric::{NumericInput, parse_numeric_or_zero, round_cents};
pub use odds::lay_to_back;
pub use outcome::Outcome;
pub use probability::ImpliedBook;
pub use result::ArbitrageResult;
