//! Arbitrage Calculator - Library Root
//!
//! Stake distribution and guaranteed-profit math for back, lay and
//! freebet arbitrage. Re-exports all modules for the binary,
//! integration tests and benchmarks.
//!
//! ```
//! use arbitrage_calculator::{Outcome, calculate_arbitrage};
//!
//! let result = calculate_arbitrage(&[Outcome::back(2.10), Outcome::back(2.05)]);
//! assert!(result.is_arbitrage);
//! assert_eq!(result.total_investment, 100.0);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod usecases;

pub use domain::{ArbitrageResult, Outcome, distribute_stakes};
pub use usecases::{ArbitrageCalculator, calculate_arbitrage};
