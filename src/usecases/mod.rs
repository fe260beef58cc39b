//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates the domain functions into the operations callers run.
//!
//! Use cases:
//! - `ArbitrageCalculator`: full calculation over a list of outcomes

pub mod calculator;

pub use calculator::{ArbitrageCalculator, DEFAULT_TARGET_INVESTMENT, calculate_arbitrage};
