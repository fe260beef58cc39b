//! Configuration Module - TOML-based Service Configuration
//!
//! Loads and validates configuration from `config.toml`.
//! Every field has a default, so an empty file (or no file at all)
//! yields a working calculator on the standard 100-unit target.

pub mod loader;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Service identity and logging.
  pub service: ServiceConfig,
  /// Calculation parameters.
  pub calculator: CalculatorConfig,
  /// HTTP server settings.
  pub server: ServerConfig,
}

/// Service identity configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
  /// Human-readable service name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  pub log_level: String,
  /// Emit JSON log lines instead of human-readable text.
  pub json_logs: bool,
}

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
  /// Total capital the proportional strategy distributes.
  pub target_investment: f64,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  /// Listen address.
  pub bind_address: String,
  /// Largest outcome list accepted per request.
  pub max_outcomes: usize,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      json_logs: true,
    }
  }
}

impl Default for CalculatorConfig {
  fn default() -> Self {
    Self {
      target_investment: default_target_investment(),
    }
  }
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      bind_address: default_bind_address(),
      max_outcomes: default_max_outcomes(),
    }
  }
}

// Default value functions

fn default_name() -> String {
  "arbitrage-calculator".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_target_investment() -> f64 {
  crate::usecases::DEFAULT_TARGET_INVESTMENT
}

fn default_bind_address() -> String {
  "0.0.0.0:8080".to_string()
}

fn default_max_outcomes() -> usize {
  16
}
