//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    path = %path.display(),
    target_investment = config.calculator.target_investment,
    bind = %config.server.bind_address,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A finite, positive target investment
/// - A non-empty bind address
/// - A positive outcome limit
/// - A known log level
pub fn validate_config(config: &AppConfig) -> Result<()> {
  let target = config.calculator.target_investment;
  anyhow::ensure!(
    target.is_finite() && target > 0.0,
    "calculator.target_investment must be a positive number, got {}",
    target
  );

  anyhow::ensure!(
    !config.server.bind_address.trim().is_empty(),
    "server.bind_address must not be empty"
  );
  anyhow::ensure!(
    config.server.max_outcomes > 0,
    "server.max_outcomes must be positive"
  );

  anyhow::ensure!(
    matches!(
      config.service.log_level.to_ascii_lowercase().as_str(),
      "trace" | "debug" | "info" | "warn" | "error"
    ),
    "service.log_level must be one of trace, debug, info, warn, error; got {:?}",
    config.service.log_level
  );

  Ok(())
}
