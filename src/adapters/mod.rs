//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Connects the calculator to the outside world. Each sub-module groups
//! one delivery surface.
//!
//! Adapter categories:
//! - `http`: axum calculation API plus liveness/readiness probes
//! - `input`: outcome lists from JSON files or stdin (CLI)

pub mod http;
pub mod input;
