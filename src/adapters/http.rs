//! HTTP Service - Calculation API and Health Probes
//!
//! Exposes the calculator over axum 0.7:
//! - `POST /v1/arbitrage` - outcome list in, result bundle out
//! - `POST /v1/stakes` - legacy plain-odds distributor
//! - `GET  /live` - liveness probe, always 200
//! - `GET  /ready` - readiness probe, 503 once shutdown begins

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::adapters::input::{InputError, check_limit};
use crate::config::ServerConfig;
use crate::domain::distribution::distribute_stakes;
use crate::domain::outcome::Outcome;
use crate::domain::result::ArbitrageResult;
use crate::usecases::ArbitrageCalculator;

/// State shared by every handler.
#[derive(Debug)]
pub struct ApiState {
    calculator: ArbitrageCalculator,
    /// Largest outcome (or odds) list accepted.
    max_outcomes: usize,
    /// Readiness flag, flipped to false on shutdown.
    ready: watch::Receiver<bool>,
}

impl ApiState {
    pub fn new(
        calculator: ArbitrageCalculator,
        max_outcomes: usize,
        ready: watch::Receiver<bool>,
    ) -> Self {
        Self {
            calculator,
            max_outcomes,
            ready,
        }
    }
}

pub type SharedState = Arc<ApiState>;

/// Request rejected by the API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            Self::Input(InputError::TooManyOutcomes { .. }) => "too_many_outcomes",
            Self::Input(_) => "invalid_input",
        };
        let body = ErrorBody {
            error: code.to_string(),
            message: self.to_string(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Legacy distributor request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeRequest {
    pub odds: Vec<f64>,
    pub fixed_index: usize,
    pub fixed_stake: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeResponse {
    pub stakes: Vec<f64>,
}

/// Build the API router.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/v1/arbitrage", post(calculate))
        .route("/v1/stakes", post(stakes))
        .route("/live", get(live))
        .route("/ready", get(ready))
        .with_state(state)
}

/// Run the calculation for one outcome list.
#[instrument(skip_all, fields(outcomes = outcomes.len()))]
pub async fn calculate(
    State(state): State<SharedState>,
    Json(outcomes): Json<Vec<Outcome>>,
) -> Result<Json<ArbitrageResult>, ApiError> {
    if let Err(e) = check_limit(outcomes.len(), state.max_outcomes) {
        warn!(error = %e, "Rejected calculation request");
        return Err(e.into());
    }

    let result = state.calculator.calculate(&outcomes);
    debug!(
        is_arbitrage = result.is_arbitrage,
        arbitrage_pct = result.arbitrage_percentage,
        "Calculation served"
    );
    Ok(Json(result))
}

/// Legacy plain-odds stake distribution.
#[instrument(skip_all, fields(odds = request.odds.len()))]
pub async fn stakes(
    State(state): State<SharedState>,
    Json(request): Json<StakeRequest>,
) -> Result<Json<StakeResponse>, ApiError> {
    check_limit(request.odds.len(), state.max_outcomes)?;
    let stakes = distribute_stakes(&request.odds, request.fixed_index, request.fixed_stake);
    Ok(Json(StakeResponse { stakes }))
}

pub async fn live() -> StatusCode {
    StatusCode::OK
}

pub async fn ready(State(state): State<SharedState>) -> StatusCode {
    if *state.ready.borrow() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Bind and serve until `shutdown` resolves, then drain connections.
pub async fn serve<S>(
    config: &ServerConfig,
    calculator: ArbitrageCalculator,
    shutdown: S,
) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let (ready_tx, ready_rx) = watch::channel(true);
    let state = Arc::new(ApiState::new(calculator, config.max_outcomes, ready_rx));

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;

    info!(
        addr = %config.bind_address,
        max_outcomes = config.max_outcomes,
        target_investment = calculator.target_investment(),
        "HTTP server listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            shutdown.await;
            // Readiness probe -> 503 while connections drain
            let _ = ready_tx.send(false);
            info!("Shutdown signal received, draining connections");
        })
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(max_outcomes: usize) -> (SharedState, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(true);
        let state = Arc::new(ApiState::new(
            ArbitrageCalculator::default(),
            max_outcomes,
            rx,
        ));
        (state, tx)
    }

    #[tokio::test]
    async fn test_calculate_handler() {
        let (state, _tx) = test_state(16);
        let Json(result) = calculate(
            State(state),
            Json(vec![Outcome::back(2.10), Outcome::back(2.05)]),
        )
        .await
        .unwrap();
        assert!(result.is_arbitrage);
        assert_eq!(result.total_investment, 100.0);
    }

    #[tokio::test]
    async fn test_calculate_rejects_oversized_list() {
        let (state, _tx) = test_state(2);
        let err = calculate(State(state), Json(vec![Outcome::back(3.0); 3]))
            .await
            .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_stakes_handler() {
        let (state, _tx) = test_state(16);
        let request = StakeRequest {
            odds: vec![2.0, 2.0],
            fixed_index: 0,
            fixed_stake: 100.0,
        };
        let Json(response) = stakes(State(state), Json(request)).await.unwrap();
        assert_eq!(response.stakes, vec![100.0, 100.0]);
    }

    #[tokio::test]
    async fn test_readiness_follows_shutdown() {
        let (state, tx) = test_state(16);
        assert_eq!(live().await, StatusCode::OK);
        assert_eq!(ready(State(Arc::clone(&state))).await, StatusCode::OK);

        tx.send(false).unwrap();
        assert_eq!(ready(State(state)).await, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_stake_request_is_camel_case() {
        let request: StakeRequest =
            serde_json::from_str(r#"{"odds": [2.5, 1.8], "fixedIndex": 1, "fixedStake": 40}"#)
                .unwrap();
        assert_eq!(request.fixed_index, 1);
        assert_eq!(request.fixed_stake, 40.0);
    }
}
