//! HTTP front end: the valuation form, its results page and a JSON API.
//!
//! Routes:
//! - `GET /` form
//! - `POST /` form submission, renders results
//! - `GET /api/valuation?ticker=..&growth_rate=..&discount_rate=..&years=..`
//! - `GET /health`

pub mod config;
mod form;
mod handlers;
pub mod logging;

pub use config::{ConfigError, LogFormat, ServerConfig};
pub use form::{FormError, ValuationForm};

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::core::YahooClient;
use crate::report::Renderer;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: YahooClient,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    #[must_use]
    pub fn new(client: YahooClient, renderer: Renderer) -> Self {
        Self {
            client,
            renderer: Arc::new(renderer),
        }
    }
}

/// Build the router with all routes mounted.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/api/valuation", get(handlers::api_valuation))
        .route("/health", get(handlers::health))
        .with_state(state)
}
