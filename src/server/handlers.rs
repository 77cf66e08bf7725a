use axum::Json;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use crate::core::DcfError;
use crate::report::{FormView, ReportError};
use crate::valuation::{Valuation, value_company};

use super::AppState;
use super::form::{FormError, ValuationForm};

pub(super) async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(super) async fn index(State(state): State<AppState>) -> Response {
    html(StatusCode::OK, state.renderer.render_index(&FormView::default()))
}

pub(super) async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ValuationForm>,
) -> Response {
    let form_error = |status: StatusCode, message: String| {
        html(status, state.renderer.render_index(&form.view(Some(&message))))
    };

    let (ticker, params) = match form.parse() {
        Ok(parsed) => parsed,
        Err(e) => return form_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match value_company(&state.client, &ticker, params).await {
        Ok(valuation) => html(StatusCode::OK, state.renderer.render_results(&valuation)),
        Err(e) => {
            tracing::warn!(%ticker, error = %e, "valuation failed");
            form_error(status_for(&e), format!("could not value {ticker}: {e}"))
        }
    }
}

pub(super) async fn api_valuation(
    State(state): State<AppState>,
    Query(form): Query<ValuationForm>,
) -> Result<Json<Valuation>, (StatusCode, Json<serde_json::Value>)> {
    let (ticker, params) = form
        .parse()
        .map_err(|e: FormError| error_json(StatusCode::BAD_REQUEST, &e.to_string()))?;

    value_company(&state.client, &ticker, params)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::warn!(%ticker, error = %e, "valuation failed");
            error_json(status_for(&e), &e.to_string())
        })
}

fn status_for(e: &DcfError) -> StatusCode {
    match e {
        DcfError::InvalidSymbol | DcfError::InvalidParams(_) => StatusCode::BAD_REQUEST,
        DcfError::Status { status: 404, .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    }
}

fn error_json(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(json!({ "error": message })))
}

fn html(status: StatusCode, page: Result<String, ReportError>) -> Response {
    match page {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "rendering failed").into_response()
        }
    }
}
