//! HTTP route handlers.

use std::error::Error as _;

use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::error::{ErrorKind, ReportError};
use crate::transport::TrainDataSource;

use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: TrainDataSource + Send + 'static,
{
    Router::new()
        .route("/", get(report_page::<S>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Query string for the report page.
#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Report page, or the search form when no stations were given.
async fn report_page<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<ReportParams>,
) -> Result<Response, AppError>
where
    S: TrainDataSource + Send + 'static,
{
    if params.from.is_none() && params.to.is_none() {
        return render(&IndexTemplate);
    }

    let from = params.from.unwrap_or_default();
    let to = params.to.unwrap_or_default();

    let report = state.reporter.report(&from, &to).await?;

    render(&ReportTemplate {
        title: format!(
            "{} to {}",
            report.journey.origin_name, report.journey.destination_name
        ),
        from: report.journey.origin.to_string(),
        to: report.journey.destination.to_string(),
        report: report.render(),
    })
}

fn render(template: &impl Template) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;
    Ok(Html(html).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String, details: Option<String> },
    Internal { message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ReportError> for AppError {
    fn from(e: ReportError) -> Self {
        let message = e.to_string();
        match e.kind() {
            ErrorKind::InvalidInput => AppError::BadRequest { message },
            ErrorKind::Fetch | ErrorKind::Parse => AppError::BadGateway {
                details: e.source().and_then(|s| s.source()).map(ToString::to_string),
                message,
            },
            ErrorKind::CredentialMissing | ErrorKind::Io => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, details) = match self {
            AppError::BadRequest { message } => {
                warn!(%status, %message, "rejected request");
                (message, None)
            }
            AppError::BadGateway { message, details } => {
                warn!(%status, %message, "upstream failure");
                (message, details)
            }
            AppError::Internal { message } => {
                error!(%status, %message, "internal error");
                (message, None)
            }
        };

        let page = ErrorTemplate {
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message,
            details,
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => (status, format!("Template error: {e}")).into_response(),
        }
    }
}
