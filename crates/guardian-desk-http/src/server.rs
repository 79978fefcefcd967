// crates/guardian-desk-http/src/server.rs
// ============================================================================
// Module: Dashboard HTTP Server
// Description: axum server exposing the dashboard read operations.
// Purpose: Serve documents, stats, activities, and readiness over HTTP.
// Dependencies: axum, guardian-desk-config, guardian-desk-core, tokio
// ============================================================================

//! ## Overview
//! The server exposes four GET routes over an immutable seeded dashboard:
//! `/documents` (filtered by the exact dashboard selection policy),
//! `/stats` (recomputed per request), `/activities`, and `/healthz`.
//! Query parameters are untrusted; search terms are length-bounded before
//! evaluation and oversized terms are rejected with a stable error body.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use guardian_desk_config::GuardianDeskConfig;
use guardian_desk_core::Activity;
use guardian_desk_core::Dashboard;
use guardian_desk_core::Document;
use guardian_desk_core::ScanStats;
use guardian_desk_core::SearchQuery;
use guardian_desk_core::activity_icon;
use guardian_desk_core::document_icon;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::audit::RequestAuditEvent;
use crate::audit::RequestAuditSink;
use crate::audit::StderrRequestAudit;
use crate::telemetry::ApiOutcome;
use crate::telemetry::ApiRoute;
use crate::telemetry::HttpMetricEvent;
use crate::telemetry::HttpMetrics;
use crate::telemetry::NoopMetrics;

// ============================================================================
// SECTION: Server
// ============================================================================

/// Dashboard HTTP server instance.
pub struct DashboardServer {
    /// Validated server configuration.
    config: GuardianDeskConfig,
    /// Shared request-handling state.
    state: Arc<ServerState>,
}

impl DashboardServer {
    /// Builds a server from configuration with default sinks.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the configuration is invalid.
    pub fn from_config(config: GuardianDeskConfig) -> Result<Self, ServerError> {
        Self::with_sinks(config, Arc::new(NoopMetrics), Arc::new(StderrRequestAudit))
    }

    /// Builds a server from configuration with explicit metric and audit sinks.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the configuration is invalid.
    pub fn with_sinks(
        config: GuardianDeskConfig,
        metrics: Arc<dyn HttpMetrics>,
        audit: Arc<dyn RequestAuditSink>,
    ) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let state = Arc::new(ServerState {
            dashboard: Dashboard::from_seed(),
            max_term_chars: config.limits.max_term_chars,
            metrics,
            audit,
        });
        Ok(Self {
            config,
            state,
        })
    }

    /// Builds the axum router over the shared server state.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .route("/documents", get(handle_documents))
            .route("/stats", get(handle_stats))
            .route("/activities", get(handle_activities))
            .route("/healthz", get(handle_health))
            .with_state(Arc::clone(&self.state))
    }

    /// Serves requests on the configured bind address until shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let addr = self
            .config
            .server
            .effective_bind()
            .map_err(|err| ServerError::Config(err.to_string()))?;
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|_| ServerError::Transport("http bind failed".to_string()))?;
        axum::serve(listener, app)
            .await
            .map_err(|_| ServerError::Transport("http server failed".to_string()))
    }
}

/// Shared server state for request handlers.
struct ServerState {
    /// Immutable seeded dashboard answering all reads.
    dashboard: Dashboard,
    /// Maximum accepted search-term length in characters.
    max_term_chars: usize,
    /// Metrics sink for request counters and latencies.
    metrics: Arc<dyn HttpMetrics>,
    /// Audit sink for request outcomes.
    audit: Arc<dyn RequestAuditSink>,
}

impl ServerState {
    /// Records metrics and audit output for a served request.
    fn observe(&self, route: ApiRoute, outcome: ApiOutcome, status: u16, started: Instant) {
        let event = HttpMetricEvent {
            route,
            outcome,
            status,
        };
        self.metrics.record_request(event);
        self.metrics.record_latency(event, started.elapsed());
        self.audit.record(&RequestAuditEvent::served(route, outcome, status));
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Dashboard server errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration was rejected.
    #[error("server config error: {0}")]
    Config(String),
    /// Transport-level failure while binding or serving.
    #[error("server transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// Query parameters accepted by the documents route.
#[derive(Debug, Default, Deserialize)]
struct DocumentsQuery {
    /// Name-search term; absent means no constraint.
    #[serde(default)]
    name: Option<String>,
    /// Tag-search term; absent means no constraint.
    #[serde(default)]
    tag: Option<String>,
}

/// Document view with the derived icon category.
#[derive(Debug, Serialize)]
struct DocumentView {
    /// Document record fields.
    #[serde(flatten)]
    document: Document,
    /// Derived icon name for the document.
    icon: &'static str,
}

impl DocumentView {
    /// Builds the view for a document record.
    fn from_document(document: &Document) -> Self {
        Self {
            icon: document_icon(&document.name),
            document: document.clone(),
        }
    }
}

/// Activity view with the derived icon category.
#[derive(Debug, Serialize)]
struct ActivityView {
    /// Activity record fields.
    #[serde(flatten)]
    activity: Activity,
    /// Derived icon name for the activity kind.
    icon: &'static str,
}

impl ActivityView {
    /// Builds the view for an activity record.
    fn from_activity(activity: &Activity) -> Self {
        Self {
            icon: activity_icon(activity.kind),
            activity: activity.clone(),
        }
    }
}

/// Stable error body for rejected requests.
#[derive(Debug, Serialize)]
struct ApiErrorBody {
    /// Stable error code.
    code: &'static str,
    /// Human-readable error message.
    message: String,
}

/// Readiness probe body.
#[derive(Debug, Serialize)]
struct HealthBody {
    /// Readiness status label.
    status: &'static str,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Handles GET /documents with the dashboard selection policy.
async fn handle_documents(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<DocumentsQuery>,
) -> Response {
    let started = Instant::now();
    let name_term = query.name.unwrap_or_default();
    let tag_term = query.tag.unwrap_or_default();
    if let Err(body) = check_term(&name_term, state.max_term_chars)
        .and_then(|()| check_term(&tag_term, state.max_term_chars))
    {
        state.observe(
            ApiRoute::Documents,
            ApiOutcome::Rejected,
            StatusCode::BAD_REQUEST.as_u16(),
            started,
        );
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }
    let search = SearchQuery::new(name_term, tag_term);
    let views: Vec<DocumentView> =
        state.dashboard.documents(&search).into_iter().map(DocumentView::from_document).collect();
    state.observe(ApiRoute::Documents, ApiOutcome::Ok, StatusCode::OK.as_u16(), started);
    (StatusCode::OK, Json(views)).into_response()
}

/// Handles GET /stats by deriving the counters per request.
async fn handle_stats(State(state): State<Arc<ServerState>>) -> Response {
    let started = Instant::now();
    let stats: ScanStats = state.dashboard.stats();
    state.observe(ApiRoute::Stats, ApiOutcome::Ok, StatusCode::OK.as_u16(), started);
    (StatusCode::OK, Json(stats)).into_response()
}

/// Handles GET /activities over the seeded feed.
async fn handle_activities(State(state): State<Arc<ServerState>>) -> Response {
    let started = Instant::now();
    let views: Vec<ActivityView> =
        state.dashboard.activities().iter().map(ActivityView::from_activity).collect();
    state.observe(ApiRoute::Activities, ApiOutcome::Ok, StatusCode::OK.as_u16(), started);
    (StatusCode::OK, Json(views)).into_response()
}

/// Handles GET /healthz readiness probes.
async fn handle_health(State(state): State<Arc<ServerState>>) -> Response {
    let started = Instant::now();
    state.observe(ApiRoute::Health, ApiOutcome::Ok, StatusCode::OK.as_u16(), started);
    (StatusCode::OK, Json(HealthBody {
        status: "ok",
    }))
        .into_response()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rejects search terms longer than the configured character limit.
fn check_term(term: &str, max_chars: usize) -> Result<(), ApiErrorBody> {
    if term.chars().count() > max_chars {
        return Err(ApiErrorBody {
            code: "term_too_long",
            message: format!("search term exceeds {max_chars} characters"),
        });
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
