// crates/guardian-desk-http/src/lib.rs
// ============================================================================
// Module: Guardian Desk HTTP Library
// Description: HTTP API surface for the dashboard reads.
// Purpose: Expose documents, stats, and activities over a loopback-first server.
// Dependencies: axum, guardian-desk-config, guardian-desk-core, tokio
// ============================================================================

//! ## Overview
//! `guardian-desk-http` serves the dashboard's read operations over HTTP:
//! the filtered document list, the derived scan statistics, the activity
//! feed, and a readiness probe. Search terms arrive as untrusted query
//! parameters and are bounded by the configured limits before evaluation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod server;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::NoopRequestAudit;
pub use audit::RequestAuditEvent;
pub use audit::RequestAuditSink;
pub use audit::StderrRequestAudit;
pub use server::DashboardServer;
pub use server::ServerError;
pub use telemetry::ApiOutcome;
pub use telemetry::ApiRoute;
pub use telemetry::HttpMetricEvent;
pub use telemetry::HttpMetrics;
pub use telemetry::NoopMetrics;
