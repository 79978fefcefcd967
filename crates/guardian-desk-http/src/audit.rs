// crates/guardian-desk-http/src/audit.rs
// ============================================================================
// Module: HTTP Request Audit
// Description: Audit events for dashboard API requests.
// Purpose: Record request outcomes as JSON lines without leaking terms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Audit events capture which route was served and with what status. Search
//! terms are untrusted input and are deliberately excluded from the events.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::telemetry::ApiOutcome;
use crate::telemetry::ApiRoute;

// ============================================================================
// SECTION: Audit Events
// ============================================================================

/// Audit event emitted for each served API request.
///
/// # Invariants
/// - Contains only closed-set labels and the response status.
#[derive(Debug, Clone, Serialize)]
pub struct RequestAuditEvent {
    /// Stable event name.
    pub event: &'static str,
    /// Route label.
    pub route: &'static str,
    /// Outcome label.
    pub outcome: &'static str,
    /// HTTP status code returned.
    pub status: u16,
}

impl RequestAuditEvent {
    /// Builds an audit event for a served request.
    #[must_use]
    pub const fn served(route: ApiRoute, outcome: ApiOutcome, status: u16) -> Self {
        Self {
            event: "dashboard_api_request",
            route: route.as_str(),
            outcome: outcome.as_str(),
            status,
        }
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for API request events.
pub trait RequestAuditSink: Send + Sync {
    /// Records an audit event.
    fn record(&self, event: &RequestAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrRequestAudit;

impl RequestAuditSink for StderrRequestAudit {
    #[allow(clippy::print_stderr, reason = "Stderr is the designated audit stream.")]
    fn record(&self, event: &RequestAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            eprintln!("{payload}");
        }
    }
}

/// No-op audit sink for tests.
pub struct NoopRequestAudit;

impl RequestAuditSink for NoopRequestAudit {
    fn record(&self, _event: &RequestAuditEvent) {}
}
