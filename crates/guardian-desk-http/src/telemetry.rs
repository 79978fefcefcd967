// crates/guardian-desk-http/src/telemetry.rs
// ============================================================================
// Module: HTTP Telemetry
// Description: Observability hooks for dashboard API routing.
// Purpose: Provide metric events and latency hooks without hard deps.
// Dependencies: none
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for API request counters and
//! latency observations. It is intentionally dependency-light so downstream
//! deployments can plug in Prometheus or OpenTelemetry without redesign.
//! Telemetry must not carry raw search terms; labels stay closed-set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Metric Labels
// ============================================================================

/// Dashboard API route classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ApiRoute {
    /// GET /documents.
    Documents,
    /// GET /stats.
    Stats,
    /// GET /activities.
    Activities,
    /// GET /healthz.
    Health,
}

impl ApiRoute {
    /// Returns a stable label for the route.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Documents => "/documents",
            Self::Stats => "/stats",
            Self::Activities => "/activities",
            Self::Health => "/healthz",
        }
    }
}

/// API request outcome classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ApiOutcome {
    /// Successful request.
    Ok,
    /// Request rejected as invalid.
    Rejected,
}

impl ApiOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Rejected => "rejected",
        }
    }
}

/// API request metric event payload.
///
/// # Invariants
/// - Carries only closed-set labels and sizes, never search terms.
#[derive(Debug, Clone, Copy)]
pub struct HttpMetricEvent {
    /// Route that served the request.
    pub route: ApiRoute,
    /// Request outcome.
    pub outcome: ApiOutcome,
    /// HTTP status code returned.
    pub status: u16,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Metrics sink for API requests and latencies.
pub trait HttpMetrics: Send + Sync {
    /// Records a request counter event.
    fn record_request(&self, event: HttpMetricEvent);
    /// Records a latency observation for the request.
    fn record_latency(&self, event: HttpMetricEvent, latency: Duration);
}

/// No-op metrics sink.
///
/// # Invariants
/// - Metrics are intentionally discarded.
pub struct NoopMetrics;

impl HttpMetrics for NoopMetrics {
    fn record_request(&self, _event: HttpMetricEvent) {}

    fn record_latency(&self, _event: HttpMetricEvent, _latency: Duration) {}
}
