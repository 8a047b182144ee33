/*!
 * Tracing
 * Structured tracing for simulation runs using the tracing crate
 *
 * Features:
 * - Run ID generation for correlating every line of one simulation
 * - JSON-formatted logs for structured parsing
 * - `log` records from the allocator engine bridged into the same subscriber
 */

use crate::core::limits::{DEFAULT_LOG_FILTER, TRACE_JSON_ENV};
use crate::core::types::Size;
use crate::memory::Policy;
use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Logs always go to stderr so the block listing on stdout stays clean.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - MMU_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        debug!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        debug!("Structured tracing initialized");
    }
}

/// Generate a unique run ID
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one simulation run
pub struct RunSpan {
    span: tracing::Span,
    start: Instant,
    run_id: String,
}

impl RunSpan {
    pub fn new(policy: Policy, partition_size: Size, events: usize) -> Self {
        let run_id = generate_run_id();

        let span = span!(
            Level::INFO,
            "simulation",
            run_id = %run_id,
            policy = policy.as_str(),
            partition_size = partition_size,
            events = events,
            failed_events = tracing::field::Empty,
            duration_us = tracing::field::Empty,
        );

        let _entered = span.enter();
        info!(run_id = %run_id, "simulation started");
        drop(_entered);

        Self {
            span,
            start: Instant::now(),
            run_id,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Record how many events the engine rejected
    pub fn record_failures(&self, count: usize) {
        self.span.record("failed_events", count);
    }

    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);

        if duration.as_millis() > 1000 {
            warn!(
                run_id = %self.run_id,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow simulation run"
            );
        } else {
            debug!(
                run_id = %self.run_id,
                duration_us = duration.as_micros() as u64,
                "simulation completed"
            );
        }
    }
}

/// Helper to create a run span
#[inline]
pub fn span_run(policy: Policy, partition_size: Size, events: usize) -> RunSpan {
    RunSpan::new(policy, partition_size, events)
}
