//! Observability subsystem.
//!
//! Structured logging only. The service exposes a single business endpoint
//! and no metrics exporter; request-level visibility comes from the tracing
//! middleware plus the request ID propagated through the HTTP layer.

pub mod logging;
