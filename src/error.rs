//! Error types for the enrichment hook.
//!
//! Only the service seam can fail. The pipeline itself is infallible:
//! per-attachment failures are folded into the injected text, so nothing
//! here ever reaches the host as an error.

/// Failures from the external image-understanding service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The request never completed (DNS, connect, transport).
    #[error("Service {service} request failed: {reason}")]
    RequestFailed { service: String, reason: String },

    /// The service answered with a non-success status.
    #[error("Service {service} returned status {status}: {reason}")]
    Remote {
        service: String,
        status: u16,
        reason: String,
    },

    /// The service answered, but not in the expected shape.
    #[error("Invalid response from {service}: {reason}")]
    InvalidResponse { service: String, reason: String },
}
