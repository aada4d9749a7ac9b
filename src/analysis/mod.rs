//! External image-understanding service integration.
//!
//! The pipeline talks to the service through the [`ImageAnalyzer`] trait;
//! [`HttpAnalyzer`] is the production implementation. Tests substitute
//! their own stubs.

mod http;

pub use http::HttpAnalyzer;

use async_trait::async_trait;

use crate::error::AnalysisError;

/// Seam to the external image-understanding service.
///
/// One stateless call per attachment, no retries. Any deadline must
/// come from the underlying transport; the hook imposes none.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    /// Service name for logs and error messages.
    fn service_name(&self) -> &str;

    /// Describe the image at `source` (URL or local path), guided by `prompt`.
    async fn analyze(&self, prompt: &str, source: &str) -> Result<String, AnalysisError>;
}
