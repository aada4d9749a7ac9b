//! Configuration types.
//!
//! Built once when the host loads the hook; never mutated afterwards.

use secrecy::SecretString;

/// Largest payload the remote service accepts (20 MiB). Enforced
/// remotely; the hook does not validate sizes locally.
pub const MAX_IMAGE_SIZE: usize = 20 * 1024 * 1024;

/// Behavior configuration for the enrichment hook.
#[derive(Debug, Clone)]
pub struct HookConfig {
    /// Master switch; when false the hook passes contexts through untouched.
    pub enabled: bool,
    /// Analyze qualifying attachments without being asked.
    pub auto_analyze: bool,
    /// Maximum image size in bytes, per the remote service's limit.
    pub max_image_size: usize,
    /// Extensions that classify an attachment as an image.
    pub supported_formats: Vec<String>,
    /// Prompt used when the message carries no text of its own.
    pub default_prompt: String,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_analyze: true,
            max_image_size: MAX_IMAGE_SIZE,
            supported_formats: ["jpg", "jpeg", "png", "gif", "webp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_prompt: "Please analyze this image and describe what you see. \
                             Include any relevant details, text, diagrams, or issues you notice."
                .to_string(),
        }
    }
}

/// Connection settings for the image-understanding service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Display name used in logs and error messages.
    pub service: String,
    /// URL the analysis request is POSTed to.
    pub endpoint: String,
    /// API key sent as a bearer token.
    pub api_key: SecretString,
}
