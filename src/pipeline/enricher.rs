//! Attachment enricher — the work behind both hook handlers.
//!
//! `enrich` is a strictly sequential fold: each qualifying attachment is
//! awaited to completion (success or failure) before the next call
//! starts, so output order always matches input order and total latency
//! scales linearly with attachment count.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::analysis::ImageAnalyzer;
use crate::config::HookConfig;
use crate::context::{MessageContext, NotificationContext};
use crate::pipeline::types::{AnalysisOutcome, ImageAnalysis};

/// Notification type tag that triggers the status rewrite.
const IMAGE_ATTACHED: &str = "image-attached";

/// Status text shown while an image is being analyzed.
const ANALYZING_STATUS: &str = "🖼️ Analyzing your image...";

/// Markers wrapping the injected analysis text.
const BANNER_HEADER: &str = "\n\n---\n**[Image Analysis]**\n";
const BANNER_FOOTER: &str = "\n---\n";

/// Enriches message contexts with image analyses.
pub struct Enricher {
    analyzer: Arc<dyn ImageAnalyzer>,
    config: HookConfig,
}

impl Enricher {
    /// Create an enricher backed by the given service.
    pub fn new(analyzer: Arc<dyn ImageAnalyzer>, config: HookConfig) -> Self {
        Self { analyzer, config }
    }

    /// Enrich a message context with analyses of its image attachments.
    ///
    /// Never fails: a context with nothing to analyze passes through
    /// unchanged (no side effects, no network calls), and per-attachment
    /// failures become error blocks in the injected text.
    pub async fn enrich(&self, mut ctx: MessageContext) -> MessageContext {
        if !self.config.enabled || !self.config.auto_analyze {
            debug!(
                enabled = self.config.enabled,
                auto_analyze = self.config.auto_analyze,
                "Enrichment switched off; passing context through"
            );
            return ctx;
        }

        let analyses = {
            let images: Vec<_> = ctx
                .attachments
                .iter()
                .filter(|a| a.is_image(&self.config.supported_formats))
                .collect();

            if images.is_empty() {
                return ctx;
            }

            info!(count = images.len(), "Detected image attachments");

            let prompt = ctx
                .message
                .as_ref()
                .and_then(|m| m.prompt())
                .unwrap_or(&self.config.default_prompt);

            let mut analyses = Vec::with_capacity(images.len());
            for attachment in images {
                let Some(source) = attachment.source() else {
                    warn!(?attachment, "Could not determine image source; skipping");
                    continue;
                };

                info!(source = %source, "Analyzing image");
                let outcome = match self.analyzer.analyze(prompt, source).await {
                    Ok(text) => AnalysisOutcome::Analysis { text },
                    Err(e) => {
                        error!(source = %source, error = %e, "Image analysis failed");
                        AnalysisOutcome::Error {
                            message: e.to_string(),
                        }
                    }
                };

                analyses.push(ImageAnalysis {
                    source: source.to_string(),
                    outcome,
                    analyzed_at: Utc::now(),
                });
            }
            analyses
        };

        // Every qualifying attachment may have lacked a source.
        if analyses.is_empty() {
            return ctx;
        }

        let blocks: Vec<String> = analyses
            .iter()
            .enumerate()
            .map(|(i, a)| a.render(i))
            .collect();
        let injected = format!("{BANNER_HEADER}{}{BANNER_FOOTER}", blocks.join("\n\n"));
        ctx.push_additional_context(&injected);

        info!(analyses = blocks.len(), "Added image analysis to context");
        ctx
    }

    /// Cosmetic status rewrite for image-attached notifications.
    ///
    /// Any other type tag leaves the context untouched.
    pub fn notify(&self, mut ctx: NotificationContext) -> NotificationContext {
        if ctx.kind.as_deref() == Some(IMAGE_ATTACHED) {
            ctx.message = Some(ANALYZING_STATUS.to_string());
        }
        ctx
    }
}
