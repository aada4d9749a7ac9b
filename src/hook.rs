//! Host-facing hook surface.
//!
//! The host loads the hook by its manifest and dispatches into the two
//! named handlers. Dispatch timing, error isolation between hooks, and
//! the wider context schema are the host's business, not ours.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::analysis::ImageAnalyzer;
use crate::config::HookConfig;
use crate::context::{MessageContext, NotificationContext};
use crate::pipeline::Enricher;

/// Registration metadata the host reads when loading a hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookManifest {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

/// The handlers a message hook exposes to the host.
#[async_trait]
pub trait MessageHook: Send + Sync {
    /// Registration metadata.
    fn manifest(&self) -> HookManifest;

    /// Runs before the host's model sees the message.
    async fn pre_message(&self, ctx: MessageContext) -> MessageContext;

    /// Runs on notification events.
    async fn notification(&self, ctx: NotificationContext) -> NotificationContext;
}

/// Image attachment enrichment hook.
pub struct ImageHook {
    enricher: Enricher,
}

impl ImageHook {
    /// Build the hook around an analyzer and its configuration.
    pub fn new(analyzer: Arc<dyn ImageAnalyzer>, config: HookConfig) -> Self {
        Self {
            enricher: Enricher::new(analyzer, config),
        }
    }
}

#[async_trait]
impl MessageHook for ImageHook {
    fn manifest(&self) -> HookManifest {
        HookManifest {
            name: "image-enrich-hook",
            version: env!("CARGO_PKG_VERSION"),
            description: "Automatically analyze image attachments and inject \
                          the descriptions into the model context",
        }
    }

    async fn pre_message(&self, ctx: MessageContext) -> MessageContext {
        self.enricher.enrich(ctx).await
    }

    async fn notification(&self, ctx: NotificationContext) -> NotificationContext {
        self.enricher.notify(ctx)
    }
}
