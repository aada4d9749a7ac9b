//! Integration tests for the hook's public surface.
//!
//! Exercises the full `MessageHook` contract against a stub analyzer:
//! no network, same pattern the unit tests use but through the trait
//! object the host would hold.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use image_enrich_hook::analysis::ImageAnalyzer;
use image_enrich_hook::config::HookConfig;
use image_enrich_hook::context::{Attachment, Message, MessageContext, NotificationContext};
use image_enrich_hook::error::AnalysisError;
use image_enrich_hook::hook::{ImageHook, MessageHook};

/// Stub service: answers every call with a description derived from the
/// source, except sources containing "broken", which fail.
struct StubAnalyzer {
    calls: Mutex<Vec<String>>,
}

impl StubAnalyzer {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ImageAnalyzer for StubAnalyzer {
    fn service_name(&self) -> &str {
        "stub"
    }

    async fn analyze(&self, _prompt: &str, source: &str) -> Result<String, AnalysisError> {
        self.calls.lock().unwrap().push(source.to_string());
        if source.contains("broken") {
            return Err(AnalysisError::Remote {
                service: "stub".into(),
                status: 502,
                reason: "bad gateway".into(),
            });
        }
        Ok(format!("description of {source}"))
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn hook_with_stub() -> (ImageHook, Arc<StubAnalyzer>) {
    init_tracing();
    let analyzer = StubAnalyzer::new();
    let hook = ImageHook::new(
        Arc::clone(&analyzer) as Arc<dyn ImageAnalyzer>,
        HookConfig::default(),
    );
    (hook, analyzer)
}

#[tokio::test]
async fn host_shaped_json_round_trips_through_the_hook() {
    let (hook, analyzer) = hook_with_stub();

    // What a host would hand over the wire.
    let ctx: MessageContext = serde_json::from_str(
        r#"{
            "message": {"content": "what's in these?"},
            "attachments": [
                {"type": "image", "url": "https://cdn.example.com/a.png"},
                {"name": "screenshot.PNG", "path": "/tmp/screenshot.PNG"},
                {"name": "minutes.docx", "path": "/tmp/minutes.docx"}
            ],
            "additionalContext": "prior notes",
            "metadata": {"session": "s-1"}
        }"#,
    )
    .unwrap();

    let result = hook.pre_message(ctx).await;

    // Both images analyzed in order, the docx skipped.
    let calls = analyzer.calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            "https://cdn.example.com/a.png".to_string(),
            "/tmp/screenshot.PNG".to_string(),
        ]
    );

    let injected = result.additional_context.as_deref().unwrap();
    assert!(injected.starts_with("prior notes"));
    assert!(injected.contains("**[Image Analysis]**"));
    assert!(injected.contains("**Image 1** (https://cdn.example.com/a.png)"));
    assert!(injected.contains("**Image 2** (/tmp/screenshot.PNG)"));
    assert!(!injected.contains("minutes.docx"));

    // Host-owned fields survive.
    assert_eq!(result.metadata["session"], "s-1");

    // And the mutated context still serializes with host field names.
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["additionalContext"].as_str().unwrap().contains("**Image 1**"));
}

#[tokio::test]
async fn failures_surface_inline_and_never_reach_the_host() {
    let (hook, _) = hook_with_stub();

    let ctx = MessageContext {
        message: Some(Message {
            content: Some("compare these".into()),
            text: None,
        }),
        attachments: vec![
            Attachment {
                url: Some("https://cdn.example.com/broken.png".into()),
                ..Default::default()
            },
            Attachment {
                url: Some("https://cdn.example.com/fine.jpg".into()),
                ..Default::default()
            },
        ],
        ..Default::default()
    };

    // No Result anywhere: the handler's signature alone guarantees the
    // host never sees a pipeline error.
    let result = hook.pre_message(ctx).await;
    let injected = result.additional_context.unwrap();

    assert!(injected.contains("**Image 1** (https://cdn.example.com/broken.png):\nError: "));
    assert!(injected.contains("bad gateway"));
    assert!(injected.contains("**Image 2** (https://cdn.example.com/fine.jpg):\ndescription of"));
}

#[tokio::test]
async fn empty_context_passes_through_by_identity() {
    let (hook, analyzer) = hook_with_stub();
    let ctx = MessageContext::default();

    let result = hook.pre_message(ctx.clone()).await;
    assert_eq!(result, ctx);
    assert!(analyzer.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn notification_handler_rewrites_only_image_attached() {
    let (hook, _) = hook_with_stub();

    let attached = NotificationContext {
        kind: Some("image-attached".into()),
        message: Some("placeholder".into()),
    };
    let rewritten = hook.notification(attached).await;
    assert_eq!(rewritten.message.as_deref(), Some("🖼️ Analyzing your image..."));

    let other = NotificationContext {
        kind: Some("session-end".into()),
        message: Some("bye".into()),
    };
    let untouched = hook.notification(other.clone()).await;
    assert_eq!(untouched, other);
}

#[tokio::test]
async fn repeated_invocations_are_independent() {
    let (hook, analyzer) = hook_with_stub();

    let ctx = MessageContext {
        attachments: vec![Attachment {
            url: Some("https://cdn.example.com/a.png".into()),
            ..Default::default()
        }],
        ..Default::default()
    };

    let first = hook.pre_message(ctx.clone()).await;
    let second = hook.pre_message(ctx).await;

    // No state carries over: both invocations produce the same injection.
    assert_eq!(first.additional_context, second.additional_context);
    assert_eq!(analyzer.calls.lock().unwrap().len(), 2);
}
