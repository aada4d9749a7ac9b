//! Request-scoped context types threaded through the hook.
//!
//! The host hands these in as JSON-shaped values, the hook returns them
//! (possibly mutated). Nothing here outlives a single invocation.

use serde::{Deserialize, Serialize};

/// The message the user is about to send to the model.
///
/// Hosts are inconsistent about which field carries the text, so both
/// are optional and [`Message::prompt`] resolves the chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Primary message body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Alternate field some hosts use instead of `content`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Message {
    /// The user's prompt: `content`, else `text`.
    ///
    /// A present-but-empty string counts as absent.
    pub fn prompt(&self) -> Option<&str> {
        first_present(&[&self.content, &self.text])
    }
}

/// A file-like object attached to an inbound message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Type tag assigned by the host ("image", "file", ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Local filesystem path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Remote URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Display name, usually with an extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Alternate path field some hosts populate instead of `path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl Attachment {
    /// Whether this attachment should be treated as an image.
    ///
    /// True when the host tagged it `"image"` (exact literal), or when the
    /// first present identifier among {path, url, name} ends in one of the
    /// supported extensions, case-insensitively.
    pub fn is_image(&self, supported_formats: &[String]) -> bool {
        if self.kind.as_deref() == Some("image") {
            return true;
        }
        let Some(identifier) = first_present(&[&self.path, &self.url, &self.name]) else {
            return false;
        };
        let lower = identifier.to_ascii_lowercase();
        supported_formats
            .iter()
            .any(|ext| lower.ends_with(&format!(".{}", ext.to_ascii_lowercase())))
    }

    /// Where the image bytes live: `url`, else `path`, else `file_path`.
    ///
    /// Note the priority differs from classification: a remote URL beats
    /// a local path when both are set.
    pub fn source(&self) -> Option<&str> {
        first_present(&[&self.url, &self.path, &self.file_path])
    }
}

/// Context passed to the pre-message hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContext {
    /// The outgoing message, if the host provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    /// Ordered attachments; empty and absent are equivalent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Free text the host feeds to the model alongside the message.
    /// The hook appends here; existing content is never replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    /// Host-owned fields passed through untouched.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

impl MessageContext {
    /// Append to `additional_context`, preserving whatever is already there.
    pub fn push_additional_context(&mut self, text: &str) {
        let existing = self.additional_context.take().unwrap_or_default();
        self.additional_context = Some(format!("{existing}{text}"));
    }
}

/// Context passed to the notification hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationContext {
    /// Notification type tag ("image-attached", ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Human-readable status text shown to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// First candidate that is present and non-empty.
fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.is_empty())
}
