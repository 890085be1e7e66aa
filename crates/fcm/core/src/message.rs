//! HTTP v1 API messages.

use std::collections::BTreeMap;

use crate::Priority;

/// Where a v1 message is delivered.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// A single registration token.
    Token(String),
    /// A topic name, with or without the `/topics/` prefix. The prefix is
    /// dropped before sending.
    Topic(String),
    /// A topic condition such as `'a' in topics && 'b' in topics`.
    Condition(String),
}

impl Target {
    /// The raw target string.
    pub fn value(&self) -> &str {
        match self {
            Self::Token(v) | Self::Topic(v) | Self::Condition(v) => v,
        }
    }
}

/// A v1 message addressed to one target.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    #[serde(flatten)]
    pub target: Target,
    #[serde(flatten)]
    pub content: MessageContent,
}

impl Message {
    /// Create a message for a target.
    pub fn new(target: Target, content: MessageContent) -> Self {
        Self { target, content }
    }
}

/// A v1 message sent to many registration tokens.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MulticastMessage {
    pub tokens: Vec<String>,
    #[serde(flatten)]
    pub content: MessageContent,
}

impl MulticastMessage {
    /// Create a multicast message.
    pub fn new(tokens: Vec<String>, content: MessageContent) -> Self {
        Self { tokens, content }
    }

    /// Expand into one message per token, in token order.
    pub fn to_messages(&self) -> Vec<Message> {
        self.tokens
            .iter()
            .map(|token| Message::new(Target::Token(token.clone()), self.content.clone()))
            .collect()
    }
}

/// Everything in a v1 message except its target.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MessageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apns: Option<ApnsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpush: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcm_options: Option<AnalyticsOptions>,
}

/// Cross-platform notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Android-specific delivery settings.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AndroidConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Duration string in seconds, e.g. `"3.5s"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_package_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<serde_json::Value>,
}

impl AndroidConfig {
    /// Format a millisecond TTL as a v1 duration string.
    pub fn ttl_from_millis(millis: u64) -> String {
        let secs = millis / 1000;
        match millis % 1000 {
            0 => format!("{secs}s"),
            rem => {
                let frac = format!("{rem:03}");
                format!("{secs}.{}s", frac.trim_end_matches('0'))
            }
        }
    }
}

/// APNs-specific delivery settings.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ApnsConfig {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// The v1 `fcm_options` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalyticsOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_label: Option<String>,
}
