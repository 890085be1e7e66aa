//! Per-platform notification shaping.

use std::collections::BTreeMap;

use fcm_core::{AndroidConfig, ApnsConfig, MessageContent, Priority};

const DEFAULT_APNS_PRIORITY: &str = "10";
const DEFAULT_EXPIRATION: u64 = 360_000;
const DEFAULT_SOUND: &str = "default";

/// Optional overrides for iOS and Android notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlatformOptions {
    /// `apns-priority` header on iOS, `high` or `normal` on Android.
    #[serde(default)]
    pub priority: Option<String>,
    /// `apns-expiration` header on iOS, TTL in milliseconds on Android.
    #[serde(default)]
    pub expiration: Option<u64>,
    /// iOS alert sound.
    #[serde(default)]
    pub sound: Option<String>,
}

impl PlatformOptions {
    fn expiration(&self) -> u64 {
        self.expiration.unwrap_or(DEFAULT_EXPIRATION)
    }
}

/// APNs alert with a badge of 1.
pub fn ios_content(title: &str, body: &str, options: &PlatformOptions) -> MessageContent {
    let headers = BTreeMap::from([
        (
            "apns-priority".to_string(),
            options
                .priority
                .clone()
                .unwrap_or_else(|| DEFAULT_APNS_PRIORITY.to_string()),
        ),
        ("apns-expiration".to_string(), options.expiration().to_string()),
    ]);

    let payload = serde_json::json!({
        "aps": {
            "alert": {
                "title": title,
                "body": body,
            },
            "badge": 1,
            "sound": options.sound.as_deref().unwrap_or(DEFAULT_SOUND),
        }
    });

    MessageContent {
        apns: Some(ApnsConfig {
            headers,
            payload: Some(payload),
        }),
        ..Default::default()
    }
}

/// Android data message carrying `title` and `content`.
pub fn android_content(title: &str, body: &str, options: &PlatformOptions) -> MessageContent {
    let priority = match options.priority.as_deref() {
        Some(p) if p.eq_ignore_ascii_case("normal") => Priority::Normal,
        _ => Priority::High,
    };

    let data = BTreeMap::from([
        ("title".to_string(), title.to_string()),
        ("content".to_string(), body.to_string()),
    ]);

    MessageContent {
        android: Some(AndroidConfig {
            priority: Some(priority),
            ttl: Some(AndroidConfig::ttl_from_millis(options.expiration())),
            data: Some(data),
            ..Default::default()
        }),
        ..Default::default()
    }
}
