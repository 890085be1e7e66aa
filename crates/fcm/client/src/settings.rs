//! Client settings.

use std::time::Duration;

/// Default FCM API base URL.
pub const DEFAULT_BASE_URL: &str = "https://fcm.googleapis.com/";

/// Default Instance ID API base URL.
pub const DEFAULT_IID_URL: &str = "https://iid.googleapis.com/";

/// Endpoints and limits for [`crate::FcmHttpClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base for the v1 and legacy send endpoints.
    pub base_url: String,
    /// Base for the topic management endpoints.
    pub iid_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Overrides the project id read from the service account key.
    pub project_id: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            iid_url: DEFAULT_IID_URL.to_string(),
            timeout: Duration::from_secs(30),
            project_id: None,
        }
    }
}
