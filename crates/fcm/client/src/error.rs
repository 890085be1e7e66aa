//! Errors reported by the FCM servers.

use serde::Deserialize;

/// A non-success answer from an FCM or Instance ID endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("FCM API error ({status}): {message}")]
pub struct FcmApiError {
    /// HTTP status code.
    pub status: u16,
    /// Machine readable code, e.g. `UNREGISTERED` or `NotRegistered`.
    pub code: Option<String>,
    pub message: String,
}

impl FcmApiError {
    /// Build an error from a response status and body.
    ///
    /// Understands the Google error envelope and the flat `{"error": "..."}`
    /// shape of the legacy endpoints. Anything else is kept as the message.
    pub fn from_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                error: ErrorField::Detailed(detail),
            }) => {
                let code = detail
                    .details
                    .iter()
                    .find_map(|d| d.error_code.clone())
                    .or(detail.status);
                Self {
                    status,
                    code,
                    message: detail.message.unwrap_or_else(|| body.to_string()),
                }
            }
            Ok(ErrorBody {
                error: ErrorField::Code(code),
            }) => Self::from_code(status, code),
            Err(_) => Self {
                status,
                code: None,
                message: if body.trim().is_empty() {
                    format!("unexpected status {status}")
                } else {
                    body.trim().to_string()
                },
            },
        }
    }

    /// Error carrying only a legacy error code.
    pub fn from_code(status: u16, code: String) -> Self {
        Self {
            status,
            message: code.clone(),
            code: Some(code),
        }
    }

    /// Whether the token is no longer valid and should be dropped.
    pub fn is_unregistered(&self) -> bool {
        self.code.as_deref().is_some_and(fcm_core::is_unregistered_code)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorField,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Code(String),
    Detailed(ErrorDetail),
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    status: Option<String>,
    #[serde(default)]
    details: Vec<ErrorDetailEntry>,
}

#[derive(Deserialize)]
struct ErrorDetailEntry {
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
}
