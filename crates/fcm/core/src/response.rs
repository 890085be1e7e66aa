//! Results returned by the messaging client.

/// Result of a legacy send to one or more device tokens.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MessagingDevicesResponse {
    pub multicast_id: i64,
    pub success_count: u32,
    pub failure_count: u32,
    pub canonical_registration_token_count: u32,
    /// One entry per token, in request order.
    pub results: Vec<MessagingDeviceResult>,
}

/// Outcome for a single device token.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MessagingDeviceResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Replacement token the app server should store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_registration_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessagingDeviceResult {
    /// Check if delivery to this token succeeded.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of a legacy send to a device group.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MessagingDeviceGroupResponse {
    pub success_count: u32,
    pub failure_count: u32,
    pub failed_registration_tokens: Vec<String>,
}

/// Result of a legacy send to a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessagingTopicResponse {
    pub message_id: i64,
}

/// Result of a legacy send to a condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessagingConditionResponse {
    pub message_id: i64,
}

/// Outcome of one message in a batch.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SendResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine readable error code, e.g. `UNREGISTERED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl SendResponse {
    /// Create a successful send response.
    pub fn success(message_id: String) -> Self {
        Self {
            success: true,
            message_id: Some(message_id),
            error: None,
            code: None,
        }
    }

    /// Create a failed send response.
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.to_string()),
            code: None,
        }
    }

    /// Attach the server's error code to a failure.
    pub fn with_code(mut self, code: Option<String>) -> Self {
        self.code = code;
        self
    }

    /// Whether the message failed because its token is no longer registered.
    pub fn is_unregistered(&self) -> bool {
        self.code.as_deref().is_some_and(crate::is_unregistered_code)
    }
}

/// Result of `send_all` or `send_multicast`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BatchResponse {
    pub success_count: usize,
    pub failure_count: usize,
    /// One entry per message, in request order.
    pub responses: Vec<SendResponse>,
}

impl BatchResponse {
    /// Build a batch response, deriving the counts.
    pub fn from_responses(responses: Vec<SendResponse>) -> Self {
        let success_count = responses.iter().filter(|r| r.success).count();
        Self {
            success_count,
            failure_count: responses.len() - success_count,
            responses,
        }
    }
}

/// Result of a topic subscribe or unsubscribe.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TopicManagementResponse {
    pub success_count: usize,
    pub failure_count: usize,
    pub errors: Vec<TopicManagementError>,
}

/// A failed token in a topic management request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TopicManagementError {
    /// Index of the token in the request.
    pub index: usize,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_counts() {
        let batch = BatchResponse::from_responses(vec![
            SendResponse::success("projects/p/messages/1".into()),
            SendResponse::failure("UNREGISTERED"),
            SendResponse::success("projects/p/messages/2".into()),
        ]);
        assert_eq!(batch.success_count, 2);
        assert_eq!(batch.failure_count, 1);
        assert_eq!(batch.responses[1].error.as_deref(), Some("UNREGISTERED"));
        assert!(!batch.responses[1].is_unregistered());
    }

    #[test]
    fn test_failure_code() {
        let response = SendResponse::failure("gone").with_code(Some("UNREGISTERED".into()));
        assert!(response.is_unregistered());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"success": false, "error": "gone", "code": "UNREGISTERED"})
        );
    }
}
