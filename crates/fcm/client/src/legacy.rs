//! Legacy send API and Instance ID wire formats.

use fcm_core::{
    MessagingConditionResponse, TOPIC_PREFIX, MessagingDeviceGroupResponse, MessagingDeviceResult,
    MessagingDevicesResponse, MessagingOptions, MessagingPayload, MessagingTopicResponse,
    TopicManagementError, TopicManagementResponse,
};
use serde::{Deserialize, Serialize};

use crate::FcmApiError;

/// Request body for `fcm/send`.
#[derive(Debug, Serialize)]
pub(crate) struct LegacyRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_ids: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<&'a str>,
    #[serde(flatten)]
    pub payload: &'a MessagingPayload,
    #[serde(flatten)]
    pub options: &'a MessagingOptions,
}

impl<'a> LegacyRequest<'a> {
    /// One token goes in `to`, several in `registration_ids`.
    pub fn devices(
        tokens: &'a [String],
        payload: &'a MessagingPayload,
        options: &'a MessagingOptions,
    ) -> Self {
        match tokens {
            [single] => Self::to(single.clone(), payload, options),
            many => Self {
                to: None,
                registration_ids: Some(many),
                condition: None,
                payload,
                options,
            },
        }
    }

    pub fn to(to: String, payload: &'a MessagingPayload, options: &'a MessagingOptions) -> Self {
        Self {
            to: Some(to),
            registration_ids: None,
            condition: None,
            payload,
            options,
        }
    }

    pub fn condition(
        condition: &'a str,
        payload: &'a MessagingPayload,
        options: &'a MessagingOptions,
    ) -> Self {
        Self {
            to: None,
            registration_ids: None,
            condition: Some(condition),
            payload,
            options,
        }
    }
}

/// Prefix a topic with `/topics/` after checking its name.
pub(crate) fn normalize_topic(topic: &str) -> color_eyre::eyre::Result<String> {
    let name = fcm_core::topic_name(topic)?;
    Ok(format!("{TOPIC_PREFIX}{name}"))
}

#[derive(Debug, Deserialize)]
pub(crate) struct DevicesResponse {
    #[serde(default)]
    multicast_id: i64,
    #[serde(default)]
    success: u32,
    #[serde(default)]
    failure: u32,
    #[serde(default)]
    canonical_ids: u32,
    #[serde(default)]
    results: Vec<DeviceResult>,
}

#[derive(Debug, Deserialize)]
struct DeviceResult {
    message_id: Option<String>,
    registration_id: Option<String>,
    error: Option<String>,
}

impl From<DevicesResponse> for MessagingDevicesResponse {
    fn from(r: DevicesResponse) -> Self {
        Self {
            multicast_id: r.multicast_id,
            success_count: r.success,
            failure_count: r.failure,
            canonical_registration_token_count: r.canonical_ids,
            results: r
                .results
                .into_iter()
                .map(|d| MessagingDeviceResult {
                    message_id: d.message_id,
                    canonical_registration_token: d.registration_id,
                    error: d.error,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceGroupResponse {
    #[serde(default)]
    success: u32,
    #[serde(default)]
    failure: u32,
    #[serde(default)]
    failed_registration_ids: Vec<String>,
}

impl From<DeviceGroupResponse> for MessagingDeviceGroupResponse {
    fn from(r: DeviceGroupResponse) -> Self {
        Self {
            success_count: r.success,
            failure_count: r.failure,
            failed_registration_tokens: r.failed_registration_ids,
        }
    }
}

/// Answer to a topic or condition send: a message id or an error code.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageIdResponse {
    message_id: Option<i64>,
    error: Option<String>,
}

impl MessageIdResponse {
    fn into_message_id(self) -> Result<i64, FcmApiError> {
        match (self.message_id, self.error) {
            (_, Some(code)) => Err(FcmApiError::from_code(200, code)),
            (Some(id), None) => Ok(id),
            (None, None) => Err(FcmApiError::from_body(200, "response has no message_id")),
        }
    }

    pub fn into_topic(self) -> Result<MessagingTopicResponse, FcmApiError> {
        self.into_message_id()
            .map(|message_id| MessagingTopicResponse { message_id })
    }

    pub fn into_condition(self) -> Result<MessagingConditionResponse, FcmApiError> {
        self.into_message_id()
            .map(|message_id| MessagingConditionResponse { message_id })
    }
}

/// Request body for `iid/v1:batchAdd` and `iid/v1:batchRemove`.
#[derive(Debug, Serialize)]
pub(crate) struct TopicRequest<'a> {
    pub to: String,
    pub registration_tokens: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopicResponse {
    #[serde(default)]
    results: Vec<TopicResult>,
}

#[derive(Debug, Deserialize)]
struct TopicResult {
    error: Option<String>,
}

impl From<TopicResponse> for TopicManagementResponse {
    fn from(r: TopicResponse) -> Self {
        let errors: Vec<TopicManagementError> = r
            .results
            .iter()
            .enumerate()
            .filter_map(|(index, result)| {
                result.error.as_ref().map(|reason| TopicManagementError {
                    index,
                    reason: reason.clone(),
                })
            })
            .collect();

        Self {
            success_count: r.results.len() - errors.len(),
            failure_count: errors.len(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_topic() {
        assert_eq!(normalize_topic("news").unwrap(), "/topics/news");
        assert_eq!(normalize_topic("/topics/news").unwrap(), "/topics/news");
        let err = normalize_topic("bad topic").unwrap_err();
        assert_eq!(
            err.downcast_ref::<fcm_core::ArgumentError>(),
            Some(&fcm_core::ArgumentError::InvalidTopic)
        );
        let err = normalize_topic("/topics/").unwrap_err();
        assert_eq!(
            err.downcast_ref::<fcm_core::ArgumentError>(),
            Some(&fcm_core::ArgumentError::EmptyTopic)
        );
    }

    #[test]
    fn test_single_device_uses_to() {
        let tokens = vec!["t1".to_string()];
        let payload = MessagingPayload::notification("a", "b");
        let options = MessagingOptions::default();
        let json = serde_json::to_value(LegacyRequest::devices(&tokens, &payload, &options)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"to": "t1", "notification": {"title": "a", "body": "b"}})
        );
    }

    #[test]
    fn test_many_devices_use_registration_ids() {
        let tokens = vec!["t1".to_string(), "t2".to_string()];
        let payload = MessagingPayload::default();
        let options = MessagingOptions {
            dry_run: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(LegacyRequest::devices(&tokens, &payload, &options)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"registration_ids": ["t1", "t2"], "dry_run": true})
        );
    }

    #[test]
    fn test_topic_results() {
        let raw: TopicResponse =
            serde_json::from_str(r#"{"results":[{},{"error":"NOT_FOUND"},{}]}"#).unwrap();
        let response = TopicManagementResponse::from(raw);
        assert_eq!(response.success_count, 2);
        assert_eq!(response.failure_count, 1);
        assert_eq!(
            response.errors,
            vec![TopicManagementError {
                index: 1,
                reason: "NOT_FOUND".into()
            }]
        );
    }

    #[test]
    fn test_topic_send_error_code() {
        let raw: MessageIdResponse =
            serde_json::from_str(r#"{"error":"TopicsMessageRateExceeded"}"#).unwrap();
        let err = raw.into_topic().unwrap_err();
        assert_eq!(err.code.as_deref(), Some("TopicsMessageRateExceeded"));
    }
}
