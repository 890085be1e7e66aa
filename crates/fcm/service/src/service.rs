//! Notification facade.

use fcm_client::{FcmHttpClient, Messaging};
use fcm_core::{
    ArgumentError, BatchResponse, Message, MessageContent, MessagingConditionResponse,
    MessagingDeviceGroupResponse, MessagingDevicesResponse, MessagingOptions, MessagingPayload,
    MessagingTopicResponse, MulticastMessage, Priority, Target, TopicManagementResponse,
};

use crate::{FcmOptions, PlatformOptions, android_content, ios_content};

/// Seconds a message is kept for an offline device.
pub const TIME_TO_LIVE: u32 = 60 * 60 * 24;

/// Push notification service over a messaging client.
///
/// Every operation checks its arguments, forwards them to the client, and
/// hands back the client's result. Client errors are logged and returned
/// as-is.
pub struct FcmService<M> {
    messaging: M,
}

impl FcmService<FcmHttpClient> {
    /// Create a service backed by FCM, authenticating with the configured
    /// service account.
    pub async fn from_options(options: &FcmOptions) -> color_eyre::eyre::Result<Self> {
        let client =
            FcmHttpClient::from_file(&options.firebase_specs_path, options.client_settings())
                .await?;
        Ok(Self::new(client))
    }
}

impl<M: Messaging> FcmService<M> {
    /// Create a new service.
    pub fn new(messaging: M) -> Self {
        Self { messaging }
    }

    /// The underlying messaging client.
    pub fn messaging(&self) -> &M {
        &self.messaging
    }

    /// Options used for visible notifications.
    pub fn default_options() -> MessagingOptions {
        MessagingOptions {
            priority: Some(Priority::High),
            time_to_live: Some(TIME_TO_LIVE),
            ..Default::default()
        }
    }

    /// Options used for silent (background) notifications.
    pub fn silent_options() -> MessagingOptions {
        MessagingOptions {
            content_available: Some(true),
            ..Self::default_options()
        }
    }

    fn options(silent: bool) -> MessagingOptions {
        if silent {
            Self::silent_options()
        } else {
            Self::default_options()
        }
    }

    /// Send a payload to a list of devices.
    pub async fn send_notification(
        &self,
        device_ids: &[String],
        payload: &MessagingPayload,
        silent: bool,
    ) -> color_eyre::eyre::Result<MessagingDevicesResponse> {
        require_device_ids(device_ids)?;
        let options = Self::options(silent);
        forward(
            "send_notification",
            self.messaging.send_to_device(device_ids, payload, &options),
        )
        .await
    }

    /// Send an APNs alert to a list of iOS devices.
    pub async fn send_notification_to_ios(
        &self,
        device_ids: &[String],
        title: &str,
        body: &str,
        options: &PlatformOptions,
    ) -> color_eyre::eyre::Result<BatchResponse> {
        require_device_ids(device_ids)?;
        let message = MulticastMessage::new(device_ids.to_vec(), ios_content(title, body, options));
        forward(
            "send_notification_to_ios",
            self.messaging.send_multicast(&message, false),
        )
        .await
    }

    /// Send a data notification to a list of Android devices.
    pub async fn send_notification_to_android(
        &self,
        device_ids: &[String],
        title: &str,
        body: &str,
        options: &PlatformOptions,
    ) -> color_eyre::eyre::Result<BatchResponse> {
        require_device_ids(device_ids)?;
        let message =
            MulticastMessage::new(device_ids.to_vec(), android_content(title, body, options));
        forward(
            "send_notification_to_android",
            self.messaging.send_multicast(&message, false),
        )
        .await
    }

    /// Send caller-built message content to a list of devices.
    pub async fn send_notification_raw_message(
        &self,
        device_ids: &[String],
        content: &MessageContent,
    ) -> color_eyre::eyre::Result<BatchResponse> {
        require_device_ids(device_ids)?;
        let message = MulticastMessage::new(device_ids.to_vec(), content.clone());
        forward(
            "send_notification_raw_message",
            self.messaging.send_multicast(&message, false),
        )
        .await
    }

    pub async fn subscribe_to_topic(
        &self,
        device_ids: &[String],
        topic: &str,
    ) -> color_eyre::eyre::Result<TopicManagementResponse> {
        require_device_ids(device_ids)?;
        fcm_core::topic_name(topic)?;
        forward(
            "subscribe_to_topic",
            self.messaging.subscribe_to_topic(device_ids, topic),
        )
        .await
    }

    pub async fn unsubscribe_from_topic(
        &self,
        device_ids: &[String],
        topic: &str,
    ) -> color_eyre::eyre::Result<TopicManagementResponse> {
        require_device_ids(device_ids)?;
        fcm_core::topic_name(topic)?;
        forward(
            "unsubscribe_from_topic",
            self.messaging.unsubscribe_from_topic(device_ids, topic),
        )
        .await
    }

    /// Send a payload to every subscriber of a topic.
    pub async fn send_to_topic(
        &self,
        topic: &str,
        payload: &MessagingPayload,
        silent: bool,
    ) -> color_eyre::eyre::Result<MessagingTopicResponse> {
        fcm_core::topic_name(topic)?;
        let options = Self::options(silent);
        forward(
            "send_to_topic",
            self.messaging.send_to_topic(topic, payload, &options),
        )
        .await
    }

    /// Send a payload to a list of devices.
    pub async fn send_to_device(
        &self,
        device_ids: &[String],
        payload: &MessagingPayload,
        silent: bool,
    ) -> color_eyre::eyre::Result<MessagingDevicesResponse> {
        require_device_ids(device_ids)?;
        let options = Self::options(silent);
        forward(
            "send_to_device",
            self.messaging.send_to_device(device_ids, payload, &options),
        )
        .await
    }

    /// Send a payload to a device group.
    pub async fn send_to_device_group(
        &self,
        group: &str,
        payload: &MessagingPayload,
        silent: bool,
    ) -> color_eyre::eyre::Result<MessagingDeviceGroupResponse> {
        require_value(group, ArgumentError::EmptyDeviceGroup)?;
        let options = Self::options(silent);
        forward(
            "send_to_device_group",
            self.messaging.send_to_device_group(group, payload, &options),
        )
        .await
    }

    /// Send a payload to the devices matching a topic condition.
    pub async fn send_to_condition(
        &self,
        condition: &str,
        payload: &MessagingPayload,
        silent: bool,
    ) -> color_eyre::eyre::Result<MessagingConditionResponse> {
        require_value(condition, ArgumentError::EmptyCondition)?;
        let options = Self::options(silent);
        forward(
            "send_to_condition",
            self.messaging.send_to_condition(condition, payload, &options),
        )
        .await
    }

    pub async fn send_multicast(
        &self,
        message: &MulticastMessage,
        dry_run: bool,
    ) -> color_eyre::eyre::Result<BatchResponse> {
        require_device_ids(&message.tokens)?;
        forward(
            "send_multicast",
            self.messaging.send_multicast(message, dry_run),
        )
        .await
    }

    pub async fn send_all(
        &self,
        messages: &[Message],
        dry_run: bool,
    ) -> color_eyre::eyre::Result<BatchResponse> {
        if messages.is_empty() {
            return Err(ArgumentError::EmptyMessages.into());
        }
        forward("send_all", self.messaging.send_all(messages, dry_run)).await
    }

    pub async fn send(
        &self,
        message: &Message,
        dry_run: bool,
    ) -> color_eyre::eyre::Result<String> {
        require_value(message.target.value(), ArgumentError::EmptyTarget)?;
        if let Target::Topic(topic) = &message.target {
            fcm_core::topic_name(topic)?;
        }
        forward("send", self.messaging.send(message, dry_run)).await
    }
}

fn require_device_ids(device_ids: &[String]) -> Result<(), ArgumentError> {
    if device_ids.is_empty() {
        return Err(ArgumentError::EmptyDeviceIds);
    }
    Ok(())
}

fn require_value(value: &str, error: ArgumentError) -> Result<(), ArgumentError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}

/// Await a client call, logging a failure before handing it back untouched.
async fn forward<T>(
    operation: &'static str,
    call: impl Future<Output = color_eyre::eyre::Result<T>>,
) -> color_eyre::eyre::Result<T> {
    match call.await {
        Ok(value) => {
            tracing::debug!(operation, "fcm call succeeded");
            Ok(value)
        }
        Err(e) => {
            tracing::error!(operation, error = %e, report = ?e, "fcm call failed");
            Err(e)
        }
    }
}
