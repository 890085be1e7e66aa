//! Messaging client trait.

use fcm_core::{
    BatchResponse, Message, MessagingConditionResponse, MessagingDeviceGroupResponse,
    MessagingDevicesResponse, MessagingOptions, MessagingPayload, MessagingTopicResponse,
    MulticastMessage, TopicManagementResponse,
};

/// Push notification messaging operations.
#[trait_variant::make(Send)]
pub trait Messaging: Send + Sync {
    /// Send one message. Returns the message name assigned by the server.
    async fn send(&self, message: &Message, dry_run: bool) -> color_eyre::eyre::Result<String>;

    /// Send a list of messages, reporting each outcome.
    async fn send_all(
        &self,
        messages: &[Message],
        dry_run: bool,
    ) -> color_eyre::eyre::Result<BatchResponse>;

    /// Send the same message to many tokens.
    async fn send_multicast(
        &self,
        message: &MulticastMessage,
        dry_run: bool,
    ) -> color_eyre::eyre::Result<BatchResponse>;

    /// Legacy send to one or more registration tokens.
    async fn send_to_device(
        &self,
        tokens: &[String],
        payload: &MessagingPayload,
        options: &MessagingOptions,
    ) -> color_eyre::eyre::Result<MessagingDevicesResponse>;

    /// Legacy send to a device group notification key.
    async fn send_to_device_group(
        &self,
        notification_key: &str,
        payload: &MessagingPayload,
        options: &MessagingOptions,
    ) -> color_eyre::eyre::Result<MessagingDeviceGroupResponse>;

    /// Legacy send to a topic.
    async fn send_to_topic(
        &self,
        topic: &str,
        payload: &MessagingPayload,
        options: &MessagingOptions,
    ) -> color_eyre::eyre::Result<MessagingTopicResponse>;

    /// Legacy send to a topic condition.
    async fn send_to_condition(
        &self,
        condition: &str,
        payload: &MessagingPayload,
        options: &MessagingOptions,
    ) -> color_eyre::eyre::Result<MessagingConditionResponse>;

    /// Subscribe tokens to a topic.
    async fn subscribe_to_topic(
        &self,
        tokens: &[String],
        topic: &str,
    ) -> color_eyre::eyre::Result<TopicManagementResponse>;

    /// Unsubscribe tokens from a topic.
    async fn unsubscribe_from_topic(
        &self,
        tokens: &[String],
        topic: &str,
    ) -> color_eyre::eyre::Result<TopicManagementResponse>;
}
