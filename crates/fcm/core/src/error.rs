//! Local argument errors.

/// A precondition failure detected before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("device id list is empty")]
    EmptyDeviceIds,
    #[error("topic name is empty")]
    EmptyTopic,
    #[error("topic name contains characters outside [a-zA-Z0-9-_.~%]")]
    InvalidTopic,
    #[error("device group key is empty")]
    EmptyDeviceGroup,
    #[error("condition is empty")]
    EmptyCondition,
    #[error("message list is empty")]
    EmptyMessages,
    #[error("message target is empty")]
    EmptyTarget,
}
