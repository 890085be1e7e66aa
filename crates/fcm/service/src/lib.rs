//! FCM Notification Service
//!
//! A thin facade over a [`fcm_client::Messaging`] client: argument checks,
//! fixed delivery options, platform message shaping and failure logging.

mod options;
mod platform;
mod service;

pub use options::*;
pub use platform::*;
pub use service::*;

// Re-export for convenience
pub use fcm_client;
pub use fcm_core;
