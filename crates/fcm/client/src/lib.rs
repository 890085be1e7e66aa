//! FCM Messaging Client
//!
//! The `Messaging` seam and its HTTP implementation against Firebase Cloud
//! Messaging and the Instance ID topic API.

mod error;
mod http;
mod legacy;
mod settings;
mod traits;

pub use error::*;
pub use http::*;
pub use settings::*;
pub use traits::*;

// Re-export for convenience
pub use fcm_core;
pub use yup_oauth2::ServiceAccountKey;
