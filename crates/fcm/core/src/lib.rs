//! FCM Core Types
//!
//! Wire types shared by the messaging client and the notification facade.

mod error;
mod message;
mod payload;
mod response;
mod topic;

pub use error::*;
pub use message::*;
pub use payload::*;
pub use response::*;
pub use topic::*;
