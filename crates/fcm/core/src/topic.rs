//! Topic names and error codes shared by both send APIs.

use crate::ArgumentError;

/// Prefix the legacy API expects in front of topic names.
pub const TOPIC_PREFIX: &str = "/topics/";

/// Bare topic name, with any `/topics/` prefix removed.
pub fn topic_name(topic: &str) -> Result<&str, ArgumentError> {
    let name = topic.strip_prefix(TOPIC_PREFIX).unwrap_or(topic);
    if name.trim().is_empty() {
        return Err(ArgumentError::EmptyTopic);
    }
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '%'));
    if !valid {
        return Err(ArgumentError::InvalidTopic);
    }
    Ok(name)
}

/// Whether an FCM error code means the registration token is gone.
pub fn is_unregistered_code(code: &str) -> bool {
    matches!(code, "UNREGISTERED" | "NotRegistered" | "InvalidRegistration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_name() {
        assert_eq!(topic_name("news"), Ok("news"));
        assert_eq!(topic_name("/topics/news"), Ok("news"));
        assert_eq!(topic_name("a-b_c.d~e%f"), Ok("a-b_c.d~e%f"));
        assert_eq!(topic_name(""), Err(ArgumentError::EmptyTopic));
        assert_eq!(topic_name("  "), Err(ArgumentError::EmptyTopic));
        assert_eq!(topic_name("/topics/"), Err(ArgumentError::EmptyTopic));
        assert_eq!(topic_name("bad topic"), Err(ArgumentError::InvalidTopic));
    }

    #[test]
    fn test_unregistered_codes() {
        assert!(is_unregistered_code("UNREGISTERED"));
        assert!(is_unregistered_code("NotRegistered"));
        assert!(!is_unregistered_code("INVALID_ARGUMENT"));
    }
}
