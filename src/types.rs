use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat transcript entry. The transcript is append-only; an assistant
/// turn always follows the user turn that triggered it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub created_at: OffsetDateTime,
}

static MESSAGE_COUNTER: AtomicU64 = AtomicU64::new(1);

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: MESSAGE_COUNTER.fetch_add(1, Ordering::Relaxed),
            role,
            content: content.into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_ids_are_unique() {
        let a = Message::user("hello");
        let b = Message::assistant("hi");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
