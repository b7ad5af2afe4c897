use serde::{Deserialize, Serialize};

/// Role type for a conversation message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System role. At most one per conversation, always at index 0.
    System,

    /// User role.
    User,

    /// Assistant role.
    Assistant,
}

/// A single conversation turn.
///
/// The role is fixed at construction; only the content of the leading system
/// message is ever rewritten in place (system-prompt update).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// The role of the message.
    pub role: Role,

    /// The text content of the message. May be empty, never absent.
    pub content: String,
}

impl Message {
    /// Create a new `Message` with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new system `Message`.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a new user `Message`.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant `Message`.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Returns true if this is a system message.
    pub fn is_system(&self) -> bool {
        self.role == Role::System
    }
}

impl From<&str> for Message {
    fn from(content: &str) -> Self {
        Self::user(content)
    }
}

impl From<String> for Message {
    fn from(content: String) -> Self {
        Self::user(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn message_serializes_with_lowercase_role() {
        let message = Message::user("Hello!");
        let json = to_value(&message).unwrap();

        assert_eq!(
            json,
            json!({
                "role": "user",
                "content": "Hello!"
            })
        );
    }

    #[test]
    fn message_roundtrip_all_roles() {
        for message in [
            Message::system("be brief"),
            Message::user("hi"),
            Message::assistant("hello"),
        ] {
            let json = to_value(&message).unwrap();
            let back: Message = serde_json::from_value(json).unwrap();
            assert_eq!(back, message);
        }
    }

    #[test]
    fn message_deserializes_empty_content() {
        let message: Message =
            serde_json::from_value(json!({"role": "assistant", "content": ""})).unwrap();
        assert_eq!(message.role, Role::Assistant);
        assert!(message.content.is_empty());
    }

    #[test]
    fn message_from_str_is_user() {
        let message: Message = "Hello".into();
        assert_eq!(message.role, Role::User);

        let message = Message::from("from string".to_string());
        assert_eq!(message.role, Role::User);
    }

    #[test]
    fn is_system() {
        assert!(Message::system("x").is_system());
        assert!(!Message::user("x").is_system());
        assert!(!Message::assistant("x").is_system());
    }
}
