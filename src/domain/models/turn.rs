use serde::Serialize;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_role_content_pair() {
        let turn = Turn::user("Hello");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "Hello"}));
    }

    #[test]
    fn assistant_role_serializes_lowercase() {
        let json = serde_json::to_value(Turn::assistant("Hi there")).unwrap();
        assert_eq!(json["role"], "assistant");
    }
}
