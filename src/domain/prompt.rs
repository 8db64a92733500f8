//! The immutable result of prompt assembly.

use serde::{Deserialize, Serialize};

use super::message::{ChatMessage, ChatRole, ConversationMessage};

/// Rendered prompt text plus the conversation history that precedes it.
///
/// Built once by the assembler. Holds no references to the sources, filters
/// or template that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prompt {
    text: String,
    history: Vec<ConversationMessage>,
}

impl Prompt {
    pub(crate) fn new(text: String, history: Vec<ConversationMessage>) -> Self {
        Self { text, history }
    }

    /// The rendered, filtered prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Conversation history retained ahead of the rendered prompt.
    pub fn history(&self) -> &[ConversationMessage] {
        &self.history
    }

    /// Translate history into chat messages and append the rendered text as
    /// the final user message.
    ///
    /// History entries whose role is missing or not one of
    /// `system`/`user`/`assistant` are dropped.
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 1);
        for (index, entry) in self.history.iter().enumerate() {
            match entry.role.as_ref().and_then(ChatRole::from_role) {
                Some(role) => messages.push(ChatMessage { role, content: entry.content.clone() }),
                None => {
                    tracing::debug!(
                        index,
                        role = entry.role.as_ref().map(|r| r.as_str()).unwrap_or("<missing>"),
                        "dropping history entry with unsupported role"
                    );
                }
            }
        }
        messages.push(ChatMessage { role: ChatRole::User, content: self.text.clone() });
        messages
    }

    /// Wrap the rendered text as a retrieval-style document.
    pub fn to_document(&self) -> PromptDocument {
        PromptDocument { page_content: self.text.clone(), metadata: serde_json::Map::new() }
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Document-shaped view of a prompt, for pipelines that consume documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptDocument {
    pub page_content: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::Role;

    #[test]
    fn messages_end_with_rendered_text() {
        let prompt = Prompt::new(
            "rendered".to_string(),
            vec![
                ConversationMessage::system("be brief"),
                ConversationMessage::user("hello"),
                ConversationMessage::assistant("hi"),
            ],
        );

        let messages = prompt.to_messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[2].role, ChatRole::Assistant);
        assert_eq!(
            messages.last().unwrap(),
            &ChatMessage { role: ChatRole::User, content: "rendered".to_string() }
        );
    }

    #[test]
    fn unknown_and_missing_roles_are_dropped() {
        let prompt = Prompt::new(
            "rendered".to_string(),
            vec![
                ConversationMessage::new(Role::Other("tool".to_string()), "tool output"),
                ConversationMessage { role: None, content: "orphan".to_string() },
                ConversationMessage::user("kept"),
            ],
        );

        let messages = prompt.to_messages();
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["kept", "rendered"]);
        // History itself is left untouched.
        assert_eq!(prompt.history().len(), 3);
    }

    #[test]
    fn display_and_document_expose_text() {
        let prompt = Prompt::new("body".to_string(), Vec::new());
        assert_eq!(prompt.to_string(), "body");
        assert_eq!(prompt.to_document().page_content, "body");
        assert!(prompt.to_document().metadata.is_empty());
    }
}
