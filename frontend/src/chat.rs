use crate::error::ApiError;
use crate::models::{ChatMessage, ChatRequest, ChatRole};
use log::error;

pub const CHAT_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

impl Conversation {
    /// Appends the user's message and returns the request to post, or `None`
    /// when the input is blank or a reply is still outstanding.
    pub fn send(&mut self, input: &str) -> Option<ChatRequest> {
        if input.trim().is_empty() || self.pending {
            return None;
        }
        let request = ChatRequest {
            message: input.to_string(),
            conversation_history: self.messages.clone(),
        };
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: input.to_string(),
        });
        self.pending = true;
        Some(request)
    }

    pub fn receive(&mut self, reply: Result<String, ApiError>) {
        let content = match reply {
            Ok(message) => message,
            Err(err) => {
                error!("chat request failed: {}", err);
                CHAT_ERROR_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content,
        });
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_ignored() {
        let mut chat = Conversation::default();
        assert!(chat.send("   ").is_none());
        assert!(chat.messages.is_empty());
    }

    #[test]
    fn history_excludes_the_message_being_sent() {
        let mut chat = Conversation::default();
        let first = chat.send("Hi").unwrap();
        assert!(first.conversation_history.is_empty());
        assert!(chat.send("Again?").is_none());

        chat.receive(Ok("Hello!".to_string()));
        let second = chat.send("Food spend?").unwrap();
        assert_eq!(second.message, "Food spend?");
        assert_eq!(second.conversation_history.len(), 2);
        assert_eq!(second.conversation_history[1].role, ChatRole::Assistant);
    }

    #[test]
    fn failure_appends_apology_and_keeps_history() {
        let mut chat = Conversation::default();
        chat.send("Budget tips?").unwrap();
        chat.receive(Err(ApiError::Rejected("Failed to get response".to_string())));

        assert!(!chat.pending);
        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.messages[0].content, "Budget tips?");
        assert_eq!(chat.messages[1].content, CHAT_ERROR_REPLY);
    }
}
