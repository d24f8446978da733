//! Shared types for the chat widget.

use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

/// A single entry of the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    text: String,
    origin: Origin,
    /// Epoch seconds at creation.
    sent_at: i64,
}

impl Message {
    /// Message typed by the user, kept exactly as entered.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Origin::User)
    }

    /// Message produced by the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text.into(), Origin::Assistant)
    }

    fn new(text: String, origin: Origin) -> Self {
        Self {
            text,
            origin,
            sent_at: Local::now().timestamp(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// True when the message came from the assistant.
    pub fn is_system(&self) -> bool {
        self.origin == Origin::Assistant
    }

    pub fn sent_at(&self) -> i64 {
        self.sent_at
    }
}

/// Reply state of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConversationState {
    /// No reply is pending.
    #[default]
    Idle,
    /// At least one reply is scheduled but not yet appended.
    AwaitingReply,
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationState::Idle => write!(f, "Idle"),
            ConversationState::AwaitingReply => write!(f, "AwaitingReply"),
        }
    }
}

impl ConversationState {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: &ConversationState) -> bool {
        matches!(
            (self, target),
            (ConversationState::Idle, ConversationState::AwaitingReply)
                | (ConversationState::AwaitingReply, ConversationState::Idle)
        )
    }
}

/// Whether the chat panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetVisibility {
    #[default]
    Closed,
    Open,
}

impl WidgetVisibility {
    pub fn toggled(self) -> Self {
        match self {
            WidgetVisibility::Closed => WidgetVisibility::Open,
            WidgetVisibility::Open => WidgetVisibility::Closed,
        }
    }
}

impl fmt::Display for WidgetVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetVisibility::Closed => write!(f, "Closed"),
            WidgetVisibility::Open => write!(f, "Open"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_origin() {
        let user = Message::user("Привет");
        assert_eq!(user.origin(), Origin::User);
        assert!(!user.is_system());

        let bot = Message::assistant("Здравствуйте");
        assert_eq!(bot.origin(), Origin::Assistant);
        assert!(bot.is_system());
    }

    #[test]
    fn test_user_message_keeps_raw_text() {
        let msg = Message::user("  Сколько СТОИТ?  ");
        assert_eq!(msg.text(), "  Сколько СТОИТ?  ");
    }

    #[test]
    fn test_message_has_timestamp() {
        let msg = Message::user("hi");
        assert!(msg.sent_at() > 0);
    }

    #[test]
    fn test_message_json_shape() {
        let msg = Message::assistant("ok");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["text"], "ok");
        assert_eq!(value["origin"], "assistant");
        assert!(value["sent_at"].is_i64());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ConversationState::Idle.to_string(), "Idle");
        assert_eq!(ConversationState::AwaitingReply.to_string(), "AwaitingReply");
    }

    #[test]
    fn test_state_transitions() {
        assert!(ConversationState::Idle.can_transition_to(&ConversationState::AwaitingReply));
        assert!(ConversationState::AwaitingReply.can_transition_to(&ConversationState::Idle));

        assert!(!ConversationState::Idle.can_transition_to(&ConversationState::Idle));
        assert!(!ConversationState::AwaitingReply
            .can_transition_to(&ConversationState::AwaitingReply));
    }

    #[test]
    fn test_visibility_toggle() {
        assert_eq!(WidgetVisibility::default(), WidgetVisibility::Closed);
        assert_eq!(WidgetVisibility::Closed.toggled(), WidgetVisibility::Open);
        assert_eq!(WidgetVisibility::Open.toggled(), WidgetVisibility::Closed);
        assert_eq!(WidgetVisibility::Open.to_string(), "Open");
    }
}
