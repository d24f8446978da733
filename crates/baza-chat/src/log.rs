//! Append-only conversation log.

use serde::Serialize;

use crate::types::Message;

/// Ordered record of every message exchanged in one widget session.
///
/// Messages can only be appended; index order is send order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its index.
    pub fn append(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }
}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_returns_index_in_order() {
        let mut log = ConversationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.append(Message::user("one")), 0);
        assert_eq!(log.append(Message::assistant("two")), 1);
        assert_eq!(log.append(Message::user("three")), 2);

        let texts: Vec<&str> = log.iter().map(Message::text).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert_eq!(log.last().map(Message::text), Some("three"));
        assert_eq!(log.get(1).map(Message::text), Some("two"));
        assert!(log.get(3).is_none());
    }

    #[test]
    fn test_serializes_as_array() {
        let mut log = ConversationLog::new();
        log.append(Message::user("hi"));
        let value = serde_json::to_value(&log).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["text"], "hi");
        assert_eq!(value[0]["origin"], "user");
    }
}
