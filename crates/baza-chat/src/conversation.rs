//! Conversation core: log ownership and the Idle/AwaitingReply state machine.
//!
//! This type does no timing of its own. `submit` appends the user message and
//! hands back a [`PendingReply`]; whoever drives the conversation delivers
//! that ticket later with [`Conversation::deliver`].

use std::sync::Arc;

use tracing::debug;

use crate::log::ConversationLog;
use crate::matcher::FaqMatcher;
use crate::types::{ConversationState, Message};

/// Observer notified of every appended message, in log order.
///
/// Called while the conversation is borrowed, so implementations must not
/// call back into it.
pub trait MessageSink: Send + Sync {
    fn on_message(&self, index: usize, message: &Message);
}

/// A reply that has been scheduled but not yet appended.
#[derive(Debug)]
pub struct PendingReply {
    ticket: u64,
    input: String,
}

impl PendingReply {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// The user text this reply answers.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// One chat session.
pub struct Conversation {
    matcher: FaqMatcher,
    fallback: String,
    log: ConversationLog,
    state: ConversationState,
    pending: usize,
    next_ticket: u64,
    sink: Option<Arc<dyn MessageSink>>,
}

impl Conversation {
    pub fn new(matcher: FaqMatcher, fallback: impl Into<String>) -> Self {
        Self {
            matcher,
            fallback: fallback.into(),
            log: ConversationLog::new(),
            state: ConversationState::Idle,
            pending: 0,
            next_ticket: 0,
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Submit user input.
    ///
    /// Whitespace-only input is ignored and returns `None`. Otherwise the raw
    /// text is appended as a user message and a reply ticket is returned.
    pub fn submit(&mut self, raw: &str) -> Option<PendingReply> {
        if raw.trim().is_empty() {
            return None;
        }

        self.append(Message::user(raw));

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending += 1;
        if self.state == ConversationState::Idle {
            self.transition(ConversationState::AwaitingReply);
        }

        Some(PendingReply {
            ticket,
            input: raw.to_string(),
        })
    }

    /// Append the assistant reply for a ticket and return its log index.
    pub fn deliver(&mut self, reply: PendingReply) -> usize {
        let text = self.reply_text(&reply.input).to_string();
        let index = self.append(Message::assistant(text));

        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 && self.state == ConversationState::AwaitingReply {
            self.transition(ConversationState::Idle);
        }
        debug!(ticket = reply.ticket, index, "Reply delivered");
        index
    }

    /// The answer for `input`, or the fallback when nothing matches.
    pub fn reply_text(&self, input: &str) -> &str {
        self.matcher
            .find(input)
            .map(|entry| entry.answer())
            .unwrap_or(self.fallback.as_str())
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Number of replies scheduled but not yet delivered.
    pub fn pending_replies(&self) -> usize {
        self.pending
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    fn append(&mut self, message: Message) -> usize {
        let index = self.log.append(message);
        if let (Some(sink), Some(message)) = (&self.sink, self.log.get(index)) {
            sink.on_message(index, message);
        }
        index
    }

    fn transition(&mut self, target: ConversationState) {
        debug_assert!(self.state.can_transition_to(&target));
        debug!("Conversation state: {} -> {}", self.state, target);
        self.state = target;
    }
}
