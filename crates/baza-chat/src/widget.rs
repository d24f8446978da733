//! Chat widget: visibility, input buffer, header, and the conversation.

use std::sync::Arc;
use std::time::Duration;

use baza_core::{ChatConfig, Icon, Result};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::IntentCatalog;
use crate::conversation::{Conversation, MessageSink};
use crate::matcher::FaqMatcher;
use crate::scheduler::ReplyScheduler;
use crate::types::{ConversationState, Message, WidgetVisibility};

/// Text shown at the top of the open widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetHeader {
    pub icon: Icon,
    pub assistant_name: String,
    pub tagline: String,
}

/// A floating chat widget bound to one conversation.
///
/// The conversation survives closing and reopening the panel; it is dropped
/// with the widget.
pub struct ChatWidget {
    id: Uuid,
    visibility: WidgetVisibility,
    input: String,
    greeting: Option<String>,
    header: WidgetHeader,
    placeholder: String,
    catalog: Arc<IntentCatalog>,
    scheduler: ReplyScheduler,
}

impl ChatWidget {
    pub fn new(
        config: &ChatConfig,
        catalog: IntentCatalog,
        sink: Option<Arc<dyn MessageSink>>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let mut conversation =
            Conversation::new(FaqMatcher::new(Arc::clone(&catalog)), config.fallback.clone());
        if let Some(sink) = sink {
            conversation = conversation.with_sink(sink);
        }

        let id = Uuid::new_v4();
        info!(
            widget_id = %id,
            intents = catalog.len(),
            reply_delay_ms = config.reply_delay_ms,
            "Chat widget created"
        );

        let visibility = if config.start_open {
            WidgetVisibility::Open
        } else {
            WidgetVisibility::Closed
        };

        Self {
            id,
            visibility,
            input: String::new(),
            greeting: Some(config.greeting.clone()).filter(|g| !g.trim().is_empty()),
            header: WidgetHeader {
                icon: Icon::Bot,
                assistant_name: config.assistant_name.clone(),
                tagline: config.tagline.clone(),
            },
            placeholder: config.placeholder.clone(),
            catalog,
            scheduler: ReplyScheduler::new(
                conversation,
                Duration::from_millis(config.reply_delay_ms),
            ),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn visibility(&self) -> WidgetVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == WidgetVisibility::Open
    }

    /// Flip between open and closed; returns the new visibility.
    pub fn toggle(&mut self) -> WidgetVisibility {
        self.visibility = self.visibility.toggled();
        debug!(widget_id = %self.id, visibility = %self.visibility, "Widget toggled");
        self.visibility
    }

    pub fn open(&mut self) {
        if !self.is_open() {
            self.toggle();
        }
    }

    pub fn close(&mut self) {
        if self.is_open() {
            self.toggle();
        }
    }

    /// Icon on the floating toggle button.
    pub fn toggle_icon(&self) -> Icon {
        match self.visibility {
            WidgetVisibility::Closed => Icon::MessageSquare,
            WidgetVisibility::Open => Icon::X,
        }
    }

    /// Icon on the send button.
    pub fn send_icon(&self) -> Icon {
        Icon::Send
    }

    pub fn header(&self) -> &WidgetHeader {
        &self.header
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The greeting, returned once and only while the widget is open.
    pub fn take_greeting(&mut self) -> Option<String> {
        if self.is_open() {
            self.greeting.take()
        } else {
            None
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input field contents.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Send the current input.
    ///
    /// Does nothing while the widget is closed or when the input is blank.
    /// On an accepted send the input field is cleared and the user message is
    /// already in the log when this returns.
    ///
    /// # Panics
    ///
    /// Panics if an accepted send happens outside a tokio runtime, since the
    /// reply is delivered by a runtime task.
    pub fn send(&mut self) -> bool {
        if !self.is_open() {
            debug!(widget_id = %self.id, "Send ignored: widget closed");
            return false;
        }
        if !self.scheduler.submit(&self.input) {
            return false;
        }
        self.input.clear();
        true
    }

    pub fn state(&self) -> ConversationState {
        self.scheduler.state()
    }

    /// Snapshot of the conversation log.
    pub fn messages(&self) -> Vec<Message> {
        self.scheduler.messages()
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    /// Wait for every scheduled reply to be delivered.
    pub async fn settle(&self) {
        self.scheduler.settle().await;
    }

    /// The conversation log as pretty-printed JSON.
    pub fn transcript_json(&self) -> Result<String> {
        let json = self
            .scheduler
            .with_conversation(|c| serde_json::to_string_pretty(c.log()))?;
        Ok(json)
    }
}
