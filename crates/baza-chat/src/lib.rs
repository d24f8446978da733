//! FAQ chat assistant for the BAZA barbershop site.
//!
//! Matches free-text questions against a small keyword catalog and replies
//! with canned answers after a short delay, keeping an append-only log of the
//! exchange.

pub mod catalog;
pub mod conversation;
pub mod error;
pub mod log;
pub mod matcher;
pub mod scheduler;
pub mod types;
pub mod widget;

pub use catalog::{CatalogFile, IntentCatalog, IntentDefinition, IntentEntry};
pub use conversation::{Conversation, MessageSink, PendingReply};
pub use error::CatalogError;
pub use log::ConversationLog;
pub use matcher::FaqMatcher;
pub use scheduler::ReplyScheduler;
pub use types::{ConversationState, Message, Origin, WidgetVisibility};
pub use widget::{ChatWidget, WidgetHeader};
