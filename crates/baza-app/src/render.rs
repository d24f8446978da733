//! Terminal rendering for the chat widget.
//!
//! Transcript lines go to stdout; logs go to stderr.

use baza_chat::{IntentCatalog, Message, MessageSink, Origin, WidgetHeader};
use baza_core::Icon;

/// Prints every appended message as it arrives.
pub struct TerminalSink {
    assistant_name: String,
}

impl TerminalSink {
    pub fn new(assistant_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
        }
    }
}

impl MessageSink for TerminalSink {
    fn on_message(&self, _index: usize, message: &Message) {
        println!("{}", format_message(&self.assistant_name, message));
    }
}

pub fn format_message(assistant_name: &str, message: &Message) -> String {
    match message.origin() {
        Origin::User => format!("{:>12} \u{203a} {}", "you", message.text()),
        Origin::Assistant => format!(
            "{} {} \u{203a} {}",
            Icon::Bot,
            assistant_name,
            message.text()
        ),
    }
}

pub fn format_header(header: &WidgetHeader) -> String {
    format!(
        "{} {}\n   {}",
        header.icon, header.assistant_name, header.tagline
    )
}

pub fn format_faq(catalog: &IntentCatalog) -> String {
    if catalog.is_empty() {
        return format!("{} (no questions configured)", Icon::HelpCircle);
    }
    catalog
        .questions()
        .enumerate()
        .map(|(i, q)| format!("{} {}. {}", Icon::HelpCircle, i + 1, q))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Floating button hint shown after each toggle.
pub fn format_toggle(icon: Icon, placeholder: Option<&str>) -> String {
    match placeholder {
        Some(p) => format!("[{}] {} {}", icon, p, Icon::Send),
        None => format!("[{}] chat closed, /toggle to open", icon),
    }
}
