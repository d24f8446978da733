//! Closed icon set used by the chat widget.
//!
//! Every icon the widget can show is a variant here, so a missing icon is a
//! compile error instead of a runtime placeholder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An icon with a known glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Toggle button while the widget is closed.
    MessageSquare,
    /// Toggle button while the widget is open.
    X,
    /// Assistant avatar in the widget header.
    Bot,
    /// Send button next to the input field.
    Send,
    /// FAQ listing marker.
    HelpCircle,
}

impl Icon {
    /// All icons, in declaration order.
    pub const ALL: [Icon; 5] = [
        Icon::MessageSquare,
        Icon::X,
        Icon::Bot,
        Icon::Send,
        Icon::HelpCircle,
    ];

    /// Kebab-case name as used by the web icon set.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::MessageSquare => "message-square",
            Icon::X => "x",
            Icon::Bot => "bot",
            Icon::Send => "send",
            Icon::HelpCircle => "help-circle",
        }
    }

    /// Terminal glyph for this icon.
    pub fn glyph(&self) -> char {
        match self {
            Icon::MessageSquare => '\u{1f4ac}',
            Icon::X => '\u{2715}',
            Icon::Bot => '\u{1f916}',
            Icon::Send => '\u{27a4}',
            Icon::HelpCircle => '?',
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
