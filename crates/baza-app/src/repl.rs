//! Line commands for the terminal widget.
//!
//! Lines starting with `/` control the widget; anything else is typed into
//! the input field and sent.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Press the floating toggle button.
    Toggle,
    Open,
    Close,
    /// List the catalog questions.
    Faq,
    /// Dump the conversation as JSON.
    Transcript,
    Help,
    Quit,
    /// Unrecognized `/command`.
    Unknown(&'a str),
    /// Text for the input field, passed through untouched.
    Say(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let Some(name) = trimmed.strip_prefix('/') else {
            return Command::Say(line);
        };

        match name.to_lowercase().as_str() {
            "toggle" | "t" => Command::Toggle,
            "open" => Command::Open,
            "close" => Command::Close,
            "faq" => Command::Faq,
            "transcript" => Command::Transcript,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(name),
        }
    }
}

pub const HELP: &str = "\
/toggle      open or close the chat (also /open, /close)
/faq         list the questions I can answer
/transcript  print the conversation as JSON
/quit        leave
Anything else is sent as a message while the chat is open.";
