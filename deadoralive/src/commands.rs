//! Interpretation of incoming chat messages.
//!
//! `/dead <name>` and `/alive <name>` look up `<name>`; a command may carry a
//! `@botname` suffix. Any other slash command is not for us. Plain text is
//! looked up as a whole.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageIntent {
    Lookup(String),
    Ignore,
}

const LOOKUP_COMMANDS: &[&str] = &["/dead", "/alive"];

pub fn parse_message(text: &str) -> MessageIntent {
    if !text.starts_with('/') {
        return MessageIntent::Lookup(text.to_string());
    }

    let (token, rest) = match text.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest),
        None => (text, ""),
    };
    let command = token.split('@').next().unwrap_or(token);

    if LOOKUP_COMMANDS.contains(&command) {
        MessageIntent::Lookup(rest.to_string())
    } else {
        MessageIntent::Ignore
    }
}
