//! Terminal display surface for a single chat session.

mod render;
mod repl;

pub use repl::ChatRepl;

/// A line typed at the prompt, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    /// Empty the transcript.
    Clear,
    /// Re-enter the API key.
    Key,
    Help,
    Quit,
    /// Anything else is sent to the model verbatim.
    Message(String),
}

impl SlashCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "/clear" | "/reset" => SlashCommand::Clear,
            "/key" => SlashCommand::Key,
            "/help" | "/?" => SlashCommand::Help,
            "/quit" | "/exit" => SlashCommand::Quit,
            _ => SlashCommand::Message(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_surrounding_whitespace() {
        assert_eq!(SlashCommand::parse("  /clear "), SlashCommand::Clear);
        assert_eq!(SlashCommand::parse("/reset"), SlashCommand::Clear);
        assert_eq!(SlashCommand::parse("/key"), SlashCommand::Key);
        assert_eq!(SlashCommand::parse("/exit"), SlashCommand::Quit);
        assert_eq!(SlashCommand::parse("/?"), SlashCommand::Help);
    }

    #[test]
    fn everything_else_is_a_message() {
        assert_eq!(
            SlashCommand::parse("/clearly not a command"),
            SlashCommand::Message("/clearly not a command".to_string())
        );
        assert_eq!(
            SlashCommand::parse("Hello"),
            SlashCommand::Message("Hello".to_string())
        );
    }
}
