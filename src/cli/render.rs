use crossterm::style::Stylize;

use mistral_chat::{Role, Turn};

pub const MISSING_KEY_WARNING: &str =
    "Please enter your Mistral API key first! Use /key to set it.";

pub fn banner() -> String {
    format!(
        "{}\n{}\n\n{}\n  1. Go to https://console.mistral.ai/\n  2. Sign up or log in\n  3. Open the 'API Keys' section\n  4. Click 'Create new key'\n  5. Copy the key and paste it at the prompt\n",
        "Mistral AI Chatbot".bold(),
        "Your friendly AI assistant powered by Mistral AI".italic(),
        "How to get your API key:".bold(),
    )
}

pub fn help() -> String {
    [
        "Tips:",
        "  Type a message and press Enter to send it",
        "  /clear   clear the chat history",
        "  /key     enter a different API key",
        "  /quit    leave the chat",
    ]
    .join("\n")
}

pub fn turn(turn: &Turn) -> String {
    let label = match turn.role() {
        Role::User => "You".bold().cyan(),
        Role::Assistant => "Mistral".bold().magenta(),
    };
    format!("{label}: {}", turn.content())
}

pub fn transcript(turns: &[Turn]) -> String {
    if turns.is_empty() {
        return "(no messages yet)".dim().to_string();
    }
    turns.iter().map(turn).collect::<Vec<_>>().join("\n\n")
}

pub fn warning(msg: &str) -> String {
    format!("{} {msg}", "warning:".bold().yellow())
}
