use colored::Colorize;

use irchat_core::{Entry, Message, Role};

/// Line printed while a request is in flight
pub const PENDING_PLACEHOLDER: &str = "⠿ thinking...";

/// Render `**bold**` spans for the terminal; everything else is printed
/// as-is. An unmatched `**` is kept literally.
pub fn render_inline_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&after[..end].bold().to_string());
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Format one conversation message; user and bot messages get distinct
/// labels and colors.
pub fn format_message(message: &Message) -> String {
    match message.role() {
        Role::User => format!("{} {}", "You:".bright_green().bold(), message.text()),
        Role::Bot => format!(
            "{} {}",
            "Assistant:".bright_cyan().bold(),
            render_inline_markdown(message.text())
        ),
    }
}

pub fn format_entry(entry: Entry<'_>) -> String {
    match entry {
        Entry::Message(message) => format_message(message),
        Entry::Pending => PENDING_PLACEHOLDER.bright_black().to_string(),
    }
}
