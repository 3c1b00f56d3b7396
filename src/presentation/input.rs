// Line-command grammar for the dashboard controls
/// The externally observable inputs: the search box, the 12/24-hour toggle,
/// the retry button, and leaving the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    ClearSearch,
    ToggleFormat,
    Retry,
    Quit,
}

/// Parse one stdin line. Keywords are case-insensitive; a bare `search`
/// clears the term just like `clear` does. Unknown input yields `None` and
/// the caller leaves the screen as is.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "search" if !rest.is_empty() => Some(Command::Search(rest.to_string())),
        "search" | "clear" => Some(Command::ClearSearch),
        "toggle" => Some(Command::ToggleFormat),
        "retry" | "refresh" => Some(Command::Retry),
        "quit" | "exit" | "q" => Some(Command::Quit),
        _ => None,
    }
}
