//! Parsing of REPL input lines into commands.

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line.
    Empty,
    /// Free text to send to the backend.
    Message(String),
    /// `/1`, `/2`, ...: pick a quick-start suggestion (one-based).
    Suggestion(usize),
    Reset,
    SetUser(String),
    SetStudio(String),
    WhoAmI,
    Help,
    Quit,
    Unknown(String),
}

/// Lines starting with `/` are commands; anything else is a message.
/// Start a message with `//` to send a literal leading slash.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    if let Some(rest) = trimmed.strip_prefix("//") {
        return Command::Message(format!("/{rest}"));
    }
    let Some(body) = trimmed.strip_prefix('/') else {
        return Command::Message(line.trim_end_matches(['\r', '\n']).to_string());
    };

    let (name, arg) = match body.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (body, ""),
    };

    if let Ok(n) = name.parse::<usize>() {
        if n >= 1 && arg.is_empty() {
            return Command::Suggestion(n);
        }
    }

    match (name, arg.is_empty()) {
        ("reset" | "new", true) => Command::Reset,
        ("user", false) => Command::SetUser(arg.to_string()),
        ("studio", false) => Command::SetStudio(arg.to_string()),
        ("whoami", true) => Command::WhoAmI,
        ("help" | "?", true) => Command::Help,
        ("quit" | "exit" | "q", true) => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

pub const HELP: &str = "\
/1../9          send a quick-start suggestion
/reset          start a new conversation
/user <id>      set the user id
/studio <id>    set the studio id
/whoami         show the current ids
/quit           exit (or Ctrl-D)
//text          send a message starting with '/'";
