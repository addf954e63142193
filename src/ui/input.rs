//! Shell command parsing.
//!
//! The bundled shell reads one command per line. Commands map one-to-one onto
//! controller intents:
//!
//! | Line | Intent |
//! |---|---|
//! | `type <text>` | `on_input_change(text)` |
//! | `search` | `on_submit()` |
//! | `read <id>` | `on_toggle_read(id)` |
//! | `help` | show the command list |
//! | `quit` | exit |

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Replace the search input. The text is taken verbatim, so `type` with
    /// nothing after it clears the input.
    Type(String),
    /// Submit the current input.
    Search,
    /// Toggle the read flag of a story.
    Read(String),
    Help,
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
type <text>  set the search input (does not search)
search       search for the current input
read <id>    mark a story as read or unread
help         show this help
quit         exit";

impl ShellCommand {
    /// Parses one input line.
    ///
    /// Returns `None` for blank lines, unknown commands and `read` without an
    /// id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hacker_stories::ui::input::ShellCommand;
    ///
    /// assert_eq!(ShellCommand::parse("type rust async"), Some(ShellCommand::Type("rust async".into())));
    /// assert_eq!(ShellCommand::parse("search"), Some(ShellCommand::Search));
    /// assert_eq!(ShellCommand::parse("launch"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, rest) = line
            .trim_start()
            .split_once(' ')
            .unwrap_or((line.trim(), ""));

        match command {
            "type" => Some(Self::Type(rest.to_string())),
            "search" => Some(Self::Search),
            "read" => {
                let id = rest.trim();
                (!id.is_empty()).then(|| Self::Read(id.to_string()))
            }
            "help" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}
