//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `dispatch` for turning a raw input line into a result
//!
//! # Architecture
//!
//! A raw line is trimmed, lowercased and split on whitespace. The first token
//! selects a `Command` variant; the rest are its arguments. Execution reads
//! the virtual filesystem and static content through a `SessionView` and never
//! mutates session state: side effects are returned for the controller to
//! apply.

mod execute;
mod result;
mod sections;

pub use execute::{SessionView, dispatch, execute_command};
pub use result::{CommandResult, SideEffect};

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.md`).
///
/// The path is stored as-is (not validated) since validation happens
/// during execution against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    About,
    /// `skills`, or `skills --list` for the bar chart.
    Skills {
        detailed: bool,
    },
    /// `projects`, or `projects N` with the numeric token kept verbatim.
    Projects(Option<String>),
    Experience,
    Services,
    Contact,
    Social,
    Stats,
    Resume,
    Whoami,
    Date,
    Clear,
    Banner,
    Theme,
    Cd(Option<PathArg>),
    Ls(Option<PathArg>),
    Cat(Option<PathArg>),
    Pwd,
    Sudo(Vec<String>),
    Hack,
    Echo(String),
    /// Blank line.
    Empty,
    Unknown(String),
}

impl Command {
    /// Get all available command names for autocomplete.
    pub fn names() -> &'static [&'static str] {
        &[
            "help",
            "about",
            "skills",
            "projects",
            "experience",
            "services",
            "contact",
            "social",
            "stats",
            "resume",
            "whoami",
            "date",
            "clear",
            "banner",
            "theme",
            "cd",
            "ls",
            "cat",
            "pwd",
            "sudo",
            "hack",
            "echo",
        ]
    }

    /// Parse a raw input line.
    ///
    /// The whole line is lowercased before splitting, so path arguments are
    /// lowercased too.
    pub fn parse_line(raw: &str) -> Self {
        let line = raw.trim().to_lowercase();
        let mut tokens = line.split_whitespace().map(str::to_string);
        match tokens.next() {
            Some(name) => Self::parse(&name, &tokens.collect::<Vec<_>>()),
            None => Self::Empty,
        }
    }

    /// Parse command from name and arguments.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let path_arg = || args.first().map(PathArg::new);

        match name {
            "help" => Self::Help,
            "about" => Self::About,
            "skills" => Self::Skills {
                detailed: args.first().is_some_and(|a| a == "--list"),
            },
            "projects" => Self::Projects(args.first().filter(|a| is_integer(a)).cloned()),
            "experience" => Self::Experience,
            "services" => Self::Services,
            "contact" => Self::Contact,
            "social" => Self::Social,
            "stats" => Self::Stats,
            "resume" => Self::Resume,
            "whoami" => Self::Whoami,
            "date" => Self::Date,
            "clear" => Self::Clear,
            "banner" => Self::Banner,
            "theme" => Self::Theme,
            "cd" => Self::Cd(path_arg()),
            "ls" => Self::Ls(path_arg()),
            "cat" => Self::Cat(path_arg()),
            "pwd" => Self::Pwd,
            "sudo" => Self::Sudo(args.to_vec()),
            "hack" => Self::Hack,
            "echo" => Self::Echo(args.join(" ")),
            _ => Self::Unknown(name.to_string()),
        }
    }
}

/// Optional sign followed by ASCII digits, of any length.
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(Command::parse_line(""), Command::Empty);
        assert_eq!(Command::parse_line("   \t "), Command::Empty);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Command::parse_line("HELP"), Command::Help);
        assert_eq!(Command::parse_line("  AbOuT  "), Command::About);
    }

    #[test]
    fn test_parse_lowercases_arguments() {
        assert!(matches!(
            Command::parse_line("cat README.md"),
            Command::Cat(Some(ref p)) if p == &"readme.md"
        ));
        assert_eq!(
            Command::parse_line("echo Hello   World"),
            Command::Echo("hello world".into())
        );
    }

    #[test]
    fn test_parse_skills() {
        assert_eq!(
            Command::parse_line("skills"),
            Command::Skills { detailed: false }
        );
        assert_eq!(
            Command::parse_line("skills --list"),
            Command::Skills { detailed: true }
        );
    }

    #[test]
    fn test_parse_projects() {
        assert_eq!(Command::parse_line("projects"), Command::Projects(None));
        assert_eq!(
            Command::parse_line("projects 2"),
            Command::Projects(Some("2".into()))
        );
        assert_eq!(
            Command::parse_line("projects -3"),
            Command::Projects(Some("-3".into()))
        );
        assert_eq!(
            Command::parse_line("projects 99999999999999999999"),
            Command::Projects(Some("99999999999999999999".into()))
        );
        // Non-integer argument falls back to the list
        assert_eq!(Command::parse_line("projects all"), Command::Projects(None));
        assert_eq!(Command::parse_line("projects 1.5"), Command::Projects(None));
        assert_eq!(Command::parse_line("projects -"), Command::Projects(None));
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(Command::parse_line("cd"), Command::Cd(None));
        assert!(matches!(
            Command::parse_line("cd .."),
            Command::Cd(Some(ref p)) if p == &".."
        ));
        assert_eq!(Command::parse_line("ls"), Command::Ls(None));
        assert_eq!(Command::parse_line("cat"), Command::Cat(None));
        assert_eq!(Command::parse_line("pwd"), Command::Pwd);
    }

    #[test]
    fn test_parse_sudo() {
        assert_eq!(
            Command::parse_line("sudo rm -rf /"),
            Command::Sudo(vec!["rm".into(), "-rf".into(), "/".into()])
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse_line("foobar baz"),
            Command::Unknown("foobar".into())
        );
    }

    #[test]
    fn test_every_name_parses() {
        for name in Command::names() {
            assert!(
                !matches!(Command::parse(name, &[]), Command::Unknown(_)),
                "{} should be a known command",
                name
            );
        }
    }
}
