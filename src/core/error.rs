//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FsError`] - Virtual filesystem lookups
//! - [`CommandError`] - Command dispatch failures, rendered as output text
//! - [`StorageError`] - Persistent key-value storage
//! - [`ContentError`] - Static content payload loading

use thiserror::Error;

/// Virtual filesystem errors. Each variant carries the offending name verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{0}: No such file or directory")]
    PathNotFound(String),

    #[error("{0}: Not a directory")]
    NotADirectory(String),

    #[error("{0}: Is a directory")]
    IsADirectory(String),
}

/// Failures produced while dispatching a command.
///
/// These never propagate past the dispatcher; they become error output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command not found: {0}. Type 'help' to see available commands.")]
    UnknownCommand(String),

    #[error("Error: Project #{0} not found. Use 'projects' to see all projects.")]
    ProjectIndexOutOfRange(String),

    #[error("sudo: {0}: command not found")]
    SudoNotFound(String),

    #[error("{0}: missing operand")]
    MissingOperand(&'static str),

    #[error("{command}: {source}")]
    Fs {
        command: &'static str,
        #[source]
        source: FsError,
    },
}

impl CommandError {
    pub fn fs(command: &'static str, source: FsError) -> Self {
        Self::Fs { command, source }
    }
}

/// Persistent storage errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,

    #[error("failed to serialize value for '{0}'")]
    Serialize(String),

    #[error("failed to write '{0}'")]
    WriteFailed(String),
}

/// Static content payload errors.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("content payload has no profile user")]
    MissingUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_errors_echo_name() {
        assert_eq!(
            FsError::PathNotFound("Notes".into()).to_string(),
            "Notes: No such file or directory"
        );
        assert_eq!(
            FsError::NotADirectory("about.txt".into()).to_string(),
            "about.txt: Not a directory"
        );
        assert_eq!(
            FsError::IsADirectory("home".into()).to_string(),
            "home: Is a directory"
        );
    }

    #[test]
    fn test_command_errors() {
        let err = CommandError::fs("cat", FsError::IsADirectory("docs".into()));
        assert_eq!(err.to_string(), "cat: docs: Is a directory");

        let err = CommandError::ProjectIndexOutOfRange("42".into());
        assert!(err.to_string().contains("#42"));

        let err = CommandError::UnknownCommand("vim".into());
        assert!(err.to_string().starts_with("Command not found: vim"));
    }
}
