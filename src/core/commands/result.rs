//! Command execution result type.

use crate::core::error::CommandError;
use crate::models::{OutputKind, VirtualPath};

/// Session change requested by a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// Empty the output log and hide the welcome banner.
    ResetLog,
    /// Show the welcome banner again.
    ShowBanner,
    /// Move to an already-validated directory.
    ChangeDirectory(VirtualPath),
}

/// Result of executing a command.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandResult {
    pub kind: OutputKind,
    /// Text handed to the renderer. Empty for non-rendering kinds.
    pub content: String,
    pub side_effect: Option<SideEffect>,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(kind: OutputKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            side_effect: None,
        }
    }

    /// Render an error as output.
    pub fn error(err: CommandError) -> Self {
        Self::output(OutputKind::Error, err.to_string())
    }

    /// Create a result that only carries a side effect.
    pub fn effect(kind: OutputKind, effect: SideEffect) -> Self {
        Self {
            kind,
            content: String::new(),
            side_effect: Some(effect),
        }
    }

    /// Create an empty result (no output, no side effect).
    pub fn empty() -> Self {
        Self::output(OutputKind::Empty, "")
    }

    pub fn is_error(&self) -> bool {
        self.kind == OutputKind::Error
    }
}
