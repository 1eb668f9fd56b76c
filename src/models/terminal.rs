//! Terminal-related data types for the output log and session state.

use std::fmt;
use std::str::FromStr;

use super::VirtualPath;

/// Category of a command result, used for styling and for deciding
/// whether an Entry animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    /// Command table from `help`.
    Help,
    /// Static content sections (about, skills, projects, ...).
    Section,
    /// Short informational lines (pwd, whoami, date, echo).
    Info,
    /// Directory listing from `ls`.
    Listing,
    /// File body from `cat`.
    File,
    /// Theme overview.
    Theme,
    /// Scripted jokes (hack, sudo rm -rf).
    EasterEgg,
    /// Any failure, rendered red.
    Error,
    /// Directory change record (never animates).
    Cd,
    /// Log reset (never creates an Entry).
    Clear,
    /// Banner re-display (never creates an Entry).
    Banner,
    /// Blank input.
    Empty,
}

impl OutputKind {
    /// True when a result of this kind is streamed by the renderer.
    pub fn is_rendered(self) -> bool {
        !matches!(self, Self::Cd | Self::Clear | Self::Banner | Self::Empty)
    }
}

/// Per-Entry lifecycle for incremental output reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    Pending,
    Rendering,
    Complete,
}

/// One recorded command plus its result, as shown in the output log.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// Unique within a session, used as the list key.
    pub id: usize,
    /// The submitted line, trimmed, in the case it was typed.
    pub command: String,
    /// Full result text.
    pub content: String,
    pub kind: OutputKind,
    /// Working directory annotated on the record. For `cd` this is the new path.
    pub path: VirtualPath,
    render_state: RenderState,
    /// Byte length of `content` revealed so far.
    revealed: usize,
}

impl Entry {
    /// New Entry waiting for the renderer.
    pub fn pending(
        id: usize,
        command: impl Into<String>,
        content: impl Into<String>,
        kind: OutputKind,
        path: VirtualPath,
    ) -> Self {
        Self {
            id,
            command: command.into(),
            content: content.into(),
            kind,
            path,
            render_state: RenderState::Pending,
            revealed: 0,
        }
    }

    /// Record that is complete on creation (used for `cd`).
    pub fn record(id: usize, command: impl Into<String>, kind: OutputKind, path: VirtualPath) -> Self {
        Self {
            id,
            command: command.into(),
            content: String::new(),
            kind,
            path,
            render_state: RenderState::Complete,
            revealed: 0,
        }
    }

    pub fn render_state(&self) -> RenderState {
        self.render_state
    }

    /// Text currently visible: a prefix while rendering, everything once complete.
    pub fn visible(&self) -> &str {
        match self.render_state {
            RenderState::Complete => &self.content,
            _ => &self.content[..self.revealed],
        }
    }

    pub(crate) fn start_rendering(&mut self) {
        if self.render_state == RenderState::Pending {
            self.render_state = RenderState::Rendering;
        }
    }

    pub(crate) fn reveal(&mut self, len: usize) {
        if self.render_state == RenderState::Rendering {
            self.revealed = len.min(self.content.len());
        }
    }

    pub(crate) fn complete(&mut self) {
        if self.render_state == RenderState::Rendering {
            self.revealed = self.content.len();
            self.render_state = RenderState::Complete;
        }
    }
}

/// Controller state of the terminal session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellState {
    /// Boot lines are showing; no input accepted.
    Booting,
    /// Ready and waiting for input.
    Idle,
    /// An Entry is streaming; the input surface is locked.
    Rendering,
}

impl ShellState {
    pub fn accepts_input(self) -> bool {
        self == Self::Idle
    }
}

/// Terminal color scheme, persisted across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Default,
    Cyan,
    Amber,
    Blue,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Cyan, Theme::Amber, Theme::Blue];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Cyan => "cyan",
            Self::Amber => "amber",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown theme: {}", s))
    }
}
