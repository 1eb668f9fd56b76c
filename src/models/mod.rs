//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FsNode`], [`DirEntry`], [`VirtualPath`] - Virtual filesystem representation
//! - [`Entry`], [`OutputKind`], [`RenderState`] - Output log records
//! - [`ShellState`], [`Theme`] - Session controller state
//! - [`Content`] - Static portfolio payload

mod content;
mod filesystem;
mod terminal;

pub use content::{About, Content, Experience, Profile, Project, Service, Skill, Stats};
pub use filesystem::{Children, DirEntry, FsNode, NodeKind, VirtualPath};
pub use terminal::{Entry, OutputKind, RenderState, ShellState, Theme};
