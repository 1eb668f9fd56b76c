//! UI components built with Leptos.
//!
//! - [`Shell`] - Terminal window: boot screen, timers, theme
//! - [`terminal`] - Output log and command input

pub mod terminal;

pub use terminal::Shell;
