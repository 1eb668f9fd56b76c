//! Core business logic for the terminal application.
//!
//! This module provides:
//! - [`VirtualFs`] virtual filesystem with path resolution and completion
//! - [`Command`] parsing and dispatch against a read-only session view
//! - tab completion of command names and paths
//! - incremental output reveal
//! - [`Session`] state machine tying it all together

mod autocomplete;
mod commands;
pub mod error;
mod filesystem;
mod render;
mod session;

pub use commands::Command;
pub use filesystem::VirtualFs;
pub use session::Session;
