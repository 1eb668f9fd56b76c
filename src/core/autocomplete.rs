//! Tab autocomplete functionality for terminal commands and paths.
//!
//! This module provides autocompletion for:
//! - Command names (e.g., "cle" → "clear ")
//! - Child names for `cd`, `ls` and `cat`
//!
//! Only an unambiguous match is applied. Zero or several matches leave the
//! input untouched; the candidates are still reported to the caller.

use crate::core::{Command, VirtualFs};
use crate::models::VirtualPath;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single match - the whole input line after completion.
    Single(String),
    /// Several candidates; the input is left unchanged.
    Multiple(Vec<String>),
    /// No matches found.
    None,
}

/// Commands whose last argument completes against the filesystem.
const PATH_COMMANDS: &[&str] = &["cd", "cat", "ls"];

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
pub fn autocomplete(
    input: &str,
    current_path: &VirtualPath,
    home: &VirtualPath,
    fs: &VirtualFs,
) -> AutocompleteResult {
    let tokens: Vec<&str> = input.split(' ').collect();

    match tokens.as_slice() {
        [] => AutocompleteResult::None,
        [partial] => complete_command(partial),
        [cmd, .., last] if PATH_COMMANDS.contains(&cmd.to_lowercase().as_str()) => {
            // Everything before the token being completed
            let head = &input[..input.len() - last.len()];
            complete_path(head, last, current_path, home, fs)
        }
        _ => AutocompleteResult::None,
    }
}

// ============================================================================
// Command Completion
// ============================================================================

/// Complete command name.
fn complete_command(partial: &str) -> AutocompleteResult {
    if partial.is_empty() {
        return AutocompleteResult::None;
    }

    let partial_lower = partial.to_lowercase();
    let matches: Vec<String> = Command::names()
        .iter()
        .filter(|cmd| cmd.starts_with(&partial_lower))
        .map(|s| s.to_string())
        .collect();

    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [only] => AutocompleteResult::Single(format!("{} ", only)),
        _ => AutocompleteResult::Multiple(matches),
    }
}

// ============================================================================
// Path Completion
// ============================================================================

/// Complete the last token against the current directory.
///
/// A token with a `/` completes its final segment inside the directory the
/// leading part names, so `cd notes/dr` can become `cd notes/drafts/`.
fn complete_path(
    head: &str,
    partial: &str,
    current_path: &VirtualPath,
    home: &VirtualPath,
    fs: &VirtualFs,
) -> AutocompleteResult {
    let (dir_part, name_part) = match partial.rfind('/') {
        Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
        None => ("", partial),
    };

    let search = if dir_part.is_empty() {
        current_path.clone()
    } else {
        current_path.join_expr(dir_part, home)
    };

    let Ok(dir) = fs.resolve(&search) else {
        return AutocompleteResult::None;
    };

    let matches = dir.completions(name_part);
    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [only] => AutocompleteResult::Single(format!("{}{}{}", head, dir_part, only)),
        _ => AutocompleteResult::Multiple(matches),
    }
}

// ============================================================================
// Tests
// ============================================================================
