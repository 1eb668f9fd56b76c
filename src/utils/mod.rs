//! Browser glue.
//!
//! Provides:
//! - [`dom`] - window, localStorage, focus and scroll helpers
//! - [`KeyValueStore`] - persistent storage seam with [`BrowserStore`] and [`MemoryStore`]

pub mod dom;
mod storage;

pub use storage::{BrowserStore, KeyValueStore, MemoryStore, load_json, save_json};
