//! Terminal session controller.
//!
//! [`Session`] owns everything that changes while the page is open: the
//! working directory, command history, input buffer and output log. It
//! arbitrates the `Booting → Idle ⇄ Rendering` state machine and is the only
//! place that applies the side effects returned by the dispatcher.
//!
//! The session holds no timers. The UI calls [`Session::finish_boot`] from a
//! one-shot timer and [`Session::tick_render`] from a repeating one.

use leptos::logging::{log, warn};

use crate::config::{GUEST_USER, HISTORY_STORAGE_KEY, HOST_NAME, THEME_STORAGE_KEY};
use crate::core::autocomplete::{AutocompleteResult, autocomplete};
use crate::core::commands::{SessionView, SideEffect, dispatch};
use crate::core::render::{Tick, Typewriter};
use crate::core::VirtualFs;
use crate::models::{Content, Entry, OutputKind, ShellState, Theme, VirtualPath};
use crate::utils::{KeyValueStore, load_json, save_json};

/// What happened to a submitted line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input is locked (booting or rendering); nothing changed.
    Rejected,
    /// Blank line; only the buffer was cleared.
    Empty,
    /// Log emptied and banner hidden.
    Cleared,
    /// Banner shown again.
    Banner,
    /// Working directory changed; a record Entry was appended.
    ChangedDirectory,
    /// A new Entry with this id started rendering.
    Rendering(usize),
}

/// Result of one renderer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderProgress {
    /// Nothing is rendering.
    Idle,
    /// One more character of the active Entry is visible.
    Advanced,
    /// The Entry with this id finished; the session is Idle again.
    Completed(usize),
}

/// The Entry currently being revealed and its task.
struct ActiveRender {
    entry_id: usize,
    task: Typewriter,
}

/// Per-page-load terminal session.
pub struct Session {
    state: ShellState,
    current_path: VirtualPath,
    home: VirtualPath,
    history: Vec<String>,
    /// 0 is the most recent history line.
    history_cursor: Option<usize>,
    input: String,
    log: Vec<Entry>,
    theme: Theme,
    show_banner: bool,
    active: Option<ActiveRender>,
    next_id: usize,
    fs: VirtualFs,
    content: Content,
    store: Box<dyn KeyValueStore + Send + Sync>,
}

impl Session {
    /// Create a booting session, loading history and theme from `store`.
    pub fn new(content: Content, store: Box<dyn KeyValueStore + Send + Sync>) -> Self {
        let fs = VirtualFs::from_content(&content);
        let home = VirtualPath::from_segments(["home", content.profile.user.as_str()]);

        let history: Vec<String> =
            load_json(store.as_ref(), HISTORY_STORAGE_KEY).unwrap_or_default();
        let theme = store
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!("[session] {}", e);
                    None
                }
            })
            .unwrap_or_default();

        Self {
            state: ShellState::Booting,
            current_path: home.clone(),
            home,
            history,
            history_cursor: None,
            input: String::new(),
            log: Vec::new(),
            theme,
            show_banner: true,
            active: None,
            next_id: 0,
            fs,
            content,
            store,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn current_path(&self) -> &VirtualPath {
        &self.current_path
    }

    pub fn home(&self) -> &VirtualPath {
        &self.home
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn log(&self) -> &[Entry] {
        &self.log
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn show_banner(&self) -> bool {
        self.show_banner
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn entry(&self, id: usize) -> Option<&Entry> {
        self.log.iter().find(|e| e.id == id)
    }

    /// Id of the Entry currently rendering.
    pub fn active_entry(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.entry_id)
    }

    /// Prompt for a given working directory, with home shown as `~`.
    pub fn prompt_for(&self, path: &VirtualPath) -> String {
        let location = match path.segments().strip_prefix(self.home.segments()) {
            Some([]) => "~".to_string(),
            Some(rest) => format!("~/{}", rest.join("/")),
            None => path.display(),
        };
        format!("{}@{}:{}", GUEST_USER, HOST_NAME, location)
    }

    /// Prompt for the current working directory.
    pub fn prompt(&self) -> String {
        self.prompt_for(&self.current_path)
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Leave the boot screen. No-op unless booting.
    pub fn finish_boot(&mut self) {
        if self.state == ShellState::Booting {
            self.state = ShellState::Idle;
            log!("[session] boot complete");
        }
    }

    /// Replace the input buffer. Ignored while input is locked.
    pub fn set_input(&mut self, value: impl Into<String>) {
        if self.state.accepts_input() {
            self.input = value.into();
        }
    }

    /// Submit the input buffer.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.state.accepts_input() {
            return SubmitOutcome::Rejected;
        }

        let raw = std::mem::take(&mut self.input);
        let line = raw.trim();
        if line.is_empty() {
            return SubmitOutcome::Empty;
        }

        self.history.push(line.to_string());
        self.history_cursor = None;
        self.save_history();

        let view = SessionView {
            current_path: &self.current_path,
            home: &self.home,
            fs: &self.fs,
            content: &self.content,
        };
        let result = dispatch(line, &view);

        match result.side_effect {
            Some(SideEffect::ResetLog) => {
                self.reset_log();
                SubmitOutcome::Cleared
            }
            Some(SideEffect::ShowBanner) => {
                self.show_banner = true;
                SubmitOutcome::Banner
            }
            Some(SideEffect::ChangeDirectory(path)) => {
                let id = self.alloc_id();
                self.log
                    .push(Entry::record(id, line, OutputKind::Cd, path.clone()));
                self.current_path = path;
                SubmitOutcome::ChangedDirectory
            }
            None if result.kind.is_rendered() => {
                let id = self.alloc_id();
                let mut entry = Entry::pending(
                    id,
                    line,
                    result.content.as_str(),
                    result.kind,
                    self.current_path.clone(),
                );
                entry.start_rendering();
                self.log.push(entry);
                self.active = Some(ActiveRender {
                    entry_id: id,
                    task: Typewriter::new(result.content),
                });
                self.state = ShellState::Rendering;
                SubmitOutcome::Rendering(id)
            }
            None => SubmitOutcome::Empty,
        }
    }

    /// Advance the active render by one character.
    ///
    /// The tick that reveals the last character completes the Entry and
    /// returns the session to Idle.
    pub fn tick_render(&mut self) -> RenderProgress {
        let Some(active) = self.active.as_mut() else {
            return RenderProgress::Idle;
        };

        let tick = active.task.tick();
        let revealed = active.task.revealed_len();
        let id = active.entry_id;
        // The active Entry is always the newest one
        let entry = self.log.last_mut().filter(|e| e.id == id);

        match tick {
            Tick::Advanced => {
                if let Some(entry) = entry {
                    entry.reveal(revealed);
                }
                RenderProgress::Advanced
            }
            Tick::Complete => {
                if let Some(entry) = entry {
                    entry.complete();
                }
                self.active = None;
                self.state = ShellState::Idle;
                RenderProgress::Completed(id)
            }
            Tick::Stopped => {
                self.active = None;
                RenderProgress::Idle
            }
        }
    }

    /// Clear-screen shortcut: empty the log and hide the banner.
    ///
    /// Leaves history and the input buffer alone. Returns `false` while
    /// input is locked.
    pub fn clear_screen(&mut self) -> bool {
        if !self.state.accepts_input() {
            return false;
        }
        self.reset_log();
        true
    }

    /// Stop any in-flight render without completing it.
    ///
    /// Called when the owning view goes away.
    pub fn teardown(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.task.cancel();
            log!("[session] render of entry {} cancelled", active.entry_id);
        }
        if self.state == ShellState::Rendering {
            self.state = ShellState::Idle;
        }
    }

    // ========================================================================
    // History Navigation
    // ========================================================================

    /// Step toward older history. Clamped at the oldest line.
    pub fn history_up(&mut self) {
        if !self.state.accepts_input() || self.history.is_empty() {
            return;
        }

        let oldest = self.history.len() - 1;
        let cursor = match self.history_cursor {
            None => 0,
            Some(i) => (i + 1).min(oldest),
        };
        self.history_cursor = Some(cursor);
        self.input = self.history[oldest - cursor].clone();
    }

    /// Step toward newer history. Past the newest line the buffer empties.
    pub fn history_down(&mut self) {
        if !self.state.accepts_input() {
            return;
        }

        match self.history_cursor {
            None => {}
            Some(0) => {
                self.history_cursor = None;
                self.input.clear();
            }
            Some(i) => {
                let cursor = i - 1;
                self.history_cursor = Some(cursor);
                self.input = self.history[self.history.len() - 1 - cursor].clone();
            }
        }
    }

    // ========================================================================
    // Completion and Theme
    // ========================================================================

    /// Complete the input buffer in place when there is exactly one match.
    pub fn tab_complete(&mut self) -> AutocompleteResult {
        if !self.state.accepts_input() {
            return AutocompleteResult::None;
        }

        let result = autocomplete(&self.input, &self.current_path, &self.home, &self.fs);
        if let AutocompleteResult::Single(completed) = &result {
            self.input = completed.clone();
        }
        result
    }

    /// Select a theme and persist it.
    ///
    /// Nothing in the UI calls this yet; the `theme` command only lists themes.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, theme.as_str()) {
            warn!("[session] failed to save theme: {}", e);
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn alloc_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn reset_log(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.task.cancel();
            self.state = ShellState::Idle;
        }
        self.log.clear();
        self.show_banner = false;
    }

    fn save_history(&self) {
        if let Err(e) = save_json(self.store.as_ref(), HISTORY_STORAGE_KEY, &self.history) {
            warn!("[session] failed to save history: {}", e);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
