//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner displayed after boot sequence.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Portfolio content payload (profile, skills, projects, ...).
pub const CONTENT_JSON: &str = include_str!("../assets/content.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the footer.
pub const APP_NAME: &str = "termfolio";

/// Host shown in the prompt and by `whoami`.
pub const HOST_NAME: &str = "portfolio";

/// User shown in the prompt. Visitors are never logged in as the owner.
pub const GUEST_USER: &str = "visitor";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Delay before the boot screen gives way to the prompt.
pub const BOOT_DELAY_MS: u32 = 2000;

/// Interval between revealed characters of streamed output.
pub const RENDER_TICK_MS: u32 = 7;

/// Interval of the scroll-to-bottom timer while output streams.
pub const SCROLL_TICK_MS: u32 = 50;

/// Lines shown while booting.
pub const BOOT_LINES: &[(&str, &str)] = &[
    ("BOOT", "Initializing Portfolio OS..."),
    (" OK ", "Loaded profile.conf"),
    (" OK ", "Loaded skills.db"),
    (" OK ", "Loaded projects.json"),
    (" OK ", "Loaded experience.log"),
    (" OK ", "Services initialized"),
];

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage key for submitted command lines (JSON array).
pub const HISTORY_STORAGE_KEY: &str = "terminal_command_history";

/// localStorage key for the selected theme (bare string).
pub const THEME_STORAGE_KEY: &str = "terminal_theme";
