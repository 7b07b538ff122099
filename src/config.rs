//! Application configuration.
//!
//! Centralizes the constants used by the browser shell. Engine constants
//! (gutters, overscan, loader thresholds) live in `filegrid_core::config`.

use filegrid_core::ViewConfig;

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the toolbar.
pub const APP_NAME: &str = "filegrid";

// =============================================================================
// Layout Configuration
// =============================================================================

/// Media query matching the mobile breakpoint.
pub const MOBILE_BREAKPOINT_QUERY: &str = "(max-width: 768px)";

/// View presets offered by the toolbar.
pub mod views {
    use super::ViewConfig;

    /// Row height of the list view.
    pub const LIST: ViewConfig = ViewConfig::list(30.0);
    /// Small tiles.
    pub const GRID_SMALL: ViewConfig = ViewConfig::grid(165.0, 130.0);
    /// Large tiles.
    pub const GRID_LARGE: ViewConfig = ViewConfig::grid(250.0, 180.0);
}

/// Milliseconds without a scroll event before scrolling counts as settled.
pub const SCROLL_SETTLE_MS: u32 = 150;

// =============================================================================
// Demo Source Configuration
// =============================================================================

/// In-memory page source used when no backend is attached.
pub mod demo {
    /// Entries per page.
    pub const PAGE_SIZE: usize = 50;
    /// Entries in the whole listing.
    pub const TOTAL_COUNT: usize = 1_234;
    /// Every n-th entry is a folder.
    pub const FOLDER_EVERY: usize = 9;
    /// Simulated network latency in milliseconds.
    pub const LATENCY_MS: u32 = 400;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
