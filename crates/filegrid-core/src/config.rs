//! Engine configuration.
//!
//! Centralizes the layout and pagination constants shared by the grid and
//! list variants.

// =============================================================================
// Layout
// =============================================================================

/// Gutter between grid cells on desktop layouts.
pub const GUTTER_DESKTOP: f64 = 15.0;

/// Gutter between grid cells below the mobile breakpoint.
pub const GUTTER_MOBILE: f64 = 5.0;

/// Width reserved for a classic (non-overlay) vertical scrollbar.
pub const SCROLLBAR_RESERVATION: f64 = 18.0;

/// Fixed column count below the mobile breakpoint.
pub const MOBILE_COLUMN_COUNT: usize = 2;

// =============================================================================
// Cell Identity
// =============================================================================

/// Key prefix for cells whose item has not arrived yet.
pub const LOADING_KEY_PREFIX: &str = "loading-file-";

/// Text rendered in the list variant's trailing loading row.
pub const LOADING_PLACEHOLDER_TEXT: &str = "Loading...";

// =============================================================================
// Windowing
// =============================================================================

/// Overscan defaults, in rows.
pub mod overscan {
    /// Extra rows rendered around the list viewport.
    pub const LIST: usize = 2;
    /// Extra rows rendered around the grid viewport.
    pub const GRID: usize = 1;
}

// =============================================================================
// Infinite Loading
// =============================================================================

/// Infinite-loader heuristic defaults.
pub mod loader {
    /// How many indices past the visible range are scanned for unloaded items.
    pub const DEFAULT_THRESHOLD: usize = 15;
    /// Minimum width of a requested unloaded range.
    pub const DEFAULT_MINIMUM_BATCH_SIZE: usize = 10;
}

// =============================================================================
// Paging
// =============================================================================

/// Folder id of the listing root. Item ids outside it are `<folder>/<name>`.
pub const ROOT_FOLDER_ID: &str = "root";
