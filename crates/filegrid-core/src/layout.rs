//! Layout calculation for the grid and list variants.
//!
//! Everything here is a pure function of its inputs: the same viewport,
//! item count, view configuration and device always produce the same
//! [`GridLayout`]. The render driver relies on this to re-derive the layout
//! it cached without drift.

use serde::{Deserialize, Serialize};

use crate::config::{GUTTER_DESKTOP, GUTTER_MOBILE, MOBILE_COLUMN_COUNT, SCROLLBAR_RESERVATION};

// ============================================================================
// View Configuration
// ============================================================================

/// How entries are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// One entry per row (default)
    #[default]
    List,
    /// Fixed-size tiles flowing left to right
    Grid,
}

/// Entry geometry for the active view mode.
///
/// Supplied by the host and treated as immutable for a render pass; any
/// change triggers a layout recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    pub mode: ViewMode,
    /// Tile width (grid only).
    pub entry_width: f64,
    /// Row height in list mode, tile height in grid mode.
    pub entry_height: f64,
}

impl ViewConfig {
    /// List view with the given row height.
    pub const fn list(entry_height: f64) -> Self {
        Self {
            mode: ViewMode::List,
            entry_width: 0.0,
            entry_height,
        }
    }

    /// Grid view with the given tile size.
    pub const fn grid(entry_width: f64, entry_height: f64) -> Self {
        Self {
            mode: ViewMode::Grid,
            entry_width,
            entry_height,
        }
    }
}

// ============================================================================
// Device
// ============================================================================

/// Capability for querying the device the engine renders on.
///
/// Injected rather than queried from the environment so layouts can be
/// computed (and tested) without a browser.
pub trait DeviceProbe {
    /// Whether the viewport is below the mobile breakpoint.
    fn is_mobile_breakpoint(&self) -> bool;

    /// Whether the platform is a touch device with overlay scrollbars.
    fn is_touch_device(&self) -> bool;

    /// Captures the current answers as a plain [`Device`] value.
    fn snapshot(&self) -> Device {
        Device {
            mobile_breakpoint: self.is_mobile_breakpoint(),
            touch: self.is_touch_device(),
        }
    }
}

/// Point-in-time device characteristics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Device {
    pub mobile_breakpoint: bool,
    pub touch: bool,
}

impl Device {
    pub const DESKTOP: Self = Self {
        mobile_breakpoint: false,
        touch: false,
    };

    pub const PHONE: Self = Self {
        mobile_breakpoint: true,
        touch: true,
    };

    /// Gutter between cells for this device.
    pub fn gutter(&self) -> f64 {
        if self.mobile_breakpoint {
            GUTTER_MOBILE
        } else {
            GUTTER_DESKTOP
        }
    }

    /// Width lost to the vertical scrollbar. Touch devices overlay it.
    pub fn scrollbar_reservation(&self) -> f64 {
        if self.touch { 0.0 } else { SCROLLBAR_RESERVATION }
    }
}

impl DeviceProbe for Device {
    fn is_mobile_breakpoint(&self) -> bool {
        self.mobile_breakpoint
    }

    fn is_touch_device(&self) -> bool {
        self.touch
    }
}

// ============================================================================
// GridLayout
// ============================================================================

/// Derived grid geometry. Recomputed on every relevant input change.
///
/// Invariants: `column_count >= 1` and
/// `row_count == ceil(item_count / column_count)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub row_count: usize,
    pub column_count: usize,
    pub gutter: f64,
    pub row_height: f64,
    pub column_width: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            row_count: 0,
            column_count: 1,
            gutter: 0.0,
            row_height: 0.0,
            column_width: 0.0,
        }
    }
}

impl GridLayout {
    /// Distance between the tops of two consecutive rows.
    #[inline]
    pub fn row_stride(&self) -> f64 {
        self.row_height + self.gutter
    }

    /// Distance between the left edges of two consecutive columns.
    #[inline]
    pub fn column_stride(&self) -> f64 {
        self.column_width + self.gutter
    }

    /// Width occupied by a column, gutter included except after the last one.
    pub fn column_extent(&self, column: usize) -> f64 {
        if column + 1 >= self.column_count {
            self.column_width
        } else {
            self.column_stride()
        }
    }

    /// Height occupied by a row, gutter included except after the last one.
    pub fn row_extent(&self, row: usize) -> f64 {
        if row + 1 >= self.row_count {
            self.row_height
        } else {
            self.row_stride()
        }
    }

    /// Total scrollable height.
    pub fn content_height(&self) -> f64 {
        match self.row_count {
            0 => 0.0,
            rows => rows as f64 * self.row_height + (rows - 1) as f64 * self.gutter,
        }
    }

    /// Total width spanned by all columns.
    pub fn content_width(&self) -> f64 {
        self.column_count as f64 * self.column_width
            + self.column_count.saturating_sub(1) as f64 * self.gutter
    }
}

// ============================================================================
// Calculators
// ============================================================================

/// Computes the grid layout for a viewport.
///
/// Below the mobile breakpoint the grid always has two columns sharing the
/// available width. Otherwise tiles keep `config.entry_width` and as many
/// columns as fit are used, never fewer than one. Degenerate widths (zero,
/// negative, NaN) produce a single column instead of failing.
pub fn compute_grid_layout(
    viewport_width: f64,
    item_count: usize,
    config: &ViewConfig,
    device: Device,
) -> GridLayout {
    let gutter = device.gutter();
    let scrollbar = device.scrollbar_reservation();

    let (column_count, column_width) = if device.mobile_breakpoint {
        let width = (viewport_width - gutter - scrollbar) / MOBILE_COLUMN_COUNT as f64;
        (MOBILE_COLUMN_COUNT, width.max(0.0))
    } else {
        let column_width = config.entry_width;
        let fit = ((viewport_width - scrollbar) / (column_width + gutter)).floor();
        // `f64::max` maps NaN to the other operand.
        (fit.max(1.0) as usize, column_width)
    };

    GridLayout {
        row_count: item_count.div_ceil(column_count),
        column_count,
        gutter,
        row_height: config.entry_height,
        column_width,
    }
}

/// Computes the single-column layout used by the list variant.
///
/// `item_count` is the count handed to the windowing math, which for the list
/// includes the trailing loading row.
pub fn compute_list_layout(viewport_width: f64, item_count: usize, config: &ViewConfig) -> GridLayout {
    GridLayout {
        row_count: item_count,
        column_count: 1,
        gutter: 0.0,
        row_height: config.entry_height,
        column_width: viewport_width.max(0.0),
    }
}
