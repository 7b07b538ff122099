//! View presets for the browser toolbar.

use filegrid_core::ViewConfig;

use crate::config::views;

/// View choice (list, small tiles, large tiles).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewPreset {
    /// List view (default)
    #[default]
    List,
    /// Small grid tiles
    SmallGrid,
    /// Large grid tiles
    LargeGrid,
}

impl ViewPreset {
    pub const ALL: [Self; 3] = [Self::List, Self::SmallGrid, Self::LargeGrid];

    pub fn config(self) -> ViewConfig {
        match self {
            Self::List => views::LIST,
            Self::SmallGrid => views::GRID_SMALL,
            Self::LargeGrid => views::GRID_LARGE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::List => "List view",
            Self::SmallGrid => "Small tiles",
            Self::LargeGrid => "Large tiles",
        }
    }
}
