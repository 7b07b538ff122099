//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuFile as File, LuFileText as FileText, LuFolder as Folder,
        LuImage as FileImage, LuLayoutGrid as Grid, LuList as List, LuSquare as GridLarge,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArchive as FileArchive, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkText as FileText, BsFolderFill as Folder, BsGrid as Grid, BsListUl as List,
        BsSquare as GridLarge,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(LIST, List);
themed_icon!(GRID, Grid);
themed_icon!(GRID_LARGE, GridLarge);
