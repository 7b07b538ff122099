//! Data models for the browser shell.
//!
//! - [`FileType`] - Display category of a listed entry
//! - [`ViewPreset`] - View choices offered by the toolbar

mod file_type;
mod view;

pub use file_type::FileType;
pub use view::ViewPreset;
