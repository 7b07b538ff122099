//! Virtualized file browser.
//!
//! - [`FileBrowser`] - Toolbar plus the listing
//! - [`file_list`] - Measures the viewport and picks the grid or list variant
//! - [`paginated_grid`], [`paginated_list`] - The two virtualized variants
//! - [`virtualized`] - Signals around the render driver shared by both

mod file_browser;
mod file_entry;
pub mod file_list;
pub mod paginated_grid;
pub mod paginated_list;
mod toolbar;
pub mod virtualized;

pub use file_browser::FileBrowser;
