//! UI components built with Leptos.
//!
//! - [`browser`] - Virtualized file browser
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;

pub use browser::FileBrowser;
