//! Browser and display helpers.
//!
//! Provides:
//! - [`dom`] - Window access and the [`BrowserDevice`](dom::BrowserDevice) probe
//! - [`format`] - Sizes, dates and counters for display

pub mod dom;
pub mod format;
