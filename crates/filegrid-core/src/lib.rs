//! Virtualized pagination and windowing engine for file grids and lists.
//!
//! - [`layout`] - Column/row geometry for a viewport ([`compute_grid_layout`])
//! - [`index`] - Linear index and grid coordinate mapping, cell keys
//! - [`pagination`] - [`PaginationGate`]: loaded-index checks and fetch gating
//! - [`viewport`] - Scroll offset to row window translation
//! - [`loader`] - Infinite-loading heuristic feeding the gate
//! - [`strategy`] - Grid and list [`RenderStrategy`] implementations
//! - [`driver`] - [`VirtualizedDriver`] tying it all together
//! - [`display_list`], [`pager`] - Display list and the page controller that
//!   grows it
//!
//! The engine never fetches data or mutates host state. Fetch intent leaves
//! through a [`PageLoader`]; loaded ids and pagination flags come back in on
//! the next render.

pub mod config;
pub mod display_list;
pub mod driver;
pub mod error;
pub mod index;
pub mod layout;
pub mod loader;
pub mod pager;
pub mod pagination;
pub mod strategy;
pub mod viewport;

pub use display_list::{DisplayList, ItemId};
pub use driver::{
    CellRect, CellSizer, GridDriver, LayoutCell, ListDriver, RenderReport, RenderedCell,
    VirtualizedDriver,
};
pub use error::PageError;
pub use index::{CellKey, GridPosition, IndexRange, RowRange, VisibleRange};
pub use layout::{
    Device, DeviceProbe, GridLayout, ViewConfig, ViewMode, compute_grid_layout, compute_list_layout,
};
pub use loader::InfiniteLoader;
pub use pager::{FileKind, FilePage, FileRecord, PageController, PageRequest};
pub use pagination::{FetchDecision, PageLoader, PaginationGate, PaginationState};
pub use strategy::{CellContent, GridStrategy, LayoutInputs, ListStrategy, RenderStrategy, strategy_for};
pub use viewport::{RowWindow, ScrollDirection, ScrollState};
