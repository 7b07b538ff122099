//! Grid and list render strategies.
//!
//! A strategy is the small capability set the render driver is generic over:
//! how to lay items out, how many slots the windowing math sees, and what
//! goes into each slot.

use crate::config::overscan;
use crate::display_list::ItemId;
use crate::index::linear_index;
use crate::layout::{Device, GridLayout, ViewConfig, ViewMode, compute_grid_layout, compute_list_layout};
use crate::pagination::PaginationState;

/// Inputs that trigger a layout recomputation when they change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutInputs {
    pub viewport_width: f64,
    pub view_config: ViewConfig,
    pub device: Device,
}

/// What a rendered slot shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    /// A loaded entry.
    Entry { id: ItemId, display_index: usize },
    /// The trailing "Loading..." row of the list variant.
    Loading,
    /// Nothing: a grid slot past the loaded items.
    Empty,
}

/// Layout and content policy for one view mode.
pub trait RenderStrategy {
    fn mode(&self) -> ViewMode;

    /// Rows rendered around the viewport.
    fn default_overscan(&self) -> usize;

    /// Layout for the given inputs and pagination snapshot.
    fn compute_layout(&self, inputs: &LayoutInputs, pagination: &PaginationState) -> GridLayout;

    /// Linear index of the cell at `(row, column)`.
    fn cell_index(&self, row: usize, column: usize, layout: &GridLayout) -> usize {
        linear_index(row, column, layout.column_count)
    }

    /// Content for the slot at `index`.
    fn cell_content(&self, index: usize, ids: &[ItemId], pagination: &PaginationState) -> CellContent;
}

impl<S: RenderStrategy + ?Sized> RenderStrategy for Box<S> {
    fn mode(&self) -> ViewMode {
        (**self).mode()
    }

    fn default_overscan(&self) -> usize {
        (**self).default_overscan()
    }

    fn compute_layout(&self, inputs: &LayoutInputs, pagination: &PaginationState) -> GridLayout {
        (**self).compute_layout(inputs, pagination)
    }

    fn cell_index(&self, row: usize, column: usize, layout: &GridLayout) -> usize {
        (**self).cell_index(row, column, layout)
    }

    fn cell_content(&self, index: usize, ids: &[ItemId], pagination: &PaginationState) -> CellContent {
        (**self).cell_content(index, ids, pagination)
    }
}

/// Returns the strategy for a view mode.
pub fn strategy_for(mode: ViewMode) -> Box<dyn RenderStrategy> {
    match mode {
        ViewMode::Grid => Box::new(GridStrategy),
        ViewMode::List => Box::new(ListStrategy),
    }
}

// ============================================================================
// Grid
// ============================================================================

/// Two-dimensional windowing over loaded items.
///
/// Rows cover the loaded items only. Slots past the end render nothing; the
/// trailing loading slot exists only in the index space reported upstream.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridStrategy;

impl RenderStrategy for GridStrategy {
    fn mode(&self) -> ViewMode {
        ViewMode::Grid
    }

    fn default_overscan(&self) -> usize {
        overscan::GRID
    }

    fn compute_layout(&self, inputs: &LayoutInputs, pagination: &PaginationState) -> GridLayout {
        compute_grid_layout(
            inputs.viewport_width,
            pagination.item_count,
            &inputs.view_config,
            inputs.device,
        )
    }

    fn cell_content(&self, index: usize, ids: &[ItemId], _pagination: &PaginationState) -> CellContent {
        match ids.get(index) {
            Some(id) => CellContent::Entry {
                id: id.clone(),
                display_index: index,
            },
            None => CellContent::Empty,
        }
    }
}

// ============================================================================
// List
// ============================================================================

/// One-dimensional windowing with a trailing loading row.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListStrategy;

impl RenderStrategy for ListStrategy {
    fn mode(&self) -> ViewMode {
        ViewMode::List
    }

    fn default_overscan(&self) -> usize {
        overscan::LIST
    }

    fn compute_layout(&self, inputs: &LayoutInputs, pagination: &PaginationState) -> GridLayout {
        compute_list_layout(
            inputs.viewport_width,
            pagination.effective_item_count(),
            &inputs.view_config,
        )
    }

    fn cell_index(&self, row: usize, _column: usize, _layout: &GridLayout) -> usize {
        row
    }

    fn cell_content(&self, index: usize, ids: &[ItemId], pagination: &PaginationState) -> CellContent {
        if !pagination.is_item_loaded(index) {
            return CellContent::Loading;
        }
        match ids.get(index) {
            Some(id) => CellContent::Entry {
                id: id.clone(),
                display_index: index,
            },
            None => CellContent::Empty,
        }
    }
}
