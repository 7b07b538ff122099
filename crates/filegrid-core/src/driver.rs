//! Virtualized render driver.
//!
//! Composes the layout calculator, the index mapper and the pagination gate
//! for one container. Only the visible window (plus overscan) is turned into
//! cells, and every rendered window is reported back so the infinite loader
//! can request the next page.
//!
//! # Layout cache
//!
//! The current [`GridLayout`] lives in a shared [`LayoutCell`]. When inputs
//! change, the new layout is written to the cell *before* it is published to
//! any observable state. Size resolution ([`CellSizer`]) always reads the
//! cell, so a re-render triggered mid-scroll never sees a stale or half-applied
//! layout and cells do not jump.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::display_list::ItemId;
use crate::index::{CellKey, GridPosition, VisibleRange, report_range};
use crate::layout::GridLayout;
use crate::loader::InfiniteLoader;
use crate::pagination::{FetchDecision, PageLoader, PaginationGate, PaginationState};
use crate::strategy::{CellContent, GridStrategy, LayoutInputs, ListStrategy, RenderStrategy};
use crate::viewport::{RowWindow, ScrollState, compute_row_window};

/// Directly mutable layout reference shared with size-resolution callbacks.
pub type LayoutCell = Rc<Cell<GridLayout>>;

pub type GridDriver<L> = VirtualizedDriver<GridStrategy, L>;
pub type ListDriver<L> = VirtualizedDriver<ListStrategy, L>;

// ============================================================================
// Cell Geometry
// ============================================================================

/// Resolves row and column sizes through the layout cache.
#[derive(Clone, Debug)]
pub struct CellSizer {
    layout: LayoutCell,
}

impl CellSizer {
    pub fn new(layout: LayoutCell) -> Self {
        Self { layout }
    }

    /// Column width including its trailing gutter (none after the last).
    pub fn column_width(&self, column: usize) -> f64 {
        self.layout.get().column_extent(column)
    }

    /// Row height including its trailing gutter (none after the last).
    pub fn row_height(&self, row: usize) -> f64 {
        self.layout.get().row_extent(row)
    }

    /// Placement of the cell at `position` under the cached layout.
    pub fn rect(&self, position: GridPosition) -> CellRect {
        CellRect::at(&self.layout.get(), position)
    }
}

/// Absolute placement of a cell inside the scroll content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Gutter to the right of the content.
    pub padding_right: f64,
    /// Gutter below the content.
    pub padding_bottom: f64,
}

impl CellRect {
    pub fn at(layout: &GridLayout, position: GridPosition) -> Self {
        let width = layout.column_extent(position.column);
        let height = layout.row_extent(position.row);
        Self {
            left: position.column as f64 * layout.column_stride(),
            top: position.row as f64 * layout.row_stride(),
            width,
            height,
            padding_right: width - layout.column_width,
            padding_bottom: height - layout.row_height,
        }
    }
}

/// A cell ready to be handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedCell {
    pub key: CellKey,
    pub position: GridPosition,
    pub index: usize,
    pub rect: CellRect,
    pub content: CellContent,
}

/// What a visible-range report produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderReport {
    pub range: VisibleRange,
    pub decisions: Vec<FetchDecision>,
}

impl RenderReport {
    /// Whether any next-page request actually went out.
    pub fn issued(&self) -> bool {
        self.decisions.contains(&FetchDecision::Issued)
    }
}

// ============================================================================
// VirtualizedDriver
// ============================================================================

/// Render driver for one virtualized container.
pub struct VirtualizedDriver<S, L> {
    strategy: S,
    layout: LayoutCell,
    inputs: LayoutInputs,
    gate: PaginationGate<L>,
    loader: InfiniteLoader,
    overscan: usize,
    rendered_columns: Cell<usize>,
}

impl<S: RenderStrategy, L: PageLoader> VirtualizedDriver<S, L> {
    /// Creates a driver with its initial layout already cached.
    pub fn new(strategy: S, inputs: LayoutInputs, pagination: PaginationState, page_loader: L) -> Self {
        let layout = strategy.compute_layout(&inputs, &pagination);
        let overscan = strategy.default_overscan();
        Self {
            strategy,
            layout: Rc::new(Cell::new(layout)),
            inputs,
            gate: PaginationGate::new(pagination, page_loader),
            loader: InfiniteLoader::default(),
            overscan,
            rendered_columns: Cell::new(layout.column_count),
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_loader(mut self, loader: InfiniteLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Shared handle to the layout cache.
    pub fn layout_cell(&self) -> LayoutCell {
        Rc::clone(&self.layout)
    }

    /// The cached layout.
    pub fn layout(&self) -> GridLayout {
        self.layout.get()
    }

    pub fn sizer(&self) -> CellSizer {
        CellSizer::new(self.layout_cell())
    }

    pub fn pagination(&self) -> PaginationState {
        self.gate.state()
    }

    /// Applies new inputs and a pagination snapshot.
    ///
    /// When the layout changes it is written to the cache first and then
    /// handed to `publish`, which is where the caller updates observable
    /// state. Returns whether the layout changed.
    pub fn update(
        &mut self,
        inputs: LayoutInputs,
        pagination: PaginationState,
        publish: impl FnOnce(GridLayout),
    ) -> bool {
        self.inputs = inputs;
        self.gate.sync(pagination);

        let layout = self.strategy.compute_layout(&self.inputs, &pagination);
        if layout == self.layout.get() {
            return false;
        }

        debug!(
            mode = ?self.strategy.mode(),
            rows = layout.row_count,
            columns = layout.column_count,
            "layout changed"
        );
        self.layout.set(layout);
        publish(layout);
        true
    }

    /// Installs a pagination snapshot without touching the layout.
    ///
    /// Lets a range report see the latest loaded/in-flight flags even when
    /// the layout update for the same snapshot has not run yet.
    pub fn sync_pagination(&mut self, pagination: PaginationState) {
        self.gate.sync(pagination);
    }

    /// Row window for the current scroll position, using the cached layout.
    pub fn window(&self, viewport_height: f64, scroll: &ScrollState) -> Option<RowWindow> {
        let layout = self.layout.get();
        compute_row_window(
            layout.row_count,
            layout.row_stride(),
            viewport_height,
            scroll,
            self.overscan,
        )
    }

    /// Cells for every row in the window's overscan range.
    ///
    /// Records the column count used so the matching range report maps rows
    /// to indices the same way.
    pub fn cells(&self, window: &RowWindow, ids: &[ItemId]) -> Vec<RenderedCell> {
        let layout = self.layout.get();
        self.rendered_columns.set(layout.column_count);

        window
            .rows()
            .flat_map(|row| (0..layout.column_count).map(move |column| GridPosition { row, column }))
            .map(|position| self.cell_with(&layout, position, ids))
            .collect()
    }

    /// A single cell, resolved against the cached layout.
    pub fn cell(&self, position: GridPosition, ids: &[ItemId]) -> RenderedCell {
        self.cell_with(&self.layout.get(), position, ids)
    }

    /// Reports a rendered window to the infinite loader.
    ///
    /// Rows are mapped to indices with the column count the window was
    /// rendered with, not whatever layout may have been computed since.
    pub fn on_items_rendered(&mut self, window: &RowWindow) -> Option<RenderReport> {
        let range = report_range(
            window.overscan,
            window.visible,
            self.rendered_columns.get(),
            self.gate.effective_item_count(),
        )?;
        trace!(?range, "items rendered");

        let decisions = self.loader.on_items_rendered(range.visible(), &self.gate);
        Some(RenderReport { range, decisions })
    }

    /// Clears the loader's memory of requested ranges.
    pub fn reset_load_cache(&mut self, reload: bool) -> Vec<FetchDecision> {
        self.loader.reset_cache(reload, &self.gate)
    }

    fn cell_with(&self, layout: &GridLayout, position: GridPosition, ids: &[ItemId]) -> RenderedCell {
        let index = self.strategy.cell_index(position.row, position.column, layout);

        RenderedCell {
            key: CellKey::at(ids, index),
            position,
            index,
            rect: CellRect::at(layout, position),
            content: self.strategy.cell_content(index, ids, &self.gate.state()),
        }
    }
}
