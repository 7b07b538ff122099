//! Mapping between linear item indices and grid coordinates.
//!
//! The display list is a flat sequence; the grid lays it out row-major. Every
//! conversion here must be exact: an off-by-one in the reported range either
//! fires fetches too early or never fires them at all.

use std::fmt;

use crate::config::LOADING_KEY_PREFIX;
use crate::display_list::ItemId;

// ============================================================================
// Positions and Ranges
// ============================================================================

/// A cell coordinate in the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

/// Inclusive range of rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub stop: usize,
}

/// Inclusive range of linear item indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexRange {
    pub start: usize,
    pub stop: usize,
}

impl IndexRange {
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.stop).contains(&index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stop + 1 - self.start
    }

    /// Always false: an inclusive range holds at least one index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Linear ranges reported to the pagination infrastructure after a render.
///
/// Indices address the effective item list, which includes the trailing
/// loading slot while more data exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRange {
    pub overscan_start: usize,
    pub overscan_stop: usize,
    pub visible_start: usize,
    pub visible_stop: usize,
}

impl VisibleRange {
    pub fn visible(&self) -> IndexRange {
        IndexRange {
            start: self.visible_start,
            stop: self.visible_stop,
        }
    }

    pub fn overscan(&self) -> IndexRange {
        IndexRange {
            start: self.overscan_start,
            stop: self.overscan_stop,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Row-major linear index of a cell.
#[inline]
pub fn linear_index(row: usize, column: usize, column_count: usize) -> usize {
    row * column_count.max(1) + column
}

/// Inverse of [`linear_index`].
#[inline]
pub fn grid_position(index: usize, column_count: usize) -> GridPosition {
    let columns = column_count.max(1);
    GridPosition {
        row: index / columns,
        column: index % columns,
    }
}

/// Linear indices covered by a range of full rows.
pub fn rows_to_index_range(rows: RowRange, column_count: usize) -> IndexRange {
    let columns = column_count.max(1);
    IndexRange {
        start: rows.start * columns,
        stop: (rows.stop + 1) * columns - 1,
    }
}

/// Translates rendered row ranges into the linear ranges reported upstream.
///
/// `column_count` must be the one the rows were rendered with. Results are
/// clamped to `effective_count`; with nothing to show there is nothing to
/// report.
pub fn report_range(
    overscan: RowRange,
    visible: RowRange,
    column_count: usize,
    effective_count: usize,
) -> Option<VisibleRange> {
    let last = effective_count.checked_sub(1)?;
    let overscan = rows_to_index_range(overscan, column_count);
    let visible = rows_to_index_range(visible, column_count);

    Some(VisibleRange {
        overscan_start: overscan.start.min(last),
        overscan_stop: overscan.stop.min(last),
        visible_start: visible.start.min(last),
        visible_stop: visible.stop.min(last),
    })
}

// ============================================================================
// Cell Identity
// ============================================================================

/// Identity key of a rendered cell.
///
/// Loaded cells are keyed by their item id, pending cells by their position.
/// Keeping the two key spaces disjoint stops the renderer from reusing a
/// placeholder's mounted state for the item that replaces it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellKey {
    Item(ItemId),
    Loading(usize),
}

impl CellKey {
    /// Key for the cell at `index` given the loaded ids.
    pub fn at(ids: &[ItemId], index: usize) -> Self {
        match ids.get(index) {
            Some(id) => Self::Item(id.clone()),
            None => Self::Loading(index),
        }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(id) => write!(f, "{}", id),
            Self::Loading(index) => write!(f, "{}{}", LOADING_KEY_PREFIX, index),
        }
    }
}
