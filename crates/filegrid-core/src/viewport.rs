//! Scroll position to row window translation.
//!
//! Rows have a fixed stride, so the visible window is a closed-form function
//! of the scroll offset. Overscan follows the direction of travel: while the
//! user scrolls, only the side they are heading towards gets the full
//! overscan.

use crate::index::RowRange;

/// Direction of the most recent scroll movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Forward,
    Backward,
}

/// Scroll position of a virtualized container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub direction: ScrollDirection,
    pub is_scrolling: bool,
}

impl ScrollState {
    /// Records a new offset reported by the container.
    pub fn scrolled_to(self, offset: f64) -> Self {
        let direction = if offset < self.offset {
            ScrollDirection::Backward
        } else {
            ScrollDirection::Forward
        };
        Self {
            offset,
            direction,
            is_scrolling: true,
        }
    }

    /// Marks scrolling as finished; overscan becomes symmetric again.
    pub fn settled(self) -> Self {
        Self {
            is_scrolling: false,
            ..self
        }
    }
}

/// Rows to render and rows actually on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowWindow {
    pub overscan: RowRange,
    pub visible: RowRange,
}

impl RowWindow {
    /// Rows to mount, overscan included.
    pub fn rows(&self) -> std::ops::RangeInclusive<usize> {
        self.overscan.start..=self.overscan.stop
    }
}

/// Computes the row window for a scroll position.
///
/// Returns `None` when there are no rows. A non-positive stride (zero-height
/// rows) shows every row rather than dividing by zero.
pub fn compute_row_window(
    row_count: usize,
    row_stride: f64,
    viewport_height: f64,
    scroll: &ScrollState,
    overscan: usize,
) -> Option<RowWindow> {
    let last = row_count.checked_sub(1)?;

    let visible = if row_stride > 0.0 && row_stride.is_finite() {
        let offset = scroll.offset.max(0.0);
        let start = ((offset / row_stride).floor() as usize).min(last);
        let start_offset = start as f64 * row_stride;
        let span = ((viewport_height.max(0.0) + offset - start_offset) / row_stride).ceil() as usize;
        // Non-finite heights saturate the cast; never span more than every row.
        let span = span.clamp(1, row_count);
        RowRange {
            start,
            stop: (start + span - 1).min(last),
        }
    } else {
        RowRange { start: 0, stop: last }
    };

    let full = overscan.max(1);
    let backward = if !scroll.is_scrolling || scroll.direction == ScrollDirection::Backward {
        full
    } else {
        1
    };
    let forward = if !scroll.is_scrolling || scroll.direction == ScrollDirection::Forward {
        full
    } else {
        1
    };

    Some(RowWindow {
        overscan: RowRange {
            start: visible.start.saturating_sub(backward),
            stop: (visible.stop + forward).min(last),
        },
        visible,
    })
}
