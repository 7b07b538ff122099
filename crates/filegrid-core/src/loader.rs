//! Infinite-loading heuristic.
//!
//! After each render the visible range, widened by a threshold, is scanned
//! for unloaded items. Every new unloaded range becomes a next-page request
//! through the [`PaginationGate`], which stays the only place that decides
//! whether a fetch actually goes out.

use tracing::trace;

use crate::config::loader::{DEFAULT_MINIMUM_BATCH_SIZE, DEFAULT_THRESHOLD};
use crate::index::IndexRange;
use crate::pagination::{FetchDecision, PageLoader, PaginationGate};

/// Finds runs of unloaded indices within `[start, stop]`.
///
/// The last run is extended forward, and the first run backward, until it
/// spans `minimum_batch_size` indices or hits a loaded item.
pub fn scan_for_unloaded_ranges(
    is_item_loaded: impl Fn(usize) -> bool,
    item_count: usize,
    minimum_batch_size: usize,
    start: usize,
    stop: usize,
) -> Vec<IndexRange> {
    let mut ranges = Vec::new();
    let mut run: Option<IndexRange> = None;

    for index in start..=stop {
        if !is_item_loaded(index) {
            match run.as_mut() {
                Some(range) => range.stop = index,
                None => run = Some(IndexRange { start: index, stop: index }),
            }
        } else if let Some(range) = run.take() {
            ranges.push(range);
        }
    }

    if let Some(mut range) = run {
        let target = range
            .stop
            .max((range.start + minimum_batch_size).saturating_sub(1))
            .min(item_count.saturating_sub(1));
        for index in range.stop + 1..=target {
            if is_item_loaded(index) {
                break;
            }
            range.stop = index;
        }
        ranges.push(range);
    }

    if let Some(first) = ranges.first_mut() {
        while first.len() < minimum_batch_size && first.start > 0 {
            let index = first.start - 1;
            if is_item_loaded(index) {
                break;
            }
            first.start = index;
        }
    }

    ranges
}

/// Turns visible-range reports into next-page requests.
#[derive(Clone, Debug)]
pub struct InfiniteLoader {
    threshold: usize,
    minimum_batch_size: usize,
    last_rendered: Option<IndexRange>,
    requested: Vec<IndexRange>,
}

impl Default for InfiniteLoader {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_MINIMUM_BATCH_SIZE)
    }
}

impl InfiniteLoader {
    pub fn new(threshold: usize, minimum_batch_size: usize) -> Self {
        Self {
            threshold,
            minimum_batch_size: minimum_batch_size.max(1),
            last_rendered: None,
            requested: Vec::new(),
        }
    }

    /// Handles a visible-range report.
    ///
    /// Returns one decision per newly discovered unloaded range. A report
    /// yielding the same ranges as the previous one requests nothing.
    pub fn on_items_rendered<L: PageLoader>(
        &mut self,
        visible: IndexRange,
        gate: &PaginationGate<L>,
    ) -> Vec<FetchDecision> {
        self.last_rendered = Some(visible);
        self.ensure_loaded(visible, gate)
    }

    /// Forgets which ranges were requested.
    ///
    /// With `reload` the last reported range is scanned again immediately.
    pub fn reset_cache<L: PageLoader>(
        &mut self,
        reload: bool,
        gate: &PaginationGate<L>,
    ) -> Vec<FetchDecision> {
        self.requested.clear();
        match (reload, self.last_rendered) {
            (true, Some(visible)) => self.ensure_loaded(visible, gate),
            _ => Vec::new(),
        }
    }

    fn ensure_loaded<L: PageLoader>(
        &mut self,
        visible: IndexRange,
        gate: &PaginationGate<L>,
    ) -> Vec<FetchDecision> {
        let item_count = gate.effective_item_count();
        let Some(last) = item_count.checked_sub(1) else {
            return Vec::new();
        };

        let start = visible.start.saturating_sub(self.threshold);
        let stop = (visible.stop + self.threshold).min(last);
        if start > stop {
            return Vec::new();
        }

        let ranges = scan_for_unloaded_ranges(
            |index| gate.is_item_loaded(index),
            item_count,
            self.minimum_batch_size,
            start,
            stop,
        );
        if ranges == self.requested {
            return Vec::new();
        }

        trace!(?ranges, "unloaded ranges changed");
        self.requested = ranges;
        self.requested.iter().map(|_| gate.request_next_page()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::pagination::PaginationState;

    fn range(start: usize, stop: usize) -> IndexRange {
        IndexRange { start, stop }
    }

    // =========================================================================
    // Scan Tests
    // =========================================================================

    #[test]
    fn test_scan_all_loaded() {
        let ranges = scan_for_unloaded_ranges(|_| true, 50, 10, 0, 49);
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_scan_trailing_slot() {
        // 20 loaded + 1 loading slot
        let ranges = scan_for_unloaded_ranges(|i| i < 20, 21, 10, 5, 20);
        assert_eq!(ranges, vec![range(20, 20)]);
    }

    #[test]
    fn test_scan_extends_forward_to_batch() {
        let ranges = scan_for_unloaded_ranges(|i| i < 5, 100, 10, 0, 6);
        assert_eq!(ranges, vec![range(5, 14)]);
    }

    #[test]
    fn test_scan_extends_first_range_backward() {
        let loaded = |i: usize| !(3..10).contains(&i) && i != 12;
        let ranges = scan_for_unloaded_ranges(loaded, 100, 10, 8, 11);
        // Forward extension never runs since the scan ends on a loaded index.
        assert_eq!(ranges, vec![range(3, 9)]);
    }

    #[test]
    fn test_scan_multiple_ranges() {
        let loaded = |i: usize| i % 4 != 0;
        let ranges = scan_for_unloaded_ranges(loaded, 12, 1, 0, 9);
        assert_eq!(ranges, vec![range(0, 0), range(4, 4), range(8, 8)]);
    }

    // =========================================================================
    // Loader Tests
    // =========================================================================

    #[test]
    fn test_requests_when_near_end() {
        let calls = Cell::new(0);
        let state = PaginationState {
            has_next_page: true,
            is_next_page_loading: false,
            item_count: 20,
        };
        let gate = PaginationGate::new(state, || calls.set(calls.get() + 1));
        let mut loader = InfiniteLoader::default();

        let decisions = loader.on_items_rendered(range(0, 9), &gate);
        assert_eq!(decisions, vec![FetchDecision::Issued]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_no_request_far_from_end() {
        let calls = Cell::new(0);
        let state = PaginationState {
            has_next_page: true,
            is_next_page_loading: false,
            item_count: 200,
        };
        let gate = PaginationGate::new(state, || calls.set(calls.get() + 1));
        let mut loader = InfiniteLoader::default();

        assert!(loader.on_items_rendered(range(0, 9), &gate).is_empty());
        assert!(loader.on_items_rendered(range(150, 170), &gate).is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_same_range_requested_once() {
        let calls = Cell::new(0);
        let state = PaginationState {
            has_next_page: true,
            is_next_page_loading: false,
            item_count: 20,
        };
        let gate = PaginationGate::new(state, || calls.set(calls.get() + 1));
        let mut loader = InfiniteLoader::default();

        loader.on_items_rendered(range(0, 9), &gate);
        loader.on_items_rendered(range(1, 10), &gate);
        loader.on_items_rendered(range(10, 19), &gate);
        assert_eq!(calls.get(), 1);

        loader.reset_cache(true, &gate);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_exhausted_never_requests() {
        let calls = Cell::new(0);
        let state = PaginationState {
            has_next_page: false,
            is_next_page_loading: false,
            item_count: 5,
        };
        let gate = PaginationGate::new(state, || calls.set(calls.get() + 1));
        let mut loader = InfiniteLoader::default();

        assert!(loader.on_items_rendered(range(0, 4), &gate).is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_in_flight_request_suppressed_by_gate() {
        let calls = Cell::new(0);
        let state = PaginationState {
            has_next_page: true,
            is_next_page_loading: true,
            item_count: 20,
        };
        let gate = PaginationGate::new(state, || calls.set(calls.get() + 1));
        let mut loader = InfiniteLoader::default();

        let decisions = loader.on_items_rendered(range(10, 19), &gate);
        assert_eq!(decisions, vec![FetchDecision::SuppressedInFlight]);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_empty_list_requests_nothing() {
        let gate = PaginationGate::new(PaginationState::default(), || {});
        let mut loader = InfiniteLoader::default();
        assert!(loader.on_items_rendered(range(0, 0), &gate).is_empty());
    }
}
