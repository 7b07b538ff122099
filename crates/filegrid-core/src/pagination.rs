//! Pagination gate: decides whether items are loaded and whether a
//! next-page request may go out.
//!
//! The gate never fetches anything itself. It forwards intent to an external
//! [`PageLoader`] and relies on the host to report the in-flight flag back on
//! the next render.

use tracing::{debug, trace};

// ============================================================================
// PaginationState
// ============================================================================

/// Snapshot of the host's pagination controller for one render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// More data exists beyond what is loaded.
    pub has_next_page: bool,
    /// A next-page request is in flight.
    pub is_next_page_loading: bool,
    /// Length of the display list.
    pub item_count: usize,
}

impl PaginationState {
    /// Items handed to the windowing layer: the loaded ones plus one trailing
    /// loading slot while more data exists.
    #[inline]
    pub fn effective_item_count(&self) -> usize {
        if self.has_next_page {
            self.item_count + 1
        } else {
            self.item_count
        }
    }

    /// Whether the item at `index` has data.
    ///
    /// Once pagination is exhausted every index counts as loaded; callers
    /// must not ask about indices past the effective count.
    #[inline]
    pub fn is_item_loaded(&self, index: usize) -> bool {
        !self.has_next_page || index < self.item_count
    }
}

// ============================================================================
// PageLoader
// ============================================================================

/// Outward request for the next page of data.
pub trait PageLoader {
    fn load_next_page(&self);
}

impl<F: Fn()> PageLoader for F {
    fn load_next_page(&self) {
        self()
    }
}

/// Outcome of a next-page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchDecision {
    /// Forwarded to the loader.
    Issued,
    /// A request is already in flight.
    SuppressedInFlight,
    /// There is nothing left to load.
    SuppressedExhausted,
}

// ============================================================================
// PaginationGate
// ============================================================================

/// The single concurrency-control point for page fetches.
///
/// Never issues while a fetch is pending and never issues once pagination is
/// exhausted. If the host never clears the in-flight flag the gate simply
/// keeps suppressing.
#[derive(Debug)]
pub struct PaginationGate<L> {
    state: PaginationState,
    loader: L,
}

impl<L: PageLoader> PaginationGate<L> {
    pub fn new(state: PaginationState, loader: L) -> Self {
        Self { state, loader }
    }

    /// Installs the snapshot for the current render.
    pub fn sync(&mut self, state: PaginationState) {
        self.state = state;
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn is_item_loaded(&self, index: usize) -> bool {
        self.state.is_item_loaded(index)
    }

    pub fn effective_item_count(&self) -> usize {
        self.state.effective_item_count()
    }

    /// Forwards to the loader unless a request is pending or nothing is left.
    pub fn request_next_page(&self) -> FetchDecision {
        if self.state.is_next_page_loading {
            trace!(item_count = self.state.item_count, "next page already loading");
            return FetchDecision::SuppressedInFlight;
        }
        if !self.state.has_next_page {
            trace!(item_count = self.state.item_count, "no next page");
            return FetchDecision::SuppressedExhausted;
        }

        debug!(item_count = self.state.item_count, "requesting next page");
        self.loader.load_next_page();
        FetchDecision::Issued
    }
}
