//! Reactive wrapper around [`VirtualizedDriver`].
//!
//! The driver (and the layout cache it shares with its [`CellSizer`]) lives
//! in local stored values. Layout changes are written to that cache inside
//! the driver first and only then published to the `layout` signal, so every
//! view that re-renders because of the signal already sizes cells from the
//! new layout.

use filegrid_core::{
    CellRect, CellSizer, DeviceProbe, GridLayout, GridPosition, ItemId, LayoutInputs,
    PaginationState, RenderStrategy, RenderedCell, ScrollState, ViewConfig, VirtualizedDriver,
};
use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;

use crate::config::SCROLL_SETTLE_MS;
use crate::utils::dom::BrowserDevice;

/// Reactive inputs of a virtualized view.
#[derive(Clone, Copy)]
pub struct VirtualizedInputs {
    pub width: Signal<f64>,
    pub height: Signal<f64>,
    pub view_config: Signal<ViewConfig>,
    pub device: BrowserDevice,
    pub pagination: Signal<PaginationState>,
    pub ids: Signal<Vec<ItemId>>,
    pub load_next_page: Callback<()>,
}

/// Handles returned by [`use_virtualized`].
#[derive(Clone, Copy)]
pub struct Virtualized {
    /// Scroll container.
    pub container: NodeRef<Div>,
    /// Published layout.
    pub layout: ReadSignal<GridLayout>,
    /// Cells in the current window, overscan included.
    pub cells: Memo<Vec<RenderedCell>>,
    scroll: RwSignal<ScrollState>,
    sizer: StoredValue<CellSizer, LocalStorage>,
    settle: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Virtualized {
    /// Records a scroll offset and restarts the settle timer.
    pub fn on_scroll(&self, offset: f64) {
        self.scroll.update(|s| *s = s.scrolled_to(offset));

        let scroll = self.scroll;
        let timer = Timeout::new(SCROLL_SETTLE_MS, move || scroll.update(|s| *s = s.settled()));
        self.settle.set_value(Some(timer));
    }

    /// Absolutely positioned style for the cell at `position`.
    ///
    /// Tracks the published layout but reads geometry through the cache.
    pub fn cell_style(&self, position: GridPosition) -> String {
        self.layout.track();
        self.sizer.with_value(|sizer| rect_style(&sizer.rect(position)))
    }

    /// Style of the inner element spanning the whole scrollable content.
    pub fn content_style(&self) -> String {
        let layout = self.layout.get();
        format!(
            "position:relative;width:{}px;height:{}px;",
            layout.content_width(),
            layout.content_height()
        )
    }
}

/// Inline style for a cell rectangle. Gutters become padding so the content
/// box keeps the entry size.
pub fn rect_style(rect: &CellRect) -> String {
    format!(
        "position:absolute;box-sizing:border-box;left:{}px;top:{}px;width:{}px;height:{}px;\
         padding-right:{}px;padding-bottom:{}px;",
        rect.left, rect.top, rect.width, rect.height, rect.padding_right, rect.padding_bottom
    )
}

/// Windows `strategy` over the given inputs.
pub fn use_virtualized<S: RenderStrategy + 'static>(strategy: S, inputs: VirtualizedInputs) -> Virtualized {
    let VirtualizedInputs {
        width,
        height,
        view_config,
        device,
        pagination,
        ids,
        load_next_page,
    } = inputs;

    let container = NodeRef::<Div>::new();
    let scroll = RwSignal::new(ScrollState::default());

    let layout_inputs = move || LayoutInputs {
        viewport_width: width.get(),
        view_config: view_config.get(),
        device: device.snapshot(),
    };

    let driver = VirtualizedDriver::new(
        strategy,
        untrack(layout_inputs),
        pagination.get_untracked(),
        move || load_next_page.run(()),
    );
    let (layout, set_layout) = signal(driver.layout());
    let sizer = StoredValue::new_local(driver.sizer());
    let driver = StoredValue::new_local(driver);

    // Cache first, then publish.
    Effect::new(move |_| {
        let inputs = layout_inputs();
        let state = pagination.get();
        let mut published = None;
        let mut shrunk = false;

        driver.update_value(|d| {
            shrunk = state.item_count < d.pagination().item_count;
            if shrunk {
                d.reset_load_cache(false);
            }
            d.update(inputs, state, |next| published = Some(next));
        });

        if shrunk {
            scroll.set(ScrollState::default());
            if let Some(el) = container.get_untracked() {
                el.set_scroll_top(0);
            }
        }
        if let Some(next) = published {
            set_layout.set(next);
        }
    });

    let window = Memo::new(move |_| {
        layout.track();
        let scroll = scroll.get();
        let viewport_height = height.get();
        driver.with_value(|d| d.window(viewport_height, &scroll))
    });

    let cells = Memo::new(move |_| {
        let Some(window) = window.get() else {
            return Vec::new();
        };
        ids.with(|ids| driver.with_value(|d| d.cells(&window, ids)))
    });

    // Report every rendered window to the infinite loader.
    // The snapshot is synced here too, so the report never depends on the
    // layout effect having run first.
    Effect::new(move |_| {
        cells.track();
        let state = pagination.get();
        if let Some(window) = window.get_untracked() {
            driver.update_value(|d| {
                d.sync_pagination(state);
                d.on_items_rendered(&window);
            });
        }
    });

    Virtualized {
        container,
        layout,
        cells,
        scroll,
        sizer,
        settle: StoredValue::new_local(None),
    }
}
