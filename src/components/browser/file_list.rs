//! Sized host for the paginated views.
//!
//! Measures the space it is given and hands it, together with the browser
//! state, to the grid or list variant for the active view mode.

use filegrid_core::ViewMode;
use filegrid_core::config::LOADING_PLACEHOLDER_TEXT;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::{UseElementSizeReturn, use_element_size};

use super::paginated_grid::PaginatedGrid;
use super::paginated_list::PaginatedList;
use super::virtualized::VirtualizedInputs;
use crate::app::AppContext;
use crate::utils::dom::BrowserDevice;

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let browser = ctx.browser;

    let frame = NodeRef::<Div>::new();
    let UseElementSizeReturn { width, height } = use_element_size(frame);

    let view_config = Signal::derive(move || browser.view_config());
    let inputs = VirtualizedInputs {
        width,
        height,
        view_config,
        device: BrowserDevice::new(),
        pagination: Signal::derive(move || browser.pager.with(|p| p.state())),
        ids: browser.display_ids.into(),
        load_next_page: Callback::new(move |_| browser.load_next_page()),
    };
    let mode = Memo::new(move |_| view_config.get().mode);
    let is_empty =
        Signal::derive(move || browser.pager.with(|p| p.state().effective_item_count() == 0));
    let placeholder = move || {
        if browser.ready.get() {
            "This folder is empty"
        } else {
            LOADING_PLACEHOLDER_TEXT
        }
    };

    view! {
        <div node_ref=frame class=css::frame>
            <Show
                when=move || !is_empty.get()
                fallback=move || view! { <div class=css::empty>{placeholder}</div> }
            >
                {move || match mode.get() {
                    ViewMode::Grid => view! { <PaginatedGrid inputs=inputs /> }.into_any(),
                    ViewMode::List => view! { <PaginatedList inputs=inputs /> }.into_any(),
                }}
            </Show>
        </div>
    }
}
