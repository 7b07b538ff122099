//! Paginated list: one entry per row plus a trailing loading row.

use filegrid_core::config::LOADING_PLACEHOLDER_TEXT;
use filegrid_core::{CellContent, ListStrategy};
use leptos::prelude::*;

use super::file_entry::FileRow;
use super::virtualized::{VirtualizedInputs, use_virtualized};

stylance::import_crate_style!(css, "src/components/browser/paginated.module.css");

/// Windowed list over the loaded entries.
///
/// While more pages exist the list is one row longer than what is loaded;
/// that row shows a placeholder until the page arrives.
#[component]
pub fn PaginatedList(inputs: VirtualizedInputs) -> impl IntoView {
    let list = use_virtualized(ListStrategy, inputs);
    let frame_style =
        move || format!("width:{}px;height:{}px;", inputs.width.get(), inputs.height.get());

    view! {
        <div
            node_ref=list.container
            class=css::scroller
            style=frame_style
            role="grid"
            on:scroll=move |ev| {
                list.on_scroll(event_target::<web_sys::Element>(&ev).scroll_top() as f64)
            }
        >
            <div style=move || list.content_style()>
                <For
                    each=move || list.cells.get()
                    key=|cell| (cell.key.clone(), cell.position)
                    children=move |cell| {
                        let position = cell.position;
                        view! {
                            <div class=css::cell style=move || list.cell_style(position)>
                                {match cell.content {
                                    CellContent::Entry { id, display_index } => {
                                        view! { <FileRow id=id display_index=display_index /> }
                                            .into_any()
                                    }
                                    CellContent::Loading => {
                                        view! {
                                            <div class=css::loadingRow>{LOADING_PLACEHOLDER_TEXT}</div>
                                        }
                                            .into_any()
                                    }
                                    CellContent::Empty => ().into_any(),
                                }}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
