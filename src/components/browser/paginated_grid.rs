//! Paginated grid: fixed-size tiles flowing left to right.

use filegrid_core::{CellContent, GridStrategy, RenderedCell};
use leptos::prelude::*;

use super::file_entry::FileTile;
use super::virtualized::{VirtualizedInputs, use_virtualized};

stylance::import_crate_style!(css, "src/components/browser/paginated.module.css");

/// Windowed grid over the loaded entries.
///
/// Slots past the last loaded entry render nothing; the next page is
/// requested through the infinite loader once the window nears the end.
#[component]
pub fn PaginatedGrid(inputs: VirtualizedInputs) -> impl IntoView {
    let grid = use_virtualized(GridStrategy, inputs);

    let tiles = move || {
        grid.cells.with(|cells| {
            cells
                .iter()
                .filter(|cell| cell.content != CellContent::Empty)
                .cloned()
                .collect::<Vec<RenderedCell>>()
        })
    };
    let frame_style =
        move || format!("width:{}px;height:{}px;", inputs.width.get(), inputs.height.get());

    view! {
        <div
            node_ref=grid.container
            class=css::scroller
            style=frame_style
            role="grid"
            on:scroll=move |ev| {
                grid.on_scroll(event_target::<web_sys::Element>(&ev).scroll_top() as f64)
            }
        >
            <div style=move || grid.content_style()>
                <For
                    each=tiles
                    key=|cell| (cell.key.clone(), cell.position)
                    children=move |cell| {
                        let position = cell.position;
                        view! {
                            <div class=css::cell style=move || grid.cell_style(position)>
                                {match cell.content {
                                    CellContent::Entry { id, .. } => {
                                        view! { <FileTile id=id /> }.into_any()
                                    }
                                    _ => ().into_any(),
                                }}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
