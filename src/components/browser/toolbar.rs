//! Toolbar: folder path, item counter and view switcher.

use filegrid_core::config::ROOT_FOLDER_ID;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::ViewPreset;
use crate::utils::format::format_item_count;

stylance::import_crate_style!(css, "src/components/browser/toolbar.module.css");

/// Parent of a folder id; top-level folders return to the root listing.
pub fn parent_folder(folder: &str) -> Option<String> {
    if folder == ROOT_FOLDER_ID {
        return None;
    }
    match folder.rsplit_once('/') {
        Some((parent, _)) => Some(parent.to_string()),
        None => Some(ROOT_FOLDER_ID.to_string()),
    }
}

fn preset_icon(preset: ViewPreset) -> icondata::Icon {
    match preset {
        ViewPreset::List => ic::LIST,
        ViewPreset::SmallGrid => ic::GRID,
        ViewPreset::LargeGrid => ic::GRID_LARGE,
    }
}

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let browser = ctx.browser;

    let folder = Signal::derive(move || browser.pager.with(|p| p.folder().to_string()));
    let display_path = Signal::derive(move || {
        let folder = folder.get();
        if folder == ROOT_FOLDER_ID {
            "/".to_string()
        } else {
            format!("/{folder}")
        }
    });
    let counter = Signal::derive(move || {
        browser.pager.with(|p| format_item_count(p.display_list().len(), p.total_count()))
    });
    let is_loading = Signal::derive(move || browser.pager.with(|p| p.is_loading()));
    let parent = Signal::derive(move || parent_folder(&folder.get()));

    let go_up = move |_: leptos::ev::MouseEvent| {
        if let Some(parent) = parent.get_untracked() {
            browser.open_folder(parent);
        }
    };

    view! {
        <header class=css::bar>
            <div class=css::section>
                <span class=css::title>{APP_NAME}</span>
                <button
                    class=css::upButton
                    title="Parent folder"
                    disabled=move || parent.get().is_none()
                    on:click=go_up
                >
                    ".."
                </button>
                <span class=css::path>{display_path}</span>
            </div>
            <div class=css::section>
                <span class=css::counter>
                    {counter}
                    <Show when=move || is_loading.get()>
                        <span class=css::spinner aria-label="Loading"></span>
                    </Show>
                </span>
                <div class=css::viewToggle role="group" aria-label="View">
                    {ViewPreset::ALL
                        .into_iter()
                        .map(|preset| {
                            let class = move || {
                                if browser.view.get() == preset {
                                    format!("{} {}", css::viewButton, css::viewButtonActive)
                                } else {
                                    css::viewButton.to_string()
                                }
                            };
                            view! {
                                <button
                                    class=class
                                    title=preset.label()
                                    aria-pressed=move || (browser.view.get() == preset).to_string()
                                    on:click=move |_| browser.view.set(preset)
                                >
                                    <Icon icon=preset_icon(preset) />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </header>
    }
}
