//! File browser shell.

use leptos::prelude::*;

use super::file_list::FileList;
use super::toolbar::Toolbar;

stylance::import_crate_style!(css, "src/components/browser/file_browser.module.css");

/// Toolbar on top, virtualized listing filling the rest.
#[component]
pub fn FileBrowser() -> impl IntoView {
    view! {
        <div class=css::browser>
            <Toolbar />
            <FileList />
        </div>
    }
}
