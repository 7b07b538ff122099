//! Root application module.
//!
//! Contains the main App component, AppContext definition, BrowserState,
//! and the page-loading glue between the page controller and the demo source.

use filegrid_core::config::ROOT_FOLDER_ID;
use filegrid_core::{FilePage, ItemId, PageController, PageError, PageRequest, ViewConfig};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::FileBrowser;
use crate::demo;
use crate::models::ViewPreset;

// ============================================================================
// BrowserState
// ============================================================================

/// File browser state managed with Leptos signals.
///
/// The page controller owns the display list; `display_ids` is the memoized
/// id sequence handed to the virtualized views, so they re-render only when
/// a page actually appends something.
#[derive(Clone, Copy)]
pub struct BrowserState {
    /// Active view preset.
    pub view: RwSignal<ViewPreset>,
    /// Pagination state and loaded records for the open folder.
    pub pager: RwSignal<PageController>,
    /// Loaded item ids in display order.
    pub display_ids: Memo<Vec<ItemId>>,
    /// Whether the first page of the open folder has arrived.
    pub ready: RwSignal<bool>,
}

impl BrowserState {
    pub fn new(folder: &str) -> Self {
        let pager = RwSignal::new(PageController::new(folder));
        let display_ids = Memo::new(move |_| pager.with(|p| p.display_list().ids().to_vec()));
        Self {
            view: RwSignal::new(ViewPreset::default()),
            pager,
            display_ids,
            ready: RwSignal::new(false),
        }
    }

    pub fn view_config(&self) -> ViewConfig {
        self.view.get().config()
    }

    /// Loads the first page of `folder`, replacing whatever was shown.
    pub fn open_folder(&self, folder: String) {
        let (pager, ready) = (self.pager, self.ready);
        pager.update(|p| p.open(folder.clone()));
        ready.set(false);
        spawn_local(async move {
            match demo::fetch_page(folder.clone(), 0).await {
                // Ignore listings for a folder that is no longer open.
                Ok(page) if pager.with_untracked(|p| p.folder() == folder) => {
                    pager.update(|p| p.reset(page));
                    ready.set(true);
                }
                Ok(_) => {}
                Err(e) => web_sys::console::warn_1(&format!("Failed to load listing: {e}").into()),
            }
        });
    }

    /// Requests the page after the last loaded one.
    ///
    /// No-op while a request is in flight or once everything is loaded.
    pub fn load_next_page(&self) {
        let pager = self.pager;
        if pager.with_untracked(|p| p.is_loading() || !p.has_next_page()) {
            return;
        }
        let Some(request) = pager.try_update(|p| p.begin_next_page()).flatten() else {
            return;
        };
        let folder = pager.with_untracked(|p| p.folder().to_string());

        spawn_local(async move {
            let result = demo::fetch_page(folder.clone(), request.page).await;
            pager.update(|p| finish_request(p, &folder, request, result));
        });
    }
}

/// Applies a page response unless the folder it was requested for is gone.
fn finish_request(
    pager: &mut PageController,
    folder: &str,
    request: PageRequest,
    result: Result<FilePage, PageError>,
) {
    if pager.folder() != folder {
        web_sys::console::log_1(&format!("Dropped page {} of {folder}", request.page).into());
        return;
    }
    let outcome = match result {
        Ok(page) => pager.complete(request, page).map(|_| ()),
        Err(e) => {
            web_sys::console::warn_1(&format!("Failed to load page {}: {e}", request.page).into());
            pager.fail(request)
        }
    };
    if let Err(e) = outcome {
        web_sys::console::log_1(&format!("Dropped page {}: {e}", request.page).into());
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Global application context.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub browser: BrowserState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            browser: BrowserState::new(ROOT_FOLDER_ID),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global AppContext, kicks off the first page
/// load and renders the file browser.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.browser.open_folder(ROOT_FOLDER_ID.to_string());

    view! { <FileBrowser /> }
}
