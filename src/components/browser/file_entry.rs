//! Entry renderers: grid tiles and list rows.

use filegrid_core::{FileRecord, ItemId};
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::FileType;
use crate::utils::format::{format_date, format_size};

stylance::import_crate_style!(css, "src/components/browser/file_entry.module.css");

/// Get icon for an entry based on its type
fn get_icon(record: &FileRecord) -> IconData {
    match FileType::of(record) {
        FileType::Folder => ic::FOLDER,
        FileType::Text => ic::FILE_TEXT,
        FileType::Image => ic::FILE_IMAGE,
        FileType::Archive => ic::FILE_ARCHIVE,
        FileType::Unknown => ic::FILE,
    }
}

/// Looks up the record behind `id` and wires folder navigation.
///
/// Records never change once loaded, so the lookup is untracked.
fn use_entry(id: &ItemId) -> (Option<FileRecord>, impl Fn(leptos::ev::MouseEvent) + 'static) {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let browser = ctx.browser;
    let record = browser.pager.with_untracked(|p| p.record(id).cloned());
    let is_dir = record.as_ref().is_some_and(FileRecord::is_dir);

    let folder = id.to_string();
    let open = move |_: leptos::ev::MouseEvent| {
        if is_dir {
            browser.open_folder(folder.clone());
        }
    };
    (record, open)
}

/// Grid tile: large icon with the name underneath.
#[component]
pub fn FileTile(id: ItemId) -> impl IntoView {
    let (record, open) = use_entry(&id);
    let Some(record) = record else {
        return view! { <div class=css::tile></div> }.into_any();
    };
    let icon = get_icon(&record);
    let tile_class = if record.is_dir() {
        format!("{} {}", css::tile, css::tileDir)
    } else {
        css::tile.to_string()
    };

    view! {
        <div class=tile_class title=record.file_name.clone() on:dblclick=open>
            <span class=css::tileIcon>
                <Icon icon=icon />
            </span>
            <span class=css::tileName>{record.file_name.clone()}</span>
        </div>
    }
    .into_any()
}

/// List row: icon, name, modified date and size.
#[component]
pub fn FileRow(id: ItemId, display_index: usize) -> impl IntoView {
    let (record, open) = use_entry(&id);
    let Some(record) = record else {
        return view! { <div class=css::row></div> }.into_any();
    };
    let icon = get_icon(&record);
    let size = if record.is_dir() {
        "-".to_string()
    } else {
        format_size(record.size)
    };
    let modified = format_date(record.last_modified.as_deref());
    let row_class = if display_index % 2 == 1 {
        format!("{} {}", css::row, css::rowAlt)
    } else {
        css::row.to_string()
    };
    let name_class = if record.is_dir() {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };

    view! {
        <div class=row_class role="row" on:dblclick=open>
            <span class=css::rowIcon>
                <Icon icon=icon />
            </span>
            <span class=name_class>{record.file_name}</span>
            <span class=css::date>{modified}</span>
            <span class=css::size>{size}</span>
        </div>
    }
    .into_any()
}
