//! In-memory page source.
//!
//! Serves deterministic listings in the same JSON shape a backend returns
//! (`{"list": [...], "totalCount": n}`), after a simulated network delay.

use filegrid_core::{FilePage, PageError};
use gloo_timers::future::TimeoutFuture;
use serde_json::{Value, json};

use crate::config::demo::{FOLDER_EVERY, LATENCY_MS, PAGE_SIZE, TOTAL_COUNT};

const EXTENSIONS: [&str; 5] = ["md", "png", "txt", "zip", "json"];

/// JSON payload for one page of `folder`. Pages past the end are empty.
pub fn page_json(folder: &str, page: usize) -> String {
    let start = (page * PAGE_SIZE).min(TOTAL_COUNT);
    let end = (start + PAGE_SIZE).min(TOTAL_COUNT);
    let list: Vec<Value> = (start..end).map(|i| entry_json(folder, i)).collect();

    json!({ "list": list, "totalCount": TOTAL_COUNT }).to_string()
}

fn entry_json(folder: &str, i: usize) -> Value {
    let stem = folder.rsplit('/').next().unwrap_or(folder);
    if i % FOLDER_EVERY == 0 {
        return json!({ "fileName": format!("{stem}-dir-{i:04}"), "type": "folder" });
    }

    let day = i % 28 + 1;
    json!({
        "fileName": format!("{stem}-{i:04}.{}", EXTENSIONS[i % EXTENSIONS.len()]),
        "type": "file",
        "size": (i as u64 * 7_919) % 5_000_000,
        "lastModified": format!("2024-03-{day:02}T12:00:00Z"),
    })
}

/// Fetches one page after the simulated latency.
pub async fn fetch_page(folder: String, page: usize) -> Result<FilePage, PageError> {
    TimeoutFuture::new(LATENCY_MS).await;
    FilePage::from_json(&page_json(&folder, page))
}

#[cfg(test)]
mod tests {
    use filegrid_core::{FileKind, PageController};

    use super::*;

    #[test]
    fn test_pages_decode() {
        let first = FilePage::from_json(&page_json("root", 0)).unwrap();
        assert_eq!(first.list.len(), PAGE_SIZE);
        assert_eq!(first.total_count, TOTAL_COUNT);
        assert_eq!(first.list[0].kind, FileKind::Folder);
        assert_eq!(first.list[1].file_name, "root-0001.png");
        assert_eq!(first.list[1].last_modified.as_deref(), Some("2024-03-02T12:00:00Z"));
    }

    #[test]
    fn test_last_page_is_partial() {
        let last = TOTAL_COUNT / PAGE_SIZE;
        let page = FilePage::from_json(&page_json("root", last)).unwrap();
        assert_eq!(page.list.len(), TOTAL_COUNT % PAGE_SIZE);

        let past = FilePage::from_json(&page_json("root", last + 1)).unwrap();
        assert!(past.list.is_empty());
    }

    #[test]
    fn test_pages_fill_controller() {
        let mut pager = PageController::new("root");
        pager.reset(FilePage::from_json(&page_json("root", 0)).unwrap());

        while let Some(request) = pager.begin_next_page() {
            let page = FilePage::from_json(&page_json("root", request.page)).unwrap();
            pager.complete(request, page).unwrap();
        }

        assert_eq!(pager.display_list().len(), TOTAL_COUNT);
        assert!(!pager.has_next_page());
    }
}
