//! Page controller: the pagination collaborator that owns the display list.
//!
//! Tracks which page was loaded last, whether more data exists and whether a
//! request is in flight. Completions are matched against the pending request
//! so a superseded response is discarded instead of appended.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ROOT_FOLDER_ID;
use crate::display_list::{DisplayList, ItemId};
use crate::error::PageError;
use crate::pagination::PaginationState;

// ============================================================================
// Wire Model
// ============================================================================

/// Kind of a listed entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Folder,
    #[default]
    #[serde(other)]
    File,
}

/// One entry of a page payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub file_name: String,
    #[serde(rename = "type", default)]
    pub kind: FileKind,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

impl FileRecord {
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Folder
    }

    /// Id of this entry when listed inside `folder`.
    pub fn item_id(&self, folder: &str) -> ItemId {
        if folder == ROOT_FOLDER_ID {
            ItemId::from(self.file_name.as_str())
        } else {
            ItemId::from(format!("{}/{}", folder, self.file_name))
        }
    }
}

/// A page of entries plus the size of the whole collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePage {
    pub list: Vec<FileRecord>,
    pub total_count: usize,
}

impl FilePage {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// PageController
// ============================================================================

/// An issued next-page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub id: u64,
    /// Zero-based page number to fetch.
    pub page: usize,
}

/// Pagination state for one folder listing.
#[derive(Clone, Debug)]
pub struct PageController {
    folder: String,
    list: DisplayList,
    records: HashMap<ItemId, FileRecord>,
    total_count: usize,
    last_page: usize,
    pending: Option<PageRequest>,
    next_request_id: u64,
    exhausted: bool,
}

impl PageController {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            list: DisplayList::new(),
            records: HashMap::new(),
            total_count: 0,
            last_page: 0,
            pending: None,
            next_request_id: 0,
            exhausted: false,
        }
    }

    /// Switches to another folder and clears the listing.
    ///
    /// Request ids keep counting up, so a response still in flight for the
    /// previous folder can never match a request issued for this one.
    pub fn open(&mut self, folder: impl Into<String>) {
        self.folder = folder.into();
        self.list.reset(std::iter::empty());
        self.records.clear();
        self.total_count = 0;
        self.last_page = 0;
        self.pending = None;
        self.exhausted = false;
    }

    /// Installs the first page, dropping anything loaded before.
    ///
    /// A request still in flight becomes stale.
    pub fn reset(&mut self, first: FilePage) {
        self.list.reset(std::iter::empty());
        self.records.clear();
        self.last_page = 0;
        self.pending = None;
        self.exhausted = false;
        self.apply(first);
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    pub fn record(&self, id: &ItemId) -> Option<&FileRecord> {
        self.records.get(id)
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// More entries are expected. A page that adds nothing new ends the
    /// listing even if `total_count` claims otherwise.
    pub fn has_next_page(&self) -> bool {
        !self.exhausted && self.list.len() < self.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Snapshot handed to the render driver.
    pub fn state(&self) -> PaginationState {
        PaginationState {
            has_next_page: self.has_next_page(),
            is_next_page_loading: self.is_loading(),
            item_count: self.list.len(),
        }
    }

    /// Starts loading the next page.
    ///
    /// Returns `None` while a request is in flight or once everything is
    /// loaded.
    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if self.pending.is_some() || !self.has_next_page() {
            return None;
        }

        let request = PageRequest {
            id: self.next_request_id,
            page: self.last_page + 1,
        };
        self.next_request_id += 1;
        self.pending = Some(request);
        debug!(page = request.page, id = request.id, "page request started");
        Some(request)
    }

    /// Appends a fetched page. Returns how many new ids were added.
    pub fn complete(&mut self, request: PageRequest, page: FilePage) -> Result<usize, PageError> {
        self.take_pending(request)?;
        self.last_page = request.page;
        let appended = self.apply(page);
        if appended == 0 && self.list.len() < self.total_count {
            self.exhausted = true;
            debug!(
                page = request.page,
                loaded = self.list.len(),
                total = self.total_count,
                "page added nothing new, listing ends short"
            );
        }
        debug!(
            page = request.page,
            appended,
            loaded = self.list.len(),
            total = self.total_count,
            "page appended"
        );
        Ok(appended)
    }

    /// Abandons a failed request so it can be retried.
    pub fn fail(&mut self, request: PageRequest) -> Result<(), PageError> {
        self.take_pending(request)?;
        debug!(page = request.page, "page request failed");
        Ok(())
    }

    fn take_pending(&mut self, request: PageRequest) -> Result<(), PageError> {
        match self.pending {
            None => Err(PageError::NoPendingRequest),
            Some(pending) if pending.id != request.id => Err(PageError::StaleRequest {
                received: request.id,
                pending: pending.id,
            }),
            Some(_) => {
                self.pending = None;
                Ok(())
            }
        }
    }

    fn apply(&mut self, page: FilePage) -> usize {
        self.total_count = page.total_count;
        let mut ids = Vec::with_capacity(page.list.len());
        for record in page.list {
            let id = record.item_id(&self.folder);
            self.records.insert(id.clone(), record);
            ids.push(id);
        }
        self.list.append_page(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(names: &[&str], total_count: usize) -> FilePage {
        FilePage {
            list: names
                .iter()
                .map(|name| FileRecord {
                    file_name: name.to_string(),
                    kind: FileKind::File,
                    size: None,
                    last_modified: None,
                })
                .collect(),
            total_count,
        }
    }

    // =========================================================================
    // Wire Model Tests
    // =========================================================================

    #[test]
    fn test_decode_page() {
        let json = r#"{
            "list": [
                {"fileName": "docs", "type": "folder"},
                {"fileName": "a.png", "type": "image", "size": 1024, "lastModified": "2024-01-01"}
            ],
            "totalCount": 40
        }"#;
        let page = FilePage::from_json(json).unwrap();

        assert_eq!(page.total_count, 40);
        assert!(page.list[0].is_dir());
        assert_eq!(page.list[1].kind, FileKind::File);
        assert_eq!(page.list[1].size, Some(1024));
    }

    #[test]
    fn test_decode_error() {
        assert!(matches!(FilePage::from_json("{\"list\": 3}"), Err(PageError::Decode(_))));
    }

    #[test]
    fn test_item_id_prefix() {
        let listing = page(&["a.txt"], 1);
        let record = &listing.list[0];
        assert_eq!(record.item_id("root").as_str(), "a.txt");
        assert_eq!(record.item_id("docs/img").as_str(), "docs/img/a.txt");
    }

    // =========================================================================
    // Controller Tests
    // =========================================================================

    #[test]
    fn test_first_page_state() {
        let mut pager = PageController::new("root");
        pager.reset(page(&["a", "b"], 4));

        let state = pager.state();
        assert!(state.has_next_page);
        assert!(!state.is_next_page_loading);
        assert_eq!(state.item_count, 2);
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut pager = PageController::new("root");
        pager.reset(page(&["a"], 3));

        let request = pager.begin_next_page().unwrap();
        assert_eq!(request.page, 1);
        assert!(pager.state().is_next_page_loading);
        assert_eq!(pager.begin_next_page(), None);
    }

    #[test]
    fn test_complete_appends_and_exhausts() {
        let mut pager = PageController::new("root");
        pager.reset(page(&["a"], 3));

        let request = pager.begin_next_page().unwrap();
        assert_eq!(pager.complete(request, page(&["a", "b", "c"], 3)).unwrap(), 2);

        assert!(!pager.has_next_page());
        assert!(!pager.is_loading());
        assert_eq!(pager.begin_next_page(), None);
        assert_eq!(pager.display_list().len(), 3);
    }

    #[test]
    fn test_stale_completion_rejected() {
        let mut pager = PageController::new("root");
        pager.reset(page(&["a"], 10));
        let old = pager.begin_next_page().unwrap();

        pager.reset(page(&["x"], 10));
        assert!(matches!(pager.complete(old, page(&["b"], 10)), Err(PageError::NoPendingRequest)));

        let current = pager.begin_next_page().unwrap();
        assert!(matches!(
            pager.complete(old, page(&["b"], 10)),
            Err(PageError::StaleRequest { .. })
        ));
        assert_eq!(pager.complete(current, page(&["y"], 10)).unwrap(), 1);
        assert!(!pager.display_list().contains("b"));
    }

    #[test]
    fn test_open_keeps_request_ids_unique() {
        let mut pager = PageController::new("root");
        pager.reset(page(&["a", "b"], 10));
        let old = pager.begin_next_page().unwrap();

        pager.open("x");
        assert_eq!(pager.folder(), "x");
        assert!(!pager.is_loading());
        assert!(pager.display_list().is_empty());

        pager.reset(page(&["c", "d"], 10));
        let current = pager.begin_next_page().unwrap();
        assert_ne!(current.id, old.id);
        assert!(matches!(
            pager.complete(old, page(&["a", "b"], 10)),
            Err(PageError::StaleRequest { .. })
        ));

        let names: Vec<&str> = pager.display_list().iter().map(ItemId::as_str).collect();
        assert_eq!(names, ["x/c", "x/d"]);
        assert!(pager.is_loading());
    }

    #[test]
    fn test_overlapping_page_ends_listing() {
        let mut pager = PageController::new("root");
        pager.reset(page(&["a", "b", "c"], 6));

        let request = pager.begin_next_page().unwrap();
        assert_eq!(pager.complete(request, page(&["b", "c"], 6)).unwrap(), 0);

        let state = pager.state();
        assert!(!state.has_next_page);
        assert!(!state.is_next_page_loading);
        assert_eq!(state.effective_item_count(), 3);
        assert_eq!(pager.begin_next_page(), None);
    }

    #[test]
    fn test_empty_page_ends_listing() {
        let mut pager = PageController::new("root");
        pager.reset(page(&["a"], 5));

        let request = pager.begin_next_page().unwrap();
        pager.complete(request, page(&[], 5)).unwrap();
        assert!(!pager.has_next_page());

        // A fresh first page starts over.
        pager.reset(page(&["a"], 5));
        assert!(pager.has_next_page());
    }

    #[test]
    fn test_fail_allows_retry() {
        let mut pager = PageController::new("root");
        pager.reset(page(&["a"], 2));

        let request = pager.begin_next_page().unwrap();
        pager.fail(request).unwrap();
        assert!(!pager.is_loading());

        let retry = pager.begin_next_page().unwrap();
        assert_eq!(retry.page, 1);
        assert_ne!(retry.id, request.id);
    }

    #[test]
    fn test_duplicate_updates_record_without_append() {
        let mut pager = PageController::new("root");
        pager.reset(page(&["a"], 3));

        let request = pager.begin_next_page().unwrap();
        let mut next = page(&["a"], 3);
        next.list[0].size = Some(7);
        assert_eq!(pager.complete(request, next).unwrap(), 0);

        assert_eq!(pager.record(&ItemId::from("a")).unwrap().size, Some(7));
        assert_eq!(pager.display_list().len(), 1);
    }
}
