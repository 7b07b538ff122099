//! End-to-end windowing and pagination flow: render, report, fetch, append.

use std::cell::RefCell;
use std::rc::Rc;

use filegrid_core::{
    CellContent, CellKey, Device, FileKind, FilePage, FileRecord, GridStrategy, ItemId,
    LayoutInputs, ListStrategy, PageController, PageRequest, PaginationState, ScrollState,
    ViewConfig, VirtualizedDriver,
};

fn page(range: std::ops::Range<usize>, total_count: usize) -> FilePage {
    FilePage {
        list: range
            .map(|i| FileRecord {
                file_name: format!("f{i}"),
                kind: FileKind::File,
                size: Some(i as u64),
                last_modified: None,
            })
            .collect(),
        total_count,
    }
}

fn grid_inputs() -> LayoutInputs {
    LayoutInputs {
        viewport_width: 1000.0,
        view_config: ViewConfig::grid(200.0, 150.0),
        device: Device::DESKTOP,
    }
}

fn ids_of(pager: &RefCell<PageController>) -> Vec<ItemId> {
    pager.borrow().display_list().ids().to_vec()
}

#[test]
fn test_grid_scroll_fetch_append_cycle() {
    let pager = Rc::new(RefCell::new(PageController::new("root")));
    pager.borrow_mut().reset(page(0..20, 50));
    let requests: Rc<RefCell<Vec<PageRequest>>> = Rc::default();

    let loader = {
        let pager = Rc::clone(&pager);
        let requests = Rc::clone(&requests);
        move || {
            if let Some(request) = pager.borrow_mut().begin_next_page() {
                requests.borrow_mut().push(request);
            }
        }
    };
    let state = pager.borrow().state();
    let mut driver = VirtualizedDriver::new(GridStrategy, grid_inputs(), state, loader);
    assert_eq!(driver.layout().column_count, 4);
    assert_eq!(driver.layout().row_count, 5);

    // First render: the trailing slot (index 20) is within the threshold.
    let mut scroll = ScrollState::default();
    let window = driver.window(600.0, &scroll).unwrap();
    driver.cells(&window, &ids_of(&pager));
    let report = driver.on_items_rendered(&window).unwrap();
    assert!(report.issued());
    assert_eq!(requests.borrow().len(), 1);
    assert_eq!(requests.borrow()[0].page, 1);

    // While the page is in flight nothing else goes out.
    let state = pager.borrow().state();
    assert!(state.is_next_page_loading);
    assert!(!driver.update(grid_inputs(), state, |_| {}));
    scroll = scroll.scrolled_to(300.0);
    let window = driver.window(600.0, &scroll).unwrap();
    driver.cells(&window, &ids_of(&pager));
    driver.on_items_rendered(&window);
    assert_eq!(requests.borrow().len(), 1);

    // Page arrives: the layout grows and is published once.
    let before = ids_of(&pager);
    assert_eq!(CellKey::at(&before, 20).to_string(), "loading-file-20");
    let request = requests.borrow()[0];
    pager.borrow_mut().complete(request, page(20..40, 50)).unwrap();

    let after = ids_of(&pager);
    assert_eq!(CellKey::at(&after, 20).to_string(), "f20");
    assert_eq!(CellKey::at(&after, 40).to_string(), "loading-file-40");

    let mut published = None;
    let state = pager.borrow().state();
    assert!(driver.update(grid_inputs(), state, |layout| published = Some(layout)));
    assert_eq!(published.map(|l| l.row_count), Some(10));

    // Scrolling towards the end requests the next page.
    scroll = scroll.scrolled_to(1000.0);
    let window = driver.window(600.0, &scroll).unwrap();
    driver.cells(&window, &after);
    let report = driver.on_items_rendered(&window).unwrap();
    assert_eq!(report.range.visible_start, 24);
    assert_eq!(report.range.visible_stop, 39);
    assert!(report.issued());
    assert_eq!(requests.borrow().len(), 2);
    assert_eq!(requests.borrow()[1].page, 2);

    // Last page exhausts pagination; further scrolling fetches nothing.
    let request = requests.borrow()[1];
    pager.borrow_mut().complete(request, page(40..50, 50)).unwrap();
    let state = pager.borrow().state();
    assert!(!state.has_next_page);
    driver.update(grid_inputs(), state, |_| {});
    assert_eq!(driver.layout().row_count, 13);

    scroll = scroll.scrolled_to(1500.0);
    let window = driver.window(600.0, &scroll).unwrap();
    let cells = driver.cells(&window, &ids_of(&pager));
    let report = driver.on_items_rendered(&window).unwrap();
    assert!(!report.issued());
    assert_eq!(requests.borrow().len(), 2);

    // The final row holds two entries and two empty slots.
    let last_row: Vec<&CellContent> = cells
        .iter()
        .filter(|cell| cell.position.row == 12)
        .map(|cell| &cell.content)
        .collect();
    assert_eq!(last_row.len(), 4);
    assert!(matches!(last_row[1], CellContent::Entry { display_index: 49, .. }));
    assert_eq!(last_row[2], &CellContent::Empty);
}

#[test]
fn test_stuck_loading_flag_keeps_suppressing() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let state = PaginationState {
        has_next_page: true,
        is_next_page_loading: true,
        item_count: 30,
    };
    let inputs = LayoutInputs {
        viewport_width: 400.0,
        view_config: ViewConfig::list(30.0),
        device: Device::DESKTOP,
    };
    let mut driver = VirtualizedDriver::new(ListStrategy, inputs, state, move || *counter.borrow_mut() += 1);

    let mut scroll = ScrollState::default();
    for offset in [0.0, 200.0, 450.0, 600.0, 900.0, 600.0, 1000.0] {
        scroll = scroll.scrolled_to(offset);
        let window = driver.window(300.0, &scroll).unwrap();
        driver.on_items_rendered(&window);
        driver.reset_load_cache(true);
    }

    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_list_terminal_placeholder_and_exhaustion() {
    let ids: Vec<ItemId> = ["a", "b", "c"].into_iter().map(ItemId::from).collect();
    let inputs = LayoutInputs {
        viewport_width: 400.0,
        view_config: ViewConfig::list(30.0),
        device: Device::DESKTOP,
    };
    let more = PaginationState {
        has_next_page: true,
        is_next_page_loading: false,
        item_count: 3,
    };
    let mut driver = VirtualizedDriver::new(ListStrategy, inputs, more, || {});
    assert_eq!(driver.pagination().effective_item_count(), 4);

    let window = driver.window(300.0, &ScrollState::default()).unwrap();
    let cells = driver.cells(&window, &ids);
    assert_eq!(cells.last().map(|c| &c.content), Some(&CellContent::Loading));

    let done = PaginationState {
        has_next_page: false,
        ..more
    };
    assert!(driver.update(inputs, done, |_| {}));
    let window = driver.window(300.0, &ScrollState::default()).unwrap();
    let cells = driver.cells(&window, &ids);
    assert_eq!(cells.len(), 3);
    assert!(cells.iter().all(|c| matches!(c.content, CellContent::Entry { .. })));
}

#[test]
fn test_overlapping_page_resolves_loading_row() {
    let pager = Rc::new(RefCell::new(PageController::new("root")));
    pager.borrow_mut().reset(page(0..3, 6));
    let requests: Rc<RefCell<Vec<PageRequest>>> = Rc::default();

    let loader = {
        let pager = Rc::clone(&pager);
        let requests = Rc::clone(&requests);
        move || {
            if let Some(request) = pager.borrow_mut().begin_next_page() {
                requests.borrow_mut().push(request);
            }
        }
    };
    let inputs = LayoutInputs {
        viewport_width: 400.0,
        view_config: ViewConfig::list(30.0),
        device: Device::DESKTOP,
    };
    let state = pager.borrow().state();
    let mut driver = VirtualizedDriver::new(ListStrategy, inputs, state, loader);

    let window = driver.window(300.0, &ScrollState::default()).unwrap();
    driver.cells(&window, &ids_of(&pager));
    assert!(driver.on_items_rendered(&window).unwrap().issued());

    // The server answers with entries that are already listed.
    let request = requests.borrow()[0];
    assert_eq!(pager.borrow_mut().complete(request, page(1..3, 6)).unwrap(), 0);

    let state = pager.borrow().state();
    assert!(!state.has_next_page);
    assert!(driver.update(inputs, state, |_| {}));

    let mut scroll = ScrollState::default();
    for offset in [0.0, 30.0, 60.0, 0.0] {
        scroll = scroll.scrolled_to(offset);
        let window = driver.window(300.0, &scroll).unwrap();
        let cells = driver.cells(&window, &ids_of(&pager));
        assert!(cells.iter().all(|c| c.content != CellContent::Loading));
        driver.on_items_rendered(&window);
    }
    assert_eq!(requests.borrow().len(), 1);
}
