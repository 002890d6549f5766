//! Lightbox keyboard scenarios driven through the pure model
//!
//! Mirrors what the page does: map the key, then apply the matching
//! selection change or focus-trap decision.

use koyo_common::{
    filter_images, focus_step, wrap_target, FocusStep, ImageItem, ImageLoad, LightboxCommand,
    LightboxRequest, LoadStatus, RequestQueue, Selection,
};

fn abc() -> Vec<ImageItem> {
    vec![
        ImageItem::new("/a.jpg", "A"),
        ImageItem::new("/b.jpg", "B"),
        ImageItem::new("/c.jpg", "C"),
    ]
}

fn apply(selection: Selection, request: LightboxRequest, len: usize) -> Selection {
    match request {
        LightboxRequest::Close => selection.close(),
        LightboxRequest::Prev => selection.prev(len),
        LightboxRequest::Next => selection.next(len),
    }
}

fn press(selection: Selection, key: &str, len: usize) -> Selection {
    match LightboxCommand::from_key(key, false) {
        Some(LightboxCommand::Request(request)) => apply(selection, request, len),
        Some(LightboxCommand::Tab(_)) | None => selection,
    }
}

#[test]
fn test_arrow_right_advances_and_wraps() {
    let images = abc();
    let len = images.len();
    let mut s = Selection::open_at(0, len).unwrap();

    s = press(s, "ArrowRight", len);
    assert_eq!(s, Selection::OpenAt(1));
    assert_eq!(images[s.index().unwrap()].description, "B");

    s = press(s, "ArrowRight", len);
    s = press(s, "ArrowRight", len);
    assert_eq!(s, Selection::OpenAt(0));
}

#[test]
fn test_arrow_left_wraps_backwards() {
    let len = abc().len();
    let s = press(Selection::open_at(0, len).unwrap(), "ArrowLeft", len);
    assert_eq!(s, Selection::OpenAt(2));
}

#[test]
fn test_escape_closes() {
    let len = abc().len();
    let s = press(Selection::open_at(1, len).unwrap(), "Escape", len);
    assert_eq!(s, Selection::Closed);
}

#[test]
fn test_tab_on_last_control_moves_to_first() {
    // close, prev, content, next
    let controls = 4;
    let Some(LightboxCommand::Tab(direction)) = LightboxCommand::from_key("Tab", false) else {
        panic!("Tab should map to a focus trap command");
    };
    assert_eq!(wrap_target(controls, Some(controls - 1), direction), Some(0));
}

#[test]
fn test_navigation_ignores_search_filter() {
    let images = abc();
    let len = images.len();
    // Only "C" is visible, but navigation still walks the whole sequence
    let visible = filter_images(&images, "c");
    assert_eq!(visible.len(), 1);
    let (index, _) = visible[0];

    let s = Selection::open_at(index, len).unwrap();
    assert_eq!(s.next(len), Selection::OpenAt(0));
}

#[test]
fn test_changing_image_resets_load_state() {
    let len = abc().len();
    let mut load = ImageLoad::default();
    let s = Selection::open_at(0, len).unwrap();
    load.mark_loaded(s.index().unwrap());
    assert_eq!(load.status_for(0), LoadStatus::Loaded);

    let s = s.next(len);
    assert_eq!(load.status_for(s.index().unwrap()), LoadStatus::Loading);
}

#[test]
fn test_quick_presses_are_all_applied() {
    let len = abc().len();
    let mut queue = RequestQueue::default();
    // two ArrowRight presses before the UI gets to dispatch
    for _ in 0..2 {
        let command = LightboxCommand::from_key("ArrowRight", false);
        if let Some(LightboxCommand::Request(request)) = command {
            queue.push(request);
        }
    }

    let s = queue
        .drain()
        .into_iter()
        .fold(Selection::open_at(0, len).unwrap(), |s, r| apply(s, r, len));
    assert_eq!(s, Selection::OpenAt(2));
}

#[test]
fn test_reopening_same_image_shows_placeholder() {
    let len = abc().len();
    let mut load = ImageLoad::default();
    let s = Selection::open_at(2, len).unwrap();
    load.mark_loaded(2);

    // Escape, then the same thumbnail again
    let s = press(s, "Escape", len);
    assert_eq!(s, Selection::Closed);
    load.reset();

    let s = Selection::open_at(2, len).unwrap();
    assert_eq!(load.status_for(s.index().unwrap()), LoadStatus::Loading);
}

#[test]
fn test_prior_focus_captured_once_per_open() {
    let len = abc().len();
    let mut attached = false;
    let mut captures = 0;
    let mut s = Selection::open_at(0, len).unwrap();

    for key in ["ArrowRight", "ArrowRight", "Escape"] {
        match focus_step(s, attached) {
            FocusStep::Attach => {
                captures += 1;
                attached = true;
            }
            FocusStep::Detach => attached = false,
            FocusStep::Refocus | FocusStep::Idle => {}
        }
        s = press(s, key, len);
    }

    assert_eq!(captures, 1);
    assert_eq!(focus_step(s, attached), FocusStep::Detach);
}
