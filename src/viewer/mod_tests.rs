use super::*;

fn loaded(pages: u32) -> ViewerState {
    ViewerState::open().document_loaded(pages)
}

#[test]
fn test_open_resets_page_and_zoom() {
    let state = loaded(8).go_to(4).zoom_in().apply(ViewerAction::Open);
    assert_eq!(state, ViewerState::open());
    assert_eq!(state.current_page, 1);
    assert_eq!(state.zoom, 1.0);
    assert!(state.loading);
}

#[test]
fn test_document_loaded_sets_page_count() {
    let state = loaded(8);
    assert_eq!(state.total_pages, 8);
    assert_eq!(state.current_page, 1);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn test_go_to_ignores_out_of_range_pages() {
    let state = loaded(8).go_to(3);
    assert_eq!(state.current_page, 3);
    assert_eq!(state.clone().go_to(0).current_page, 3);
    assert_eq!(state.clone().go_to(9).current_page, 3);
    assert_eq!(state.go_to(8).current_page, 8);
}

#[test]
fn test_next_and_previous_stop_at_bounds() {
    let state = loaded(2);
    assert!(!state.can_go_previous());
    let state = state.previous();
    assert_eq!(state.current_page, 1);

    let state = state.next();
    assert_eq!(state.current_page, 2);
    assert!(!state.can_go_next());
    assert_eq!(state.next().current_page, 2);
}

#[test]
fn test_navigation_before_load_is_ignored() {
    let state = ViewerState::open().next();
    assert_eq!(state.current_page, 1);
}

#[test]
fn test_zoom_is_clamped() {
    let mut state = loaded(1);
    for _ in 0..20 {
        state = state.zoom_in();
    }
    assert_eq!(state.zoom, 3.0);
    assert_eq!(state.zoom_percent(), 300);

    for _ in 0..20 {
        state = state.zoom_out();
    }
    assert_eq!(state.zoom, 0.5);
    assert_eq!(state.zoom_percent(), 50);

    assert_eq!(state.zoom_in().zoom_percent(), 75);
}

#[test]
fn test_render_failure_forwards_message() {
    let state = ViewerState::open().apply(ViewerAction::DocumentFailed {
        message: "Invalid PDF structure".to_string(),
    });
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to load PDF: Invalid PDF structure")
    );

    let retried = state.apply(ViewerAction::Retry);
    assert!(retried.loading);
    assert!(retried.error.is_none());
}

#[test]
fn test_page_buttons_with_ellipsis() {
    let buttons = loaded(8).go_to(2).page_buttons();
    assert_eq!(buttons.len(), 6);
    assert_eq!(
        buttons[1],
        PageButton::Page {
            number: 2,
            current: true
        }
    );
    assert_eq!(buttons[5], PageButton::Ellipsis);

    let short = loaded(3).page_buttons();
    assert_eq!(short.len(), 3);
    assert!(!short.contains(&PageButton::Ellipsis));
}

#[test]
fn test_page_width() {
    assert_eq!(page_width(1200), 800);
    assert_eq!(page_width(600), 560);
    assert_eq!(page_width(20), 0);
}

#[test]
fn test_action_wire_format() {
    let action: ViewerAction = serde_json::from_str(r#"{"type":"go_to","page":3}"#).unwrap();
    assert_eq!(action, ViewerAction::GoTo { page: 3 });

    let action: ViewerAction = serde_json::from_str(r#"{"type":"zoom_in"}"#).unwrap();
    assert_eq!(action, ViewerAction::ZoomIn);
}

#[test]
fn test_sanitized_pulls_state_into_bounds() {
    let state = ViewerState {
        current_page: 99,
        total_pages: 8,
        zoom: 9.0,
        loading: false,
        error: None,
    }
    .sanitized();
    assert_eq!(state.current_page, 8);
    assert_eq!(state.zoom, 3.0);

    let state = ViewerState {
        current_page: 0,
        total_pages: 0,
        zoom: f64::NAN,
        loading: true,
        error: None,
    }
    .sanitized();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.zoom, 1.0);

    let tiny = ViewerState {
        zoom: 0.1,
        ..loaded(4)
    }
    .sanitized();
    assert_eq!(tiny.zoom, 0.5);
}
