//! Integration tests for application state and key-driven behavior

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use linkdex::ui::{dialog_body, DIALOG_TITLE, FOOTER_TEXT};
use linkdex::{App, AppMode, Catalogue, FocusField, Item};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

// =============================================================================
// Pane switching and filter keys
// =============================================================================

#[test]
fn test_starts_in_catalogue_pane() {
    let app = App::default();
    assert_eq!(app.state().mode, AppMode::Catalogue);
    assert_eq!(app.state().catalogue.len(), 5);
}

#[test]
fn test_search_and_backspace_edit_the_filter() {
    let mut app = App::default();
    type_text(&mut app, "cloud");
    assert_eq!(app.state().filter.search_text, "cloud");

    app.handle_key_event(key(KeyCode::Backspace));
    assert_eq!(app.state().filter.search_text, "clou");
}

#[test]
fn test_arrow_keys_move_the_rating_threshold() {
    let mut app = App::default();
    assert_eq!(app.state().filter.minimum_rating, None);

    app.handle_key_event(key(KeyCode::Right));
    app.handle_key_event(key(KeyCode::Right));
    assert_eq!(app.state().filter.minimum_rating, Some(2));

    // Raising never goes past 5
    for _ in 0..10 {
        app.handle_key_event(key(KeyCode::Right));
    }
    assert_eq!(app.state().filter.minimum_rating, Some(5));

    // Lowering past 1 returns to unset
    for _ in 0..10 {
        app.handle_key_event(key(KeyCode::Left));
    }
    assert_eq!(app.state().filter.minimum_rating, None);
}

#[test]
fn test_threshold_narrows_the_scroll_window() {
    let mut app = App::default();
    for _ in 0..4 {
        app.handle_key_event(key(KeyCode::Right));
    }
    // Three default items carry a rating of 4 or more
    assert_eq!(app.state().catalogue_scroll.total_items, 3);
}

#[test]
fn test_selection_clamps_when_filter_shrinks_the_list() {
    let mut app = App::default();
    for _ in 0..4 {
        app.handle_key_event(key(KeyCode::Down));
    }
    assert_eq!(app.state().catalogue_scroll.selected_index, 4);

    type_text(&mut app, "tensor");
    assert_eq!(app.state().catalogue_scroll.total_items, 1);
    assert_eq!(app.state().catalogue_scroll.selected_index, 0);
}

// =============================================================================
// Feedback pane focus and submission
// =============================================================================

#[test]
fn test_feedback_focus_traversal() {
    let mut app = App::default();
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.state().mode, AppMode::Feedback);
    assert_eq!(app.state().focus, FocusField::Name);

    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.state().focus, FocusField::Email);
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.state().focus, FocusField::Send);
    // Down saturates at Send
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.state().focus, FocusField::Send);

    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.state().focus, FocusField::Message);
}

#[test]
fn test_typing_updates_inline_errors_live() {
    let mut app = App::default();
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Down)); // to Email

    type_text(&mut app, "bad");
    assert!(app.state().form.email_error.is_some());

    type_text(&mut app, "@example.com");
    assert!(app.state().form.email_error.is_none());
}

#[test]
fn test_invalid_submit_keeps_dialog_closed() {
    let mut app = App::default();
    app.handle_key_event(key(KeyCode::Tab));
    // Jump straight to Send with empty fields
    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Down));
    }
    app.handle_key_event(key(KeyCode::Enter));

    assert!(!app.state().dialog_open());
    assert!(app.state().form.name_error.is_some());
    assert!(app.state().form.email_error.is_some());
}

#[test]
fn test_valid_submit_opens_and_enter_dismisses() {
    let mut app = App::default();
    app.handle_key_event(key(KeyCode::Tab));

    type_text(&mut app, "Alice");
    app.handle_key_event(key(KeyCode::Enter));
    type_text(&mut app, "alice@example.com");
    app.handle_key_event(key(KeyCode::Enter)); // to Message
    type_text(&mut app, "nice catalogue");
    app.handle_key_event(key(KeyCode::Enter)); // to Send
    app.handle_key_event(key(KeyCode::Enter)); // submit

    assert!(app.state().dialog_open());
    assert_eq!(
        dialog_body(&app.state().form.name),
        "Alice we will contact you and discuss your feedback shortly"
    );

    // While the dialog is open, other keys change nothing
    app.handle_key_event(key(KeyCode::Char('x')));
    assert!(app.state().dialog_open());
    assert_eq!(app.state().form.name, "Alice");

    app.handle_key_event(key(KeyCode::Enter));
    assert!(!app.state().dialog_open());
    assert_eq!(app.state().form.feedback, "nice catalogue");
}

// =============================================================================
// Esc cascade and help overlay
// =============================================================================

#[test]
fn test_esc_cascade_help_then_dialog_then_quit() {
    let mut app = App::default();
    app.handle_key_event(key(KeyCode::Tab));
    type_text(&mut app, "Alice");
    app.handle_key_event(key(KeyCode::Enter));
    type_text(&mut app, "alice@example.com");
    for _ in 0..2 {
        app.handle_key_event(key(KeyCode::Down));
    }
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.state().dialog_open());

    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.state().help_visible);

    // First Esc closes help, second closes the dialog, third quits
    assert!(!app.handle_key_event(key(KeyCode::Esc)));
    assert!(!app.state().help_visible);
    assert!(!app.handle_key_event(key(KeyCode::Esc)));
    assert!(!app.state().dialog_open());
    assert!(app.handle_key_event(key(KeyCode::Esc)));
}

#[test]
fn test_help_swallows_pane_input() {
    let mut app = App::default();
    app.handle_key_event(key(KeyCode::F(1)));
    type_text(&mut app, "azure");
    assert_eq!(app.state().filter.search_text, "");
}

// =============================================================================
// Custom catalogues and fixed UI text
// =============================================================================

#[test]
fn test_app_accepts_a_custom_catalogue() {
    let catalogue = Catalogue {
        items: vec![
            Item::new("Alpha", 1, "https://alpha.example/"),
            Item::new("Beta", 2, "https://beta.example/"),
        ],
    };
    let app = App::new(catalogue);
    assert_eq!(app.state().catalogue.len(), 2);
    assert_eq!(app.state().catalogue_scroll.total_items, 2);
}

#[test]
fn test_fixed_ui_text() {
    assert_eq!(DIALOG_TITLE, "Thanks for your feedback!");
    assert_eq!(FOOTER_TEXT, "Age restriction 13+");
}
