//! linkdex library
//!
//! Core functionality for the linkdex catalogue browser: the fixed rated
//! item list with its pure filter, the validated feedback form with its
//! submission state machine, and the TUI that drives both.

pub mod app;
pub mod catalogue;
pub mod cli;
pub mod components;
pub mod error;
pub mod feedback;
pub mod scrolling;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, FocusField};
pub use catalogue::{visible_items, Catalogue, FilterState, Item, MAX_RATING};
pub use error::{LinkdexError, Result};
pub use feedback::{
    can_submit, validate_email, validate_name, FeedbackForm, FieldError, SubmitState, NAME_MAX_LEN,
};
pub use scrolling::ScrollState;
