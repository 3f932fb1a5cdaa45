//! Application state definitions
//!
//! Contains all state-related types for the application including AppState,
//! AppMode, and the feedback-form focus type.

use crate::catalogue::{Catalogue, FilterState};
use crate::feedback::FeedbackForm;
use crate::scrolling::ScrollState;
use strum::EnumIter;

/// Application operating modes (the two panes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Catalogue pane - filtered link list
    Catalogue,
    /// Feedback pane - validated form
    Feedback,
}

/// Focusable fields of the feedback pane, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FocusField {
    Name,
    Email,
    Message,
    Send,
}

impl FocusField {
    /// Next field in traversal order, stopping at Send
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Send,
            Self::Send => Self::Send,
        }
    }

    /// Previous field in traversal order, stopping at Name
    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Name,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
            Self::Send => Self::Message,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// The fixed ordered item list
    pub catalogue: Catalogue,
    /// Filter inputs for the catalogue pane
    pub filter: FilterState,
    /// Scroll state for the visible catalogue subset
    pub catalogue_scroll: ScrollState,
    /// Feedback form values, errors, and submission state
    pub form: FeedbackForm,
    /// Currently focused feedback field
    pub focus: FocusField,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
}

impl AppState {
    /// Build the initial state around a catalogue
    pub fn new(catalogue: Catalogue) -> Self {
        let total = catalogue.len();
        Self {
            mode: AppMode::Catalogue,
            catalogue,
            filter: FilterState::default(),
            catalogue_scroll: ScrollState::new(total, 10),
            form: FeedbackForm::new(),
            focus: FocusField::Name,
            help_visible: false,
            status_message: "Welcome to linkdex".to_string(),
        }
    }

    /// Whether the confirmation dialog is open
    pub fn dialog_open(&self) -> bool {
        self.form.dialog_open()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalogue::default())
    }
}
