//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Header, title, nav bar, and footer rendering
//! - `screens` - Catalogue and feedback pane rendering
//! - `dialogs` - Confirmation dialog rendering

mod dialogs;
mod header;
pub mod screens;

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

// Re-export for external use
pub use dialogs::{dialog_body, DIALOG_TITLE};
pub use header::{HeaderRenderer, FOOTER_TEXT};

/// UI renderer for the application
///
/// Main entry point for UI rendering; delegates to the submodules per pane
/// and layers the dialog and help overlays on top.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        match state.mode {
            AppMode::Catalogue => {
                screens::render_catalogue_in_area(f, state, content_area, &self.header);
            }
            AppMode::Feedback => {
                screens::render_feedback_in_area(f, state, content_area, &self.header);
            }
        }

        header::render_nav_bar(f, state, nav_bar_area);

        // Confirmation dialog on top of the pane content
        if state.dialog_open() {
            dialogs::render_thanks_dialog(f, state);
        }

        // Help overlay on top of everything
        if state.help_visible {
            HelpOverlay::new().render(f, f.area());
        }
    }
}
