//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, FocusField)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, FocusField};

use crate::catalogue::{visible_items, Catalogue};
use crate::error::Result;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
}

impl App {
    /// Create a new application instance around a catalogue
    pub fn new(catalogue: Catalogue) -> Self {
        info!(items = catalogue.len(), "creating app");
        Self {
            state: AppState::new(catalogue),
            ui_renderer: UiRenderer::new(),
        }
    }

    /// Read-only view of the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        info!("starting main application loop");

        loop {
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(_, height) => {
                        self.handle_resize(height);
                    }
                    _ => {}
                }
            }

            terminal.draw(|f| {
                self.ui_renderer.render(f, &self.state);
            })?;
        }

        Ok(())
    }

    /// Recompute the list window after a terminal resize
    fn handle_resize(&mut self, height: u16) {
        // Header, search box, threshold line, borders, and nav bar are fixed
        let visible = height.saturating_sub(12).max(1) as usize;
        self.state.catalogue_scroll.visible_items = visible;
    }

    /// Handle keyboard input events; returns true when exit is requested
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // Ctrl+Q always quits
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('q')
        {
            return true;
        }

        // Help overlay swallows everything; F1 or Esc dismisses it
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::F(1) | KeyCode::Esc) {
                self.state.help_visible = false;
            }
            return false;
        }

        if key_event.code == KeyCode::F(1) {
            self.state.help_visible = true;
            return false;
        }

        // The confirmation dialog is modal: Enter or Esc dismisses, values stay
        if self.state.dialog_open() {
            if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.form.dismiss();
                self.state.status_message = "Feedback acknowledged".to_string();
                debug!("confirmation dialog dismissed");
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.state.mode = match self.state.mode {
                    AppMode::Catalogue => AppMode::Feedback,
                    AppMode::Feedback => AppMode::Catalogue,
                };
                debug!(mode = ?self.state.mode, "pane switched");
            }
            _ => match self.state.mode {
                AppMode::Catalogue => self.handle_catalogue_key(key_event),
                AppMode::Feedback => self.handle_feedback_key(key_event),
            },
        }

        false
    }

    /// Key handling for the catalogue pane
    fn handle_catalogue_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char(c) => {
                self.state.filter.search_text.push(c);
                self.sync_catalogue_scroll();
            }
            KeyCode::Backspace => {
                self.state.filter.search_text.pop();
                self.sync_catalogue_scroll();
            }
            KeyCode::Right => {
                self.state.filter.raise_minimum();
                self.sync_catalogue_scroll();
            }
            KeyCode::Left => {
                self.state.filter.lower_minimum();
                self.sync_catalogue_scroll();
            }
            KeyCode::Up => self.state.catalogue_scroll.move_up(),
            KeyCode::Down => self.state.catalogue_scroll.move_down(),
            KeyCode::PageUp => self.state.catalogue_scroll.page_up(),
            KeyCode::PageDown => self.state.catalogue_scroll.page_down(),
            _ => {}
        }
    }

    /// Clamp the scroll state to the current visible subset
    fn sync_catalogue_scroll(&mut self) {
        let count = visible_items(
            &self.state.catalogue.items,
            &self.state.filter.search_text,
            self.state.filter.effective_minimum(),
        )
        .len();
        self.state.catalogue_scroll.set_total(count);
    }

    /// Key handling for the feedback pane
    fn handle_feedback_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up => {
                self.state.focus = self.state.focus.previous();
            }
            KeyCode::Down => {
                self.state.focus = self.state.focus.next();
            }
            KeyCode::Enter => {
                if self.state.focus == FocusField::Send {
                    let submitted = self.state.form.submit();
                    info!(submitted, "feedback submit attempt");
                    self.state.status_message = if submitted {
                        "Feedback submitted".to_string()
                    } else {
                        "Please fix the highlighted fields".to_string()
                    };
                } else {
                    self.state.focus = self.state.focus.next();
                }
            }
            KeyCode::Char(c) => match self.state.focus {
                FocusField::Name => {
                    self.state.form.name.push(c);
                    self.state.form.touch_name();
                }
                FocusField::Email => {
                    self.state.form.email.push(c);
                    self.state.form.touch_email();
                }
                FocusField::Message => {
                    self.state.form.feedback.push(c);
                }
                FocusField::Send => {}
            },
            KeyCode::Backspace => match self.state.focus {
                FocusField::Name => {
                    self.state.form.name.pop();
                    self.state.form.touch_name();
                }
                FocusField::Email => {
                    self.state.form.email.pop();
                    self.state.form.touch_email();
                }
                FocusField::Message => {
                    self.state.form.feedback.pop();
                }
                FocusField::Send => {}
            },
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Catalogue::default())
    }
}
