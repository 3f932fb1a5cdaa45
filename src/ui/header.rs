//! Header and common widget rendering
//!
//! Contains the ASCII art header, title rendering, the bottom navigation
//! bar, and the footer line.

use crate::app::{AppMode, AppState};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Footer text shown under the catalogue
pub const FOOTER_TEXT: &str = "Age restriction 13+";

/// Header renderer containing the ASCII art header
pub struct HeaderRenderer {
    /// ASCII art header lines
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the ASCII art header
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    /// Create the ASCII art header
    fn create_header() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "█   █ █▄ █ █▄▀ █▀▄ ██▀ ▀▄▀",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "█▄▄ █ █ ▀█ █ █ █▄▀ █▄▄ █ █",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "rated links, filtered live",
                Style::default().fg(Colors::FG_MUTED),
            )]),
        ]
    }
}

/// Render the footer line
pub fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER_TEXT)
        .alignment(Alignment::Center)
        .style(Styles::text_muted());
    f.render_widget(footer, area);
}

/// Render the navigation bar with mode-specific key hints
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let hints: &[(&str, &str)] = if state.dialog_open() {
        &[("Enter/Esc", "Close")]
    } else if state.help_visible {
        &[("F1/Esc", "Close help")]
    } else {
        match state.mode {
            AppMode::Catalogue => &[
                ("Type", "Search"),
                ("←/→", "Min rating"),
                ("↑/↓", "Select"),
                ("Tab", "Feedback"),
                ("F1", "Help"),
                ("Esc", "Quit"),
            ],
            AppMode::Feedback => &[
                ("↑/↓", "Field"),
                ("Enter", "Next/Send"),
                ("Tab", "Catalogue"),
                ("F1", "Help"),
                ("Esc", "Quit"),
            ],
        }
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Styles::nav_hint()));
        }
        spans.push(Span::styled(*key, Styles::focused()));
        spans.push(Span::styled(format!(" {}", action), Styles::nav_hint()));
    }

    let nav_bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(nav_bar, area);
}
