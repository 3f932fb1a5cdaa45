//! Help overlay component
//!
//! Displays the keybinding reference in a floating window.

use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpOverlay {
    /// Create a new help overlay
    pub fn new() -> Self {
        Self {
            content: Self::build_content(),
        }
    }

    /// Build the help content
    fn build_content() -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(section("Global"));
        lines.push(binding("Tab", "Switch between Catalogue and Feedback"));
        lines.push(binding("F1", "Toggle this help"));
        lines.push(binding("Esc", "Close help/dialog, otherwise quit"));
        lines.push(binding("Ctrl+Q", "Quit immediately"));
        lines.push(Line::from(""));

        lines.push(section("Catalogue"));
        lines.push(binding("a-z …", "Edit the name search"));
        lines.push(binding("Backspace", "Delete from the search"));
        lines.push(binding("←/→", "Lower/raise the minimum rating"));
        lines.push(binding("↑/↓", "Move the selection"));
        lines.push(binding("PgUp/PgDn", "Page through the list"));
        lines.push(Line::from(""));

        lines.push(section("Feedback"));
        lines.push(binding("↑/↓", "Move between fields"));
        lines.push(binding("Enter", "Next field, or submit on Send"));
        lines.push(binding("a-z …", "Edit the focused field"));

        lines
    }

    /// Render the help overlay centered in the parent area
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let width = 50.min(parent.width);
        let height = (self.content.len() as u16 + 4).min(parent.height);
        let x = parent.x + (parent.width.saturating_sub(width)) / 2;
        let y = parent.y + (parent.height.saturating_sub(height)) / 2;
        let area = Rect::new(x, y, width, height);

        f.render_widget(Clear, area);

        let overlay = Paragraph::new(self.content.clone())
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_style(Styles::title())
                    .border_style(Styles::border_active())
                    .style(Styles::panel_bg()),
            );
        f.render_widget(overlay, area);
    }
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}  ", title),
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD),
    ))
}

fn binding(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(
            format!("{:<10}", key),
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(description, Styles::text()),
    ])
}
