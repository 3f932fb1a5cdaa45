//! Dialog rendering module
//!
//! Renders the confirmation dialog shown after a successful feedback
//! submission.

use crate::app::AppState;
use crate::theme::{Styles, UiConstants};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Title of the confirmation dialog
pub const DIALOG_TITLE: &str = "Thanks for your feedback!";

/// Body of the confirmation dialog for a submitted name
pub fn dialog_body(name: &str) -> String {
    format!("{} we will contact you and discuss your feedback shortly", name)
}

/// Render the thanks-confirmation dialog over the current frame
pub fn render_thanks_dialog(f: &mut Frame, state: &AppState) {
    let area = centered_rect(f.area());

    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(dialog_body(&state.form.name), Styles::text())),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to close",
            Styles::text_muted(),
        )),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", DIALOG_TITLE))
                .title_style(Styles::title())
                .border_style(Styles::border_active())
                .style(Styles::panel_bg()),
        );
    f.render_widget(dialog, area);
}

/// Centered dialog rectangle within the parent area
fn centered_rect(parent: Rect) -> Rect {
    let width = (parent.width * UiConstants::DIALOG_WIDTH_PCT / 100)
        .max(UiConstants::DIALOG_MIN_WIDTH)
        .min(parent.width);
    let height = 7.min(parent.height);
    let x = parent.x + (parent.width.saturating_sub(width)) / 2;
    let y = parent.y + (parent.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_body_contains_name() {
        assert_eq!(
            dialog_body("Alice"),
            "Alice we will contact you and discuss your feedback shortly"
        );
    }

    #[test]
    fn test_centered_rect_fits_parent() {
        let parent = Rect::new(0, 0, 100, 30);
        let rect = centered_rect(parent);
        assert!(rect.x + rect.width <= 100);
        assert!(rect.y + rect.height <= 30);
    }
}
