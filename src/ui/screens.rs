//! Pane rendering module
//!
//! Renders the two panes: the filtered catalogue list and the feedback form
//! with inline validation errors.

use super::header::HeaderRenderer;
use crate::app::{AppMode, AppState, FocusField};
use crate::catalogue::{visible_items, Item, MAX_RATING};
use crate::feedback::FieldError;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Format a rating as filled stars padded with empty ones
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let mut s = "★".repeat(filled);
    s.push_str(&"☆".repeat(MAX_RATING as usize - filled));
    s
}

/// Render the catalogue pane in the specified area
pub fn render_catalogue_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Rating threshold
            Constraint::Min(5),    // Item list
            Constraint::Length(1), // Footer
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    render_search_box(f, state, chunks[1]);
    render_threshold_line(f, state, chunks[2]);
    render_item_list(f, state, chunks[3]);
    super::header::render_footer(f, chunks[4]);
}

fn render_search_box(f: &mut Frame, state: &AppState, area: Rect) {
    let active = state.mode == AppMode::Catalogue;
    let border = if active {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };

    let text = if state.filter.search_text.is_empty() && !active {
        Span::styled("type to search by name", Styles::text_muted())
    } else {
        Span::styled(state.filter.search_text.as_str(), Styles::text())
    };

    let search = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border),
    );
    f.render_widget(search, area);
}

fn render_threshold_line(f: &mut Frame, state: &AppState, area: Rect) {
    let line = match state.filter.minimum_rating {
        Some(min) => Line::from(vec![
            Span::styled("Minimum rating: ", Styles::text_secondary()),
            Span::styled(stars(min), Styles::rating()),
        ]),
        None => Line::from(Span::styled(
            "Minimum rating: any",
            Styles::text_secondary(),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_item_list(f: &mut Frame, state: &AppState, area: Rect) {
    let visible = visible_items(
        &state.catalogue.items,
        &state.filter.search_text,
        state.filter.effective_minimum(),
    );

    let title = format!(" Catalogue ({}/{}) ", visible.len(), state.catalogue.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Styles::header())
        .border_style(if state.mode == AppMode::Catalogue {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        });

    if visible.is_empty() {
        let empty = Paragraph::new("No items match the current filter")
            .style(Styles::text_muted())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let (start, end) = state.catalogue_scroll.visible_range();
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .skip(start)
        .take(end.saturating_sub(start).max(1))
        .map(|(index, item)| item_row(item, index == state.catalogue_scroll.selected_index))
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn item_row(item: &Item, selected: bool) -> ListItem<'static> {
    let prefix = if selected { "▸ " } else { "  " };
    let name_style = if selected {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Styles::unselected()
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!("{}{}", prefix, item.name), name_style),
            Span::raw("  "),
            Span::styled(stars(item.rating), Styles::rating()),
        ]),
        Line::from(Span::styled(
            format!("    {}", item.url),
            Styles::text_muted(),
        )),
    ])
}

/// Render the feedback pane in the specified area
pub fn render_feedback_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Form title
            Constraint::Length(4), // Name
            Constraint::Length(4), // Email
            Constraint::Min(4),    // Feedback text
            Constraint::Length(3), // Send button
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Send feedback");

    render_text_field(
        f,
        chunks[2],
        " Name ",
        &state.form.name,
        state.form.name_error,
        state.mode == AppMode::Feedback && state.focus == FocusField::Name,
    );
    render_text_field(
        f,
        chunks[3],
        " Email ",
        &state.form.email,
        state.form.email_error,
        state.mode == AppMode::Feedback && state.focus == FocusField::Email,
    );
    render_text_field(
        f,
        chunks[4],
        " Feedback ",
        &state.form.feedback,
        None,
        state.mode == AppMode::Feedback && state.focus == FocusField::Message,
    );
    render_send_button(
        f,
        chunks[5],
        state.mode == AppMode::Feedback && state.focus == FocusField::Send,
    );
}

fn render_text_field(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    error: Option<FieldError>,
    focused: bool,
) {
    let border = if focused {
        Styles::border_active()
    } else {
        Styles::border_inactive()
    };

    let mut lines = vec![Line::from(Span::styled(
        value.to_string(),
        Styles::text(),
    ))];
    if let Some(err) = error {
        lines.push(Line::from(Span::styled(err.to_string(), Styles::error())));
    }

    let field = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .title_style(if focused {
                Styles::focused()
            } else {
                Styles::text_secondary()
            })
            .border_style(border),
    );
    f.render_widget(field, area);
}

fn render_send_button(f: &mut Frame, area: Rect, focused: bool) {
    let style = if focused {
        Styles::button_active()
    } else {
        Styles::button_inactive()
    };
    let button = Paragraph::new("[ Send ]")
        .alignment(ratatui::layout::Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(
            if focused {
                Styles::border_active()
            } else {
                Styles::border_inactive()
            },
        ));
    f.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_rendering() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        // out-of-range ratings clamp instead of panicking
        assert_eq!(stars(9), "★★★★★");
    }
}
