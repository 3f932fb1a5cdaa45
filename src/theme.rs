//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors, styles, and layout constants used
//! throughout the application.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background for panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent for selected items and star ratings
    pub const SECONDARY: Color = Color::Yellow;

    /// Success feedback
    pub const SUCCESS: Color = Color::Green;

    /// Error feedback and inline validation messages
    pub const ERROR: Color = Color::Red;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text
    pub const SELECTED_FG: Color = Color::Black;

    /// Unselected list item
    pub const UNSELECTED: Color = Color::Gray;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header style
    pub fn header() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected list item
    pub fn unselected() -> Style {
        Style::default().fg(Colors::UNSELECTED)
    }

    /// Focused field (cyan highlight)
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Star rating display
    pub fn rating() -> Style {
        Style::default().fg(Colors::SECONDARY)
    }

    /// Success message style
    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Inline validation error style
    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Active/selected button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive button
    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Default dialog width percentage
    pub const DIALOG_WIDTH_PCT: u16 = 60;

    /// Minimum dialog width
    pub const DIALOG_MIN_WIDTH: u16 = 40;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Header height (title + tagline)
    pub const HEADER_HEIGHT: u16 = 4;

    /// Scroll page size (items)
    pub const PAGE_SCROLL_SIZE: usize = 10;
}
