//! Hangar-themed color palette and styles.
//!
//! Colors chosen for:
//! - High contrast on dark terminals
//! - Clear separation between inputs, results and errors

use ratatui::style::{Color, Modifier, Style};

/// Hangar theme color palette.
pub struct HangarTheme;

impl HangarTheme {
    // === Primary Colors ===

    /// Sky blue - Primary color
    pub const PRIMARY: Color = Color::Rgb(14, 116, 144); // #0E7490

    /// Lighter blue for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(56, 189, 248); // #38BDF8

    /// Darker blue for accents
    pub const PRIMARY_DARK: Color = Color::Rgb(12, 74, 110); // #0C4A6E

    // === Secondary Colors ===

    /// Light slate for borders
    pub const SECONDARY_LIGHT: Color = Color::Rgb(148, 163, 184); // #94A3B8

    // === Semantic Colors ===

    /// Safety orange - the forecast figure
    pub const ACCENT: Color = Color::Rgb(249, 115, 22); // #F97316

    /// Emerald - terms that shorten the turnaround
    pub const SUCCESS: Color = Color::Rgb(16, 185, 129); // #10B981

    /// Amber - terms that lengthen the turnaround
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24

    /// Rose - Error
    pub const DANGER: Color = Color::Rgb(244, 63, 94); // #F43F5E

    // === Text Colors ===

    /// Primary text (white)
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    /// Secondary text (gray)
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    // === Preset Styles ===

    /// Style for titles
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for subtitles
    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    /// Style for the headline forecast value
    #[must_use]
    pub fn forecast_value() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a term contribution by sign
    #[must_use]
    pub fn contribution(value: f64) -> Style {
        if value < 0.0 {
            Style::default().fg(Self::SUCCESS)
        } else if value > 0.0 {
            Style::default().fg(Self::WARNING)
        } else {
            Self::text_muted()
        }
    }

    /// Style for focused elements
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::SECONDARY_LIGHT)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Style for the slider track
    #[must_use]
    pub fn gauge() -> Style {
        Style::default().fg(Self::PRIMARY_LIGHT).bg(Self::PRIMARY_DARK)
    }

    /// Style for key hints
    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for the text cursor
    #[must_use]
    pub fn cursor() -> Style {
        Style::default().fg(Self::PRIMARY_LIGHT)
    }
}
