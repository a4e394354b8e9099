//! UI module: View components for the TUI.

pub mod calculator;
pub mod result;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::CoefficientTable;
use crate::tui::styles::HangarTheme;

pub fn render_model_notes(f: &mut Frame, area: Rect, table: &CoefficientTable) {
    let fit = match table.r_squared {
        Some(r2) => format!("Model: {} (R² = {r2:.2}).", table.name),
        None => format!("Model: {}.", table.name),
    };

    let text = vec![
        Line::from(vec![Span::styled(fit, HangarTheme::text_muted())]),
        Line::from(vec![Span::styled(
            "Region effect is relative to East Asia baseline.",
            HangarTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(HangarTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
