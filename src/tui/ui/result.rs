//! Forecast result panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::domain::Forecast;
use crate::tui::styles::HangarTheme;

/// What the result panel shows
#[derive(Debug, Clone)]
pub enum ResultState {
    /// Current inputs produced a forecast
    Ready { forecast: Forecast },
    /// Current inputs are unusable; no number is shown
    Invalid { message: String },
}

impl ResultState {
    #[must_use]
    pub fn forecast(&self) -> Option<&Forecast> {
        match self {
            Self::Ready { forecast } => Some(forecast),
            Self::Invalid { .. } => None,
        }
    }
}

/// Render the result panel
pub fn render_result(f: &mut Frame, area: Rect, state: &ResultState) {
    match state {
        ResultState::Ready { forecast } => render_forecast(f, area, forecast),
        ResultState::Invalid { message } => render_invalid(f, area, message),
    }
}

fn render_forecast(f: &mut Frame, area: Rect, forecast: &Forecast) {
    let block = Block::default()
        .title(Span::styled(
            " Estimated Turnaround Time ",
            HangarTheme::subtitle(),
        ))
        .borders(Borders::ALL)
        .border_style(HangarTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Headline figure
            Constraint::Min(0),    // Term breakdown
        ])
        .margin(1)
        .split(inner);

    let headline = Paragraph::new(vec![
        Line::from(Span::styled(
            forecast.formatted(),
            HangarTheme::forecast_value(),
        )),
        Line::from(Span::styled(
            format!("{} · {} yrs", forecast.profile.region, forecast.profile.age),
            HangarTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(headline, chunks[0]);

    let rows = forecast.terms.iter().map(|t| {
        Row::new(vec![
            Span::styled(t.term.label(), HangarTheme::text_secondary()),
            Span::styled(format!("{:.4}", t.value), HangarTheme::text_muted()),
            Span::styled(
                format!("{:+.3}", t.contribution),
                HangarTheme::contribution(t.contribution),
            ),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
        ],
    )
    .header(Row::new(vec!["Term", "Value", "Days"]).style(HangarTheme::text_muted()));
    f.render_widget(table, chunks[1]);
}

fn render_invalid(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("! Check inputs", HangarTheme::danger())),
        Line::from(""),
        Line::from(Span::styled(message, HangarTheme::text())),
    ])
    .alignment(Alignment::Center)
    .wrap(ratatui::widgets::Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(
                " Estimated Turnaround Time ",
                HangarTheme::subtitle(),
            ))
            .borders(Borders::ALL)
            .border_style(HangarTheme::danger()),
    );

    f.render_widget(content, area);
}
