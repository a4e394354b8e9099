//! Calculator input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::domain::{
    AircraftProfile, Region, AGE_RANGE, DEFAULT_AGE, DEFAULT_ANNUAL_CYCLES, DEFAULT_ANNUAL_HOURS,
    DEFAULT_DAILY_UTILISATION,
};
use crate::tui::styles::HangarTheme;

use super::result::{render_result, ResultState};

/// Form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    AnnualCycles,
    AnnualHours,
    DailyUtilisation,
    Region,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Age,
        Field::AnnualCycles,
        Field::AnnualHours,
        Field::DailyUtilisation,
        Field::Region,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Aircraft Age (years)",
            Self::AnnualCycles => "Average Annual Cycles",
            Self::AnnualHours => "Average Annual Hours",
            Self::DailyUtilisation => "Average Daily Utilisation (hours/day)",
            Self::Region => "MRO Region",
        }
    }

    /// Step applied by ←/→ on numeric fields.
    fn step(&self) -> f64 {
        match self {
            Self::DailyUtilisation => 0.01,
            _ => 1.0,
        }
    }

    fn is_text(&self) -> bool {
        matches!(
            self,
            Self::AnnualCycles | Self::AnnualHours | Self::DailyUtilisation
        )
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Calculator form state.
///
/// Numeric fields keep the raw text being typed so partial input such as
/// "12." stays editable; it is parsed on every change.
#[derive(Debug, Clone)]
pub struct CalculatorFormState {
    pub age: u32,
    pub annual_cycles: String,
    pub annual_hours: String,
    pub daily_utilisation: String,
    pub region: Region,
    pub selected: Field,
}

impl Default for CalculatorFormState {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            annual_cycles: format_number(DEFAULT_ANNUAL_CYCLES, Field::AnnualCycles),
            annual_hours: format_number(DEFAULT_ANNUAL_HOURS, Field::AnnualHours),
            daily_utilisation: format_number(DEFAULT_DAILY_UTILISATION, Field::DailyUtilisation),
            region: Region::default(),
            selected: Field::Age,
        }
    }
}

impl CalculatorFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        let idx = self.selected.index();
        self.selected = Field::ALL[(idx + 1) % Field::ALL.len()];
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        let idx = self.selected.index();
        self.selected = Field::ALL[(idx + Field::ALL.len() - 1) % Field::ALL.len()];
    }

    /// Restore every field to its default, keeping focus.
    pub fn reset(&mut self) {
        let selected = self.selected;
        *self = Self {
            selected,
            ..Self::default()
        };
    }

    /// Increase the focused value (slider step, next region, or numeric step).
    pub fn increment(&mut self) {
        match self.selected {
            Field::Age => self.age = (self.age + 1).min(*AGE_RANGE.end()),
            Field::Region => self.region = self.region.next(),
            field => self.step_text(field, 1.0),
        }
    }

    /// Decrease the focused value.
    pub fn decrement(&mut self) {
        match self.selected {
            Field::Age => self.age = self.age.saturating_sub(1).max(*AGE_RANGE.start()),
            Field::Region => self.region = self.region.prev(),
            field => self.step_text(field, -1.0),
        }
    }

    /// Add a character to the focused numeric field.
    ///
    /// Returns whether the character was accepted.
    pub fn input_char(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || c == '.') {
            return false;
        }
        match self.text_mut(self.selected) {
            Some(text) => {
                text.push(c);
                true
            }
            None => false,
        }
    }

    /// Delete the last character of the focused numeric field.
    pub fn delete_char(&mut self) -> bool {
        self.text_mut(self.selected)
            .map(|text| text.pop().is_some())
            .unwrap_or(false)
    }

    /// Clear the focused numeric field.
    pub fn clear_field(&mut self) -> bool {
        match self.text_mut(self.selected) {
            Some(text) if !text.is_empty() => {
                text.clear();
                true
            }
            _ => false,
        }
    }

    /// Parse the form into a profile.
    ///
    /// # Errors
    /// Returns a corrective message for the first unusable field.
    pub fn to_profile(&self) -> Result<AircraftProfile, String> {
        let profile = AircraftProfile::new(
            self.age,
            parse_field(Field::AnnualCycles, &self.annual_cycles)?,
            parse_field(Field::AnnualHours, &self.annual_hours)?,
            parse_field(Field::DailyUtilisation, &self.daily_utilisation)?,
            self.region,
        );
        profile.validate().map_err(|errors| errors.join(", "))?;
        Ok(profile)
    }

    fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::AnnualCycles => Some(&self.annual_cycles),
            Field::AnnualHours => Some(&self.annual_hours),
            Field::DailyUtilisation => Some(&self.daily_utilisation),
            Field::Age | Field::Region => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::AnnualCycles => Some(&mut self.annual_cycles),
            Field::AnnualHours => Some(&mut self.annual_hours),
            Field::DailyUtilisation => Some(&mut self.daily_utilisation),
            Field::Age | Field::Region => None,
        }
    }

    fn step_text(&mut self, field: Field, direction: f64) {
        let current = self
            .text(field)
            .and_then(|t| t.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        let stepped = (current + direction * field.step()).max(0.0);
        if let Some(text) = self.text_mut(field) {
            *text = format_number(stepped, field);
        }
    }
}

fn parse_field(field: Field, text: &str) -> Result<f64, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(format!("{}: enter a number", field.label()));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("{}: invalid number {trimmed:?}", field.label()))
}

fn format_number(value: f64, field: Field) -> String {
    match field {
        Field::DailyUtilisation => format!("{value:.2}"),
        _ => format!("{value:.0}"),
    }
}

/// Render the calculator: inputs on the left, forecast on the right.
pub fn render_calculator(
    f: &mut Frame,
    area: Rect,
    state: &CalculatorFormState,
    result: &ResultState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form + result
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_header(f, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(chunks[1]);

    render_fields(f, columns[0], state);
    render_result(f, columns[1], result);
    render_footer(f, chunks[2], result);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", HangarTheme::text()),
        Span::styled("MRO Duration Forecast Calculator", HangarTheme::title()),
        Span::styled(
            " │ Expected turnaround time (days)",
            HangarTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(HangarTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_fields(f: &mut Frame, area: Rect, state: &CalculatorFormState) {
    let constraints: Vec<Constraint> = Field::ALL
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in Field::ALL.iter().enumerate() {
        let is_selected = *field == state.selected;
        let (border_style, title_style) = if is_selected {
            (HangarTheme::border_focused(), HangarTheme::focused())
        } else {
            (HangarTheme::border(), HangarTheme::text_secondary())
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label()), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        match field {
            Field::Age => {
                let (lo, hi) = (*AGE_RANGE.start(), *AGE_RANGE.end());
                let ratio = f64::from(state.age.clamp(lo, hi) - lo) / f64::from(hi - lo);
                let gauge = Gauge::default()
                    .block(block)
                    .gauge_style(HangarTheme::gauge())
                    .ratio(ratio)
                    .label(format!("{} yrs  ({lo}-{hi})", state.age));
                f.render_widget(gauge, chunks[i]);
            }
            Field::Region => {
                let content = Paragraph::new(Line::from(vec![
                    Span::styled(" ◀ ", HangarTheme::key_hint()),
                    Span::styled(state.region.label(), HangarTheme::text()),
                    Span::styled(" ▶", HangarTheme::key_hint()),
                ]))
                .block(block);
                f.render_widget(content, chunks[i]);
            }
            text_field => {
                let value = state.text(*text_field).unwrap_or_default();
                let value_display = if value.is_empty() {
                    Span::styled("≥ 0", HangarTheme::text_muted())
                } else {
                    Span::styled(value.to_string(), HangarTheme::text())
                };
                let cursor = if is_selected && text_field.is_text() {
                    Span::styled("▌", HangarTheme::cursor())
                } else {
                    Span::raw("")
                };
                let content =
                    Paragraph::new(Line::from(vec![Span::raw(" "), value_display, cursor]))
                        .block(block);
                f.render_widget(content, chunks[i]);
            }
        }
    }
}

fn render_footer(f: &mut Frame, area: Rect, result: &ResultState) {
    let content = if let ResultState::Invalid { message } = result {
        Line::from(vec![
            Span::styled("! ", HangarTheme::danger()),
            Span::styled(message.clone(), HangarTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", HangarTheme::key_hint()),
            Span::styled("Field ", HangarTheme::key_desc()),
            Span::styled("[←→] ", HangarTheme::key_hint()),
            Span::styled("Adjust ", HangarTheme::key_desc()),
            Span::styled("[0-9 .] ", HangarTheme::key_hint()),
            Span::styled("Type ", HangarTheme::key_desc()),
            Span::styled("[R] ", HangarTheme::key_hint()),
            Span::styled("Reset ", HangarTheme::key_desc()),
            Span::styled("[Q] ", HangarTheme::key_hint()),
            Span::styled("Quit", HangarTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(HangarTheme::border()),
    );

    f.render_widget(footer, area);
}
