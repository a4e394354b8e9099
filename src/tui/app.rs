//! Main TUI application state machine.
//!
//! Handles:
//! - Input event handling
//! - Recomputing the forecast on every edit
//! - Service integration

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::adapters::{source_for, OlsModel};
use crate::application::ForecastService;
use crate::config::Settings;
use crate::ports::TurnaroundModel;

use super::ui::{
    calculator::{render_calculator, CalculatorFormState},
    render_model_notes,
    result::ResultState,
};

/// Main application state
pub struct App {
    /// Whether the app should quit
    should_quit: bool,

    service: ForecastService<OlsModel>,

    form: CalculatorFormState,

    /// Always reflects the current form contents
    result: ResultState,
}

impl App {
    /// Create the application, loading coefficients as configured.
    ///
    /// # Errors
    /// Returns error if the configured coefficient table cannot be loaded.
    pub fn new(settings: &Settings) -> Result<Self> {
        let source = source_for(settings.coefficients_path.as_deref());
        let service = ForecastService::from_source(source.as_ref())
            .with_context(|| format!("Failed to load coefficients from {}", source.describe()))?;
        Ok(Self::with_service(service))
    }

    /// Create application with an injected service.
    #[must_use]
    pub fn with_service(service: ForecastService<OlsModel>) -> Self {
        let mut app = Self {
            should_quit: false,
            service,
            form: CalculatorFormState::default(),
            result: ResultState::Invalid {
                message: String::new(),
            },
        };
        app.recompute();
        app
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            // Short poll to stay responsive
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        render_calculator(f, chunks[0], &self.form, &self.result);
        render_model_notes(f, chunks[1], self.service.model().coefficients());
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let changed = match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                false
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.form.prev_field();
                false
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form.next_field();
                false
            }
            KeyCode::Left => {
                self.form.decrement();
                true
            }
            KeyCode::Right => {
                self.form.increment();
                true
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.form.reset();
                true
            }
            KeyCode::Char(c) => self.form.input_char(c),
            KeyCode::Backspace => self.form.delete_char(),
            KeyCode::Delete => self.form.clear_field(),
            _ => false,
        };

        if changed {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.result = match self.form.to_profile() {
            Ok(profile) => ResultState::Ready {
                forecast: self.service.forecast(&profile),
            },
            Err(message) => {
                tracing::debug!("Form input rejected: {}", message);
                ResultState::Invalid { message }
            }
        };
    }
}
