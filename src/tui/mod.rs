//! TUI module: Terminal User Interface using Ratatui.
//!
//! A single calculator screen:
//! - Aircraft inputs (age slider, numeric fields, region selector)
//! - Live turnaround forecast with per-term breakdown
//! - Model notes

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::HangarTheme;
