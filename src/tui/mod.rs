//! TUI module: Terminal User Interface using Ratatui.
//!
//! Screens:
//! - Home with navigation and a session summary
//! - Health profile form and assessment result
//! - About, scoring model and resources pages
//! - Contact form

mod app;
mod styles;
mod ui;

pub use app::{App, Screen};
pub use styles::MedicalTheme;
pub use ui::{pages::Page, FormError};
