//! UI module: View components for the TUI.

pub mod assessment;
pub mod contact;
pub mod home;
pub mod pages;
pub mod profile_form;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::DISCLAIMER;
use crate::tui::styles::MedicalTheme;

/// Why a form could not be submitted. Shown in the form footer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0}: required")]
    Missing(&'static str),

    #[error("{0}: invalid number")]
    InvalidNumber(&'static str),

    #[error("{field}: value must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },

    #[error("{0}: invalid email address")]
    InvalidEmail(&'static str),
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(DISCLAIMER, MedicalTheme::text_muted())),
        Line::from(Span::styled(
            "The score is a fixed heuristic, not a trained model.",
            MedicalTheme::text_muted(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
