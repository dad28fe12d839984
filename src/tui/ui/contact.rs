//! Contact screen: FAQ plus a simulated message form.
//!
//! Submitting only logs the message locally (through the sanitizing log
//! writer) and shows a confirmation. Nothing is transmitted.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use zeroize::Zeroize;

use super::FormError;
use crate::adapters::sanitize::email_regex;
use crate::content::{CONTACT_EMAIL, FAQ};
use crate::tui::styles::MedicalTheme;

const MAX_FIELD_CHARS: usize = 500;

/// A validated contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub struct ContactFormState {
    pub labels: [&'static str; 4],
    pub values: [String; 4],
    pub selected_field: usize,
    pub error_message: Option<String>,
    pub sent: bool,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            labels: ["Name", "Email", "Subject", "Message"],
            values: Default::default(),
            selected_field: 0,
            error_message: None,
            sent: false,
        }
    }
}

impl ContactFormState {
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.values.len();
    }

    pub fn prev_field(&mut self) {
        self.selected_field = (self.selected_field + self.values.len() - 1) % self.values.len();
    }

    pub fn input_char(&mut self, c: char) {
        let value = &mut self.values[self.selected_field];
        if !c.is_control() && value.chars().count() < MAX_FIELD_CHARS {
            value.push(c);
            self.error_message = None;
            self.sent = false;
        }
    }

    pub fn delete_char(&mut self) {
        self.values[self.selected_field].pop();
    }

    /// Validate the form.
    ///
    /// # Errors
    /// Returns the first empty field, or an invalid email address.
    pub fn to_message(&self) -> Result<ContactMessage, FormError> {
        for (label, value) in self.labels.iter().zip(self.values.iter()) {
            if value.trim().is_empty() {
                return Err(FormError::Missing(*label));
            }
        }

        let email = self.values[1].trim();
        if !is_plausible_email(email) {
            return Err(FormError::InvalidEmail(self.labels[1]));
        }

        Ok(ContactMessage {
            name: self.values[0].trim().to_string(),
            email: email.to_string(),
            subject: self.values[2].trim().to_string(),
            message: self.values[3].trim().to_string(),
        })
    }

    /// Wipe all buffers and mark the message as sent.
    pub fn clear_after_send(&mut self) {
        for value in self.values.iter_mut() {
            value.zeroize();
        }
        self.selected_field = 0;
        self.error_message = None;
        self.sent = true;
    }
}

/// Accept only addresses the log sanitizer would redact in full.
fn is_plausible_email(email: &str) -> bool {
    email_regex()
        .find(email)
        .is_some_and(|m| m.start() == 0 && m.end() == email.len())
}

/// Render the contact screen.
pub fn render_contact(f: &mut Frame, area: Rect, state: &ContactFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Contact Us", MedicalTheme::title()),
        Span::styled(" │ Messages stay on this machine", MedicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(header, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_form(f, columns[0], state);
    render_faq(f, columns[1]);
    render_footer(f, chunks[2], state);
}

fn render_form(f: &mut Frame, area: Rect, state: &ContactFormState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .margin(1)
        .split(area);

    for (i, (label, value)) in state.labels.iter().zip(state.values.iter()).enumerate() {
        let is_selected = i == state.selected_field;
        let (border, title) = if is_selected {
            (MedicalTheme::border_focused(), MedicalTheme::focused())
        } else {
            (MedicalTheme::border(), MedicalTheme::text_secondary())
        };

        let p = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(value.as_str(), MedicalTheme::text()),
            if is_selected {
                Span::styled("▌", MedicalTheme::focused())
            } else {
                Span::raw("")
            },
        ]))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(format!(" {label} "), title))
                .borders(Borders::ALL)
                .border_style(border),
        );
        f.render_widget(p, rows[i]);
    }
}

fn render_faq(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("Email", MedicalTheme::subtitle())),
        Line::from(Span::styled(CONTACT_EMAIL, MedicalTheme::text())),
        Line::from(""),
        Line::from(Span::styled("FAQ", MedicalTheme::subtitle())),
    ];
    for faq in FAQ {
        lines.push(Line::from(Span::styled(faq.question, MedicalTheme::text())));
        lines.push(Line::from(Span::styled(faq.answer, MedicalTheme::text_secondary())));
        lines.push(Line::from(""));
    }

    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" Other Ways to Reach Us ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(p, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &ContactFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", MedicalTheme::danger()),
            Span::styled(err.clone(), MedicalTheme::danger()),
        ])
    } else if state.sent {
        Line::from(Span::styled(
            "Thank you. Your message has been recorded locally.",
            MedicalTheme::success(),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Tab/↑↓] ", MedicalTheme::key_hint()),
            Span::styled("Navigate ", MedicalTheme::key_desc()),
            Span::styled("[Enter] ", MedicalTheme::key_hint()),
            Span::styled("Send ", MedicalTheme::key_desc()),
            Span::styled("[Esc] ", MedicalTheme::key_hint()),
            Span::styled("Home", MedicalTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sanitize::sanitize;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::default();
        for (i, text) in ["Sam", "sam@example.com", "Question", "Hello there"]
            .iter()
            .enumerate()
        {
            state.selected_field = i;
            text.chars().for_each(|c| state.input_char(c));
        }
        state
    }

    #[test]
    fn test_valid_message() {
        let message = filled().to_message().expect("Should validate");
        assert_eq!(message.email, "sam@example.com");
        assert_eq!(message.message, "Hello there");
    }

    #[test]
    fn test_missing_field() {
        let mut state = filled();
        state.values[2].clear();
        assert_eq!(state.to_message(), Err(FormError::Missing("Subject")));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_plausible_email("a@b.co"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("@b.co"));
        assert!(!is_plausible_email("a@@b.co"));
        assert!(!is_plausible_email("a b@c.de"));
        assert!(!is_plausible_email("a@.com"));
        assert!(!is_plausible_email("sam@example.x"));
        assert!(!is_plausible_email("sam@corp.c0m"));
        assert!(!is_plausible_email("josé@exämple.com"));
        assert!(!is_plausible_email("sam@example.com."));
    }

    #[test]
    fn test_accepted_addresses_never_reach_the_log() {
        for email in [
            "sam@example.com",
            "a@b.co",
            "first.last+tag@mail.example.org",
            "5551234567@clinic.org",
            "O'Neil@example.com",
        ] {
            if !is_plausible_email(email) {
                continue;
            }
            let logged = sanitize(&format!(
                "Contact message received: from={email}, subject 2 chars, body 5 chars"
            ));
            assert!(!logged.contains(email), "{email} leaked: {logged}");
            assert!(logged.contains("from=[REDACTED-EMAIL],"), "{logged}");
        }
        assert!(is_plausible_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn test_clear_after_send() {
        let mut state = filled();
        state.clear_after_send();
        assert!(state.values.iter().all(String::is_empty));
        assert!(state.sent);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = ContactFormState::default();
        state.prev_field();
        assert_eq!(state.selected_field, 3);
        state.next_field();
        assert_eq!(state.selected_field, 0);
    }
}
