//! Home view: landing screen with navigation and a session summary.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::{HOME_FEATURES, TAGLINE};
use crate::domain::RiskLevel;
use crate::tui::styles::{MedicalTheme, LOGO};

/// Counts of results produced during this run. Memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub total: u32,
    pub low: u32,
    pub moderate: u32,
    pub high: u32,
}

impl SessionTally {
    pub fn record(&mut self, level: RiskLevel) {
        self.total += 1;
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Moderate => self.moderate += 1,
            RiskLevel::High => self.high += 1,
        }
    }
}

/// Render the home view.
pub fn render_home(f: &mut Frame, area: Rect, tally: SessionTally) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Logo + tagline
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(f, chunks[0]);

    let hero = Paragraph::new(
        LOGO.lines()
            .filter(|l| !l.is_empty())
            .map(|l| Line::from(Span::styled(l, MedicalTheme::subtitle())))
            .chain(std::iter::once(Line::from(Span::styled(
                TAGLINE,
                MedicalTheme::text_secondary(),
            ))))
            .collect::<Vec<_>>(),
    )
    .alignment(Alignment::Center);
    f.render_widget(hero, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    render_actions(f, columns[0]);
    render_right(f, columns[1], tally);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Heartcheck", MedicalTheme::title()),
        Span::styled(" │ ", MedicalTheme::text_muted()),
        Span::styled("Heart Disease Risk Screening", MedicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_actions(f: &mut Frame, area: Rect) {
    let actions: Vec<Line> = [
        ("[P] ", "Predict Risk"),
        ("[B] ", "About Heart Disease"),
        ("[M] ", "How the Score Works"),
        ("[R] ", "Resources"),
        ("[C] ", "Contact"),
        ("[Q] ", "Quit"),
    ]
    .into_iter()
    .map(|(key, desc)| {
        Line::from(vec![
            Span::styled(key, MedicalTheme::key_hint()),
            Span::styled(desc, MedicalTheme::key_desc()),
        ])
    })
    .collect();

    let block = Block::default()
        .title(Span::styled(" Quick Actions ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    f.render_widget(Paragraph::new(actions).block(block), area);
}

fn render_right(f: &mut Frame, area: Rect, tally: SessionTally) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(area);

    let mut features = Vec::new();
    for feature in HOME_FEATURES {
        features.push(Line::from(Span::styled(feature.title, MedicalTheme::focused())));
        for p in feature.paragraphs {
            features.push(Line::from(Span::styled(*p, MedicalTheme::text_secondary())));
        }
        features.push(Line::from(""));
    }
    let features = Paragraph::new(features).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" Why Heartcheck ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(features, chunks[0]);

    let block = Block::default()
        .title(Span::styled(" This Session ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let lines = if tally.total == 0 {
        vec![Line::from(Span::styled(
            "No assessments yet. Press [P] to start.",
            MedicalTheme::text_muted(),
        ))]
    } else {
        vec![
            Line::from(vec![
                Span::styled("Assessments: ", MedicalTheme::text_secondary()),
                Span::styled(tally.total.to_string(), MedicalTheme::text()),
            ]),
            Line::from(vec![
                Span::styled("Low: ", MedicalTheme::text_secondary()),
                Span::styled(tally.low.to_string(), MedicalTheme::risk_level(RiskLevel::Low)),
                Span::styled("  Moderate: ", MedicalTheme::text_secondary()),
                Span::styled(
                    tally.moderate.to_string(),
                    MedicalTheme::risk_level(RiskLevel::Moderate),
                ),
                Span::styled("  High: ", MedicalTheme::text_secondary()),
                Span::styled(tally.high.to_string(), MedicalTheme::risk_level(RiskLevel::High)),
            ]),
            Line::from(Span::styled(
                "Counts are forgotten when you quit.",
                MedicalTheme::text_muted(),
            )),
        ]
    };

    f.render_widget(Paragraph::new(lines).block(block), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_records_levels() {
        let mut tally = SessionTally::default();
        tally.record(RiskLevel::Low);
        tally.record(RiskLevel::High);
        tally.record(RiskLevel::High);
        assert_eq!(
            tally,
            SessionTally {
                total: 3,
                low: 1,
                moderate: 0,
                high: 2,
            }
        );
    }
}
