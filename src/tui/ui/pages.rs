//! Read-only content pages: about, model explanation, resources.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::{
    Section, ABOUT, MODEL_NOTES, RESOURCES, RESOURCES_DISCLAIMER, SCORING_TABLE,
};
use crate::tui::styles::MedicalTheme;

/// Which content page to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    About,
    Model,
    Resources,
}

impl Page {
    fn title(&self) -> (&'static str, &'static str) {
        match self {
            Self::About => ("About", " │ What is heart disease?"),
            Self::Model => ("How the Score Works", " │ Fixed additive heuristic"),
            Self::Resources => ("Heart Health Resources", " │ Further reading"),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self {
            Self::About => section_lines(ABOUT),
            Self::Model => model_lines(),
            Self::Resources => resource_lines(),
        }
    }
}

fn section_lines(sections: &'static [Section]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in sections {
        lines.push(Line::from(Span::styled(section.title, MedicalTheme::subtitle())));
        for p in section.paragraphs {
            lines.push(Line::from(Span::styled(*p, MedicalTheme::text())));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn model_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<16}", "Factor"), MedicalTheme::subtitle()),
            Span::styled(format!("{:<46}", "Condition"), MedicalTheme::subtitle()),
            Span::styled("Points", MedicalTheme::subtitle()),
        ]),
    ];
    for (factor, condition, points) in SCORING_TABLE {
        lines.push(Line::from(vec![
            Span::styled(format!("{factor:<16}"), MedicalTheme::focused()),
            Span::styled(format!("{condition:<46}"), MedicalTheme::text()),
            Span::styled(*points, MedicalTheme::text_secondary()),
        ]));
    }
    lines.push(Line::from(""));
    for note in MODEL_NOTES {
        lines.push(Line::from(Span::styled(
            format!("• {note}"),
            MedicalTheme::text_secondary(),
        )));
    }
    lines
}

fn resource_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for category in RESOURCES {
        lines.push(Line::from(Span::styled(category.category, MedicalTheme::subtitle())));
        for item in category.items {
            lines.push(Line::from(vec![
                Span::styled(item.title, MedicalTheme::focused()),
                Span::styled(format!("  ({})", item.source), MedicalTheme::text_muted()),
            ]));
            lines.push(Line::from(Span::styled(item.description, MedicalTheme::text())));
            lines.push(Line::from(Span::styled(item.url, MedicalTheme::info())));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled("Disclaimer", MedicalTheme::warning())));
    lines.push(Line::from(Span::styled(
        RESOURCES_DISCLAIMER,
        MedicalTheme::text_secondary(),
    )));
    lines
}

/// Render a content page scrolled down by `scroll` lines.
pub fn render_page(f: &mut Frame, area: Rect, page: Page, scroll: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let (title, subtitle) = page.title();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled(title, MedicalTheme::title()),
        Span::styled(subtitle, MedicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(header, chunks[0]);

    let body = Paragraph::new(page.lines())
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        );
    f.render_widget(body, chunks[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[↑↓] ", MedicalTheme::key_hint()),
        Span::styled("Scroll ", MedicalTheme::key_desc()),
        Span::styled("[P] ", MedicalTheme::key_hint()),
        Span::styled("Predict Risk ", MedicalTheme::key_desc()),
        Span::styled("[Esc] ", MedicalTheme::key_hint()),
        Span::styled("Home", MedicalTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(footer, chunks[2]);
}

/// Number of unwrapped lines on a page, used to bound scrolling.
#[must_use]
pub fn line_count(page: Page) -> usize {
    page.lines().len()
}
