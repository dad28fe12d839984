//! Assessment result view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::application::{PredictionSession, ShownAssessment};
use crate::domain::{RiskLevel, NOMINAL_MAX_SCORE};
use crate::tui::styles::MedicalTheme;

/// Render the result of the current session.
pub fn render_assessment(f: &mut Frame, area: Rect, session: &PredictionSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_assessment_header(f, chunks[0]);
    match session.shown() {
        Some(shown) => render_result(f, chunks[1], shown),
        None => render_empty(f, chunks[1]),
    }
    render_assessment_footer(f, chunks[2]);
}

fn render_assessment_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Your Heart Health Analysis", MedicalTheme::title()),
        Span::styled(" │ Additive Risk Score", MedicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No assessment yet",
            MedicalTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Fill in the health profile to begin",
            MedicalTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_result(f: &mut Frame, area: Rect, shown: &ShownAssessment) {
    let assessment = &shown.assessment;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Risk level
            Constraint::Length(3), // Score gauge
            Constraint::Min(6),    // Analysis
            Constraint::Length(5), // Next steps
        ])
        .split(columns[0]);

    let risk_style = MedicalTheme::risk_level(assessment.risk_level);
    let risk_icon = match assessment.risk_level {
        RiskLevel::Low => "OK",
        RiskLevel::Moderate | RiskLevel::High => "!",
    };

    let risk_display = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} {} RISK", risk_icon, assessment.risk_level),
            risk_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            assessment.risk_level.description(),
            MedicalTheme::text_secondary(),
        )),
        Line::from(Span::styled(
            format!("Assessed {}", shown.assessed_at.format("%Y-%m-%d %H:%M")),
            MedicalTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(risk_display, left[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" Risk Score ", MedicalTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .gauge_style(risk_style)
        .ratio(assessment.score_ratio())
        .label(format!("{}/{}", assessment.risk_score, NOMINAL_MAX_SCORE));
    f.render_widget(gauge, left[1]);

    let analysis = Paragraph::new(Span::styled(
        assessment.analysis.as_str(),
        MedicalTheme::text(),
    ))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(" Doctor's Analysis ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(analysis, left[2]);

    let next_steps = Paragraph::new(Span::styled(
        "Schedule a consultation with your healthcare provider to discuss these results \
         and develop a personalized health plan.",
        MedicalTheme::info(),
    ))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(" Next Steps ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(next_steps, left[3]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(12)])
        .split(columns[1]);

    let recommendations: Vec<Line> = if assessment.recommendations.is_empty() {
        vec![Line::from(Span::styled(
            "No specific advisories. Keep up regular check-ups.",
            MedicalTheme::text_muted(),
        ))]
    } else {
        assessment
            .recommendations
            .iter()
            .map(|rec| {
                Line::from(vec![
                    Span::styled("✓ ", MedicalTheme::success()),
                    Span::styled(rec.as_str(), MedicalTheme::text()),
                ])
            })
            .collect()
    };
    let recs = Paragraph::new(recommendations)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Recommendations ", MedicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        );
    f.render_widget(recs, right[0]);

    let breakdown: Vec<Line> = assessment
        .contributions
        .iter()
        .map(|c| {
            let style = if c.points > 0 {
                MedicalTheme::text()
            } else {
                MedicalTheme::text_muted()
            };
            Line::from(vec![
                Span::styled(format!("{:<16}", c.factor.label()), MedicalTheme::text_secondary()),
                Span::styled(format!("+{}", c.points), style),
            ])
        })
        .collect();
    let factors = Paragraph::new(breakdown).block(
        Block::default()
            .title(Span::styled(" Score Breakdown ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(factors, right[1]);
}

fn render_assessment_footer(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[B] ", MedicalTheme::key_hint()),
        Span::styled("Back to Form ", MedicalTheme::key_desc()),
        Span::styled("[N] ", MedicalTheme::key_hint()),
        Span::styled("New Assessment ", MedicalTheme::key_desc()),
        Span::styled("[Esc] ", MedicalTheme::key_hint()),
        Span::styled("Home", MedicalTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}
