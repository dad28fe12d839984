//! Health profile input form.
//!
//! Holds raw presentation state (text buffers, selected options) and turns it
//! into a typed [`HealthProfile`] once, at submit time. Parsing fails closed:
//! anything unparseable or implausible is reported on the form and never
//! reaches the scorer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use super::FormError;
use crate::domain::{ChestPainType, HealthProfile, Sex, Thalassemia};
use crate::tui::styles::MedicalTheme;

const YES_NO_OPTIONS: [&str; 2] = ["No", "Yes"];

// Field positions, in form order.
const AGE: usize = 0;
const SEX: usize = 1;
const CHEST_PAIN: usize = 2;
const RESTING_BP: usize = 3;
const FASTING_BP: usize = 4;
const CHOLESTEROL: usize = 5;
const MAX_HEART_RATE: usize = 6;
const THALASSEMIA: usize = 7;
const DIABETES: usize = 8;
const SMOKING: usize = 9;
const OBESITY: usize = 10;

/// Input widget behind a form field.
#[derive(Debug, Clone)]
pub enum FieldInput {
    /// Free-text integer with a plausible range
    Number { value: String, min: i32, max: i32 },
    /// One of a fixed list of options
    Choice {
        options: Vec<&'static str>,
        selected: usize,
    },
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub input: FieldInput,
}

impl FormField {
    fn number(label: &'static str, hint: &'static str, min: i32, max: i32) -> Self {
        Self {
            label,
            hint,
            input: FieldInput::Number {
                value: String::new(),
                min,
                max,
            },
        }
    }

    fn choice(label: &'static str, options: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            label,
            hint: "←/→ to change",
            input: FieldInput::Choice {
                options: options.into_iter().collect(),
                selected: 0,
            },
        }
    }

    /// Text shown in the field box, or `None` for an empty number.
    #[must_use]
    pub fn display_value(&self) -> Option<&str> {
        match &self.input {
            FieldInput::Number { value, .. } if value.is_empty() => None,
            FieldInput::Number { value, .. } => Some(value),
            FieldInput::Choice { options, selected } => Some(options[*selected]),
        }
    }
}

/// Profile form state
pub struct ProfileFormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField::number("Age", "years (1-120)", 1, 120),
                FormField::choice("Sex", Sex::ALL.iter().map(Sex::label)),
                FormField::choice(
                    "Chest Pain Type",
                    ChestPainType::ALL.iter().map(ChestPainType::label),
                ),
                FormField::number("Resting Blood Pressure", "mmHg (40-300)", 40, 300),
                FormField::number("Fasting Blood Pressure", "mmHg (40-300)", 40, 300),
                FormField::number("Serum Cholesterol", "mg/dL (50-700)", 50, 700),
                FormField::number("Maximum Heart Rate", "beats/min (30-250)", 30, 250),
                FormField::choice(
                    "Thalassemia",
                    Thalassemia::ALL.iter().map(Thalassemia::label),
                ),
                FormField::choice("Diabetes", YES_NO_OPTIONS),
                FormField::choice("Smoking", YES_NO_OPTIONS),
                FormField::choice("Obesity", YES_NO_OPTIONS),
            ],
            selected_field: 0,
            error_message: None,
        }
    }
}

impl ProfileFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Type a character into the current number field.
    ///
    /// Digits are accepted anywhere; `-` only as the first character so that
    /// negative input reaches validation and is rejected there.
    pub fn input_char(&mut self, c: char) {
        if let FieldInput::Number { value, .. } = &mut self.fields[self.selected_field].input {
            if c.is_ascii_digit() || (c == '-' && value.is_empty()) {
                value.push(c);
                self.error_message = None;
            }
        }
    }

    /// Delete the last character of the current number field
    pub fn delete_char(&mut self) {
        if let FieldInput::Number { value, .. } = &mut self.fields[self.selected_field].input {
            value.pop();
        }
    }

    /// Clear the current number field
    pub fn clear_field(&mut self) {
        if let FieldInput::Number { value, .. } = &mut self.fields[self.selected_field].input {
            value.clear();
        }
    }

    /// Cycle the current choice field forward.
    pub fn next_option(&mut self) {
        if let FieldInput::Choice { options, selected } =
            &mut self.fields[self.selected_field].input
        {
            *selected = (*selected + 1) % options.len();
            self.error_message = None;
        }
    }

    /// Cycle the current choice field backward.
    pub fn prev_option(&mut self) {
        if let FieldInput::Choice { options, selected } =
            &mut self.fields[self.selected_field].input
        {
            *selected = if *selected == 0 {
                options.len() - 1
            } else {
                *selected - 1
            };
            self.error_message = None;
        }
    }

    /// Wipe text buffers and reset choices to their defaults.
    ///
    /// Called when a new assessment starts or the prediction page is left, so
    /// entered health values do not linger in UI state.
    pub fn clear_sensitive(&mut self) {
        for field in self.fields.iter_mut() {
            match &mut field.input {
                FieldInput::Number { value, .. } => value.zeroize(),
                FieldInput::Choice { selected, .. } => *selected = 0,
            }
        }
        self.error_message = None;
        self.selected_field = 0;
    }

    fn number(&self, index: usize) -> Result<i32, FormError> {
        let field = &self.fields[index];
        let FieldInput::Number { value, min, max } = &field.input else {
            return Err(FormError::Missing(field.label));
        };

        if value.is_empty() {
            return Err(FormError::Missing(field.label));
        }
        let parsed: i32 = value
            .parse()
            .map_err(|_| FormError::InvalidNumber(field.label))?;

        if parsed < *min || parsed > *max {
            return Err(FormError::OutOfRange {
                field: field.label,
                min: *min,
                max: *max,
            });
        }
        Ok(parsed)
    }

    fn choice(&self, index: usize) -> usize {
        match &self.fields[index].input {
            FieldInput::Choice { selected, .. } => *selected,
            FieldInput::Number { .. } => 0,
        }
    }

    fn flag(&self, index: usize) -> bool {
        self.choice(index) == 1
    }

    /// Validate and convert to a [`HealthProfile`].
    ///
    /// # Errors
    /// Returns the first field that is missing, unparseable or out of range.
    pub fn to_health_profile(&self) -> Result<HealthProfile, FormError> {
        // Choice fields are built from the `ALL` arrays, so indices line up.
        Ok(HealthProfile {
            age: self.number(AGE)?,
            sex: Sex::ALL[self.choice(SEX)],
            chest_pain_type: ChestPainType::ALL[self.choice(CHEST_PAIN)],
            resting_blood_pressure: self.number(RESTING_BP)?,
            fasting_blood_pressure: self.number(FASTING_BP)?,
            cholesterol: self.number(CHOLESTEROL)?,
            max_heart_rate: self.number(MAX_HEART_RATE)?,
            thalassemia: Thalassemia::ALL[self.choice(THALASSEMIA)],
            has_diabetes: self.flag(DIABETES),
            is_smoker: self.flag(SMOKING),
            is_obese: self.flag(OBESITY),
        })
    }

    /// Load sample data (moderate-risk profile)
    pub fn load_sample_data(&mut self) {
        // 54yo male, atypical angina, borderline pressure and cholesterol, smoker
        let numbers = [
            (AGE, "54"),
            (RESTING_BP, "132"),
            (FASTING_BP, "118"),
            (CHOLESTEROL, "228"),
            (MAX_HEART_RATE, "158"),
        ];
        for (index, sample) in numbers {
            if let FieldInput::Number { value, .. } = &mut self.fields[index].input {
                *value = sample.to_string();
            }
        }

        let choices = [
            (SEX, 0),
            (CHEST_PAIN, 1),
            (THALASSEMIA, 0),
            (DIABETES, 0),
            (SMOKING, 1),
            (OBESITY, 0),
        ];
        for (index, option) in choices {
            if let FieldInput::Choice { selected, .. } = &mut self.fields[index].input {
                *selected = option;
            }
        }
        self.error_message = None;
    }
}

/// Render the profile input form
pub fn render_profile_form(f: &mut Frame, area: Rect, state: &ProfileFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Predict Your Heart Disease Risk", MedicalTheme::title()),
        Span::styled(" │ Health Profile", MedicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &ProfileFormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let (border_style, title_style) = if is_selected {
            (MedicalTheme::border_focused(), MedicalTheme::focused())
        } else {
            (MedicalTheme::border(), MedicalTheme::text_secondary())
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value_display = match field.display_value() {
            Some(value) => Span::styled(value, MedicalTheme::text()),
            None => Span::styled(field.hint, MedicalTheme::text_muted()),
        };

        let cursor = match (&field.input, is_selected) {
            (FieldInput::Number { .. }, true) => Span::styled("▌", MedicalTheme::focused()),
            (FieldInput::Choice { .. }, true) => Span::styled("  ◂ ▸", MedicalTheme::focused()),
            _ => Span::raw(""),
        };

        let content = Paragraph::new(Line::from(vec![Span::raw(" "), value_display, cursor]))
            .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &ProfileFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", MedicalTheme::danger()),
            Span::styled(err.clone(), MedicalTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", MedicalTheme::key_hint()),
            Span::styled("Navigate ", MedicalTheme::key_desc()),
            Span::styled("[←→] ", MedicalTheme::key_hint()),
            Span::styled("Change ", MedicalTheme::key_desc()),
            Span::styled("[Enter] ", MedicalTheme::key_hint()),
            Span::styled("Get Prediction ", MedicalTheme::key_desc()),
            Span::styled("[S] ", MedicalTheme::key_hint()),
            Span::styled("Sample Data ", MedicalTheme::key_desc()),
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

    fn type_into(state: &mut ProfileFormState, index: usize, text: &str) {
        state.selected_field = index;
        state.clear_field();
        for c in text.chars() {
            state.input_char(c);
        }
    }

    #[test]
    fn test_default_choices() {
        let mut state = ProfileFormState::default();
        state.load_sample_data();
        state.clear_sensitive();
        for (index, text) in [
            (AGE, "45"),
            (RESTING_BP, "120"),
            (FASTING_BP, "100"),
            (CHOLESTEROL, "190"),
            (MAX_HEART_RATE, "150"),
        ] {
            type_into(&mut state, index, text);
        }

        let profile = state.to_health_profile().expect("Should parse");
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.chest_pain_type, ChestPainType::Typical);
        assert_eq!(profile.thalassemia, Thalassemia::Normal);
        assert!(!profile.has_diabetes && !profile.is_smoker && !profile.is_obese);
    }

    #[test]
    fn test_sample_data_parses() {
        let mut state = ProfileFormState::default();
        state.load_sample_data();
        let profile = state.to_health_profile().expect("Should parse");
        assert_eq!(profile.age, 54);
        assert_eq!(profile.chest_pain_type, ChestPainType::Atypical);
        assert!(profile.is_smoker);
    }

    #[test]
    fn test_missing_field_fails_closed() {
        let state = ProfileFormState::default();
        assert_eq!(state.to_health_profile(), Err(FormError::Missing("Age")));
    }

    #[test]
    fn test_out_of_range_fails_closed() {
        let mut state = ProfileFormState::default();
        state.load_sample_data();
        type_into(&mut state, CHOLESTEROL, "9000");
        assert_eq!(
            state.to_health_profile(),
            Err(FormError::OutOfRange {
                field: "Serum Cholesterol",
                min: 50,
                max: 700,
            })
        );

        type_into(&mut state, CHOLESTEROL, "228");
        type_into(&mut state, AGE, "-4");
        assert!(matches!(
            state.to_health_profile(),
            Err(FormError::OutOfRange { field: "Age", .. })
        ));
    }

    #[test]
    fn test_unparseable_number_fails_closed() {
        let mut state = ProfileFormState::default();
        state.load_sample_data();
        type_into(&mut state, MAX_HEART_RATE, "-");
        assert_eq!(
            state.to_health_profile(),
            Err(FormError::InvalidNumber("Maximum Heart Rate"))
        );
    }

    #[test]
    fn test_input_filtering() {
        let mut state = ProfileFormState::default();
        type_into(&mut state, AGE, "4a.2-");
        assert_eq!(state.fields[AGE].display_value(), Some("42"));

        // Typing into a choice field is ignored.
        state.selected_field = SEX;
        state.input_char('7');
        assert_eq!(state.fields[SEX].display_value(), Some("Male"));
    }

    #[test]
    fn test_option_cycling_wraps() {
        let mut state = ProfileFormState::default();
        state.selected_field = THALASSEMIA;
        state.prev_option();
        assert_eq!(state.fields[THALASSEMIA].display_value(), Some("Reversible Defect"));
        state.next_option();
        assert_eq!(state.fields[THALASSEMIA].display_value(), Some("Normal"));
    }

    fn reset_choice(state: &mut ProfileFormState, index: usize) {
        if let FieldInput::Choice { selected, .. } = &mut state.fields[index].input {
            *selected = 0;
        }
    }

    #[test]
    fn test_every_choice_maps_to_its_labelled_variant() {
        let mut state = ProfileFormState::default();
        state.load_sample_data();

        reset_choice(&mut state, CHEST_PAIN);
        for expected in ChestPainType::ALL {
            state.selected_field = CHEST_PAIN;
            assert_eq!(state.fields[CHEST_PAIN].display_value(), Some(expected.label()));
            let profile = state.to_health_profile().expect("Should parse");
            assert_eq!(profile.chest_pain_type, expected);
            state.next_option();
        }

        reset_choice(&mut state, THALASSEMIA);
        for expected in Thalassemia::ALL {
            state.selected_field = THALASSEMIA;
            assert_eq!(state.fields[THALASSEMIA].display_value(), Some(expected.label()));
            let profile = state.to_health_profile().expect("Should parse");
            assert_eq!(profile.thalassemia, expected);
            state.next_option();
        }

        reset_choice(&mut state, SEX);
        for expected in Sex::ALL {
            state.selected_field = SEX;
            assert_eq!(state.fields[SEX].display_value(), Some(expected.label()));
            let profile = state.to_health_profile().expect("Should parse");
            assert_eq!(profile.sex, expected);
            state.next_option();
        }
    }

    #[test]
    fn test_clear_sensitive_wipes_buffers() {
        let mut state = ProfileFormState::default();
        state.load_sample_data();
        state.selected_field = 4;
        state.clear_sensitive();
        assert!(state.fields[AGE].display_value().is_none());
        assert_eq!(state.fields[SMOKING].display_value(), Some("No"));
        assert_eq!(state.selected_field, 0);
    }
}
