//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Form submission into the prediction session

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::application::PredictionSession;
use crate::config::AppConfig;

use super::ui::{
    assessment::render_assessment,
    contact::{render_contact, ContactFormState},
    home::{render_home, SessionTally},
    pages::{line_count, render_page, Page},
    profile_form::{render_profile_form, ProfileFormState},
    render_disclaimer,
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    ProfileForm,
    Assessment,
    Content(Page),
    Contact,
}

/// Main application state
pub struct App {
    screen: Screen,
    should_quit: bool,

    /// Input poll interval
    tick: Duration,

    /// Form/result state of the prediction page
    session: PredictionSession,

    profile_form: ProfileFormState,
    contact_form: ContactFormState,

    /// Results produced during this run
    tally: SessionTally,

    /// Scroll offset of the current content page
    page_scroll: u16,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            screen: Screen::Home,
            should_quit: false,
            tick: config.tick,
            session: PredictionSession::default(),
            profile_form: ProfileFormState::default(),
            contact_form: ContactFormState::default(),
            tally: SessionTally::default(),
            page_scroll: 0,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn session(&self) -> &PredictionSession {
        &self.session
    }

    #[must_use]
    pub fn tally(&self) -> SessionTally {
        self.tally
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal even if the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(self.tick)? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases too
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

    /// Draw the current screen plus the disclaimer footer.
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let content_area = chunks[0];
        match self.screen {
            Screen::Home => render_home(f, content_area, self.tally),
            Screen::ProfileForm => render_profile_form(f, content_area, &self.profile_form),
            Screen::Assessment => render_assessment(f, content_area, &self.session),
            Screen::Content(page) => render_page(f, content_area, page, self.page_scroll),
            Screen::Contact => render_contact(f, content_area, &self.contact_form),
        }

        render_disclaimer(f, chunks[1]);
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::ProfileForm => self.handle_profile_form_key(key),
            Screen::Assessment => self.handle_assessment_key(key),
            Screen::Content(page) => self.handle_content_key(page, key),
            Screen::Contact => self.handle_contact_key(key),
        }
    }

    fn open_page(&mut self, page: Page) {
        self.page_scroll = 0;
        self.screen = Screen::Content(page);
    }

    /// Go to the prediction page in whatever state the session is in.
    fn open_prediction(&mut self) {
        self.screen = if self.session.is_showing() {
            Screen::Assessment
        } else {
            Screen::ProfileForm
        };
    }

    fn go_home(&mut self) {
        tracing::debug!("Navigating home from {:?}", self.screen);
        self.screen = Screen::Home;
    }

    fn handle_home_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('p') | KeyCode::Char('P') => self.open_prediction(),
            KeyCode::Char('b') | KeyCode::Char('B') => self.open_page(Page::About),
            KeyCode::Char('m') | KeyCode::Char('M') => self.open_page(Page::Model),
            KeyCode::Char('r') | KeyCode::Char('R') => self.open_page(Page::Resources),
            KeyCode::Char('c') | KeyCode::Char('C') => self.screen = Screen::Contact,
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_profile_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.go_home(),
            KeyCode::Up | KeyCode::BackTab => self.profile_form.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.profile_form.next_field(),
            KeyCode::Right | KeyCode::Char(' ') => self.profile_form.next_option(),
            KeyCode::Left => self.profile_form.prev_option(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.profile_form.load_sample_data(),
            KeyCode::Char(c) => self.profile_form.input_char(c),
            KeyCode::Backspace => self.profile_form.delete_char(),
            KeyCode::Delete => self.profile_form.clear_field(),
            KeyCode::Enter => self.submit_profile_form(),
            _ => {}
        }
    }

    fn handle_assessment_key(&mut self, key: KeyCode) {
        match key {
            // Back to the form with the submitted values still in place
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Enter => {
                self.session.reset();
                self.screen = Screen::ProfileForm;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.session.reset();
                self.profile_form.clear_sensitive();
                self.screen = Screen::ProfileForm;
            }
            KeyCode::Esc => {
                // Leaving the prediction page drops the result and the inputs.
                self.session.reset();
                self.profile_form.clear_sensitive();
                self.go_home();
            }
            _ => {}
        }
    }

    fn handle_content_key(&mut self, page: Page, key: KeyCode) {
        let max_scroll = u16::try_from(line_count(page).saturating_sub(1)).unwrap_or(u16::MAX);
        match key {
            KeyCode::Esc => self.go_home(),
            KeyCode::Down => self.page_scroll = (self.page_scroll + 1).min(max_scroll),
            KeyCode::Up => self.page_scroll = self.page_scroll.saturating_sub(1),
            KeyCode::Char('p') | KeyCode::Char('P') => self.open_prediction(),
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.go_home(),
            KeyCode::Up | KeyCode::BackTab => self.contact_form.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.contact_form.next_field(),
            KeyCode::Char(c) => self.contact_form.input_char(c),
            KeyCode::Backspace => self.contact_form.delete_char(),
            KeyCode::Enter => self.submit_contact_form(),
            _ => {}
        }
    }

    fn submit_profile_form(&mut self) {
        match self.profile_form.to_health_profile() {
            Ok(profile) => {
                let level = self.session.submit(&profile);
                self.tally.record(level);
                self.screen = Screen::Assessment;
            }
            Err(e) => {
                tracing::debug!("Profile form rejected: {}", e);
                self.profile_form.error_message = Some(e.to_string());
            }
        }
    }

    fn submit_contact_form(&mut self) {
        match self.contact_form.to_message() {
            Ok(message) => {
                // Simulated send: recorded in the local log only.
                // The sanitizing writer redacts the address.
                tracing::info!(
                    "Contact message received: from={}, subject {} chars, body {} chars",
                    message.email,
                    message.subject.chars().count(),
                    message.message.chars().count()
                );
                self.contact_form.clear_after_send();
            }
            Err(e) => {
                self.contact_form.error_message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskLevel;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key, KeyModifiers::NONE);
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).expect("terminal");
        terminal.draw(|f| app.draw(f)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_sample_submission_flow() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, &[KeyCode::Char('p'), KeyCode::Char('s'), KeyCode::Enter]);

        assert_eq!(app.screen(), Screen::Assessment);
        let assessment = app.session().assessment().expect("result shown");
        // 2 age + 1 sex + 2 pain + 2 bp + 2 cholesterol + 2 smoking
        assert_eq!(assessment.risk_score, 11);
        assert_eq!(assessment.risk_level, RiskLevel::Moderate);
        assert_eq!(app.tally().moderate, 1);

        let screen = render(&app);
        assert!(screen.contains("MODERATE RISK"));
        assert!(screen.contains("11/25"));
    }

    #[test]
    fn test_invalid_form_stays_on_form() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, &[KeyCode::Char('p'), KeyCode::Enter]);

        assert_eq!(app.screen(), Screen::ProfileForm);
        assert!(!app.session().is_showing());
        assert!(render(&app).contains("Age: required"));
    }

    #[test]
    fn test_back_keeps_inputs_new_clears_them() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, &[KeyCode::Char('p'), KeyCode::Char('s'), KeyCode::Enter]);
        press(&mut app, &[KeyCode::Char('b'), KeyCode::Enter]);
        assert_eq!(app.screen(), Screen::Assessment);
        assert_eq!(app.tally().total, 2);

        press(&mut app, &[KeyCode::Char('n'), KeyCode::Enter]);
        assert_eq!(app.screen(), Screen::ProfileForm);
        assert!(!app.session().is_showing());
    }

    #[test]
    fn test_escape_from_result_resets_session() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, &[KeyCode::Char('p'), KeyCode::Char('s'), KeyCode::Enter]);
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.screen(), Screen::Home);
        assert!(!app.session().is_showing());

        press(&mut app, &[KeyCode::Char('p')]);
        assert_eq!(app.screen(), Screen::ProfileForm);
    }

    #[test]
    fn test_content_pages_render() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, &[KeyCode::Char('m')]);
        assert_eq!(app.screen(), Screen::Content(Page::Model));
        assert!(render(&app).contains("Max heart rate"));

        press(&mut app, &[KeyCode::Up, KeyCode::Esc, KeyCode::Char('r')]);
        assert!(render(&app).contains("Heart-Healthy Diet"));
    }

    #[test]
    fn test_contact_form_submission() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, &[KeyCode::Char('c')]);
        type_text(&mut app, "Sam");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "not-an-email");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "Hi");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "Question about q and p keys");
        press(&mut app, &[KeyCode::Enter]);
        assert!(render(&app).contains("Email: invalid email address"));

        press(&mut app, &[KeyCode::Tab, KeyCode::Tab]);
        for _ in 0.."not-an-email".len() {
            press(&mut app, &[KeyCode::Backspace]);
        }
        type_text(&mut app, "sam@example.com");
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.screen(), Screen::Contact);
        assert!(render(&app).contains("recorded locally"));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_ctrl_q_quits_anywhere() {
        let mut app = App::new(&AppConfig::default());
        press(&mut app, &[KeyCode::Char('c')]);
        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit());
    }
}
