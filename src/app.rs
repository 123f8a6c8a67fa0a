//! Application state and key handling

use crate::config::FormConfig;
use crate::state::{ContactForm, Field, FieldKind, Form, SubmitOutcome};
use crate::submission::SubmissionSink;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::Instant;

/// Main application struct
pub struct App {
    /// The contact form
    pub form: ContactForm,
    /// Loaded user configuration
    pub config: FormConfig,
    /// Receives accepted submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Status bar feedback
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: FormConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            form: ContactForm::with_banner_duration(config.banner_duration()),
            config,
            sink,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance timers
    pub fn tick(&mut self, now: Instant) {
        self.form.tick(now);
    }

    /// Validate and submit the form
    pub fn submit(&mut self, now: Instant) {
        match self.form.submit(now) {
            SubmitOutcome::Accepted(values) => {
                self.sink.accept(&values);
                self.status_message = None;
            }
            SubmitOutcome::Rejected(count) => {
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.status_message = Some(format!("{count} {noun} attention"));
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Submit shortcut works from any field
        if key.code == KeyCode::Char('s')
            && key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
        {
            self.submit(Instant::now());
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Tab => {
                self.form.next_field();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.form.prev_field();
                return Ok(());
            }
            _ => {}
        }

        if self.form.is_submit_focused() {
            self.handle_submit_button_key(key);
            return Ok(());
        }

        match self.form.focused_kind() {
            Some(FieldKind::Text) => self.handle_text_key(key)?,
            Some(FieldKind::Select) => self.handle_select_key(key)?,
            Some(FieldKind::Checkbox) => self.handle_checkbox_key(key)?,
            None => {}
        }
        Ok(())
    }

    fn handle_submit_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(Instant::now()),
            KeyCode::Up => self.form.prev_field(),
            KeyCode::Down => self.form.next_field(),
            _ => {}
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) -> Result<()> {
        let multiline = self.form.focused_field().is_some_and(Field::is_multiline);
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input_char(c)?
            }
            KeyCode::Backspace => self.form.backspace()?,
            KeyCode::Enter if multiline => self.form.input_char('\n')?,
            KeyCode::Enter => self.form.next_field(),
            // Up/Down move between fields except inside the message box
            KeyCode::Down if !multiline => self.form.next_field(),
            KeyCode::Up if !multiline => self.form.prev_field(),
            _ => {}
        }
        Ok(())
    }

    fn handle_select_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
                self.form.cycle_option(true)?
            }
            KeyCode::Left | KeyCode::Char('h') => self.form.cycle_option(false)?,
            KeyCode::Enter | KeyCode::Down => self.form.next_field(),
            KeyCode::Up => self.form.prev_field(),
            _ => {}
        }
        Ok(())
    }

    fn handle_checkbox_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => self.form.toggle_consent()?,
            KeyCode::Down => self.form.next_field(),
            KeyCode::Up => self.form.prev_field(),
            _ => {}
        }
        Ok(())
    }
}
