//! Application state and input routing

use crate::config::SignUpConfig;
use crate::state::{Focus, SignUpPage};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Sign-up page state
    pub page: SignUpPage,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: SignUpConfig) -> Self {
        Self {
            page: SignUpPage::new(config),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Route a key press to the focused control
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Notification dialog is modal
        if self.page.has_notification() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.page.dismiss_notification();
            }
            return;
        }

        if Self::is_sign_shortcut(&key) {
            self.page.sign();
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.page.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.page.focus_prev(),
            _ => match self.page.focus {
                Focus::LanguageSelector => self.handle_language_key(key),
                Focus::Contact => self.handle_contact_key(key),
                Focus::Field(_) => self.handle_field_key(key),
                Focus::SignButton => self.handle_sign_button_key(key),
            },
        }
    }

    fn is_sign_shortcut(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SIGN_MODIFIER))
    }

    fn handle_language_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Left | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ')
        ) {
            self.page.cycle_language();
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.page.contact();
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('u') if Self::is_control_chord(&key) => self.page.clear_field(),
            KeyCode::Char(_) if Self::is_control_chord(&key) => {}
            KeyCode::Char(c) => self.page.input_char(c),
            KeyCode::Backspace => self.page.backspace(),
            KeyCode::Enter => self.page.focus_next(),
            _ => {}
        }
    }

    /// Ctrl chords are commands. AltGr arrives as Ctrl+Alt on Windows and
    /// still types its character.
    fn is_control_chord(key: &KeyEvent) -> bool {
        let mods = key.modifiers;
        mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::ALT)
    }

    fn handle_sign_button_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.page.sign();
        }
    }
}
