use crate::form::{Field, FormController, FormState, Submission};

/// How many ticks the accepted-submission panel stays on screen.
const BANNER_TICKS: u8 = 16;

/// Which input field owns the cursor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Name,
    Email,
}

impl Focus {
    pub fn field(self) -> Field {
        match self {
            Focus::Name => Field::Name,
            Focus::Email => Field::Email,
        }
    }

    fn other(self) -> Focus {
        match self {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Name,
        }
    }
}

/// Top-level UI state: the form controller plus presentation-only bits
/// (focus, quit flag, accepted banner). Form data itself only moves through
/// the reducer.
pub struct App {
    form: FormController,
    focus: Focus,
    should_quit: bool,
    last_accepted: Option<Submission>,
    banner_ticks_left: u8,
}

impl App {
    pub fn new() -> Self {
        Self {
            form: FormController::new(),
            focus: Focus::Name,
            should_quit: false,
            last_accepted: None,
            banner_ticks_left: 0,
        }
    }

    pub fn form_state(&self) -> &FormState {
        self.form.state()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn focus_prev(&mut self) {
        // Two fields: previous and next coincide.
        self.focus = self.focus.other();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Append a typed character to the focused field.
    pub fn on_char(&mut self, ch: char) {
        let field = self.focus.field();
        let mut value = self.form.state().value(field).to_string();
        value.push(ch);
        self.form.on_field_change(field, value);
    }

    /// Insert pasted text into the focused field. Control characters
    /// (newlines from multi-line pastes included) are dropped; the fields
    /// are single-line.
    pub fn on_paste(&mut self, text: &str) {
        let field = self.focus.field();
        let mut value = self.form.state().value(field).to_string();
        value.extend(text.chars().filter(|ch| !ch.is_control()));
        self.form.on_field_change(field, value);
    }

    /// Delete the last character of the focused field.
    pub fn on_backspace(&mut self) {
        let field = self.focus.field();
        let mut value = self.form.state().value(field).to_string();
        if value.pop().is_some() {
            self.form.on_field_change(field, value);
        }
    }

    /// Submit the form. On acceptance the submission is kept for the exit
    /// report and the on-screen banner is armed.
    pub fn on_submit(&mut self) {
        if let Some(submission) = self.form.on_submit() {
            self.last_accepted = Some(submission);
            self.banner_ticks_left = BANNER_TICKS;
        } else {
            self.banner_ticks_left = 0;
        }
    }

    pub fn on_tick(&mut self) {
        self.banner_ticks_left = self.banner_ticks_left.saturating_sub(1);
    }

    /// Submission to show in the accepted panel, while it lasts.
    pub fn banner(&self) -> Option<&Submission> {
        if self.banner_ticks_left > 0 {
            self.last_accepted.as_ref()
        } else {
            None
        }
    }

    /// Last accepted submission, reported to stdout after the session.
    pub fn into_last_accepted(self) -> Option<Submission> {
        self.last_accepted
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::NAME_REQUIRED_MESSAGE;

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.on_char(ch);
        }
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut app = App::new();
        type_str(&mut app, "Ana");
        app.focus_next();
        type_str(&mut app, "a@b.com");
        assert_eq!(app.form_state().name, "Ana");
        assert_eq!(app.form_state().email, "a@b.com");
    }

    #[test]
    fn paste_appends_to_focused_field() {
        let mut app = App::new();
        app.on_char('A');
        app.on_paste("na");
        assert_eq!(app.form_state().name, "Ana");

        app.focus_next();
        app.on_paste("a@b.com");
        assert_eq!(app.form_state().email, "a@b.com");
    }

    #[test]
    fn paste_drops_control_characters() {
        let mut app = App::new();
        app.on_paste("Ana\nBia\r\t");
        assert_eq!(app.form_state().name, "AnaBia");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut app = App::new();
        type_str(&mut app, "Anaa");
        app.on_backspace();
        assert_eq!(app.form_state().name, "Ana");
    }

    #[test]
    fn backspace_on_empty_field_is_noop() {
        let mut app = App::new();
        app.on_backspace();
        assert_eq!(app.form_state().name, "");
    }

    #[test]
    fn focus_cycles_between_two_fields() {
        let mut app = App::new();
        assert_eq!(app.focus(), Focus::Name);
        app.focus_next();
        assert_eq!(app.focus(), Focus::Email);
        app.focus_next();
        assert_eq!(app.focus(), Focus::Name);
        app.focus_prev();
        assert_eq!(app.focus(), Focus::Email);
    }

    #[test]
    fn submit_empty_shows_error_and_no_banner() {
        let mut app = App::new();
        app.on_submit();
        assert_eq!(app.form_state().errors.name, NAME_REQUIRED_MESSAGE);
        assert!(app.banner().is_none());
        assert_eq!(app.into_last_accepted(), None);
    }

    #[test]
    fn submit_valid_arms_banner_and_keeps_submission() {
        let mut app = App::new();
        type_str(&mut app, "Ana");
        app.on_submit();
        assert_eq!(app.banner().map(|s| s.name.as_str()), Some("Ana"));
        let accepted = app.into_last_accepted().expect("accepted submission");
        assert_eq!(accepted.name, "Ana");
        assert_eq!(accepted.email, "");
    }

    #[test]
    fn banner_expires_after_ticks() {
        let mut app = App::new();
        type_str(&mut app, "Ana");
        app.on_submit();
        assert!(app.banner().is_some());
        for _ in 0..super::BANNER_TICKS {
            app.on_tick();
        }
        assert!(app.banner().is_none());
        // The exit report survives the banner.
        assert!(app.into_last_accepted().is_some());
    }

    #[test]
    fn rejected_submit_clears_banner() {
        let mut app = App::new();
        type_str(&mut app, "Ana");
        app.on_submit();
        assert!(app.banner().is_some());

        // Clear the name and resubmit: the error must come back fresh.
        for _ in 0..3 {
            app.on_backspace();
        }
        app.on_submit();
        assert_eq!(app.form_state().errors.name, NAME_REQUIRED_MESSAGE);
        assert!(app.banner().is_none());
    }
}
