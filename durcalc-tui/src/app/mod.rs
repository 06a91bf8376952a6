use crate::config::CalcConfig;
use durcalc::{
    calculate, format_date, format_duration, parse_date_input, parse_duration_input, Mode,
    Operands, Operation,
};
use ratatui::layout::{Position, Rect};
use time::UtcOffset;

mod navigation;
mod state;
pub use state::{default_focus, inputs_for, ClickTarget, Dial, InputId, TextInput};

pub struct App {
    pub running: bool,
    pub mode: Mode,
    pub operation: Operation,
    pub focused: InputId,
    pub status_message: Option<String>,

    // Raw field text; parsed values are derived on every render
    pub duration_a: TextInput,
    pub duration_b: TextInput,
    pub date_a: TextInput,
    pub date_b: TextInput,

    pub show_token_legend: bool,
    pub local_offset: UtcOffset,

    // Clickable regions from the last rendered frame (updated by renderer each frame)
    pub click_targets: Vec<(Rect, ClickTarget)>,
}

/// What a field currently holds: a formatted value or the reason it is invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Valid(String),
    Invalid(String),
}

impl App {
    pub fn new(cfg: &CalcConfig, local_offset: UtcOffset) -> Self {
        let mut app = Self {
            running: true,
            mode: Mode::Durations,
            operation: cfg.default_operation,
            focused: default_focus(Mode::Durations),
            status_message: None,
            duration_a: TextInput::new(),
            duration_b: TextInput::new(),
            date_a: TextInput::new(),
            date_b: TextInput::new(),
            show_token_legend: cfg.show_token_legend,
            local_offset,
            click_targets: Vec::new(),
        };
        app.set_mode(cfg.default_mode);
        app
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Switch mode. Focus jumps to the mode's first field; date difference
    /// pins the operation to minus.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.focused = default_focus(mode);
        if mode == Mode::DateDifference {
            self.operation = Operation::Minus;
        }
        tracing::debug!(%mode, focused = ?self.focused, "mode changed");
    }

    pub fn operation_locked(&self) -> bool {
        self.mode == Mode::DateDifference
    }

    /// Returns false when the operation is locked by the current mode.
    pub fn set_operation(&mut self, operation: Operation) -> bool {
        if self.operation_locked() {
            self.set_status("Date difference always subtracts the first date".to_string());
            return false;
        }
        self.operation = operation;
        tracing::debug!(%operation, "operation changed");
        true
    }

    pub fn focus(&mut self, id: InputId) {
        self.focused = id;
    }

    pub fn input(&self, id: InputId) -> &TextInput {
        match id {
            InputId::DateA => &self.date_a,
            InputId::DateB => &self.date_b,
            InputId::DurationA => &self.duration_a,
            InputId::DurationB => &self.duration_b,
        }
    }

    pub fn input_mut(&mut self, id: InputId) -> &mut TextInput {
        match id {
            InputId::DateA => &mut self.date_a,
            InputId::DateB => &mut self.date_b,
            InputId::DurationA => &mut self.duration_a,
            InputId::DurationB => &mut self.duration_b,
        }
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        self.input_mut(self.focused)
    }

    /// Keypad press. Appends to the focused field when it holds a duration;
    /// does nothing on date fields.
    pub fn press_dial(&mut self, dial: Dial) -> bool {
        if !self.focused.is_duration() {
            tracing::debug!(?dial, focused = ?self.focused, "keypad ignored on date field");
            return false;
        }
        self.focused_input_mut().append(&dial.text());
        true
    }

    pub fn input_char(&mut self, c: char) {
        self.focused_input_mut().insert(c);
    }

    pub fn input_backspace(&mut self) {
        self.focused_input_mut().backspace();
    }

    pub fn input_delete(&mut self) {
        self.focused_input_mut().delete();
    }

    pub fn input_move_cursor(&mut self, left: bool) {
        let input = self.focused_input_mut();
        if left {
            input.move_left();
        } else {
            input.move_right();
        }
    }

    pub fn input_cursor_home_end(&mut self, home: bool) {
        let input = self.focused_input_mut();
        if home {
            input.home();
        } else {
            input.end();
        }
    }

    pub fn input_clear(&mut self) {
        self.focused_input_mut().clear();
    }

    pub fn toggle_token_legend(&mut self) {
        self.show_token_legend = !self.show_token_legend;
    }

    pub fn operands(&self) -> Operands<'_> {
        Operands {
            duration_a: &self.duration_a.value,
            duration_b: &self.duration_b.value,
            date_a: &self.date_a.value,
            date_b: &self.date_b.value,
        }
    }

    /// Result line for the current mode, `None` while an operand is invalid.
    pub fn result(&self) -> Option<String> {
        calculate(self.mode, self.operation, &self.operands(), self.local_offset)
    }

    pub fn preview(&self, id: InputId) -> Preview {
        let text = &self.input(id).value;
        let parsed = if id.is_duration() {
            parse_duration_input(text).map(|d| format_duration(&d))
        } else {
            parse_date_input(text).map(|d| format_date(&d, self.local_offset))
        };
        match parsed {
            Ok(value) => Preview::Valid(value),
            Err(invalid) => Preview::Invalid(invalid.reason),
        }
    }

    pub fn click_target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        self.click_targets
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Input(id) => self.focus(id),
            ClickTarget::Mode(mode) => self.set_mode(mode),
            ClickTarget::Operation(operation) => {
                self.set_operation(operation);
            }
            ClickTarget::Dial(dial) => {
                if !self.press_dial(dial) {
                    self.set_status("Keypad only types into duration fields".to_string());
                }
            }
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use durcalc::Unit;

    fn test_app() -> App {
        App::new(&CalcConfig::default(), UtcOffset::UTC)
    }

    #[test]
    fn test_starts_in_configured_mode() {
        let cfg = CalcConfig {
            default_mode: Mode::DateDifference,
            default_operation: Operation::Plus,
            ..CalcConfig::default()
        };
        let app = App::new(&cfg, UtcOffset::UTC);
        assert_eq!(app.mode, Mode::DateDifference);
        assert_eq!(app.focused, InputId::DateA);
        assert_eq!(app.operation, Operation::Minus);
    }

    #[test]
    fn test_mode_change_resets_focus() {
        let mut app = test_app();
        for (mode, expected) in [
            (Mode::Durations, InputId::DurationA),
            (Mode::DurationToDate, InputId::DateA),
            (Mode::DateDifference, InputId::DateA),
        ] {
            app.focus(InputId::DurationB);
            app.set_mode(mode);
            assert_eq!(app.focused, expected, "mode {:?}", mode);
        }
    }

    #[test]
    fn test_date_difference_locks_operation() {
        let mut app = test_app();
        assert_eq!(app.operation, Operation::Plus);
        app.set_mode(Mode::DateDifference);
        assert_eq!(app.operation, Operation::Minus);
        assert!(!app.set_operation(Operation::Plus));
        assert_eq!(app.operation, Operation::Minus);
        assert!(app.status_message.is_some());

        app.set_mode(Mode::Durations);
        assert!(app.set_operation(Operation::Plus));
        assert_eq!(app.operation, Operation::Plus);
    }

    #[test]
    fn test_dial_appends_to_focused_duration() {
        let mut app = test_app();
        app.focus(InputId::DurationB);
        assert!(app.press_dial(Dial::Digit(9)));
        assert!(app.press_dial(Dial::Digit(0)));
        assert!(app.press_dial(Dial::Token(Unit::Minutes)));
        assert_eq!(app.duration_b.value, "90min");
        assert_eq!(app.duration_a.value, "");
        assert_eq!(app.preview(InputId::DurationB), Preview::Valid("1 hour, 30 minutes".to_string()));
    }

    #[test]
    fn test_dial_is_inert_on_date_fields() {
        let mut app = test_app();
        app.set_mode(Mode::DurationToDate);
        assert_eq!(app.focused, InputId::DateA);
        assert!(!app.press_dial(Dial::Digit(1)));
        assert!(!app.press_dial(Dial::Token(Unit::Days)));
        assert_eq!(app.date_a.value, "");
    }

    #[test]
    fn test_typing_reaches_date_fields() {
        let mut app = test_app();
        app.set_mode(Mode::DateDifference);
        for c in "2024-01-01T00:00".chars() {
            app.input_char(c);
        }
        app.focus(InputId::DateB);
        for c in "2024-01-02T00:00".chars() {
            app.input_char(c);
        }
        assert_eq!(app.result().as_deref(), Some("1 day"));
    }

    #[test]
    fn test_result_blank_while_invalid() {
        let mut app = test_app();
        app.duration_a = TextInput::from_str("1h");
        app.duration_b = TextInput::from_str("5z");
        assert_eq!(app.result(), None);
        assert_eq!(
            app.preview(InputId::DurationB),
            Preview::Invalid("Invalid duration token".to_string())
        );
        app.duration_b = TextInput::from_str("30min");
        assert_eq!(app.result().as_deref(), Some("1 hour, 30 minutes"));
    }

    #[test]
    fn test_empty_date_preview_is_unparsable() {
        let app = test_app();
        assert_eq!(
            app.preview(InputId::DateA),
            Preview::Invalid("unparsable".to_string())
        );
    }

    #[test]
    fn test_click_targets() {
        let mut app = test_app();
        app.click_targets = vec![
            (Rect::new(0, 0, 10, 3), ClickTarget::Input(InputId::DurationB)),
            (Rect::new(0, 5, 5, 1), ClickTarget::Dial(Dial::Token(Unit::Hours))),
            (Rect::new(10, 5, 5, 1), ClickTarget::Mode(Mode::DurationToDate)),
        ];
        assert_eq!(app.click_target_at(20, 20), None);

        let target = app.click_target_at(3, 1).unwrap();
        app.click(target);
        assert_eq!(app.focused, InputId::DurationB);

        let target = app.click_target_at(4, 5).unwrap();
        app.click(target);
        assert_eq!(app.duration_b.value, "h");

        let target = app.click_target_at(12, 5).unwrap();
        app.click(target);
        assert_eq!(app.mode, Mode::DurationToDate);
        assert_eq!(app.focused, InputId::DateA);

        let target = app.click_target_at(4, 5).unwrap();
        app.click(target);
        assert_eq!(app.date_a.value, "");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Keypad only types into duration fields")
        );
    }
}
