use crate::app::{App, Dial};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use durcalc::{Mode, Operation};

pub(super) fn handle_key(key: KeyEvent, app: &mut App) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Any key press replaces the previous status line
    app.clear_status();

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),
        // Ctrl+X: clear the focused field
        KeyCode::Char('x') if ctrl => app.input_clear(),
        // Ctrl+T: show/hide the token table
        KeyCode::Char('t') if ctrl => app.toggle_token_legend(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
        KeyCode::F(1) => app.set_mode(Mode::Durations),
        KeyCode::F(2) => app.set_mode(Mode::DurationToDate),
        KeyCode::F(3) => app.set_mode(Mode::DateDifference),
        KeyCode::F(5) => {
            app.set_operation(Operation::Plus);
        }
        KeyCode::F(6) => {
            app.set_operation(Operation::Minus);
        }
        // Alt+key: keypad shortcut
        KeyCode::Char(c) if alt => {
            if let Some(dial) = Dial::from_shortcut(c) {
                if !app.press_dial(dial) {
                    app.set_status("Keypad only types into duration fields".to_string());
                }
            }
        }
        KeyCode::Char(c) if !ctrl => app.input_char(c),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Delete => app.input_delete(),
        KeyCode::Left => app.input_move_cursor(true),
        KeyCode::Right => app.input_move_cursor(false),
        KeyCode::Home => app.input_cursor_home_end(true),
        KeyCode::End => app.input_cursor_home_end(false),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::InputId;
    use crate::config::CalcConfig;
    use time::UtcOffset;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(key(KeyCode::Char(c)), app);
        }
    }

    fn test_app() -> App {
        App::new(&CalcConfig::default(), UtcOffset::UTC)
    }

    #[test]
    fn typing_fills_focused_field_and_tab_moves_on() {
        let mut app = test_app();
        type_str(&mut app, "1h");
        handle_key(key(KeyCode::Tab), &mut app);
        type_str(&mut app, "30min");

        assert_eq!(app.input(InputId::DurationA).value, "1h");
        assert_eq!(app.input(InputId::DurationB).value, "30min");
        assert_eq!(app.result().as_deref(), Some("1 hour, 30 minutes"));

        handle_key(key(KeyCode::F(6)), &mut app);
        assert_eq!(app.result().as_deref(), Some("30 minutes"));
    }

    #[test]
    fn function_keys_switch_mode_and_reset_focus() {
        let mut app = test_app();
        handle_key(key(KeyCode::Tab), &mut app);
        assert_eq!(app.focused, InputId::DurationB);

        handle_key(key(KeyCode::F(2)), &mut app);
        assert_eq!(app.mode, Mode::DurationToDate);
        assert_eq!(app.focused, InputId::DateA);

        handle_key(key(KeyCode::F(3)), &mut app);
        assert_eq!(app.mode, Mode::DateDifference);
        assert_eq!(app.operation, Operation::Minus);

        handle_key(key(KeyCode::F(5)), &mut app);
        assert_eq!(app.operation, Operation::Minus);
        assert!(app.status_message.is_some());

        handle_key(key(KeyCode::F(1)), &mut app);
        assert_eq!(app.focused, InputId::DurationA);
    }

    #[test]
    fn alt_shortcuts_press_dials() {
        let mut app = test_app();
        handle_key(alt('4'), &mut app);
        handle_key(alt('5'), &mut app);
        handle_key(alt('i'), &mut app);
        handle_key(alt('2'), &mut app);
        handle_key(alt('s'), &mut app);
        assert_eq!(app.input(InputId::DurationA).value, "45min2s");
    }

    #[test]
    fn alt_shortcuts_are_inert_on_dates() {
        let mut app = test_app();
        handle_key(key(KeyCode::F(3)), &mut app);
        handle_key(alt('4'), &mut app);
        assert_eq!(app.input(InputId::DateA).value, "");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Keypad only types into duration fields")
        );
    }

    #[test]
    fn editing_keys() {
        let mut app = test_app();
        type_str(&mut app, "12h");
        handle_key(key(KeyCode::Home), &mut app);
        handle_key(key(KeyCode::Delete), &mut app);
        handle_key(key(KeyCode::End), &mut app);
        handle_key(key(KeyCode::Left), &mut app);
        handle_key(key(KeyCode::Backspace), &mut app);
        assert_eq!(app.input(InputId::DurationA).value, "h");

        handle_key(ctrl('x'), &mut app);
        assert_eq!(app.input(InputId::DurationA).value, "");
    }

    #[test]
    fn ctrl_t_toggles_legend_without_typing() {
        let mut app = test_app();
        assert!(app.show_token_legend);
        handle_key(ctrl('t'), &mut app);
        assert!(!app.show_token_legend);
        assert_eq!(app.input(InputId::DurationA).value, "");
    }

    #[test]
    fn q_is_text_and_esc_quits() {
        let mut app = test_app();
        type_str(&mut app, "1q");
        assert!(app.running);
        assert_eq!(app.input(InputId::DurationA).value, "1q");

        handle_key(key(KeyCode::Esc), &mut app);
        assert!(!app.running);
    }
}
