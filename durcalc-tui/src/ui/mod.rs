use crate::app::{inputs_for, App, ClickTarget, Dial, InputId, Preview};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
    Frame,
};

mod calculator_view;
mod keypad;
mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Hit regions are rebuilt from scratch every frame
    app.click_targets.clear();
    calculator_view::render_calculator_view(frame, app, frame.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalcConfig;
    use durcalc::{Mode, Unit};
    use ratatui::{backend::TestBackend, Terminal};
    use time::UtcOffset;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_result_and_previews() {
        let mut app = App::new(&CalcConfig::default(), UtcOffset::UTC);
        app.duration_a = crate::app::TextInput::from_str("90min");
        app.duration_b = crate::app::TextInput::from_str("5z");
        let screen = draw(&mut app);

        assert!(screen.contains("First duration"));
        assert!(screen.contains("1 hour, 30 minutes"));
        assert!(screen.contains("Invalid duration token"));
    }

    #[test]
    fn renders_date_fields_in_date_modes() {
        let mut app = App::new(&CalcConfig::default(), UtcOffset::UTC);
        app.set_mode(Mode::DateDifference);
        app.date_a = crate::app::TextInput::from_str("2024-01-01T00:00");
        app.date_b = crate::app::TextInput::from_str("2024-01-02T00:00");
        let screen = draw(&mut app);

        assert!(screen.contains("Second date"));
        assert!(!screen.contains("First duration"));
        assert!(screen.contains("January 1, 2024 at 12:00 AM UTC"));
        assert!(screen.contains("= 1 day"));
    }

    #[test]
    fn registers_click_targets_for_every_control() {
        let mut app = App::new(&CalcConfig::default(), UtcOffset::UTC);
        draw(&mut app);

        let has = |target: ClickTarget| app.click_targets.iter().any(|(_, t)| *t == target);
        assert!(has(ClickTarget::Input(InputId::DurationA)));
        assert!(has(ClickTarget::Input(InputId::DurationB)));
        assert!(has(ClickTarget::Mode(Mode::DateDifference)));
        assert!(has(ClickTarget::Operation(durcalc::Operation::Minus)));
        assert!(has(ClickTarget::Dial(Dial::Digit(0))));
        assert!(has(ClickTarget::Dial(Dial::Token(Unit::Milliseconds))));
        assert!(!has(ClickTarget::Input(InputId::DateA)));
    }

    #[test]
    fn clicking_a_rendered_button_appends_its_text() {
        let mut app = App::new(&CalcConfig::default(), UtcOffset::UTC);
        draw(&mut app);

        let (area, _) = *app
            .click_targets
            .iter()
            .find(|(_, t)| *t == ClickTarget::Dial(Dial::Token(Unit::Weeks)))
            .expect("weeks button should be rendered");
        let target = app.click_target_at(area.x, area.y).unwrap();
        app.click(target);
        assert_eq!(app.duration_a.value, "w");
    }
}
