use super::*;
use durcalc::{Mode, Operation};

pub fn render_calculator_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Mode
            Constraint::Length(3), // Operation
            Constraint::Length(4), // First input
            Constraint::Length(4), // Second input
            Constraint::Length(3), // Result
            Constraint::Length(6), // Keypad
            Constraint::Length(3), // Status
            Constraint::Length(4), // Controls (2 rows)
            Constraint::Min(0),
        ])
        .split(body);

    render_mode_row(frame, chunks[0], app);
    render_operation_row(frame, chunks[1], app);

    let [first, second] = inputs_for(app.mode);
    widgets::render_input(frame, chunks[2], app, first);
    widgets::render_input(frame, chunks[3], app, second);

    render_result(frame, chunks[4], app);
    keypad::render_keypad(frame, chunks[5], app);
    render_status(frame, chunks[6], app);
    render_controls(frame, chunks[7]);
}

fn render_mode_row(frame: &mut Frame, area: Rect, app: &mut App) {
    let options: Vec<RadioOption> = Mode::ALL
        .iter()
        .zip(["F1", "F2", "F3"])
        .map(|(mode, key)| RadioOption {
            label: format!("{} [{}]", mode.label(), key),
            selected: app.mode == *mode,
            target: ClickTarget::Mode(*mode),
        })
        .collect();
    render_radio_row(frame, area, " Mode ", &options, false, app);
}

fn render_operation_row(frame: &mut Frame, area: Rect, app: &mut App) {
    let options: Vec<RadioOption> = Operation::ALL
        .iter()
        .zip(["F5", "F6"])
        .map(|(operation, key)| RadioOption {
            label: format!("{} {} [{}]", operation.symbol(), operation, key),
            selected: app.operation == *operation,
            target: ClickTarget::Operation(*operation),
        })
        .collect();
    let locked = app.operation_locked();
    render_radio_row(frame, area, " Operation ", &options, locked, app);
}

struct RadioOption {
    label: String,
    selected: bool,
    target: ClickTarget,
}

fn render_radio_row(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    options: &[RadioOption],
    disabled: bool,
    app: &mut App,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(options.iter().map(|_| Constraint::Ratio(1, options.len() as u32)))
        .split(inner);

    for (option, cell) in options.iter().zip(cells.iter()) {
        let marker = if option.selected { "(•) " } else { "( ) " };
        let style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else if option.selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let text = Paragraph::new(Line::from(Span::styled(
            format!("{}{}", marker, option.label),
            style,
        )));
        frame.render_widget(text, *cell);
        app.click_targets.push((*cell, option.target));
    }
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    // Blank while any operand of the current mode is invalid
    let line = match app.result() {
        Some(result) => Line::from(vec![
            Span::styled("= ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                result,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(""),
    };

    let result = Paragraph::new(line).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Result ")
            .border_style(Style::default().fg(Color::Green))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(result, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let (status_text, color) = match &app.status_message {
        Some(message) => (message.clone(), Color::Red),
        None if app.focused.is_duration() => (
            "Type a duration like 1y3mon20d, or use the keypad".to_string(),
            Color::White,
        ),
        None => (
            "Type a date like 2024-01-31T09:30 (keypad is disabled for dates)".to_string(),
            Color::White,
        ),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(color))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = vec![
        Span::styled("Tab / ↑↓", Style::default().fg(Color::Yellow)),
        Span::raw(": Next field  "),
        Span::styled("F1-F3", Style::default().fg(Color::Yellow)),
        Span::raw(": Mode  "),
        Span::styled("F5/F6", Style::default().fg(Color::Yellow)),
        Span::raw(": Plus/Minus  "),
        Span::styled("Ctrl+X", Style::default().fg(Color::Yellow)),
        Span::raw(": Clear field  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ];

    let line2 = vec![
        Span::styled("Alt+0-9", Style::default().fg(Color::Yellow)),
        Span::raw(": Digit  "),
        Span::styled("Alt+y q o w d h i s m", Style::default().fg(Color::Yellow)),
        Span::raw(": y q mon w d h min s ms  "),
        Span::styled("Ctrl+T", Style::default().fg(Color::Yellow)),
        Span::raw(": Token table  "),
        Span::styled("Click", Style::default().fg(Color::Yellow)),
        Span::raw(": Press"),
    ];

    let controls = Paragraph::new(vec![Line::from(line1), Line::from(line2)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                )]))
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}
