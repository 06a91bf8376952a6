use super::*;
use durcalc::Unit;

pub fn render_keypad(frame: &mut Frame, area: Rect, app: &mut App) {
    let constraints = if app.show_token_legend {
        [
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(45),
        ]
    } else {
        [
            Constraint::Percentage(45),
            Constraint::Percentage(55),
            Constraint::Length(0),
        ]
    };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let digit_rows: Vec<Vec<Dial>> = Dial::DIGIT_ROWS
        .iter()
        .map(|row| row.iter().map(|d| Dial::Digit(*d)).collect())
        .collect();
    let token_rows: Vec<Vec<Dial>> = Dial::TOKEN_ROWS
        .iter()
        .map(|row| row.iter().map(|u| Dial::Token(*u)).collect())
        .collect();

    render_dial_grid(frame, cols[0], " Digits ", &digit_rows, app);
    render_dial_grid(frame, cols[1], " Units ", &token_rows, app);
    if app.show_token_legend {
        render_token_legend(frame, cols[2]);
    }
}

fn render_dial_grid(frame: &mut Frame, area: Rect, title: &str, rows: &[Vec<Dial>], app: &mut App) {
    // Buttons only feed duration fields
    let enabled = app.focused.is_duration();
    let (border_color, button_style) = if enabled {
        (
            Color::Yellow,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Color::DarkGray, Style::default().fg(Color::DarkGray))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|_| Constraint::Length(1)))
        .split(inner);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row_area);
        for (dial, cell) in row.iter().zip(cells.iter()) {
            let button = Paragraph::new(format!("[ {} ]", dial.text()))
                .style(button_style)
                .alignment(Alignment::Center);
            frame.render_widget(button, *cell);
            app.click_targets.push((*cell, ClickTarget::Dial(*dial)));
        }
    }
}

fn render_token_legend(frame: &mut Frame, area: Rect) {
    let token_style = Style::default().fg(Color::Yellow);
    let unit_style = Style::default().fg(Color::Gray);

    let rows = Dial::TOKEN_ROWS.iter().map(|units| {
        Row::new(units.iter().flat_map(|unit: &Unit| {
            [
                Cell::from(Span::styled(unit.token(), token_style)),
                Cell::from(Span::styled(unit.plural(), unit_style)),
            ]
        }))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Min(8),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Tokens ")
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(table, area);
}
