use super::*;

/// One calculator field: the editable text on the first line, the parsed
/// value (or why it does not parse) on the second.
pub fn render_input(frame: &mut Frame, area: Rect, app: &mut App, id: InputId) {
    let is_focused = app.focused == id;
    let input = app.input(id);

    let text_line = if is_focused {
        let (before, after) = input.split_at_cursor();
        Line::from(Span::styled(
            format!("{}█{}", before, after),
            Style::default().fg(Color::White),
        ))
    } else if input.value.is_empty() {
        Line::from(Span::styled(
            id.placeholder(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            input.value.clone(),
            Style::default().fg(Color::White),
        ))
    };

    let preview_line = match app.preview(id) {
        Preview::Valid(value) => Line::from(Span::styled(value, Style::default().fg(Color::Cyan))),
        Preview::Invalid(reason) => {
            Line::from(Span::styled(reason, Style::default().fg(Color::Red)))
        }
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(vec![text_line, preview_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(id.label())
            .border_style(border_style)
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(paragraph, area);
    app.click_targets.push((area, ClickTarget::Input(id)));
}
