use crate::app::App;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

pub(super) fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(target) = app.click_target_at(mouse.column, mouse.row) {
        app.clear_status();
        app.click(target);
    }
}
