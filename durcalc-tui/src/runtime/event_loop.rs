use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::keys::handle_key;
use super::mouse::handle_mouse;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app),
                Event::Mouse(mouse) => handle_mouse(mouse, app),
                _ => {}
            }
        }

        if !app.running {
            break;
        }
    }

    tracing::info!("calculator closed");
    Ok(())
}
