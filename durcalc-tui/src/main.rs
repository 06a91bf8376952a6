mod app;
mod cli;
mod config;
mod eval;
mod logging;
mod runtime;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::CalcConfig;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use time::UtcOffset;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = CalcConfig::load()?;

    // Read the local offset before anything else runs; some platforms refuse
    // once the process might be multi-threaded.
    let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(&cfg, local_offset),
        Commands::Eval {
            mode,
            a,
            b,
            operation,
        } => {
            let result = eval::evaluate(mode, operation, &a, &b, local_offset)?;
            println!("{}", result);
            Ok(())
        }
        Commands::ConfigPath => {
            let path = CalcConfig::config_path()?;
            if !path.exists() {
                CalcConfig::default().save()?;
                println!("Created default config at: {}", path.display());
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

fn run(cfg: &CalcConfig, local_offset: UtcOffset) -> Result<()> {
    let log_path = CalcConfig::log_path()?;
    logging::init(&log_path, &cfg.log_filter)?;
    tracing::info!(mode = %cfg.default_mode, %local_offset, "starting calculator");

    let mut app = App::new(cfg, local_offset);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = runtime::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "calculator exited with an error");
    }
    res
}
