use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_table::assets::CardAtlas;
use poker_table::config::TableConfig;
use poker_table::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "poker-table requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            poker_table::VERSION
        );
        return Ok(());
    }
    let config = TableConfig::from_env();
    poker_table::logging::init(&config.log_file, log::LevelFilter::Debug)?;
    log::info!("poker-table {} starting", poker_table::VERSION);

    // Assets are loaded before the terminal is taken over so failures stay readable.
    let atlas = match CardAtlas::load(&config.assets_dir) {
        Ok(atlas) => atlas,
        Err(err) => {
            log::error!("{err}");
            eprintln!("poker-table: {err}");
            return Err(io::Error::other(err));
        }
    };

    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(config, atlas);

    let res = controller::run(&mut terminal, &mut app);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
