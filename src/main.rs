use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use gridsnek::config::{Settings, LOG_FILE};
use gridsnek::game::Game;
use gridsnek::input::handle_key;
use gridsnek::render;

/// How long to wait for input before drawing the next frame.
const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() -> Result<(), io::Error> {
    // Set up logging before anything else
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(LOG_FILE)?)
        .map_err(io::Error::other)?;

    info!("Starting gridsnek");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new(Settings::default());
    let result = run(&mut terminal, &mut game);
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    // Cleanup terminal; errors here are only logged
    if let Err(e) = disable_raw_mode() {
        error!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
        error!("Failed to leave alternate screen: {}", e);
    }
    if let Err(e) = terminal.show_cursor() {
        error!("Failed to show cursor: {}", e);
    }

    info!("Exiting, best score {}", game.best_score());
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, game: &mut Game) -> io::Result<()> {
    loop {
        terminal.draw(|f| render::render(f, &game.snapshot()))?;

        if event::poll(FRAME_TIME)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !handle_key(game, key) {
                    return Ok(());
                }
            }
        }

        game.on_frame(Instant::now());
    }
}
