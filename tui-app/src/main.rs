mod app;
mod keys;
mod menu_model;
mod mode;
mod util;
mod views;

use std::io::stdout;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use folio_config::ConfigStore;

/// Folio - a tabbed table editor shell for the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - a tabbed table editor shell for the terminal")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    env_logger::init();

    let config = ConfigStore::default_location();
    let mut app = App::new(config);
    app.restore_session();

    let result = run_app(&mut app);

    // Settings load once at startup and save once here, on the way out.
    app.persist();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_app(app: &mut App) -> Result<(), String> {
    terminal::enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {}", e))?;
    stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| format!("failed to enter alternate screen: {}", e))?;

    struct Cleanup;
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = stdout().execute(LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
        }
    }
    let _cleanup = Cleanup;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("failed to create terminal: {}", e))?;

    let mut title = String::new();
    loop {
        if let Ok(size) = terminal.size() {
            app.last_size = (size.width, size.height);
        }

        let wanted = app.window_title();
        if wanted != title {
            let _ = stdout().execute(SetTitle(wanted.clone()));
            title = wanted;
        }

        app.tick();
        terminal
            .draw(|frame| views::draw(app, frame))
            .map_err(|e| format!("draw error: {}", e))?;

        if event::poll(Duration::from_millis(100))
            .map_err(|e| format!("event poll error: {}", e))?
        {
            match event::read().map_err(|e| format!("event read error: {}", e))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(width, height) => app.last_size = (width, height),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
