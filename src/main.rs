//! Login-flow
//!
//! Two-screen login flow in the terminal.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use login_flow::activity::ActivityAction;
use login_flow::app::{App, AppConfig};

fn main() -> anyhow::Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let config_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(AppConfig::default_path);

    let config = AppConfig::load(&config_path)?;
    let mut app = App::new(config);
    if !config_path.exists() {
        let details = format!("{} not found, using defaults", config_path.display());
        app.activity.record(ActivityAction::Config, Some(&details));
    }

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(err);
        }
    };

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("failed to create terminal")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let tick_rate = app.config.tick_rate();

    loop {
        if app.take_repaint() {
            terminal.draw(|frame| app.render(frame))?;
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key_event(key) {
                        break;
                    }
                }
                Event::Resize(_, _) => app.request_repaint(),
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
