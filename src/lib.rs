pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod surface;
#[doc(hidden)]
pub mod test_support;
pub mod ui;

use std::io::{self, Stdout};

use anyhow::Result;
use app::events::{AppEvent, spawn_input_task};
use app::settings::load_runtime_settings;
use app::state::{AppMode, AppState};
use cli::Cli;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(terminal: &mut Tui, cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);

    let (settings, settings_path) = load_runtime_settings(&cli, !cli.no_save);
    let size = terminal.size()?;
    let mut app = AppState::new(&cli, settings, settings_path, (size.width, size.height));

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;
    Ok(())
}

/// Undoes raw mode and the alternate screen; the raster leaves no other state.
fn leave_screen(out: &mut impl io::Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen)
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = leave_screen(&mut io::stdout());
        existing(panic);
    }));
}
