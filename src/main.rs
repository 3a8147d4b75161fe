mod api;
mod app;
mod config;
mod logging;
mod ui;

use crate::api::client::TriviaClient;
use crate::api::manager::ApiManager;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::app::view;
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::info!(log_file = %path.display(), "crabquiz starting");
    }

    let client = TriviaClient::new(&cfg.api.base_url, Duration::from_secs(cfg.api.timeout_secs))
        .with_context(|| format!("Failed to create trivia client for {}", cfg.api.base_url))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, client).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting on fatal error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    client: TriviaClient,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg);
    let api = ApiManager::new(client, event_tx.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (10 FPS = 100ms), drives the loading spinner
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // The start control stays disabled until a token arrives
    dispatch(&api, &mut state, vec![Action::FetchToken]);

    // Initial render
    draw(terminal, &state)?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event)?;
        dispatch(&api, &mut state, actions);

        if state.should_quit {
            tracing::info!("quit requested");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            draw(terminal, &state)?;
            state.dirty = false;
        }
    }

    Ok(())
}

fn dispatch(api: &ApiManager, state: &mut AppState, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::FetchToken => api.request_token(),
            Action::FetchQuestions { amount, filters } => api.request_questions(amount, filters),
            Action::Quit => state.should_quit = true,
        }
    }
}

fn draw(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, state: &AppState) -> Result<()> {
    let view = view::project(state)?;
    terminal.draw(|f| ui::render(f, &view))?;
    Ok(())
}
