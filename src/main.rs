//! Terminal Color Recall runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `color_recall::term`. Logging goes to the file named by
//! `COLOR_RECALL_LOG`, since the game owns the terminal.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing_subscriber::EnvFilter;

use color_recall::app::App;
use color_recall::config::RunConfig;
use color_recall::engine::Session;
use color_recall::input::{handle_key_event, should_quit};
use color_recall::store::Store;
use color_recall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll timeout while no round timer is running.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }
    tracing::info!(seed = config.seed, "starting color-recall");

    let store = config.store.open();
    let app = App::new(Session::new(store, config.seed));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, app);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "runner stopped with an error");
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run<S: Store>(term: &mut TerminalRenderer, mut app: App<S>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    while app.is_running() {
        // Whole milliseconds only; the remainder carries into the next frame.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);
        app.tick(elapsed_ms);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(app.session(), app.screen(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = app
            .session()
            .next_tick_in_ms()
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        app.handle(cmd);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }

    tracing::info!("quit");
    Ok(())
}
