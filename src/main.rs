//! pokerdeck - terminal planning poker deck
//!
//! A single screen: a swipeable carousel of estimation cards with a row of
//! click-to-jump indicator dots underneath.

mod app;
mod config;
mod deck;
mod frontend;
mod pager;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Instant;

use app::App;
use frontend::{FrontendEvent, TuiFrontend};
use theme::Theme;

#[derive(Parser)]
#[command(name = "pokerdeck")]
#[command(about = "Terminal planning poker deck", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme to use (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Custom data directory (default: ~/.pokerdeck)
    /// Can also be set via POKERDECK_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Frame rate for animations (overrides the config file)
    #[arg(long)]
    fps: Option<u16>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in themes
    Themes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands before touching the terminal or log file
    if let Some(Commands::Themes) = cli.command {
        for name in Theme::builtin_names() {
            let theme = Theme::by_name(name);
            println!("{:<16} {}", name, theme.description);
        }
        return Ok(());
    }

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var("POKERDECK_DIR", data_dir);
    }

    init_logging().context("Failed to initialize logging")?;

    if let Ok(env_dir) = std::env::var("POKERDECK_DIR") {
        tracing::info!("Using data directory: {}", env_dir);
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()?
    };

    // CLI overrides
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }
    if let Some(fps) = cli.fps {
        config.ui.frame_rate = fps.clamp(1, 240);
    }

    run_tui(config)
}

/// Initialize logging to a file (use RUST_LOG to control the level).
/// A TUI owns stdout, so logs go to pokerdeck.log in the data directory.
fn init_logging() -> Result<()> {
    let dir = config::Config::base_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {:?}", dir))?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("pokerdeck.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    Ok(())
}

/// Run the TUI on a tokio runtime.
fn run_tui(config: config::Config) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_run_tui(config))
}

/// Main event loop: crossterm events and the frame tick, multiplexed.
/// Dropping out of this loop tears everything down; an animation that is
/// still in flight simply stops with it.
async fn async_run_tui(config: config::Config) -> Result<()> {
    let mut app = App::new(config);
    let mut frontend = TuiFrontend::new(app.config.ui.mouse_enabled)?;
    let mut events = EventStream::new();

    let mut frames = tokio::time::interval(app.config.frame_interval());
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    tracing::info!(
        "Started with {} cards, theme {}",
        deck::card_count(),
        app.theme.name
    );

    while app.running {
        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(raw)) => {
                        if let Some(event) = FrontendEvent::from_crossterm(raw) {
                            app.handle_event(event, frontend.size(), Instant::now());
                        }
                    }
                    Some(Err(e)) => {
                        tracing::error!("Event stream error: {}", e);
                    }
                    None => break,
                }
            }
            _ = frames.tick() => {
                let moved = app.tick(Instant::now());
                if moved || app.needs_render {
                    frontend.render(&app)?;
                    app.needs_render = false;
                }
            }
        }
    }

    frontend.cleanup()?;

    // Persist runtime setting changes (theme cycling) for the next launch.
    if app.config_dirty {
        if let Err(e) = app.config.save() {
            tracing::warn!("Failed to save configuration: {}", e);
        }
    }

    Ok(())
}
