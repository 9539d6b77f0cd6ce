//! showtable-tui - a terminal client for a login/table-browsing JSON backend
//!
//! This is the main entry point. It parses the command line, wires file
//! logging, and runs the ratatui component loop.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod model;
mod services;
mod text;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "SHOWTABLE_LOG";
const LOG_FILE: &str = "showtable-tui.log";

#[derive(Parser, Debug)]
#[command(name = "showtable-tui")]
#[command(about = "Sign in and page through database tables from the terminal")]
#[command(version)]
struct Args {
    /// Server base url (overrides config.json)
    #[arg(short, long)]
    server: Option<String>,

    /// Initial page size (overrides config.json)
    #[arg(short = 'p', long)]
    page_size: Option<usize>,

    /// Directory for config.json, the access token and the log file
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => Config::default_dir().context("HOME is not set; pass --config-dir")?,
    };
    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    init_logging(&config_dir, args.verbose)?;

    let config = load_config(&args, &config_dir);
    info!(server = %config.server_url, page_size = config.page_size, "starting");

    // Setup terminal
    Tui::install_panic_hook();
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Create app state
    let mut app = App::new(config, config_dir);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "exiting on error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the config dir; the terminal belongs to the UI
fn init_logging(config_dir: &Path, verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("showtable_tui=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("showtable_tui=info"))
    };

    let path = config_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

/// config.json from the config dir, with command line overrides on top
fn load_config(args: &Args, config_dir: &Path) -> Config {
    let mut config = Config::load_from(config_dir);
    if let Some(server) = &args.server {
        config.server_url = server.clone();
    }
    if let Some(page_size) = args.page_size.filter(|p| *p > 0) {
        config.page_size = page_size;
    }
    config
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // An action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick so finished requests get picked up
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
