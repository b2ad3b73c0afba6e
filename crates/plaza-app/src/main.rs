//! `plaza`: runs the scene headless behind a JSON-lines bridge.
//!
//! Reads `InputCommand`s from stdin, one JSON object per line, and writes a
//! `FrameSnapshot` per frame to stdout. Logs go to stderr. The scene stops
//! when stdin closes.
//!
//! Usage: `plaza [config.json]`

use std::io::{self, BufRead};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use plaza_app::ipc;
use plaza_app::sink::JsonLinesSink;
use plaza_app::state::AppState;
use plaza_core::config::SceneConfig;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = SceneConfig::load(&path)
                .with_context(|| format!("loading scene config from {path}"))?;
            info!(path = %path, zones = config.zones.len(), "config loaded");
            config
        }
        None => SceneConfig::default(),
    };

    let state = AppState::new();
    ipc::start_scene(&state, config, JsonLinesSink::new(io::stdout()))
        .context("starting scene")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match ipc::parse_command(&line) {
            Ok(command) => ipc::send_command(&state, command)?,
            Err(e) => warn!(error = %e, "ignoring bridge line"),
        }
    }

    ipc::stop_scene(&state)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_thread_names(true)
        .init();
}
