//! Application state shared between the host operations and the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use plaza_core::commands::InputCommand;
use plaza_core::state::FrameSnapshot;

/// Commands sent from the host to the scene loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An input command to forward to the scene engine.
    Input(InputCommand),
    /// Stop the loop thread.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` wrapped in `Mutex` so the state is `Sync`
/// - `Mutex<Option<...>>` for anything that only exists while the loop runs
/// - `Arc<Mutex<...>>` for the latest snapshot, shared with the loop thread
pub struct AppState {
    /// Channel to the loop thread. `None` while stopped.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    /// Whether the loop is currently running.
    pub running: Mutex<bool>,
    /// Loop thread handle, joined on stop.
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Drop for AppState {
    /// Tear the loop down with the state so no thread outlives its host.
    fn drop(&mut self) {
        if let Ok(tx) = self.command_tx.get_mut() {
            if let Some(tx) = tx.take() {
                let _ = tx.send(LoopCommand::Shutdown);
            }
        }
        if let Ok(handle) = self.loop_thread.get_mut() {
            if let Some(handle) = handle.take() {
                let _ = handle.join();
            }
        }
    }
}
