//! Scene loop thread: ticks the engine at the display rate and publishes
//! snapshots.
//!
//! The engine is built by the caller so config errors surface before a
//! thread exists. Commands arrive via `mpsc`; each frame is handed to a
//! `SnapshotSink` and stored in shared state for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::info;

use plaza_core::constants::FRAME_RATE;
use plaza_core::state::FrameSnapshot;
use plaza_sim::engine::SceneEngine;

use crate::sink::SnapshotSink;
use crate::state::LoopCommand;

/// Nominal duration of one display frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the scene loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_scene_loop(
    engine: SceneEngine,
    sink: impl SnapshotSink,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("plaza-scene-loop".into())
        .spawn(move || {
            run_scene_loop(engine, sink, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The scene loop. Runs until Shutdown or channel disconnect.
fn run_scene_loop(
    mut engine: SceneEngine,
    mut sink: impl SnapshotSink,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    info!(frame_rate = FRAME_RATE, "scene loop started");
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    loop {
        if !drain_commands(&mut engine, &cmd_rx) {
            break;
        }

        // Real elapsed time; the engine clamps long stalls itself.
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        let snapshot = engine.tick(dt);
        sink.publish(&snapshot);

        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, skip ahead instead of bursting frames
            next_frame_time = now;
        }
    }

    info!(tick = engine.time().tick, "scene loop stopped");
}

/// Forward every pending command to the engine. Returns false when the
/// loop should stop.
fn drain_commands(engine: &mut SceneEngine, cmd_rx: &mpsc::Receiver<LoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(LoopCommand::Input(cmd)) => engine.queue_command(cmd),
            Ok(LoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}
