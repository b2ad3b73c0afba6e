//! Host operations.
//!
//! These are the calls an embedding host makes: start the scene, forward
//! input, poll the latest frame and stop. They bridge host requests to the
//! scene loop thread via channels.

use tracing::info;

use plaza_core::commands::InputCommand;
use plaza_core::config::SceneConfig;
use plaza_core::state::FrameSnapshot;
use plaza_sim::engine::SceneEngine;

use crate::error::AppError;
use crate::game_loop;
use crate::sink::SnapshotSink;
use crate::state::{AppState, LoopCommand};

/// Start the scene. Spawns the loop thread if not already running.
pub fn start_scene(
    state: &AppState,
    config: SceneConfig,
    sink: impl SnapshotSink,
) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let zones = config.zones.len();
    let engine = SceneEngine::new(config)?;
    let (cmd_tx, handle) =
        game_loop::spawn_scene_loop(engine, sink, state.latest_snapshot.clone())?;

    *state.command_tx.lock().map_err(|_| AppError::LockPoisoned)? = Some(cmd_tx);
    *state.loop_thread.lock().map_err(|_| AppError::LockPoisoned)? = Some(handle);
    *running = true;

    info!(zones, "scene started");
    Ok(())
}

/// Forward one input command to the running scene.
pub fn send_command(state: &AppState, command: InputCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(LoopCommand::Input(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotRunning),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<FrameSnapshot>, AppError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| AppError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Stop the scene and wait for the loop thread to exit.
///
/// The latest snapshot stays readable after stopping.
pub fn stop_scene(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    if !*running {
        return Err(AppError::NotRunning);
    }

    let tx = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take();
    if let Some(tx) = tx {
        // A loop that already exited has dropped its receiver; joining still applies.
        let _ = tx.send(LoopCommand::Shutdown);
    }

    let handle = state
        .loop_thread
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take();
    *running = false;
    if let Some(handle) = handle {
        handle.join().map_err(|_| AppError::LoopPanicked)?;
    }

    info!("scene stopped");
    Ok(())
}

/// Parse one line of the JSON command bridge.
pub fn parse_command(line: &str) -> Result<InputCommand, AppError> {
    Ok(serde_json::from_str(line.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::{Duration, Instant};

    use plaza_core::config::ConfigError;
    use plaza_core::zone::default_zones;

    fn wait_for<F: Fn(&FrameSnapshot) -> bool>(state: &AppState, pred: F) -> FrameSnapshot {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(snap) = get_snapshot(state).unwrap() {
                if pred(&snap) {
                    return snap;
                }
            }
            assert!(Instant::now() < deadline, "timed out waiting for snapshot");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn discard(_: &FrameSnapshot) {}

    #[test]
    fn test_commands_require_running_scene() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, InputCommand::Interact),
            Err(AppError::NotRunning)
        ));
        assert!(matches!(stop_scene(&state), Err(AppError::NotRunning)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_send_stop_lifecycle() {
        let state = AppState::new();
        start_scene(&state, SceneConfig::default(), discard).unwrap();
        assert!(matches!(
            start_scene(&state, SceneConfig::default(), discard),
            Err(AppError::AlreadyRunning)
        ));

        wait_for(&state, |s| s.time.tick > 0);
        send_command(&state, InputCommand::Pause).unwrap();
        wait_for(&state, |s| s.phase == plaza_core::enums::ScenePhase::Paused);

        stop_scene(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(get_snapshot(&state).unwrap().is_some());
        assert!(matches!(
            send_command(&state, InputCommand::Resume),
            Err(AppError::NotRunning)
        ));

        // Restart after stop
        start_scene(&state, SceneConfig::default(), discard).unwrap();
        stop_scene(&state).unwrap();
    }

    #[test]
    fn test_start_rejects_invalid_config() {
        let state = AppState::new();
        let mut config = SceneConfig::default();
        config.zones.push(default_zones().remove(0));

        let err = start_scene(&state, config, discard).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::DuplicateZone { .. })
        ));
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_key_input_moves_character() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel::<f64>();
        let sink = move |snapshot: &FrameSnapshot| {
            let _ = tx.send(snapshot.character.position.z);
        };
        start_scene(&state, SceneConfig::default(), sink).unwrap();
        let start_z = rx.recv_timeout(Duration::from_secs(2)).unwrap();

        send_command(&state, parse_command(r#"{"type":"KeyDown","code":"KeyW"}"#).unwrap())
            .unwrap();
        let snap = wait_for(&state, |s| s.character.position.z < start_z - 0.5);
        assert!(snap.character.moving);

        stop_scene(&state).unwrap();
    }

    #[test]
    fn test_parse_command_rejects_garbage() {
        assert!(matches!(
            parse_command("{\"type\":\"teleport\"}"),
            Err(AppError::BadCommand(_))
        ));
        assert!(matches!(parse_command("not json"), Err(AppError::BadCommand(_))));
        assert_eq!(
            parse_command("  {\"type\":\"Interact\"}\n").unwrap(),
            InputCommand::Interact
        );
    }

    #[test]
    fn test_drop_stops_loop() {
        let (tx, rx) = mpsc::channel::<()>();
        let sink = move |_: &FrameSnapshot| {
            let _ = tx.send(());
        };
        {
            let state = AppState::new();
            start_scene(&state, SceneConfig::default(), sink).unwrap();
            rx.recv_timeout(Duration::from_secs(2)).unwrap();
        }
        // Sink is dropped with the loop thread, which closes the channel
        while rx.try_recv().is_ok() {}
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(2)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        ));
    }
}
