//! Scene engine, the per-frame driver of the portfolio scene.
//!
//! `SceneEngine` owns the hecs world and the input state, applies host
//! commands, runs the systems in order and produces `FrameSnapshot`s.
//! Completely headless, so every behavior is testable without a window.

use std::collections::VecDeque;

use hecs::World;
use tracing::{debug, trace};

use plaza_core::commands::InputCommand;
use plaza_core::components::CameraRig;
use plaza_core::config::{ConfigError, SceneConfig};
use plaza_core::enums::ScenePhase;
use plaza_core::events::SceneEvent;
use plaza_core::state::{FrameSnapshot, ZoneView};
use plaza_core::types::{MovementVector, Position, SceneTime};

use crate::input::{self, InputBindings, InputState};
use crate::systems;
use crate::systems::proximity::ZoneTracker;
use crate::systems::snapshot::FrameResults;
use crate::world_setup;

/// Clamp a host frame delta into `[0, max]`. An unbounded stall (`+inf`)
/// counts as a maximal frame; NaN and negative deltas become 0.
pub fn clamp_frame_dt(dt: f64, max: f64) -> f64 {
    if dt.is_nan() || dt <= 0.0 {
        return 0.0;
    }
    if dt > max {
        trace!(dt, max, "frame delta clamped");
        return max;
    }
    dt
}

/// The scene engine. Owns the ECS world and all scene state.
pub struct SceneEngine {
    world: World,
    config: SceneConfig,
    bindings: InputBindings,
    input: InputState,
    tracker: ZoneTracker,
    time: SceneTime,
    phase: ScenePhase,
    command_queue: VecDeque<InputCommand>,
    events: Vec<SceneEvent>,
    nearest: Option<ZoneView>,
}

impl SceneEngine {
    /// Validate `config` and build the scene it describes.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        world_setup::setup_scene(&mut world, &config);
        let bindings = InputBindings::from_config(&config.input);

        Ok(Self {
            world,
            config,
            bindings,
            input: InputState::new(),
            tracker: ZoneTracker::new(),
            time: SceneTime::default(),
            phase: ScenePhase::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            nearest: None,
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: InputCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = InputCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the scene by one frame of `dt` seconds and return the result.
    ///
    /// `dt` is clamped to `max_frame_dt` first. Interaction requests are
    /// resolved against the nearest zone from the previous frame, which is
    /// the zone the prompt was showing when the key went down.
    pub fn tick(&mut self, dt: f64) -> FrameSnapshot {
        let dt = clamp_frame_dt(dt, self.config.max_frame_dt);
        self.process_commands();

        let mut input = MovementVector::ZERO;
        let mut moving = false;
        if self.phase == ScenePhase::Exploring {
            input = input::movement_vector(&self.input, &self.bindings);
            moving = self.run_systems(input, dt);
            self.time.advance(dt);
        }

        self.update_proximity();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            FrameResults {
                input,
                moving,
                nearest_zone: self.nearest.clone(),
                events,
            },
        )
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn time(&self) -> SceneTime {
        self.time
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Current character position. Falls back to the origin if the player
    /// entity has been removed.
    pub fn character_position(&self) -> Position {
        systems::snapshot::player_position(&self.world).unwrap_or_default()
    }

    /// Id of the zone reported nearest on the last tick.
    pub fn nearest_zone_id(&self) -> Option<&str> {
        self.tracker.current()
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    /// Attach a follow camera settled on the character. No-op if one is
    /// already attached.
    pub fn attach_camera(&mut self) {
        if self.world.query::<&CameraRig>().iter().next().is_some() {
            return;
        }
        let focus = self.character_position();
        world_setup::spawn_camera(&mut self.world, &self.config.camera, focus);
    }

    /// Remove every attached camera. Later ticks skip camera work.
    pub fn detach_camera(&mut self) {
        let cameras: Vec<hecs::Entity> = self
            .world
            .query::<&CameraRig>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in cameras {
            let _ = self.world.despawn(entity);
        }
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that rearrange entities.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: InputCommand) {
        match command {
            InputCommand::KeyDown { code } => {
                let fresh = self.input.key_down(&code);
                if fresh && self.bindings.is_interact_key(&code) {
                    self.request_interaction();
                }
            }
            InputCommand::KeyUp { code } => self.input.key_up(&code),
            InputCommand::ControlPress { control } => self.input.press_control(&control),
            InputCommand::ControlRelease { control } => self.input.release_control(&control),
            InputCommand::Interact => self.request_interaction(),
            InputCommand::ReleaseAll => self.input.release_all(),
            InputCommand::Pause => {
                if self.phase == ScenePhase::Exploring {
                    self.phase = ScenePhase::Paused;
                }
            }
            InputCommand::Resume => {
                if self.phase == ScenePhase::Paused {
                    self.phase = ScenePhase::Exploring;
                }
            }
        }
    }

    /// Raise an interaction for the zone currently in range, if any.
    /// Ignored while paused.
    fn request_interaction(&mut self) {
        if self.phase != ScenePhase::Exploring {
            return;
        }
        if let Some(zone_id) = self.tracker.current() {
            debug!(zone = %zone_id, "interaction requested");
            self.events.push(SceneEvent::InteractRequested {
                zone_id: zone_id.to_string(),
            });
        }
    }

    /// Run the per-frame systems in order. Returns whether the character
    /// was walking this frame.
    fn run_systems(&mut self, input: MovementVector, dt: f64) -> bool {
        // 1. Character controller
        let outcome = systems::movement::run(
            &mut self.world,
            input,
            dt,
            &self.config.movement,
            self.config.world.boundary(),
        );
        // 2. Camera follow, independent of whether the step was accepted
        if let Some(focus) = systems::snapshot::player_position(&self.world) {
            systems::camera::run(&mut self.world, focus, dt);
        }
        outcome.moving
    }

    /// Re-evaluate the nearest zone and record enter/exit transitions.
    fn update_proximity(&mut self) {
        self.nearest = systems::snapshot::player_position(&self.world)
            .and_then(|pos| systems::proximity::run(&self.world, pos.ground()));
        let events = self
            .tracker
            .observe(self.nearest.as_ref().map(|zone| zone.id.as_str()));
        self.events.extend(events);
    }
}
