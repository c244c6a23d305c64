//! Level catalog and the level state machine.
//!
//! Levels are immutable static data: an initial layout for the three platform
//! discs plus one motion rule.  Exactly one level is active at a time;
//! switching levels repositions the discs, teleports the ball back to spawn,
//! and resets the run counters.
//!
//! ## Flow
//!
//! 1. UI actions (level-selector buttons, the victory CONTINUE button, the
//!    game-complete PLAY AGAIN button) write a [`LevelRequest`] message.
//! 2. [`level_request_system`] applies each request in order: disc layout,
//!    ball spawn, fresh [`RunState`].
//! 3. Per tick, [`crate::simulation::obstacle_motion_system`] evaluates the
//!    active level's [`MotionRule`] against accumulated simulation time.

use crate::arena::{Ball, ObstacleDisc};
use crate::config::GameConfig;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Number of platform discs in every layout.
pub const DISC_COUNT: usize = 3;

// ── Static level data ─────────────────────────────────────────────────────────

/// Scripted per-tick motion applied to all three discs of a level.
///
/// Motion is a pure function of accumulated simulation time: given the same
/// `t` and initial layout, the produced positions are identical regardless of
/// call history.  The discs are kinematically driven, so these positions
/// overwrite the bodies directly and are never integrated by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionRule {
    /// Discs stay at the level's initial layout.
    Static,
    /// Discs sway left/right: `x = layout.x + sin(t · ω) · amplitude`.
    /// The offset is identical for all three discs, preserving any stagger
    /// in the layout.
    SwayHorizontal {
        amplitude: f32,
        angular_frequency: f32,
    },
    /// Discs bob up/down: `y = sin(t · ω) · amplitude + center_height`.
    SwayVertical {
        amplitude: f32,
        angular_frequency: f32,
        center_height: f32,
    },
}

impl MotionRule {
    /// Position of a disc with the given layout position at simulation time `t`.
    pub fn disc_position(&self, layout: Vec3, t: f32) -> Vec3 {
        match *self {
            MotionRule::Static => layout,
            MotionRule::SwayHorizontal {
                amplitude,
                angular_frequency,
            } => Vec3::new(
                layout.x + (t * angular_frequency).sin() * amplitude,
                layout.y,
                layout.z,
            ),
            MotionRule::SwayVertical {
                amplitude,
                angular_frequency,
                center_height,
            } => Vec3::new(
                layout.x,
                (t * angular_frequency).sin() * amplitude + center_height,
                layout.z,
            ),
        }
    }
}

/// Static level descriptor used by the level loader.
#[derive(Debug, Clone)]
pub struct LevelDefinition {
    /// 1-indexed level id shown in the HUD.
    pub level_id: u32,
    /// Initial positions of the three platform discs.
    pub disc_layout: [Vec3; DISC_COUNT],
    /// Scripted disc motion for this level.
    pub motion: MotionRule,
    /// Level unlocked by winning this one; `None` marks the final level.
    pub next_level_id: Option<u32>,
}

/// Level catalog resource: the fixed, enumerated set of playable levels.
#[derive(Resource, Debug, Clone)]
pub struct LevelCatalog {
    pub levels: Vec<LevelDefinition>,
}

impl LevelCatalog {
    pub fn level_by_id(&self, level_id: u32) -> Option<&LevelDefinition> {
        self.levels.iter().find(|l| l.level_id == level_id)
    }

    pub fn first_level(&self) -> Option<&LevelDefinition> {
        self.levels.first()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self {
            levels: vec![
                LevelDefinition {
                    level_id: 1,
                    disc_layout: [
                        Vec3::new(0.0, 2.0, 0.0),
                        Vec3::new(0.0, 2.0, -10.0),
                        Vec3::new(0.0, 2.0, -20.0),
                    ],
                    motion: MotionRule::Static,
                    next_level_id: Some(2),
                },
                LevelDefinition {
                    level_id: 2,
                    disc_layout: [
                        Vec3::new(0.0, 2.0, 0.0),
                        Vec3::new(-3.0, 2.0, -10.0),
                        Vec3::new(3.0, 2.0, -20.0),
                    ],
                    motion: MotionRule::SwayHorizontal {
                        amplitude: 3.0,
                        angular_frequency: 2.0,
                    },
                    next_level_id: Some(3),
                },
                LevelDefinition {
                    level_id: 3,
                    disc_layout: [
                        Vec3::new(0.0, 2.0, 0.0),
                        Vec3::new(0.0, 2.0, -10.0),
                        Vec3::new(0.0, 2.0, -20.0),
                    ],
                    motion: MotionRule::SwayVertical {
                        amplitude: 1.0,
                        angular_frequency: 2.0,
                        center_height: 2.0,
                    },
                    next_level_id: None,
                },
            ],
        }
    }
}

// ── Run state ─────────────────────────────────────────────────────────────────

/// Mutable state of the current run: the single owner of what used to be
/// free-floating counters and flags.
///
/// `attempts` and `elapsed_secs` only grow while playing; all fields reset on
/// level change.  `won` flips on ring capture and gates the simulation step
/// (no tilt, no fall resets, no further win checks) until the next level load
/// clears it.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RunState {
    /// 1-indexed id of the active level.
    pub level_id: u32,
    /// Fall count this run; incremented on every floor reset, never decremented.
    pub attempts: u32,
    /// Accumulated simulation time in seconds (fixed steps, monotonic).
    pub elapsed_secs: f32,
    /// Set on ring capture; cleared by the next level load.
    pub won: bool,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            level_id: 1,
            attempts: 0,
            elapsed_secs: 0.0,
            won: false,
        }
    }
}

/// Level id the app starts on; overridden by the `GRAVITY_MAZE_LEVEL` env var.
#[derive(Resource, Debug, Clone, Copy)]
pub struct StartLevel(pub u32);

impl Default for StartLevel {
    fn default() -> Self {
        Self(1)
    }
}

// ── Level transitions ─────────────────────────────────────────────────────────

/// Request to (re)start a specific level.  Written by UI action systems,
/// consumed by [`level_request_system`].
#[derive(Message, Debug, Clone, Copy)]
pub struct LevelRequest {
    pub level_id: u32,
}

/// Startup system: queue the initial level load.
pub fn queue_start_level(start: Res<StartLevel>, mut requests: MessageWriter<LevelRequest>) {
    requests.write(LevelRequest { level_id: start.0 });
}

/// Apply pending level requests: reposition the discs to the level's declared
/// layout, reset the ball to spawn with zero velocities, and reset the run
/// counters.
///
/// Requests are applied in arrival order, so back-to-back selections settle on
/// the last one with no residue from the earlier layouts.  A request for an id
/// missing from the catalog indicates a UI wiring bug; it is logged and
/// ignored rather than leaving the run in a half-reset state.
pub fn level_request_system(
    mut requests: MessageReader<LevelRequest>,
    catalog: Res<LevelCatalog>,
    config: Res<GameConfig>,
    mut run: ResMut<RunState>,
    mut q_discs: Query<(&ObstacleDisc, &mut Transform), Without<Ball>>,
    mut q_ball: Query<(&mut Transform, &mut Velocity), With<Ball>>,
) {
    for request in requests.read() {
        let Some(level) = catalog.level_by_id(request.level_id) else {
            warn!(
                "[level] ignoring request for undefined level {}",
                request.level_id
            );
            continue;
        };

        for (disc, mut transform) in q_discs.iter_mut() {
            transform.translation = level.disc_layout[disc.index];
            transform.rotation = Quat::IDENTITY;
        }

        if let Ok((mut transform, mut velocity)) = q_ball.single_mut() {
            transform.translation = config.ball_spawn();
            *velocity = Velocity::zero();
        }

        *run = RunState {
            level_id: level.level_id,
            attempts: 0,
            elapsed_secs: 0.0,
            won: false,
        };
        info!("[level] level {} loaded", level.level_id);
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
