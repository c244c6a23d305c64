//! Centralised physics and gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig`] mirrors the runtime-tunable subset and can
//! override it from `assets/game.toml` without recompiling.

use bevy::prelude::*;

// ── Timebase ──────────────────────────────────────────────────────────────────

/// Fixed physics timestep in seconds.
///
/// Exactly one step of this length is taken per render frame; simulated time
/// and wall-clock time diverge when the display refresh differs from 60 Hz.
/// There is deliberately no catch-up accumulation.
pub const FIXED_DT: f32 = 1.0 / 60.0;

// ── World ─────────────────────────────────────────────────────────────────────

/// Downward gravity (m/s²) applied to dynamic bodies.
pub const GRAVITY_Y: f32 = -9.82;

/// Side length of the square ground plane (world units).
pub const GROUND_SIZE: f32 = 100.0;

/// Height of the ground surface. The fall threshold sits above this, so a
/// ball that drops off a platform is reset mid-air before it lands.
pub const GROUND_HEIGHT: f32 = -1.0;

// ── Ball ──────────────────────────────────────────────────────────────────────

/// Radius of the ball's sphere collider and mesh (world units).
pub const BALL_RADIUS: f32 = 1.0;

/// Ball mass (kg). Only relative magnitude matters for contact response.
pub const BALL_MASS: f32 = 5.0;

/// Ball restitution. Close to 1.0 so the ball bounces visibly off platforms.
pub const BALL_RESTITUTION: f32 = 0.95;

/// Ball contact friction; lets disc tilt translate into rolling.
pub const BALL_FRICTION: f32 = 0.5;

/// Linear velocity damping on the ball per second.
pub const BALL_LINEAR_DAMPING: f32 = 0.1;

/// Angular velocity damping on the ball per second.
pub const BALL_ANGULAR_DAMPING: f32 = 0.1;

/// Height above the first disc at which the ball (re)spawns.
///
/// Must be strictly above [`FALL_THRESHOLD`], otherwise a fall reset would
/// immediately re-trigger on the next tick.
pub const BALL_SPAWN_HEIGHT: f32 = 5.0;

/// Ball heights below this value count as "fell off" and trigger a reset
/// plus an attempts increment.
pub const FALL_THRESHOLD: f32 = 0.0;

// ── Platform discs ────────────────────────────────────────────────────────────

/// Radius of each platform disc (world units).
pub const DISC_RADIUS: f32 = 5.0;

/// Full thickness of each platform disc (world units).
pub const DISC_THICKNESS: f32 = 0.5;

/// Disc restitution; platforms absorb most of the impact energy themselves.
pub const DISC_RESTITUTION: f32 = 0.1;

/// Disc contact friction.
pub const DISC_FRICTION: f32 = 0.5;

// ── Target ring ───────────────────────────────────────────────────────────────

/// World position of the golden target ring.
pub const RING_POSITION: Vec3 = Vec3::new(0.0, 5.0, -25.0);

/// Centre-line radius of the torus mesh.
pub const RING_MAJOR_RADIUS: f32 = 2.0;

/// Tube radius of the torus mesh.
pub const RING_TUBE_RADIUS: f32 = 0.2;

/// Bounding radius of the ring's collider, and the radius used by the
/// authoritative win distance check (`ball radius + this`).
pub const RING_BOUNDING_RADIUS: f32 = 2.0;

// ── Tilt input ────────────────────────────────────────────────────────────────

/// Lean impulse added per tick while a direction key is held.
pub const LEAN_IMPULSE: f32 = 0.05;

/// Exponential decay factor applied to the lean each tick before the impulse.
///
/// Must be in (0, 1): the recurrence `lean = lean × decay + impulse` then
/// keeps |lean| bounded by `impulse / (1 − decay)` (0.5 with the defaults).
pub const LEAN_DECAY: f32 = 0.9;

// ── Camera ────────────────────────────────────────────────────────────────────

/// Offset from the ball to the camera's target position.
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// Offset from the ball to the point the camera aims at.
pub const CAMERA_LOOK_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Exponential smoothing factor per tick for camera follow.
/// Lower values follow more smoothly but lag further behind.
pub const CAMERA_LERP_FACTOR: f32 = 0.1;

// ── Presentation ──────────────────────────────────────────────────────────────

/// Minimum recommended viewport width; below this the HUD shows an advisory.
pub const MIN_VIEWPORT_WIDTH: f32 = 1280.0;

/// Minimum recommended viewport height.
pub const MIN_VIEWPORT_HEIGHT: f32 = 720.0;

/// Font size for the attempts / level HUD counters.
pub const HUD_FONT_SIZE: f32 = 28.0;
