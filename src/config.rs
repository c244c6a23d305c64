//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the tunable constants in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the constants you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.lean_decay`, `config.fall_threshold`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable physics and gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── World ─────────────────────────────────────────────────────────────────
    pub gravity_y: f32,
    pub ground_size: f32,
    pub ground_height: f32,

    // ── Ball ──────────────────────────────────────────────────────────────────
    pub ball_radius: f32,
    pub ball_mass: f32,
    pub ball_restitution: f32,
    pub ball_friction: f32,
    pub ball_linear_damping: f32,
    pub ball_angular_damping: f32,
    pub ball_spawn_height: f32,
    pub fall_threshold: f32,

    // ── Platform discs ────────────────────────────────────────────────────────
    pub disc_radius: f32,
    pub disc_thickness: f32,
    pub disc_restitution: f32,
    pub disc_friction: f32,

    // ── Target ring ───────────────────────────────────────────────────────────
    pub ring_bounding_radius: f32,

    // ── Tilt input ────────────────────────────────────────────────────────────
    pub lean_impulse: f32,
    pub lean_decay: f32,

    // ── Camera ────────────────────────────────────────────────────────────────
    pub camera_lerp_factor: f32,

    // ── Diagnostics ───────────────────────────────────────────────────────────
    /// Emit a `debug!` line with ball height, lean, and elapsed time per tick.
    pub debug_tick_log: bool,
}

impl GameConfig {
    /// Ball spawn point; the ball teleports here on level load and fall reset.
    pub fn ball_spawn(&self) -> Vec3 {
        Vec3::new(0.0, self.ball_spawn_height, 0.0)
    }

    /// Minimum ball–ring distance below which the level counts as won.
    pub fn win_distance(&self) -> f32 {
        self.ball_radius + self.ring_bounding_radius
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // World
            gravity_y: GRAVITY_Y,
            ground_size: GROUND_SIZE,
            ground_height: GROUND_HEIGHT,
            // Ball
            ball_radius: BALL_RADIUS,
            ball_mass: BALL_MASS,
            ball_restitution: BALL_RESTITUTION,
            ball_friction: BALL_FRICTION,
            ball_linear_damping: BALL_LINEAR_DAMPING,
            ball_angular_damping: BALL_ANGULAR_DAMPING,
            ball_spawn_height: BALL_SPAWN_HEIGHT,
            fall_threshold: FALL_THRESHOLD,
            // Platform discs
            disc_radius: DISC_RADIUS,
            disc_thickness: DISC_THICKNESS,
            disc_restitution: DISC_RESTITUTION,
            disc_friction: DISC_FRICTION,
            // Target ring
            ring_bounding_radius: RING_BOUNDING_RADIUS,
            // Tilt input
            lean_impulse: LEAN_IMPULSE,
            lean_decay: LEAN_DECAY,
            // Camera
            camera_lerp_factor: CAMERA_LERP_FACTOR,
            // Diagnostics
            debug_tick_log: false,
        }
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are printed
/// to stderr but do not abort the game.  A missing file is silently ignored
/// (defaults are already in place from `insert_resource`).
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded game config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.lean_impulse, LEAN_IMPULSE);
        assert_eq!(config.lean_decay, LEAN_DECAY);
        assert_eq!(config.ball_spawn(), Vec3::new(0.0, BALL_SPAWN_HEIGHT, 0.0));
        assert_eq!(config.win_distance(), BALL_RADIUS + RING_BOUNDING_RADIUS);
    }

    #[test]
    fn spawn_sits_above_fall_threshold() {
        // A fall reset teleports the ball to spawn; if spawn were at or below
        // the threshold, a single reset would cascade forever.
        let config = GameConfig::default();
        assert!(config.ball_spawn().y > config.fall_threshold);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config: GameConfig = toml::from_str("lean_decay = 0.8").unwrap();
        assert_eq!(config.lean_decay, 0.8);
        assert_eq!(config.lean_impulse, LEAN_IMPULSE);
        assert_eq!(config.ball_mass, BALL_MASS);
    }
}
