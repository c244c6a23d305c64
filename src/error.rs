//! Game-specific error types.
//!
//! The simulation loop itself has no recoverable runtime errors: falling off a
//! platform is ordinary game state, and a missing body or an undefined level
//! index is a programming-invariant violation rather than something to surface
//! to the player.  These types exist for constant validation and for
//! propagating invariant failures in development builds.

// This module provides infrastructure types for future error propagation.
// Items are public API; dead_code lint is suppressed to avoid forcing premature wiring.
#![allow(dead_code)]
use std::fmt;

/// Top-level error enum for the gravity-maze game.
#[derive(Debug)]
pub enum GameError {
    /// A level id was requested that does not exist in the level catalog.
    /// UI buttons only emit catalog ids, so this indicates a wiring bug.
    UndefinedLevel {
        /// The requested 1-indexed level id.
        level_id: u32,
    },

    /// A required body entity (ball, ring, or disc) was not found in the world.
    BodyNotFound {
        /// Human-readable description of where the lookup occurred.
        context: &'static str,
    },

    /// A tuning constant is outside its safe operating range.
    /// Returned by validation helpers; not triggered at runtime by default.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UndefinedLevel { level_id } => {
                write!(f, "level {} is not defined in the level catalog", level_id)
            }
            GameError::BodyNotFound { context } => {
                write!(f, "body entity not found during '{}'", context)
            }
            GameError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `lean_decay` is outside (0, 1).
///
/// The lean recurrence `lean = lean × decay + impulse` is only bounded when
/// the decay factor is strictly below 1.
pub fn validate_lean_decay(value: f32) -> GameResult<()> {
    if value <= 0.0 || value >= 1.0 {
        Err(GameError::UnsafeConstant {
            name: "LEAN_DECAY",
            value,
            safe_range: "(0.0, 1.0)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if the spawn height is not strictly above the fall
/// threshold, which would make every fall reset re-trigger immediately.
pub fn validate_spawn_height(spawn_height: f32, fall_threshold: f32) -> GameResult<()> {
    if spawn_height <= fall_threshold {
        Err(GameError::UnsafeConstant {
            name: "BALL_SPAWN_HEIGHT",
            value: spawn_height,
            safe_range: "(fall_threshold, ∞)",
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BALL_SPAWN_HEIGHT, FALL_THRESHOLD, LEAN_DECAY};

    #[test]
    fn default_constants_validate() {
        assert!(validate_lean_decay(LEAN_DECAY).is_ok());
        assert!(validate_spawn_height(BALL_SPAWN_HEIGHT, FALL_THRESHOLD).is_ok());
    }

    #[test]
    fn unbounded_decay_is_rejected() {
        assert!(validate_lean_decay(1.0).is_err());
        assert!(validate_lean_decay(0.0).is_err());
        assert!(validate_lean_decay(1.5).is_err());
    }

    #[test]
    fn spawn_at_threshold_is_rejected() {
        let err = validate_spawn_height(0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("BALL_SPAWN_HEIGHT"));
    }
}
