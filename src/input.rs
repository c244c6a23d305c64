//! Tilt input: held direction keys accumulate into a smoothed two-axis lean.
//!
//! The **lean abstraction** keeps the mapping testable: key state is reduced
//! to a per-tick impulse by [`lean_delta`], and [`LeanState::integrate`]
//! applies the decay recurrence.  [`crate::simulation::platform_tilt_system`]
//! runs both once per tick and converts the result into disc orientation.
//!
//! The recurrence is deliberately tied to the fixed simulation tick rather
//! than real elapsed time; frame-rate independence follows from the fixed
//! step cadence.

use bevy::prelude::*;

/// Smoothed two-axis platform tilt driven by the direction keys.
///
/// `x` is left/right roll, `y` is forward/back pitch.  Each tick the state
/// decays toward zero and the currently-held keys add a fixed impulse, so
/// releasing a key eases the platform back flat rather than snapping it.
///
/// With decay `d` and impulse `i`, both axes stay within the geometric-series
/// bound `i / (1 − d)` (0.5 with the default constants) for every possible
/// key sequence.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LeanState {
    pub x: f32,
    pub y: f32,
}

impl LeanState {
    /// Apply one tick of the lean recurrence: decay, then add the impulse.
    pub fn integrate(&mut self, dx: f32, dy: f32, decay: f32) {
        self.x = self.x * decay + dx;
        self.y = self.y * decay + dy;
    }
}

/// Reduce the currently-held direction keys to a per-tick lean impulse.
///
/// - **ArrowLeft / A** → `−impulse` on x; **ArrowRight / D** → `+impulse`.
/// - **ArrowUp / W** → `+impulse` on y; **ArrowDown / S** → `−impulse`.
///
/// Opposing keys held together cancel exactly.  All other keys are ignored.
pub fn lean_delta(keys: &ButtonInput<KeyCode>, impulse: f32) -> (f32, f32) {
    let mut dx = 0.0;
    let mut dy = 0.0;
    if keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA) {
        dx -= impulse;
    }
    if keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD) {
        dx += impulse;
    }
    if keys.pressed(KeyCode::ArrowUp) || keys.pressed(KeyCode::KeyW) {
        dy += impulse;
    }
    if keys.pressed(KeyCode::ArrowDown) || keys.pressed(KeyCode::KeyS) {
        dy -= impulse;
    }
    (dx, dy)
}

// ── Unit tests ────────────────────────────────────────────────────────────────
