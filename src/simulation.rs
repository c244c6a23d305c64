//! Simulation plugin and per-tick systems.
//!
//! Rapier advances the world by exactly [`crate::constants::FIXED_DT`] once
//! per render frame (`TimestepMode::Fixed`, no catch-up accumulation), so one
//! pass of this module's system chain is one simulation tick.  The chain runs
//! in `Update`, observing the transforms written back by the previous step and
//! staging kinematic overrides for the next one.
//!
//! ## Tick chain (in order, `Playing` state only)
//!
//! | System                    | Purpose                                      |
//! |---------------------------|----------------------------------------------|
//! | `tick_clock_system`       | Advance accumulated simulation time          |
//! | `obstacle_motion_system`  | Scripted disc translation for the level      |
//! | `platform_tilt_system`    | Lean integration → disc orientation          |
//! | `fall_reset_system`       | Floor check: respawn ball, count the attempt |
//! | `ring_capture_system`     | Authoritative distance-based win check       |
//! | `ring_contact_log_system` | Diagnostic log of ball↔ring contact events   |
//! | `camera_follow_system`    | Smoothed camera chase of the ball            |
//! | `tick_debug_log_system`   | Optional per-tick state log                  |
//!
//! The `won` flag short-circuits the gameplay systems: after a capture the
//! ball is frozen in the ring and nothing mutates the run until the next
//! level load clears the flag.

use crate::arena::{Ball, ObstacleDisc, TargetRing};
use crate::config::GameConfig;
use crate::constants::{CAMERA_LOOK_OFFSET, CAMERA_OFFSET, FIXED_DT};
use crate::graphics::FollowCamera;
use crate::input::{lean_delta, LeanState};
use crate::level::{self, LevelCatalog, LevelRequest, RunState};
use crate::menu::GameState;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LeanState>()
            .init_resource::<RunState>()
            .init_resource::<LevelCatalog>()
            .add_message::<LevelRequest>()
            .add_systems(
                Update,
                (
                    tick_clock_system,
                    obstacle_motion_system,
                    platform_tilt_system,
                    fall_reset_system,
                    ring_capture_system,
                    ring_contact_log_system,
                    camera_follow_system,
                    tick_debug_log_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            // Level requests come from overlay buttons too, so this must run
            // in every state.
            .add_systems(Update, level::level_request_system);
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Accumulate simulation time by one fixed step.
///
/// Frozen while `won` so scripted motion holds still under the victory
/// overlay.
pub fn tick_clock_system(mut run: ResMut<RunState>) {
    if run.won {
        return;
    }
    run.elapsed_secs += FIXED_DT;
}

// ── Obstacle motion ───────────────────────────────────────────────────────────

/// Evaluate the active level's motion rule and overwrite disc translations.
///
/// Kinematic override: the discs are `KinematicPositionBased`, so writing the
/// `Transform` drives the bodies directly without solver integration.
pub fn obstacle_motion_system(
    run: Res<RunState>,
    catalog: Res<LevelCatalog>,
    mut q_discs: Query<(&ObstacleDisc, &mut Transform)>,
) {
    let Some(active) = catalog.level_by_id(run.level_id) else {
        return;
    };
    for (disc, mut transform) in q_discs.iter_mut() {
        let layout = active.disc_layout[disc.index];
        transform.translation = active.motion.disc_position(layout, run.elapsed_secs);
    }
}

// ── Platform tilt ─────────────────────────────────────────────────────────────

/// Integrate the lean from held keys and apply the composed orientation to
/// all three discs.
///
/// Pitch comes from forward/back lean, roll from left/right lean.  The two
/// companion discs copy the controlled disc's orientation verbatim — they are
/// synchronized visually, not physically coupled.
pub fn platform_tilt_system(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    run: Res<RunState>,
    mut lean: ResMut<LeanState>,
    mut q_discs: Query<&mut Transform, With<ObstacleDisc>>,
) {
    if run.won {
        return;
    }
    let (dx, dy) = lean_delta(&keys, config.lean_impulse);
    lean.integrate(dx, dy, config.lean_decay);

    let tilt = Quat::from_euler(EulerRot::XYZ, lean.y, 0.0, lean.x);
    for mut transform in q_discs.iter_mut() {
        transform.rotation = tilt;
    }
}

// ── Fall recovery ─────────────────────────────────────────────────────────────

/// Reset the ball to spawn when it drops below the floor threshold.
///
/// This is expected game state, not an error: the attempt counter goes up and
/// play continues.  Spawn sits strictly above the threshold, so one reset can
/// never re-trigger on the following tick.
pub fn fall_reset_system(
    config: Res<GameConfig>,
    mut run: ResMut<RunState>,
    mut q_ball: Query<(&mut Transform, &mut Velocity), With<Ball>>,
) {
    if run.won {
        return;
    }
    let Ok((mut transform, mut velocity)) = q_ball.single_mut() else {
        return;
    };
    if transform.translation.y < config.fall_threshold {
        transform.translation = config.ball_spawn();
        *velocity = Velocity::zero();
        run.attempts += 1;
        info!("[fall] ball below floor; reset to spawn (attempt {})", run.attempts);
    }
}

// ── Win detection ─────────────────────────────────────────────────────────────

/// Authoritative win check: the ball is captured when its centre comes within
/// the combined bounding radii of the ring.
///
/// On capture the run's `won` flag is set (gating every gameplay system until
/// the next level load), the ball is frozen, and the app transitions to the
/// victory overlay — or to the terminal game-complete overlay when the level
/// has no successor.
pub fn ring_capture_system(
    config: Res<GameConfig>,
    catalog: Res<LevelCatalog>,
    mut run: ResMut<RunState>,
    mut q_ball: Query<(&Transform, &mut Velocity), With<Ball>>,
    q_ring: Query<&Transform, (With<TargetRing>, Without<Ball>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if run.won {
        return;
    }
    let Ok((ball_transform, mut velocity)) = q_ball.single_mut() else {
        return;
    };
    let Ok(ring_transform) = q_ring.single() else {
        return;
    };

    let distance = ball_transform
        .translation
        .distance(ring_transform.translation);
    if distance >= config.win_distance() {
        return;
    }

    run.won = true;
    *velocity = Velocity::zero();

    let game_complete = catalog
        .level_by_id(run.level_id)
        .and_then(|level| level.next_level_id)
        .is_none();
    info!(
        "[win] level {} cleared at distance {:.2} after {} attempts",
        run.level_id, distance, run.attempts
    );
    next_state.set(if game_complete {
        GameState::GameComplete
    } else {
        GameState::Victory
    });
}

/// Diagnostic mirror of the win condition on the contact-event stream.
///
/// The distance check above is the single victory authority; this system only
/// logs when Rapier reports a started contact between ball and ring, in
/// either order.
pub fn ring_contact_log_system(
    mut collision_events: MessageReader<CollisionEvent>,
    q_ball: Query<Entity, With<Ball>>,
    q_ring: Query<Entity, With<TargetRing>>,
) {
    let Ok(ball) = q_ball.single() else {
        return;
    };
    let Ok(ring) = q_ring.single() else {
        return;
    };
    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };
        if (e1 == ball && e2 == ring) || (e1 == ring && e2 == ball) {
            debug!("[ring] contact event between ball and ring");
        }
    }
}

// ── Camera ────────────────────────────────────────────────────────────────────

/// Chase the ball with exponential smoothing and aim slightly above it.
pub fn camera_follow_system(
    config: Res<GameConfig>,
    q_ball: Query<&Transform, With<Ball>>,
    mut q_camera: Query<&mut Transform, (With<FollowCamera>, Without<Ball>)>,
) {
    let Ok(ball_transform) = q_ball.single() else {
        return;
    };
    let Ok(mut camera_transform) = q_camera.single_mut() else {
        return;
    };

    let target = ball_transform.translation + CAMERA_OFFSET;
    camera_transform.translation = camera_transform
        .translation
        .lerp(target, config.camera_lerp_factor);
    let look_at = ball_transform.translation + CAMERA_LOOK_OFFSET;
    camera_transform.look_at(look_at, Vec3::Y);
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// Optional per-tick state log, gated by `debug_tick_log` in the config.
pub fn tick_debug_log_system(
    config: Res<GameConfig>,
    run: Res<RunState>,
    lean: Res<LeanState>,
    q_ball: Query<&Transform, With<Ball>>,
) {
    if !config.debug_tick_log {
        return;
    }
    let Ok(ball_transform) = q_ball.single() else {
        return;
    };
    debug!(
        "[tick] t={:.2} ball_y={:.2} lean=({:.3},{:.3}) attempts={}",
        run.elapsed_secs, ball_transform.translation.y, lean.x, lean.y, run.attempts
    );
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BALL_SPAWN_HEIGHT, RING_POSITION};
    use bevy::state::app::StatesPlugin;

    // ── helpers ───────────────────────────────────────────────────────────────

    /// Headless app with the resources every tick system needs — no window,
    /// renderer, or physics plugin.  Systems under test are added per case.
    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.insert_state(GameState::Playing);
        app.insert_resource(GameConfig::default());
        app.insert_resource(LevelCatalog::default());
        app.insert_resource(RunState::default());
        app.insert_resource(LeanState::default());
        app.insert_resource(ButtonInput::<KeyCode>::default());
        app
    }

    fn spawn_ball(app: &mut App, position: Vec3, velocity: Velocity) -> Entity {
        app.world_mut()
            .spawn((Ball, Transform::from_translation(position), velocity))
            .id()
    }

    fn spawn_ring(app: &mut App) {
        app.world_mut()
            .spawn((TargetRing, Transform::from_translation(RING_POSITION)));
    }

    fn ball_state(app: &mut App, entity: Entity) -> (Vec3, Velocity) {
        let transform = *app.world().entity(entity).get::<Transform>().unwrap();
        let velocity = *app.world().entity(entity).get::<Velocity>().unwrap();
        (transform.translation, velocity)
    }

    fn current_state(app: &App) -> GameState {
        app.world().resource::<State<GameState>>().get().clone()
    }

    // ── fall_reset_system ─────────────────────────────────────────────────────

    #[test]
    fn fall_below_threshold_resets_ball_and_counts_attempt() {
        let mut app = build_test_app();
        app.add_systems(Update, fall_reset_system);
        let ball = spawn_ball(
            &mut app,
            Vec3::new(2.0, -0.5, -8.0),
            Velocity {
                linvel: Vec3::new(1.0, -9.0, 2.0),
                angvel: Vec3::splat(3.0),
            },
        );

        app.update();

        let (position, velocity) = ball_state(&mut app, ball);
        assert_eq!(position, Vec3::new(0.0, BALL_SPAWN_HEIGHT, 0.0));
        assert_eq!(velocity.linvel, Vec3::ZERO);
        assert_eq!(velocity.angvel, Vec3::ZERO);
        assert_eq!(app.world().resource::<RunState>().attempts, 1);
    }

    #[test]
    fn fall_reset_is_idempotent() {
        let mut app = build_test_app();
        app.add_systems(Update, fall_reset_system);
        spawn_ball(&mut app, Vec3::new(0.0, -1.0, 0.0), Velocity::zero());

        app.update();
        assert_eq!(app.world().resource::<RunState>().attempts, 1);

        // The ball now rests at spawn, above the threshold: stepping again
        // must not re-trigger the reset.
        app.update();
        app.update();
        assert_eq!(app.world().resource::<RunState>().attempts, 1);
    }

    #[test]
    fn ball_above_threshold_is_untouched() {
        let mut app = build_test_app();
        app.add_systems(Update, fall_reset_system);
        let ball = spawn_ball(
            &mut app,
            Vec3::new(0.0, 0.5, -5.0),
            Velocity {
                linvel: Vec3::new(0.0, -1.0, 0.0),
                angvel: Vec3::ZERO,
            },
        );

        app.update();

        let (position, velocity) = ball_state(&mut app, ball);
        assert_eq!(position, Vec3::new(0.0, 0.5, -5.0));
        assert_eq!(velocity.linvel, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(app.world().resource::<RunState>().attempts, 0);
    }

    // ── ring_capture_system ───────────────────────────────────────────────────

    #[test]
    fn ball_at_ring_position_wins_and_freezes() {
        let mut app = build_test_app();
        app.add_systems(Update, ring_capture_system);
        let ball = spawn_ball(
            &mut app,
            RING_POSITION,
            Velocity {
                linvel: Vec3::new(0.0, 0.0, -12.0),
                angvel: Vec3::splat(1.0),
            },
        );
        spawn_ring(&mut app);

        app.update();

        let run = app.world().resource::<RunState>();
        assert!(run.won, "distance 0 must be below the win threshold");
        let (_, velocity) = ball_state(&mut app, ball);
        assert_eq!(velocity.linvel, Vec3::ZERO);
        assert_eq!(velocity.angvel, Vec3::ZERO);

        // Level 1 has a successor: next state is the victory overlay.
        app.update();
        assert_eq!(current_state(&app), GameState::Victory);
    }

    #[test]
    fn capture_on_final_level_reaches_game_complete() {
        let mut app = build_test_app();
        app.add_systems(Update, ring_capture_system);
        app.world_mut().resource_mut::<RunState>().level_id = 3;
        spawn_ball(&mut app, RING_POSITION, Velocity::zero());
        spawn_ring(&mut app);

        app.update();
        app.update();
        assert_eq!(current_state(&app), GameState::GameComplete);
    }

    #[test]
    fn ball_outside_threshold_does_not_win() {
        let mut app = build_test_app();
        app.add_systems(Update, ring_capture_system);
        // 3.5 > win distance of 3.0 (ball radius 1 + ring bounding radius 2).
        spawn_ball(
            &mut app,
            RING_POSITION + Vec3::new(0.0, 3.5, 0.0),
            Velocity::zero(),
        );
        spawn_ring(&mut app);

        app.update();
        assert!(!app.world().resource::<RunState>().won);
    }

    #[test]
    fn win_is_monotonic_until_restart() {
        let mut app = build_test_app();
        app.add_systems(Update, (ring_capture_system, fall_reset_system).chain());
        let ball = spawn_ball(&mut app, RING_POSITION, Velocity::zero());
        spawn_ring(&mut app);

        app.update();
        assert!(app.world().resource::<RunState>().won);

        // Force the ball below the floor: with `won` set, no reset and no
        // attempts increment may occur.
        app.world_mut()
            .entity_mut(ball)
            .get_mut::<Transform>()
            .unwrap()
            .translation = Vec3::new(0.0, -5.0, 0.0);
        app.update();
        app.update();

        let run = app.world().resource::<RunState>();
        assert!(run.won);
        assert_eq!(run.attempts, 0);
        let (position, _) = ball_state(&mut app, ball);
        assert_eq!(position, Vec3::new(0.0, -5.0, 0.0));
    }

    // ── tick_clock_system ─────────────────────────────────────────────────────

    #[test]
    fn clock_accumulates_fixed_steps_and_freezes_on_win() {
        let mut app = build_test_app();
        app.add_systems(Update, tick_clock_system);

        for _ in 0..60 {
            app.update();
        }
        let elapsed = app.world().resource::<RunState>().elapsed_secs;
        assert!((elapsed - 1.0).abs() < 1e-4);

        app.world_mut().resource_mut::<RunState>().won = true;
        app.update();
        assert_eq!(app.world().resource::<RunState>().elapsed_secs, elapsed);
    }

    // ── obstacle_motion_system ────────────────────────────────────────────────

    #[test]
    fn motion_positions_depend_only_on_elapsed_time() {
        let mut app = build_test_app();
        app.add_systems(Update, obstacle_motion_system);
        app.world_mut().resource_mut::<RunState>().level_id = 3;
        for index in 0..3 {
            app.world_mut()
                .spawn((ObstacleDisc { index }, Transform::default()));
        }

        // sin(2 · π/4) = 1 → y = 1·1 + 2 = 3 on every disc.
        app.world_mut().resource_mut::<RunState>().elapsed_secs = std::f32::consts::FRAC_PI_4;
        app.update();

        let world = app.world_mut();
        let mut query = world.query::<(&ObstacleDisc, &Transform)>();
        for (_, transform) in query.iter(&world) {
            assert!((transform.translation.y - 3.0).abs() < 1e-4);
        }

        // Re-running at the same t reproduces the same positions exactly.
        app.update();
        let world = app.world_mut();
        let mut query = world.query::<(&ObstacleDisc, &Transform)>();
        for (_, transform) in query.iter(&world) {
            assert!((transform.translation.y - 3.0).abs() < 1e-4);
        }
    }

    // ── platform_tilt_system ──────────────────────────────────────────────────

    #[test]
    fn held_key_tilts_all_discs_identically() {
        let mut app = build_test_app();
        app.add_systems(Update, platform_tilt_system);
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ArrowRight);
        app.insert_resource(keys);
        for index in 0..3 {
            app.world_mut()
                .spawn((ObstacleDisc { index }, Transform::default()));
        }

        app.update();

        let lean = *app.world().resource::<LeanState>();
        assert!(lean.x > 0.0);
        assert_eq!(lean.y, 0.0);

        let expected = Quat::from_euler(EulerRot::XYZ, lean.y, 0.0, lean.x);
        let world = app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<ObstacleDisc>>();
        for transform in query.iter(&world) {
            assert!(transform.rotation.angle_between(expected) < 1e-5);
        }
    }

    #[test]
    fn tilt_is_gated_while_won() {
        let mut app = build_test_app();
        app.add_systems(Update, platform_tilt_system);
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ArrowLeft);
        app.insert_resource(keys);
        app.world_mut().resource_mut::<RunState>().won = true;
        app.world_mut()
            .spawn((ObstacleDisc { index: 0 }, Transform::default()));

        app.update();

        assert_eq!(app.world().resource::<LeanState>().x, 0.0);
        let world = app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<ObstacleDisc>>();
        for transform in query.iter(&world) {
            assert_eq!(transform.rotation, Quat::IDENTITY);
        }
    }

    // ── camera_follow_system ──────────────────────────────────────────────────

    #[test]
    fn camera_lerps_toward_ball_offset() {
        let mut app = build_test_app();
        app.add_systems(Update, camera_follow_system);
        spawn_ball(&mut app, Vec3::new(0.0, 5.0, -10.0), Velocity::zero());
        let camera = app
            .world_mut()
            .spawn((FollowCamera, Transform::from_translation(CAMERA_OFFSET)))
            .id();

        app.update();

        let target = Vec3::new(0.0, 5.0, -10.0) + CAMERA_OFFSET;
        let expected = CAMERA_OFFSET.lerp(target, crate::constants::CAMERA_LERP_FACTOR);
        let transform = *app.world().entity(camera).get::<Transform>().unwrap();
        assert!(transform.translation.distance(expected) < 1e-4);
    }
}
