//! Headless unit tests for the [`GameState`] state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no physics —
//! so they run fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `Intro`.
//! 2. A `NextState` request transitions from `Intro` → `Playing`.
//! 3. `Playing` state persists across frames with no new transition request.
//! 4. `insert_state` can force-start directly in `Playing`
//!    (the `GRAVITY_MAZE_LEVEL` path in `main.rs`).
//! 5. The win flow walks `Playing` → `Victory` → `Playing` and
//!    `Playing` → `GameComplete` → `Playing`.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use gravity_maze::menu::GameState;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with just the state registered via `init_state`.
///
/// `MinimalPlugins` provides the required scheduling infrastructure.
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
/// No window or rendering is created.
fn app_with_default_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

/// Build a minimal headless app with the state forced into `Playing` from the
/// start (mirrors the env-override path in `main.rs`).
fn app_with_playing_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_state(GameState::Playing);
    app
}

fn set_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

fn current_state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The default variant of `GameState` is `Intro`.
#[test]
fn default_state_is_intro() {
    let mut app = app_with_default_state();
    app.update(); // run one frame so StateTransition fires
    assert_eq!(
        current_state(&app),
        GameState::Intro,
        "initial state must be Intro"
    );
}

/// Requesting `Playing` via `NextState` transitions the state on the next
/// `StateTransition` pass (which Bevy runs before each `Update`).
#[test]
fn transition_intro_to_playing() {
    let mut app = app_with_default_state();
    app.update(); // settle into Intro

    set_state(&mut app, GameState::Playing);

    assert_eq!(
        current_state(&app),
        GameState::Playing,
        "state must be Playing after explicit transition"
    );
}

/// `Playing` state persists across additional frames — no accidental reversion.
#[test]
fn playing_state_persists_across_frames() {
    let mut app = app_with_default_state();
    app.update();
    set_state(&mut app, GameState::Playing);

    // Run several more frames without another transition request.
    for _ in 0..5 {
        app.update();
    }

    assert_eq!(
        current_state(&app),
        GameState::Playing,
        "Playing must remain stable without a new transition"
    );
}

/// `insert_state` can force the initial state to `Playing` directly,
/// which is the `GRAVITY_MAZE_LEVEL` code path in `main.rs`.
#[test]
fn insert_state_starts_in_playing() {
    let mut app = app_with_playing_state();
    app.update();

    assert_eq!(
        current_state(&app),
        GameState::Playing,
        "insert_state(Playing) must start directly in Playing"
    );
}

/// The per-level win flow: ring capture raises `Victory`, the continue action
/// returns to `Playing`.
#[test]
fn victory_round_trip_returns_to_playing() {
    let mut app = app_with_playing_state();
    app.update();

    set_state(&mut app, GameState::Victory);
    assert_eq!(current_state(&app), GameState::Victory);

    set_state(&mut app, GameState::Playing);
    assert_eq!(current_state(&app), GameState::Playing);
}

/// The final-level win flow: `GameComplete` is stable until an explicit
/// play-again action leaves it.
#[test]
fn game_complete_is_terminal_until_play_again() {
    let mut app = app_with_playing_state();
    app.update();

    set_state(&mut app, GameState::GameComplete);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(
        current_state(&app),
        GameState::GameComplete,
        "GameComplete must be stable with no transition request"
    );

    set_state(&mut app, GameState::Playing);
    assert_eq!(current_state(&app), GameState::Playing);
}
