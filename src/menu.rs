//! Overlay screens — `GameState` definition and `MenuPlugin`.
//!
//! ## States
//!
//! | State          | Description                                           |
//! |----------------|-------------------------------------------------------|
//! | `Intro`        | Initial state; splash/instructions overlay shown      |
//! | `Playing`      | Simulation running; tick chain active                 |
//! | `Victory`      | Level cleared; victory overlay over the frozen scene  |
//! | `GameComplete` | Final level cleared; terminal overlay                 |
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                        | Schedule                      | Purpose                  |
//! |-------------------------------|-------------------------------|--------------------------|
//! | `setup_intro` / `cleanup_intro` | `OnEnter/OnExit(Intro)`     | Splash overlay lifecycle |
//! | `intro_button_system`         | `Update / in Intro`           | START button + Enter     |
//! | `setup_victory` / `cleanup_victory` | `OnEnter/OnExit(Victory)` | Victory overlay lifecycle |
//! | `victory_button_system`       | `Update / in Victory`         | CONTINUE to next level   |
//! | `setup_game_complete` / `cleanup_game_complete` | `OnEnter/OnExit(GameComplete)` | Terminal overlay |
//! | `game_complete_button_system` | `Update / in GameComplete`    | PLAY AGAIN / QUIT        |

mod common;
mod intro;
mod types;
mod victory;

pub use types::*;

use crate::level::{LevelCatalog, LevelRequest, RunState};
use bevy::prelude::*;
use common::*;

/// Registers `GameState` and the three overlay lifecycles.
///
/// This plugin must be added to the app **before** any plugin that calls
/// `.run_if(in_state(GameState::Playing))`, so the state is always registered
/// first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::Intro), intro::setup_intro)
            .add_systems(OnExit(GameState::Intro), intro::cleanup_intro)
            .add_systems(
                Update,
                intro::intro_button_system.run_if(in_state(GameState::Intro)),
            )
            .add_systems(OnEnter(GameState::Victory), victory::setup_victory)
            .add_systems(OnExit(GameState::Victory), victory::cleanup_victory)
            .add_systems(
                Update,
                victory::victory_button_system.run_if(in_state(GameState::Victory)),
            )
            .add_systems(OnEnter(GameState::GameComplete), victory::setup_game_complete)
            .add_systems(OnExit(GameState::GameComplete), victory::cleanup_game_complete)
            .add_systems(
                Update,
                victory::game_complete_button_system.run_if(in_state(GameState::GameComplete)),
            );
    }
}
