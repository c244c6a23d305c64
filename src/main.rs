use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier3d::prelude::*;
use std::env;

use gravity_maze::arena;
use gravity_maze::config::{self, GameConfig};
use gravity_maze::constants::FIXED_DT;
use gravity_maze::graphics;
use gravity_maze::hud::HudPlugin;
use gravity_maze::level::{self, StartLevel};
use gravity_maze::menu::{GameState, MenuPlugin};
use gravity_maze::simulation::SimulationPlugin;

/// Configure Rapier physics: Earth-like gravity straight down.
fn setup_physics_config(
    mut rapier_config: Query<&mut RapierConfiguration>,
    config: Res<GameConfig>,
) {
    for mut cfg in rapier_config.iter_mut() {
        cfg.gravity = Vec3::new(0.0, config.gravity_y, 0.0);
    }
}

fn main() {
    // Optional dev shortcut: start directly in a given level, skipping the intro.
    let start_level = env::var("GRAVITY_MAZE_LEVEL")
        .ok()
        .and_then(|value| value.parse::<u32>().ok());

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Gravity Maze".into(),
            resolution: WindowResolution::new(1280, 720),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::srgb(0.04, 0.06, 0.12)))
    // Insert GameConfig with compiled defaults; load_game_config will
    // overwrite it from assets/game.toml (if present) in the Startup schedule.
    .insert_resource(GameConfig::default())
    // One fixed step per render frame: simulated time diverges from
    // wall-clock when the display refresh is not 60 Hz, by design.
    .insert_resource(TimestepMode::Fixed {
        dt: FIXED_DT,
        substeps: 1,
    })
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
    .add_plugins(MenuPlugin)
    .add_plugins(SimulationPlugin)
    .add_plugins(HudPlugin)
    .add_systems(
        Startup,
        (
            // Load config first so every other startup system sees the final values.
            config::load_game_config,
            graphics::setup_camera.after(config::load_game_config),
            arena::spawn_arena.after(config::load_game_config),
            level::queue_start_level.after(arena::spawn_arena),
            setup_physics_config.after(config::load_game_config),
        ),
    );

    if let Some(level_id) = start_level {
        app.insert_resource(StartLevel(level_id));
        app.insert_state(GameState::Playing);
        println!("Starting directly in level {level_id}");
    } else {
        app.insert_resource(StartLevel::default());
    }

    app.run();
}
