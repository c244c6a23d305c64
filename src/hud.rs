//! In-game HUD: attempt/level counters, the level-selector row, and the
//! viewport-size advisory.
//!
//! The HUD is pure presentation: counters are re-read from [`RunState`] every
//! frame, and the selector buttons only emit [`LevelRequest`] messages — no
//! game logic lives here.
//!
//! | System                      | Schedule | Purpose                          |
//! |-----------------------------|----------|----------------------------------|
//! | `setup_hud`                 | Startup  | Spawn counters, buttons, advisory|
//! | `hud_counter_system`        | Update   | Refresh attempts / level text    |
//! | `level_button_system`       | Update   | Handle selector clicks + highlight |
//! | `viewport_advisory_system`  | Update   | Show warning on small windows    |

use crate::constants::{HUD_FONT_SIZE, MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH};
use crate::level::{LevelCatalog, LevelRequest, RunState};
use crate::menu::GameState;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Marker for the "Attempts: N" counter text.
#[derive(Component)]
pub struct AttemptsTextDisplay;

/// Marker for the "Level: N" counter text.
#[derive(Component)]
pub struct LevelTextDisplay;

/// Level-selector button tagged with the level id it starts.
#[derive(Component, Clone, Copy)]
pub struct LevelSelectButton(pub u32);

/// Marker for the small-viewport advisory node.
#[derive(Component)]
pub struct ViewportAdvisory;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn button_active_bg() -> Color {
    Color::srgb(0.29, 0.69, 0.31)
}
fn button_hover_bg() -> Color {
    Color::srgb(0.27, 0.63, 0.29)
}
fn button_idle_bg() -> Color {
    Color::srgb(0.40, 0.40, 0.40)
}
fn advisory_bg() -> Color {
    Color::srgba(0.80, 0.0, 0.0, 0.7)
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud)
            .add_systems(Update, (hud_counter_system, viewport_advisory_system))
            .add_systems(
                Update,
                level_button_system.run_if(in_state(GameState::Playing)),
            );
    }
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Spawn the permanent HUD nodes.
pub fn setup_hud(mut commands: Commands, catalog: Res<LevelCatalog>) {
    // ── Counters, top-left ────────────────────────────────────────────────────
    commands.spawn((
        Text::new("Attempts: 0"),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            ..default()
        },
        AttemptsTextDisplay,
    ));
    commands.spawn((
        Text::new("Level: 1"),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(60.0),
            ..default()
        },
        LevelTextDisplay,
    ));

    // ── Level selector, bottom-left ───────────────────────────────────────────
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            column_gap: Val::Px(10.0),
            ..default()
        })
        .with_children(|row| {
            for level in &catalog.levels {
                spawn_level_button(row, level.level_id);
            }
        });

    // ── Viewport advisory, bottom-right ───────────────────────────────────────
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                bottom: Val::Px(20.0),
                padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(advisory_bg()),
            Visibility::Hidden,
            ViewportAdvisory,
        ))
        .with_children(|node| {
            node.spawn((
                Text::new(format!(
                    "Window too small! Please resize to at least {}x{}",
                    MIN_VIEWPORT_WIDTH as u32, MIN_VIEWPORT_HEIGHT as u32
                )),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn spawn_level_button(parent: &mut ChildSpawnerCommands<'_>, level_id: u32) {
    parent
        .spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(if level_id == 1 {
                button_active_bg()
            } else {
                button_idle_bg()
            }),
            LevelSelectButton(level_id),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(format!("Level {level_id}")),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Refresh the attempts and level counter text from [`RunState`].
#[allow(clippy::type_complexity)]
pub fn hud_counter_system(
    run: Res<RunState>,
    mut q_attempts: Query<&mut Text, (With<AttemptsTextDisplay>, Without<LevelTextDisplay>)>,
    mut q_level: Query<&mut Text, (With<LevelTextDisplay>, Without<AttemptsTextDisplay>)>,
) {
    if let Ok(mut text) = q_attempts.single_mut() {
        text.0 = format!("Attempts: {}", run.attempts);
    }
    if let Ok(mut text) = q_level.single_mut() {
        text.0 = format!("Level: {}", run.level_id);
    }
}

/// Handle level-selector clicks and keep the active level highlighted.
///
/// A press restarts the chosen level from scratch (ball at spawn, attempts
/// zeroed) via [`LevelRequest`].
pub fn level_button_system(
    mut q_buttons: Query<(&Interaction, &LevelSelectButton, &mut BackgroundColor), With<Button>>,
    run: Res<RunState>,
    mut requests: MessageWriter<LevelRequest>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (interaction, button, mut background) in q_buttons.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                requests.write(LevelRequest {
                    level_id: button.0,
                });
                next_state.set(GameState::Playing);
            }
            Interaction::Hovered => {
                *background = BackgroundColor(button_hover_bg());
            }
            Interaction::None => {
                *background = BackgroundColor(if button.0 == run.level_id {
                    button_active_bg()
                } else {
                    button_idle_bg()
                });
            }
        }
    }
}

/// Show the advisory while the window is below the recommended size.
pub fn viewport_advisory_system(
    windows: Query<&Window>,
    mut q_advisory: Query<&mut Visibility, With<ViewportAdvisory>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(mut visibility) = q_advisory.single_mut() else {
        return;
    };
    *visibility = if window.width() < MIN_VIEWPORT_WIDTH || window.height() < MIN_VIEWPORT_HEIGHT {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
}
