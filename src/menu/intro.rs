use super::*;

/// Spawn the full-screen intro overlay over the live scene.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │               GRAVITY MAZE                  │
/// │   A physics-based puzzle game where you…    │
/// │                                             │
/// │   Recommended window size: 1280x720…        │
/// │   Controls: arrows / WASD …                 │
/// │                                             │
/// │              [ START GAME ]                 │
/// └─────────────────────────────────────────────┘
/// ```
pub(super) fn setup_intro(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(overlay_bg()),
            ZIndex(300),
            IntroRoot,
        ))
        .with_children(|root| {
            // ── Title ─────────────────────────────────────────────────────────
            root.spawn((
                Text::new("GRAVITY MAZE"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 20.0);

            // ── Description ───────────────────────────────────────────────────
            root.spawn((
                Text::new(
                    "A physics-based puzzle game where you guide a ball through a \
                     series of rotating discs to reach the golden ring. Each level \
                     presents new challenges with moving platforms and \
                     gravity-defying obstacles.",
                ),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(body_color()),
                Node {
                    max_width: Val::Px(800.0),
                    ..default()
                },
            ));

            spacer(root, 30.0);

            // ── Requirements ──────────────────────────────────────────────────
            for line in [
                "Recommended window size: 1280x720 or larger",
                "Fullscreen recommended for best experience",
            ] {
                root.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(title_color()),
                ));
            }

            spacer(root, 24.0);

            // ── Controls ──────────────────────────────────────────────────────
            root.spawn((
                Text::new("Controls:"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(body_color()),
            ));
            for line in [
                "Arrow keys OR WASD to tilt the discs",
                "Guide the ball through the discs",
                "Avoid falling off the platforms",
                "Reach the golden ring to win",
            ] {
                root.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(body_color()),
                ));
            }

            spacer(root, 36.0);

            // ── Start button ──────────────────────────────────────────────────
            root.spawn((
                Button,
                Node {
                    width: Val::Px(240.0),
                    height: Val::Px(56.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(start_bg()),
                BorderColor::all(start_border()),
                IntroStartButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("START GAME"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(start_text()),
                ));
            });

            spacer(root, 16.0);

            root.spawn((
                Text::new("Press Enter to start"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Recursively despawn all intro overlay entities.
pub(super) fn cleanup_intro(mut commands: Commands, query: Query<Entity, With<IntroRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle the START button (and Enter shortcut): load the starting level
/// fresh and enter gameplay.
pub(super) fn intro_button_system(
    start_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<IntroStartButton>)>,
    mut btn_text: Query<&mut TextColor>,
    keys: Res<ButtonInput<KeyCode>>,
    run: Res<RunState>,
    mut requests: MessageWriter<LevelRequest>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let wants_start = keys.just_pressed(KeyCode::Enter)
        || start_query.iter().any(|(i, _)| *i == Interaction::Pressed);

    if wants_start {
        requests.write(LevelRequest {
            level_id: run.level_id,
        });
        next_state.set(GameState::Playing);
        return;
    }

    for (interaction, children) in start_query.iter() {
        match interaction {
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(start_text());
                    }
                }
            }
            Interaction::Pressed => {}
        }
    }
}
