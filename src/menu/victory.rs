use super::*;

// ── Victory (level cleared, successor exists) ─────────────────────────────────

/// Spawn the victory overlay centred over the frozen scene.
pub(super) fn setup_victory(mut commands: Commands, run: Res<RunState>) {
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
                ..default()
            },
            BackgroundColor(overlay_bg()),
            ZIndex(300),
            VictoryRoot,
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new("VICTORY!"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(overlay, 20.0);

            overlay.spawn((
                Text::new(format!("Level {} Complete!", run.level_id)),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(body_color()),
            ));

            spacer(overlay, 10.0);

            overlay.spawn((
                Text::new(format!(
                    "You completed level {} in {} attempts!",
                    run.level_id, run.attempts
                )),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(body_color()),
            ));

            spacer(overlay, 30.0);

            overlay
                .spawn((
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
                    VictoryContinueButton,
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("CONTINUE"),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(start_text()),
                    ));
                });

            spacer(overlay, 16.0);

            overlay.spawn((
                Text::new("Press Enter to continue"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Recursively despawn all victory overlay entities.
pub(super) fn cleanup_victory(mut commands: Commands, query: Query<Entity, With<VictoryRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle CONTINUE (and the Enter shortcut): advance to the cleared level's
/// successor.
///
/// The capture system routes final-level wins to `GameComplete`, so in this
/// state a successor always exists; its absence would be a wiring bug and is
/// logged rather than panicking.
pub(super) fn victory_button_system(
    continue_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<VictoryContinueButton>),
    >,
    mut btn_text: Query<&mut TextColor>,
    keys: Res<ButtonInput<KeyCode>>,
    run: Res<RunState>,
    catalog: Res<LevelCatalog>,
    mut requests: MessageWriter<LevelRequest>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let wants_continue = keys.just_pressed(KeyCode::Enter)
        || continue_query
            .iter()
            .any(|(i, _)| *i == Interaction::Pressed);

    if wants_continue {
        let Some(next_level) = catalog
            .level_by_id(run.level_id)
            .and_then(|level| level.next_level_id)
        else {
            warn!(
                "[menu] victory overlay shown for level {} with no successor",
                run.level_id
            );
            return;
        };
        requests.write(LevelRequest {
            level_id: next_level,
        });
        next_state.set(GameState::Playing);
        return;
    }

    for (interaction, children) in continue_query.iter() {
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

// ── Game complete (final level cleared) ───────────────────────────────────────

/// Spawn the terminal "all levels complete" overlay.
pub(super) fn setup_game_complete(mut commands: Commands, run: Res<RunState>) {
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
                ..default()
            },
            BackgroundColor(overlay_bg()),
            ZIndex(300),
            GameCompleteRoot,
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new("VICTORY!"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(overlay, 20.0);

            overlay.spawn((
                Text::new("Game Complete!"),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(body_color()),
            ));

            spacer(overlay, 10.0);

            overlay.spawn((
                Text::new(format!(
                    "You finished all levels in {} attempts!",
                    run.attempts
                )),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(body_color()),
            ));

            spacer(overlay, 30.0);

            overlay
                .spawn((
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
                    GameCompletePlayAgainButton,
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("PLAY AGAIN"),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(start_text()),
                    ));
                });

            spacer(overlay, 14.0);

            overlay
                .spawn((
                    Button,
                    Node {
                        width: Val::Px(240.0),
                        height: Val::Px(56.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(quit_bg()),
                    BorderColor::all(quit_border()),
                    MenuQuitButton,
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("QUIT"),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(quit_text()),
                    ));
                });

            spacer(overlay, 16.0);

            overlay.spawn((
                Text::new("Press Enter to play again from level 1"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Recursively despawn all game-complete overlay entities.
pub(super) fn cleanup_game_complete(
    mut commands: Commands,
    query: Query<Entity, With<GameCompleteRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle PLAY AGAIN (restart from level 1) and QUIT.
#[allow(clippy::type_complexity)]
pub(super) fn game_complete_button_system(
    play_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<GameCompletePlayAgainButton>),
    >,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuQuitButton>)>,
    mut btn_text: Query<&mut TextColor>,
    keys: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<LevelRequest>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<bevy::app::AppExit>,
) {
    let wants_play_again = keys.just_pressed(KeyCode::Enter)
        || play_query.iter().any(|(i, _)| *i == Interaction::Pressed);

    if wants_play_again {
        requests.write(LevelRequest { level_id: 1 });
        next_state.set(GameState::Playing);
        return;
    }

    for (interaction, children) in play_query.iter() {
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

    for (interaction, children) in quit_query.iter() {
        match interaction {
            Interaction::Pressed => {
                exit.write(bevy::app::AppExit::Success);
            }
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
                        *color = TextColor(quit_text());
                    }
                }
            }
        }
    }
}
