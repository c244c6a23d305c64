use bevy::prelude::*;

pub(super) fn overlay_bg() -> Color {
    Color::srgba(0.0, 0.0, 0.0, 0.8)
}
pub(super) fn start_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn start_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn start_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(super) fn quit_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
pub(super) fn quit_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
pub(super) fn quit_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}
pub(super) fn title_color() -> Color {
    Color::srgb(1.0, 0.84, 0.0)
}
pub(super) fn body_color() -> Color {
    Color::srgb(0.92, 0.92, 0.92)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.45, 0.45, 0.52)
}

pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}
