use bevy::prelude::*;

use crate::constants::CAMERA_OFFSET;

/// Marker for the chase camera; its transform is driven every tick by
/// [`crate::simulation::camera_follow_system`].
#[derive(Component)]
pub struct FollowCamera;

/// Setup the 3D chase camera at its resting offset, aimed at the arena.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
        FollowCamera,
    ));
    eprintln!("[SETUP] Camera spawned");
}
