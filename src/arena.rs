//! Arena construction: ground, platform discs, target ring, ball, and lights.
//!
//! Spawned once at startup; the intro overlay floats above the live scene.
//! Level switches never respawn these entities — the level loader only
//! repositions them — so entity handles stay stable for the whole session.
//!
//! ## Body ownership
//!
//! | Entity      | RigidBody               | Role                               |
//! |-------------|-------------------------|------------------------------------|
//! | Ground      | `Fixed`                 | Scenery catch plane below the fall threshold |
//! | Discs ×3    | `KinematicPositionBased`| Driven: scripted motion + tilt each tick |
//! | Target ring | `Fixed`                 | Win target; bounding-ball collider |
//! | Ball        | `Dynamic`               | Free: integrated by the solver     |
//!
//! Driven bodies are written kinematically and never integrated; the ball is
//! the only body the solver owns.  The two never overlap, so scripted motion
//! and force integration cannot fight over the same body in one tick.

use crate::config::GameConfig;
use crate::constants::{RING_MAJOR_RADIUS, RING_POSITION, RING_TUBE_RADIUS};
use crate::level::LevelCatalog;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Marker component for the ball entity.
#[derive(Component)]
pub struct Ball;

/// One of the three platform discs; `index` selects its slot in a level's
/// declared layout.
///
/// The first disc is the player-controlled platform; the other two are
/// visually-linked companions that share the identical tilt orientation
/// without being physically coupled to it.
#[derive(Component)]
pub struct ObstacleDisc {
    pub index: usize,
}

/// Marker component for the golden target ring.
#[derive(Component)]
pub struct TargetRing;

// ── Startup ───────────────────────────────────────────────────────────────────

/// Spawn the complete arena: lights, ground, the three platform discs laid out
/// for the first level, the target ring, and the ball at spawn height.
pub fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
    catalog: Res<LevelCatalog>,
) {
    // ── Lights ────────────────────────────────────────────────────────────────
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.25, 0.25, 0.25),
        brightness: 300.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // ── Ground ────────────────────────────────────────────────────────────────
    let half_size = config.ground_size / 2.0;
    commands.spawn((
        Mesh3d(
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(config.ground_size, config.ground_size),
            ),
        ),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.33, 0.55, 0.27),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
        Transform::from_xyz(0.0, config.ground_height, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(half_size, 0.1, half_size),
    ));

    // ── Platform discs ────────────────────────────────────────────────────────
    let disc_mesh = meshes.add(Cylinder::new(config.disc_radius, config.disc_thickness));
    let disc_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.0, 0.8, 0.1),
        perceptual_roughness: 0.7,
        metallic: 0.3,
        ..default()
    });
    let layout = catalog
        .first_level()
        .map(|level| level.disc_layout)
        .unwrap_or([Vec3::ZERO; 3]);
    for (index, position) in layout.into_iter().enumerate() {
        commands.spawn((
            Mesh3d(disc_mesh.clone()),
            MeshMaterial3d(disc_material.clone()),
            Transform::from_translation(position),
            RigidBody::KinematicPositionBased,
            Collider::cylinder(config.disc_thickness / 2.0, config.disc_radius),
            Restitution::coefficient(config.disc_restitution),
            Friction::coefficient(config.disc_friction),
            ObstacleDisc { index },
        ));
    }

    // ── Target ring ───────────────────────────────────────────────────────────
    // The visual is a torus stood on edge; the collider is the bounding ball
    // the win distance check is defined against.
    commands.spawn((
        Mesh3d(meshes.add(Torus::new(
            RING_MAJOR_RADIUS - RING_TUBE_RADIUS,
            RING_MAJOR_RADIUS + RING_TUBE_RADIUS,
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.84, 0.0),
            perceptual_roughness: 0.3,
            metallic: 0.8,
            ..default()
        })),
        Transform::from_translation(RING_POSITION)
            .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
        RigidBody::Fixed,
        Collider::ball(config.ring_bounding_radius),
        Restitution::coefficient(0.1),
        Friction::coefficient(0.5),
        TargetRing,
    ));

    // ── Ball ──────────────────────────────────────────────────────────────────
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(config.ball_radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.08, 0.08),
            perceptual_roughness: 0.3,
            metallic: 0.7,
            emissive: Color::srgb(0.18, 0.0, 0.0).into(),
            ..default()
        })),
        Transform::from_translation(config.ball_spawn()),
        RigidBody::Dynamic,
        Collider::ball(config.ball_radius),
        ColliderMassProperties::Mass(config.ball_mass),
        Restitution::coefficient(config.ball_restitution),
        Friction::coefficient(config.ball_friction),
        Damping {
            linear_damping: config.ball_linear_damping,
            angular_damping: config.ball_angular_damping,
        },
        Velocity::zero(),
        ActiveEvents::COLLISION_EVENTS,
        Ball,
    ));

    eprintln!("[SETUP] Arena spawned (ground, 3 discs, ring, ball)");
}
