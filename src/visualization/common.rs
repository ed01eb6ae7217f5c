//! Shared scene construction for the demo viewers.
//!
//! Cameras and lights are built from the immutable [`SceneConfig`] structs;
//! the debug axes rig only appears in development builds.

use bevy::prelude::*;
use bevy::math::primitives::Cuboid;

use crate::configuration::config::{AmbientLightConfig, CameraConfig, DirectionalLightConfig};
use crate::configuration::env::is_dev;

/// Bevy's ambient brightness is in lux-like units, the config intensity
/// is the usual 0..1 knob.
const AMBIENT_BRIGHTNESS_SCALE: f32 = 500.0;

/// Spawn the perspective camera described by `cfg`, black clear color.
pub fn spawn_camera(commands: &mut Commands, cfg: &CameraConfig) {
    let position = Vec3::new(
        cfg.position[0] as f32,
        cfg.position[1] as f32,
        cfg.position[2] as f32,
    );
    let look_at = Vec3::new(
        cfg.look_at[0] as f32,
        cfg.look_at[1] as f32,
        cfg.look_at[2] as f32,
    );

    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        projection: PerspectiveProjection {
            fov: (cfg.fovy as f32).to_radians(),
            near: cfg.near as f32,
            far: cfg.far as f32,
            ..Default::default()
        }
        .into(),
        transform: Transform::from_translation(position).looking_at(look_at, Vec3::Y),
        ..Default::default()
    });
}

/// Spawn the directional light and install the ambient term.
pub fn spawn_lights(
    commands: &mut Commands,
    directional: &DirectionalLightConfig,
    ambient: &AmbientLightConfig,
) {
    let offset = Vec3::new(
        directional.direction[0] as f32,
        directional.direction[1] as f32,
        directional.direction[2] as f32,
    );

    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            color: Color::srgb(
                directional.color[0] as f32,
                directional.color[1] as f32,
                directional.color[2] as f32,
            ),
            ..Default::default()
        },
        // the light shines from `offset` toward the origin
        transform: Transform::from_translation(offset).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.insert_resource(AmbientLight {
        color: Color::srgb(
            ambient.color[0] as f32,
            ambient.color[1] as f32,
            ambient.color[2] as f32,
        ),
        brightness: ambient.intensity as f32 * AMBIENT_BRIGHTNESS_SCALE,
    });
}

// =========================================================================================
// Debug axes rig, dev builds only
// =========================================================================================

/// Spawn three thin boxes along X, Y, Z for visual reference.
/// No-op in release builds.
pub fn spawn_debug_axes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    if !is_dev() {
        return;
    }

    let axis_len = 100.0;
    let axis_thickness = 0.005;

    // X axis: red
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_len, axis_thickness, axis_thickness).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0),
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Y axis: green
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_thickness, axis_len, axis_thickness).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 1.0, 0.0),
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Z axis: blue
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_thickness, axis_thickness, axis_len).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 0.0, 1.0),
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });
}
