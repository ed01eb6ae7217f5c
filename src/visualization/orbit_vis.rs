//! Bevy viewer for the one-body orbit demo: a sun at the origin, an
//! orbiting earth with a moon child, and a dim starfield.

use bevy::prelude::*;
use bevy::math::primitives::Sphere;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::simulation::scenario::OrbitScenario;
use crate::simulation::updater::orbit_step;
use crate::visualization::common::{spawn_camera, spawn_debug_axes, spawn_lights};

/// Component tagging the entity that follows the orbiting body.
#[derive(Component)]
struct OrbitAnchor;

const SUN_SCALE: f32 = 2.0;
const EARTH_SCALE: f32 = 0.5;
// the moon is half the earth
const MOON_SCALE: f32 = EARTH_SCALE / 2.0;

/// Starfield layout: fixed so every run shows the same sky.
const STAR_SEED: u64 = 7;
const STAR_COUNT: usize = 400;

pub fn run_orbit(scenario: OrbitScenario) {
    println!(
        "run_orbit: starting Bevy viewer, body at r = {:.3}",
        scenario.body.separation()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_orbit)
        .add_systems(Update, (orbit_step_system, sync_orbit))
        .run();
}

/// Startup system: camera, lights, sun, earth + moon, starfield
fn setup_orbit(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<OrbitScenario>,
) {
    spawn_camera(&mut commands, &scenario.scene.camera);
    spawn_lights(
        &mut commands,
        &scenario.scene.directional_light,
        &scenario.scene.ambient_light,
    );
    spawn_debug_axes(&mut commands, &mut meshes, &mut materials);

    let sphere = meshes.add(Sphere::new(1.0).mesh().uv(64, 64));

    // Sun: unlit so it reads as self-luminous, with a point light inside
    commands.spawn(PbrBundle {
        mesh: sphere.clone(),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.6, 0.1),
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0).with_scale(Vec3::splat(SUN_SCALE)),
        ..Default::default()
    });
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Earth with the moon parented at a fixed offset, so the moon rides
    // the earth's orbit and spin for free
    let b = &scenario.body;
    commands
        .spawn((
            PbrBundle {
                mesh: sphere.clone(),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(0.2, 0.4, 0.9),
                    ..Default::default()
                }),
                transform: Transform::from_xyz(
                    b.position.x as f32,
                    b.position.y as f32,
                    b.position.z as f32,
                )
                .with_scale(Vec3::splat(EARTH_SCALE)),
                ..Default::default()
            },
            OrbitAnchor,
        ))
        .with_children(|parent| {
            parent.spawn(PbrBundle {
                mesh: sphere.clone(),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(0.7, 0.7, 0.7),
                    ..Default::default()
                }),
                // offset is in the parent's (scaled) local space
                transform: Transform::from_xyz(0.0, 0.0, 2.0)
                    .with_scale(Vec3::splat(MOON_SCALE / EARTH_SCALE)),
                ..Default::default()
            });
        });

    spawn_starfield(&mut commands, &mut meshes, &mut materials);
}

/// Scatter dim unlit spheres on shells of growing radius.
fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(STAR_SEED);

    let star = meshes.add(Sphere::new(0.05).mesh().uv(8, 8));
    let grays = [
        materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.35, 0.35),
            unlit: true,
            ..Default::default()
        }),
        materials.add(StandardMaterial {
            base_color: Color::srgb(0.22, 0.22, 0.22),
            unlit: true,
            ..Default::default()
        }),
        materials.add(StandardMaterial {
            base_color: Color::srgb(0.12, 0.12, 0.12),
            unlit: true,
            ..Default::default()
        }),
    ];

    for i in 0..STAR_COUNT {
        // cube-distributed direction, pushed out to a shell
        let dir = Vec3::new(
            rng.random_range(-1.0_f32..1.0),
            rng.random_range(-1.0_f32..1.0),
            rng.random_range(-1.0_f32..1.0),
        );
        if dir.length_squared() < 1e-6 {
            continue;
        }
        let shell = rng.random_range(60.0_f32..300.0);
        let position = dir.normalize() * shell;

        commands.spawn(PbrBundle {
            mesh: star.clone(),
            material: grays[i % grays.len()].clone(),
            transform: Transform::from_translation(position)
                .with_scale(Vec3::splat(rng.random_range(1.0_f32..3.0))),
            ..Default::default()
        });
    }
}

/// Per-frame integration with the configured fixed step.
fn orbit_step_system(mut scenario: ResMut<OrbitScenario>) {
    let OrbitScenario { body, params, .. } = &mut *scenario;
    orbit_step(body, params, params.h0);
}

fn sync_orbit(
    scenario: Res<OrbitScenario>,
    mut query: Query<&mut Transform, With<OrbitAnchor>>,
) {
    let b = &scenario.body;
    for mut transform in &mut query {
        transform.translation = Vec3::new(
            b.position.x as f32,
            b.position.y as f32,
            b.position.z as f32,
        );
        transform.rotation = Quat::from_rotation_y(b.spin as f32);
    }
}
