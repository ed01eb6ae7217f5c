//! Bevy viewer for the fan scene: a spinning wing rig whose wind zone
//! floats any cube that sits inside it.

use bevy::prelude::*;
use bevy::math::primitives::{Cuboid, Cylinder};

use crate::simulation::scenario::FanScenario;
use crate::simulation::updater::{lift_step, wind_zone_contains};
use crate::visualization::common::{spawn_camera, spawn_debug_axes, spawn_lights};

/// Component tagging each cube with its index into FanScenario.boxes
#[derive(Component)]
struct BoxIndex(pub usize);

/// Component tagging the spinning wing group.
#[derive(Component)]
struct WingRig;

/// Wing spin per frame, radians.
const WING_SPIN_STEP: f64 = 0.1;

const WING_COUNT: usize = 4;

pub fn run_fan(scenario: FanScenario) {
    println!(
        "run_fan: starting Bevy viewer with {} boxes",
        scenario.boxes.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_fan)
        .add_systems(Update, (fan_step_system, sync_fan))
        .run();
}

/// Startup system: camera, lights, ground, fan rig, and the cubes
fn setup_fan(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<FanScenario>,
) {
    spawn_camera(&mut commands, &scenario.scene.camera);
    spawn_lights(
        &mut commands,
        &scenario.scene.directional_light,
        &scenario.scene.ambient_light,
    );
    spawn_debug_axes(&mut commands, &mut meshes, &mut materials);

    // Ground plane
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(20.0, 0.01, 20.0).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.5, 0.6, 0.75),
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, -0.005, 0.0),
        ..Default::default()
    });

    spawn_fan_rig(&mut commands, &mut meshes, &mut materials, &scenario);

    // Cubes the wind can pick up
    let cube = meshes.add(Cuboid::new(0.5, 0.5, 0.5).mesh());
    for (i, b) in scenario.boxes.iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: cube.clone(),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(0.9, 0.5, 0.2),
                    ..Default::default()
                }),
                transform: Transform::from_xyz(
                    b.position.x as f32,
                    b.position.y as f32,
                    b.position.z as f32,
                ),
                ..Default::default()
            },
            BoxIndex(i),
        ));
    }
}

/// The fan: a hub cylinder with four wings at 90 degree steps, plus a
/// wireframe-look frame ring around them.
fn spawn_fan_rig(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    scenario: &FanScenario,
) {
    let fan_x = scenario.fan_x as f32;

    let wing_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.9, 0.95),
        ..Default::default()
    });
    let hub_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.3, 0.3),
        ..Default::default()
    });

    let wing = meshes.add(Cuboid::new(0.2, 0.02, 0.6).mesh());
    let hub = meshes.add(Cylinder::new(0.1, 0.3).mesh());

    commands
        .spawn((
            SpatialBundle::from_transform(Transform::from_xyz(fan_x, 0.5, 0.0)),
            WingRig,
        ))
        .with_children(|parent| {
            parent.spawn(PbrBundle {
                mesh: hub,
                material: hub_material,
                ..Default::default()
            });

            for i in 0..WING_COUNT {
                let angle = std::f64::consts::TAU / WING_COUNT as f64 * i as f64;
                parent.spawn(PbrBundle {
                    mesh: wing.clone(),
                    material: wing_material.clone(),
                    transform: Transform::from_rotation(Quat::from_rotation_y(angle as f32))
                        // push the wing out from the hub along its local z
                        .mul_transform(Transform::from_xyz(0.0, 0.1, 0.45)),
                    ..Default::default()
                });
            }
        });

    // Frame ring drawn as a flattened cylinder shell
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cylinder::new(scenario.params.half_width as f32, 0.1).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 1.0, 1.0, 0.15),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..Default::default()
        }),
        transform: Transform::from_xyz(fan_x, 0.5, 0.0),
        ..Default::default()
    });
}

/// Per-frame update: spin the wings, arm boxes inside the wind zone,
/// then run the Verlet lift step on every box.
fn fan_step_system(mut scenario: ResMut<FanScenario>) {
    scenario.wing_angle += WING_SPIN_STEP;

    let FanScenario {
        params,
        fan_x,
        boxes,
        ..
    } = &mut *scenario;

    for b in boxes.iter_mut() {
        let inside = wind_zone_contains(*fan_x, params.half_width, b.position.x);
        if inside != b.auto_force {
            b.set_auto_force(inside);
        }
        lift_step(b, params);
    }
}

fn sync_fan(
    scenario: Res<FanScenario>,
    mut boxes: Query<(&BoxIndex, &mut Transform), Without<WingRig>>,
    mut rig: Query<&mut Transform, With<WingRig>>,
) {
    for (BoxIndex(i), mut transform) in &mut boxes {
        if let Some(b) = scenario.boxes.get(*i) {
            transform.translation = Vec3::new(
                b.position.x as f32,
                b.position.y as f32,
                b.position.z as f32,
            );
        }
    }

    for mut transform in &mut rig {
        transform.rotation = Quat::from_rotation_y(scenario.wing_angle as f32);
    }
}
