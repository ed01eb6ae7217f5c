//! Bevy viewer for the tornado particle effect.

use bevy::prelude::*;
use bevy::math::primitives::Cuboid;

use crate::simulation::scenario::VortexScenario;
use crate::simulation::updater::vortex_system_step_jittered;
use crate::visualization::common::{spawn_camera, spawn_debug_axes, spawn_lights};

/// Component tagging each cube with its particle index into
/// VortexScenario.system.particles
#[derive(Component)]
struct ParticleIndex(pub usize);

pub fn run_vortex(scenario: VortexScenario) {
    println!(
        "run_vortex: starting Bevy viewer with {} particles",
        scenario.system.particles.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_vortex)
        .add_systems(Update, (vortex_step_system, sync_particles))
        .run();
}

/// Startup system: camera, lights, and one small cube per particle
fn setup_vortex(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<VortexScenario>,
) {
    spawn_camera(&mut commands, &scenario.scene.camera);
    spawn_lights(
        &mut commands,
        &scenario.scene.directional_light,
        &scenario.scene.ambient_light,
    );
    spawn_debug_axes(&mut commands, &mut meshes, &mut materials);

    // All particles share one unit cube mesh; per-particle size comes from
    // the transform scale.
    let cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0).mesh());
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.85, 0.9),
        ..Default::default()
    });

    for (i, p) in scenario.system.particles.iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: cube.clone(),
                material: material.clone(),
                transform: Transform::from_xyz(
                    p.position.x as f32,
                    p.position.y as f32,
                    p.position.z as f32,
                )
                .with_scale(Vec3::splat(p.scale as f32)),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

/// Per-frame update: every particle advances by its own jittered dt
fn vortex_step_system(mut scenario: ResMut<VortexScenario>) {
    let mut rng = rand::rng();
    let VortexScenario { system, params, .. } = &mut *scenario;
    vortex_system_step_jittered(system, params.dt_scale, &mut rng);
}

fn sync_particles(
    scenario: Res<VortexScenario>,
    mut query: Query<(&ParticleIndex, &mut Transform)>,
) {
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.system.particles.get(*i) {
            transform.translation = Vec3::new(
                p.position.x as f32,
                p.position.y as f32,
                p.position.z as f32,
            );
            transform.rotation =
                Quat::from_euler(EulerRot::XYZ, p.rot_x as f32, p.rot_y as f32, 0.0);
        }
    }
}
