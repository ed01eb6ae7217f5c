//! Build fully-initialized demo scenarios from configuration
//!
//! Takes a `DemoConfig` (YAML-facing) and produces runtime bundles, one
//! per demo kind:
//! - `VortexScenario` — seeded particle system plus its climb path
//! - `OrbitScenario`  — orbiting body at its initial state
//! - `FanScenario`    — lift boxes and the fan's wind zone
//!
//! These are inserted into Bevy as `Resource`s and consumed by the
//! per-frame update and transform-sync systems.

use std::f64::consts::TAU;

use bevy::prelude::Resource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::{FanConfig, OrbitConfig, SceneConfig, VortexConfig};
use crate::simulation::curve::QuadraticBezier3;
use crate::simulation::params::{LiftParams, OrbitParams, VortexParams};
use crate::simulation::states::{LiftBox, NVec3, OrbitBody, VortexParticle, VortexSystem};

/// Bevy resource holding the runtime tornado effect.
#[derive(Resource)]
pub struct VortexScenario {
    pub scene: SceneConfig,
    pub params: VortexParams,
    pub system: VortexSystem,
}

impl VortexScenario {
    pub fn build(scene: SceneConfig, cfg: VortexConfig) -> Self {
        let params = VortexParams {
            particle_num: cfg.particle_num,
            dt_scale: cfg.dt_scale,
            base_radius_min: cfg.base_radius_min,
            base_radius_range: cfg.base_radius_range,
            speed_max: cfg.speed_max,
            scale_min: cfg.scale_min,
            scale_range: cfg.scale_range,
            path_start: to_vec3(&cfg.path_start),
            path_control: to_vec3(&cfg.path_control),
            path_end: to_vec3(&cfg.path_end),
            seed: cfg.seed,
        };

        let path = QuadraticBezier3::new(params.path_start, params.path_control, params.path_end);
        let system = VortexSystem {
            particles: spawn_particles(&params),
            path,
        };

        Self { scene, params, system }
    }
}

/// Seeded particle spawn. Same seed, same effect.
pub fn spawn_particles(params: &VortexParams) -> Vec<VortexParticle> {
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);

    (0..params.particle_num)
        .map(|_| {
            // Keep spawn radii off the vortex axis.
            let base_radius = rng.random_range(0.0..1.0) * params.base_radius_range
                + params.base_radius_min;
            VortexParticle {
                phase: rng.random_range(0.0..TAU),
                speed: rng.random_range(0.0..params.speed_max),
                radius: base_radius,
                base_radius,
                // staggered start points along the lifetime
                time: rng.random_range(0.0..1.0),
                position: NVec3::zeros(),
                rot_x: 0.0,
                rot_y: 0.0,
                scale: rng.random_range(0.0..1.0) * params.scale_range + params.scale_min,
            }
        })
        .collect()
}

/// Bevy resource holding the runtime orbit demo.
#[derive(Resource)]
pub struct OrbitScenario {
    pub scene: SceneConfig,
    pub params: OrbitParams,
    pub body: OrbitBody,
}

impl OrbitScenario {
    pub fn build(scene: SceneConfig, cfg: OrbitConfig) -> Self {
        let params = OrbitParams {
            mu: cfg.mu,
            h0: cfg.h0,
            spin_factor: cfg.spin_factor,
        };

        let body = OrbitBody {
            position: to_vec3(&cfg.position),
            velocity: to_vec3(&cfg.velocity),
            spin: 0.0,
        };

        Self { scene, params, body }
    }
}

/// Bevy resource holding the runtime fan demo.
#[derive(Resource)]
pub struct FanScenario {
    pub scene: SceneConfig,
    pub params: LiftParams,
    pub fan_x: f64, // fan position along x, the wind zone is centered here
    pub boxes: Vec<LiftBox>,
    pub wing_angle: f64, // shared rotation of the wing group
}

impl FanScenario {
    pub fn build(scene: SceneConfig, cfg: FanConfig) -> Self {
        let params = LiftParams {
            lift: cfg.lift,
            damping: cfg.damping,
            mass: cfg.mass,
            half_width: cfg.half_width,
            h0: cfg.h0,
        };

        let boxes = cfg
            .boxes
            .iter()
            .map(|pos| LiftBox::new(to_vec3(pos), params.mass))
            .collect();

        Self {
            scene,
            params,
            fan_x: cfg.fan_x,
            boxes,
            wing_angle: 0.0,
        }
    }
}

fn to_vec3(v: &[f64; 3]) -> NVec3 {
    NVec3::new(v[0], v[1], v[2])
}
