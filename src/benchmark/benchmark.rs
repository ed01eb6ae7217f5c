use std::time::Instant;

use crate::simulation::curve::QuadraticBezier3;
use crate::simulation::params::{OrbitParams, VortexParams};
use crate::simulation::scenario::spawn_particles;
use crate::simulation::states::{NVec3, OrbitBody, VortexSystem};
use crate::simulation::updater::{orbit_step, vortex_system_step};

fn bench_params(n: usize) -> VortexParams {
    VortexParams {
        particle_num: n,
        dt_scale: 0.01,
        base_radius_min: 0.01,
        base_radius_range: 0.1,
        speed_max: 0.2,
        scale_min: 0.01,
        scale_range: 0.0025,
        path_start: NVec3::zeros(),
        path_control: NVec3::new(-0.5, 0.2, 0.0),
        path_end: NVec3::new(0.0, 1.0, 0.0),
        seed: 42,
    }
}

pub fn bench_vortex() {
    // Different particle counts to test
    let ns = [500, 2_000, 8_000, 32_000, 128_000];
    let steps = 1_000;

    for n in ns {
        let params = bench_params(n);
        let mut sys = VortexSystem {
            particles: spawn_particles(&params),
            path: QuadraticBezier3::new(params.path_start, params.path_control, params.path_end),
        };

        let t0 = Instant::now();
        for _ in 0..steps {
            vortex_system_step(&mut sys, 0.005);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "bench_vortex: n = {:>7}, {} steps in {:.3} s ({:.1} ns/particle-step)",
            n,
            steps,
            elapsed,
            elapsed * 1e9 / (steps as f64 * n as f64),
        );
    }
}

pub fn bench_orbit() {
    let steps = 10_000_000;

    let params = OrbitParams {
        mu: 0.2,
        h0: 1.0,
        spin_factor: 0.1,
    };
    let mut body = OrbitBody {
        position: NVec3::new(0.0, 0.0, 10.0),
        velocity: NVec3::new(0.1, 0.0, 0.0),
        spin: 0.0,
    };

    let t0 = Instant::now();
    for _ in 0..steps {
        orbit_step(&mut body, &params, params.h0);
    }
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "bench_orbit: {} steps in {:.3} s ({:.1} ns/step), final r = {:.3}",
        steps,
        elapsed,
        elapsed * 1e9 / steps as f64,
        body.separation(),
    );
}
