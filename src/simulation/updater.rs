//! Fixed-step per-tick updaters for the demo scenes
//!
//! Provides the vortex particle stepper, the one-body gravitational
//! stepper (semi-implicit Euler), and the fan scene's position-Verlet
//! lift stepper. All of them mutate state in place and are driven once
//! per frame by the visualization systems.

use std::f64::consts::TAU;

use rand::Rng;

use crate::simulation::params::{LiftParams, OrbitParams};
use crate::simulation::states::{LiftBox, NVec3, OrbitBody, VortexParticle, VortexSystem};

/// Per-step tumble increment for the particle meshes.
const SPIN_STEP: f64 = 0.05;

/// Advance one vortex particle by `dt` seconds.
///
/// `base_position` is the particle's offset along the climb path, sampled
/// by the caller at the particle's own normalized time. The position is a
/// pure function of the current phase/radius, so a zero-dt call recomputes
/// it without changing any other state.
pub fn vortex_step(p: &mut VortexParticle, dt: f64, base_position: &NVec3) {
    // Mesh tumble. The y wrap takes its value from the x angle, which is
    // what gives the particles their characteristic synchronized roll.
    if dt > 0.0 {
        p.rot_x += SPIN_STEP;
        p.rot_x = if p.rot_x >= TAU { p.rot_x - TAU } else { p.rot_x };

        p.rot_y += SPIN_STEP;
        p.rot_y = if p.rot_y >= TAU { p.rot_x - TAU } else { p.rot_x };
    }

    // Circular travel: advance the phase and widen the circle.
    p.phase += p.speed * dt;
    p.phase = p.phase.rem_euclid(TAU);

    p.radius += dt;

    // Place on the circle, then add the path offset.
    p.position = NVec3::new(
        p.radius * p.phase.cos(),
        0.0,
        p.radius * p.phase.sin(),
    ) + base_position;

    // Lifetime wrap: carry the remainder, pull the radius back in.
    p.time += dt;
    if p.time >= 1.0 {
        p.time -= 1.0;
        p.radius = p.base_radius;
    }
}

/// Advance the whole vortex system by one frame.
///
/// Each particle gets its own base offset from the shared path at its own
/// normalized time, then steps by `dt`.
pub fn vortex_system_step(sys: &mut VortexSystem, dt: f64) {
    let path = sys.path.clone();
    for p in sys.particles.iter_mut() {
        let base = path.point_at(p.time);
        vortex_step(p, dt, &base);
    }
}

/// Frame variant used by the viewer: every particle draws its own dt from
/// `[0, dt_scale)`, which staggers the swarm instead of moving it in
/// lockstep.
pub fn vortex_system_step_jittered<R: Rng>(sys: &mut VortexSystem, dt_scale: f64, rng: &mut R) {
    let path = sys.path.clone();
    for p in sys.particles.iter_mut() {
        let base = path.point_at(p.time);
        vortex_step(p, dt_scale * rng.random_range(0.0..1.0), &base);
    }
}

/// Advance the orbiting body by one step of size `dt` using semi-implicit
/// Euler: velocity from the central inverse-square pull first, then
/// position from the updated velocity.
///
/// The separation is recomputed from the current position every call. It
/// must stay > 0; a near-zero separation degenerates (caller contract,
/// no runtime check).
pub fn orbit_step(body: &mut OrbitBody, params: &OrbitParams, dt: f64) {
    let r = body.separation();

    // Central pull magnitude at this separation.
    let a = 0.5 * params.mu / (r * r);

    // Kick: v -= a * (x / r) * dt, component-wise toward the origin.
    body.velocity -= (body.position / r) * (a * dt);

    // Drift: x += v * dt with the updated velocity.
    let travel = body.velocity * dt;
    body.position += travel;

    // Cosmetic spin proportional to the distance travelled.
    body.spin += travel.norm() * params.spin_factor;
}

/// Advance one lift box by a position-Verlet step of size `params.h0`.
///
/// Armed boxes accumulate the constant lift force and integrate with
/// drag; disarmed boxes do not move at all.
pub fn lift_step(b: &mut LiftBox, params: &LiftParams) {
    if !b.auto_force {
        return;
    }
    b.add_force(NVec3::new(0.0, params.lift, 0.0));

    let drag = 1.0 - params.damping;
    let h2 = params.h0 * params.h0;

    // x_new = (x - x_prev) * drag + x + a * h^2
    let new_position = (b.position - b.prev_position) * drag + b.position + b.acc * h2;

    b.prev_position = b.position;
    b.position = new_position;
    b.acc = NVec3::zeros();
}

/// Whether a box at `box_x` sits inside the fan's wind zone.
pub fn wind_zone_contains(fan_x: f64, half_width: f64, box_x: f64) -> bool {
    (box_x - fan_x).abs() < half_width
}
