//! Core state types for the demo updaters.
//!
//! Defines the per-tick mutable state for each demo:
//! - `VortexParticle` / `VortexSystem` for the tornado effect
//! - `OrbitBody` for the one-body gravitational orbit
//! - `LiftBox` for the fan scene's floating cubes
//!
//! All positions use `NVec3`, a concrete value-typed 3-component vector.

use nalgebra::Vector3;

use crate::simulation::curve::QuadraticBezier3;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct VortexParticle {
    pub phase: f64, // angle along the circular path, wrapped to [0, 2pi)
    pub speed: f64, // angular speed (rad per second)
    pub radius: f64, // current distance from the vortex axis
    pub base_radius: f64, // radius restored on each lifetime wrap
    pub time: f64, // normalized lifetime in [0, 1)
    pub position: NVec3, // world position, recomputed every step
    pub rot_x: f64, // mesh tumble angle around x
    pub rot_y: f64, // mesh tumble angle around y
    pub scale: f64, // mesh scale, fixed at spawn
}

/// The whole tornado effect: every particle plus the shared climb path.
/// Particles live and die with the system.
#[derive(Debug, Clone)]
pub struct VortexSystem {
    pub particles: Vec<VortexParticle>, // collection of particles
    pub path: QuadraticBezier3, // curve each particle offsets along by its own time
}

#[derive(Debug, Clone)]
pub struct OrbitBody {
    pub position: NVec3, // offset from the central mass at the origin
    pub velocity: NVec3, // persisted velocity-like vector
    pub spin: f64, // cosmetic spin angle around y, not physical
}

impl OrbitBody {
    /// Separation distance from the central mass, recomputed on demand.
    /// Must stay > 0; there is no collision handling.
    pub fn separation(&self) -> f64 {
        self.position.norm()
    }
}

/// Position-Verlet state for one floating cube in the fan scene.
#[derive(Debug, Clone)]
pub struct LiftBox {
    pub position: NVec3, // current position
    pub prev_position: NVec3, // position at the previous step
    pub init_position: NVec3, // spawn position, restored on reset
    pub acc: NVec3, // accumulated acceleration, cleared every step
    pub inv_mass: f64, // 1 / mass
    pub auto_force: bool, // true while inside the fan's wind zone
}

impl LiftBox {
    pub fn new(position: NVec3, mass: f64) -> Self {
        Self {
            position,
            prev_position: position,
            init_position: position,
            acc: NVec3::zeros(),
            inv_mass: 1.0 / mass,
            auto_force: false,
        }
    }

    /// Accumulate a force into the acceleration buffer.
    pub fn add_force(&mut self, force: NVec3) {
        self.acc += force * self.inv_mass;
    }

    /// Arm or disarm the constant lift. Arming rebases the previous
    /// position so the Verlet step starts with zero implied velocity.
    pub fn set_auto_force(&mut self, flag: bool) {
        self.auto_force = flag;
        self.prev_position = self.position;
    }

    /// Put the box back where it spawned.
    pub fn reset(&mut self) {
        self.position = self.init_position;
        self.set_auto_force(false);
    }
}
