//! Numerical parameters for each demo.
//!
//! Runtime counterparts of the YAML-facing configuration structs:
//! - `VortexParams` — particle counts, spawn ranges, climb path, seed
//! - `OrbitParams`  — force coefficient, step size, cosmetic spin factor
//! - `LiftParams`   — lift force, damping, wind zone geometry

use crate::simulation::states::NVec3;

#[derive(Debug, Clone)]
pub struct VortexParams {
    pub particle_num: usize, // number of particles in the effect
    pub dt_scale: f64, // per-frame dt is dt_scale * uniform(0, 1)
    pub base_radius_min: f64, // spawn radius floor, keeps particles off the axis
    pub base_radius_range: f64, // spawn radius spread above the floor
    pub speed_max: f64, // spawn speed drawn from [0, speed_max)
    pub scale_min: f64, // mesh scale floor
    pub scale_range: f64, // mesh scale spread
    pub path_start: NVec3, // climb path start
    pub path_control: NVec3, // climb path control point
    pub path_end: NVec3, // climb path end
    pub seed: u64, // deterministic spawn seed
}

#[derive(Debug, Clone)]
pub struct OrbitParams {
    pub mu: f64, // central force coefficient, acceleration is 0.5 * mu / r^2
    pub h0: f64, // fixed step size
    pub spin_factor: f64, // cosmetic spin per unit of travel
}

#[derive(Debug, Clone)]
pub struct LiftParams {
    pub lift: f64, // constant upward force on armed boxes
    pub damping: f64, // Verlet damping, drag is 1 - damping
    pub mass: f64, // box mass
    pub half_width: f64, // wind zone half width along x
    pub h0: f64, // fixed step size
}
