//! Configuration types for loading demo scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! demo scenario. A scenario consists of:
//!
//! - [`SceneConfig`]  – camera and light parameters for scene construction
//! - [`DemoKindConfig`] – which demo the file describes and its parameters
//! - [`DemoConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Camera and light parameters are explicit immutable configuration passed
//! into scene construction; nothing here is global state. Every field has
//! a default matching the stock demo look, so a scenario file only needs
//! to name what it changes.
//!
//! # YAML format
//! An example vortex scenario matching these types:
//!
//! ```yaml
//! scene:
//!   camera:
//!     fovy: 45.0
//!     near: 0.3
//!     far: 10000.0
//!     position: [0.0, 1.0, 3.0]
//!     look_at: [0.0, 0.0, 0.0]
//!   directional_light:
//!     color: [1.0, 1.0, 1.0]
//!     direction: [0.5, 1.0, 0.0]
//!   ambient_light:
//!     color: [1.0, 1.0, 1.0]
//!     intensity: 0.5
//!
//! demo:
//!   vortex:
//!     particle_num: 500
//!     seed: 42
//! ```

use serde::Deserialize;

/// Perspective camera parameters.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub fovy: f64,            // vertical field of view, degrees
    pub near: f64,            // near clip plane
    pub far: f64,             // far clip plane
    pub position: [f64; 3],   // camera position
    pub look_at: [f64; 3],    // point the camera faces
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            near: 0.3,
            far: 10000.0,
            position: [0.0, 1.0, 3.0],
            look_at: [0.0, 0.0, 0.0],
        }
    }
}

/// Directional light parameters.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DirectionalLightConfig {
    pub color: [f64; 3],      // linear RGB
    pub direction: [f64; 3],  // points from this offset toward the origin
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            direction: [0.0, 1.0, 0.0],
        }
    }
}

/// Ambient light parameters.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AmbientLightConfig {
    pub color: [f64; 3], // linear RGB
    pub intensity: f64,  // 0 disables the ambient term
}

impl Default for AmbientLightConfig {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: 0.5,
        }
    }
}

/// Everything scene construction needs besides the demo objects.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub directional_light: DirectionalLightConfig,
    pub ambient_light: AmbientLightConfig,
}

/// Parameters for the tornado particle effect.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct VortexConfig {
    pub particle_num: usize,     // number of particles
    pub dt_scale: f64,           // per-frame dt is dt_scale * uniform(0, 1)
    pub base_radius_min: f64,    // spawn radius floor
    pub base_radius_range: f64,  // spawn radius spread
    pub speed_max: f64,          // angular speed drawn from [0, speed_max)
    pub scale_min: f64,          // mesh scale floor
    pub scale_range: f64,        // mesh scale spread
    pub path_start: [f64; 3],    // climb path start
    pub path_control: [f64; 3],  // climb path control point
    pub path_end: [f64; 3],      // climb path end
    pub seed: u64,               // deterministic spawn seed
}

impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            particle_num: 500,
            dt_scale: 0.01,
            base_radius_min: 0.01,
            base_radius_range: 0.1,
            speed_max: 0.2,
            scale_min: 0.01,
            scale_range: 0.0025,
            path_start: [0.0, 0.0, 0.0],
            path_control: [-0.5, 0.2, 0.0],
            path_end: [0.0, 1.0, 0.0],
            seed: 42,
        }
    }
}

/// Parameters for the one-body orbit demo.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OrbitConfig {
    pub mu: f64,             // central force coefficient
    pub h0: f64,             // fixed step size
    pub spin_factor: f64,    // cosmetic spin per unit of travel
    pub position: [f64; 3],  // initial offset from the central mass
    pub velocity: [f64; 3],  // initial velocity
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            mu: 0.2,
            h0: 1.0,
            spin_factor: 0.1,
            position: [0.0, 0.0, 10.0],
            velocity: [0.1, 0.0, 0.0],
        }
    }
}

/// Parameters for the fan scene.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FanConfig {
    pub lift: f64,            // constant upward force on armed boxes
    pub damping: f64,         // Verlet damping
    pub mass: f64,            // box mass
    pub half_width: f64,      // wind zone half width along x
    pub h0: f64,              // fixed step size
    pub fan_x: f64,           // fan position along x
    pub boxes: Vec<[f64; 3]>, // initial box positions
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            lift: 1.0,
            damping: 0.03,
            mass: 1.0,
            half_width: 0.8,
            h0: 0.1,
            fan_x: 0.0,
            boxes: vec![[0.5, 0.25, 1.5], [-1.8, 0.25, 1.5], [1.8, 0.25, 1.5]],
        }
    }
}

/// Which demo a scenario file describes.
/// `demo: { vortex: {...} }`, `demo: { orbit: {...} }` or `demo: { fan: {...} }`
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "lowercase")]
pub enum DemoKindConfig {
    Vortex(VortexConfig),
    Orbit(OrbitConfig),
    Fan(FanConfig),
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct DemoConfig {
    #[serde(default)]
    pub scene: SceneConfig, // camera and light parameters
    pub demo: DemoKindConfig, // demo selection and its parameters
}
