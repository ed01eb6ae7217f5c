pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{LiftBox, NVec3, OrbitBody, VortexParticle, VortexSystem};
pub use simulation::curve::QuadraticBezier3;
pub use simulation::params::{LiftParams, OrbitParams, VortexParams};
pub use simulation::updater::{lift_step, orbit_step, vortex_step, vortex_system_step, wind_zone_contains};
pub use simulation::scenario::{FanScenario, OrbitScenario, VortexScenario};

pub use configuration::config::{
    AmbientLightConfig, CameraConfig, DemoConfig, DemoKindConfig, DirectionalLightConfig,
    FanConfig, OrbitConfig, SceneConfig, VortexConfig,
};
pub use configuration::env::is_dev;

pub use visualization::{fan_vis::run_fan, orbit_vis::run_orbit, vortex_vis::run_vortex};

pub use benchmark::benchmark::{bench_orbit, bench_vortex};
