pub mod common;
pub mod vortex_vis;
pub mod orbit_vis;
pub mod fan_vis;
