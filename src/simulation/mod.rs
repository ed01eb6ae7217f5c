pub mod states;
pub mod params;
pub mod curve;
pub mod updater;
pub mod scenario;
