//! Quadratic Bezier path used as the vortex climb curve.

use crate::simulation::states::NVec3;

/// Three-point quadratic Bezier curve in 3D.
#[derive(Debug, Clone)]
pub struct QuadraticBezier3 {
    pub p0: NVec3, // start
    pub p1: NVec3, // control
    pub p2: NVec3, // end
}

impl QuadraticBezier3 {
    pub fn new(p0: NVec3, p1: NVec3, p2: NVec3) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluate the curve at `t` in [0, 1]:
    /// (1-t)^2 p0 + 2(1-t)t p1 + t^2 p2
    pub fn point_at(&self, t: f64) -> NVec3 {
        let u = 1.0 - t;
        self.p0 * (u * u) + self.p1 * (2.0 * u * t) + self.p2 * (t * t)
    }
}
