//! Rigid-body pose primitives
//!
//! Poses pass through the relay exactly as the simulation reports them:
//! no unit conversion, no quaternion normalization.

/// 3D position in simulation world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3 {
    pub const ZERO: Position3 = Position3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Orientation quaternion (w, xi, yj, zk), as reported by the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub xi: f64,
    pub yj: f64,
    pub zk: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            xi: 0.0,
            yj: 0.0,
            zk: 0.0,
        }
    }

    pub fn new(w: f64, xi: f64, yj: f64, zk: f64) -> Self {
        Self { w, xi, yj, zk }
    }
}

/// A rigid-body pose: position plus orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Position3,
    pub orientation: Quaternion,
}

impl Pose {
    pub fn new(position: Position3, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// A pose with every component zero, orientation included.
    ///
    /// A legitimate simulation value (an unnormalized all-zero quaternion
    /// passes through like any other), so nothing in the pipeline may treat
    /// it as a sentinel.
    pub fn zero() -> Self {
        Self {
            position: Position3::ZERO,
            orientation: Quaternion::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}
