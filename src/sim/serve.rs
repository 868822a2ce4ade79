//! Serve randomness
//!
//! The ball's direction after a reset comes from a `ServeSource` so the
//! simulation can be driven deterministically in tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{SERVE_ANGLE_MAX, SERVE_ANGLE_MIN};

/// Source of serve direction choices
pub trait ServeSource {
    /// Horizontal sign of the serve, -1.0 or 1.0
    fn serve_sign(&mut self) -> f32;
    /// Rotation applied to the horizontal serve, in degrees within
    /// `[SERVE_ANGLE_MIN, SERVE_ANGLE_MAX)`
    fn serve_angle_degrees(&mut self) -> f32;
}

/// Seeded PCG serve source
#[derive(Debug, Clone)]
pub struct PcgServe {
    rng: Pcg32,
}

impl PcgServe {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl ServeSource for PcgServe {
    fn serve_sign(&mut self) -> f32 {
        if self.rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }

    fn serve_angle_degrees(&mut self) -> f32 {
        self.rng.random_range(SERVE_ANGLE_MIN..SERVE_ANGLE_MAX)
    }
}

/// Serve source that repeats fixed values
#[derive(Debug, Clone, Copy)]
pub struct FixedServe {
    pub sign: f32,
    pub angle_degrees: f32,
}

impl FixedServe {
    pub fn new(sign: f32, angle_degrees: f32) -> Self {
        Self {
            sign,
            angle_degrees,
        }
    }

    /// Straight to the right
    pub fn right() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Straight to the left
    pub fn left() -> Self {
        Self::new(-1.0, 0.0)
    }
}

impl ServeSource for FixedServe {
    fn serve_sign(&mut self) -> f32 {
        self.sign
    }

    fn serve_angle_degrees(&mut self) -> f32 {
        self.angle_degrees
    }
}
