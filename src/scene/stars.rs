//! Background star field: points scattered uniformly through a ball.

use std::f32::consts::{PI, TAU};

use rand::Rng;
use serde::Serialize;

use super::{CameraRig, Vec3};

pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS: f32 = 1.2;
pub const STAR_COLOR: &str = "#f272c8";
pub const STAR_SIZE: f32 = 0.002;
/// Radians per second about x and y.
pub const STAR_SPIN: [f32; 2] = [-1.0 / 10.0, -1.0 / 15.0];
pub const STAR_TILT_Z: f32 = PI / 4.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarField {
    /// Flat xyz triples.
    pub positions: Vec<f32>,
    pub color: &'static str,
    pub size: f32,
    pub spin: [f32; 2],
    pub tilt_z: f32,
    pub camera: CameraRig,
}

impl StarField {
    /// Scatter `count` points uniformly in a ball of `radius`.
    ///
    /// Cube-root radial sampling keeps the density even instead of clumping
    /// points at the centre.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32) -> Self {
        let radius = radius.abs();
        let mut positions = Vec::with_capacity(count * 3);
        for _ in 0..count {
            let r = radius * rng.random::<f32>().cbrt();
            let theta = TAU * rng.random::<f32>();
            let phi = (2.0 * rng.random::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            Vec3::new(r * phi.sin() * theta.cos(), r * phi.sin() * theta.sin(), r * phi.cos())
                .push_onto(&mut positions);
        }

        Self {
            positions,
            color: STAR_COLOR,
            size: STAR_SIZE,
            spin: STAR_SPIN,
            tilt_z: STAR_TILT_Z,
            camera: CameraRig { position: Vec3::new(0.0, 0.0, 1.0), fov_deg: 75.0 },
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }
}

#[cfg(test)]
#[path = "stars_test.rs"]
mod tests;
