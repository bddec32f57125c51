//! Geographic helpers for placing things on the globe.

use std::f32::consts::PI;

use serde::Serialize;

use super::Vec3;

/// Latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f32,
    pub lng: f32,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f32, lng: f32) -> Self {
        Self { lat, lng }
    }

    /// Component-wise linear interpolation (not a great circle).
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(self.lat + (other.lat - self.lat) * t, self.lng + (other.lng - self.lng) * t)
    }
}

pub const BENGALURU: LatLng = LatLng::new(13.0, 77.0);

pub const ARC_DESTINATIONS: [LatLng; 4] = [
    LatLng::new(40.0, -74.0),  // New York
    LatLng::new(51.0, -0.1),   // London
    LatLng::new(35.0, 139.0),  // Tokyo
    LatLng::new(37.0, -122.0), // San Francisco
];

/// Parameter step between consecutive arc samples.
pub const ARC_STEP: f32 = 0.015;
pub const ARC_BASE_ALTITUDE: f32 = 2.02;
pub const ARC_LIFT: f32 = 0.4;

/// Map a geographic position onto a sphere of `radius`, matching the UV
/// layout of [`super::globe::SphereMesh`] so markers line up with the texture.
#[must_use]
pub fn lat_lng_to_vec3(at: LatLng, radius: f32) -> Vec3 {
    let phi = (90.0 - at.lat) * PI / 180.0;
    let theta = (at.lng + 180.0) * PI / 180.0;
    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Sample an arc that rises off the surface between `from` and `to`.
///
/// Samples are taken at `t = 0, ARC_STEP, 2·ARC_STEP, ...` while `t <= 1`.
#[must_use]
pub fn arc_points(from: LatLng, to: LatLng) -> Vec<Vec3> {
    arc_sample_params()
        .map(|t| lat_lng_to_vec3(from.lerp(to, t), ARC_BASE_ALTITUDE + (t * PI).sin() * ARC_LIFT))
        .collect()
}

fn arc_sample_params() -> impl Iterator<Item = f32> {
    // Integer stepping avoids float drift adding or dropping the last sample.
    (0u16..)
        .map(|i| f32::from(i) * ARC_STEP)
        .take_while(|t| *t <= 1.0 + f32::EPSILON)
}

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;
