//! Hero globe: textured earth, atmosphere, connection arcs, home marker and
//! an orbit ring.

use std::f32::consts::{PI, TAU};

use serde::Serialize;

use super::geo::{self, LatLng};
use super::{CameraRig, Vec3};

// ── Layout ──────────────────────────────────────────────────────

pub const EARTH_RADIUS: f32 = 2.0;
pub const ATMOSPHERE_RADIUS: f32 = 2.02;
pub const SPHERE_SEGMENTS: u32 = 64;
pub const MARKER_ALTITUDE: f32 = 2.04;
pub const MARKER_CORE_RADIUS: f32 = 0.04;
pub const MARKER_HALO_RADIUS: f32 = 0.07;
pub const RING_INNER: f32 = 2.6;
pub const RING_OUTER: f32 = 2.62;
pub const RING_SEGMENTS: u32 = 128;

// ── Motion ──────────────────────────────────────────────────────

/// Fraction of the remaining distance to the pointer target covered per frame.
pub const ROTATION_EASE: f32 = 0.04;
/// Constant spin added to the Y rotation each frame, radians.
pub const AUTO_SPIN: f32 = 0.0012;
pub const RING_SPIN: f32 = 0.0015;
pub const POINTER_YAW: f32 = 0.6;
pub const POINTER_PITCH: f32 = 0.3;
pub const GLOW_BASE_SCALE: f32 = 2.12;
pub const GLOW_PULSE_AMPLITUDE: f32 = 0.02;
pub const GLOW_PULSE_RATE: f32 = 1.2;

// =============================================================================
// MESHES
// =============================================================================

/// Indexed triangle mesh with per-vertex normals and UVs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u32>,
}

impl Mesh {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// UV sphere. U runs with longitude, V from the north pole down.
pub struct SphereMesh;

impl SphereMesh {
    /// Build a sphere; segment counts are clamped to at least 3 × 2.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
        let width_segments = width_segments.max(3);
        let height_segments = height_segments.max(2);
        let row = width_segments + 1;
        let vertex_total = (row * (height_segments + 1)) as usize;

        let mut positions = Vec::with_capacity(vertex_total * 3);
        let mut normals = Vec::with_capacity(vertex_total * 3);
        let mut uvs = Vec::with_capacity(vertex_total * 2);

        for iy in 0..=height_segments {
            let v = iy as f32 / height_segments as f32;
            for ix in 0..=width_segments {
                let u = ix as f32 / width_segments as f32;
                let vertex = Vec3::new(
                    -radius * (u * TAU).cos() * (v * PI).sin(),
                    radius * (v * PI).cos(),
                    radius * (u * TAU).sin() * (v * PI).sin(),
                );
                vertex.push_onto(&mut positions);
                vertex.normalized().push_onto(&mut normals);
                uvs.extend_from_slice(&[u, 1.0 - v]);
            }
        }

        let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);
        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                // Pole rows collapse to a point: skip their degenerate half.
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != height_segments - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Mesh { positions, normals, uvs, indices }
    }
}

/// Flat annulus in the XY plane, facing +Z.
pub struct RingMesh;

impl RingMesh {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build(inner: f32, outer: f32, theta_segments: u32) -> Mesh {
        let theta_segments = theta_segments.max(3);
        let (inner, outer) = if inner <= outer { (inner, outer) } else { (outer, inner) };
        let row = theta_segments + 1;

        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut uvs = Vec::new();
        for radius in [inner, outer] {
            for i in 0..=theta_segments {
                let angle = i as f32 / theta_segments as f32 * TAU;
                let vertex = Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0);
                vertex.push_onto(&mut positions);
                Vec3::new(0.0, 0.0, 1.0).push_onto(&mut normals);
                let span = outer * 2.0;
                let (u, v) = if span > 0.0 { (vertex.x / span + 0.5, vertex.y / span + 0.5) } else { (0.5, 0.5) };
                uvs.extend_from_slice(&[u, v]);
            }
        }

        let mut indices = Vec::with_capacity((theta_segments * 6) as usize);
        for i in 0..theta_segments {
            let a = i;
            let b = i + row;
            let c = i + row + 1;
            let d = i + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }

        Mesh { positions, normals, uvs, indices }
    }
}

// =============================================================================
// SCENE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Light {
    Ambient { intensity: f32 },
    Directional { position: Vec3, intensity: f32, color: &'static str },
    Point { position: Vec3, intensity: f32, color: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub position: Vec3,
    pub core_radius: f32,
    pub halo_radius: f32,
    pub color: &'static str,
    pub halo_opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ring {
    pub mesh: Mesh,
    /// Euler XYZ rotation applied before the ring spins about Z.
    pub tilt: Vec3,
    pub color: &'static str,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Atmosphere {
    pub rim_radius: f32,
    pub rim_color: &'static str,
    pub rim_opacity: f32,
    pub glow_color: &'static str,
    pub glow_opacity: f32,
    pub glow_base_scale: f32,
    pub glow_pulse_amplitude: f32,
    pub glow_pulse_rate: f32,
}

/// Constants the browser needs to replay [`GlobeMotion::step`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionParams {
    pub ease: f32,
    pub auto_spin: f32,
    pub ring_spin: f32,
    pub pointer_yaw: f32,
    pub pointer_pitch: f32,
}

pub const MOTION: MotionParams = MotionParams {
    ease: ROTATION_EASE,
    auto_spin: AUTO_SPIN,
    ring_spin: RING_SPIN,
    pointer_yaw: POINTER_YAW,
    pointer_pitch: POINTER_PITCH,
};

/// Everything the hero canvas draws. Spheres share one unit mesh, scaled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobeScene {
    pub camera: CameraRig,
    pub lights: Vec<Light>,
    pub unit_sphere: Mesh,
    pub earth_radius: f32,
    /// Flat color used until the texture has loaded.
    pub earth_fallback_color: &'static str,
    pub atmosphere: Atmosphere,
    /// Each arc is a polyline, flat xyz.
    pub arcs: Vec<Vec<f32>>,
    pub arc_color: &'static str,
    pub arc_opacity: f32,
    pub marker: Marker,
    pub ring: Ring,
    pub motion: MotionParams,
}

impl GlobeScene {
    #[must_use]
    pub fn build() -> Self {
        let arcs = geo::ARC_DESTINATIONS
            .iter()
            .map(|to| {
                let mut flat = Vec::new();
                for p in geo::arc_points(geo::BENGALURU, *to) {
                    p.push_onto(&mut flat);
                }
                flat
            })
            .collect();

        Self {
            camera: CameraRig { position: Vec3::new(0.0, 0.0, 5.5), fov_deg: 45.0 },
            lights: vec![
                Light::Ambient { intensity: 0.6 },
                Light::Directional { position: Vec3::new(5.0, 3.0, 5.0), intensity: 1.2, color: "#ffffff" },
                Light::Point { position: Vec3::new(-4.0, 2.0, 4.0), intensity: 0.4, color: "#64B5F6" },
                Light::Point { position: Vec3::new(3.0, -2.0, -3.0), intensity: 0.3, color: "#81C784" },
            ],
            unit_sphere: SphereMesh::build(1.0, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            earth_radius: EARTH_RADIUS,
            earth_fallback_color: "#1565C0",
            atmosphere: Atmosphere {
                rim_radius: ATMOSPHERE_RADIUS,
                rim_color: "#42A5F5",
                rim_opacity: 0.06,
                glow_color: "#1E88E5",
                glow_opacity: 0.05,
                glow_base_scale: GLOW_BASE_SCALE,
                glow_pulse_amplitude: GLOW_PULSE_AMPLITUDE,
                glow_pulse_rate: GLOW_PULSE_RATE,
            },
            arcs,
            arc_color: "#fbbf24",
            arc_opacity: 0.5,
            marker: Marker {
                position: home_marker_position(geo::BENGALURU),
                core_radius: MARKER_CORE_RADIUS,
                halo_radius: MARKER_HALO_RADIUS,
                color: "#ef4444",
                halo_opacity: 0.3,
            },
            ring: Ring {
                mesh: RingMesh::build(RING_INNER, RING_OUTER, RING_SEGMENTS),
                tilt: Vec3::new(PI / 2.2, 0.0, 0.15),
                color: "#90CAF9",
                opacity: 0.1,
            },
            motion: MOTION,
        }
    }
}

#[must_use]
pub fn home_marker_position(home: LatLng) -> Vec3 {
    geo::lat_lng_to_vec3(home, MARKER_ALTITUDE)
}

/// Scale of the pulsing glow sphere at `elapsed_secs`.
#[must_use]
pub fn glow_scale(elapsed_secs: f32) -> f32 {
    GLOW_BASE_SCALE + (elapsed_secs * GLOW_PULSE_RATE).sin() * GLOW_PULSE_AMPLITUDE
}

// =============================================================================
// POINTER + MOTION
// =============================================================================

/// Screen rectangle of the element hosting a scene, CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Pointer position normalized to `[-1, 1]` on both axes, centre at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    /// Map a client-space pointer position into the container.
    ///
    /// Degenerate (zero, negative or non-finite) sizes map to the centre on
    /// that axis. Positions outside the container are clamped.
    #[must_use]
    pub fn from_client(client_x: f32, client_y: f32, rect: ContainerRect) -> Self {
        Self {
            x: normalize_axis(client_x - rect.left, rect.width),
            y: normalize_axis(client_y - rect.top, rect.height),
        }
    }
}

fn normalize_axis(offset: f32, extent: f32) -> f32 {
    if !(extent.is_finite() && extent > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    ((offset / extent - 0.5) * 2.0).clamp(-1.0, 1.0)
}

/// Per-frame rotation state of the globe and its ring.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlobeMotion {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub ring_z: f32,
}

impl GlobeMotion {
    /// Advance one frame toward the pointer-driven target.
    pub fn step(&mut self, pointer: Pointer) {
        let target_y = pointer.x * MOTION.pointer_yaw;
        let target_x = pointer.y * MOTION.pointer_pitch;
        self.rotation_y += (target_y - self.rotation_y) * MOTION.ease;
        self.rotation_x += (target_x - self.rotation_x) * MOTION.ease;
        self.rotation_y += MOTION.auto_spin;
        self.ring_z += MOTION.ring_spin;
    }
}

#[cfg(test)]
#[path = "globe_test.rs"]
mod tests;
