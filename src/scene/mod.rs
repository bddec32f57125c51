//! Decorative 3D scenes.
//!
//! DESIGN
//! ======
//! All geometry is generated once at startup from a seed and served read-only
//! to the browser, which only uploads buffers and animates transforms. Point
//! and vertex data is kept as flat `f32` arrays (stride 3, or 2 for UVs) so it
//! maps directly onto GPU buffers.

pub mod geo;
pub mod globe;
pub mod landmasses;
pub mod network;
pub mod stars;
pub mod texture;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

pub use globe::GlobeScene;
pub use network::NetworkScene;
pub use stars::StarField;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("texture encoding failed: {0}")]
    TextureEncode(#[from] image::ImageError),
}

// =============================================================================
// PRIMITIVES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z).length()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= f32::EPSILON {
            return Self::ZERO;
        }
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    fn push_onto(self, out: &mut Vec<f32>) {
        out.extend_from_slice(&[self.x, self.y, self.z]);
    }
}

/// Perspective camera placement shared by every scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraRig {
    pub position: Vec3,
    pub fov_deg: f32,
}

// =============================================================================
// SCENE SET
// =============================================================================

/// Sizes of the generated scenes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSizes {
    pub stars: usize,
    pub star_radius: f32,
    pub network: network::NetworkParams,
    pub texture_width: u32,
    pub texture_height: u32,
}

impl Default for SceneSizes {
    fn default() -> Self {
        Self {
            stars: stars::STAR_COUNT,
            star_radius: stars::STAR_RADIUS,
            network: network::NetworkParams::default(),
            texture_width: texture::TEXTURE_WIDTH,
            texture_height: texture::TEXTURE_HEIGHT,
        }
    }
}

/// Every decorative scene the page uses, generated together.
pub struct SceneSet {
    pub globe: GlobeScene,
    pub stars: StarField,
    pub network: NetworkScene,
    /// PNG-encoded equirectangular earth texture for the globe.
    pub earth_png: Vec<u8>,
}

impl SceneSet {
    /// Generate all scenes at their default sizes. Same seed, same geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the earth texture cannot be PNG-encoded.
    pub fn generate(seed: u64) -> Result<Self, SceneError> {
        Self::generate_sized(seed, &SceneSizes::default())
    }

    /// # Errors
    ///
    /// Returns an error if the earth texture cannot be PNG-encoded.
    pub fn generate_sized(seed: u64, sizes: &SceneSizes) -> Result<Self, SceneError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = StarField::generate(&mut rng, sizes.stars, sizes.star_radius);
        let network = NetworkScene::generate(&mut rng, &sizes.network);
        let globe = GlobeScene::build();
        let earth_png = texture::EarthTexture::render(sizes.texture_width, sizes.texture_height).encode_png()?;

        tracing::info!(
            stars = stars.count(),
            network_nodes = network.node_count(),
            network_edges = network.edges.len(),
            texture_bytes = earth_png.len(),
            "decorative scenes generated"
        );

        Ok(Self { globe, stars, network, earth_png })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
