//! Material kinds and the mapping from kind to its 3D asset.
//!
//! Every product material ships with one GLB mock-up model. Resolution is
//! total: a kind that has no dedicated model (or a string the UI sends that
//! we don't recognize) falls back to the wood asset, so asset selection can
//! never fail.

use std::str::FromStr;

/// The product material requested for the mock-up.
///
/// Drives both which GLB asset is loaded and the metalness/roughness of the
/// textured surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Wood,
    Metal,
    Canvas,
    Acrylic,
}

impl MaterialKind {
    /// Path of the GLB asset for this material, relative to the asset store.
    pub fn asset_path(self) -> &'static str {
        match self {
            MaterialKind::Wood => "GLB/wood.glb",
            MaterialKind::Metal => "GLB/metal.glb",
            MaterialKind::Canvas => "GLB/canvas.glb",
            MaterialKind::Acrylic => "GLB/acrylic.glb",
        }
    }
}

impl Default for MaterialKind {
    fn default() -> Self {
        MaterialKind::Wood
    }
}

impl FromStr for MaterialKind {
    type Err = std::convert::Infallible;

    /// Case-insensitive; unrecognized names resolve to [`MaterialKind::Wood`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "metal" => MaterialKind::Metal,
            "canvas" => MaterialKind::Canvas,
            "acrylic" => MaterialKind::Acrylic,
            _ => MaterialKind::Wood,
        })
    }
}
