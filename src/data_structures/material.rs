//! Material descriptors attached to mesh nodes.

use std::sync::Arc;

use crate::{catalog::MaterialKind, data_structures::texture::TextureResource};

/// sRGB white, the base colour of every untextured surface.
pub const PLAIN_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Appearance parameters for one mesh surface.
///
/// Exactly one surface per scene carries [`MaterialDescriptor::Textured`]
/// (the front, showing the user's image); everything else gets
/// [`MaterialDescriptor::Plain`].
#[derive(Clone, Debug)]
pub enum MaterialDescriptor {
    Textured {
        texture: Arc<TextureResource>,
        metalness: f32,
        roughness: f32,
        env_map_intensity: f32,
    },
    Plain {
        color: [f32; 3],
        metalness: f32,
        roughness: f32,
    },
}

impl MaterialDescriptor {
    /// The front-surface descriptor for the given product material.
    ///
    /// Metal gets a reflective finish; every other material reads as matte.
    pub fn textured(texture: Arc<TextureResource>, kind: MaterialKind) -> Self {
        let metal = kind == MaterialKind::Metal;
        MaterialDescriptor::Textured {
            texture,
            metalness: if metal { 0.9 } else { 0.1 },
            roughness: if metal { 0.4 } else { 0.8 },
            env_map_intensity: 0.8,
        }
    }

    /// The descriptor for every non-front surface.
    pub fn plain() -> Self {
        MaterialDescriptor::Plain {
            color: PLAIN_COLOR,
            metalness: 0.1,
            roughness: 0.9,
        }
    }

    pub fn is_textured(&self) -> bool {
        matches!(self, MaterialDescriptor::Textured { .. })
    }
}
