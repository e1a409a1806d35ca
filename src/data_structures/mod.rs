//! Pipeline data structures: scene graphs, transforms, materials, textures.
//!
//! - `instance` holds decomposed node transforms
//! - `scene_graph` is the arena-allocated node tree of a loaded asset
//! - `material` defines the descriptors attached to mesh surfaces
//! - `texture` wraps the user image and its sampling/UV state

pub mod instance;
pub mod material;
pub mod scene_graph;
pub mod texture;
