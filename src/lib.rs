//! printview
//!
//! The asset texturing and normalization pipeline behind an interactive 3D
//! product mock-up viewer: a user-supplied image is mapped onto the
//! front-facing surface of a material-specific GLB asset (wood, metal,
//! canvas, acrylic), and the asset is uniformly scaled and re-centered so
//! the embedding viewport can always aim its camera and orbit target at the
//! origin.
//!
//! High-level modules
//! - `catalog`: material kinds and their GLB asset paths
//! - `data_structures`: arena scene graph, transforms, materials, textures
//! - `classify`: name-heuristic front-surface classification
//! - `assign`: material planning and the apply pass
//! - `bounds`: bounding-volume math and scale/center normalization
//! - `resources`: async loading of GLB assets and images
//! - `session`: pipeline orchestration with request supersession
//!

pub mod assign;
pub mod bounds;
pub mod catalog;
pub mod classify;
pub mod data_structures;
pub mod resources;
pub mod session;

// Re-exports commonly used types for convenience in downstream code.
pub use catalog::MaterialKind;
pub use cgmath::*;
pub use session::{PreparedView, RenderSession, TARGET_SIZE, ViewRequest};

/// Route `log` output to the browser console. Native hosts pick their own
/// logger (the tests use env_logger).
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_log::init_with_level(log::Level::Info).expect("could not initialize logger");
}
