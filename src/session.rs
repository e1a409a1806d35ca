//! Pipeline orchestration for one viewer session.
//!
//! A [`RenderSession`] runs the full preparation pipeline for a
//! (material, image) request: resolve the GLB path, fetch asset and image
//! concurrently, build the scene graph, prepare the texture, classify and
//! texture the surfaces, then normalize scale and centering. Each request
//! rebuilds everything; nothing is cached or patched incrementally.
//!
//! Requests can overlap: selecting a new material while the previous load is
//! still in flight supersedes it. The session tracks a generation counter,
//! and a stale request discards its own result after its awaits resolve
//! instead of handing a dead scene to the viewport.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use cgmath::Vector3;
use instant::Instant;
use log::debug;

use crate::{
    assign::{apply_materials, plan_materials},
    bounds::normalize,
    catalog::MaterialKind,
    classify::Classifier,
    data_structures::{scene_graph::SceneGraph, texture::TextureResource},
    resources::{load_binary, load_scene_gltf},
};

/// On-screen size every asset is normalized to (largest bounding extent).
pub const TARGET_SIZE: f32 = 2.0;

/// One preparation request from the embedding application.
#[derive(Clone, Debug)]
pub struct ViewRequest {
    /// Locator of the user image, resolved by the asset store.
    pub image: String,
    pub material: MaterialKind,
}

impl ViewRequest {
    /// Build a request from the strings the UI hands over. The material name
    /// is matched case-insensitively; unknown names fall back to wood.
    pub fn new(image: impl Into<String>, material: &str) -> Self {
        Self {
            image: image.into(),
            material: material.parse().unwrap_or_default(),
        }
    }
}

/// A fully prepared scene, ready for the external viewport.
#[derive(Debug)]
pub struct PreparedView {
    /// Normalized scene graph: materials assigned, uniformly scaled,
    /// bounding center at the origin.
    pub graph: SceneGraph,
    pub texture: Arc<TextureResource>,
    /// Uniform scale the normalization applied.
    pub scale: f32,
    /// Where to aim the camera and orbit target. Always the origin after
    /// normalization.
    pub center: Vector3<f32>,
}

/// A viewer session accepting possibly-overlapping preparation requests.
#[derive(Debug, Default)]
pub struct RenderSession {
    generation: AtomicU64,
    classifier: Classifier,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with a custom front-surface keyword set.
    pub fn with_classifier(classifier: Classifier) -> Self {
        Self {
            generation: AtomicU64::new(0),
            classifier,
        }
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Run the full pipeline for one request.
    ///
    /// Returns `Ok(None)` when a newer request superseded this one while it
    /// was suspended on I/O; the partially loaded resources are dropped here
    /// and never reach the viewport. Load and decode failures propagate to
    /// the caller, which owns retry policy.
    pub async fn prepare(&self, request: &ViewRequest) -> anyhow::Result<Option<PreparedView>> {
        let generation = self.begin();
        let started = Instant::now();

        let asset_path = request.material.asset_path();
        debug!(
            "preparing view: material {:?}, asset {}, image {}",
            request.material, asset_path, request.image
        );
        let (asset_bytes, image_bytes) =
            futures::join!(load_binary(asset_path), load_binary(&request.image));
        if !self.is_current(generation) {
            debug!("request {} superseded during load, discarding", generation);
            return Ok(None);
        }

        let mut graph = load_scene_gltf(&asset_bytes?).await?;
        let texture = Arc::new(TextureResource::from_bytes(&image_bytes?, request.material)?);
        if !self.is_current(generation) {
            debug!("request {} superseded during decode, discarding", generation);
            return Ok(None);
        }

        let classification = self.classifier.classify(&graph);
        let plan = plan_materials(&graph, &classification, &texture, request.material);
        apply_materials(&mut graph, &plan);
        let normalization = normalize(&mut graph, TARGET_SIZE);

        debug!(
            "prepared view in {:?}: {} nodes, scale {:.4}",
            started.elapsed(),
            graph.len(),
            normalization.scale
        );
        Ok(Some(PreparedView {
            graph,
            texture,
            scale: normalization.scale,
            center: Vector3::new(0.0, 0.0, 0.0),
        }))
    }
}

/// Run classification, assignment and normalization on an already loaded
/// graph and texture.
///
/// This is the suspension-free tail of [`RenderSession::prepare`], usable
/// when the embedding application loads resources through its own machinery.
pub fn texture_and_normalize(
    graph: &mut SceneGraph,
    texture: &Arc<TextureResource>,
    kind: MaterialKind,
    classifier: &Classifier,
) -> f32 {
    let classification = classifier.classify(graph);
    let plan = plan_materials(graph, &classification, texture, kind);
    apply_materials(graph, &plan);
    normalize(graph, TARGET_SIZE).scale
}
