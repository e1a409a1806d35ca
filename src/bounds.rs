//! Bounding-volume computation and scale/center normalization.
//!
//! Mock-up assets come in wildly different authored sizes. After materials
//! are assigned, the whole graph is measured, scaled uniformly so its largest
//! extent equals the target size, and translated so its bounding center sits
//! exactly at the origin. The external viewport can then aim its camera and
//! orbit target at the origin for every asset.

use cgmath::{Point3, Transform, Vector3};
use log::debug;

use crate::data_structures::scene_graph::SceneGraph;

/// Floor on the largest extent, guarding the scale division against
/// degenerate (point or flat) geometry.
pub const MIN_EXTENT: f32 = 1e-6;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    /// An empty box: grows to fit the first point it sees.
    pub fn empty() -> Self {
        Self {
            min: Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    pub fn grow(&mut self, point: Vector3<f32>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    pub fn union(mut self, other: Aabb) -> Aabb {
        if !other.is_empty() {
            self.grow(other.min);
            self.grow(other.max);
        }
        self
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) / 2.0
    }

    pub fn extents(&self) -> Vector3<f32> {
        self.max - self.min
    }
}

/// Bounding box of every mesh node's geometry in world space, including the
/// graph's current root transform.
pub fn scene_bounds(graph: &SceneGraph) -> Aabb {
    let mut bounds = Aabb::empty();
    for id in graph.mesh_nodes() {
        let world = graph.world_transform(id).to_matrix();
        let node = graph.node(id);
        if let Some(mesh) = &node.mesh {
            for &[x, y, z] in &mesh.positions {
                let p = world.transform_point(Point3::new(x, y, z));
                bounds.grow(Vector3::new(p.x, p.y, p.z));
            }
        }
    }
    bounds
}

/// The transform normalization wrote into the graph root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalization {
    /// Uniform scale factor applied on all three axes.
    pub scale: f32,
    /// Root translation; chosen so the post-transform bounding center is the
    /// origin.
    pub center_offset: Vector3<f32>,
}

/// Scale the graph uniformly to `target_size` and center it at the origin.
///
/// A graph without any geometry is left untouched (identity normalization,
/// no error). Geometry with zero extent is clamped to [`MIN_EXTENT`] so the
/// scale stays finite.
pub fn normalize(graph: &mut SceneGraph, target_size: f32) -> Normalization {
    let bounds = scene_bounds(graph);
    if bounds.is_empty() {
        debug!("no geometry to normalize, leaving root transform untouched");
        return Normalization {
            scale: 1.0,
            center_offset: Vector3::new(0.0, 0.0, 0.0),
        };
    }

    let extents = bounds.extents();
    let max_extent = extents.x.max(extents.y).max(extents.z).max(MIN_EXTENT);
    let scale = target_size / max_extent;

    // Translation composes after scale in `Instance`, so offsetting by the
    // scaled center lands the bounding center exactly on the origin.
    let center_offset = bounds.center() * -scale;
    graph.root_transform.scale = Vector3::new(scale, scale, scale);
    graph.root_transform.position = center_offset;

    debug!(
        "normalized scene: extents ({:.3}, {:.3}, {:.3}), scale {:.4}",
        extents.x, extents.y, extents.z, scale
    );
    Normalization {
        scale,
        center_offset,
    }
}
