//! Material planning and assignment.
//!
//! Split in two passes so the decision logic stays side-effect free:
//! [`plan_materials`] maps node ids to descriptors (including the fallback
//! when no front surface matched), and [`apply_materials`] writes the plan
//! into the graph and enables shadow flags on every mesh node.

use std::{collections::HashMap, sync::Arc};

use log::{debug, warn};

use crate::{
    catalog::MaterialKind,
    classify::Classification,
    data_structures::{
        material::MaterialDescriptor,
        scene_graph::{NodeId, SceneGraph},
        texture::TextureResource,
    },
};

/// Side-effect-free mapping from mesh node to the descriptor it will receive.
#[derive(Clone, Debug, Default)]
pub struct MaterialPlan {
    descriptors: HashMap<NodeId, MaterialDescriptor>,
}

impl MaterialPlan {
    pub fn descriptor(&self, id: NodeId) -> Option<&MaterialDescriptor> {
        self.descriptors.get(&id)
    }

    /// Ids of nodes planned to carry the textured descriptor.
    pub fn textured_nodes(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .descriptors
            .iter()
            .filter(|(_, desc)| desc.is_textured())
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Build the material plan for every mesh node.
///
/// Front nodes get the textured descriptor, everything else a plain white
/// one. If classification found no front surface, the first mesh node in
/// traversal order is re-planned as textured so the user's image is never
/// silently dropped. A graph with zero mesh nodes yields an empty plan; that
/// degenerate case is tolerated, not reported.
pub fn plan_materials(
    graph: &SceneGraph,
    classification: &HashMap<NodeId, Classification>,
    texture: &Arc<TextureResource>,
    kind: MaterialKind,
) -> MaterialPlan {
    let mesh_nodes = graph.mesh_nodes();
    if mesh_nodes.is_empty() {
        debug!("scene graph has no mesh nodes, nothing to texture");
        return MaterialPlan::default();
    }

    let mut descriptors = HashMap::with_capacity(mesh_nodes.len());
    let mut textured = false;
    for &id in &mesh_nodes {
        let descriptor = match classification.get(&id) {
            Some(Classification::Front) => {
                textured = true;
                MaterialDescriptor::textured(Arc::clone(texture), kind)
            }
            _ => MaterialDescriptor::plain(),
        };
        descriptors.insert(id, descriptor);
    }

    if !textured {
        // Fallback: first mesh in traversal order carries the image.
        let first = mesh_nodes[0];
        warn!(
            "no front-facing mesh matched, texturing first mesh node {:?} ({})",
            first,
            graph.node(first).name
        );
        descriptors.insert(first, MaterialDescriptor::textured(Arc::clone(texture), kind));
    }

    MaterialPlan { descriptors }
}

/// Write a plan into the graph.
///
/// Every mesh node also becomes a shadow caster and receiver, regardless of
/// its classification. Returns the graph for chaining.
pub fn apply_materials<'a>(graph: &'a mut SceneGraph, plan: &MaterialPlan) -> &'a mut SceneGraph {
    for id in graph.mesh_nodes() {
        let node = graph.node_mut(id);
        node.cast_shadow = true;
        node.receive_shadow = true;
        if let Some(descriptor) = plan.descriptor(id) {
            node.material = Some(descriptor.clone());
        }
    }
    graph
}
