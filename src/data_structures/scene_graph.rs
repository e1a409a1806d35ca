//! Arena-allocated scene graph.
//!
//! A loaded mock-up asset is held as a flat `Vec` of nodes addressed by
//! [`NodeId`], with parent/child edges stored as ids. This keeps traversal,
//! per-node bookkeeping (classification results, material plans) and teardown
//! on reload trivial: dropping the graph drops everything.
//!
//! The graph is rebuilt from scratch for every (material, image) request;
//! nothing survives across requests.

use crate::data_structures::{instance::Instance, material::MaterialDescriptor};

/// Handle of a node inside its [`SceneGraph`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Renderable geometry carried by a mesh node.
///
/// Only object-space positions are kept: that is all the pipeline needs for
/// bounding-volume computation. Vertex attributes for actual rendering stay
/// with the external viewer's own GPU upload of the same asset.
#[derive(Clone, Debug)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
}

/// One scene-graph node: either a grouping node or a mesh node.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    /// Local transform relative to the parent node.
    pub transform: Instance,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub mesh: Option<MeshData>,
    /// Name of the material the asset shipped with. Used only as a
    /// classification input, never rendered.
    pub source_material: Option<String>,
    /// Descriptor assigned by the pipeline; `None` until the apply pass ran.
    pub material: Option<MaterialDescriptor>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Node {
    /// A grouping node without geometry.
    pub fn group(name: impl Into<String>, transform: Instance) -> Self {
        Self {
            name: name.into(),
            transform,
            parent: None,
            children: Vec::new(),
            mesh: None,
            source_material: None,
            material: None,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    /// A mesh node carrying geometry and the asset's own material name.
    pub fn mesh(
        name: impl Into<String>,
        transform: Instance,
        mesh: MeshData,
        source_material: Option<String>,
    ) -> Self {
        Self {
            mesh: Some(mesh),
            source_material,
            ..Self::group(name, transform)
        }
    }

    pub fn is_mesh(&self) -> bool {
        self.mesh.is_some()
    }
}

/// The loaded asset as an id-indexed node arena.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    /// Transform applied on top of every root node. Normalization writes the
    /// uniform scale and the centering offset here.
    pub root_transform: Instance,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            root_transform: Instance::new(),
        }
    }

    /// Insert a node, wiring it under `parent` (or as a root).
    pub fn add_node(&mut self, parent: Option<NodeId>, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        match parent {
            Some(parent_id) => self.nodes[parent_id.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Depth-first preorder over the whole graph.
    ///
    /// The order is stable for a given asset: roots in load order, children
    /// in the order the asset declares them. Fallback texturing relies on
    /// this to pick a deterministic "first" mesh.
    pub fn traverse(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev());
        }
        order
    }

    /// Mesh-bearing nodes in traversal order.
    pub fn mesh_nodes(&self) -> Vec<NodeId> {
        self.traverse()
            .into_iter()
            .filter(|id| self.nodes[id.0].is_mesh())
            .collect()
    }

    /// World transform of a node: the parent chain composed under the graph's
    /// root transform.
    pub fn world_transform(&self, id: NodeId) -> Instance {
        let mut chain = vec![&self.nodes[id.0].transform];
        let mut current = self.nodes[id.0].parent;
        while let Some(parent_id) = current {
            chain.push(&self.nodes[parent_id.0].transform);
            current = self.nodes[parent_id.0].parent;
        }
        let mut world = self.root_transform.clone();
        for local in chain.into_iter().rev() {
            world = &world * local;
        }
        world
    }
}
