#![allow(dead_code)]

use std::sync::Arc;

use printview::{
    MaterialKind,
    data_structures::{
        instance::Instance,
        scene_graph::{MeshData, Node, NodeId, SceneGraph},
        texture::TextureResource,
    },
};

/// A quad of the given half-extents in the z = 0 plane.
pub fn quad_mesh(half_x: f32, half_y: f32) -> MeshData {
    MeshData {
        positions: vec![
            [-half_x, -half_y, 0.0],
            [half_x, -half_y, 0.0],
            [half_x, half_y, 0.0],
            [-half_x, half_y, 0.0],
        ],
    }
}

/// The eight corners of a box with the given extents, centered at the origin.
pub fn box_mesh(extent_x: f32, extent_y: f32, extent_z: f32) -> MeshData {
    let (hx, hy, hz) = (extent_x / 2.0, extent_y / 2.0, extent_z / 2.0);
    let mut positions = Vec::with_capacity(8);
    for sx in [-1.0f32, 1.0] {
        for sy in [-1.0f32, 1.0] {
            for sz in [-1.0f32, 1.0] {
                positions.push([sx * hx, sy * hy, sz * hz]);
            }
        }
    }
    MeshData { positions }
}

/// A graph with one grouping root and one mesh child per name.
pub fn graph_of_meshes(names: &[&str]) -> SceneGraph {
    let mut graph = SceneGraph::new();
    let root = graph.add_node(None, Node::group("Mockup", Instance::new()));
    for name in names {
        graph.add_node(
            Some(root),
            Node::mesh(*name, Instance::new(), quad_mesh(1.0, 1.0), None),
        );
    }
    graph
}

/// Mesh node ids carrying a textured descriptor after the apply pass.
pub fn textured_nodes(graph: &SceneGraph) -> Vec<NodeId> {
    graph
        .mesh_nodes()
        .into_iter()
        .filter(|&id| {
            graph
                .node(id)
                .material
                .as_ref()
                .is_some_and(|mat| mat.is_textured())
        })
        .collect()
}

/// A decoded texture resource of the given pixel size (blank white image).
pub fn blank_texture(kind: MaterialKind, width: u32, height: u32) -> Arc<TextureResource> {
    Arc::new(TextureResource::from_image(
        image::DynamicImage::new_rgba8(width, height),
        kind,
    ))
}
