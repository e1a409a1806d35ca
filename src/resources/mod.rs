//! Loading of GLB assets and user images from external sources.
//!
//! Native builds read from the `assets/` directory next to the binary; wasm
//! builds fetch the same paths over HTTP relative to the window origin. Both
//! the 3D asset and the image load are suspending operations; the pipeline
//! in `session` awaits them before any classification or normalization runs.

use std::io::{BufReader, Cursor};

use anyhow::*;

use crate::{
    catalog::MaterialKind,
    data_structures::{
        instance::Instance,
        scene_graph::{MeshData, Node, NodeId, SceneGraph},
        texture::TextureResource,
    },
};

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> reqwest::Url {
    let window = web_sys::window().unwrap();
    let location = window.location();
    let origin = location.origin().unwrap();
    let base = reqwest::Url::parse(&format!("{}/assets/", origin)).unwrap();
    base.join(file_name).unwrap()
}

/// Load a file's raw bytes from the asset store.
pub async fn load_binary(file_name: &str) -> Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name);
        reqwest::get(url).await?.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        let path = std::path::Path::new("./").join("assets").join(file_name);
        tokio::fs::read(path).await?
    };

    Ok(data)
}

/// Load and decode the user image into a [`TextureResource`].
pub async fn load_texture_resource(
    image_locator: &str,
    kind: MaterialKind,
) -> Result<TextureResource> {
    let bytes = load_binary(image_locator).await?;
    TextureResource::from_bytes(&bytes, kind)
}

/// Parse GLB/glTF bytes into an arena scene graph.
///
/// Only what the pipeline needs is pulled out of the asset: the node
/// hierarchy with decomposed transforms, per-mesh vertex positions, and the
/// name of each primitive's authored material (a classification input). All
/// scenes in the file contribute roots.
pub async fn load_scene_gltf(bytes: &[u8]) -> Result<SceneGraph> {
    let gltf_cursor = Cursor::new(bytes);
    let gltf_reader = BufReader::new(gltf_cursor);
    let gltf = gltf::Gltf::from_reader(gltf_reader)?;

    // Load buffers
    let mut buffer_data = Vec::new();
    for buffer in gltf.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => {
                if let Some(blob) = gltf.blob.as_deref() {
                    buffer_data.push(blob.to_vec());
                };
            }
            gltf::buffer::Source::Uri(uri) => {
                let bin = load_binary(uri).await?;
                buffer_data.push(bin);
            }
        }
    }

    let mut graph = SceneGraph::new();
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            insert_gltf_node(&mut graph, None, node, &buffer_data);
        }
    }
    Ok(graph)
}

fn insert_gltf_node(
    graph: &mut SceneGraph,
    parent: Option<NodeId>,
    node: gltf::scene::Node,
    buf: &[Vec<u8>],
) -> NodeId {
    let decomp = node.transform().decomposed();
    let transform = Instance {
        position: decomp.0.into(),
        rotation: decomp.1.into(),
        scale: decomp.2.into(),
    };
    let name = node.name().unwrap_or("unknown_node").to_string();

    let arena_node = match node.mesh() {
        Some(mesh) => {
            let mut positions = Vec::new();
            let mut source_material = None;
            for primitive in mesh.primitives() {
                let reader = primitive.reader(|buffer| buf.get(buffer.index()).map(Vec::as_slice));
                if let Some(vertex_attribute) = reader.read_positions() {
                    positions.extend(vertex_attribute);
                }
                if source_material.is_none() {
                    source_material = primitive.material().name().map(str::to_string);
                }
            }
            // Mesh name takes precedence over the node name for
            // classification; assets commonly name only the mesh.
            let name = mesh.name().map(str::to_string).unwrap_or(name);
            Node::mesh(name, transform, MeshData { positions }, source_material)
        }
        None => Node::group(name, transform),
    };

    let id = graph.add_node(parent, arena_node);
    for child in node.children() {
        insert_gltf_node(graph, Some(id), child, buf);
    }
    id
}
