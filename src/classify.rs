//! Front-surface classification.
//!
//! Mock-up assets are authored with no machine-readable marker for the
//! surface that should carry the user's image, but their authors name that
//! surface consistently ("Front_Panel", "PhotoPlane", ...). Classification is
//! a case-insensitive substring scan over each mesh node's own name and the
//! name of the material it shipped with; either hit counts. The keyword set
//! is injectable so the heuristic stays testable without a loaded asset.

use std::collections::HashMap;

use crate::data_structures::scene_graph::{NodeId, SceneGraph};

/// Default substrings that mark a front-facing surface.
pub const FRONT_KEYWORDS: [&str; 4] = ["front", "photo", "image", "picture"];

/// Whether a mesh surface displays the user's image or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Front,
    Other,
}

/// Name-heuristic classifier with a configurable keyword set.
#[derive(Clone, Debug)]
pub struct Classifier {
    keywords: Vec<String>,
}

impl Classifier {
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|kw| kw.into().to_lowercase())
                .collect(),
        }
    }

    /// Classify a single node by its name and optional source-material name.
    ///
    /// Pure: no scene graph required.
    pub fn classify_name(&self, name: &str, material_name: Option<&str>) -> Classification {
        let name = name.to_lowercase();
        let material_name = material_name.map(str::to_lowercase).unwrap_or_default();
        let hit = self
            .keywords
            .iter()
            .any(|kw| name.contains(kw) || material_name.contains(kw));
        if hit {
            Classification::Front
        } else {
            Classification::Other
        }
    }

    /// Classify every mesh-bearing node in the graph.
    ///
    /// Grouping nodes are skipped. The result does not depend on traversal
    /// order; only the assigner's fallback tie-break does.
    pub fn classify(&self, graph: &SceneGraph) -> HashMap<NodeId, Classification> {
        graph
            .mesh_nodes()
            .into_iter()
            .map(|id| {
                let node = graph.node(id);
                let class = self.classify_name(&node.name, node.source_material.as_deref());
                (id, class)
            })
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(FRONT_KEYWORDS)
    }
}
