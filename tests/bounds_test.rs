use cgmath::{InnerSpace, Vector3};
use printview::{
    bounds::{normalize, scene_bounds},
    data_structures::{
        instance::Instance,
        scene_graph::{MeshData, Node, SceneGraph},
    },
};

use crate::common::test_utils::box_mesh;

mod common;

const EPS: f32 = 1e-5;

fn off_center_box_graph() -> SceneGraph {
    let mut graph = SceneGraph::new();
    let mut transform = Instance::new();
    transform.position = Vector3::new(1.0, -2.0, 3.0);
    graph.add_node(None, Node::mesh("Body", transform, box_mesh(4.0, 2.0, 1.0), None));
    graph
}

#[test]
fn should_scale_the_largest_extent_to_the_target_size() {
    let mut graph = off_center_box_graph();
    let normalization = normalize(&mut graph, 2.0);
    assert!((normalization.scale - 0.5).abs() < EPS);

    let bounds = scene_bounds(&graph);
    let extents = bounds.extents();
    assert!((extents.x - 2.0).abs() < EPS);
    assert!((extents.y - 1.0).abs() < EPS);
    assert!((extents.z - 0.5).abs() < EPS);
}

#[test]
fn should_center_the_scaled_scene_at_the_origin() {
    let mut graph = off_center_box_graph();
    normalize(&mut graph, 2.0);

    let center = scene_bounds(&graph).center();
    assert!(center.magnitude() < EPS, "center off origin: {center:?}");
}

#[test]
fn should_compose_parent_transforms_into_the_bounds() {
    let mut graph = SceneGraph::new();
    let mut group_transform = Instance::new();
    group_transform.position = Vector3::new(10.0, 0.0, 0.0);
    let root = graph.add_node(None, Node::group("Rig", group_transform));
    graph.add_node(
        Some(root),
        Node::mesh("Body", Instance::new(), box_mesh(2.0, 2.0, 2.0), None),
    );

    let bounds = scene_bounds(&graph);
    assert!((bounds.center().x - 10.0).abs() < EPS);
    assert!((bounds.extents().x - 2.0).abs() < EPS);
}

#[test]
fn should_leave_an_empty_scene_untouched() {
    let mut graph = SceneGraph::new();
    graph.add_node(None, Node::group("Empty", Instance::new()));

    let normalization = normalize(&mut graph, 2.0);
    assert_eq!(normalization.scale, 1.0);
    assert_eq!(normalization.center_offset, Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(graph.root_transform, Instance::new());
}

#[test]
fn should_guard_degenerate_bounds_against_divide_by_zero() {
    let mut graph = SceneGraph::new();
    graph.add_node(
        None,
        Node::mesh(
            "Dot",
            Instance::new(),
            MeshData {
                positions: vec![[5.0, 5.0, 5.0]],
            },
            None,
        ),
    );

    let normalization = normalize(&mut graph, 2.0);
    assert!(normalization.scale.is_finite());
    assert!(normalization.center_offset.x.is_finite());
}
