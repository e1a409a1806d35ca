use printview::{
    MaterialKind,
    assign::{apply_materials, plan_materials},
    classify::{Classification, Classifier},
    data_structures::material::MaterialDescriptor,
};

use crate::common::test_utils::{blank_texture, graph_of_meshes, textured_nodes};

mod common;

#[test]
fn should_classify_only_the_front_panel() {
    let graph = graph_of_meshes(&["Frame_Back", "Front_Panel", "Leg"]);
    let classification = Classifier::default().classify(&graph);

    assert_eq!(classification.len(), 3);
    for (&id, &class) in &classification {
        let expected = if graph.node(id).name == "Front_Panel" {
            Classification::Front
        } else {
            Classification::Other
        };
        assert_eq!(class, expected, "node {}", graph.node(id).name);
    }
}

#[test]
fn should_classify_by_source_material_name_too() {
    let classifier = Classifier::default();
    assert_eq!(
        classifier.classify_name("Panel_01", Some("PhotoPrint")),
        Classification::Front
    );
    assert_eq!(
        classifier.classify_name("Panel_01", Some("Lacquer")),
        Classification::Other
    );
    assert_eq!(
        classifier.classify_name("PICTURE_PLANE", None),
        Classification::Front
    );
}

#[test]
fn should_skip_grouping_nodes() {
    // the root group is named "Mockup"; only mesh children are classified
    let graph = graph_of_meshes(&["Front_Panel"]);
    let classification = Classifier::default().classify(&graph);
    assert_eq!(classification.len(), 1);
}

#[test]
fn should_honor_injected_keywords() {
    let classifier = Classifier::new(["display"]);
    let graph = graph_of_meshes(&["Front_Panel", "Display_Face"]);
    let classification = classifier.classify(&graph);
    let fronts: Vec<_> = classification
        .iter()
        .filter(|&(_, &class)| class == Classification::Front)
        .map(|(&id, _)| graph.node(id).name.clone())
        .collect();
    assert_eq!(fronts, vec!["Display_Face".to_string()]);
}

#[test]
fn should_texture_exactly_the_front_nodes() {
    let mut graph = graph_of_meshes(&["Frame_Back", "Front_Panel", "Leg"]);
    let texture = blank_texture(MaterialKind::Wood, 64, 64);
    let classification = Classifier::default().classify(&graph);
    let plan = plan_materials(&graph, &classification, &texture, MaterialKind::Wood);
    apply_materials(&mut graph, &plan);

    let textured = textured_nodes(&graph);
    assert_eq!(textured.len(), 1);
    assert_eq!(graph.node(textured[0]).name, "Front_Panel");
}

#[test]
fn should_fall_back_to_the_first_mesh_when_nothing_matches() {
    let mut graph = graph_of_meshes(&["Back", "Side", "Base"]);
    let texture = blank_texture(MaterialKind::Wood, 64, 64);
    let classification = Classifier::default().classify(&graph);
    let plan = plan_materials(&graph, &classification, &texture, MaterialKind::Wood);
    apply_materials(&mut graph, &plan);

    let textured = textured_nodes(&graph);
    assert_eq!(textured.len(), 1);
    assert_eq!(graph.node(textured[0]).name, "Back");

    // every other mesh keeps its plain white descriptor
    for id in graph.mesh_nodes() {
        let node = graph.node(id);
        if node.name != "Back" {
            match node.material.as_ref().unwrap() {
                MaterialDescriptor::Plain {
                    color,
                    metalness,
                    roughness,
                } => {
                    assert_eq!(*color, [1.0, 1.0, 1.0]);
                    assert_eq!(*metalness, 0.1);
                    assert_eq!(*roughness, 0.9);
                }
                other => panic!("expected plain descriptor, got {other:?}"),
            }
        }
    }
}

#[test]
fn should_use_metal_surface_parameters_for_metal() {
    let graph = graph_of_meshes(&["Front_Panel"]);
    let texture = blank_texture(MaterialKind::Metal, 64, 64);
    let classification = Classifier::default().classify(&graph);
    let plan = plan_materials(&graph, &classification, &texture, MaterialKind::Metal);

    let textured = plan.textured_nodes();
    assert_eq!(textured.len(), 1);
    match plan.descriptor(textured[0]).unwrap() {
        MaterialDescriptor::Textured {
            metalness,
            roughness,
            env_map_intensity,
            ..
        } => {
            assert_eq!(*metalness, 0.9);
            assert_eq!(*roughness, 0.4);
            assert_eq!(*env_map_intensity, 0.8);
        }
        other => panic!("expected textured descriptor, got {other:?}"),
    }
}

#[test]
fn should_enable_shadows_on_every_mesh_node() {
    let mut graph = graph_of_meshes(&["Frame_Back", "Front_Panel", "Leg"]);
    let texture = blank_texture(MaterialKind::Canvas, 64, 64);
    let classification = Classifier::default().classify(&graph);
    let plan = plan_materials(&graph, &classification, &texture, MaterialKind::Canvas);
    apply_materials(&mut graph, &plan);

    for id in graph.mesh_nodes() {
        assert!(graph.node(id).cast_shadow);
        assert!(graph.node(id).receive_shadow);
    }
    // the grouping root is untouched
    let root = graph.roots()[0];
    assert!(!graph.node(root).cast_shadow);
}

#[test]
fn should_texture_nothing_in_an_empty_scene() {
    let mut graph = graph_of_meshes(&[]);
    let texture = blank_texture(MaterialKind::Wood, 64, 64);
    let classification = Classifier::default().classify(&graph);
    let plan = plan_materials(&graph, &classification, &texture, MaterialKind::Wood);
    assert!(plan.is_empty());

    apply_materials(&mut graph, &plan);
    assert!(textured_nodes(&graph).is_empty());
}
