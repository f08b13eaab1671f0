//! Integration tests for scene reconciliation
//!
//! These drive the reconciler through the public API with a renderer that
//! records every shape it draws.

use std::{cell::RefCell, rc::Rc};

use svg::node::element as svg_element;

use draftboard::{
    DraftboardError,
    canvas::{Canvas, EditorState},
    config::AppConfig,
    diagram::{Diagram, Shape, appearance},
    geometry::{Bounds, Point, Size, Transform},
    identifier::Id,
    reconciler::Reconciler,
    registry::RendererRegistry,
    renderer::Renderer,
    scene::Scene,
};

/// Records the id of every shape it renders.
#[derive(Debug, Clone, Default)]
struct RecordingRenderer {
    rendered: Rc<RefCell<Vec<Id>>>,
}

impl RecordingRenderer {
    fn count(&self) -> usize {
        self.rendered.borrow().len()
    }

    fn rendered(&self) -> Vec<Id> {
        self.rendered.borrow().clone()
    }

    fn clear(&self) {
        self.rendered.borrow_mut().clear();
    }
}

impl Renderer for RecordingRenderer {
    fn identifier(&self) -> &str {
        "Recording"
    }

    fn render(&self, shape: &Shape, _show_debug_markers: bool) -> svg_element::Group {
        self.rendered.borrow_mut().push(shape.id());
        svg_element::Group::new().set("data-shape", shape.id().to_string())
    }
}

fn shape(name: &str) -> Shape {
    shape_with_renderer(name, "Recording")
}

fn shape_with_renderer(name: &str, renderer: &str) -> Shape {
    Shape::new(
        Id::new(name),
        renderer,
        Transform::new(Point::new(10.0, 10.0), Size::new(20.0, 20.0)),
    )
}

fn setup() -> (RecordingRenderer, Reconciler) {
    let renderer = RecordingRenderer::default();
    let registry = RendererRegistry::builder()
        .register_builtin_renderers()
        .register(renderer.clone())
        .build();
    let reconciler = Reconciler::new(Scene::new(), Rc::new(registry), false);
    (renderer, reconciler)
}

/// Shape ids of the attached scene elements, bottom to top.
fn painted(reconciler: &Reconciler) -> Vec<Id> {
    reconciler
        .scene()
        .attached()
        .into_iter()
        .filter_map(|element| reconciler.shape_id_by_element(element))
        .collect()
}

fn ids(names: &[&str]) -> Vec<Id> {
    names.iter().map(|name| Id::new(name)).collect()
}

/// root: [G1(S2, S3), S1]
fn grouped() -> Diagram {
    Diagram::new(Id::new("doc"))
        .with_shape(shape("S2"))
        .with_shape(shape("S3"))
        .with_group(Id::new("G1"), ids(&["S2", "S3"]))
        .with_shape(shape("S1"))
}

#[test]
fn test_paint_order_is_depth_first() {
    let (renderer, mut reconciler) = setup();

    let summary = reconciler.reconcile(Some(&grouped())).unwrap();

    assert_eq!(summary.rendered, 3);
    assert_eq!(renderer.rendered(), ids(&["S2", "S3", "S1"]));
    assert_eq!(painted(&reconciler), ids(&["S2", "S3", "S1"]));
}

#[test]
fn test_dangling_ids_do_not_fail_the_pass() {
    let (renderer, mut reconciler) = setup();
    let diagram = Diagram::new(Id::new("doc"))
        .with_shape(shape("a"))
        .with_group(Id::new("g"), ids(&["a", "not-yet-inserted"]))
        .with_root_ids(ids(&["g", "ghost"]));

    let summary = reconciler.reconcile(Some(&diagram)).unwrap();

    assert_eq!(summary.dangling, 2);
    assert_eq!(renderer.rendered(), ids(&["a"]));
    assert_eq!(painted(&reconciler), ids(&["a"]));
}

#[test]
fn test_unchanged_shapes_are_not_rendered_again() {
    let (renderer, mut reconciler) = setup();
    let diagram = grouped();
    reconciler.reconcile(Some(&diagram)).unwrap();
    let elements = reconciler.scene().attached();

    let selected = diagram.select_items(&ids(&["S1"]));
    let summary = reconciler.reconcile(Some(&selected)).unwrap();

    assert_eq!(renderer.count(), 3);
    assert_eq!(summary.rendered, 0);
    assert_eq!(summary.reattached, 3);
    assert_eq!(reconciler.scene().attached(), elements);
}

#[test]
fn test_replaced_shape_is_rendered_again() {
    let (renderer, mut reconciler) = setup();
    let diagram = grouped();
    reconciler.reconcile(Some(&diagram)).unwrap();
    let old_element = reconciler.shape_ref(Id::new("S3")).unwrap().element().unwrap();
    renderer.clear();

    let changed = diagram.change_items_appearance(&ids(&["S3"]), appearance::TEXT, "Submit");
    let summary = reconciler.reconcile(Some(&changed)).unwrap();

    assert_eq!(renderer.rendered(), ids(&["S3"]));
    assert_eq!(summary.reattached, 2);
    assert!(!reconciler.scene().contains(old_element));
    assert_eq!(reconciler.shape_id_by_element(old_element), None);
    assert_eq!(painted(&reconciler), ids(&["S2", "S3", "S1"]));
    assert!(Rc::ptr_eq(
        reconciler.shape_ref(Id::new("S3")).unwrap().last_shape().unwrap(),
        changed.shape(Id::new("S3")).unwrap(),
    ));
}

#[test]
fn test_group_transform_rerenders_descendants_only() {
    let (renderer, mut reconciler) = setup();
    let diagram = grouped();
    reconciler.reconcile(Some(&diagram)).unwrap();
    renderer.clear();

    let old_bounds = diagram.bounds_of(&ids(&["G1"])).unwrap();
    let new_bounds = Bounds::new_from_top_left(Point::new(100.0, 100.0), old_bounds.to_size());
    let moved = diagram.transform_items(&ids(&["G1"]), old_bounds, new_bounds);
    reconciler.reconcile(Some(&moved)).unwrap();

    assert_eq!(renderer.rendered(), ids(&["S2", "S3"]));
}

#[test]
fn test_removed_shapes_leave_scene_and_lookups() {
    let (_, mut reconciler) = setup();
    let diagram = grouped();
    reconciler.reconcile(Some(&diagram)).unwrap();
    let removed_element = reconciler.shape_ref(Id::new("S2")).unwrap().element().unwrap();

    let pruned = diagram.remove_items(&ids(&["S2"]));
    let summary = reconciler.reconcile(Some(&pruned)).unwrap();

    assert_eq!(summary.removed, 1);
    assert!(reconciler.shape_ref(Id::new("S2")).is_none());
    assert!(reconciler.shape_ref_by_element(removed_element).is_none());
    assert!(!reconciler.scene().is_attached(removed_element));
    assert!(!reconciler.scene().contains(removed_element));
    assert_eq!(painted(&reconciler), ids(&["S3", "S1"]));
    assert_eq!(reconciler.len(), 2);
    assert_eq!(reconciler.element_count(), 2);
}

#[test]
fn test_remove_and_readd_leaves_no_duplicates() {
    let (renderer, mut reconciler) = setup();
    let diagram = grouped();

    for _ in 0..3 {
        reconciler.reconcile(Some(&diagram)).unwrap();
        reconciler
            .reconcile(Some(&diagram.remove_items(&ids(&["G1"]))))
            .unwrap();
    }
    reconciler.reconcile(Some(&diagram)).unwrap();

    assert_eq!(painted(&reconciler), ids(&["S2", "S3", "S1"]));
    assert_eq!(reconciler.scene().len(), 3);
    assert_eq!(reconciler.len(), 3);
    assert_eq!(reconciler.element_count(), 3);
    // S1 stays in every diagram; S2 and S3 are rendered again on each return.
    assert_eq!(renderer.count(), 3 + 2 * 3);
}

#[test]
fn test_unknown_renderer_aborts_the_pass() {
    let (renderer, mut reconciler) = setup();
    let diagram = Diagram::new(Id::new("doc"))
        .with_shape(shape("before"))
        .with_shape(shape_with_renderer("broken", "Spaceship"))
        .with_shape(shape("after"));

    let result = reconciler.reconcile(Some(&diagram));

    match result {
        Err(DraftboardError::UnresolvedRenderer { renderer, shape }) => {
            assert_eq!(renderer, "Spaceship");
            assert_eq!(shape, Id::new("broken"));
        }
        other => panic!("Expected an unresolved renderer error, got {other:?}"),
    }
    assert_eq!(renderer.rendered(), ids(&["before"]));
    assert_eq!(painted(&reconciler), ids(&["before"]));
    assert_eq!(reconciler.stats().failed_passes, 1);
}

#[test]
fn test_recovers_after_failed_pass() {
    let (renderer, mut reconciler) = setup();
    let broken = Diagram::new(Id::new("doc"))
        .with_shape(shape("a"))
        .with_shape(shape_with_renderer("b", "Spaceship"));
    assert!(reconciler.reconcile(Some(&broken)).is_err());

    let fixed = broken.remove_items(&ids(&["b"]));
    let summary = reconciler.reconcile(Some(&fixed)).unwrap();

    assert_eq!(summary.reattached, 1);
    assert_eq!(renderer.count(), 1);
    assert_eq!(painted(&reconciler), ids(&["a"]));
}

#[test]
fn test_canvas_exports_builtin_renderers() {
    let registry = Rc::new(RendererRegistry::with_builtin_renderers());
    let mut canvas = Canvas::new(&AppConfig::default(), registry).unwrap();

    let diagram = Diagram::new(Id::new("login"))
        .with_shape(shape_with_renderer("frame", "Rectangle"))
        .with_shape(shape_with_renderer("avatar", "Ellipse"))
        .with_shape(
            shape_with_renderer("title", "Label")
                .with_appearance_value(appearance::TEXT, "Sign in"),
        )
        .with_shape(
            shape_with_renderer("submit", "Button").with_appearance_value(appearance::TEXT, "Go"),
        );
    let state = EditorState::new(Some(Rc::new(diagram)), 2.0, Size::new(320.0, 240.0));

    let summary = canvas.on_state_changed(&state).unwrap();
    let svg = canvas.to_svg().unwrap();

    assert_eq!(summary.rendered, 4);
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("width=\"640\""));
    assert!(svg.contains("<ellipse"));
    assert!(svg.contains(">Sign in<"));
    assert!(svg.contains(">Go<"));
}
