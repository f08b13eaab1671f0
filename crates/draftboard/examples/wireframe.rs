//! Example: Reconciling a wireframe through a series of edits
//!
//! Builds a login form programmatically, shows it on a canvas, applies a
//! few model commands and prints what each pass had to redraw.
//!
//! Run with `RUST_LOG=debug` to see the reconciler's log records.

use std::rc::Rc;

use draftboard::{
    canvas::{Canvas, EditorState},
    config::load_config,
    diagram::{Diagram, Shape, appearance},
    geometry::{Bounds, Point, Size, Transform},
    identifier::Id,
    reconciler::PassSummary,
    registry::RendererRegistry,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = load_config(None::<&str>)?;
    let registry = Rc::new(RendererRegistry::with_builtin_renderers());
    let mut canvas = Canvas::new(&config, registry)?;

    let panel_id = Id::new("panel");
    let title_id = Id::new("title");
    let avatar_id = Id::new("avatar");
    let submit_id = Id::new("submit");
    let form_id = Id::new("form");

    let diagram = Diagram::new(Id::new("login"))
        .with_shape(
            Shape::new(
                panel_id,
                "Rectangle",
                Transform::new(Point::new(160.0, 120.0), Size::new(280.0, 200.0)),
            )
            .with_appearance_value(appearance::BACKGROUND_COLOR, "#f4f5f7"),
        )
        .with_shape(
            Shape::new(
                avatar_id,
                "Ellipse",
                Transform::new(Point::new(160.0, 60.0), Size::new(40.0, 40.0)),
            )
            .with_appearance_value(appearance::BACKGROUND_COLOR, "#dfe1e6"),
        )
        .with_shape(
            Shape::new(
                title_id,
                "Label",
                Transform::new(Point::new(160.0, 110.0), Size::new(200.0, 24.0)),
            )
            .with_appearance_value(appearance::TEXT, "Sign in")
            .with_appearance_value(appearance::FONT_SIZE, 18.0),
        )
        .with_shape(
            Shape::new(
                submit_id,
                "Button",
                Transform::new(Point::new(160.0, 180.0), Size::new(120.0, 32.0)),
            )
            .with_appearance_value(appearance::TEXT, "Continue"),
        )
        .with_group(form_id, vec![avatar_id, title_id, submit_id]);

    let state = EditorState::new(Some(Rc::new(diagram)), 1.0, Size::new(320.0, 240.0));
    report("initial", canvas.on_state_changed(&state)?);

    // Selecting touches no shape, so nothing is redrawn.
    let diagram = state
        .diagram()
        .map(|diagram| diagram.select_items(&[submit_id]))
        .ok_or("no diagram")?;
    let state = state.with_diagram(Some(Rc::new(diagram)));
    report("select", canvas.on_state_changed(&state)?);

    let diagram = state
        .diagram()
        .map(|diagram| {
            diagram.change_items_appearance(&[submit_id], appearance::BACKGROUND_COLOR, "#0052cc")
        })
        .ok_or("no diagram")?;
    let state = state.with_diagram(Some(Rc::new(diagram)));
    report("recolor", canvas.on_state_changed(&state)?);

    let diagram = state
        .diagram()
        .and_then(|diagram| {
            let old_bounds = diagram.bounds_of(&[form_id])?;
            let new_bounds = Bounds::new_from_center(
                old_bounds.center().add_point(Point::new(0.0, 10.0)),
                old_bounds.to_size(),
            );
            Some(diagram.transform_items(&[form_id], old_bounds, new_bounds))
        })
        .ok_or("no form bounds")?;
    let state = state.with_diagram(Some(Rc::new(diagram)));
    report("move form", canvas.on_state_changed(&state)?);

    let diagram = state
        .diagram()
        .map(|diagram| diagram.remove_items(&[avatar_id]))
        .ok_or("no diagram")?;
    let state = state.with_diagram(Some(Rc::new(diagram))).with_zoom(2.0);
    report("remove avatar", canvas.on_state_changed(&state)?);

    println!("\nTotals: {:?}\n", canvas.reconciler().stats());
    println!("{}", canvas.to_svg()?);

    Ok(())
}

fn report(step: &str, summary: PassSummary) {
    println!(
        "{step:>14}: rendered {}, re-attached {}, removed {}",
        summary.rendered, summary.reattached, summary.removed
    );
}
