//! Ellipse inscribed in the shape bounds.

use svg::node::element as svg_element;

use draftboard_core::diagram::Shape;

use super::{Stroke, apply_fill, apply_stroke, debug_markers, shape_group};
use crate::renderer::Renderer;

#[derive(Debug, Default, Clone, Copy)]
pub struct EllipseRenderer;

impl Renderer for EllipseRenderer {
    fn identifier(&self) -> &str {
        "Ellipse"
    }

    fn render(&self, shape: &Shape, show_debug_markers: bool) -> svg_element::Group {
        let transform = shape.transform();
        let center = transform.position();
        let size = transform.size();
        let stroke = Stroke::from_appearance(shape.appearance());

        let ellipse = svg_element::Ellipse::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("rx", size.width() / 2.0)
            .set("ry", size.height() / 2.0);
        let ellipse = apply_fill!(apply_stroke!(ellipse, stroke), shape.appearance());

        let group = shape_group(shape).add(ellipse);
        if show_debug_markers {
            group.add(debug_markers(shape))
        } else {
            group
        }
    }
}
