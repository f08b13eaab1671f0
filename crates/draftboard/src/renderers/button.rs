//! Push button: rounded frame with a centered caption.

use svg::node::element as svg_element;

use draftboard_core::diagram::Shape;

use super::{Stroke, apply_fill, apply_stroke, debug_markers, shape_group, text_element};
use crate::renderer::Renderer;

const CORNER_RADIUS: f32 = 4.0;
const PADDING: f32 = 8.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct ButtonRenderer;

impl Renderer for ButtonRenderer {
    fn identifier(&self) -> &str {
        "Button"
    }

    fn render(&self, shape: &Shape, show_debug_markers: bool) -> svg_element::Group {
        let bounds = shape.transform().bounds();
        let stroke = Stroke::from_appearance(shape.appearance());

        let frame = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", CORNER_RADIUS);
        let frame = apply_fill!(apply_stroke!(frame, stroke), shape.appearance());

        let group = shape_group(shape)
            .add(frame)
            .add(text_element(shape, bounds, PADDING));

        if show_debug_markers {
            group.add(debug_markers(shape))
        } else {
            group
        }
    }
}
