//! Free-standing text.

use svg::node::element as svg_element;

use draftboard_core::diagram::Shape;

use super::{debug_markers, shape_group, text_element};
use crate::renderer::Renderer;

const PADDING: f32 = 2.0;

/// Draws the `TEXT` appearance value without any frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelRenderer;

impl Renderer for LabelRenderer {
    fn identifier(&self) -> &str {
        "Label"
    }

    fn render(&self, shape: &Shape, show_debug_markers: bool) -> svg_element::Group {
        let bounds = shape.transform().bounds();
        let group = shape_group(shape).add(text_element(shape, bounds, PADDING));

        if show_debug_markers {
            group.add(debug_markers(shape))
        } else {
            group
        }
    }
}
