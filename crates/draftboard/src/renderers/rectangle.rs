//! Plain rectangle.

use svg::node::element as svg_element;

use draftboard_core::diagram::Shape;

use super::{Stroke, apply_fill, apply_stroke, debug_markers, shape_group};
use crate::renderer::Renderer;

/// Appearance key for the corner radius of a rectangle.
pub const CORNER_RADIUS: &str = "CORNER_RADIUS";

/// Draws a filled, stroked rectangle covering the shape bounds.
#[derive(Debug, Default, Clone, Copy)]
pub struct RectangleRenderer;

impl Renderer for RectangleRenderer {
    fn identifier(&self) -> &str {
        "Rectangle"
    }

    fn render(&self, shape: &Shape, show_debug_markers: bool) -> svg_element::Group {
        let bounds = shape.transform().bounds();
        let stroke = Stroke::from_appearance(shape.appearance());
        let radius = shape.appearance().number(CORNER_RADIUS).unwrap_or(0.0);

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", radius);
        let rect = apply_fill!(apply_stroke!(rect, stroke), shape.appearance());

        let group = shape_group(shape).add(rect);
        if show_debug_markers {
            group.add(debug_markers(shape))
        } else {
            group
        }
    }
}

#[cfg(test)]
mod tests {
    use draftboard_core::{
        diagram::appearance,
        geometry::{Point, Size, Transform},
        identifier::Id,
    };

    use super::*;

    fn shape() -> Shape {
        Shape::new(
            Id::new("box"),
            "Rectangle",
            Transform::new(Point::new(60.0, 40.0), Size::new(100.0, 60.0)),
        )
    }

    #[test]
    fn test_render_geometry() {
        let svg = RectangleRenderer.render(&shape(), false).to_string();

        assert!(svg.contains("x=\"10\""));
        assert!(svg.contains("y=\"10\""));
        assert!(svg.contains("width=\"100\""));
        assert!(svg.contains("height=\"60\""));
        assert!(svg.contains("fill=\"white\""));
        assert!(!svg.contains("debug-markers"));
    }

    #[test]
    fn test_render_appearance() {
        let styled = shape()
            .with_appearance_value(appearance::STROKE_THICKNESS, 3.0)
            .with_appearance_value(CORNER_RADIUS, 5.0);
        let svg = RectangleRenderer.render(&styled, true).to_string();

        assert!(svg.contains("stroke-width=\"3\""));
        assert!(svg.contains("rx=\"5\""));
        assert!(svg.contains("debug-markers"));
    }

    #[test]
    fn test_transparent_background_is_unfilled() {
        let hollow = shape().with_appearance_value(appearance::BACKGROUND_COLOR, "transparent");
        let svg = RectangleRenderer.render(&hollow, false).to_string();

        assert!(svg.contains("fill=\"none\""));
    }
}
