//! Built-in shape renderers.
//!
//! Every renderer draws a shape as one SVG `<g>` element positioned in
//! absolute canvas coordinates. Rotation is applied on the group around the
//! shape center. Appearance keys a renderer does not find fall back to the
//! defaults below.

mod button;
mod ellipse;
mod label;
mod rectangle;

pub use button::ButtonRenderer;
pub use ellipse::EllipseRenderer;
pub use label::LabelRenderer;
pub use rectangle::RectangleRenderer;

use svg::node::{Text as SvgText, element as svg_element};

use draftboard_core::{
    color::Color,
    diagram::{Appearance, Shape, appearance},
    geometry::{Bounds, Point},
};

const DEFAULT_STROKE_THICKNESS: f32 = 1.0;
const DEFAULT_FONT_SIZE: f32 = 14.0;
const DEBUG_COLOR: &str = "#2684ff";
const HANDLE_SIZE: f32 = 6.0;

/// Stroke settings resolved from a shape appearance.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Stroke {
    color: Color,
    width: f32,
}

impl Stroke {
    pub(crate) fn from_appearance(values: &Appearance) -> Self {
        Self {
            color: values.color(appearance::STROKE_COLOR).unwrap_or_default(),
            width: values
                .number(appearance::STROKE_THICKNESS)
                .unwrap_or(DEFAULT_STROKE_THICKNESS),
        }
    }

    pub(crate) fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn width(&self) -> f32 {
        self.width
    }
}

/// Applies stroke color, opacity and width to an SVG element.
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}

pub(crate) use apply_stroke;

/// Applies the background color as fill, or white when none is set.
macro_rules! apply_fill {
    ($element:expr, $appearance:expr) => {{
        match $appearance.color(draftboard_core::diagram::appearance::BACKGROUND_COLOR) {
            Some(color) if color.is_transparent() => $element.set("fill", "none"),
            Some(color) => $element
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha()),
            None => $element.set("fill", "white"),
        }
    }};
}

pub(crate) use apply_fill;

/// Creates the element group of a shape, carrying its id and rotation.
pub(crate) fn shape_group(shape: &Shape) -> svg_element::Group {
    let transform = shape.transform();
    let group = svg_element::Group::new()
        .set("data-shape", shape.id().to_string())
        .set("data-renderer", shape.renderer());

    if transform.rotation() == 0.0 {
        group
    } else {
        let center = transform.position();
        group.set(
            "transform",
            format!(
                "rotate({} {} {})",
                transform.rotation(),
                center.x(),
                center.y()
            ),
        )
    }
}

/// Creates a single-line text element for the `TEXT` appearance value.
///
/// The horizontal anchor follows `TEXT_ALIGNMENT` (`left`, `center` or
/// `right`, default `center`).
pub(crate) fn text_element(shape: &Shape, bounds: Bounds, padding: f32) -> svg_element::Text {
    let values = shape.appearance();
    let content = values.text(appearance::TEXT).unwrap_or_default();
    let font_size = values
        .number(appearance::FONT_SIZE)
        .unwrap_or(DEFAULT_FONT_SIZE);

    let (anchor, x) = match values.text(appearance::TEXT_ALIGNMENT) {
        Some("left") => ("start", bounds.min_x() + padding),
        Some("right") => ("end", bounds.max_x() - padding),
        _ => ("middle", bounds.center().x()),
    };

    let mut text = svg_element::Text::new("")
        .set("x", x)
        .set("y", bounds.center().y())
        .set("text-anchor", anchor)
        .set("dominant-baseline", "central")
        .set("font-family", "sans-serif")
        .set("font-size", font_size)
        .add(SvgText::new(content));

    if let Some(color) = values.color(appearance::FOREGROUND_COLOR) {
        text = text
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
    }

    text
}

/// Debug overlay: dashed bounding box plus a handle on every corner.
pub(crate) fn debug_markers(shape: &Shape) -> svg_element::Group {
    let bounds = shape.transform().bounds();
    let outline = svg_element::Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
        .set("fill", "none")
        .set("stroke", DEBUG_COLOR)
        .set("stroke-dasharray", "4,2");

    bounds.corners().into_iter().fold(
        svg_element::Group::new()
            .set("class", "debug-markers")
            .add(outline),
        |group, corner| group.add(handle(corner)),
    )
}

fn handle(center: Point) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", center.x() - HANDLE_SIZE / 2.0)
        .set("y", center.y() - HANDLE_SIZE / 2.0)
        .set("width", HANDLE_SIZE)
        .set("height", HANDLE_SIZE)
        .set("fill", "white")
        .set("stroke", DEBUG_COLOR)
}

#[cfg(test)]
mod tests {
    use draftboard_core::{
        geometry::{Size, Transform},
        identifier::Id,
    };

    use super::*;

    fn shape() -> Shape {
        Shape::new(
            Id::new("probe"),
            "Rectangle",
            Transform::new(Point::new(50.0, 25.0), Size::new(100.0, 50.0)),
        )
    }

    #[test]
    fn test_stroke_defaults() {
        let stroke = Stroke::from_appearance(&Appearance::new());
        assert_eq!(stroke.color(), Color::default());
        assert_eq!(stroke.width(), DEFAULT_STROKE_THICKNESS);
    }

    #[test]
    fn test_shape_group_rotation() {
        let plain = shape_group(&shape()).to_string();
        assert!(!plain.contains("rotate"));

        let rotated = shape().with_transform(shape().transform().with_rotation(90.0));
        let group = shape_group(&rotated).to_string();
        assert!(group.contains("rotate(90 50 25)"));
        assert!(group.contains("data-shape=\"probe\""));
    }

    #[test]
    fn test_debug_markers_has_outline_and_handles() {
        let markers = debug_markers(&shape()).to_string();
        assert_eq!(markers.matches("<rect").count(), 5);
        assert!(markers.contains("stroke-dasharray"));
    }

    #[test]
    fn test_text_element_alignment() {
        let left = shape().with_appearance_value(appearance::TEXT_ALIGNMENT, "left");
        let text = text_element(&left, left.transform().bounds(), 4.0).to_string();
        assert!(text.contains("text-anchor=\"start\""));
        assert!(text.contains("x=\"4\""));
    }
}
