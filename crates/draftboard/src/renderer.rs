//! The renderer capability.
//!
//! A [`Renderer`] turns one [`Shape`] into one scene element. Renderers are
//! registered by key in a [`RendererRegistry`](crate::registry::RendererRegistry)
//! and selected through [`Shape::renderer`].

use std::fmt;

use svg::node::element as svg_element;

use draftboard_core::{diagram::Shape, scene::Scene};

/// Pluggable component that draws shapes of one kind.
pub trait Renderer: fmt::Debug {
    /// The registry key of this renderer.
    fn identifier(&self) -> &str;

    /// Binds the renderer to the scene root it is about to render into.
    ///
    /// Called before every full render of a shape. The default does nothing.
    fn set_context(&self, _scene: &Scene) {}

    /// Draws `shape` as a single SVG group.
    ///
    /// The output depends only on `shape` and `show_debug_markers`; it must
    /// not affect any other shape's element.
    fn render(&self, shape: &Shape, show_debug_markers: bool) -> svg_element::Group;
}
