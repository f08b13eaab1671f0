//! The scene surface rendered shapes are attached to.
//!
//! The [`Scene`] is an arena of [`SceneElement`]s addressed by [`ElementId`]
//! plus an ordered list of attached elements. Elements are created detached;
//! attaching appends them to the top of the paint order. Detached elements
//! stay alive in the arena until they are removed, so a detached element can
//! be re-attached without rebuilding it.
//!
//! # Example
//!
//! ```
//! use draftboard_core::scene::Scene;
//! use svg::node::element::Group;
//!
//! let mut scene = Scene::new();
//! let first = scene.insert(Group::new());
//! let second = scene.insert(Group::new());
//!
//! scene.attach(first);
//! scene.attach(second);
//! assert_eq!(scene.attached(), vec![first, second]);
//!
//! // Re-attaching moves the element to the top, it never duplicates it.
//! scene.attach(first);
//! assert_eq!(scene.attached(), vec![second, first]);
//! ```

use std::fmt;

use indexmap::IndexSet;
use slotmap::{Key, SlotMap};
use svg::{Document, node::element as svg_element};

use crate::{color::Color, geometry::Size};

slotmap::new_key_type! {
    /// Identity of an element on the scene, assigned at insertion.
    pub struct ElementId;
}

impl ElementId {
    /// Returns the numeric form of the id, stable for the element's lifetime.
    pub fn as_u64(self) -> u64 {
        self.data().as_ffi()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.as_u64())
    }
}

/// A rendered element owned by the scene.
#[derive(Debug, Clone)]
pub struct SceneElement {
    node: svg_element::Group,
}

impl SceneElement {
    /// The SVG group drawn for this element.
    pub fn node(&self) -> &svg_element::Group {
        &self.node
    }
}

/// Mutable scene root.
#[derive(Debug)]
pub struct Scene {
    elements: SlotMap<ElementId, SceneElement>,
    attached: IndexSet<ElementId>,
    size: Size,
    zoom: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            elements: SlotMap::with_key(),
            attached: IndexSet::new(),
            size: Size::default(),
            zoom: 1.0,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene with the given logical size.
    pub fn with_size(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Adds a detached element and returns its id.
    pub fn insert(&mut self, node: svg_element::Group) -> ElementId {
        self.elements.insert(SceneElement { node })
    }

    /// Attaches an element on top of the paint order.
    ///
    /// Returns `false` if the element does not exist.
    pub fn attach(&mut self, id: ElementId) -> bool {
        if !self.elements.contains_key(id) {
            return false;
        }
        self.attached.shift_remove(&id);
        self.attached.insert(id);
        true
    }

    /// Detaches an element, keeping it in the arena.
    ///
    /// Returns `false` if the element was not attached.
    pub fn detach(&mut self, id: ElementId) -> bool {
        self.attached.shift_remove(&id)
    }

    /// Detaches every element, keeping them all in the arena.
    pub fn detach_all(&mut self) {
        self.attached.clear();
    }

    /// Detaches and frees an element.
    pub fn remove(&mut self, id: ElementId) -> Option<SceneElement> {
        self.attached.shift_remove(&id);
        self.elements.remove(id)
    }

    pub fn get(&self, id: ElementId) -> Option<&SceneElement> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn is_attached(&self, id: ElementId) -> bool {
        self.attached.contains(&id)
    }

    /// Ids of the attached elements, bottom to top.
    pub fn attached(&self) -> Vec<ElementId> {
        self.attached.iter().copied().collect()
    }

    /// Number of live elements, attached or not.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Logical size of the canvas.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    /// Pixel size of the canvas: logical size times zoom.
    pub fn zoomed_size(&self) -> Size {
        self.size.scale(self.zoom)
    }

    /// Builds an SVG document with the attached elements in paint order,
    /// optionally painted over a background.
    pub fn to_document(&self, background: Option<Color>) -> Document {
        let pixels = self.zoomed_size();
        let mut document = Document::new()
            .set("width", pixels.width())
            .set("height", pixels.height())
            .set(
                "viewBox",
                (0.0, 0.0, self.size.width(), self.size.height()),
            );

        if let Some(color) = background {
            document = document.add(
                svg_element::Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            );
        }

        for id in &self.attached {
            if let Some(element) = self.elements.get(*id) {
                document = document.add(
                    element
                        .node
                        .clone()
                        .set("data-element", id.to_string()),
                );
            }
        }

        document
    }
}
