//! Diagram items: shapes and groups.

use std::rc::Rc;

use crate::{
    diagram::appearance::{Appearance, AppearanceValue},
    geometry::Transform,
    identifier::Id,
};

/// A leaf diagram item.
///
/// Shapes are immutable values: a change produces a new `Shape` with the
/// same id. Diagrams share shapes through `Rc`, and a new allocation is the
/// signal that something about the shape changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: Id,
    renderer: String,
    transform: Transform,
    appearance: Appearance,
}

impl Shape {
    /// Creates a shape drawn by the renderer registered under `renderer`.
    pub fn new(id: Id, renderer: impl Into<String>, transform: Transform) -> Self {
        Self {
            id,
            renderer: renderer.into(),
            transform,
            appearance: Appearance::default(),
        }
    }

    /// Replaces the whole appearance (builder style).
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Returns a copy of this shape with one appearance value changed.
    pub fn with_appearance_value(&self, key: &str, value: impl Into<AppearanceValue>) -> Self {
        let mut shape = self.clone();
        shape.appearance.set(key, value);
        shape
    }

    /// Returns a copy of this shape with a new transform.
    pub fn with_transform(&self, transform: Transform) -> Self {
        let mut shape = self.clone();
        shape.transform = transform;
        shape
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// The key of the renderer that draws this shape.
    pub fn renderer(&self) -> &str {
        &self.renderer
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }
}

/// An internal diagram item holding an ordered list of children.
///
/// Child order is paint order: later children are drawn on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: Id,
    child_ids: Vec<Id>,
}

impl Group {
    pub fn new(id: Id, child_ids: Vec<Id>) -> Self {
        Self { id, child_ids }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn child_ids(&self) -> &[Id] {
        &self.child_ids
    }

    pub(crate) fn without_children(&self, removed: &dyn Fn(&Id) -> bool) -> Self {
        Self {
            id: self.id,
            child_ids: self
                .child_ids
                .iter()
                .filter(|id| !removed(id))
                .copied()
                .collect(),
        }
    }
}

/// A node of the diagram tree.
#[derive(Debug, Clone)]
pub enum DiagramItem {
    Shape(Rc<Shape>),
    Group(Rc<Group>),
}

impl DiagramItem {
    pub fn id(&self) -> Id {
        match self {
            Self::Shape(shape) => shape.id(),
            Self::Group(group) => group.id(),
        }
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape(_))
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    pub fn as_shape(&self) -> Option<&Rc<Shape>> {
        match self {
            Self::Shape(shape) => Some(shape),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Rc<Group>> {
        match self {
            Self::Shape(_) => None,
            Self::Group(group) => Some(group),
        }
    }
}

impl From<Shape> for DiagramItem {
    fn from(shape: Shape) -> Self {
        Self::Shape(Rc::new(shape))
    }
}

impl From<Group> for DiagramItem {
    fn from(group: Group) -> Self {
        Self::Group(Rc::new(group))
    }
}
