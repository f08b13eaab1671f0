//! Flattening the diagram tree into paint order.

use std::{collections::HashSet, rc::Rc};

use draftboard_core::{
    diagram::{Diagram, DiagramItem, Shape},
    identifier::Id,
};

/// Shapes of a diagram in paint order, plus the ids that did not resolve.
#[derive(Debug, Default)]
pub struct Flattened {
    shapes: Vec<Rc<Shape>>,
    dangling: Vec<Id>,
    duplicates: Vec<Id>,
}

impl Flattened {
    /// Shapes in paint order, bottom first.
    pub fn shapes(&self) -> &[Rc<Shape>] {
        &self.shapes
    }

    /// Ids referenced by the root list or a group that have no item.
    pub fn dangling(&self) -> &[Id] {
        &self.dangling
    }

    /// Ids reached more than once; only the first occurrence is kept.
    pub fn duplicates(&self) -> &[Id] {
        &self.duplicates
    }

    pub fn into_shapes(self) -> Vec<Rc<Shape>> {
        self.shapes
    }
}

/// Walks `diagram` depth-first in root order and collects its shapes.
///
/// Groups are replaced by their children, in order. Ids that do not resolve
/// are skipped and reported as dangling: a batched update may briefly
/// reference items that are not inserted yet. An id reached a second time
/// (an item linked twice, or a group containing itself) is skipped too, so
/// malformed input can neither loop nor paint a shape twice.
///
/// # Example
///
/// ```
/// use draftboard::reconciler::flatten;
/// use draftboard_core::{
///     diagram::{Diagram, Shape},
///     geometry::Transform,
///     identifier::Id,
/// };
///
/// let shape = |name: &str| Shape::new(Id::new(name), "Rectangle", Transform::default());
/// let diagram = Diagram::new(Id::new("doc"))
///     .with_shape(shape("s2"))
///     .with_shape(shape("s3"))
///     .with_group(Id::new("g1"), vec![Id::new("s2"), Id::new("s3")])
///     .with_shape(shape("s1"));
///
/// let order: Vec<String> = flatten(&diagram)
///     .shapes()
///     .iter()
///     .map(|shape| shape.id().to_string())
///     .collect();
/// assert_eq!(order, ["s2", "s3", "s1"]);
/// ```
pub fn flatten(diagram: &Diagram) -> Flattened {
    let mut flattened = Flattened::default();
    let mut visited = HashSet::new();
    let mut pending: Vec<Id> = diagram.root_ids().iter().rev().copied().collect();

    while let Some(id) = pending.pop() {
        let Some(item) = diagram.item(id) else {
            flattened.dangling.push(id);
            continue;
        };
        if !visited.insert(id) {
            flattened.duplicates.push(id);
            continue;
        }

        match item {
            DiagramItem::Shape(shape) => flattened.shapes.push(Rc::clone(shape)),
            DiagramItem::Group(group) => pending.extend(group.child_ids().iter().rev().copied()),
        }
    }

    flattened
}
