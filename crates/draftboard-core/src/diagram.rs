//! The immutable diagram model.
//!
//! A [`Diagram`] is an ordered tree of [`DiagramItem`]s: shapes are leaves,
//! groups are internal nodes holding ordered child ids. Items are stored in a
//! single map keyed by [`Id`] and linked by id, so shapes and groups share
//! one key space.
//!
//! Diagrams are never mutated in place. Every command returns a new
//! `Diagram` that shares all untouched items with its predecessor through
//! `Rc`, which lets consumers detect changed shapes by pointer identity.
//!
//! # Example
//!
//! ```
//! use draftboard_core::{
//!     diagram::{Diagram, Shape},
//!     geometry::{Point, Size, Transform},
//!     identifier::Id,
//! };
//!
//! let transform = Transform::new(Point::new(50.0, 20.0), Size::new(100.0, 40.0));
//! let diagram = Diagram::new(Id::new("page"))
//!     .with_shape(Shape::new(Id::new("title"), "Label", transform))
//!     .with_shape(Shape::new(Id::new("ok"), "Button", transform))
//!     .with_group(Id::new("form"), vec![Id::new("title"), Id::new("ok")]);
//!
//! assert_eq!(diagram.root_ids(), &[Id::new("form")]);
//! assert_eq!(diagram.len(), 3);
//! ```

pub mod appearance;

mod commands;
mod item;

pub use appearance::{Appearance, AppearanceValue};
pub use item::{DiagramItem, Group, Shape};

use std::{collections::HashMap, rc::Rc};

use indexmap::IndexSet;

use crate::identifier::Id;

/// Root aggregate of the diagram model.
#[derive(Debug, Clone)]
pub struct Diagram {
    id: Id,
    root_ids: Vec<Id>,
    items: HashMap<Id, DiagramItem>,
    selected_ids: IndexSet<Id>,
}

impl Diagram {
    /// Creates an empty diagram.
    pub fn new(id: Id) -> Self {
        Self {
            id,
            root_ids: Vec::new(),
            items: HashMap::new(),
            selected_ids: IndexSet::new(),
        }
    }

    /// Adds a shape and appends it to the root list (builder style).
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.root_ids.push(shape.id());
        self.items.insert(shape.id(), shape.into());
        self
    }

    /// Wraps existing items into a new group (builder style).
    ///
    /// The children are unlinked from the root list and the group is
    /// appended to it, so the group paints above the remaining root items.
    pub fn with_group(mut self, group_id: Id, child_ids: Vec<Id>) -> Self {
        self.root_ids.retain(|id| !child_ids.contains(id));
        self.root_ids.push(group_id);
        self.items
            .insert(group_id, Group::new(group_id, child_ids).into());
        self
    }

    /// Inserts an item without linking it from the root list or any group.
    pub fn with_item(mut self, item: DiagramItem) -> Self {
        self.items.insert(item.id(), item);
        self
    }

    /// Replaces the root list as is, without checking that the ids resolve.
    pub fn with_root_ids(mut self, root_ids: Vec<Id>) -> Self {
        self.root_ids = root_ids;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Ids of the top-level items, in paint order.
    pub fn root_ids(&self) -> &[Id] {
        &self.root_ids
    }

    pub fn item(&self, id: Id) -> Option<&DiagramItem> {
        self.items.get(&id)
    }

    pub fn shape(&self, id: Id) -> Option<&Rc<Shape>> {
        self.item(id).and_then(DiagramItem::as_shape)
    }

    pub fn group(&self, id: Id) -> Option<&Rc<Group>> {
        self.item(id).and_then(DiagramItem::as_group)
    }

    pub fn items(&self) -> impl Iterator<Item = &DiagramItem> {
        self.items.values()
    }

    /// Ids of the selected items, in selection order.
    pub fn selected_ids(&self) -> &IndexSet<Id> {
        &self.selected_ids
    }

    /// Number of items stored in the diagram, linked or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
