//! Commands producing new diagrams.
//!
//! These are issued by interaction code (selection, property panels, drag
//! and resize handles). Each returns a fresh [`Diagram`]; shapes that are
//! not affected keep their `Rc` identity.

use std::{collections::HashSet, rc::Rc};

use log::debug;

use super::{AppearanceValue, Diagram, DiagramItem, Shape};
use crate::{geometry::Bounds, identifier::Id};

impl Diagram {
    /// Replaces the selection. Ids that do not resolve are dropped.
    pub fn select_items(&self, item_ids: &[Id]) -> Self {
        let mut diagram = self.clone();
        diagram.selected_ids = item_ids
            .iter()
            .filter(|id| self.items.contains_key(id))
            .copied()
            .collect();

        debug!(diagram:% = self.id, selected = diagram.selected_ids.len(); "Selection changed");
        diagram
    }

    /// Sets one appearance value on the listed shapes and on every shape
    /// inside the listed groups.
    ///
    /// Shapes that already carry an equal value are left untouched.
    pub fn change_items_appearance(
        &self,
        item_ids: &[Id],
        key: &str,
        value: impl Into<AppearanceValue>,
    ) -> Self {
        let value = value.into();
        debug!(diagram:% = self.id, key; "Changing item appearance");

        self.update_shapes(item_ids, |shape| {
            if shape.appearance().get(key) == Some(&value) {
                None
            } else {
                Some(shape.with_appearance_value(key, value.clone()))
            }
        })
    }

    /// Maps the transforms of the listed items from `old_bounds` into
    /// `new_bounds`. Groups move and scale all of their descendant shapes.
    pub fn transform_items(&self, item_ids: &[Id], old_bounds: Bounds, new_bounds: Bounds) -> Self {
        debug!(diagram:% = self.id, items = item_ids.len(); "Transforming items");

        self.update_shapes(item_ids, |shape| {
            let transform = shape.transform().map_between(old_bounds, new_bounds);
            Some(shape.with_transform(transform))
        })
    }

    /// Removes the listed items, together with everything inside listed
    /// groups, and unlinks them from the root list, groups and selection.
    pub fn remove_items(&self, item_ids: &[Id]) -> Self {
        let removed: HashSet<Id> = self.item_ids_under(item_ids).into_iter().collect();
        debug!(diagram:% = self.id, removed = removed.len(); "Removing items");

        let mut diagram = self.clone();
        diagram.items.retain(|id, _| !removed.contains(id));
        diagram.root_ids.retain(|id| !removed.contains(id));
        diagram.selected_ids.retain(|id| !removed.contains(id));

        for item in diagram.items.values_mut() {
            let replacement = match item {
                DiagramItem::Group(group)
                    if group.child_ids().iter().any(|id| removed.contains(id)) =>
                {
                    Some(group.without_children(&|id| removed.contains(id)))
                }
                _ => None,
            };
            if let Some(group) = replacement {
                *item = DiagramItem::Group(Rc::new(group));
            }
        }

        diagram
    }

    /// Returns the bounds enclosing every shape under the listed items.
    pub fn bounds_of(&self, item_ids: &[Id]) -> Option<Bounds> {
        self.item_ids_under(item_ids)
            .into_iter()
            .filter_map(|id| self.shape(id))
            .map(|shape| shape.transform().bounds())
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Resolves the listed ids and the descendants of listed groups, in
    /// depth-first order. Unresolved ids are skipped, each id is reported once.
    fn item_ids_under(&self, item_ids: &[Id]) -> Vec<Id> {
        let mut visited = HashSet::new();
        let mut result = Vec::new();
        let mut pending: Vec<Id> = item_ids.iter().rev().copied().collect();

        while let Some(id) = pending.pop() {
            let Some(item) = self.items.get(&id) else {
                continue;
            };
            if !visited.insert(id) {
                continue;
            }
            result.push(id);
            if let DiagramItem::Group(group) = item {
                pending.extend(group.child_ids().iter().rev().copied());
            }
        }

        result
    }

    fn update_shapes(
        &self,
        item_ids: &[Id],
        mut update: impl FnMut(&Shape) -> Option<Shape>,
    ) -> Self {
        let mut diagram = self.clone();

        for id in self.item_ids_under(item_ids) {
            let Some(shape) = self.shape(id) else {
                continue;
            };
            if let Some(updated) = update(shape) {
                diagram
                    .items
                    .insert(id, DiagramItem::Shape(Rc::new(updated)));
            }
        }

        diagram
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{
        diagram::appearance::{STROKE_COLOR, TEXT},
        geometry::{Point, Size, Transform},
    };

    fn shape(name: &str, x: f32) -> Shape {
        Shape::new(
            Id::new(name),
            "Rectangle",
            Transform::new(Point::new(x, 10.0), Size::new(10.0, 10.0)),
        )
    }

    /// root: [group(a, b), c]
    fn sample() -> Diagram {
        Diagram::new(Id::new("doc"))
            .with_shape(shape("a", 5.0))
            .with_shape(shape("b", 25.0))
            .with_shape(shape("c", 45.0))
            .with_group(Id::new("g"), vec![Id::new("a"), Id::new("b")])
            .with_root_ids(vec![Id::new("g"), Id::new("c")])
    }

    #[test]
    fn test_select_items_drops_unknown_ids() {
        let diagram = sample();
        let selected = diagram.select_items(&[Id::new("c"), Id::new("missing"), Id::new("g")]);

        let ids: Vec<Id> = selected.selected_ids().iter().copied().collect();
        assert_eq!(ids, vec![Id::new("c"), Id::new("g")]);
        assert!(diagram.selected_ids().is_empty());
    }

    #[test]
    fn test_select_items_preserves_shape_identity() {
        let diagram = sample();
        let selected = diagram.select_items(&[Id::new("a")]);

        let before = diagram.shape(Id::new("a")).unwrap();
        let after = selected.shape(Id::new("a")).unwrap();
        assert!(Rc::ptr_eq(before, after));
    }

    #[test]
    fn test_change_items_appearance_replaces_only_targets() {
        let diagram = sample();
        let changed = diagram.change_items_appearance(&[Id::new("a")], TEXT, "hello");

        let a_before = diagram.shape(Id::new("a")).unwrap();
        let a_after = changed.shape(Id::new("a")).unwrap();
        assert!(!Rc::ptr_eq(a_before, a_after));
        assert_eq!(a_after.appearance().text(TEXT), Some("hello"));

        let b_before = diagram.shape(Id::new("b")).unwrap();
        let b_after = changed.shape(Id::new("b")).unwrap();
        assert!(Rc::ptr_eq(b_before, b_after));
    }

    #[test]
    fn test_change_items_appearance_expands_groups() {
        let diagram = sample();
        let changed = diagram.change_items_appearance(&[Id::new("g")], STROKE_COLOR, "red");

        for name in ["a", "b"] {
            let shape = changed.shape(Id::new(name)).unwrap();
            assert_eq!(shape.appearance().text(STROKE_COLOR), Some("red"));
        }
        assert_eq!(
            changed
                .shape(Id::new("c"))
                .unwrap()
                .appearance()
                .text(STROKE_COLOR),
            None
        );
    }

    #[test]
    fn test_change_items_appearance_equal_value_keeps_identity() {
        let diagram = sample().change_items_appearance(&[Id::new("c")], TEXT, "same");
        let again = diagram.change_items_appearance(&[Id::new("c")], TEXT, "same");

        assert!(Rc::ptr_eq(
            diagram.shape(Id::new("c")).unwrap(),
            again.shape(Id::new("c")).unwrap()
        ));
    }

    #[test]
    fn test_transform_items_moves_group_children() {
        let diagram = sample();
        let old_bounds = diagram.bounds_of(&[Id::new("g")]).unwrap();
        assert_approx_eq!(f32, old_bounds.min_x(), 0.0);
        assert_approx_eq!(f32, old_bounds.max_x(), 30.0);

        let new_bounds = Bounds::new_from_top_left(
            Point::new(100.0, 5.0),
            Size::new(old_bounds.width(), old_bounds.height()),
        );
        let moved = diagram.transform_items(&[Id::new("g")], old_bounds, new_bounds);

        let a = moved.shape(Id::new("a")).unwrap();
        let b = moved.shape(Id::new("b")).unwrap();
        assert_approx_eq!(f32, a.transform().position().x(), 105.0);
        assert_approx_eq!(f32, b.transform().position().x(), 125.0);
        assert_approx_eq!(f32, a.transform().position().y(), 10.0);
        assert!(Rc::ptr_eq(
            diagram.shape(Id::new("c")).unwrap(),
            moved.shape(Id::new("c")).unwrap()
        ));
    }

    #[test]
    fn test_remove_items_unlinks_everywhere() {
        let diagram = sample().select_items(&[Id::new("a"), Id::new("c")]);
        let removed = diagram.remove_items(&[Id::new("a"), Id::new("c")]);

        assert!(removed.item(Id::new("a")).is_none());
        assert!(removed.item(Id::new("c")).is_none());
        assert_eq!(removed.root_ids(), &[Id::new("g")]);
        assert_eq!(
            removed.group(Id::new("g")).unwrap().child_ids(),
            &[Id::new("b")]
        );
        assert!(removed.selected_ids().is_empty());
    }

    #[test]
    fn test_remove_group_removes_descendants() {
        let removed = sample().remove_items(&[Id::new("g")]);

        assert_eq!(removed.len(), 1);
        assert_eq!(removed.root_ids(), &[Id::new("c")]);
    }

    #[test]
    fn test_bounds_of_unknown_items() {
        assert!(sample().bounds_of(&[Id::new("missing")]).is_none());
    }
}
