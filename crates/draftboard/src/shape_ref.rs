//! Binding between a shape and its rendered scene element.

use std::rc::Rc;

use log::trace;

use draftboard_core::{
    diagram::Shape,
    scene::{ElementId, Scene},
};

use crate::renderer::Renderer;

/// What [`ShapeRef::render`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The renderer ran and produced a new element.
    Rendered,
    /// The existing element was attached again without rendering.
    Reattached,
}

/// Pairs the last rendered value of a shape with the element drawn for it.
///
/// Whether a shape changed is decided by pointer identity of the `Rc<Shape>`
/// rather than by value. Shapes are immutable and every change allocates a
/// new value, so identity is both sufficient and cheap.
#[derive(Debug)]
pub struct ShapeRef {
    last_shape: Option<Rc<Shape>>,
    element: Option<ElementId>,
    renderer: Rc<dyn Renderer>,
    show_debug_markers: bool,
}

impl ShapeRef {
    pub fn new(renderer: Rc<dyn Renderer>, show_debug_markers: bool) -> Self {
        Self {
            last_shape: None,
            element: None,
            renderer,
            show_debug_markers,
        }
    }

    /// Detaches the element from the scene, keeping it for a later re-attach.
    pub fn remove(&self, scene: &mut Scene) {
        if let Some(element) = self.element {
            scene.detach(element);
        }
    }

    /// Brings the scene in line with `shape`.
    ///
    /// A new shape value, or a missing element, triggers a full render that
    /// replaces (and frees) the previous element. Otherwise the existing
    /// element is attached again on top of the scene.
    pub fn render(&mut self, shape: &Rc<Shape>, scene: &mut Scene) -> RenderOutcome {
        let unchanged = self
            .last_shape
            .as_ref()
            .is_some_and(|last| Rc::ptr_eq(last, shape));

        let outcome = match self.element {
            Some(element) if unchanged && scene.attach(element) => {
                trace!(shape:% = shape.id(), element:% = element; "Re-attached unchanged shape");
                RenderOutcome::Reattached
            }
            previous => {
                if let Some(previous) = previous {
                    scene.remove(previous);
                }

                self.renderer.set_context(scene);
                let node = self.renderer.render(shape, self.show_debug_markers);
                let element = scene.insert(node);
                scene.attach(element);
                self.element = Some(element);

                trace!(shape:% = shape.id(), element:% = element; "Rendered shape");
                RenderOutcome::Rendered
            }
        };

        self.last_shape = Some(Rc::clone(shape));
        outcome
    }

    /// Detaches and frees the element. Used when the shape left the diagram.
    pub fn dispose(self, scene: &mut Scene) {
        if let Some(element) = self.element {
            scene.remove(element);
        }
    }

    /// The registry key of the renderer this ref draws with.
    pub fn renderer_key(&self) -> &str {
        self.renderer.identifier()
    }

    /// The element currently drawn for the shape, if any.
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    /// The shape value the element was last rendered or attached for.
    pub fn last_shape(&self) -> Option<&Rc<Shape>> {
        self.last_shape.as_ref()
    }

    pub fn show_debug_markers(&self) -> bool {
        self.show_debug_markers
    }
}
