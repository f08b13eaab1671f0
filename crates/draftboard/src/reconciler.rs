//! Projection of the diagram model onto the scene.
//!
//! The [`Reconciler`] keeps one [`ShapeRef`] per shape id it has seen and
//! brings the [`Scene`] in line with a diagram snapshot in one pass:
//!
//! 1. flatten the diagram into paint order ([`flatten`]),
//! 2. detach every known element and drop the refs whose id is gone,
//! 3. walk the flattened shapes in order, creating refs for new ids and
//!    letting each ref either re-render or re-attach its element.
//!
//! Attaching in flattened order on every pass keeps the scene's paint order
//! identical to the diagram's depth-first order.
//!
//! Passes run to completion on the caller's thread; `&mut self` makes
//! overlapping passes impossible.

mod flatten;

pub use flatten::{Flattened, flatten};

use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    rc::Rc,
};

use log::{debug, error, warn};

use draftboard_core::{
    diagram::Diagram,
    identifier::Id,
    scene::{ElementId, Scene},
};

use crate::{
    error::DraftboardError,
    registry::RendererRegistry,
    shape_ref::{RenderOutcome, ShapeRef},
};

/// Counts of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Shapes whose renderer ran.
    pub rendered: usize,
    /// Unchanged shapes whose element was attached again.
    pub reattached: usize,
    /// Refs dropped because their id left the diagram.
    pub removed: usize,
    /// Unresolved ids skipped while flattening.
    pub dangling: usize,
}

/// Running totals over every pass of a reconciler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub passes: usize,
    pub failed_passes: usize,
    pub rendered: usize,
    pub reattached: usize,
    pub removed: usize,
    pub dangling: usize,
}

impl ReconcileStats {
    fn record(&mut self, summary: &PassSummary) {
        self.rendered += summary.rendered;
        self.reattached += summary.reattached;
        self.removed += summary.removed;
        self.dangling += summary.dangling;
    }
}

/// Owner of the scene and of every shape ref drawn on it.
#[derive(Debug)]
pub struct Reconciler {
    scene: Scene,
    registry: Rc<RendererRegistry>,
    show_debug_markers: bool,
    shape_refs_by_id: HashMap<Id, ShapeRef>,
    shape_ids_by_element: HashMap<ElementId, Id>,
    stats: ReconcileStats,
}

impl Reconciler {
    pub fn new(scene: Scene, registry: Rc<RendererRegistry>, show_debug_markers: bool) -> Self {
        Self {
            scene,
            registry,
            show_debug_markers,
            shape_refs_by_id: HashMap::new(),
            shape_ids_by_element: HashMap::new(),
            stats: ReconcileStats::default(),
        }
    }

    /// Runs one reconciliation pass. `None` reconciles an empty diagram.
    ///
    /// Safe to call with an unchanged diagram: unchanged shapes are only
    /// re-attached.
    ///
    /// # Errors
    ///
    /// Returns [`DraftboardError::UnresolvedRenderer`] when a shape seen for
    /// the first time, or one that switched renderer, names an unregistered
    /// renderer. The pass stops at that
    /// shape: earlier shapes are on the scene, later ones are not.
    pub fn reconcile(&mut self, diagram: Option<&Diagram>) -> Result<PassSummary, DraftboardError> {
        self.stats.passes += 1;

        let flattened = diagram.map(flatten).unwrap_or_default();
        let mut summary = PassSummary {
            dangling: flattened.dangling().len(),
            ..PassSummary::default()
        };

        if !flattened.dangling().is_empty() {
            let ids: Vec<String> = flattened.dangling().iter().map(Id::to_string).collect();
            warn!(dangling:? = ids; "Skipping unresolved item ids");
        }
        if !flattened.duplicates().is_empty() {
            let ids: Vec<String> = flattened.duplicates().iter().map(Id::to_string).collect();
            warn!(duplicates:? = ids; "Skipping items linked more than once");
        }

        let live_ids: HashSet<Id> = flattened.shapes().iter().map(|shape| shape.id()).collect();
        summary.removed = self.prune(&live_ids);

        let result = self.render_all(flattened, &mut summary);
        self.stats.record(&summary);

        match result {
            Ok(()) => {
                debug!(
                    rendered = summary.rendered,
                    reattached = summary.reattached,
                    removed = summary.removed,
                    dangling = summary.dangling;
                    "Reconciliation pass complete"
                );
                Ok(summary)
            }
            Err(err) => {
                self.stats.failed_passes += 1;
                error!(err:% = err; "Reconciliation pass aborted");
                Err(err)
            }
        }
    }

    /// Detaches every element and drops the refs of ids that are gone.
    fn prune(&mut self, live_ids: &HashSet<Id>) -> usize {
        self.scene.detach_all();

        let stale: Vec<Id> = self
            .shape_refs_by_id
            .keys()
            .filter(|id| !live_ids.contains(id))
            .copied()
            .collect();
        for id in &stale {
            self.drop_shape_ref(*id);
        }

        stale.len()
    }

    /// Removes the ref of `id` and frees its element.
    fn drop_shape_ref(&mut self, id: Id) {
        if let Some(shape_ref) = self.shape_refs_by_id.remove(&id) {
            if let Some(element) = shape_ref.element() {
                self.shape_ids_by_element.remove(&element);
            }
            shape_ref.dispose(&mut self.scene);
        }
    }

    fn render_all(
        &mut self,
        flattened: Flattened,
        summary: &mut PassSummary,
    ) -> Result<(), DraftboardError> {
        for shape in flattened.into_shapes() {
            let id = shape.id();

            let rebound = self
                .shape_refs_by_id
                .get(&id)
                .is_some_and(|shape_ref| shape_ref.renderer_key() != shape.renderer());
            if rebound {
                debug!(shape:% = id, renderer = shape.renderer(); "Shape switched renderer");
                self.drop_shape_ref(id);
            }

            let shape_ref = match self.shape_refs_by_id.entry(id) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let renderer = self
                        .registry
                        .get(shape.renderer())
                        .ok_or_else(|| DraftboardError::unresolved_renderer(shape.renderer(), id))?;
                    entry.insert(ShapeRef::new(renderer, self.show_debug_markers))
                }
            };

            let previous = shape_ref.element();
            match shape_ref.render(&shape, &mut self.scene) {
                RenderOutcome::Rendered => summary.rendered += 1,
                RenderOutcome::Reattached => summary.reattached += 1,
            }

            let current = shape_ref.element();
            if let Some(previous) = previous.filter(|previous| Some(*previous) != current) {
                self.shape_ids_by_element.remove(&previous);
            }
            if let Some(element) = current {
                self.shape_ids_by_element.insert(element, id);
            }
        }

        Ok(())
    }

    /// The ref drawn for a shape id.
    pub fn shape_ref(&self, id: Id) -> Option<&ShapeRef> {
        self.shape_refs_by_id.get(&id)
    }

    /// The ref owning a scene element.
    pub fn shape_ref_by_element(&self, element: ElementId) -> Option<&ShapeRef> {
        self.shape_id_by_element(element)
            .and_then(|id| self.shape_refs_by_id.get(&id))
    }

    /// The id of the shape a scene element was drawn for.
    pub fn shape_id_by_element(&self, element: ElementId) -> Option<Id> {
        self.shape_ids_by_element.get(&element).copied()
    }

    /// Number of shape refs, one per live shape id.
    pub fn len(&self) -> usize {
        self.shape_refs_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape_refs_by_id.is_empty()
    }

    /// Number of entries in the element lookup table.
    pub fn element_count(&self) -> usize {
        self.shape_ids_by_element.len()
    }

    pub fn stats(&self) -> ReconcileStats {
        self.stats
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene root settings, such as size and zoom.
    pub(crate) fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn show_debug_markers(&self) -> bool {
        self.show_debug_markers
    }
}
