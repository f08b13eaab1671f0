//! The canvas host: consumes editor state snapshots and keeps the scene
//! in sync with them.

use std::rc::Rc;

use indexmap::IndexSet;
use log::{debug, info};

use draftboard_core::{
    diagram::Diagram,
    geometry::Size,
    identifier::Id,
    scene::Scene,
};

use crate::{
    config::AppConfig,
    error::DraftboardError,
    export,
    reconciler::{PassSummary, Reconciler},
    registry::RendererRegistry,
};

/// Read-only snapshot of the editor state the canvas depends on.
#[derive(Debug, Clone)]
pub struct EditorState {
    diagram: Option<Rc<Diagram>>,
    zoom: f32,
    size: Size,
}

impl EditorState {
    pub fn new(diagram: Option<Rc<Diagram>>, zoom: f32, size: Size) -> Self {
        Self {
            diagram,
            zoom,
            size,
        }
    }

    /// Returns a snapshot showing another diagram.
    pub fn with_diagram(&self, diagram: Option<Rc<Diagram>>) -> Self {
        Self {
            diagram,
            ..self.clone()
        }
    }

    /// Returns a snapshot with another zoom factor.
    pub fn with_zoom(&self, zoom: f32) -> Self {
        Self {
            zoom,
            ..self.clone()
        }
    }

    /// The selected diagram, if any.
    pub fn diagram(&self) -> Option<&Rc<Diagram>> {
        self.diagram.as_ref()
    }

    /// Selected item ids of the selected diagram.
    pub fn selected_ids(&self) -> IndexSet<Id> {
        self.diagram
            .as_ref()
            .map(|diagram| diagram.selected_ids().clone())
            .unwrap_or_default()
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Logical canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Pixel canvas size: logical size times zoom.
    pub fn zoomed_size(&self) -> Size {
        self.size.scale(self.zoom)
    }
}

/// Editor canvas backed by a [`Reconciler`].
///
/// # Example
///
/// ```
/// use std::rc::Rc;
///
/// use draftboard::{
///     canvas::{Canvas, EditorState},
///     config::AppConfig,
///     registry::RendererRegistry,
/// };
/// use draftboard_core::{
///     diagram::{Diagram, Shape},
///     geometry::{Point, Size, Transform},
///     identifier::Id,
/// };
///
/// let registry = Rc::new(RendererRegistry::with_builtin_renderers());
/// let mut canvas = Canvas::new(&AppConfig::default(), registry).unwrap();
///
/// let diagram = Diagram::new(Id::new("page")).with_shape(Shape::new(
///     Id::new("box"),
///     "Rectangle",
///     Transform::new(Point::new(50.0, 50.0), Size::new(40.0, 40.0)),
/// ));
/// let state = EditorState::new(Some(Rc::new(diagram)), 1.0, Size::new(200.0, 100.0));
///
/// canvas.on_state_changed(&state).unwrap();
/// assert!(canvas.to_svg().unwrap().contains("<rect"));
/// ```
#[derive(Debug)]
pub struct Canvas {
    reconciler: Reconciler,
    config: AppConfig,
    selected_ids: IndexSet<Id>,
}

impl Canvas {
    /// Initializes the scene root and runs the initial, empty pass.
    pub fn new(
        config: &AppConfig,
        registry: Rc<RendererRegistry>,
    ) -> Result<Self, DraftboardError> {
        let mut scene = Scene::new();
        scene.set_zoom(config.render().zoom());

        let mut canvas = Self {
            reconciler: Reconciler::new(scene, registry, config.render().show_debug_markers()),
            config: config.clone(),
            selected_ids: IndexSet::new(),
        };
        canvas.reconciler.reconcile(None)?;

        info!(
            show_debug_markers = config.render().show_debug_markers(),
            zoom = config.render().zoom();
            "Canvas initialized"
        );
        Ok(canvas)
    }

    /// Applies a new editor state snapshot.
    ///
    /// Reconciles on every call, including when the diagram did not change;
    /// unchanged shapes are only re-attached.
    pub fn on_state_changed(
        &mut self,
        state: &EditorState,
    ) -> Result<PassSummary, DraftboardError> {
        let scene = self.reconciler.scene_mut();
        scene.set_size(state.size());
        scene.set_zoom(state.zoom());
        self.selected_ids = state.selected_ids();

        debug!(
            diagram:? = state.diagram().map(|diagram| diagram.id().to_string()),
            selected = self.selected_ids.len();
            "Editor state changed"
        );

        self.reconciler.reconcile(state.diagram().map(Rc::as_ref))
    }

    /// Item ids selected in the last applied state.
    pub fn selected_ids(&self) -> &IndexSet<Id> {
        &self.selected_ids
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    pub fn scene(&self) -> &Scene {
        self.reconciler.scene()
    }

    /// Exports the current scene as an SVG string.
    pub fn to_svg(&self) -> Result<String, DraftboardError> {
        export::render_svg(self.scene(), self.config.style())
    }
}
